use clap::{Args, Parser, Subcommand};
use eq_app::{
    AppResult, LabRequest, Readout, SweepRequest, ask_tutor, evaluate_project,
    evaluate_request, evaluate_scenario, list_scenarios, load_project, sweep_request, to_json,
};
use eq_beaker::BeakerScene;
use eq_salts::{IonRole, filter_salt_catalog};
use eq_tutor::{ChatRole, DisabledTutor, format_context};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "eq-cli")]
#[command(about = "EquiliSolve CLI - Solubility equilibrium simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct LabArgs {
    /// Salt id, formula or name (e.g. agcl, PbI2, "barium sulfate")
    #[arg(long)]
    salt: String,
    /// Solvent volume in liters
    #[arg(long, default_value_t = 1.0)]
    volume: f64,
    /// Added salt mass in milligrams
    #[arg(long, default_value_t = 0.0)]
    mass: f64,
    /// Background concentration of the salt's cation in mol/L
    #[arg(long, default_value_t = 0.0)]
    cation: f64,
    /// Background concentration of the salt's anion in mol/L
    #[arg(long, default_value_t = 0.0)]
    anion: f64,
    /// Solve the full common-ion equilibrium instead of the approximation
    #[arg(long)]
    newton: bool,
}

impl LabArgs {
    fn request(&self) -> LabRequest {
        LabRequest {
            salt: self.salt.clone(),
            volume_l: self.volume,
            added_mass_mg: self.mass,
            common_cation_m: self.cation,
            common_anion_m: self.anion,
            newton: self.newton,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog salts, optionally filtered
    Salts {
        /// Case-insensitive filter on id, formula, name or alias
        query: Option<String>,
    },
    /// Evaluate one lab state
    Evaluate {
        #[command(flatten)]
        lab: LabArgs,
        /// Print the readout as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sweep the added mass and report each point
    Sweep {
        #[command(flatten)]
        lab: LabArgs,
        /// First mass in milligrams
        #[arg(long)]
        from: f64,
        /// Last mass in milligrams
        #[arg(long)]
        to: f64,
        /// Number of points, endpoints included
        #[arg(long, default_value_t = 11)]
        points: usize,
        /// Space points logarithmically
        #[arg(long)]
        log: bool,
    },
    /// Validate a scenario file
    Validate {
        /// Path to the scenario YAML or JSON file
        project_path: PathBuf,
    },
    /// Evaluate the scenarios in a file
    Scenario {
        /// Path to the scenario YAML or JSON file
        project_path: PathBuf,
        /// Only evaluate this scenario
        #[arg(long)]
        id: Option<String>,
        /// Print readouts as JSON
        #[arg(long)]
        json: bool,
    },
    /// Describe the beaker for one lab state
    Beaker {
        #[command(flatten)]
        lab: LabArgs,
        /// Seed for particle placement
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Animation frames to advance before reporting
        #[arg(long, default_value_t = 0)]
        frames: usize,
    },
    /// Print the tutor context for one lab state
    Context {
        #[command(flatten)]
        lab: LabArgs,
    },
    /// Ask the tutor a question about one lab state
    Ask {
        /// The question
        question: String,
        #[command(flatten)]
        lab: LabArgs,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Salts { query } => cmd_salts(query.as_deref().unwrap_or("")),
        Commands::Evaluate { lab, json } => cmd_evaluate(&lab, json),
        Commands::Sweep {
            lab,
            from,
            to,
            points,
            log,
        } => cmd_sweep(&SweepRequest {
            lab: lab.request(),
            from_mg: from,
            to_mg: to,
            points,
            logarithmic: log,
        }),
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Scenario {
            project_path,
            id,
            json,
        } => cmd_scenario(&project_path, id.as_deref(), json),
        Commands::Beaker { lab, seed, frames } => cmd_beaker(&lab, seed, frames),
        Commands::Context { lab } => cmd_context(&lab),
        Commands::Ask { question, lab } => cmd_ask(&lab, &question),
    }
}

fn cmd_salts(query: &str) -> AppResult<()> {
    let salts = filter_salt_catalog(query);
    if salts.is_empty() {
        println!("No salts match '{}'", query);
        return Ok(());
    }

    for entry in salts {
        let salt = entry.descriptor()?;
        println!(
            "  {:<6} {:<7} {:<20} Ksp = {:.2e}",
            salt.id, salt.formula, salt.name, salt.ksp
        );
        println!("         {}", salt.dissolution_equation());
    }
    Ok(())
}

fn cmd_evaluate(lab: &LabArgs, json: bool) -> AppResult<()> {
    let (input, result) = evaluate_request(&lab.request())?;
    let readout = Readout::new(&input, &result);
    if json {
        println!("{}", to_json(&readout)?);
    } else {
        println!("{}", readout);
    }
    Ok(())
}

fn cmd_sweep(req: &SweepRequest) -> AppResult<()> {
    let sweep = sweep_request(req)?;

    println!(
        "{:>12}  {:>11}  {:>11}  {:>11}  Status",
        "Mass (mg)", "Qsp", "Dissolved", "Precip."
    );
    for point in &sweep.points {
        let r = &point.result;
        println!(
            "{:>12.4}  {:>11.3e}  {:>11.3e}  {:>11.3e}  {}",
            point.added_mass_mg,
            r.reaction_quotient,
            r.dissolved_moles(),
            r.precipitated_moles(),
            if r.is_saturated {
                "Saturated"
            } else {
                "Unsaturated"
            }
        );
    }

    match sweep.saturation_onset_mg {
        Some(m) => println!("Saturation reached at {:.4} mg", m),
        None => println!("Saturation not reached in this range"),
    }
    Ok(())
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating scenario file: {}", project_path.display());
    load_project(project_path)?;
    println!("✓ Scenario file is valid");
    Ok(())
}

fn cmd_scenario(project_path: &Path, id: Option<&str>, json: bool) -> AppResult<()> {
    let project = load_project(project_path)?;

    let outcomes = match id {
        Some(id) => vec![evaluate_scenario(&project, id)?],
        None => {
            if list_scenarios(&project).is_empty() {
                println!("No scenarios found in {}", project.name);
                return Ok(());
            }
            evaluate_project(&project)?
        }
    };

    if json {
        let readouts: Vec<_> = outcomes.iter().map(|o| &o.readout).collect();
        println!("{}", to_json(&readouts)?);
        return Ok(());
    }

    println!("{}", project.name);
    for outcome in outcomes {
        println!();
        println!("[{}] {}", outcome.scenario_id, outcome.scenario_name);
        println!("{}", outcome.readout);
    }
    Ok(())
}

fn cmd_beaker(lab: &LabArgs, seed: u64, frames: usize) -> AppResult<()> {
    let (input, result) = evaluate_request(&lab.request())?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut scene = BeakerScene::from_result(input.salt(), &result, &mut rng);
    for _ in 0..frames {
        scene.step();
    }

    println!(
        "Particles: {} ({} cations, {} anions)",
        scene.particles.len(),
        scene.count_of(IonRole::Cation),
        scene.count_of(IonRole::Anion)
    );
    println!(
        "Precipitate layer: {:.2} px ({})",
        scene.precipitate_height, scene.precipitate_color
    );
    println!("Legend:");
    for entry in scene.legend() {
        println!("  {} {}", entry.color, entry.label);
    }
    Ok(())
}

fn cmd_context(lab: &LabArgs) -> AppResult<()> {
    let (input, result) = evaluate_request(&lab.request())?;
    println!("{}", format_context(&input, &result));
    Ok(())
}

fn cmd_ask(lab: &LabArgs, question: &str) -> AppResult<()> {
    let (input, result) = evaluate_request(&lab.request())?;
    let session = ask_tutor(&input, &result, question, &DisabledTutor)?;

    for message in session.history() {
        let who = match message.role {
            ChatRole::User => "You",
            ChatRole::Model => "Tutor",
        };
        println!("{}: {}", who, message.text);
    }
    Ok(())
}
