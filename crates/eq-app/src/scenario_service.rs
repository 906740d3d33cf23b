//! Scenario file loading and evaluation.

use crate::error::{AppError, AppResult};
use crate::readout::Readout;
use eq_project::schema::{PolicyDef, Project, ScenarioDef};
use eq_solver::{
    CommonIonPolicy, EquilibriumResult, SimulationInput, evaluate_with_policy,
};
use rayon::prelude::*;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSummary {
    pub id: String,
    pub name: String,
    pub salt: String,
    pub volume_l: f64,
    pub added_mass_mg: f64,
    pub policy: PolicyDef,
}

/// One evaluated scenario.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub scenario_id: String,
    pub scenario_name: String,
    pub input: SimulationInput,
    pub result: EquilibriumResult,
    pub readout: Readout,
}

/// Load and validate a scenario file; `.json` is read as JSON, anything
/// else as YAML.
pub fn load_project(path: &Path) -> AppResult<Project> {
    std::fs::metadata(path).map_err(|e| AppError::ProjectFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let project = eq_project::load_any(path)?;
    tracing::info!(
        name = %project.name,
        scenarios = project.scenarios.len(),
        "project loaded"
    );
    Ok(project)
}

pub fn list_scenarios(project: &Project) -> Vec<ScenarioSummary> {
    project
        .scenarios
        .iter()
        .map(|s| ScenarioSummary {
            id: s.id.clone(),
            name: s.name.clone(),
            salt: s.salt.clone(),
            volume_l: s.volume_l,
            added_mass_mg: s.added_mass_mg,
            policy: s.policy,
        })
        .collect()
}

pub fn policy_for(def: PolicyDef) -> CommonIonPolicy {
    match def {
        PolicyDef::Approximation => CommonIonPolicy::ZeroCommonIonApproximation,
        PolicyDef::Newton => CommonIonPolicy::newton(),
    }
}

pub fn build_input(project: &Project, scenario: &ScenarioDef) -> AppResult<SimulationInput> {
    let salt = eq_project::resolve_salt(project, &scenario.salt)?;
    Ok(SimulationInput::from_lab_units(
        salt,
        scenario.volume_l,
        scenario.added_mass_mg,
        scenario.common_cation_m,
        scenario.common_anion_m,
    )?)
}

pub fn evaluate_scenario(project: &Project, scenario_id: &str) -> AppResult<ScenarioOutcome> {
    let scenario = project
        .scenarios
        .iter()
        .find(|s| s.id == scenario_id)
        .ok_or_else(|| AppError::ScenarioNotFound(scenario_id.to_string()))?;
    run_scenario(project, scenario)
}

/// Evaluate every scenario, in file order.
pub fn evaluate_project(project: &Project) -> AppResult<Vec<ScenarioOutcome>> {
    project
        .scenarios
        .par_iter()
        .map(|s| run_scenario(project, s))
        .collect()
}

fn run_scenario(project: &Project, scenario: &ScenarioDef) -> AppResult<ScenarioOutcome> {
    let input = build_input(project, scenario)?;
    let result = evaluate_with_policy(&input, &policy_for(scenario.policy))?;
    let readout = Readout::new(&input, &result);

    tracing::info!(
        scenario = %scenario.id,
        saturated = result.is_saturated,
        "scenario evaluated"
    );

    Ok(ScenarioOutcome {
        scenario_id: scenario.id.clone(),
        scenario_name: scenario.name.clone(),
        input,
        result,
        readout,
    })
}
