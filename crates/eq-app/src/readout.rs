//! Display-ready summary of one evaluation.

use crate::error::AppResult;
use eq_beaker::{BeakerGeometry, particle_count, precipitate_height};
use eq_core::units::{as_liters, as_mg};
use eq_solver::{EquilibriumResult, SimulationInput};
use serde::Serialize;
use std::fmt;

/// What the beaker would show for this result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BeakerSummary {
    pub particles: usize,
    pub precipitate_height_px: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readout {
    pub salt_id: String,
    pub salt_name: String,
    pub formula: String,
    pub dissolution_equation: String,
    pub ksp_expression: String,
    pub volume_l: f64,
    pub added_mass_mg: f64,
    pub ksp: f64,
    pub qsp: f64,
    pub saturation_ratio: f64,
    /// Dissolved moles per liter of solution.
    pub molar_solubility_m: f64,
    pub dissolved_mol: f64,
    pub precipitated_mol: f64,
    pub precipitate_mass_mg: f64,
    pub cation_label: String,
    pub cation_m: f64,
    pub anion_label: String,
    pub anion_m: f64,
    pub saturated: bool,
    pub status: &'static str,
    pub beaker: BeakerSummary,
}

impl Readout {
    pub fn new(input: &SimulationInput, result: &EquilibriumResult) -> Self {
        let salt = input.salt();
        let volume_l = as_liters(input.volume());
        let geometry = BeakerGeometry::default();

        Self {
            salt_id: salt.id.clone(),
            salt_name: salt.name.clone(),
            formula: salt.formula.clone(),
            dissolution_equation: salt.dissolution_equation(),
            ksp_expression: salt.ksp_expression(),
            volume_l,
            added_mass_mg: as_mg(input.added_mass()),
            ksp: result.ksp,
            qsp: result.reaction_quotient,
            saturation_ratio: result.saturation_ratio(),
            molar_solubility_m: result.dissolved_moles() / volume_l,
            dissolved_mol: result.dissolved_moles(),
            precipitated_mol: result.precipitated_moles(),
            precipitate_mass_mg: as_mg(result.precipitate_mass(salt.molar_mass)),
            cation_label: salt.cation.label.clone(),
            cation_m: result.cation_molarity(),
            anion_label: salt.anion.label.clone(),
            anion_m: result.anion_molarity(),
            saturated: result.is_saturated,
            status: if result.is_saturated {
                "Saturated"
            } else {
                "Unsaturated"
            },
            beaker: BeakerSummary {
                particles: particle_count(result.cation_molarity()),
                precipitate_height_px: precipitate_height(result.precipitated_moles(), &geometry),
            },
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.salt_name, self.formula)?;
        writeln!(f, "  {}", self.dissolution_equation)?;
        writeln!(f, "  {}", self.ksp_expression)?;
        writeln!(f, "  Volume:            {} L", self.volume_l)?;
        writeln!(f, "  Added mass:        {} mg", self.added_mass_mg)?;
        writeln!(f, "  Ksp:               {:.3e}", self.ksp)?;
        writeln!(f, "  Qsp:               {:.3e}", self.qsp)?;
        writeln!(f, "  Molar solubility:  {:.3e} M", self.molar_solubility_m)?;
        writeln!(f, "  Precipitate:       {:.3} mg", self.precipitate_mass_mg)?;
        writeln!(f, "  [{}]: {:.3e} M", self.cation_label, self.cation_m)?;
        writeln!(f, "  [{}]: {:.3e} M", self.anion_label, self.anion_m)?;
        write!(f, "  Status:            {}", self.status)
    }
}

/// Pretty JSON for `--json` style output.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
