//! Solubility-equilibrium solver.
//!
//! Given a salt, a solvent volume, an added mass and the background
//! concentration of each of the salt's ions, this crate finds the molar
//! solubility, splits the added salt into dissolved and precipitated moles,
//! and reports ion concentrations, the reaction quotient Qsp and whether the
//! solution is saturated.
//!
//! Every evaluation is a pure function of its input. Nothing is cached and
//! results may be computed from any number of threads at once.

pub mod error;
pub mod evaluate;
pub mod input;
pub mod newton;
pub mod result;
pub mod solubility;
pub mod sweep;

pub use error::{SolverError, SolverResult};
pub use evaluate::{
    SATURATION_TOLERANCE, evaluate, evaluate_with, evaluate_with_policy, saturation_mass,
};
pub use input::SimulationInput;
pub use newton::{NewtonConfig, NewtonResult};
pub use result::EquilibriumResult;
pub use solubility::{CommonIonPolicy, molar_solubility};
pub use sweep::{MassSweep, MassSweepResult, SweepPoint, SweepType, sweep_added_mass};
