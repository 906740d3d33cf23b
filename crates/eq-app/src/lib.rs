//! Shared application service layer for equilisolve.
//!
//! Frontends go through this crate to resolve salts and scenarios, run
//! evaluations and sweeps, and turn results into readouts or tutor context.

pub mod error;
pub mod lab_service;
pub mod readout;
pub mod scenario_service;

pub use error::{AppError, AppResult};
pub use lab_service::{LabRequest, SweepRequest, ask_tutor, evaluate_request, sweep_request};
pub use readout::{BeakerSummary, Readout, to_json};
pub use scenario_service::{
    ScenarioOutcome, ScenarioSummary, build_input, evaluate_project, evaluate_scenario,
    list_scenarios, load_project, policy_for,
};
