//! Error types for solver operations.

use eq_core::error::EqError;
use eq_salts::SaltError;
use thiserror::Error;

/// Errors that can occur while evaluating an equilibrium.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    #[error("Degenerate computation: {what}")]
    ComputationDegenerate { what: String },

    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },

    #[error("Invalid sweep: {what}")]
    Sweep { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<EqError> for SolverError {
    fn from(e: EqError) -> Self {
        SolverError::InvalidInput {
            what: e.to_string(),
        }
    }
}

impl From<SaltError> for SolverError {
    fn from(e: SaltError) -> Self {
        SolverError::InvalidInput {
            what: e.to_string(),
        }
    }
}

impl From<SolverError> for EqError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::InvalidInput { what: _ } => EqError::InvalidArg { what: "input" },
            SolverError::ComputationDegenerate { what: _ } => EqError::Invariant {
                what: "degenerate computation",
            },
            SolverError::ConvergenceFailed { what: _ } => EqError::Invariant {
                what: "convergence",
            },
            SolverError::Sweep { what: _ } => EqError::InvalidArg { what: "sweep" },
        }
    }
}

/// Reject NaN/inf intermediates instead of letting them flow into a result.
pub(crate) fn finite(v: f64, what: &str) -> SolverResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SolverError::ComputationDegenerate {
            what: format!("{what} is not finite ({v})"),
        })
    }
}
