//! Error types for the eq-app service layer.

use std::path::PathBuf;

/// Unified error for every frontend.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to read project file: {path}")]
    ProjectFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("Salt error: {0}")]
    Salt(String),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<eq_project::ProjectError> for AppError {
    fn from(err: eq_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<eq_project::ValidationError> for AppError {
    fn from(err: eq_project::ValidationError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<eq_salts::SaltError> for AppError {
    fn from(err: eq_salts::SaltError) -> Self {
        AppError::Salt(err.to_string())
    }
}

impl From<eq_solver::SolverError> for AppError {
    fn from(err: eq_solver::SolverError) -> Self {
        AppError::Solver(err.to_string())
    }
}
