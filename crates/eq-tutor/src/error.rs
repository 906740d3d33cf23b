use thiserror::Error;

pub type TutorResult<T> = Result<T, TutorError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TutorError {
    #[error("Tutor bridge failed: {message}")]
    Bridge { message: String },

    #[error("Tutor returned an empty response")]
    EmptyResponse,
}
