//! Request/response seam to an external tutor.

use crate::error::TutorResult;

/// Anything that can answer a student question given the lab context.
///
/// Implementations forward to a language model or other service; the
/// simulator never depends on what comes back.
pub trait TutorBridge: Send + Sync {
    fn respond(&self, question: &str, context: &str) -> TutorResult<String>;
}

/// Bridge used when no tutor backend is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledTutor;

impl DisabledTutor {
    pub const REPLY: &'static str = "AI tutor is disabled in this build.";
}

impl TutorBridge for DisabledTutor {
    fn respond(&self, _question: &str, _context: &str) -> TutorResult<String> {
        Ok(Self::REPLY.to_string())
    }
}
