//! Chat transcript between the student and the tutor.

use crate::bridge::TutorBridge;
use crate::error::TutorError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    history: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub const GREETING: &'static str = "Hello! I am your Solubility Equilibrium tutor. \
Ask me anything about Ksp, precipitation, or the common ion effect.";
    pub const EMPTY_REPLY: &'static str = "Sorry, I encountered an error.";
    pub const BRIDGE_FAILURE_REPLY: &'static str =
        "Error connecting to the AI tutor. Please check your API key.";

    /// New session opening with the tutor greeting.
    pub fn new() -> Self {
        Self {
            history: vec![ChatMessage::model(Self::GREETING)],
        }
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Ask a question; returns the tutor reply, or `None` for a blank question.
    ///
    /// Bridge failures never escape: they are logged and turned into a fixed
    /// apology so the transcript stays consistent.
    pub fn ask(
        &mut self,
        question: &str,
        context: &str,
        bridge: &dyn TutorBridge,
    ) -> Option<&ChatMessage> {
        if question.trim().is_empty() {
            return None;
        }

        self.history.push(ChatMessage::user(question));

        let reply = match bridge.respond(question, context) {
            Ok(text) if text.trim().is_empty() => {
                tracing::warn!(error = %TutorError::EmptyResponse, "tutor reply dropped");
                Self::EMPTY_REPLY.to_string()
            }
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "tutor bridge failed");
                Self::BRIDGE_FAILURE_REPLY.to_string()
            }
        };

        self.history.push(ChatMessage::model(reply));
        self.history.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::DisabledTutor;
    use crate::error::TutorResult;

    struct Echo;

    impl TutorBridge for Echo {
        fn respond(&self, question: &str, context: &str) -> TutorResult<String> {
            Ok(format!("{question} | {context}"))
        }
    }

    struct Failing;

    impl TutorBridge for Failing {
        fn respond(&self, _: &str, _: &str) -> TutorResult<String> {
            Err(TutorError::Bridge {
                message: "timeout".into(),
            })
        }
    }

    struct Silent;

    impl TutorBridge for Silent {
        fn respond(&self, _: &str, _: &str) -> TutorResult<String> {
            Ok("  ".into())
        }
    }

    #[test]
    fn starts_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].role, ChatRole::Model);
    }

    #[test]
    fn blank_questions_are_ignored() {
        let mut session = ChatSession::new();
        assert!(session.ask("   ", "ctx", &Echo).is_none());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn question_and_reply_are_appended() {
        let mut session = ChatSession::new();
        let reply = session.ask("What is Qsp?", "AgCl", &Echo).cloned().unwrap();
        assert_eq!(reply.text, "What is Qsp? | AgCl");
        assert_eq!(session.history().len(), 3);
        assert_eq!(session.history()[1], ChatMessage::user("What is Qsp?"));
    }

    #[test]
    fn bridge_failure_becomes_apology() {
        let mut session = ChatSession::new();
        let reply = session.ask("Hi", "ctx", &Failing).unwrap();
        assert_eq!(reply.text, ChatSession::BRIDGE_FAILURE_REPLY);
    }

    #[test]
    fn empty_reply_becomes_apology() {
        let mut session = ChatSession::new();
        let reply = session.ask("Hi", "ctx", &Silent).unwrap();
        assert_eq!(reply.text, ChatSession::EMPTY_REPLY);
    }

    #[test]
    fn disabled_tutor_in_session() {
        let mut session = ChatSession::new();
        let reply = session.ask("Hi", "ctx", &DisabledTutor).unwrap();
        assert_eq!(reply.text, DisabledTutor::REPLY);
    }

    #[test]
    fn transcript_serializes_with_lowercase_roles() {
        let mut session = ChatSession::new();
        session.ask("Hi", "ctx", &DisabledTutor);
        let json = serde_json::to_string(session.history()).unwrap();
        assert!(json.contains(r#""role":"user""#));
        assert!(json.contains(r#""role":"model""#));
    }
}
