//! eq-tutor: the boundary between the simulator and an external tutor.
//!
//! The tutor itself is opaque. This crate formats what the simulator knows
//! into a textual context, defines the `TutorBridge` request/response seam,
//! and keeps the chat transcript.

pub mod bridge;
pub mod context;
pub mod error;
pub mod session;

pub use bridge::{DisabledTutor, TutorBridge};
pub use context::{format_context, js_number};
pub use error::{TutorError, TutorResult};
pub use session::{ChatMessage, ChatRole, ChatSession};
