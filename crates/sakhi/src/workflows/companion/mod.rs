//! Sakhi's chat companion: a remote generative model when one is configured,
//! with a keyword-matched reply table behind it.

pub mod domain;
pub mod fallback;
pub mod gemini;
pub mod provider;
pub mod router;
pub mod service;

pub use domain::{ChatMessage, Sender, WELCOME_MARKER, WELCOME_MESSAGE};
pub use fallback::fallback_reply;
pub use gemini::GeminiProvider;
pub use provider::{CompanionError, CompanionProvider};
pub use router::{companion_router, ChatRequest};
pub use service::{CompanionChat, CompanionReply, ReplySource, HISTORY_WINDOW};
