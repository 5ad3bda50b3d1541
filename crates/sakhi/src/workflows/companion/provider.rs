use async_trait::async_trait;

use super::domain::ChatMessage;

/// Remote text generation behind the companion.
#[async_trait]
pub trait CompanionProvider: Send + Sync {
    /// `history` holds the prior conversation, oldest first, without `message`.
    async fn reply(&self, message: &str, history: &[ChatMessage]) -> Result<String, CompanionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompanionError {
    #[error("AI service not configured")]
    NotConfigured,
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
    #[error("AI service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("response was filtered for safety")]
    Filtered,
    #[error("no response text from AI service")]
    EmptyResponse,
    #[error("malformed AI response: {0}")]
    Decode(String),
}
