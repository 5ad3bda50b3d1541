use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::ChatMessage;
use super::fallback::fallback_reply;
use super::provider::CompanionProvider;

/// Most recent messages a caller should pass along with a new message.
pub const HISTORY_WINDOW: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanionReply {
    pub text: String,
    pub source: ReplySource,
}

impl CompanionReply {
    fn fallback(message: &str) -> Self {
        Self {
            text: fallback_reply(message).to_string(),
            source: ReplySource::Fallback,
        }
    }
}

/// Two-stage responder: the remote provider when configured, the keyword
/// table otherwise. Every failure degrades to the keyword table, so a reply
/// is always produced.
pub struct CompanionChat<P> {
    provider: Option<Arc<P>>,
}

impl<P> CompanionChat<P>
where
    P: CompanionProvider + 'static,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    pub fn fallback_only() -> Self {
        Self { provider: None }
    }

    pub fn from_optional(provider: Option<Arc<P>>) -> Self {
        Self { provider }
    }

    pub fn is_remote_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Answers `message` given the conversation so far (oldest first). Only the
    /// last [`HISTORY_WINDOW`] messages are forwarded.
    pub async fn respond(&self, message: &str, history: &[ChatMessage]) -> CompanionReply {
        let Some(provider) = &self.provider else {
            return CompanionReply::fallback(message);
        };

        let recent = &history[history.len().saturating_sub(HISTORY_WINDOW)..];
        match provider.reply(message, recent).await {
            Ok(text) => CompanionReply {
                text,
                source: ReplySource::Remote,
            },
            Err(err) => {
                warn!(error = %err, "companion provider failed, using fallback reply");
                CompanionReply::fallback(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::companion::domain::Sender;
    use crate::workflows::companion::provider::CompanionError;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingProvider {
        seen: Mutex<Vec<usize>>,
    }

    #[async_trait]
    impl CompanionProvider for RecordingProvider {
        async fn reply(
            &self,
            message: &str,
            history: &[ChatMessage],
        ) -> Result<String, CompanionError> {
            self.seen.lock().expect("mutex").push(history.len());
            Ok(format!("echo: {message}"))
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl CompanionProvider for FailingProvider {
        async fn reply(
            &self,
            _message: &str,
            _history: &[ChatMessage],
        ) -> Result<String, CompanionError> {
            Err(CompanionError::Status {
                status: 503,
                body: "unavailable".to_string(),
            })
        }
    }

    fn history(len: u64) -> Vec<ChatMessage> {
        (1..=len)
            .map(|id| ChatMessage::new(id, format!("message {id}"), Sender::User, Utc::now()))
            .collect()
    }

    #[tokio::test]
    async fn remote_reply_is_used_when_available() {
        let provider = Arc::new(RecordingProvider::default());
        let chat = CompanionChat::new(provider.clone());

        let reply = chat.respond("hello", &history(14)).await;

        assert_eq!(reply.source, ReplySource::Remote);
        assert_eq!(reply.text, "echo: hello");
        assert_eq!(*provider.seen.lock().expect("mutex"), vec![HISTORY_WINDOW]);
    }

    #[tokio::test]
    async fn provider_failure_degrades_to_fallback() {
        let chat = CompanionChat::new(Arc::new(FailingProvider));
        let reply = chat.respond("any exercise ideas?", &[]).await;

        assert_eq!(reply.source, ReplySource::Fallback);
        assert!(reply.text.starts_with("Regular exercise is crucial!"));
    }

    #[tokio::test]
    async fn unconfigured_chat_answers_locally() {
        let chat = CompanionChat::<FailingProvider>::fallback_only();
        assert!(!chat.is_remote_enabled());

        let reply = chat.respond("feeling low, mood swings", &history(2)).await;
        assert_eq!(reply.source, ReplySource::Fallback);
        assert!(reply.text.starts_with("PCOS can affect mood"));
    }
}
