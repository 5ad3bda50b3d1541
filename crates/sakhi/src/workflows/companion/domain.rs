use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Greeting shown when a conversation starts.
pub const WELCOME_MESSAGE: &str = "Namaste! 🌸 I'm Sakhi, your PCOS companion. I'm here to provide personalized advice about diet, exercise, symptom management, and emotional support. What would you like to know about PCOS today?";

/// Prefix that identifies the greeting in a history.
pub const WELCOME_MARKER: &str = "Namaste! 🌸";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub saved: bool,
}

impl ChatMessage {
    pub fn new(id: u64, text: impl Into<String>, sender: Sender, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            timestamp,
            saved: false,
        }
    }

    pub fn is_welcome(&self) -> bool {
        self.sender == Sender::Ai && self.text.contains(WELCOME_MARKER)
    }
}
