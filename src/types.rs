use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::Duration;

use crate::page::Role;

//
// ---------- Error Types ----------
//
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Page is missing a required element: {0:?}")]
    MissingElement(Role),

    #[error("Invalid rule table: {0}")]
    RulesError(String),

    #[error("Transcript error: {0}")]
    TranscriptError(String),
}

//
// ---------- Chat Types ----------
//
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS-style class used when rendering a message block.
    pub fn class(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub timestamp: String,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: &str) -> Self {
        Self {
            sender,
            text: text.to_string(),
            timestamp: Local::now().to_rfc3339(),
        }
    }
}

//
// ---------- Transcript ----------
//
/// Append-only, ordered record of the chat. Visibility toggles never touch it.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn all(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn to_json(&self) -> Result<String, WidgetError> {
        serde_json::to_string_pretty(&self.messages)
            .map_err(|e| WidgetError::TranscriptError(e.to_string()))
    }

    pub fn persist_to_file(&self, path: &str) -> Result<(), WidgetError> {
        std::fs::write(path, self.to_json()?)
            .map_err(|e| WidgetError::TranscriptError(e.to_string()))
    }

    pub fn load_from_file(path: &str) -> Result<Self, WidgetError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| WidgetError::TranscriptError(e.to_string()))?;
        let messages: Vec<ChatMessage> = serde_json::from_str(&data)
            .map_err(|e| WidgetError::TranscriptError(e.to_string()))?;
        Ok(Self { messages })
    }
}

//
// ---------- Chatbot Config ----------
//
/// Configuration options for the chatbot widget.
#[derive(Debug, Clone)]
pub struct ChatbotOptions {
    /// Delay between a submitted message and its reply.
    pub reply_delay: Duration,
}

impl Default for ChatbotOptions {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(1000),
        }
    }
}

impl ChatbotOptions {
    /// Creates a new `ChatbotOptions` instance with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reply delay (in milliseconds).
    pub fn reply_delay(mut self, millis: u64) -> Self {
        self.reply_delay = Duration::from_millis(millis);
        self
    }
}
