pub mod chatbot;
pub mod markup;
pub mod page;
pub mod rules;
pub mod search;
pub mod types;

pub use chatbot::{ChatbotWidget, Submission, WidgetState};
pub use page::{AlertSink, Field, Page, Region, Role, Scroll};
pub use rules::{ReplyRule, RuleSet};
pub use search::{Outcome, ResourceSearch, VideoSearch};
pub use types::{ChatMessage, ChatbotOptions, Sender, Transcript, WidgetError};
