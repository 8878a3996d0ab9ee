use serde::{Deserialize, Serialize};

use crate::types::WidgetError;

/// One entry of the reply table: if any keyword matches a token of the input,
/// the rule's reply is used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplyRule {
    pub keywords: Vec<String>,
    pub reply: String,
}

impl ReplyRule {
    pub fn new(keywords: &[&str], reply: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            reply: reply.to_string(),
        }
    }

    fn matches(&self, tokens: &[String]) -> bool {
        self.keywords
            .iter()
            .any(|keyword| tokens.iter().any(|token| token == keyword))
    }
}

/// Ordered rule table with first-match-wins semantics. Immutable once built;
/// an alternative table can be loaded from JSON in place of the default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleSet {
    pub rules: Vec<ReplyRule>,
    pub fallback: String,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            rules: vec![
                ReplyRule::new(&["hello", "hi"], "Hello! How can I help you today?"),
                ReplyRule::new(
                    &["scheme", "pension"],
                    "You can find pension scheme details under the Resources section.",
                ),
                ReplyRule::new(
                    &["help", "support"],
                    "For help and support, please visit the Services page.",
                ),
                ReplyRule::new(&["thank", "thanks"], "You're welcome! Happy to help."),
            ],
            fallback: "I'm not sure about that. Try asking about schemes, resources, or support."
                .to_string(),
        }
    }
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, WidgetError> {
        serde_json::from_str(json).map_err(|e| WidgetError::RulesError(e.to_string()))
    }

    pub fn load_from_file(path: &str) -> Result<Self, WidgetError> {
        let data =
            std::fs::read_to_string(path).map_err(|e| WidgetError::RulesError(e.to_string()))?;
        Self::from_json(&data)
    }

    pub fn to_json(&self) -> Result<String, WidgetError> {
        serde_json::to_string_pretty(self).map_err(|e| WidgetError::RulesError(e.to_string()))
    }

    /// Picks the reply for an input. Pure and synchronous: the input is
    /// lowercased and split into alphanumeric tokens, then the rules are tried
    /// in order and the first whose keyword equals a whole token wins. Keyword
    /// hits inside longer words ("hi" in "hint") do not count.
    pub fn reply_for(&self, input: &str) -> &str {
        let tokens = tokenize(input);
        self.rules
            .iter()
            .find(|rule| rule.matches(&tokens))
            .map(|rule| rule.reply.as_str())
            .unwrap_or(&self.fallback)
    }
}

fn tokenize(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}
