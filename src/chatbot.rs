use std::sync::{Arc, Mutex};

use log::{debug, info};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::markup;
use crate::page::{locked, Field, Page, Region, Role};
use crate::rules::RuleSet;
use crate::types::{ChatMessage, ChatbotOptions, Sender, Transcript, WidgetError};

/// Visibility state of the chat panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Closed,
    Open,
}

/// What a chat submission did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// User message appended, reply scheduled.
    Queued,
    /// Empty input or closed widget; nothing happened.
    Ignored,
}

/// A reply waiting for its delay to elapse. Deadlines are fixed at submission
/// time, so equal delays plus FIFO consumption keep replies in submission order.
struct PendingReply {
    text: String,
    deadline: Instant,
}

struct ReplyWorker {
    tx: mpsc::UnboundedSender<PendingReply>,
    handle: JoinHandle<()>,
}

/// The canned-response chat widget. Starts closed; `open` shows the panel and
/// starts the reply worker, `close` hides it and cancels every pending reply.
/// The transcript outlives visibility toggles.
///
/// `open` and `submit` must run inside a tokio runtime.
pub struct ChatbotWidget {
    panel: Region,
    input: Field,
    view: Region,
    transcript: Arc<Mutex<Transcript>>,
    rules: Arc<RuleSet>,
    options: ChatbotOptions,
    worker: Option<ReplyWorker>,
}

impl ChatbotWidget {
    /// Binds against the page; fails if any chat role is absent, in which case
    /// the caller skips wiring the widget.
    pub fn bind(page: &Page) -> Result<Self, WidgetError> {
        Ok(Self {
            panel: page.region(Role::ChatPanel)?,
            input: page.field(Role::ChatInput)?,
            view: page.region(Role::ChatTranscript)?,
            transcript: Arc::new(Mutex::new(Transcript::new())),
            rules: Arc::new(RuleSet::default()),
            options: ChatbotOptions::default(),
            worker: None,
        })
    }

    /// Replaces the default rule table.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = Arc::new(rules);
        self
    }

    /// Replaces the default options.
    pub fn with_options(mut self, options: ChatbotOptions) -> Self {
        self.options = options;
        self
    }

    pub fn state(&self) -> WidgetState {
        if self.worker.is_some() {
            WidgetState::Open
        } else {
            WidgetState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.state() == WidgetState::Open
    }

    /// Shows the panel and starts the reply worker. No-op when already open.
    pub fn open(&mut self) {
        if self.worker.is_some() {
            return;
        }
        info!("chat widget opened");
        self.panel.show();
        self.worker = Some(self.spawn_worker());
    }

    /// Hides the panel and cancels all pending replies. A reply whose delay has
    /// not elapsed when the widget closes is never appended, even if the widget
    /// is reopened later.
    pub fn close(&mut self) {
        if let Some(worker) = self.worker.take() {
            info!("chat widget closed, pending replies cancelled");
            worker.handle.abort();
        }
        self.panel.hide();
    }

    /// Submits the input field's current value. Blank input is a silent no-op,
    /// as is submitting while closed (the form is not reachable then).
    pub fn submit(&self) -> Submission {
        let Some(worker) = &self.worker else {
            return Submission::Ignored;
        };

        let text = self.input.trimmed();
        if text.is_empty() {
            return Submission::Ignored;
        }

        self.append(Sender::User, &text);
        self.input.clear();

        let pending = PendingReply {
            deadline: Instant::now() + self.options.reply_delay,
            text,
        };
        // Only fails if the worker is gone, which means the widget is closing.
        let _ = worker.tx.send(pending);
        Submission::Queued
    }

    /// Snapshot of the transcript model.
    pub fn transcript(&self) -> Transcript {
        locked(&self.transcript).clone()
    }

    fn append(&self, sender: Sender, text: &str) {
        locked(&self.transcript).push(ChatMessage::new(sender, text));
        self.view.append(&markup::message_block(sender, text));
        self.view.scroll_to_bottom();
    }

    fn spawn_worker(&self) -> ReplyWorker {
        let (tx, mut rx) = mpsc::unbounded_channel::<PendingReply>();
        let view = self.view.clone();
        let transcript = Arc::clone(&self.transcript);
        let rules = Arc::clone(&self.rules);

        let handle = tokio::spawn(async move {
            while let Some(pending) = rx.recv().await {
                tokio::time::sleep_until(pending.deadline).await;
                let reply = rules.reply_for(&pending.text).to_string();
                debug!("replying to {:?}", pending.text);
                locked(&transcript).push(ChatMessage::new(Sender::Bot, &reply));
                view.append(&markup::message_block(Sender::Bot, &reply));
                view.scroll_to_bottom();
            }
        });

        ReplyWorker { tx, handle }
    }
}

impl Drop for ChatbotWidget {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.handle.abort();
        }
    }
}
