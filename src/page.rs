use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::types::WidgetError;

/// Logical roles the host page fulfils. Handlers bind against roles rather than
/// looking elements up globally, so a page that lacks a role simply never wires
/// the corresponding feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    DomainSelect,
    LocationInput,
    ResourceResults,
    ResourceError,
    VideoQuery,
    VideoResults,
    ChatPanel,
    ChatInput,
    ChatTranscript,
}

pub(crate) fn locked<T>(lock: &Mutex<T>) -> MutexGuard<'_, T> {
    lock.lock().unwrap_or_else(|e| e.into_inner())
}

//
// ---------- Field ----------
//
/// A text control (input or selector). Clones share the same backing value so a
/// handler and the page see identical state.
#[derive(Debug, Clone, Default)]
pub struct Field(Arc<Mutex<String>>);

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> String {
        locked(&self.0).clone()
    }

    /// The value with surrounding whitespace removed.
    pub fn trimmed(&self) -> String {
        locked(&self.0).trim().to_string()
    }

    pub fn is_blank(&self) -> bool {
        locked(&self.0).trim().is_empty()
    }

    pub fn set(&self, value: &str) {
        *locked(&self.0) = value.to_string();
    }

    pub fn clear(&self) {
        locked(&self.0).clear();
    }
}

//
// ---------- Region ----------
//
/// Where a region was last scrolled to, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    IntoView,
    Bottom,
}

#[derive(Debug, Default)]
struct RegionState {
    blocks: Vec<String>,
    visible: bool,
    scrolled: Option<Scroll>,
}

/// A markup container. Holds rendered blocks in order; nothing here lays content
/// out, regions only record what a real page would display.
#[derive(Debug, Clone)]
pub struct Region(Arc<Mutex<RegionState>>);

impl Region {
    pub fn new(visible: bool) -> Self {
        Self(Arc::new(Mutex::new(RegionState {
            blocks: Vec::new(),
            visible,
            scrolled: None,
        })))
    }

    /// Replaces the region's entire contents with a single block.
    pub fn replace(&self, markup: &str) {
        let mut state = locked(&self.0);
        state.blocks.clear();
        state.blocks.push(markup.to_string());
        debug!("region replaced ({} bytes)", markup.len());
    }

    /// Appends a block after the existing contents.
    pub fn append(&self, markup: &str) {
        locked(&self.0).blocks.push(markup.to_string());
        debug!("region appended ({} bytes)", markup.len());
    }

    pub fn clear(&self) {
        locked(&self.0).blocks.clear();
    }

    pub fn show(&self) {
        locked(&self.0).visible = true;
    }

    pub fn hide(&self) {
        locked(&self.0).visible = false;
    }

    pub fn is_visible(&self) -> bool {
        locked(&self.0).visible
    }

    pub fn scroll_into_view(&self) {
        locked(&self.0).scrolled = Some(Scroll::IntoView);
    }

    /// Scrolls so the last appended block is visible.
    pub fn scroll_to_bottom(&self) {
        locked(&self.0).scrolled = Some(Scroll::Bottom);
    }

    pub fn last_scroll(&self) -> Option<Scroll> {
        locked(&self.0).scrolled
    }

    /// The rendered contents, blocks joined in order.
    pub fn markup(&self) -> String {
        locked(&self.0).blocks.join("\n")
    }

    pub fn block_count(&self) -> usize {
        locked(&self.0).blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        locked(&self.0).blocks.is_empty()
    }
}

//
// ---------- Alerts ----------
//
/// Clonable handle to the page's blocking-alert record. Stands in for a modal
/// dialog; handlers take one so they never reach back into the page.
#[derive(Debug, Clone, Default)]
pub struct AlertSink(Arc<Mutex<Vec<String>>>);

impl AlertSink {
    pub fn raise(&self, message: &str) {
        warn!("alert raised: {message}");
        locked(&self.0).push(message.to_string());
    }

    pub fn all(&self) -> Vec<String> {
        locked(&self.0).clone()
    }

    pub fn is_empty(&self) -> bool {
        locked(&self.0).is_empty()
    }
}

//
// ---------- Page ----------
//
/// The host page: a registry of elements keyed by role, plus the alert sink that
/// stands in for a blocking modal dialog.
#[derive(Debug, Default)]
pub struct Page {
    fields: HashMap<Role, Field>,
    regions: HashMap<Role, Region>,
    alerts: AlertSink,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a text control under the given role.
    pub fn with_field(mut self, role: Role) -> Self {
        self.fields.insert(role, Field::new());
        self
    }

    /// Registers a markup container under the given role.
    pub fn with_region(mut self, role: Role, visible: bool) -> Self {
        self.regions.insert(role, Region::new(visible));
        self
    }

    /// A page carrying every role the three features need. The chat panel starts
    /// hidden, everything else visible.
    pub fn sample() -> Self {
        Self::new()
            .with_field(Role::DomainSelect)
            .with_field(Role::LocationInput)
            .with_region(Role::ResourceResults, true)
            .with_region(Role::ResourceError, true)
            .with_field(Role::VideoQuery)
            .with_region(Role::VideoResults, true)
            .with_region(Role::ChatPanel, false)
            .with_field(Role::ChatInput)
            .with_region(Role::ChatTranscript, true)
    }

    pub fn field(&self, role: Role) -> Result<Field, WidgetError> {
        self.fields
            .get(&role)
            .cloned()
            .ok_or(WidgetError::MissingElement(role))
    }

    pub fn region(&self, role: Role) -> Result<Region, WidgetError> {
        self.regions
            .get(&role)
            .cloned()
            .ok_or(WidgetError::MissingElement(role))
    }

    /// Records a blocking alert message.
    pub fn alert(&self, message: &str) {
        self.alerts.raise(message);
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.all()
    }

    pub fn alert_sink(&self) -> AlertSink {
        self.alerts.clone()
    }
}
