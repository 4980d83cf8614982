//! Entry + state module.
//! `LauncherEntry` keeps the exact JSON value from items.json; fields are coerced only when read.
//! `LauncherState` is the immutable snapshot handed from the loader to the tile builder.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::loader::LoadError;

/// One configured link. Not validated: any JSON value is accepted as an entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LauncherEntry(Value);

impl LauncherEntry {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    /// The value exactly as it appeared in the configuration.
    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn name(&self) -> Option<String> {
        self.field("name")
    }

    pub fn url(&self) -> Option<String> {
        self.field("url")
    }

    pub fn icon(&self) -> Option<String> {
        self.field("icon")
    }

    fn field(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(display_text)
    }
}

/// Loose display coercion: null, false, 0 and "" count as absent.
/// Anything else is stringified the way a browser would (`[1,2]` -> "1,2").
fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        other => Some(loose_string(other)),
    }
}

fn loose_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => loose_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

// Whole floats print without a fraction (1.0 -> "1"), like integers
fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Items to display, in configuration order.
/// Either the full parsed array or empty, never a partial merge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LauncherState {
    items: Vec<LauncherEntry>,
}

impl LauncherState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(items: Vec<LauncherEntry>) -> Self {
        Self { items }
    }

    pub fn from_values(values: Vec<Value>) -> Self {
        Self::new(values.into_iter().map(LauncherEntry::new).collect())
    }

    /// Collapses a finished load into the state to render. Every failure becomes the empty state.
    pub fn settle(loaded: Result<Self, LoadError>) -> Self {
        match loaded {
            Ok(state) => {
                info!("Loaded {} launcher item(s)", state.len());
                state
            }
            Err(e) => {
                warn!("Launcher config unavailable, showing empty state: {}", e);
                Self::empty()
            }
        }
    }

    pub fn items(&self) -> &[LauncherEntry] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
