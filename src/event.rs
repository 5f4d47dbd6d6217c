//! Server event records and lenient property access.
//!
//! Events arrive from the agent runtime as a dotted type name plus an untyped
//! `properties` bag whose shape depends on the type. Nothing here validates
//! that shape: missing or mistyped fields degrade to a default, never an
//! error.

use serde::Deserialize;
use serde_json::Value;

/// One notification from the agent runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerEvent {
    /// Dotted event name, e.g. `session.created` or `part.updated`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Untyped payload; shape varies by event type.
    #[serde(default)]
    pub properties: Value,
}

/// Error decoding a serialized event.
#[derive(Debug, thiserror::Error)]
pub enum EventParseError {
    #[error("invalid event JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ServerEvent {
    /// Build an event from a type name and properties value.
    pub fn new(event_type: impl Into<String>, properties: Value) -> Self {
        Self {
            event_type: event_type.into(),
            properties,
        }
    }

    /// Decode one JSONL line into an event.
    pub fn from_json_line(line: &str) -> Result<Self, EventParseError> {
        Ok(serde_json::from_str(line)?)
    }

    /// The recognized category of this event.
    pub fn kind(&self) -> EventKind {
        EventKind::from_type(&self.event_type)
    }
}

/// Recognized event categories.
///
/// Parsing never fails; anything outside the known set maps to `Unknown`,
/// which the presenter silently drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    SessionCreated,
    SessionUpdated,
    MessageCreated,
    MessageUpdated,
    PartCreated,
    PartUpdated,
    PermissionRequest,
    PermissionResponse,
    ToolCall,
    ToolResult,
    Unknown,
}

impl EventKind {
    /// Map a dotted event name to its category.
    pub fn from_type(event_type: &str) -> Self {
        match event_type {
            "session.created" => EventKind::SessionCreated,
            "session.updated" => EventKind::SessionUpdated,
            "message.created" => EventKind::MessageCreated,
            "message.updated" => EventKind::MessageUpdated,
            "part.created" => EventKind::PartCreated,
            "part.updated" => EventKind::PartUpdated,
            "permission.request" => EventKind::PermissionRequest,
            "permission.response" => EventKind::PermissionResponse,
            "tool.call" => EventKind::ToolCall,
            "tool.result" => EventKind::ToolResult,
            _ => EventKind::Unknown,
        }
    }
}

/// Read a string field. Absent, non-string and empty-string values all count
/// as missing, so fallback chains degrade the way the producer's `||`
/// defaults do: `tool: ""` still yields `unknown`.
pub(crate) fn str_prop<'a>(props: &'a Value, key: &str) -> Option<&'a str> {
    props
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Read a string field nested one level down (e.g. `state.status`), with the
/// same empty-as-missing rule as [`str_prop`].
pub(crate) fn nested_str_prop<'a>(props: &'a Value, outer: &str, key: &str) -> Option<&'a str> {
    props
        .get(outer)
        .and_then(|v| v.get(key))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// JavaScript-style truthiness over a JSON value.
///
/// Null, `false`, `0` and `""` are falsy; objects and arrays are truthy even
/// when empty. An absent field should be checked with `map_or(false, ...)`.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
