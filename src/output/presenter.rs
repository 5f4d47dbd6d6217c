//! Event presentation: one incoming event in, zero or more console lines out.

use std::io::{self, Write};

use serde_json::Value;

use crate::event::{is_truthy, nested_str_prop, str_prop, EventKind, ServerEvent};
use crate::output::config::PresenterConfig;

/// Truncate a string to at most `limit` characters, appending `...` only
/// when something was cut. Operates on characters, so multi-byte content is
/// never split mid-sequence.
pub fn truncate(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(limit).collect();
        out.push_str("...");
        out
    }
}

/// Formats server events as human-readable console lines.
///
/// The presenter never fails: unknown event types and missing fields produce
/// no output or a fallback label, and write errors on the sink are discarded.
///
/// # Example
///
/// ```rust,ignore
/// use agentlog::{EventPresenter, ServerEvent};
///
/// let mut presenter = EventPresenter::stdout();
/// presenter.present(&event);
/// ```
pub struct EventPresenter<W: Write> {
    out: W,
    config: PresenterConfig,
}

impl EventPresenter<io::Stdout> {
    /// Create a presenter writing to stdout with default configuration
    /// (verbosity re-read from `DEBUG_VERBOSE` on every call).
    pub fn stdout() -> Self {
        Self::new(io::stdout(), PresenterConfig::new())
    }
}

impl<W: Write> EventPresenter<W> {
    /// Create a presenter writing to the given sink.
    pub fn new(out: W, config: PresenterConfig) -> Self {
        Self { out, config }
    }

    /// Present one event, printing zero or more lines.
    pub fn present(&mut self, event: &ServerEvent) {
        let props = &event.properties;
        let verbose = self.config.verbosity.resolve().is_verbose();

        match event.kind() {
            EventKind::SessionCreated => {
                self.emit("📋 Session created");
            }
            // Session updates are frequent but carry no detail worth a line
            EventKind::SessionUpdated => {}
            EventKind::MessageCreated => {
                let role = str_prop(props, "role").unwrap_or("assistant");
                self.emit(&format!("💬 New message ({role})"));
            }
            EventKind::MessageUpdated => self.present_message_update(props, verbose),
            EventKind::PartCreated | EventKind::PartUpdated => self.present_part(props, verbose),
            EventKind::PermissionRequest => {
                let tool = str_prop(props, "tool").unwrap_or("unknown");
                self.emit(&format!("🔐 Permission requested: {tool}"));
            }
            EventKind::PermissionResponse => {
                let granted = str_prop(props, "response") == Some("once")
                    || props.get("approved").is_some_and(is_truthy);
                let verdict = if granted { "granted" } else { "denied" };
                self.emit(&format!("🔐 Permission {verdict}"));
            }
            EventKind::ToolCall => {
                let tool = str_prop(props, "tool")
                    .or_else(|| str_prop(props, "name"))
                    .unwrap_or("unknown");
                self.emit(&format!("🔧 Tool call: {tool}"));
            }
            EventKind::ToolResult => {
                let icon = if props.get("error").is_some_and(is_truthy) {
                    "❌"
                } else {
                    "✅"
                };
                let tool = str_prop(props, "tool").unwrap_or("unknown");
                self.emit(&format!("{icon} Tool result: {tool}"));
            }
            // Unknown events are dropped to reduce noise
            EventKind::Unknown => {}
        }
    }

    /// Message updates stream constantly; only user messages get a line.
    fn present_message_update(&mut self, props: &Value, verbose: bool) {
        if str_prop(props, "role") != Some("user") {
            return;
        }

        let body = nested_str_prop(props, "summary", "body");
        match body {
            Some(body) if verbose => self.block('═', "👤 USER PROMPT:", body),
            _ => self.emit("👤 User message received"),
        }
    }

    /// Part events: tool invocations and text fragments within a message.
    fn present_part(&mut self, props: &Value, verbose: bool) {
        match str_prop(props, "type") {
            Some("tool") => self.present_tool_part(props, verbose),
            Some("text") => self.present_text_part(props, verbose),
            _ => {}
        }
    }

    fn present_tool_part(&mut self, props: &Value, verbose: bool) {
        let tool = str_prop(props, "tool").unwrap_or("unknown");
        let status = nested_str_prop(props, "state", "status")
            .or_else(|| str_prop(props, "status"))
            .unwrap_or("");

        match status {
            "running" | "pending" => {
                self.emit(&format!("🔧 Tool: {tool} (starting)"));

                // Falsy values (null, "", 0) fall through like missing ones
                let empty = Value::Object(Default::default());
                let input = props
                    .get("state")
                    .and_then(|s| s.get("input"))
                    .filter(|v| is_truthy(v))
                    .or_else(|| props.get("input").filter(|v| is_truthy(v)))
                    .unwrap_or(&empty);

                if verbose {
                    let pretty = serde_json::to_string_pretty(input).unwrap_or_default();
                    self.emit(&format!("   Input: {pretty}"));
                } else if let Some(command) = str_prop(input, "command") {
                    let preview = truncate(command, self.config.command_preview);
                    self.emit(&format!("   └─ {preview}"));
                } else if let Some(file_path) = str_prop(input, "filePath") {
                    self.emit(&format!("   └─ {file_path}"));
                } else if let Some(pattern) = str_prop(input, "pattern") {
                    self.emit(&format!("   └─ pattern: {pattern}"));
                }
            }
            "completed" => {
                self.emit(&format!("✅ Tool: {tool} (completed)"));

                if verbose {
                    let result = nested_str_prop(props, "state", "result")
                        .or_else(|| str_prop(props, "result"))
                        .unwrap_or("");
                    if !result.is_empty() {
                        let preview = truncate(result, self.config.result_preview);
                        self.emit(&format!("   Result: {preview}"));
                    }
                }
            }
            "error" => {
                self.emit(&format!("❌ Tool: {tool} (error)"));
            }
            // Intermediate statuses stay quiet
            _ => {}
        }
    }

    fn present_text_part(&mut self, props: &Value, verbose: bool) {
        let text = str_prop(props, "text").unwrap_or("");
        if text.is_empty() {
            return;
        }

        if verbose {
            self.block('─', "📝 ASSISTANT RESPONSE:", text);
        } else {
            let preview = truncate(text, self.config.text_preview).replace('\n', " ");
            self.emit(&format!("📝 {preview}"));
        }
    }

    /// A bordered block: blank line, rule, title, rule, body, rule, blank
    /// line. The border glyph distinguishes user prompts from assistant text.
    fn block(&mut self, border: char, title: &str, body: &str) {
        let rule: String = std::iter::repeat(border).take(self.config.rule_width).collect();
        self.emit("");
        self.emit(&rule);
        self.emit(title);
        self.emit(&rule);
        self.emit(body);
        self.emit(&rule);
        self.emit("");
    }

    // The presenter never fails; a sink that stops accepting writes just
    // loses lines.
    fn emit(&mut self, line: &str) {
        let _ = writeln!(self.out, "{line}");
    }
}

/// Present one event to stdout with default configuration.
///
/// Convenience wrapper matching the common harness call site: verbosity is
/// re-read from `DEBUG_VERBOSE` on every call.
pub fn present_event(event: &ServerEvent) {
    EventPresenter::stdout().present(event);
}
