//! # agentlog
//!
//! A human-readable console presenter for agent eval harness event streams.
//!
//! The harness receives structured events from the agent runtime — session
//! lifecycle, message deltas, tool invocations — and this crate decides, per
//! event, whether to print anything and how to format it: short one-line
//! summaries by default, full bordered payload blocks when the
//! `DEBUG_VERBOSE` environment variable is `"true"`.
//!
//! ## Presenting events
//!
//! ```rust,ignore
//! use agentlog::{present_event, ServerEvent};
//!
//! // One line: "🔧 Tool call: grep"
//! present_event(&ServerEvent::from_json_line(
//!     r#"{"type":"tool.call","properties":{"tool":"grep"}}"#,
//! )?);
//! ```
//!
//! ## Debug-gated logging
//!
//! ```rust,ignore
//! use agentlog::HarnessLogger;
//!
//! let mut logger = HarnessLogger::new(false);
//! logger.log("3/3 assertions PASSED"); // always surfaces
//! logger.log("polling session dir");   // only in debug mode
//! logger.log_event(&event);            // only in debug mode
//! ```
//!
//! ## Capturing output in tests
//!
//! ```rust,ignore
//! use agentlog::{EventPresenter, PresenterConfig, Verbosity};
//!
//! let mut buf = Vec::new();
//! let config = PresenterConfig::new().verbosity(Verbosity::Verbose);
//! EventPresenter::new(&mut buf, config).present(&event);
//! let transcript = String::from_utf8(buf)?;
//! ```

pub mod event;
pub mod logger;
pub mod output;
pub mod replay;

// Event model
pub use event::{EventKind, EventParseError, ServerEvent};

// Presentation
pub use output::{present_event, truncate, EventPresenter, PresenterConfig, Verbosity, VerbositySource};

// Debug-gated logging
pub use logger::HarnessLogger;

// Replay
pub use replay::{replay, ReplayStats};
