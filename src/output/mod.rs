//! Console presentation of server events.
//!
//! This module turns one event record into zero or more human-readable
//! lines: short summaries by default, bordered full-payload blocks when
//! verbose mode is on.
//!
//! # Example
//!
//! ```rust,ignore
//! use agentlog::output::{EventPresenter, PresenterConfig, Verbosity};
//!
//! let config = PresenterConfig::new().verbosity(Verbosity::Verbose);
//! let mut presenter = EventPresenter::new(std::io::stdout(), config);
//! presenter.present(&event);
//! ```

mod config;
mod presenter;

pub use config::{PresenterConfig, Verbosity, VerbositySource};
pub use presenter::{present_event, truncate, EventPresenter};
