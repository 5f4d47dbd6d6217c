//! Debug-gated harness logger.
//!
//! Test runs are quiet by default: plain log lines only surface when debug
//! mode is on or when they carry a pass/fail marker, and event presentation
//! is skipped entirely outside debug mode.

use std::io::{self, Write};

use crate::event::ServerEvent;
use crate::output::{EventPresenter, PresenterConfig};

/// A logger whose output is gated on the harness debug flag.
///
/// Construction has no side effects. `log` always lets `PASSED`/`FAILED`
/// summaries through so results are visible in quiet runs; `log_event`
/// presents events only in debug mode, independent of the `DEBUG_VERBOSE`
/// flag (which only controls detail *within* presentation).
pub struct HarnessLogger<W: Write> {
    debug: bool,
    config: PresenterConfig,
    out: W,
}

impl HarnessLogger<io::Stdout> {
    /// Create a stdout logger with default presenter configuration.
    pub fn new(debug: bool) -> Self {
        Self::with_sink(debug, io::stdout(), PresenterConfig::new())
    }
}

impl<W: Write> HarnessLogger<W> {
    /// Create a logger writing to the given sink.
    pub fn with_sink(debug: bool, out: W, config: PresenterConfig) -> Self {
        Self { debug, config, out }
    }

    /// Print a plain message if debug mode is on or the message carries a
    /// pass/fail marker.
    pub fn log(&mut self, message: &str) {
        if self.debug || message.contains("PASSED") || message.contains("FAILED") {
            let _ = writeln!(self.out, "{message}");
        }
    }

    /// Present an event if debug mode is on; otherwise a no-op.
    pub fn log_event(&mut self, event: &ServerEvent) {
        if self.debug {
            EventPresenter::new(&mut self.out, self.config).present(event);
        }
    }
}
