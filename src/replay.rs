//! Replay of recorded event streams.
//!
//! Eval harness sessions are stored as JSONL, one event per line. Replay
//! feeds each decodable line through a presenter and counts the rest, so a
//! recorded run can be re-read as the console transcript it would have
//! produced live.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::event::ServerEvent;
use crate::output::EventPresenter;

/// Counts from one replay pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplayStats {
    /// Lines decoded and handed to the presenter.
    pub presented: usize,
    /// Non-blank lines that failed to decode as events.
    pub skipped: usize,
}

/// Replay a JSONL event stream through the presenter.
///
/// Blank lines are ignored; undecodable lines are counted as skipped rather
/// than failing the run, since session logs routinely interleave records the
/// presenter does not know about.
pub fn replay<R: BufRead, W: Write>(
    reader: R,
    presenter: &mut EventPresenter<W>,
) -> Result<ReplayStats> {
    let mut stats = ReplayStats::default();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match ServerEvent::from_json_line(line) {
            Ok(event) => {
                presenter.present(&event);
                stats.presented += 1;
            }
            Err(_) => stats.skipped += 1,
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{PresenterConfig, Verbosity};

    fn run(input: &str) -> (ReplayStats, String) {
        let mut buf = Vec::new();
        let config = PresenterConfig::new().verbosity(Verbosity::Terse);
        let mut presenter = EventPresenter::new(&mut buf, config);
        let stats = replay(input.as_bytes(), &mut presenter).unwrap();
        (stats, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_replay_presents_each_event() {
        let input = concat!(
            r#"{"type":"session.created"}"#,
            "\n",
            r#"{"type":"tool.call","properties":{"tool":"grep"}}"#,
            "\n",
        );
        let (stats, out) = run(input);
        assert_eq!(stats, ReplayStats { presented: 2, skipped: 0 });
        assert_eq!(out, "📋 Session created\n🔧 Tool call: grep\n");
    }

    #[test]
    fn test_replay_skips_blank_and_bad_lines() {
        let input = "\nnot json\n{\"type\":\"session.created\"}\n\n";
        let (stats, out) = run(input);
        assert_eq!(stats, ReplayStats { presented: 1, skipped: 1 });
        assert_eq!(out, "📋 Session created\n");
    }

    #[test]
    fn test_replay_counts_suppressed_events_as_presented() {
        // Presented means decoded and dispatched, not that a line printed
        let input = r#"{"type":"session.updated","properties":{"title":"x"}}"#;
        let (stats, out) = run(input);
        assert_eq!(stats.presented, 1);
        assert_eq!(out, "");
    }
}
