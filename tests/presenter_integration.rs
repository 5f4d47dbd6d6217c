//! End-to-end tests: events in, console transcript out.

use std::fs::File;
use std::io::{BufReader, Write};

use proptest::prelude::*;
use serde_json::json;
use tempfile::TempDir;

use agentlog::{
    replay, truncate, EventPresenter, HarnessLogger, PresenterConfig, ServerEvent, Verbosity,
};

fn render(event: &ServerEvent, verbosity: Verbosity) -> String {
    let mut buf = Vec::new();
    let config = PresenterConfig::new().verbosity(verbosity);
    EventPresenter::new(&mut buf, config).present(event);
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_tool_call_names_the_tool() {
    let event = ServerEvent::new("tool.call", json!({"tool": "grep"}));
    let out = render(&event, Verbosity::Terse);
    assert_eq!(out.lines().count(), 1);
    assert!(out.contains("grep"));
}

#[test]
fn test_tool_call_falls_back_to_unknown() {
    let event = ServerEvent::new("tool.call", json!({}));
    let out = render(&event, Verbosity::Terse);
    assert_eq!(out.lines().count(), 1);
    assert!(out.contains("unknown"));
}

#[test]
fn test_long_command_gets_starting_line_plus_truncated_continuation() {
    let command = "ls -la /very/long/path/that/exceeds/seventy/characters/for/sure/yes/it/does";
    assert!(command.chars().count() > 70);

    let event = ServerEvent::new(
        "part.updated",
        json!({
            "type": "tool",
            "tool": "bash",
            "state": {"status": "running", "input": {"command": command}}
        }),
    );
    let out = render(&event, Verbosity::Terse);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("bash"));
    assert!(lines[0].contains("starting"));

    let expected: String = command.chars().take(70).collect();
    assert!(lines[1].contains(&expected));
    assert!(lines[1].ends_with("..."));
}

#[test]
fn test_unrecognized_events_never_print() {
    for event_type in ["", "heartbeat", "session.renamed", "tool.progress"] {
        let event = ServerEvent::new(event_type, json!({"tool": "bash", "text": "hi"}));
        assert_eq!(render(&event, Verbosity::Terse), "");
        assert_eq!(render(&event, Verbosity::Verbose), "");
    }
}

#[test]
fn test_user_and_assistant_blocks_use_distinct_borders() {
    let user = ServerEvent::new(
        "message.updated",
        json!({"role": "user", "summary": {"body": "prompt body"}}),
    );
    let text = ServerEvent::new("part.updated", json!({"type": "text", "text": "reply body"}));

    let user_out = render(&user, Verbosity::Verbose);
    let text_out = render(&text, Verbosity::Verbose);

    assert!(user_out.contains(&"═".repeat(70)));
    assert!(!user_out.contains(&"─".repeat(70)));
    assert!(text_out.contains(&"─".repeat(70)));
    assert!(!text_out.contains(&"═".repeat(70)));
}

#[test]
fn test_logger_never_presents_events_when_debug_off() {
    // Pin verbosity verbose to show log_event gating ignores it entirely
    let config = PresenterConfig::new().verbosity(Verbosity::Verbose);
    let mut buf = Vec::new();

    {
        let mut logger = HarnessLogger::with_sink(false, &mut buf, config);
        for event_type in ["session.created", "tool.call", "part.updated", "nonsense"] {
            logger.log_event(&ServerEvent::new(event_type, json!({"tool": "bash"})));
        }
        logger.log("plain progress line");
        logger.log("results: 2 PASSED");
    }

    // Only the pass marker line survives
    assert_eq!(String::from_utf8(buf).unwrap(), "results: 2 PASSED\n");
}

#[test]
fn test_replay_session_file_produces_transcript() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.jsonl");

    let mut file = File::create(&path).unwrap();
    writeln!(file, r#"{{"type":"session.created","properties":{{"id":"s1"}}}}"#).unwrap();
    writeln!(file, r#"{{"type":"message.created","properties":{{"role":"user"}}}}"#).unwrap();
    writeln!(file, r#"{{"type":"session.updated","properties":{{"title":"t"}}}}"#).unwrap();
    writeln!(
        file,
        r#"{{"type":"part.updated","properties":{{"type":"tool","tool":"bash","state":{{"status":"running","input":{{"command":"ls"}}}}}}}}"#
    )
    .unwrap();
    writeln!(file, "this line is not an event").unwrap();
    writeln!(file, r#"{{"type":"tool.result","properties":{{"tool":"bash"}}}}"#).unwrap();
    drop(file);

    let mut buf = Vec::new();
    let config = PresenterConfig::new().verbosity(Verbosity::Terse);
    let mut presenter = EventPresenter::new(&mut buf, config);
    let reader = BufReader::new(File::open(&path).unwrap());
    let stats = replay(reader, &mut presenter).unwrap();

    assert_eq!(stats.presented, 5);
    assert_eq!(stats.skipped, 1);

    let out = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "📋 Session created",
            "💬 New message (user)",
            "🔧 Tool: bash (starting)",
            "   └─ ls",
            "✅ Tool result: bash",
        ]
    );
}

proptest! {
    /// Truncation law: output never exceeds limit + ellipsis, and strings at
    /// or under the limit pass through unchanged.
    #[test]
    fn test_truncate_respects_limit(s in ".*", limit in 0usize..200) {
        let out = truncate(&s, limit);
        prop_assert!(out.chars().count() <= limit + 3);

        if s.chars().count() <= limit {
            prop_assert_eq!(out, s);
        } else {
            prop_assert!(out.ends_with("..."));
        }
    }
}
