use blockworld_core::SimTick;
use blockworld_testkit::{EventRecord, JsonlSink};
use std::path::Path;
use std::process::Command;

#[test]
fn deterministic_event_stream_can_be_written() {
    let mut sink = JsonlSink::create(std::env::temp_dir().join("blockworld_eventlog.jsonl"))
        .expect("can create temp log");
    let tick = SimTick::ZERO.advance(1);
    let record = EventRecord {
        tick,
        kind: "SmokeTest",
        payload: "ok",
    };
    sink.write(&record).expect("can write event");
}

#[test]
fn headless_binary_runs_shipped_script() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let events = std::env::temp_dir()
        .join("blockworld_smoke")
        .join("walk_and_dig.jsonl");
    let output = Command::new(env!("CARGO_BIN_EXE_blockworld"))
        .arg("--strict-config")
        .arg("--config")
        .arg(root.join("config/sandbox.toml"))
        .arg("--script")
        .arg(root.join("config/scripts/walk_and_dig.json"))
        .arg("--exit-when-script-finished")
        .arg("--seed")
        .arg("7")
        .arg("--events")
        .arg(&events)
        .output()
        .expect("binary runs");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("summary is JSON");
    assert_eq!(summary["seed"], 7);
    assert_eq!(summary["ticks"], 108);

    let log = std::fs::read_to_string(&events).expect("event log written");
    assert_eq!(
        log.lines().filter(|l| l.contains(r#""kind":"pose""#)).count(),
        108
    );
}
