use std::fs;
use std::io::Write;
use std::path::PathBuf;

use seabattle::{GameRecord, JsonLinesSink, LogSink, Outcome, ResultSink, SinkConfig};

fn scratch_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("seabattle-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir.join("nested").join("results.jsonl")
}

#[test]
fn open_creates_the_store() {
    let path = scratch_path("open");
    let sink = JsonLinesSink::open(SinkConfig { path: path.clone() }).unwrap();
    assert!(path.exists());
    assert!(sink.records().unwrap().is_empty());
}

#[test]
fn records_get_increasing_ids() {
    let path = scratch_path("ids");
    let mut sink = JsonLinesSink::open(SinkConfig { path: path.clone() }).unwrap();
    sink.record_result("Ada", Outcome::Win, 42).unwrap();
    sink.record_result("Grace", Outcome::Lose, 57).unwrap();

    // a fresh sink over the same file continues the sequence
    let mut again = JsonLinesSink::lazy(SinkConfig { path: path.clone() });
    again.record_result("Ada", Outcome::Lose, 60).unwrap();

    let records = again.records().unwrap();
    assert_eq!(
        records,
        vec![
            GameRecord {
                id: 1,
                player_name: "Ada".into(),
                outcome: Outcome::Win,
                moves: 42
            },
            GameRecord {
                id: 2,
                player_name: "Grace".into(),
                outcome: Outcome::Lose,
                moves: 57
            },
            GameRecord {
                id: 3,
                player_name: "Ada".into(),
                outcome: Outcome::Lose,
                moves: 60
            },
        ]
    );
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.lines().next().unwrap().contains("\"outcome\":\"win\""));
}

#[test]
fn missing_file_reads_as_empty() {
    let sink = JsonLinesSink::lazy(SinkConfig {
        path: scratch_path("missing"),
    });
    assert!(sink.records().unwrap().is_empty());
}

#[test]
fn unwritable_store_reports_an_error() {
    // a directory where the file should be
    let path = scratch_path("unwritable");
    fs::create_dir_all(&path).unwrap();
    let mut sink = JsonLinesSink::lazy(SinkConfig { path });
    assert!(sink.record_result("Ada", Outcome::Win, 10).is_err());
}

#[test]
fn truncated_record_does_not_block_later_results() {
    let path = scratch_path("truncated");
    let mut sink = JsonLinesSink::open(SinkConfig { path: path.clone() }).unwrap();
    sink.record_result("Ada", Outcome::Win, 30).unwrap();

    // an interrupted append leaves half a record without a newline
    let mut file = fs::OpenOptions::new().append(true).open(&path).unwrap();
    file.write_all(b"{\"id\":2,\"player_na").unwrap();
    drop(file);

    for moves in [40, 50, 60] {
        sink.record_result("Grace", Outcome::Lose, moves).unwrap();
    }

    let records = sink.records().unwrap();
    let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(records[1].moves, 40);
    assert_eq!(records[3].moves, 60);

    // the fragment stays on its own line
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 5);
    assert_eq!(text.lines().nth(1), Some("{\"id\":2,\"player_na"));
}

#[test]
fn log_sink_accepts_everything() {
    let mut sink = LogSink;
    assert!(sink.record_result("Ada", Outcome::Win, 17).is_ok());
}
