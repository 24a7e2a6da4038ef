use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use tcpping_report::demo::sample_bytes;
use tcpping_report::wire::{Header, Item, Report};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "tcpping-report-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_tcpping_decode"))
        .args(args)
        .output()
        .expect("run tcpping_decode")
}

#[test]
fn tcpping_decode_prints_sample_records_as_json() {
    let output = run(&["--sample", "--quiet"]);
    assert!(
        output.status.success(),
        "tcpping_decode failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let records: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is json");
    let records = records.as_array().expect("json array");
    assert_eq!(records.len(), 3);

    assert_eq!(records[0]["target"], "www.example.com");
    assert_eq!(records[0]["port"], 443);
    assert_eq!(records[0]["rtt"], 12.5);
    assert_eq!(records[0]["replyflags"]["syn"], true);
    assert_eq!(records[0]["dscp"], "EF");

    assert_eq!(records[1]["target"], "unknown");
    assert_eq!(records[1]["address"], "2001:db8::1");
    assert!(records[1]["replyflags"].is_null());
    assert_eq!(records[1]["loss"], 0);

    assert_eq!(records[2]["loss"], 1);
    assert!(records[2]["rtt"].is_null());
}

#[test]
fn tcpping_decode_reads_report_file() {
    let dir = unique_temp_dir("decode-file");
    let report = Report {
        header: Some(Header {
            port: Some(22),
            ..Default::default()
        }),
        reports: vec![Item {
            name: Some("ssh-host".to_string()),
            rtt: Some(0.75),
            ..Default::default()
        }],
    };
    let path = write_file(&dir, "report.bin", &report.to_bytes());

    let output = run(&["--input", path.to_str().unwrap(), "--quiet"]);
    assert!(output.status.success());
    let records: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is json");
    assert_eq!(records[0]["target"], "ssh-host");
    assert_eq!(records[0]["port"], 22);
    assert_eq!(records[0]["packet_size"], 64);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn tcpping_decode_exits_nonzero_on_truncated_report() {
    let dir = unique_temp_dir("decode-truncated");
    let mut bytes = sample_bytes();
    bytes.pop();
    let path = write_file(&dir, "report.bin", &bytes);

    let output = run(&["--input", path.to_str().unwrap(), "--quiet"]);
    assert!(
        !output.status.success(),
        "expected non-zero exit, got success"
    );
    assert!(output.stdout.is_empty(), "no records on failure");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("malformed report"),
        "stderr did not contain expected message: {stderr}"
    );

    let _ = fs::remove_dir_all(&dir);
}
