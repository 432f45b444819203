//! End-to-end summary tests.
//!
//! These exercise the whole pipeline against real JSON Lines inventories
//! in a temporary directory: spec validation, per-source tallying with a
//! failing source, aggregation, and writing both documents to disk.
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tallysleuth_core::inventory::{validate_all, JsonLinesInventory};
use tallysleuth_core::report::write_reports;
use tallysleuth_core::{Aggregator, SourceStatus, SpecError};
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_inventory(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut f = fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(f, "{line}").unwrap();
    }
    path
}

/// ToolA: 1 volume (emitted twice), 2 allocated regular files.
fn tool_a(dir: &Path) -> PathBuf {
    write_inventory(
        dir,
        "tool_a.jsonl",
        &[
            r#"{"kind":"volume","partition_offset":32256,"ftype":"ntfs"}"#,
            r#"{"kind":"file","filename":"a.txt","alloc_inode":true,"alloc_name":true,"name_type":"r"}"#,
            r#"{"kind":"volume","partition_offset":32256,"ftype":"ntfs"}"#,
            r#"{"kind":"file","filename":"b.txt","alloc":true,"name_type":"r"}"#,
        ],
    )
}

/// ToolB: broken from the very first line.
fn tool_b(dir: &Path) -> PathBuf {
    write_inventory(dir, "tool_b.jsonl", &["<dfxml version=\"1.0\">"])
}

fn summarize(dir: &Path) -> Aggregator {
    let args = vec![
        format!("ToolA:a:{}", tool_a(dir).display()),
        format!("ToolB:b:{}", tool_b(dir).display()),
    ];
    let specs = validate_all(&args).expect("specs are valid");

    let mut aggregator = Aggregator::new();
    for spec in &specs {
        aggregator.summarize(spec.label.clone(), &JsonLinesInventory::new(&spec.path));
    }
    aggregator
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// One good source and one source that fails after 0 records: the run
/// completes, ToolA's cells are filled, ToolB only appears under `f/`.
#[test]
fn failing_source_does_not_abort_the_run() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let aggregator = summarize(tmp.path());

    assert_eq!(aggregator.tally("ToolA").unwrap().status(), SourceStatus::Success);
    assert_eq!(aggregator.tally("ToolB").unwrap().status(), SourceStatus::Failure);

    let stats = aggregator.statistics();
    assert_eq!(stats.lookup("s/volumes/ToolA"), "1");
    assert_eq!(stats.lookup("s/allocated/files/ToolA"), "2");
    assert_eq!(stats.get("f/volumes/ToolB"), Some("0"));
    assert_eq!(stats.get("s/volumes/ToolB"), None);

    let out = TempDir::new().unwrap();
    let written = write_reports(&aggregator, out.path()).expect("reports written");
    assert_eq!(
        written,
        vec![out.path().join("summary.tex"), out.path().join("summary.html")]
    );

    let html = fs::read_to_string(out.path().join("summary.html")).unwrap();
    assert!(html.contains("for 2 DFXML-producing storage parsers."));
    assert!(html.contains("<th>ToolA</th><th>ToolB</th>"));
    assert!(html.contains("<tr><th>Partitions processed</th><td>1</td><td>0</td></tr>"));
    assert!(html.contains("<tr><th>Allocated files</th><td>2</td><td>0</td></tr>"));

    let tex = fs::read_to_string(out.path().join("summary.tex")).unwrap();
    assert!(tex.contains(r"\begin{tabular}{|l|r|r|}"));
    assert!(tex.contains(r"& ToolA& ToolB \\"));
    assert!(tex.contains(r"Partitions processed & 1 & 0  \\"));
    assert!(tex.contains(r"Allocated files & 2 & 0  \\"));
}

/// A source that breaks mid-stream keeps what it counted before the error.
#[test]
fn partial_counts_survive_a_mid_stream_error() {
    let tmp = TempDir::new().unwrap();
    let path = write_inventory(
        tmp.path(),
        "partial.jsonl",
        &[
            r#"{"kind":"volume","partition_offset":0}"#,
            r#"{"kind":"file","alloc":true,"name_type":"r"}"#,
            r#"{"kind":"file","alloc":false,"name_type":"r"}"#,
            r#"{"kind":"file","alloc_inode":false,"alloc_name":true,"name_type":"d"}"#,
            r#"{"kind":"file","alloc":"#,
            r#"{"kind":"file","alloc":true,"name_type":"r"}"#,
        ],
    );

    let mut aggregator = Aggregator::new();
    let status = aggregator.summarize("Partial", &JsonLinesInventory::new(&path));
    assert_eq!(status, SourceStatus::Failure);

    let tally = aggregator.tally("Partial").unwrap();
    assert_eq!(tally.volume_count(), 1);
    assert_eq!(tally.file_count(), 3);

    let stats = aggregator.statistics();
    assert_eq!(stats.lookup("f/volumes/Partial"), "1");
    assert_eq!(stats.lookup("f/allocated/files/Partial"), "1");
    assert_eq!(stats.lookup("f/unallocated/files/Partial"), "1");
    assert_eq!(stats.lookup("f/unallocated/dirs/Partial"), "1");
}

fn render(order: &[(&str, &Path)]) -> (String, String) {
    let mut aggregator = Aggregator::new();
    for &(label, path) in order {
        aggregator.summarize(label, &JsonLinesInventory::new(path));
    }
    let out = TempDir::new().unwrap();
    write_reports(&aggregator, out.path()).unwrap();
    (
        fs::read_to_string(out.path().join("summary.tex")).unwrap(),
        fs::read_to_string(out.path().join("summary.html")).unwrap(),
    )
}

/// Documents are byte-identical whatever order the sources are given in.
#[test]
fn argument_order_does_not_change_documents() {
    let tmp = TempDir::new().unwrap();
    let a = tool_a(tmp.path());
    let b = write_inventory(
        tmp.path(),
        "tool_c.jsonl",
        &[r#"{"kind":"file","alloc":false,"name_type":"l"}"#],
    );

    let forward = render(&[("A", a.as_path()), ("C", b.as_path())]);
    let reverse = render(&[("C", b.as_path()), ("A", a.as_path())]);
    assert_eq!(forward, reverse);
}

/// A nonexistent inventory is rejected before anything is summarised.
#[test]
fn missing_inventory_is_rejected_up_front() {
    let tmp = TempDir::new().unwrap();
    let good = format!("ToolA:a:{}", tool_a(tmp.path()).display());
    let missing = format!("ToolB:b:{}", tmp.path().join("absent.jsonl").display());

    match validate_all(&[good, missing]) {
        Err(SpecError::NotFound { path }) => assert!(path.ends_with("absent.jsonl")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}
