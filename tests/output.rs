//! Tests for the built-in sinks.

use abclog::{
    Console, Discard, FileSink, FixedClock, Logger, MemorySink, MultiSink, Sink, SimpleLogger, WriterSink,
};
use std::fs;
use std::io;
use std::sync::Arc;
use tempfile::TempDir;

struct FailingSink;

impl Sink for FailingSink {
    fn write(&self, _bytes: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("broken pipe"))
    }
}

#[test]
fn memory_sink_clones_share_buffer() {
    let sink = MemorySink::new();
    let handle = sink.clone();
    sink.write(b"abc").unwrap();
    assert_eq!(handle.contents(), "abc");
    assert_eq!(handle.take(), "abc");
    assert!(sink.is_empty());
}

#[test]
fn memory_sink_keeps_raw_bytes() {
    let sink = MemorySink::new();
    sink.write(&[0xff, b'a']).unwrap();
    assert_eq!(sink.bytes(), vec![0xff, b'a']);
    assert_eq!(sink.contents(), "\u{fffd}a");

    sink.clear();
    assert!(sink.bytes().is_empty());
}

#[test]
fn console_streams() {
    assert!(!Console::stdout().is_stderr());
    assert!(Console::stderr().is_stderr());
    assert_eq!(Console::default(), Console::stdout());

    let sink = Console::stderr();
    assert_eq!(sink.write(b"").unwrap(), 0);
    sink.flush().unwrap();
}

#[test]
fn discard_reports_full_length() {
    assert_eq!(Discard.write(b"12345").unwrap(), 5);
}

#[test]
fn writer_sink_wraps_any_writer() {
    let sink = WriterSink::new(Vec::new());
    sink.write(b"hello ").unwrap();
    sink.write(b"world").unwrap();
    assert_eq!(sink.into_inner(), b"hello world");
}

#[test]
fn multi_sink_fans_out() {
    let a = MemorySink::new();
    let b = MemorySink::new();
    let multi = MultiSink::new().with(a.clone()).with(b.clone());
    assert_eq!(multi.len(), 2);

    multi.write(b"line\n").unwrap();
    assert_eq!(a.contents(), "line\n");
    assert_eq!(b.contents(), "line\n");
}

#[test]
fn multi_sink_keeps_writing_after_failure() {
    let tail = MemorySink::new();
    let multi = MultiSink::new().with(FailingSink).with(tail.clone());

    assert!(multi.write(b"x").is_err());
    assert_eq!(tail.contents(), "x");
}

#[test]
fn logger_ignores_sink_errors() {
    let logger = SimpleLogger::new();
    logger.set_sink(Arc::new(FailingSink));
    logger.info(&[&"nobody hears this"]);
}

#[test]
fn file_sink_appends_lines() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("nested").join("app.log");

    let logger = SimpleLogger::new();
    logger.set_clock(Arc::new(FixedClock::zero()));
    logger.set_sink(Arc::new(FileSink::open(&path).unwrap()));

    logger.info(&[&"first"]);
    logger.warn(&[&"second"]);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "0001-01-01 00:00:00.000 [INFO] - first\n0001-01-01 00:00:00.000 [WARN] - second\n"
    );
}

#[test]
fn file_sink_reopens_in_append_mode() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");

    FileSink::open(&path).unwrap().write(b"one\n").unwrap();
    let sink = FileSink::open(&path).unwrap();
    sink.write(b"two\n").unwrap();
    sink.flush().unwrap();

    assert_eq!(sink.path(), path.as_path());
    assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
}

#[test]
fn file_sink_rejects_empty_path() {
    assert!(FileSink::open("").is_err());
}
