//! Tests for the color decorator.

use abclog::{
    AnsiColor, Clock, ColoredLogger, FixedClock, Level, Logger, MemorySink, NamedLogger,
    SimpleLogger,
};
use chrono::NaiveDate;
use std::sync::Arc;
use std::thread;

const LINE: &str = "0001-01-01 00:00:00.000";

fn colored(level: Level) -> (ColoredLogger<SimpleLogger>, MemorySink) {
    let sink = MemorySink::new();
    let inner = SimpleLogger::new();
    inner.set_level(level);
    inner.set_clock(Arc::new(FixedClock::zero()));
    inner.set_sink(Arc::new(sink.clone()));
    (ColoredLogger::new(inner), sink)
}

#[test]
fn info_is_green() {
    let (logger, sink) = colored(Level::Info);
    logger.info(&[&"abc"]);
    assert_eq!(
        sink.contents(),
        format!("\x1b[32;1m{LINE} [INFO] - abc\n\x1b[0m")
    );
}

#[test]
fn error_is_red() {
    let (logger, sink) = colored(Level::Info);
    logger.errorf(format_args!("disk {}", "full"));
    assert_eq!(
        sink.contents(),
        format!("\x1b[31m{LINE} [ERR ] - disk full\n\x1b[0m")
    );
}

#[test]
fn every_level_color() {
    let (logger, sink) = colored(Level::Verbose);
    let expected = [
        (Level::Verbose, "\x1b[30;1m", "DEBG"),
        (Level::Debug, "\x1b[0m", "DEBG"),
        (Level::Info, "\x1b[32;1m", "INFO"),
        (Level::Warn, "\x1b[33m", "WARN"),
        (Level::Error, "\x1b[31m", "ERR "),
        (Level::Fatal, "\x1b[31m", "FATAL"),
    ];

    for (level, code, label) in expected {
        assert_eq!(ColoredLogger::<SimpleLogger>::color_for(level).code(), code);
        logger.print(level, &[&"x"]);
        assert_eq!(sink.take(), format!("{code}{LINE} [{label}] - x\n\x1b[0m"));
    }
    assert_eq!(AnsiColor::RESET, "\x1b[0m");
}

#[test]
fn disabled_level_writes_nothing() {
    let (logger, sink) = colored(Level::Debug);
    logger.verbose(&[&"abc"]);
    logger.verbosef(format_args!("{}", "abc"));
    assert!(sink.is_empty());
    assert!(!logger.is_level_enabled(Level::Verbose));
    assert!(logger.is_level_enabled(Level::Debug));
}

#[test]
fn accessors_delegate_to_wrapped() {
    let (logger, _sink) = colored(Level::Info);

    logger.set_level(Level::Error);
    assert_eq!(logger.wrapped().level(), Level::Error);
    assert_eq!(logger.level(), Level::Error);

    let instant = NaiveDate::from_ymd_opt(2020, 2, 2)
        .unwrap()
        .and_hms_opt(1, 2, 3)
        .unwrap();
    logger.set_clock(Arc::new(FixedClock::new(instant)));
    assert_eq!(logger.wrapped().clock().now(), instant);
    assert_eq!(logger.clock().now(), instant);

    let replacement = MemorySink::new();
    logger.set_sink(Arc::new(replacement.clone()));
    logger.error(&[&"moved"]);
    assert_eq!(
        replacement.contents(),
        "\x1b[31m2020-02-02 01:02:03.000 [ERR ] - moved\n\x1b[0m"
    );
}

#[test]
fn wraps_named_logger() {
    let sink = MemorySink::new();
    let inner = NamedLogger::new("net");
    inner.set_clock(Arc::new(FixedClock::zero()));
    inner.set_sink(Arc::new(sink.clone()));
    let logger = ColoredLogger::new(inner);

    logger.warn(&[&"retry"]);
    assert_eq!(
        sink.contents(),
        format!("\x1b[33m{LINE} <net> [WARN] - retry\n\x1b[0m")
    );
    assert_eq!(logger.into_inner().name(), "net");
}

#[test]
fn wraps_shared_trait_object() {
    let sink = MemorySink::new();
    let inner: Arc<dyn Logger> = Arc::new(SimpleLogger::new());
    inner.set_clock(Arc::new(FixedClock::zero()));
    inner.set_sink(Arc::new(sink.clone()));

    let logger = ColoredLogger::new(Arc::clone(&inner));
    logger.info(&[&"shared"]);
    inner.info(&[&"plain"]);

    assert_eq!(
        sink.contents(),
        format!("\x1b[32;1m{LINE} [INFO] - shared\n\x1b[0m{LINE} [INFO] - plain\n")
    );
}

#[test]
fn concurrent_lines_keep_their_colors() {
    let (logger, sink) = colored(Level::Info);
    let logger = Arc::new(logger);

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..50 {
                    if t % 2 == 0 {
                        logger.infof(format_args!("t{t} i{i}"));
                    } else {
                        logger.warnf(format_args!("t{t} i{i}"));
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let contents = sink.contents();
    let lines: Vec<_> = contents.split_inclusive('\n').collect();
    // The reset code of one call is followed by the color code of the next,
    // so every line after the first starts with a reset.
    assert_eq!(lines.len(), 201);
    for line in &lines[..200] {
        let line = line.trim_start_matches("\x1b[0m");
        let ok = line.starts_with(&format!("\x1b[32;1m{LINE} [INFO] - t"))
            || line.starts_with(&format!("\x1b[33m{LINE} [WARN] - t"));
        assert!(ok, "interleaved line: {line:?}");
    }
    assert_eq!(lines[200], "\x1b[0m");
}

#[test]
fn raw_levels_map_to_colors() {
    for level in Level::all() {
        assert_eq!(AnsiColor::for_raw_level(level as u8), AnsiColor::for_level(level));
    }
    assert_eq!(AnsiColor::for_raw_level(6), AnsiColor::None);
    assert_eq!(AnsiColor::for_raw_level(u8::MAX).code(), "\x1b[0m");
    assert_eq!(AnsiColor::Red.to_string(), "\x1b[31m");
}
