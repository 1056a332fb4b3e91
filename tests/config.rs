//! Tests for config loading and logger construction.

use abclog::config::{CONFIG_ENV, LEVEL_ENV, LoggerConfig, OutputConfig};
use abclog::{
    CallerInfo, Config, Error, FixedClock, FixedLocator, Level, Logger, LoggerBuilder, LoggerKind,
    MemorySink, Sink, internal,
};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tempfile::TempDir;

static ENV: Mutex<()> = Mutex::new(());

/// Holds `ENV` and sets or clears both config variables.
fn with_env(config: Option<&str>, level: Option<&str>) -> MutexGuard<'static, ()> {
    let guard = ENV.lock().unwrap_or_else(PoisonError::into_inner);
    for (key, value) in [(CONFIG_ENV, config), (LEVEL_ENV, level)] {
        // SAFETY: every test touching these variables holds `ENV`.
        unsafe {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }
    guard
}

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.logger.kind, "simple");
    assert_eq!(config.logger.level, "info");
    assert_eq!(config.logger.name, None);
    assert_eq!(config.logger.pattern, None);
    assert!(!config.logger.colored);
    assert_eq!(config.logger.caller_skip, 0);
    assert_eq!(config.output.target, "stdout");
    assert_eq!(config.output.path, None);
    assert_eq!(config.parse_level(), Level::Info);
}

#[test]
fn empty_toml_is_default() {
    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = Config::from_toml_str(
        r#"
        [logger]
        kind = "pattern"
        pattern = "{level} {message}"
        colored = true
        caller_skip = 2
        "#,
    )
    .unwrap();

    assert_eq!(
        config.logger,
        LoggerConfig {
            kind: "pattern".to_string(),
            level: "info".to_string(),
            name: None,
            pattern: Some("{level} {message}".to_string()),
            colored: true,
            caller_skip: 2,
        }
    );
    assert_eq!(config.output, OutputConfig::default());
}

#[test]
fn unknown_level_name_means_warn() {
    let config = Config::from_toml_str("[logger]\nlevel = \"loud\"\n").unwrap();
    assert_eq!(config.parse_level(), Level::Warn);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let result = Config::from_toml_str("[logger\nkind = ");
    assert!(matches!(result, Err(Error::ConfigParse(_))));
}

#[test]
fn missing_file_yields_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_from_reads_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("config.toml");
    fs::write(&path, "[logger]\nkind = \"named\"\nname = \"svc\"\nlevel = \"debug\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.logger.kind, "named");
    assert_eq!(config.logger.name.as_deref(), Some("svc"));
    assert_eq!(config.parse_level(), Level::Debug);
}

#[test]
fn build_file_target() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("logs").join("app.log");

    let config = Config::from_toml_str(&format!(
        r#"
        [logger]
        kind = "pattern"
        pattern = "[{{level}}] {{message}}\n"
        level = "debug"

        [output]
        target = "file"
        path = "{}"
        "#,
        path.display()
    ))
    .unwrap();

    let logger = config.build().unwrap();
    assert_eq!(logger.level(), Level::Debug);
    logger.verbose(&[&"hidden"]);
    logger.debug(&[&"shown"]);

    assert_eq!(fs::read_to_string(&path).unwrap(), "[DEBG] shown\n");
}

#[test]
fn build_discard_target() {
    let config = Config::from_toml_str("[output]\ntarget = \"discard\"\n").unwrap();
    let logger = config.build().unwrap();
    logger.info(&[&"gone"]);
    assert_eq!(logger.level(), Level::Info);
}

#[test]
fn file_target_without_path_fails() {
    let config = Config::from_toml_str("[output]\ntarget = \"file\"\n").unwrap();
    assert!(matches!(config.build(), Err(Error::InvalidPath(_))));
}

#[test]
fn invalid_pattern_fails_to_build() {
    let config = Config::from_toml_str("[logger]\nkind = \"pattern\"\npattern = \"{level\"\n").unwrap();
    assert!(matches!(config.build(), Err(Error::Pattern(_))));
}

#[test]
fn unknown_kind_falls_back_to_simple() {
    let diagnostics = MemorySink::new();
    internal::set_sink(Arc::new(diagnostics.clone()));

    let config = Config::from_toml_str(
        "[logger]\nkind = \"fancy\"\n[output]\ntarget = \"discard\"\n",
    )
    .unwrap();
    let builder = LoggerBuilder::from_config(&config).unwrap();
    let logger = builder.build().unwrap();

    assert_eq!(logger.level(), Level::Info);
    assert!(diagnostics.contents().contains("Unknown logger kind 'fancy'"));
}

#[test]
fn builder_simple_defaults() {
    let sink = MemorySink::new();
    let logger = LoggerBuilder::new()
        .clock(FixedClock::zero())
        .sink(sink.clone())
        .build()
        .unwrap();

    logger.info(&[&"abc"]);
    logger.debug(&[&"hidden"]);
    assert_eq!(sink.contents(), "0001-01-01 00:00:00.000 [INFO] - abc\n");
}

#[test]
fn builder_colored_named() {
    let sink = MemorySink::new();
    let logger = LoggerBuilder::new()
        .kind(LoggerKind::Named("db".to_string()))
        .level(Level::Warn)
        .clock(FixedClock::zero())
        .sink(sink.clone())
        .colored(true)
        .build()
        .unwrap();

    logger.info(&[&"hidden"]);
    logger.warn(&[&"slow query"]);
    assert_eq!(
        sink.contents(),
        "\x1b[33m0001-01-01 00:00:00.000 <db> [WARN] - slow query\n\x1b[0m"
    );
}

#[test]
fn builder_pattern_with_locator() {
    let sink = MemorySink::new();
    let logger = LoggerBuilder::new()
        .pattern("{file}:{line} {function:short} {message}")
        .locator(FixedLocator::new(CallerInfo::new("src/app.rs", 9, "app::run")))
        .sink(sink.clone())
        .build()
        .unwrap();

    logger.info(&[&"go"]);
    assert_eq!(sink.contents(), "app.rs:9 run go");
}

#[test]
fn builder_shared_sink() {
    let sink = MemorySink::new();
    let shared: Arc<dyn Sink> = Arc::new(sink.clone());
    let a = LoggerBuilder::new()
        .named("a")
        .clock(FixedClock::zero())
        .shared_sink(Arc::clone(&shared))
        .build()
        .unwrap();
    let b = LoggerBuilder::new()
        .named("b")
        .clock(FixedClock::zero())
        .shared_sink(shared)
        .build()
        .unwrap();

    a.info(&[&"1"]);
    b.info(&[&"2"]);
    assert_eq!(
        sink.contents(),
        "0001-01-01 00:00:00.000 <a> [INFO] - 1\n0001-01-01 00:00:00.000 <b> [INFO] - 2\n"
    );
}

#[test]
fn config_env_overrides_path() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("custom.toml");
    fs::write(&path, "[logger]\nkind = \"named\"\nname = \"env\"\n").unwrap();

    let _env = with_env(Some(path.to_str().unwrap()), None);
    assert_eq!(Config::config_path().unwrap(), path);

    let config = Config::load().unwrap();
    assert_eq!(config.logger.kind, "named");
    assert_eq!(config.logger.name.as_deref(), Some("env"));
    assert_eq!(config.parse_level(), Level::Info);
}

#[test]
fn config_env_expands_tilde() {
    let _env = with_env(Some("~/abclog/custom.toml"), None);
    let path = Config::config_path().unwrap();

    assert_eq!(
        path,
        PathBuf::from(shellexpand::tilde("~/abclog/custom.toml").as_ref())
    );
}

#[test]
fn empty_config_env_uses_platform_dir() {
    let _env = with_env(Some(""), None);
    match Config::config_path() {
        Ok(path) => {
            assert!(path.ends_with("config.toml"));
            assert!(path.to_string_lossy().contains("abclog"));
        }
        Err(e) => assert!(matches!(e, Error::ConfigDirNotFound)),
    }
}

#[test]
fn load_with_missing_file_yields_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("absent.toml");

    let _env = with_env(Some(path.to_str().unwrap()), None);
    assert_eq!(Config::load().unwrap(), Config::default());
}

#[test]
fn level_env_overrides_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("config.toml");
    fs::write(&path, "[logger]\nlevel = \"debug\"\n").unwrap();

    let _env = with_env(Some(path.to_str().unwrap()), Some("error"));
    let config = Config::load().unwrap();
    assert_eq!(config.logger.level, "error");
    assert_eq!(config.parse_level(), Level::Error);

    // load_from never looks at the environment.
    assert_eq!(Config::load_from(&path).unwrap().parse_level(), Level::Debug);
}

#[test]
fn apply_env_ignores_empty_level() {
    let _env = with_env(None, Some(""));
    let mut config = Config::from_toml_str("[logger]\nlevel = \"verbose\"\n").unwrap();
    config.apply_env();
    assert_eq!(config.parse_level(), Level::Verbose);
}

#[test]
fn apply_env_unknown_level_means_warn() {
    let _env = with_env(None, Some("shouty"));
    let mut config = Config::default();
    config.apply_env();
    assert_eq!(config.logger.level, "shouty");
    assert_eq!(config.parse_level(), Level::Warn);
}
