//! Where a log call came from.
//!
//! Pattern loggers can print the calling file, line and function. Resolving
//! those is isolated behind [`Locate`] so the stack walk can be swapped for a
//! fixed answer in tests, and so the number of caller-side frames to skip is a
//! parameter instead of a constant baked into the logger.

mod stack;

pub use stack::StackLocator;

use crate::fmt::{FileMode, FunctionMode};
use std::path::Path;

/// File, line and function of one stack frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallerInfo {
    pub file: String,
    pub line: u32,
    /// Fully qualified function path, e.g. `my_app::net::connect`.
    pub function: String,
}

impl CallerInfo {
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }

    /// `Short` is the base name, `Full` the path as recorded in debug info.
    #[must_use]
    pub fn file(&self, mode: FileMode) -> &str {
        match mode {
            FileMode::Full => &self.file,
            FileMode::Short => Path::new(&self.file)
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(&self.file),
        }
    }

    /// `Short` keeps the last path segment, `Package` the last two, `Full`
    /// everything. A `<Type as Trait>` prefix counts as one segment.
    #[must_use]
    pub fn function(&self, mode: FunctionMode) -> &str {
        let keep = match mode {
            FunctionMode::Full => return &self.function,
            FunctionMode::Package => 2,
            FunctionMode::Short => 1,
        };
        tail_segments(&self.function, keep)
    }
}

/// Keeps the last `keep` `::`-separated segments. Separators inside `<...>`
/// (qualified trait impls, generic arguments) do not split.
fn tail_segments(path: &str, keep: usize) -> &str {
    let bytes = path.as_bytes();
    let mut separators = Vec::new();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' if i == 0 || bytes[i - 1] != b'-' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                separators.push(i);
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }

    match separators.len().checked_sub(keep) {
        Some(idx) => &path[separators[idx] + 2..],
        None => path,
    }
}

/// Resolves the caller of a logging entry point.
pub trait Locate: Send + Sync {
    /// Returns the first frame outside the logging library, after skipping
    /// `skip` further frames. `None` when no frame information is available.
    fn locate(&self, skip: usize) -> Option<CallerInfo>;
}

/// Always answers with the same location.
#[derive(Debug, Clone, Default)]
pub struct FixedLocator {
    caller: Option<CallerInfo>,
}

impl FixedLocator {
    #[must_use]
    pub const fn new(caller: CallerInfo) -> Self {
        Self {
            caller: Some(caller),
        }
    }

    /// A locator that never finds anything.
    #[must_use]
    pub const fn unknown() -> Self {
        Self { caller: None }
    }
}

impl Locate for FixedLocator {
    fn locate(&self, _skip: usize) -> Option<CallerInfo> {
        self.caller.clone()
    }
}
