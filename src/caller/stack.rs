//! Stack-walking caller resolution.

use super::{CallerInfo, Locate};

const CRATE_PREFIX: &str = concat!(env!("CARGO_CRATE_NAME"), "::");
const CRATE_IMPL: &str = concat!(" as ", env!("CARGO_CRATE_NAME"), "::");
const GLUE_PREFIXES: &[&str] = &["core::", "std::", "alloc::", "backtrace::"];

/// Walks the current stack with the `backtrace` crate.
///
/// Frames are classified by their demangled symbol name. The walk first passes
/// the unwinder's own frames, then the run of frames that belong to this crate
/// (loggers, decorators, root functions), and reports the first frame after
/// that run. Standard-library glue inside the run (closures run by `OnceCell`,
/// `Option` combinators and the like) does not end it. The `skip` argument of
/// [`Locate::locate`] then steps over that many additional caller frames,
/// for applications that route logging through their own helper functions.
///
/// Needs debug info. Release builds with inlining may resolve to an outer frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackLocator;

impl StackLocator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    /// Still inside the unwinder, before the first frame of this crate.
    Unwinder,
    /// Inside this crate's frames.
    Library,
    /// Past the library; `n` more caller frames to skip.
    Caller(usize),
}

impl Locate for StackLocator {
    fn locate(&self, skip: usize) -> Option<CallerInfo> {
        let mut state = Walk::Unwinder;
        let mut found = None;

        backtrace::trace(|frame| {
            backtrace::resolve_frame(frame, |symbol| {
                if found.is_some() {
                    return;
                }
                let name = symbol.name().map(|n| format!("{n:#}"));
                let kind = classify(name.as_deref());

                state = match (state, kind) {
                    (Walk::Unwinder, Frame::Own) | (Walk::Library, Frame::Own | Frame::Glue) => {
                        Walk::Library
                    }
                    (Walk::Unwinder, _) => Walk::Unwinder,
                    (Walk::Library, Frame::Foreign) => Walk::Caller(skip),
                    (Walk::Caller(n), Frame::Glue) => Walk::Caller(n),
                    (Walk::Caller(n), _) => Walk::Caller(n.saturating_sub(1)),
                };

                if let (Walk::Caller(0), Frame::Foreign, Some(function)) = (state, kind, name) {
                    found = Some(CallerInfo {
                        file: symbol
                            .filename()
                            .map(|p| p.display().to_string())
                            .unwrap_or_default(),
                        line: symbol.lineno().unwrap_or(0),
                        function,
                    });
                }
            });
            found.is_none()
        });

        found
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Own,
    Glue,
    Foreign,
}

fn classify(name: Option<&str>) -> Frame {
    let Some(name) = name else {
        return Frame::Glue;
    };
    let bare = name.trim_start_matches('<');
    if bare.starts_with(CRATE_PREFIX) || name.contains(CRATE_IMPL) {
        return Frame::Own;
    }
    if GLUE_PREFIXES.iter().any(|prefix| bare.starts_with(prefix)) {
        return Frame::Glue;
    }
    Frame::Foreign
}
