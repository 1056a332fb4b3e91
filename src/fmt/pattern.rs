//! User-defined line layouts.
//!
//! A pattern is literal text with `{field}` or `{field:argument}` placeholders:
//!
//! | placeholder | renders |
//! |---|---|
//! | `{level}` | level label, at least four characters wide |
//! | `{message}` | the message text |
//! | `{timestamp}` / `{timestamp:%H:%M}` | call time, default or strftime layout |
//! | `{file}` / `{file:short}` / `{file:full}` | calling file, base name by default |
//! | `{line}` | calling line |
//! | `{function}` / `{function:short\|package\|full}` | calling function, `package` by default |
//!
//! `{{` and `}}` produce literal braces. Nothing is appended implicitly: a
//! pattern without a trailing `\n` produces lines without one.

use super::{timestamp, timestamp_with};
use crate::caller::{CallerInfo, Locate};
use crate::level::Level;
use chrono::NaiveDateTime;
use std::cell::OnceCell;
use std::fmt;

/// How much of the calling file's path to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileMode {
    #[default]
    Short,
    Full,
}

impl FileMode {
    /// `"short"` selects the base name; any other argument means the full path.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg == "short" { Self::Short } else { Self::Full }
    }
}

/// How much of the calling function's path to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FunctionMode {
    Short,
    #[default]
    Package,
    Full,
}

impl FunctionMode {
    /// `"short"` and `"package"` select their modes; anything else means full.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "short" => Self::Short,
            "package" => Self::Package,
            _ => Self::Full,
        }
    }
}

/// Parsed once, rendered for every line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    Literal(String),
    Level,
    Message,
    /// `None` uses [`super::DEFAULT_TIMESTAMP_LAYOUT`].
    Timestamp(Option<String>),
    File(FileMode),
    Line,
    Function(FunctionMode),
}

/// Why a pattern could not be compiled or rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A `{` without a matching `}`.
    Unclosed { offset: usize },
    /// A single `}` outside a placeholder.
    UnmatchedBrace { offset: usize },
    /// A placeholder name that is not a known field.
    UnknownField(String),
    /// A timestamp layout chrono cannot format.
    InvalidTimestamp(String),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unclosed { offset } => write!(f, "unclosed '{{' at offset {offset}"),
            Self::UnmatchedBrace { offset } => write!(f, "unmatched '}}' at offset {offset}"),
            Self::UnknownField(name) => write!(f, "unknown field '{name}'"),
            Self::InvalidTimestamp(layout) => write!(f, "invalid timestamp layout '{layout}'"),
        }
    }
}

impl std::error::Error for PatternError {}

/// Everything a pattern can reference for one log call.
///
/// The caller location is resolved on first use and then cached, so a
/// pattern that prints both `{file}` and `{line}` walks the stack once, and a
/// pattern that prints neither never walks it.
pub struct RenderContext<'a> {
    level: Level,
    message: &'a str,
    now: NaiveDateTime,
    locator: &'a dyn Locate,
    skip: usize,
    caller: OnceCell<Option<CallerInfo>>,
}

impl<'a> RenderContext<'a> {
    #[must_use]
    pub fn new(
        level: Level,
        message: &'a str,
        now: NaiveDateTime,
        locator: &'a dyn Locate,
        skip: usize,
    ) -> Self {
        Self {
            level,
            message,
            now,
            locator,
            skip,
            caller: OnceCell::new(),
        }
    }

    fn caller(&self) -> Option<&CallerInfo> {
        self.caller
            .get_or_init(|| self.locator.locate(self.skip))
            .as_ref()
    }
}

/// A compiled line layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<PatternSegment>,
}

impl Pattern {
    /// `{timestamp} [{level}] - {message}\n`, used whenever a user pattern fails.
    pub const DEFAULT: &'static str = "{timestamp} [{level}] - {message}\n";

    /// Compiles a pattern.
    ///
    /// # Errors
    /// Returns [`PatternError`] on unbalanced braces or unknown field names.
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' if chars.peek().is_some_and(|&(_, next)| next == '{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek().is_some_and(|&(_, next)| next == '}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(PatternError::UnmatchedBrace { offset }),
                '{' => {
                    let body_start = offset + 1;
                    let Some(len) = source[body_start..].find('}') else {
                        return Err(PatternError::Unclosed { offset });
                    };
                    let body = &source[body_start..body_start + len];
                    if body.contains('{') {
                        return Err(PatternError::Unclosed { offset });
                    }

                    if !literal.is_empty() {
                        segments.push(PatternSegment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Self::field(body)?);

                    // Consume the placeholder body and its closing brace.
                    while chars.next_if(|&(i, _)| i <= body_start + len).is_some() {}
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(PatternSegment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    fn field(body: &str) -> Result<PatternSegment, PatternError> {
        let (name, arg) = match body.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg)),
            None => (body.trim(), None),
        };

        let segment = match name {
            "level" => PatternSegment::Level,
            "message" => PatternSegment::Message,
            "line" => PatternSegment::Line,
            "timestamp" => {
                PatternSegment::Timestamp(arg.filter(|a| !a.is_empty()).map(ToString::to_string))
            }
            "file" => PatternSegment::File(arg.map_or_else(FileMode::default, FileMode::from_arg)),
            "function" => PatternSegment::Function(
                arg.map_or_else(FunctionMode::default, FunctionMode::from_arg),
            ),
            _ => return Err(PatternError::UnknownField(name.to_string())),
        };

        Ok(segment)
    }

    /// The compiled default pattern.
    #[must_use]
    pub fn default_pattern() -> Self {
        Self {
            source: Self::DEFAULT.to_string(),
            segments: vec![
                PatternSegment::Timestamp(None),
                PatternSegment::Literal(" [".to_string()),
                PatternSegment::Level,
                PatternSegment::Literal("] - ".to_string()),
                PatternSegment::Message,
                PatternSegment::Literal("\n".to_string()),
            ],
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    /// True if rendering may need a stack walk.
    #[must_use]
    pub fn uses_caller(&self) -> bool {
        self.segments.iter().any(|s| {
            matches!(
                s,
                PatternSegment::File(_) | PatternSegment::Line | PatternSegment::Function(_)
            )
        })
    }

    /// Renders one line.
    ///
    /// # Errors
    /// Returns [`PatternError::InvalidTimestamp`] if a custom timestamp layout
    /// cannot be formatted.
    pub fn render(&self, ctx: &RenderContext<'_>) -> Result<String, PatternError> {
        let mut out = String::with_capacity(self.source.len() + ctx.message.len() + 32);

        for segment in &self.segments {
            match segment {
                PatternSegment::Literal(s) => out.push_str(s),
                PatternSegment::Level => out.push_str(&ctx.level.to_string()),
                PatternSegment::Message => out.push_str(ctx.message),
                PatternSegment::Timestamp(None) => out.push_str(&timestamp(ctx.now)),
                PatternSegment::Timestamp(Some(layout)) => {
                    let formatted = timestamp_with(ctx.now, layout)
                        .map_err(|_| PatternError::InvalidTimestamp(layout.clone()))?;
                    out.push_str(&formatted);
                }
                PatternSegment::File(mode) => {
                    out.push_str(ctx.caller().map_or(UNKNOWN, |c| c.file(*mode)));
                }
                PatternSegment::Line => {
                    let line = ctx.caller().map_or(0, |c| c.line);
                    out.push_str(&line.to_string());
                }
                PatternSegment::Function(mode) => {
                    out.push_str(ctx.caller().map_or(UNKNOWN, |c| c.function(*mode)));
                }
            }
        }

        Ok(out)
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::default_pattern()
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

const UNKNOWN: &str = "???";
