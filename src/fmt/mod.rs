//! Line rendering: timestamps, ANSI color codes, and the pattern mini-language.

mod color;
mod pattern;

pub use color::AnsiColor;
pub use pattern::{FileMode, FunctionMode, Pattern, PatternError, PatternSegment, RenderContext};

use chrono::NaiveDateTime;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write;

/// `YYYY-MM-DD HH:MM:SS.mmm`, shared by every built-in line format.
pub const DEFAULT_TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Formats `instant` with the default layout.
#[must_use]
pub fn timestamp(instant: NaiveDateTime) -> String {
    instant.format(DEFAULT_TIMESTAMP_LAYOUT).to_string()
}

/// Formats `instant` with a caller-supplied strftime layout.
///
/// # Errors
/// Returns `std::fmt::Error` if the layout contains an invalid specifier.
pub fn timestamp_with(instant: NaiveDateTime, layout: &str) -> Result<String, std::fmt::Error> {
    let items = StrftimeItems::new(layout);
    if items.clone().any(|item| matches!(item, Item::Error)) {
        return Err(std::fmt::Error);
    }
    let mut out = String::new();
    write!(out, "{}", instant.format_with_items(items))?;
    Ok(out)
}
