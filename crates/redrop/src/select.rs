//! Line selection.
//!
//! Single pass over the source file: blank lines are dropped, lines inside
//! the requested range are collected, and the last `set search_path` line
//! seen strictly before the range is captured for later resolution.

use regex::Regex;

use crate::error::{RedropError, Result};
use crate::rules::SEARCH_PATH_PATTERN;

/// An optional inclusive line range, 1-indexed.
///
/// An absent `start` means "from the beginning", an absent `stop` means
/// "to the end of the file".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineRange {
    /// First selected line, 1-indexed.
    pub start: Option<u32>,
    /// Last selected line, 1-indexed.
    pub stop: Option<u32>,
}

impl LineRange {
    /// Creates a line range, validating that `start <= stop` when both
    /// bounds are present.
    ///
    /// # Errors
    ///
    /// Returns [`RedropError::InvalidRange`] for an inverted range.
    pub fn new(start: Option<u32>, stop: Option<u32>) -> Result<Self> {
        if let (Some(start), Some(stop)) = (start, stop) {
            if start > stop {
                return Err(RedropError::InvalidRange { start, stop });
            }
        }
        Ok(Self { start, stop })
    }

    /// A range covering the whole file.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            stop: None,
        }
    }
}

/// The outcome of one selection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Selected non-blank lines, in source order, without trailing newlines.
    pub lines: Vec<String>,
    /// The last `set search_path` line found strictly before the range,
    /// if any was looked for and found.
    pub search_path: Option<String>,
}

/// Selects the non-blank lines of `source` inside `range`.
///
/// When `search_path_given` is false and the range has a lower bound, the
/// pre-range lines are additionally scanned for `set search_path`
/// declarations; the last one before the range wins. Search-path lines
/// inside the range are selected like any other line and pass through to
/// the output verbatim.
#[must_use]
pub fn select(source: &str, range: &LineRange, search_path_given: bool) -> Selection {
    let search_path = Regex::new(SEARCH_PATH_PATTERN).expect("search-path pattern is valid");

    let mut lines = Vec::new();
    let mut discovered = None;

    for (number, raw) in (1..).zip(source.lines()) {
        if range.stop.is_some_and(|stop| number > stop) {
            break;
        }

        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        if range.start.is_some_and(|start| number < start) {
            // Still before the range: keep overwriting so the declaration
            // closest to the range wins.
            if !search_path_given && search_path.is_match(line) {
                discovered = Some(line.to_string());
            }
            continue;
        }

        lines.push(line.to_string());
    }

    Selection {
        lines,
        search_path: discovered,
    }
}
