//! Context windowing for unchanged spans.
//!
//! Long runs of unchanged lines are cut down to [`ContextSize`] lines on
//! each side of a change. What gets cut depends on where the run sits:
//!
//! - A **leading** run (the first span) keeps only its last lines, the
//!   context right before the first change.
//! - A **trailing** run (the last span) keeps only its first lines, the
//!   context right after the last change.
//! - An **interior** run keeps context on both sides and replaces the
//!   middle with a single skip marker.
//!
//! Windowing never applies to inserted or deleted spans.

use std::num::NonZeroU32;

/// Number of unchanged lines to keep on each side of a change.
///
/// Zero disables windowing entirely, the same as leaving it unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ContextSize(Option<NonZeroU32>);

impl ContextSize {
    /// Show every unchanged line
    pub const DISABLED: Self = Self(None);

    /// Keep `lines` lines of context; `0` disables windowing
    #[must_use]
    pub const fn new(lines: u32) -> Self {
        Self(NonZeroU32::new(lines))
    }

    /// Build from a signed value, disabling windowing for anything non-positive
    #[must_use]
    pub fn from_signed(lines: i64) -> Self {
        u32::try_from(lines).map_or(Self::DISABLED, Self::new)
    }

    /// The configured number of context lines, if windowing is enabled
    #[must_use]
    pub fn get(self) -> Option<u32> {
        self.0.map(NonZeroU32::get)
    }

    /// Whether unchanged spans get cut down at all
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self.0.is_some()
    }
}

impl From<u32> for ContextSize {
    fn from(lines: u32) -> Self {
        Self::new(lines)
    }
}

impl From<Option<u32>> for ContextSize {
    fn from(lines: Option<u32>) -> Self {
        lines.map_or(Self::DISABLED, Self::new)
    }
}

/// Where an unchanged span sits in the full operation sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanPosition {
    /// First span: unchanged text before any change
    Leading,
    /// Last span: unchanged text after every change
    Trailing,
    /// Bounded by changes on both sides
    Interior,
}

impl SpanPosition {
    /// Position of span `index` in a sequence of `count` spans.
    ///
    /// A span that is both first and last counts as leading.
    #[must_use]
    pub fn of(index: usize, count: usize) -> Self {
        if index == 0 {
            SpanPosition::Leading
        } else if index + 1 == count {
            SpanPosition::Trailing
        } else {
            SpanPosition::Interior
        }
    }
}

/// What to do with the lines of an unchanged span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction<'a> {
    /// Emit this line as unchanged
    Keep(&'a str),
    /// Emit one skip marker standing in for `count` lines
    Skip { count: usize },
    /// Advance past `count` lines without emitting anything
    Hide { count: usize },
}

/// Decide which lines of an unchanged span to show.
///
/// Returns the actions in emission order. Spans no longer than the context
/// size, and interior spans no longer than twice the context size, are kept
/// whole.
#[must_use]
pub fn window<'a>(
    lines: &[&'a str],
    context: ContextSize,
    position: SpanPosition,
) -> Vec<LineAction<'a>> {
    let keep_all =
        || -> Vec<LineAction<'a>> { lines.iter().copied().map(LineAction::Keep).collect() };

    let Some(context) = context.get() else {
        return keep_all();
    };
    let context = context as usize;
    if lines.len() <= context {
        return keep_all();
    }

    match position {
        SpanPosition::Leading => {
            let hidden = lines.len() - context;
            std::iter::once(LineAction::Hide { count: hidden })
                .chain(lines[hidden..].iter().copied().map(LineAction::Keep))
                .collect()
        }
        SpanPosition::Trailing => lines[..context]
            .iter()
            .copied()
            .map(LineAction::Keep)
            .collect(),
        SpanPosition::Interior if lines.len() > 2 * context => {
            let skipped = lines.len() - 2 * context;
            lines[..context]
                .iter()
                .copied()
                .map(LineAction::Keep)
                .chain(std::iter::once(LineAction::Skip { count: skipped }))
                .chain(lines[context + skipped..].iter().copied().map(LineAction::Keep))
                .collect()
        }
        SpanPosition::Interior => keep_all(),
    }
}
