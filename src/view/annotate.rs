use error_set::error_set;

use super::split::{ends_with_terminator, split_lines};
use super::window::{ContextSize, LineAction, SpanPosition, window};
use crate::engine::{DiffOperation, OpKind};

error_set! {
    /// Diff engine output that does not respect line boundaries
    SpanError := {
        /// An operation carried no text at all
        #[display("Diff operation {index} has an empty span")]
        EmptySpan { index: usize },
        /// A span stops mid-line although later spans continue the same text
        #[display("Diff operation {index} does not end on a line boundary")]
        UnterminatedSpan { index: usize },
        /// Line numbers ran past `u32::MAX`
        #[display("Text has too many lines to number")]
        TooManyLines,
    }
}

/// A line of the view before display tags are attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotatedLine {
    /// Unchanged line with its number in both texts
    Equal {
        old_line: u32,
        new_line: u32,
        content: String,
    },
    /// Added line with its number in the new text
    Insert { new_line: u32, content: String },
    /// Deleted line with its number in the old text
    Delete { old_line: u32, content: String },
    /// Marker for `count` elided unchanged lines
    Skip { count: u32 },
}

/// Running line counters and the lines emitted so far
struct WindowingState {
    old_line: u32,
    new_line: u32,
    lines: Vec<AnnotatedLine>,
}

impl WindowingState {
    fn new() -> Self {
        WindowingState {
            old_line: 1,
            new_line: 1,
            lines: Vec::new(),
        }
    }

    fn equal(&mut self, content: &str) -> Result<(), SpanError> {
        self.lines.push(AnnotatedLine::Equal {
            old_line: self.old_line,
            new_line: self.new_line,
            content: content.to_string(),
        });
        self.advance(1)
    }

    fn insert(&mut self, content: &str) -> Result<(), SpanError> {
        self.lines.push(AnnotatedLine::Insert {
            new_line: self.new_line,
            content: content.to_string(),
        });
        self.new_line = line_after(self.new_line, 1)?;
        Ok(())
    }

    fn delete(&mut self, content: &str) -> Result<(), SpanError> {
        self.lines.push(AnnotatedLine::Delete {
            old_line: self.old_line,
            content: content.to_string(),
        });
        self.old_line = line_after(self.old_line, 1)?;
        Ok(())
    }

    fn skip(&mut self, count: usize) -> Result<(), SpanError> {
        let marker = u32::try_from(count).map_err(|_| SpanError::TooManyLines)?;
        self.lines.push(AnnotatedLine::Skip { count: marker });
        self.advance(count)
    }

    /// Move both counters past unchanged lines
    fn advance(&mut self, count: usize) -> Result<(), SpanError> {
        self.old_line = line_after(self.old_line, count)?;
        self.new_line = line_after(self.new_line, count)?;
        Ok(())
    }
}

/// The line number `count` lines after `line`
fn line_after(line: u32, count: usize) -> Result<u32, SpanError> {
    u32::try_from(count)
        .ok()
        .and_then(|count| line.checked_add(count))
        .ok_or(SpanError::TooManyLines)
}

/// Turn a sequence of diff operations into numbered lines.
///
/// Operations are walked once, in order. Unchanged spans go through
/// [`window`] with `context`; inserted and deleted spans are emitted line by
/// line. Line numbers start at 1 in both texts.
///
/// # Errors
///
/// Returns [`SpanError`] if an operation has no text, if a span that is
/// followed by more text on the same side does not end in a line terminator,
/// or if a text has more lines than a `u32` line number can count.
pub fn annotate(
    ops: &[DiffOperation],
    context: ContextSize,
) -> Result<Vec<AnnotatedLine>, SpanError> {
    check_line_boundaries(ops)?;

    let mut state = WindowingState::new();

    for (index, op) in ops.iter().enumerate() {
        let lines = split_lines(&op.text);
        log::trace!("{:?} span {} with {} lines", op.kind, index, lines.len());

        match op.kind {
            OpKind::Equal => {
                let position = SpanPosition::of(index, ops.len());
                for action in window(&lines, context, position) {
                    match action {
                        LineAction::Keep(line) => state.equal(line)?,
                        LineAction::Skip { count } => {
                            log::trace!("Eliding {} unchanged lines", count);
                            state.skip(count)?;
                        }
                        LineAction::Hide { count } => state.advance(count)?,
                    }
                }
            }
            OpKind::Delete => {
                for line in &lines {
                    state.delete(line)?;
                }
            }
            OpKind::Insert => {
                for line in &lines {
                    state.insert(line)?;
                }
            }
        }
    }

    Ok(state.lines)
}

/// Check that every span ends on a line boundary.
///
/// Only the last span contributing to a text may lack a terminator, since
/// that text may itself end without one. Equal spans contribute to both.
fn check_line_boundaries(ops: &[DiffOperation]) -> Result<(), SpanError> {
    let last_old = ops.iter().rposition(|op| op.kind != OpKind::Insert);
    let last_new = ops.iter().rposition(|op| op.kind != OpKind::Delete);

    for (index, op) in ops.iter().enumerate() {
        if op.text.is_empty() {
            return Err(SpanError::EmptySpan { index });
        }
        if ends_with_terminator(&op.text) {
            continue;
        }

        let may_end_unterminated = match op.kind {
            OpKind::Equal => last_old == Some(index) && last_new == Some(index),
            OpKind::Delete => last_old == Some(index),
            OpKind::Insert => last_new == Some(index),
        };
        if !may_end_unterminated {
            return Err(SpanError::UnterminatedSpan { index });
        }
    }

    Ok(())
}
