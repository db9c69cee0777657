//! Plain-text rendering of diff views.
//!
//! Each record becomes one row with the old and new line numbers in
//! right-aligned columns, a change marker, and the line content:
//!
//! ```text
//!  2  2   shared 1
//!         ...
//! 22    - old last
//!    22 + new last
//! ```

use std::fmt;

use crate::DiffView;
use crate::view::{LineKind, LineRecord, LineSelection};

fn marker(kind: LineKind) -> char {
    match kind {
        LineKind::Equal | LineKind::Skip => ' ',
        LineKind::Insert => '+',
        LineKind::Delete => '-',
    }
}

/// Digits needed for the largest line number in the view
fn number_width(lines: &[LineRecord]) -> usize {
    lines
        .iter()
        .flat_map(|line| [line.old_line_number, line.new_line_number])
        .flatten()
        .max()
        .map_or(1, |n| n.to_string().len())
}

fn number_or_blank(number: Option<u32>) -> String {
    number.map(|n| n.to_string()).unwrap_or_default()
}

impl fmt::Display for DiffView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = number_width(&self.lines);

        for line in &self.lines {
            let prefix = format!(
                "{:>width$} {:>width$} {}",
                number_or_blank(line.old_line_number),
                number_or_blank(line.new_line_number),
                marker(line.kind),
            );
            if line.content.is_empty() {
                writeln!(f, "{}", prefix.trim_end())?;
            } else {
                writeln!(f, "{} {}", prefix, line.content)?;
            }
        }

        Ok(())
    }
}

/// Render a selected line as a one-line summary
///
/// # Examples
///
/// ```
/// use line_diff_view::{ContextSize, compute, render_selection};
///
/// let view = compute("a\n", "b\n", ContextSize::DISABLED).unwrap();
/// let selection = view.select(1).unwrap();
/// assert_eq!(render_selection(&selection), "#1 insert old=- new=1: b");
/// ```
#[must_use]
pub fn render_selection(selection: &LineSelection) -> String {
    let number = |n: Option<u32>| n.map_or_else(|| "-".to_string(), |n| n.to_string());
    format!(
        "#{} {} old={} new={}: {}",
        selection.index,
        selection.kind,
        number(selection.old_line_number),
        number(selection.new_line_number),
        selection.content
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{ContextSize, compute};
    use similar_asserts::assert_eq;

    #[test]
    fn render_single_replacement() {
        let view = compute("a\nold\n", "a\nnew\n", ContextSize::DISABLED).unwrap();
        assert_eq!(view.to_string(), "1 1   a\n2   - old\n  2 + new\n");
    }

    #[test]
    fn render_skip_row_aligns_with_content() {
        let shared: String = (1..=20).map(|i| format!("shared {}\n", i)).collect();
        let old = format!("old first\n{}old last\n", shared);
        let new = format!("new first\n{}new last\n", shared);
        let view = compute(&old, &new, ContextSize::new(2)).unwrap();

        let expected = [
            " 1    - old first",
            "    1 + new first",
            " 2  2   shared 1",
            " 3  3   shared 2",
            "        ...",
            "20 20   shared 19",
            "21 21   shared 20",
            "22    - old last",
            "   22 + new last",
        ]
        .map(|row| format!("{}\n", row))
        .concat();
        assert_eq!(view.to_string(), expected);
    }

    #[test]
    fn render_trims_padding_of_empty_lines() {
        let view = compute("keep\n\n", "keep\n", ContextSize::DISABLED).unwrap();
        assert_eq!(view.to_string(), "1 1   keep\n2   -\n");
    }

    #[test]
    fn render_keeps_trailing_whitespace_of_content() {
        let view = compute("a \n", "a\n", ContextSize::DISABLED).unwrap();
        assert_eq!(view.to_string(), "1   - a \n  1 + a\n");
    }

    #[test]
    fn render_content_equal_is_empty() {
        let view = compute("same\n", "same\n", ContextSize::DISABLED).unwrap();
        assert_eq!(view.to_string(), "");
    }

    #[test]
    fn render_selection_of_equal_line() {
        let view = compute("a\nb\n", "a\nc\n", ContextSize::DISABLED).unwrap();
        let selection = view.select(0).unwrap();
        assert_eq!(render_selection(&selection), "#0 equal old=1 new=1: a");
    }

    #[test]
    fn render_selection_of_deleted_line() {
        let view = compute("a\nb\n", "a\nc\n", ContextSize::DISABLED).unwrap();
        let selection = view.select(1).unwrap();
        assert_eq!(render_selection(&selection), "#1 delete old=2 new=-: b");
    }
}
