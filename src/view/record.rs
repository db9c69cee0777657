use serde::Serialize;
use std::fmt;

use super::annotate::AnnotatedLine;

/// Content of a skip marker row
pub const SKIP_MARKER: &str = "...";

/// What a line in the view represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Present in both texts
    Equal,
    /// Only in the new text
    Insert,
    /// Only in the old text
    Delete,
    /// Stands in for a run of elided unchanged lines
    Skip,
}

impl LineKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LineKind::Equal => "equal",
            LineKind::Insert => "insert",
            LineKind::Delete => "delete",
            LineKind::Skip => "skip",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque style hint for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTag {
    Unchanged,
    Added,
    Removed,
}

impl DisplayTag {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayTag::Unchanged => "unchanged",
            DisplayTag::Added => "added",
            DisplayTag::Removed => "removed",
        }
    }
}

impl From<LineKind> for DisplayTag {
    fn from(kind: LineKind) -> Self {
        match kind {
            LineKind::Equal | LineKind::Skip => DisplayTag::Unchanged,
            LineKind::Insert => DisplayTag::Added,
            LineKind::Delete => DisplayTag::Removed,
        }
    }
}

impl fmt::Display for DisplayTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a diff view.
///
/// Line numbers are 1-based. Which of them are present depends on `kind`:
/// both for [`LineKind::Equal`], only the new one for [`LineKind::Insert`],
/// only the old one for [`LineKind::Delete`], neither for [`LineKind::Skip`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineRecord {
    pub kind: LineKind,
    pub old_line_number: Option<u32>,
    pub new_line_number: Option<u32>,
    pub content: String,
    pub display_tag: DisplayTag,
}

impl From<AnnotatedLine> for LineRecord {
    fn from(line: AnnotatedLine) -> Self {
        let (kind, old_line_number, new_line_number, content) = match line {
            AnnotatedLine::Equal {
                old_line,
                new_line,
                content,
            } => (LineKind::Equal, Some(old_line), Some(new_line), content),
            AnnotatedLine::Insert { new_line, content } => {
                (LineKind::Insert, None, Some(new_line), content)
            }
            AnnotatedLine::Delete { old_line, content } => {
                (LineKind::Delete, Some(old_line), None, content)
            }
            AnnotatedLine::Skip { .. } => (LineKind::Skip, None, None, SKIP_MARKER.to_string()),
        };

        LineRecord {
            kind,
            old_line_number,
            new_line_number,
            content,
            display_tag: kind.into(),
        }
    }
}

/// A line the user picked out of a view, detached from the view itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSelection {
    /// Position of the record in the view
    pub index: usize,
    pub kind: LineKind,
    pub old_line_number: Option<u32>,
    pub new_line_number: Option<u32>,
    pub content: String,
}

impl LineSelection {
    #[must_use]
    pub fn new(index: usize, record: &LineRecord) -> Self {
        LineSelection {
            index,
            kind: record.kind,
            old_line_number: record.old_line_number,
            new_line_number: record.new_line_number,
            content: record.content.clone(),
        }
    }
}

/// Receives line selections from a diff view.
///
/// Implemented for any `FnMut(&LineSelection)`, so a closure works as an
/// observer.
pub trait SelectionObserver {
    fn line_selected(&mut self, selection: &LineSelection);
}

impl<F> SelectionObserver for F
where
    F: FnMut(&LineSelection),
{
    fn line_selected(&mut self, selection: &LineSelection) {
        self(selection)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn tags_cover_every_kind() {
        assert_eq!(DisplayTag::from(LineKind::Equal), DisplayTag::Unchanged);
        assert_eq!(DisplayTag::from(LineKind::Skip), DisplayTag::Unchanged);
        assert_eq!(DisplayTag::from(LineKind::Insert), DisplayTag::Added);
        assert_eq!(DisplayTag::from(LineKind::Delete), DisplayTag::Removed);
    }

    #[test]
    fn record_from_equal_line() {
        let record = LineRecord::from(AnnotatedLine::Equal {
            old_line: 4,
            new_line: 6,
            content: "shared".to_string(),
        });
        assert_eq!(
            record,
            LineRecord {
                kind: LineKind::Equal,
                old_line_number: Some(4),
                new_line_number: Some(6),
                content: "shared".to_string(),
                display_tag: DisplayTag::Unchanged,
            }
        );
    }

    #[test]
    fn record_from_insert_line() {
        let record = LineRecord::from(AnnotatedLine::Insert {
            new_line: 2,
            content: "added".to_string(),
        });
        assert_eq!(record.kind, LineKind::Insert);
        assert_eq!(record.old_line_number, None);
        assert_eq!(record.new_line_number, Some(2));
        assert_eq!(record.display_tag, DisplayTag::Added);
    }

    #[test]
    fn record_from_delete_line() {
        let record = LineRecord::from(AnnotatedLine::Delete {
            old_line: 9,
            content: "gone".to_string(),
        });
        assert_eq!(record.old_line_number, Some(9));
        assert_eq!(record.new_line_number, None);
        assert_eq!(record.display_tag, DisplayTag::Removed);
    }

    #[test]
    fn record_from_skip_has_marker_and_no_numbers() {
        let record = LineRecord::from(AnnotatedLine::Skip { count: 16 });
        assert_eq!(record.kind, LineKind::Skip);
        assert_eq!(record.content, "...");
        assert_eq!(record.old_line_number, None);
        assert_eq!(record.new_line_number, None);
        assert_eq!(record.display_tag, DisplayTag::Unchanged);
    }

    #[test]
    fn record_serializes_lowercase() {
        let record = LineRecord::from(AnnotatedLine::Insert {
            new_line: 1,
            content: "x".to_string(),
        });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "insert",
                "old_line_number": null,
                "new_line_number": 1,
                "content": "x",
                "display_tag": "added",
            })
        );
    }

    #[test]
    fn closure_observer_receives_selection() {
        let record = LineRecord::from(AnnotatedLine::Delete {
            old_line: 3,
            content: "old".to_string(),
        });
        let mut seen = Vec::new();
        let mut observer = |selection: &LineSelection| seen.push(selection.clone());
        observer.line_selected(&LineSelection::new(7, &record));

        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].index, 7);
        assert_eq!(seen[0].kind, LineKind::Delete);
        assert_eq!(seen[0].old_line_number, Some(3));
    }
}
