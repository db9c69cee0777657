//! Line-level diff engines.
//!
//! An engine turns two texts into an ordered sequence of [`DiffOperation`]s,
//! each covering whole lines. The default [`SimilarEngine`] is backed by the
//! `similar` crate.

use similar::{ChangeTag, TextDiff};

pub use similar::Algorithm;

/// Classification of a diff span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Equal,
    Insert,
    Delete,
}

impl From<ChangeTag> for OpKind {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Equal => OpKind::Equal,
            ChangeTag::Insert => OpKind::Insert,
            ChangeTag::Delete => OpKind::Delete,
        }
    }
}

/// A run of one or more whole lines, terminators included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOperation {
    pub kind: OpKind,
    pub text: String,
}

impl DiffOperation {
    pub fn new(kind: OpKind, text: impl Into<String>) -> Self {
        DiffOperation {
            kind,
            text: text.into(),
        }
    }
}

/// Computes line-granular diff operations between two texts.
///
/// Implementations must be deterministic and must only split spans on line
/// boundaries.
pub trait LineDiffEngine {
    fn diff_lines(&self, old: &str, new: &str) -> Vec<DiffOperation>;
}

/// Line diff engine backed by [`similar::TextDiff`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarEngine {
    algorithm: Algorithm,
}

impl SimilarEngine {
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        SimilarEngine { algorithm }
    }

    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

impl Default for SimilarEngine {
    fn default() -> Self {
        SimilarEngine::new(Algorithm::Myers)
    }
}

impl LineDiffEngine for SimilarEngine {
    /// Diff line by line, merging consecutive changes of the same kind into
    /// one span.
    fn diff_lines(&self, old: &str, new: &str) -> Vec<DiffOperation> {
        let diff = TextDiff::configure()
            .algorithm(self.algorithm)
            .diff_lines(old, new);

        let mut ops: Vec<DiffOperation> = Vec::new();
        for change in diff.iter_all_changes() {
            let kind = OpKind::from(change.tag());
            match ops.last_mut() {
                Some(last) if last.kind == kind => last.text.push_str(change.value()),
                _ => ops.push(DiffOperation::new(kind, change.value())),
            }
        }

        ops
    }
}
