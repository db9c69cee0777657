//! Line-numbered, context-windowed views of the difference between two texts.
//!
//! ```
//! use line_diff_view::{ContextSize, LineKind, compute};
//!
//! let view = compute("a\nb\nc\n", "a\nB\nc\n", ContextSize::DISABLED).unwrap();
//! assert!(!view.is_content_equal);
//!
//! let kinds: Vec<LineKind> = view.lines.iter().map(|line| line.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [LineKind::Equal, LineKind::Delete, LineKind::Insert, LineKind::Equal]
//! );
//! ```

use serde::Serialize;

pub mod engine;
pub mod input;
pub mod render;
pub mod view;

pub use engine::{Algorithm, DiffOperation, LineDiffEngine, OpKind, SimilarEngine};
pub use input::TextInput;
pub use render::render_selection;
pub use view::{
    ContextSize, DisplayTag, LineKind, LineRecord, LineSelection, SelectionObserver, SpanError,
};

/// The line-by-line difference between two texts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffView {
    /// Both texts are identical. `lines` is empty in that case.
    pub is_content_equal: bool,
    pub lines: Vec<LineRecord>,
}

impl DiffView {
    fn content_equal() -> Self {
        DiffView {
            is_content_equal: true,
            lines: Vec::new(),
        }
    }

    /// Describe the record at `index`, if there is one
    #[must_use]
    pub fn select(&self, index: usize) -> Option<LineSelection> {
        self.lines
            .get(index)
            .map(|record| LineSelection::new(index, record))
    }

    /// Report the record at `index` to `observer`.
    ///
    /// Returns `false` without calling the observer if `index` is out of range.
    pub fn notify_selection<O>(&self, index: usize, observer: &mut O) -> bool
    where
        O: SelectionObserver + ?Sized,
    {
        match self.select(index) {
            Some(selection) => {
                observer.line_selected(&selection);
                true
            }
            None => false,
        }
    }
}

/// Computes diff views with a fixed engine and context size
#[derive(Debug, Clone, Default)]
pub struct LineDiffer<E = SimilarEngine> {
    engine: E,
    context: ContextSize,
}

impl LineDiffer {
    /// Differ using the default engine with windowing disabled
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: LineDiffEngine> LineDiffer<E> {
    /// Swap in a different diff engine
    #[must_use]
    pub fn with_engine<F: LineDiffEngine>(self, engine: F) -> LineDiffer<F> {
        LineDiffer {
            engine,
            context: self.context,
        }
    }

    #[must_use]
    pub fn with_context(self, context: impl Into<ContextSize>) -> Self {
        LineDiffer {
            context: context.into(),
            ..self
        }
    }

    /// The context size used for unchanged spans
    #[must_use]
    pub fn context(&self) -> ContextSize {
        self.context
    }

    /// Compute the view of the changes from `old` to `new`.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError`] if the engine produced spans that do not align
    /// with line boundaries.
    pub fn compute<'o, 'n>(
        &self,
        old: impl Into<TextInput<'o>>,
        new: impl Into<TextInput<'n>>,
    ) -> Result<DiffView, SpanError> {
        let old = old.into().into_text();
        let new = new.into().into_text();

        let ops = self.engine.diff_lines(&old, &new);
        log::debug!("Diff engine produced {} spans", ops.len());

        if is_content_equal(&ops) {
            log::debug!("Texts are identical");
            return Ok(DiffView::content_equal());
        }

        let lines = view::annotate(&ops, self.context)?
            .into_iter()
            .map(LineRecord::from)
            .collect();

        Ok(DiffView {
            is_content_equal: false,
            lines,
        })
    }
}

/// Compute the view of the changes from `old` to `new` with the default engine.
///
/// # Examples
///
/// ```
/// use line_diff_view::{ContextSize, compute};
///
/// let view = compute(42, "42", ContextSize::new(3)).unwrap();
/// assert!(view.is_content_equal);
/// assert!(view.lines.is_empty());
/// ```
///
/// # Errors
///
/// Returns [`SpanError`] if the engine output does not respect line
/// boundaries.
pub fn compute<'o, 'n>(
    old: impl Into<TextInput<'o>>,
    new: impl Into<TextInput<'n>>,
    context: ContextSize,
) -> Result<DiffView, SpanError> {
    LineDiffer::new().with_context(context).compute(old, new)
}

/// Two empty texts produce no spans at all, other identical texts a single
/// unchanged one.
fn is_content_equal(ops: &[DiffOperation]) -> bool {
    match ops {
        [] => true,
        [only] => only.kind == OpKind::Equal,
        _ => false,
    }
}
