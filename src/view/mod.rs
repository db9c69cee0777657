pub mod annotate;
pub mod record;
pub mod split;
pub mod window;

pub use annotate::{AnnotatedLine, SpanError, annotate};
pub use record::{DisplayTag, LineKind, LineRecord, LineSelection, SKIP_MARKER, SelectionObserver};
pub use split::split_lines;
pub use window::{ContextSize, LineAction, SpanPosition, window};
