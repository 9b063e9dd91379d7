//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. The classifier
//! calls into these; it never hardcodes `#`, `|` or list markers itself.

pub mod heading;
pub mod list;
pub mod rule;
pub mod table;

pub use heading::Heading;
pub use list::{ListKind, ListMarker, TaskMarker, TaskState};
pub use rule::HorizontalRule;
pub use table::{RowShape, Table};
