use crate::parsing::span::Span;

use super::kinds::{ListKind, TaskState};

/// Fixed markup emitted without inline processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawBlock {
    /// `---` rendered as `<hr>`.
    HorizontalRule,
}

/// One row of a table container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Span of the source line.
    pub span: Span,
    /// Trimmed cell text spans, in column order.
    pub cells: Vec<Span>,
}

/// One item of a list container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Span of the source line.
    pub span: Span,
    /// Item text after the list marker, including any task marker.
    pub text: Span,
    /// Item text after the task marker (same as `text` when there is none).
    pub content: Span,
    /// Checkbox state when the item starts with `[ ]` / `[x]`.
    pub task: Option<TaskState>,
}

/// The kind of a block together with its payload spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// `#`, `##` or `###` heading.
    Heading { level: u8, content: Span },
    /// A single line of text.
    Paragraph { content: Span },
    /// Consecutive table rows, separator rows dropped.
    Table { rows: Vec<TableRow> },
    /// Consecutive list items of one kind.
    List { kind: ListKind, items: Vec<ListItem> },
    /// Markup passed through untouched.
    Raw(RawBlock),
}

/// A parsed block with its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Span from the first to the last source line of the block.
    pub span: Span,
    /// One or more blank lines separated this block from the previous one.
    pub blank_before: bool,
}
