use crate::parsing::{lines::LineRef, span::Span};

use super::kinds::{
    Heading, HorizontalRule, ListKind, ListMarker, RowShape, Table, TaskMarker, TaskState,
};

/// What a single line is, decided from that line alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only.
    Blank,
    Heading {
        level: u8,
        content: Span,
    },
    TableRow {
        cells: Vec<Span>,
    },
    /// A `|---|---|` row: belongs to a table but carries no content.
    TableSeparator,
    Rule,
    ListItem {
        kind: ListKind,
        text: Span,
        content: Span,
        task: Option<TaskState>,
    },
    /// Anything unrecognised; becomes a paragraph.
    Text {
        content: Span,
    },
}

/// Classification of a single line.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// Span of the line content, excluding the line terminator.
    pub line: Span,
    pub kind: LineKind,
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence: heading, table row, horizontal rule, list item, text.
    pub fn classify(&self, lr: &LineRef<'_>) -> LineClass {
        LineClass {
            line: lr.content,
            kind: Self::kind_of(lr.text, lr.content.start),
        }
    }

    fn kind_of(text: &str, base: usize) -> LineKind {
        if text.trim().is_empty() {
            return LineKind::Blank;
        }

        if let Some((level, offset)) = Heading::parse(text) {
            return LineKind::Heading {
                level,
                content: trimmed(text, base, offset),
            };
        }

        match Table::parse(text) {
            Some(RowShape::Separator) => return LineKind::TableSeparator,
            Some(RowShape::Row(cells)) => {
                return LineKind::TableRow {
                    cells: cells
                        .into_iter()
                        .map(|(s, e)| Span::new(base + s, base + e))
                        .collect(),
                };
            }
            None => {}
        }

        if HorizontalRule::matches(text) {
            return LineKind::Rule;
        }

        if let Some((kind, offset)) = ListMarker::parse(text) {
            let item_text = trimmed(text, base, offset);
            let (task, content) = match kind {
                ListKind::Unordered => match TaskMarker::parse(&text[offset..]) {
                    Some((state, skip)) => (Some(state), trimmed(text, base, offset + skip)),
                    None => (None, item_text),
                },
                ListKind::Ordered => (None, item_text),
            };
            return LineKind::ListItem {
                kind,
                text: item_text,
                content,
                task,
            };
        }

        LineKind::Text {
            content: trimmed(text, base, 0),
        }
    }
}

/// Absolute span of `text[from..]` with surrounding whitespace removed.
fn trimmed(text: &str, base: usize, from: usize) -> Span {
    let rest = &text[from..];
    let start = from + (rest.len() - rest.trim_start().len());
    let end = start + rest.trim().len();
    Span::new(base + start, base + end)
}
