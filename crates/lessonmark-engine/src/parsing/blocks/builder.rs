use crate::parsing::span::Span;

use super::{
    classify::{LineClass, LineKind},
    kinds::ListKind,
    types::{BlockKind, BlockNode, ListItem, RawBlock, TableRow},
};

/// The container currently collecting lines, if any.
#[derive(Debug)]
enum OpenContainer {
    None,
    Table {
        span: Span,
        rows: Vec<TableRow>,
    },
    List {
        kind: ListKind,
        span: Span,
        items: Vec<ListItem>,
    },
}

/// Groups classified lines into blocks.
///
/// Table rows and list items of one kind accumulate into the open container;
/// any other line closes it. A closed container is never reopened, so two
/// runs of list items always become two lists.
pub struct BlockBuilder {
    open: OpenContainer,
    pending_blank: bool,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            open: OpenContainer::None,
            pending_blank: false,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass) {
        match c.kind {
            LineKind::Blank => {
                self.flush_container();
                self.pending_blank = true;
            }
            LineKind::TableRow { cells } => self.extend_table(
                c.line,
                Some(TableRow {
                    span: c.line,
                    cells,
                }),
            ),
            LineKind::TableSeparator => self.extend_table(c.line, None),
            LineKind::ListItem {
                kind,
                text,
                content,
                task,
            } => self.extend_list(
                kind,
                ListItem {
                    span: c.line,
                    text,
                    content,
                    task,
                },
            ),
            LineKind::Heading { level, content } => {
                self.flush_container();
                self.emit(BlockKind::Heading { level, content }, c.line);
            }
            LineKind::Rule => {
                self.flush_container();
                self.emit(BlockKind::Raw(RawBlock::HorizontalRule), c.line);
            }
            LineKind::Text { content } => {
                self.flush_container();
                if !content.is_empty() {
                    self.emit(BlockKind::Paragraph { content }, c.line);
                }
            }
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_container();
        self.out
    }

    fn emit(&mut self, kind: BlockKind, span: Span) {
        let blank_before = self.pending_blank && !self.out.is_empty();
        self.pending_blank = false;
        self.out.push(BlockNode {
            kind,
            span,
            blank_before,
        });
    }

    /// Adds a row to the open table, opening one if needed. Separator rows
    /// (`row == None`) keep the table open without contributing a row.
    fn extend_table(&mut self, line: Span, row: Option<TableRow>) {
        if let OpenContainer::Table { span, rows } = &mut self.open {
            span.end = line.end;
            rows.extend(row);
            return;
        }
        self.flush_container();
        self.open = OpenContainer::Table {
            span: line,
            rows: row.into_iter().collect(),
        };
    }

    fn extend_list(&mut self, kind: ListKind, item: ListItem) {
        if let OpenContainer::List {
            kind: open_kind,
            span,
            items,
        } = &mut self.open
            && *open_kind == kind
        {
            span.end = item.span.end;
            items.push(item);
            return;
        }
        self.flush_container();
        self.open = OpenContainer::List {
            kind,
            span: item.span,
            items: vec![item],
        };
    }

    fn flush_container(&mut self) {
        match std::mem::replace(&mut self.open, OpenContainer::None) {
            OpenContainer::None => {}
            OpenContainer::Table { span, rows } => {
                // A table made only of separator rows has nothing to show
                if !rows.is_empty() {
                    self.emit(BlockKind::Table { rows }, span);
                }
            }
            OpenContainer::List { kind, span, items } => {
                self.emit(BlockKind::List { kind, items }, span);
            }
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::parsing::{blocks::BlockKind, parse_document};

    fn kinds(src: &str) -> Vec<String> {
        parse_document(src)
            .blocks
            .iter()
            .map(|b| {
                let label = match &b.kind {
                    BlockKind::Heading { level, .. } => format!("h{level}"),
                    BlockKind::Paragraph { .. } => "p".to_string(),
                    BlockKind::Table { rows } => format!("table({})", rows.len()),
                    BlockKind::List { kind, items } => format!("{kind:?}({})", items.len()),
                    BlockKind::Raw(raw) => format!("{raw:?}"),
                };
                if b.blank_before {
                    format!("~{label}")
                } else {
                    label
                }
            })
            .collect()
    }

    #[test]
    fn separator_does_not_split_table() {
        assert_eq!(kinds("| A | B |\n| - | - |\n| 1 | 2 |"), vec!["table(2)"]);
    }

    #[test]
    fn separator_may_open_a_table() {
        assert_eq!(kinds("text\n|---|\n| a |"), vec!["p", "table(1)"]);
    }

    #[test]
    fn lone_separator_emits_nothing() {
        assert_eq!(kinds("|---|---|"), Vec::<String>::new());
    }

    #[test]
    fn list_kind_switch_opens_new_container() {
        assert_eq!(
            kinds("- a\n- b\n1. c\n1. d"),
            vec!["Unordered(2)", "Ordered(2)"]
        );
    }

    #[test]
    fn closed_list_is_not_reopened() {
        assert_eq!(
            kinds("- a\ntext\n- b"),
            vec!["Unordered(1)", "p", "Unordered(1)"]
        );
    }

    #[test]
    fn pipe_line_closes_list() {
        assert_eq!(
            kinds("- a\n| x | y |\n- b"),
            vec!["Unordered(1)", "table(1)", "Unordered(1)"]
        );
    }

    #[test]
    fn blank_line_closes_table() {
        assert_eq!(kinds("| a |\n\n| b |"), vec!["table(1)", "~table(1)"]);
    }

    #[test]
    fn blank_runs_collapse_and_edges_are_dropped() {
        assert_eq!(
            kinds("\n\n# T\n\n\n\ntext\n\n"),
            vec!["h1", "~p"]
        );
    }

    #[test]
    fn blank_before_survives_dropped_table() {
        assert_eq!(kinds("a\n\n|---|\n\nb"), vec!["p", "~p"]);
    }

    #[test]
    fn block_spans_cover_container_lines() {
        let src = "- a\n- b\n";
        let doc = parse_document(src);
        assert_eq!(doc.blocks[0].span.slice(src), "- a\n- b");
    }
}
