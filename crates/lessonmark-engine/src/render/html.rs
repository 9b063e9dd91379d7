use crate::parsing::{
    blocks::{BlockKind, BlockNode, ListItem, ListKind, RawBlock, TableRow, TaskState},
    inline::render_inline,
    span::Span,
};

use super::RenderOptions;

/// Writes blocks as HTML, one block per line group.
///
/// Blocks are joined with `\n`; a block preceded by blank source lines gets
/// one empty line before it. There is no trailing newline.
pub struct HtmlWriter<'a> {
    source: &'a str,
    options: &'a RenderOptions,
    out: String,
}

impl<'a> HtmlWriter<'a> {
    pub fn new(source: &'a str, options: &'a RenderOptions) -> Self {
        Self {
            source,
            options,
            out: String::with_capacity(source.len() + source.len() / 2),
        }
    }

    pub fn render(mut self, blocks: &[BlockNode]) -> String {
        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                self.out.push('\n');
                if block.blank_before {
                    self.out.push('\n');
                }
            }
            self.write_block(block);
        }
        self.out
    }

    fn write_block(&mut self, block: &BlockNode) {
        match &block.kind {
            BlockKind::Heading { level, content } => {
                let tag = format!("h{level}");
                self.write_element(&tag, *content);
            }
            BlockKind::Paragraph { content } => self.write_element("p", *content),
            BlockKind::Table { rows } => self.write_table(rows),
            BlockKind::List { kind, items } => self.write_list(*kind, items),
            BlockKind::Raw(RawBlock::HorizontalRule) => self.out.push_str("<hr>"),
        }
    }

    fn write_element(&mut self, tag: &str, content: Span) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
        self.out.push_str(&render_inline(content.slice(self.source)));
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    fn write_table(&mut self, rows: &[TableRow]) {
        self.out.push_str("<table>\n");
        for (i, row) in rows.iter().enumerate() {
            let cell_tag = if i == 0 && self.options.table_header {
                "th"
            } else {
                "td"
            };
            self.out.push_str("<tr>");
            for cell in &row.cells {
                self.write_element(cell_tag, *cell);
            }
            self.out.push_str("</tr>\n");
        }
        self.out.push_str("</table>");
    }

    fn write_list(&mut self, kind: ListKind, items: &[ListItem]) {
        let tag = match kind {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        };
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push_str(">\n");
        for item in items {
            self.out.push_str("<li>");
            match item.task {
                Some(state) if self.options.task_markers => {
                    self.out.push_str(match state {
                        TaskState::Open => "&#9744; ",
                        TaskState::Done => "&#9745; ",
                    });
                    self.out
                        .push_str(&render_inline(item.content.slice(self.source)));
                }
                _ => self
                    .out
                    .push_str(&render_inline(item.text.slice(self.source))),
            }
            self.out.push_str("</li>\n");
        }
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use crate::render::{RenderOptions, transform, transform_with};
    use pretty_assertions::assert_eq;

    #[test]
    fn heading_levels() {
        assert_eq!(transform("# Title"), "<h1>Title</h1>");
        assert_eq!(transform("## Sub"), "<h2>Sub</h2>");
        assert_eq!(transform("### Sub"), "<h3>Sub</h3>");
        assert_eq!(transform("#### X"), "<p>#### X</p>");
    }

    #[test]
    fn each_text_line_is_a_paragraph() {
        assert_eq!(transform("one\ntwo"), "<p>one</p>\n<p>two</p>");
    }

    #[test]
    fn table_with_separator() {
        assert_eq!(
            transform("| A | B |\n| - | - |\n| 1 | 2 |"),
            "<table>\n<tr><td>A</td><td>B</td></tr>\n<tr><td>1</td><td>2</td></tr>\n</table>"
        );
    }

    #[test]
    fn table_header_option() {
        let options = RenderOptions {
            table_header: true,
            ..RenderOptions::default()
        };
        assert_eq!(
            transform_with("| A |\n|---|\n| 1 |", &options),
            "<table>\n<tr><th>A</th></tr>\n<tr><td>1</td></tr>\n</table>"
        );
    }

    #[test]
    fn cells_get_inline_rendering() {
        assert_eq!(
            transform("| **x** | a < b |"),
            "<table>\n<tr><td><strong>x</strong></td><td>a &lt; b</td></tr>\n</table>"
        );
    }

    #[test]
    fn task_markers() {
        assert_eq!(
            transform("- [ ] Print handouts\n- [x] Book the lab"),
            "<ul>\n<li>&#9744; Print handouts</li>\n<li>&#9745; Book the lab</li>\n</ul>"
        );
    }

    #[test]
    fn task_markers_disabled() {
        let options = RenderOptions {
            task_markers: false,
            ..RenderOptions::default()
        };
        assert_eq!(
            transform_with("- [X] Done", &options),
            "<ul>\n<li>[X] Done</li>\n</ul>"
        );
    }

    #[test]
    fn horizontal_rule() {
        assert_eq!(transform("above\n---\nbelow"), "<p>above</p>\n<hr>\n<p>below</p>");
    }

    #[test]
    fn blank_separator_is_kept_once() {
        assert_eq!(transform("# T\n\n\n\ntext"), "<h1>T</h1>\n\n<p>text</p>");
    }
}
