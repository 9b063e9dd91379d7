//! # Rendering
//!
//! Turns parsed blocks into an HTML fragment.
//!
//! - **`html`**: `HtmlWriter`, block-by-block emission in source order
//! - **`page`**: optional standalone document wrapper around a fragment

pub mod html;
pub mod page;

use crate::parsing::parse_document;
use html::HtmlWriter;

/// Knobs that change how blocks are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render `[ ]` / `[x]` list prefixes as ballot boxes.
    pub task_markers: bool,
    /// Render the first row of each table with `<th>` cells.
    pub table_header: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            task_markers: true,
            table_header: false,
        }
    }
}

/// Converts lesson text into an HTML fragment with default options.
///
/// Never fails: anything unrecognised is rendered as a paragraph. Empty or
/// whitespace-only input yields an empty string.
pub fn transform(raw: &str) -> String {
    transform_with(raw, &RenderOptions::default())
}

/// Converts lesson text into an HTML fragment.
pub fn transform_with(raw: &str, options: &RenderOptions) -> String {
    let doc = parse_document(raw);
    HtmlWriter::new(raw, options).render(&doc.blocks)
}
