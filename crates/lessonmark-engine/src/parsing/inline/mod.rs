//! # Inline Rendering
//!
//! Inline processing runs on one block payload at a time (a heading's text,
//! a table cell, a list item's text, a paragraph), never on whole lines, so
//! emphasis markers cannot disturb structural delimiters.
//!
//! ## Modules
//!
//! - **`kinds`**: `Emphasis` tiers with owned delimiters and tags
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`emphasis`**: `emphasize()`, the three ordered emphasis passes
//!
//! ## Escaping
//!
//! `render_inline` escapes `&`, `<` and `>` before emphasis so that tags
//! inserted by emphasis are never escaped and source angle brackets never
//! become markup.

pub mod cursor;
pub mod emphasis;
pub mod kinds;

pub use emphasis::emphasize;

/// Escapes a raw payload and applies emphasis.
pub fn render_inline(raw: &str) -> String {
    emphasize(&html_escape::encode_text(raw))
}
