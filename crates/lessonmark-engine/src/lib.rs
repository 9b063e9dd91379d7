pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use parsing::{ParsedDoc, parse_document};
pub use render::{RenderOptions, page::standalone_page, transform, transform_with};
