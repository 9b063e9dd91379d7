//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified once into a
//!    `LineKind` (blank, heading, table row, separator, rule, list item, text)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` merges adjacent
//!    table rows and same-kind list items into containers and emits
//!    `BlockNode`s in source order
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `BlockKind`, `TableRow`, `ListItem`)
//! - **`kinds`**: Block-specific types with owned delimiters
//! - **`classify`**: `LineClassifier` produces a `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for container grouping
//!
//! ## Key Invariants
//!
//! - Lists and tables are flat; indentation never nests
//! - A container closes on the first non-matching line and is never reopened
//! - All block nodes store byte spans into the source

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier, LineKind};
pub use kinds::{ListKind, TaskState};
pub use types::{BlockKind, BlockNode, ListItem, RawBlock, TableRow};
