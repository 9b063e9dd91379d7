use regex::Regex;
use std::sync::OnceLock;

/// Which container a list item groups into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `- item` or `* item`
    Unordered,
    /// `1. item`
    Ordered,
}

/// Checkbox state of a task list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// `[ ]`
    Open,
    /// `[x]` or `[X]`
    Done,
}

/// List item markers. Indentation is accepted but never builds nesting.
pub struct ListMarker;

impl ListMarker {
    pub const UNORDERED: &'static str = r"^[ \t]*[-*][ \t]+";
    pub const ORDERED: &'static str = r"^[ \t]*[0-9]+\.[ \t]+";

    /// Detects a list item, returning its kind and the byte offset of its text.
    ///
    /// A marker with nothing after it is not an item.
    pub fn parse(line: &str) -> Option<(ListKind, usize)> {
        static UNORDERED_RE: OnceLock<Regex> = OnceLock::new();
        static ORDERED_RE: OnceLock<Regex> = OnceLock::new();

        let unordered = UNORDERED_RE
            .get_or_init(|| Regex::new(Self::UNORDERED).expect("Invalid unordered marker regex"));
        let ordered = ORDERED_RE
            .get_or_init(|| Regex::new(Self::ORDERED).expect("Invalid ordered marker regex"));

        let (kind, offset) = if let Some(m) = unordered.find(line) {
            (ListKind::Unordered, m.end())
        } else if let Some(m) = ordered.find(line) {
            (ListKind::Ordered, m.end())
        } else {
            return None;
        };

        if line[offset..].trim().is_empty() {
            return None;
        }
        Some((kind, offset))
    }
}

/// `[ ]` / `[x]` prefix on an unordered item's text.
pub struct TaskMarker;

impl TaskMarker {
    pub const OPEN: &'static str = "[ ]";
    pub const DONE: &'static str = "[x]";
    pub const DONE_UPPER: &'static str = "[X]";

    /// Returns the task state and the offset of the text after the marker.
    pub fn parse(text: &str) -> Option<(TaskState, usize)> {
        let state = if text.starts_with(Self::OPEN) {
            TaskState::Open
        } else if text.starts_with(Self::DONE) || text.starts_with(Self::DONE_UPPER) {
            TaskState::Done
        } else {
            return None;
        };

        let rest = &text[Self::OPEN.len()..];
        let body = rest.trim_start_matches([' ', '\t']);
        if body.len() == rest.len() || body.trim().is_empty() {
            return None;
        }
        Some((state, text.len() - body.len()))
    }
}
