use super::span::Span;

/// A reference to a single line of the source.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Span of the line content without its `\n` / `\r\n` terminator.
    pub content: Span,
    /// The line text without its terminator.
    pub text: &'a str,
}

/// Returns an iterator over lines with their content spans.
///
/// `text` and `content` exclude the `\n` / `\r\n` terminator.
pub fn lines_with_spans(source: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    source.split_inclusive('\n').map(move |line| {
        let start = offset;
        offset += line.len();
        let text = line.trim_end_matches(['\r', '\n']);
        LineRef {
            content: Span::new(start, start + text.len()),
            text,
        }
    })
}
