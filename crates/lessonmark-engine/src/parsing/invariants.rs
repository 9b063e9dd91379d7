use crate::parsing::{
    blocks::{BlockKind, BlockNode},
    span::Span,
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - All block spans are within the source bounds
/// - Payload spans (heading text, cells, item text) lie inside their block span
/// - Blocks are in source order and do not overlap
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &str, blocks: &[BlockNode]) {
    let n = source.len();
    let mut prev_end = 0usize;
    for b in blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (source len: {})",
            b.span,
            n
        );
        assert!(
            b.span.start >= prev_end,
            "block span {:?} overlaps or precedes previous block ending at {}",
            b.span,
            prev_end
        );
        prev_end = b.span.end;

        for payload in payload_spans(b) {
            assert!(
                b.span.contains(payload),
                "payload span not contained in block span: payload {:?}, block {:?}",
                payload,
                b.span
            );
            assert!(
                source.is_char_boundary(payload.start) && source.is_char_boundary(payload.end),
                "payload span {:?} splits a character",
                payload
            );
        }
    }
}

fn payload_spans(b: &BlockNode) -> Vec<Span> {
    match &b.kind {
        BlockKind::Heading { content, .. } | BlockKind::Paragraph { content } => vec![*content],
        BlockKind::Table { rows } => rows
            .iter()
            .flat_map(|r| std::iter::once(r.span).chain(r.cells.iter().copied()))
            .collect(),
        BlockKind::List { items, .. } => items
            .iter()
            .flat_map(|i| [i.span, i.text, i.content])
            .collect(),
        BlockKind::Raw(_) => vec![],
    }
}
