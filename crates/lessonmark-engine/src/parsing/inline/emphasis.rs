use super::{cursor::Cursor, kinds::Emphasis};

/// Applies the three emphasis passes to already-escaped text.
///
/// Passes run strongest first. Tags inserted by an earlier pass contain no
/// `*`, so later passes treat them as plain text and may match across them.
/// Spans from different tiers can therefore overlap instead of nesting:
/// `**a*b**c*` becomes `<strong>a<em>b</strong>c</em>`.
pub fn emphasize(escaped: &str) -> String {
    let mut text = escaped.to_string();
    for tier in Emphasis::TIERS {
        if !text.contains(Emphasis::MARKER) {
            break;
        }
        text = apply_tier(&text, tier);
    }
    text
}

/// One leftmost, non-greedy pass for a single tier.
///
/// Each span needs at least one byte of content. When an opener finds no
/// closer, no later opener can either, so the pass ends there.
fn apply_tier(s: &str, tier: Emphasis) -> String {
    let delim = tier.delim.as_bytes();
    let mut cur = Cursor::new(s);
    let mut out = String::with_capacity(s.len() + 16);
    let mut text_start = 0usize;

    while !cur.eof() {
        if !cur.starts_with(delim) {
            cur.bump();
            continue;
        }

        let open_at = cur.pos();
        let content_start = open_at + delim.len();
        let Some(close_at) = cur.find_from(content_start + 1, delim) else {
            break;
        };

        out.push_str(&s[text_start..open_at]);
        out.push_str(tier.open);
        out.push_str(&s[content_start..close_at]);
        out.push_str(tier.close);

        cur.jump_to(close_at + delim.len());
        text_start = cur.pos();
    }

    out.push_str(&s[text_start..]);
    out
}
