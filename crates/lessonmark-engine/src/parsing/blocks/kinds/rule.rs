/// A thematic break written as a line of dashes (`---`).
pub struct HorizontalRule;

impl HorizontalRule {
    pub const DASH: u8 = b'-';
    pub const MIN_DASHES: usize = 3;

    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        t.len() >= Self::MIN_DASHES && t.bytes().all(|b| b == Self::DASH)
    }
}
