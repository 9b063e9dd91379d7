/// ATX-style heading with 1 to 3 leading markers.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: u8 = b'#';
    /// Deepest heading level recognised; `####` and beyond are plain text.
    pub const MAX_LEVEL: usize = 3;

    /// Detects a heading line, returning `(level, content_offset)`.
    ///
    /// The markers must start the line and be followed by a single space and
    /// some non-blank text. `content_offset` is the byte index just past that
    /// space.
    pub fn parse(line: &str) -> Option<(u8, usize)> {
        let b = line.as_bytes();
        let level = b.iter().take_while(|&&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        if b.get(level) != Some(&b' ') {
            return None;
        }
        let offset = level + 1;
        if line[offset..].trim().is_empty() {
            return None;
        }
        Some((level as u8, offset))
    }
}
