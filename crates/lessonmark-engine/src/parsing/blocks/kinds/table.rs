/// Pipe table rows.
///
/// A row needs a pipe at its start or end (after trimming); the outermost
/// pipes are optional delimiters, inner pipes separate cells.
pub struct Table;

/// What a pipe-delimited line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowShape {
    /// A content row with the local `(start, end)` byte range of each trimmed cell.
    Row(Vec<(usize, usize)>),
    /// A `| --- | :-: |` formatting row, or one whose cells are all blank.
    /// Dropped from output.
    Separator,
}

impl Table {
    pub const PIPE: char = '|';

    /// Classifies a line as a table row, returning `None` when it is not one.
    ///
    /// Lines whose cells are all empty (`||`, `| |`) are separators.
    pub fn parse(line: &str) -> Option<RowShape> {
        let lead = line.len() - line.trim_start().len();
        let t = line.trim();
        if t.len() < 2 || !(t.starts_with(Self::PIPE) || t.ends_with(Self::PIPE)) {
            return None;
        }

        let inner_start = lead + usize::from(t.starts_with(Self::PIPE));
        let inner_end = lead + t.len() - usize::from(t.ends_with(Self::PIPE));
        let inner = &line[inner_start..inner_end];

        let mut cells = Vec::new();
        let mut offset = inner_start;
        for raw in inner.split(Self::PIPE) {
            let start = offset + (raw.len() - raw.trim_start().len());
            let end = start + raw.trim().len();
            cells.push((start, end));
            offset += raw.len() + Self::PIPE.len_utf8();
        }

        if cells.iter().all(|(s, e)| s == e) || Self::is_separator(line, &cells) {
            return Some(RowShape::Separator);
        }
        Some(RowShape::Row(cells))
    }

    /// Every cell is made of dashes, colons and whitespace, with at least one dash.
    fn is_separator(line: &str, cells: &[(usize, usize)]) -> bool {
        let mut saw_dash = false;
        for &(s, e) in cells {
            for b in line[s..e].bytes() {
                match b {
                    b'-' => saw_dash = true,
                    b':' | b' ' | b'\t' => {}
                    _ => return false,
                }
            }
        }
        saw_dash
    }
}
