//! Emphasis tiers with owned delimiters and output tags.

/// One tier of the emphasis scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emphasis {
    pub delim: &'static str,
    pub open: &'static str,
    pub close: &'static str,
}

impl Emphasis {
    pub const STRONG_EM: Emphasis = Emphasis {
        delim: "***",
        open: "<strong><em>",
        close: "</em></strong>",
    };
    pub const STRONG: Emphasis = Emphasis {
        delim: "**",
        open: "<strong>",
        close: "</strong>",
    };
    pub const EM: Emphasis = Emphasis {
        delim: "*",
        open: "<em>",
        close: "</em>",
    };

    /// Tiers in the order their passes run.
    pub const TIERS: [Emphasis; 3] = [Self::STRONG_EM, Self::STRONG, Self::EM];

    /// The byte every delimiter is built from.
    pub const MARKER: char = '*';
}
