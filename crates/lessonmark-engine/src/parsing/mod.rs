pub mod blocks;
pub mod inline;
pub mod invariants;
pub mod lines;
pub mod span;

use blocks::{BlockBuilder, BlockKind, BlockNode, LineClassifier};
use lines::lines_with_spans;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

impl ParsedDoc {
    /// Text of the first level-1 heading, used as a document title.
    pub fn title<'a>(&self, source: &'a str) -> Option<&'a str> {
        self.blocks.iter().find_map(|b| match b.kind {
            BlockKind::Heading { level: 1, content } => Some(content.slice(source)),
            _ => None,
        })
    }
}

/// Parses lesson text into a flat sequence of blocks in one pass over its lines.
pub fn parse_document(source: &str) -> ParsedDoc {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(source) {
        builder.push(classifier.classify(&lr));
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}
