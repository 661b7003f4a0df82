use serde::{Deserialize, Serialize};

/// Inline text spans with formatting
///
/// Payloads are literal text: a claimed range is never rescanned, so
/// emphasis and link display text cannot nest further markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
}

/// A list (ordered or unordered), items kept as raw inline source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<String>,
}

/// Block-level elements parsed from markdown
///
/// Text-bearing blocks carry raw inline source; resolving it into spans
/// is a separate pass so the same parse can feed any render target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Heading {
        level: u8,
        text: String,
    },
    Paragraph {
        text: String,
    },
    Blockquote {
        text: String,
    },
    List(List),
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    Rule,
}
