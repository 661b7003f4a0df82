use crate::block::{Block, Span};
use crate::config::Config;
use crate::render::{render, Surface};

/// Convert blocks to plain text, stripping emphasis
pub fn blocks_to_text(blocks: &[Block], config: &Config) -> String {
    render(blocks, PlainText::new(config))
}

/// Plain-text presentation mapping
///
/// Emphasis reduces to bare text, links keep their target in parentheses,
/// headings are underlined by level.
pub struct PlainText<'a> {
    out: String,
    config: &'a Config,
}

impl<'a> PlainText<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            out: String::new(),
            config,
        }
    }
}

fn spans_text(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            Span::Text(text) | Span::Bold(text) | Span::Italic(text) => out.push_str(text),
            Span::Code(text) => {
                out.push('`');
                out.push_str(text);
                out.push('`');
            }
            Span::Link { text, url } => {
                out.push_str(text);
                out.push_str(" (");
                out.push_str(url);
                out.push(')');
            }
        }
    }
    out
}

fn underline_char(level: u8) -> char {
    match level {
        1 => '=',
        2 => '-',
        _ => '~',
    }
}

impl Surface for PlainText<'_> {
    fn heading(&mut self, level: u8, spans: &[Span]) {
        let text = spans_text(spans);
        let width = text.chars().count().max(1);
        self.out.push_str(&text);
        self.out.push('\n');
        self.out
            .push_str(&underline_char(level).to_string().repeat(width));
        self.out.push_str("\n\n");
    }

    fn paragraph(&mut self, spans: &[Span]) {
        self.out.push_str(&spans_text(spans));
        self.out.push_str("\n\n");
    }

    fn blockquote(&mut self, spans: &[Span]) {
        self.out.push_str("> ");
        self.out.push_str(&spans_text(spans));
        self.out.push_str("\n\n");
    }

    fn list(&mut self, ordered: bool, items: &[Vec<Span>]) {
        for (i, item) in items.iter().enumerate() {
            if ordered {
                self.out.push_str(&format!("{}. ", i + 1));
            } else {
                self.out.push_str("- ");
            }
            self.out.push_str(&spans_text(item));
            self.out.push('\n');
        }
        self.out.push('\n');
    }

    fn code_block(&mut self, _language: Option<&str>, code: &str) {
        for line in code.lines() {
            self.out.push_str("    ");
            self.out.push_str(line);
            self.out.push('\n');
        }
        self.out.push('\n');
    }

    fn rule(&mut self) {
        self.out.push_str(&"-".repeat(self.config.text.rule_width));
        self.out.push_str("\n\n");
    }

    fn finish(self) -> String {
        self.out
    }
}
