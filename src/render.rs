use crate::block::{Block, Span};
use crate::inline;

/// A presentation mapping from resolved blocks to one output format
///
/// Implementations own all styling decisions; the driver owns block
/// ordering and inline resolution. Code block bodies arrive verbatim and
/// are never inline-resolved.
pub trait Surface {
    fn heading(&mut self, level: u8, spans: &[Span]);
    fn paragraph(&mut self, spans: &[Span]);
    fn blockquote(&mut self, spans: &[Span]);
    fn list(&mut self, ordered: bool, items: &[Vec<Span>]);
    fn code_block(&mut self, language: Option<&str>, code: &str);
    fn rule(&mut self);
    fn finish(self) -> String;
}

/// Project blocks onto a surface, resolving inline markup per block
pub fn render<S: Surface>(blocks: &[Block], mut surface: S) -> String {
    for block in blocks {
        match block {
            Block::Heading { level, text } => surface.heading(*level, &inline::resolve(text)),
            Block::Paragraph { text } => surface.paragraph(&inline::resolve(text)),
            Block::Blockquote { text } => surface.blockquote(&inline::resolve(text)),
            Block::List(list) => {
                let items: Vec<Vec<Span>> =
                    list.items.iter().map(|item| inline::resolve(item)).collect();
                surface.list(list.ordered, &items);
            }
            Block::CodeBlock { language, code } => {
                surface.code_block(language.as_deref(), code);
            }
            Block::Rule => surface.rule(),
        }
    }
    surface.finish()
}
