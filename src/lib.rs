mod block;
mod config;
mod html;
mod inline;
mod parser;
mod render;
mod text;

pub use block::{Block, List, Span};
pub use config::Config;
pub use html::Html;
pub use render::{render, Surface};
pub use text::PlainText;

/// Parse markdown text into a vector of blocks.
pub fn parse(markdown: &str) -> Vec<Block> {
    parser::parse(markdown)
}

/// Resolve one block's raw text into styled inline spans.
pub fn resolve(text: &str) -> Vec<Span> {
    inline::resolve(text)
}

/// Convert markdown to HTML using default config.
pub fn markdown_to_html(markdown: &str) -> String {
    markdown_to_html_with_config(markdown, &Config::default())
}

/// Convert markdown to HTML with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> String {
    html::blocks_to_html(&parse(markdown), config)
}

/// Convert markdown to plain text using default config.
pub fn markdown_to_text(markdown: &str) -> String {
    markdown_to_text_with_config(markdown, &Config::default())
}

/// Convert markdown to plain text with custom config.
pub fn markdown_to_text_with_config(markdown: &str, config: &Config) -> String {
    text::blocks_to_text(&parse(markdown), config)
}

/// Serialize the parsed block sequence as pretty-printed JSON.
pub fn markdown_to_json(markdown: &str) -> Result<String, String> {
    serde_json::to_string_pretty(&parse(markdown))
        .map_err(|e| format!("JSON serialization failed: {e}"))
}
