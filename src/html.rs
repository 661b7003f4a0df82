use crate::block::{Block, Span};
use crate::config::Config;
use crate::render::{render, Surface};

/// Convert blocks to HTML
pub fn blocks_to_html(blocks: &[Block], config: &Config) -> String {
    render(blocks, Html::new(config))
}

/// HTML presentation mapping
pub struct Html<'a> {
    out: String,
    config: &'a Config,
}

impl<'a> Html<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            out: String::new(),
            config,
        }
    }

    fn spans(&mut self, spans: &[Span]) {
        for span in spans {
            match span {
                Span::Text(text) => escape_into(text, &mut self.out),
                Span::Bold(text) => {
                    self.out.push_str("<strong>");
                    escape_into(text, &mut self.out);
                    self.out.push_str("</strong>");
                }
                Span::Italic(text) => {
                    self.out.push_str("<em>");
                    escape_into(text, &mut self.out);
                    self.out.push_str("</em>");
                }
                Span::Code(text) => {
                    self.out.push_str("<code>");
                    escape_into(text, &mut self.out);
                    self.out.push_str("</code>");
                }
                Span::Link { text, url } => {
                    self.out.push_str("<a href=\"");
                    escape_into(url, &mut self.out);
                    self.out.push('"');
                    if self.config.links.new_tab {
                        self.out.push_str(" target=\"_blank\" rel=\"noopener\"");
                    }
                    self.out.push('>');
                    escape_into(text, &mut self.out);
                    self.out.push_str("</a>");
                }
            }
        }
    }
}

impl Surface for Html<'_> {
    fn heading(&mut self, level: u8, spans: &[Span]) {
        self.out.push_str(&format!("<h{level}>"));
        self.spans(spans);
        self.out.push_str(&format!("</h{level}>\n"));
    }

    fn paragraph(&mut self, spans: &[Span]) {
        self.out.push_str("<p>");
        self.spans(spans);
        self.out.push_str("</p>\n");
    }

    fn blockquote(&mut self, spans: &[Span]) {
        self.out.push_str("<blockquote>");
        self.spans(spans);
        self.out.push_str("</blockquote>\n");
    }

    fn list(&mut self, ordered: bool, items: &[Vec<Span>]) {
        let tag = if ordered { "ol" } else { "ul" };
        self.out.push_str(&format!("<{tag}>\n"));
        for item in items {
            self.out.push_str("<li>");
            self.spans(item);
            self.out.push_str("</li>\n");
        }
        self.out.push_str(&format!("</{tag}>\n"));
    }

    fn code_block(&mut self, language: Option<&str>, code: &str) {
        self.out.push_str("<pre><code");
        if let Some(lang) = language {
            self.out.push_str(" class=\"");
            escape_into(&self.config.code.class_prefix, &mut self.out);
            escape_into(lang, &mut self.out);
            self.out.push('"');
        }
        self.out.push('>');
        escape_into(code, &mut self.out);
        self.out.push_str("</code></pre>\n");
    }

    fn rule(&mut self) {
        self.out.push_str("<hr>\n");
    }

    fn finish(self) -> String {
        self.out
    }
}

// Escape characters HTML reserves, in text and attribute positions alike
fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
