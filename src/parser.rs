use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::{Block, List};

static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\. (.*)$").unwrap());

/// Parse markdown text into a list of blocks
pub fn parse(markdown: &str) -> Vec<Block> {
    let text = normalize_newlines(markdown);
    let mut blocks = Vec::new();
    let mut open = Open::None;

    for line in text.lines() {
        process_line(line, &mut open, &mut blocks);
    }
    // Whatever is still open at the end of input is emitted as-is
    flush(&mut open, &mut blocks);

    blocks
}

/// The multi-line construct currently being accumulated, if any
enum Open {
    None,
    List { ordered: bool, items: Vec<String> },
    Fence { language: Option<String>, body: Vec<String> },
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn process_line(line: &str, open: &mut Open, blocks: &mut Vec<Block>) {
    // Inside a fence every line is captured verbatim; only a closing
    // marker ends the block.
    if matches!(open, Open::Fence { .. }) {
        if line.trim().starts_with("```") {
            flush(open, blocks);
        } else if let Open::Fence { body, .. } = open {
            body.push(line.to_string());
        }
        return;
    }

    match classify(line) {
        LineKind::Fence(tag) => {
            flush(open, blocks);
            *open = Open::Fence {
                language: if tag.is_empty() {
                    None
                } else {
                    Some(tag.to_string())
                },
                body: Vec::new(),
            };
        }
        LineKind::Heading(level, text) => {
            flush(open, blocks);
            blocks.push(Block::Heading {
                level,
                text: text.to_string(),
            });
        }
        LineKind::Rule => {
            flush(open, blocks);
            blocks.push(Block::Rule);
        }
        LineKind::Quote(text) => {
            flush(open, blocks);
            blocks.push(Block::Blockquote {
                text: text.to_string(),
            });
        }
        LineKind::Item { ordered, text } => match open {
            Open::List { ordered: kind, items } if *kind == ordered => {
                items.push(text.to_string());
            }
            _ => {
                flush(open, blocks);
                *open = Open::List {
                    ordered,
                    items: vec![text.to_string()],
                };
            }
        },
        // A blank line produces no node; its only effect is closing an
        // open list.
        LineKind::Blank => flush(open, blocks),
        LineKind::Text(text) => {
            flush(open, blocks);
            blocks.push(Block::Paragraph {
                text: text.to_string(),
            });
        }
    }
}

/// Emit and clear the currently open construct
fn flush(open: &mut Open, blocks: &mut Vec<Block>) {
    match std::mem::replace(open, Open::None) {
        Open::None => {}
        Open::List { ordered, items } => {
            blocks.push(Block::List(List { ordered, items }));
        }
        Open::Fence { language, body } => {
            blocks.push(Block::CodeBlock {
                language,
                code: body.join("\n").trim().to_string(),
            });
        }
    }
}

enum LineKind<'a> {
    Fence(&'a str),
    Heading(u8, &'a str),
    Rule,
    Quote(&'a str),
    Item { ordered: bool, text: &'a str },
    Blank,
    Text(&'a str),
}

/// Classify a line outside any fence, in fixed priority order
fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if let Some(rest) = trimmed.strip_prefix("```") {
        return LineKind::Fence(rest.trim());
    }
    if let Some(text) = line.strip_prefix("### ") {
        return LineKind::Heading(3, text);
    }
    if let Some(text) = line.strip_prefix("## ") {
        return LineKind::Heading(2, text);
    }
    if let Some(text) = line.strip_prefix("# ") {
        return LineKind::Heading(1, text);
    }
    if trimmed == "---" || trimmed == "***" || trimmed == "___" {
        return LineKind::Rule;
    }
    if let Some(text) = line.strip_prefix("> ") {
        return LineKind::Quote(text);
    }
    if let Some(text) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return LineKind::Item {
            ordered: false,
            text,
        };
    }
    if let Some(caps) = ORDERED_ITEM.captures(line) {
        return LineKind::Item {
            ordered: true,
            text: caps.get(1).map_or("", |m| m.as_str()),
        };
    }
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    LineKind::Text(line)
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::block::{Block, List};

    fn paragraph(text: &str) -> Block {
        Block::Paragraph { text: text.into() }
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert!(parse("").is_empty());
        assert!(parse("  \n\t\n").is_empty());
    }

    #[test]
    fn heading_levels() {
        assert_eq!(
            parse("# Title"),
            vec![Block::Heading {
                level: 1,
                text: "Title".into()
            }]
        );
        assert_eq!(
            parse("## Sub\n### Deep"),
            vec![
                Block::Heading {
                    level: 2,
                    text: "Sub".into()
                },
                Block::Heading {
                    level: 3,
                    text: "Deep".into()
                },
            ]
        );
    }

    #[test]
    fn hash_without_space_is_a_paragraph() {
        assert_eq!(parse("#Title"), vec![paragraph("#Title")]);
        assert_eq!(parse("#### Four"), vec![paragraph("#### Four")]);
    }

    #[test]
    fn consecutive_items_merge_into_one_list() {
        assert_eq!(
            parse("- a\n- b\n- c"),
            vec![Block::List(List {
                ordered: false,
                items: vec!["a".into(), "b".into(), "c".into()],
            })]
        );
    }

    #[test]
    fn both_bullet_markers_feed_the_same_list() {
        assert_eq!(
            parse("- a\n* b"),
            vec![Block::List(List {
                ordered: false,
                items: vec!["a".into(), "b".into()],
            })]
        );
    }

    #[test]
    fn blank_line_splits_a_list() {
        assert_eq!(
            parse("- x\n\n- y"),
            vec![
                Block::List(List {
                    ordered: false,
                    items: vec!["x".into()],
                }),
                Block::List(List {
                    ordered: false,
                    items: vec!["y".into()],
                }),
            ]
        );
    }

    #[test]
    fn switching_marker_kind_splits_a_list() {
        assert_eq!(
            parse("- a\n1. b"),
            vec![
                Block::List(List {
                    ordered: false,
                    items: vec!["a".into()],
                }),
                Block::List(List {
                    ordered: true,
                    items: vec!["b".into()],
                }),
            ]
        );
    }

    #[test]
    fn ordered_items() {
        assert_eq!(
            parse("1. one\n2. two\n10. ten"),
            vec![Block::List(List {
                ordered: true,
                items: vec!["one".into(), "two".into(), "ten".into()],
            })]
        );
    }

    #[test]
    fn number_without_marker_space_is_a_paragraph() {
        assert_eq!(parse("1.no space"), vec![paragraph("1.no space")]);
    }

    #[test]
    fn fence_body_is_verbatim() {
        assert_eq!(
            parse("```\nhello\nworld\n```"),
            vec![Block::CodeBlock {
                language: None,
                code: "hello\nworld".into(),
            }]
        );
        // Lines that look like structure stay part of the body
        assert_eq!(
            parse("```\n# not a heading\n- not a list\n**x**\n```"),
            vec![Block::CodeBlock {
                language: None,
                code: "# not a heading\n- not a list\n**x**".into(),
            }]
        );
    }

    #[test]
    fn fence_language_tag() {
        assert_eq!(
            parse("```rust\nlet x = 1;\n```"),
            vec![Block::CodeBlock {
                language: Some("rust".into()),
                code: "let x = 1;".into(),
            }]
        );
    }

    #[test]
    fn fence_body_outer_whitespace_is_trimmed() {
        assert_eq!(
            parse("```\n\nhello\n\n```"),
            vec![Block::CodeBlock {
                language: None,
                code: "hello".into(),
            }]
        );
    }

    #[test]
    fn unterminated_fence_flushes_at_eof() {
        assert_eq!(
            parse("```\nstill open"),
            vec![Block::CodeBlock {
                language: None,
                code: "still open".into(),
            }]
        );
    }

    #[test]
    fn fence_interrupts_a_list() {
        assert_eq!(
            parse("- a\n```\nx\n```"),
            vec![
                Block::List(List {
                    ordered: false,
                    items: vec!["a".into()],
                }),
                Block::CodeBlock {
                    language: None,
                    code: "x".into(),
                },
            ]
        );
    }

    #[test]
    fn rule_variants() {
        assert_eq!(
            parse("---\n***\n___"),
            vec![Block::Rule, Block::Rule, Block::Rule]
        );
        assert_eq!(parse("  ---  "), vec![Block::Rule]);
    }

    #[test]
    fn blockquote_lines_stay_separate() {
        assert_eq!(
            parse("> a\n> b"),
            vec![
                Block::Blockquote { text: "a".into() },
                Block::Blockquote { text: "b".into() },
            ]
        );
    }

    #[test]
    fn plain_lines_stay_separate_paragraphs() {
        assert_eq!(parse("one\ntwo"), vec![paragraph("one"), paragraph("two")]);
    }

    #[test]
    fn crlf_input_is_normalized() {
        assert_eq!(
            parse("- a\r\n- b\r"),
            vec![Block::List(List {
                ordered: false,
                items: vec!["a".into(), "b".into()],
            })]
        );
    }

    #[test]
    fn list_still_open_at_eof_is_flushed() {
        assert_eq!(
            parse("text\n- tail"),
            vec![
                paragraph("text"),
                Block::List(List {
                    ordered: false,
                    items: vec!["tail".into()],
                }),
            ]
        );
    }
}
