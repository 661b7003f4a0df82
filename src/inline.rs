use crate::block::Span;

/// Resolve a block's raw text into styled spans
///
/// Patterns are applied in fixed precedence (code, link, bold, italic)
/// with non-overlapping consumption: text claimed by one pattern is never
/// reconsidered by a lower-precedence one. Unterminated markup stays
/// literal.
pub fn resolve(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    scan(text, Pattern::Code, &mut spans);
    spans
}

#[derive(Clone, Copy)]
enum Pattern {
    Code,
    Link,
    Bold,
    Italic,
    Plain,
}

impl Pattern {
    fn next(self) -> Pattern {
        match self {
            Pattern::Code => Pattern::Link,
            Pattern::Link => Pattern::Bold,
            Pattern::Bold => Pattern::Italic,
            Pattern::Italic | Pattern::Plain => Pattern::Plain,
        }
    }

    fn find(self, text: &str) -> Option<(usize, usize, Span)> {
        match self {
            Pattern::Code => find_code(text),
            Pattern::Link => find_link(text),
            Pattern::Bold => find_bold(text),
            Pattern::Italic => find_italic(text),
            Pattern::Plain => None,
        }
    }
}

fn scan(text: &str, pattern: Pattern, out: &mut Vec<Span>) {
    if text.is_empty() {
        return;
    }
    if matches!(pattern, Pattern::Plain) {
        out.push(Span::Text(text.to_string()));
        return;
    }
    match pattern.find(text) {
        Some((start, end, span)) => {
            // First match, so the text before it holds no complete match
            // of this pattern and moves down the precedence chain.
            scan(&text[..start], pattern.next(), out);
            out.push(span);
            scan(&text[end..], pattern, out);
        }
        None => scan(text, pattern.next(), out),
    }
}

fn find_code(text: &str) -> Option<(usize, usize, Span)> {
    let open = text.find('`')?;
    let close = open + 1 + text[open + 1..].find('`')?;
    Some((
        open,
        close + 1,
        Span::Code(text[open + 1..close].to_string()),
    ))
}

fn find_link(text: &str) -> Option<(usize, usize, Span)> {
    let mut from = 0;
    while let Some(rel) = text[from..].find('[') {
        let open = from + rel;
        if let Some(found) = link_at(text, open) {
            return Some(found);
        }
        from = open + 1;
    }
    None
}

fn link_at(text: &str, open: usize) -> Option<(usize, usize, Span)> {
    let close = open + 1 + text[open + 1..].find(']')?;
    if !text[close + 1..].starts_with('(') {
        return None;
    }
    let url_end = close + 2 + text[close + 2..].find(')')?;
    Some((
        open,
        url_end + 1,
        Span::Link {
            text: text[open + 1..close].to_string(),
            url: text[close + 2..url_end].to_string(),
        },
    ))
}

fn find_bold(text: &str) -> Option<(usize, usize, Span)> {
    let mut from = 0;
    while let Some(open) = double_delim(text.as_bytes(), from) {
        let marker = &text[open..open + 2];
        if let Some(rel) = text[open + 2..].find(marker) {
            let close = open + 2 + rel;
            return Some((
                open,
                close + 2,
                Span::Bold(text[open + 2..close].to_string()),
            ));
        }
        from = open + 1;
    }
    None
}

fn double_delim(bytes: &[u8], from: usize) -> Option<usize> {
    (from..bytes.len().saturating_sub(1)).find(|&i| {
        (bytes[i] == b'*' && bytes[i + 1] == b'*') || (bytes[i] == b'_' && bytes[i + 1] == b'_')
    })
}

fn find_italic(text: &str) -> Option<(usize, usize, Span)> {
    let bytes = text.as_bytes();
    let mut from = 0;
    while let Some(open) = single_delim(bytes, from) {
        let marker = bytes[open];
        let close = (open + 1..bytes.len()).find(|&j| bytes[j] == marker && lone(bytes, j));
        if let Some(close) = close {
            return Some((
                open,
                close + 1,
                Span::Italic(text[open + 1..close].to_string()),
            ));
        }
        from = open + 1;
    }
    None
}

fn single_delim(bytes: &[u8], from: usize) -> Option<usize> {
    (from..bytes.len()).find(|&i| (bytes[i] == b'*' || bytes[i] == b'_') && lone(bytes, i))
}

/// True when the delimiter at `i` is not adjacent to another of the same
/// character, so half of a bold marker never reads as an italic delimiter.
/// Delimiters are ASCII, so byte comparisons stay on char boundaries.
fn lone(bytes: &[u8], i: usize) -> bool {
    let b = bytes[i];
    (i == 0 || bytes[i - 1] != b) && (i + 1 >= bytes.len() || bytes[i + 1] != b)
}
