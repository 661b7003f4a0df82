fn main() {
    let args: Vec<String> = std::env::args().collect();
    let md = if args.len() > 1 {
        std::fs::read_to_string(&args[1]).expect("Failed to read file")
    } else {
        "# Overview\n\nIntro with **bold** text.\n\n- first\n- second\n\n```rust\nlet x = 1;\n```"
            .to_string()
    };

    for block in briefmark::parse(&md) {
        match block {
            briefmark::Block::Heading { level, text } => {
                println!("H{}        {}", level, preview(&text));
            }
            briefmark::Block::Paragraph { text } => {
                println!("paragraph {}", preview(&text));
            }
            briefmark::Block::Blockquote { text } => {
                println!("quote     {}", preview(&text));
            }
            briefmark::Block::List(list) => {
                let kind = if list.ordered { "ordered" } else { "bullets" };
                println!("{}   {} item(s)", kind, list.items.len());
            }
            briefmark::Block::CodeBlock { language, code } => {
                println!(
                    "code      {} line(s), lang {}",
                    code.lines().count(),
                    language.as_deref().unwrap_or("-")
                );
            }
            briefmark::Block::Rule => println!("rule"),
        }
    }
}

fn preview(text: &str) -> String {
    text.chars().take(40).collect()
}
