use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use briefmark::Config;

#[derive(Parser)]
#[command(name = "briefmark")]
#[command(about = "Render loosely formatted markdown into HTML, plain text, or JSON")]
struct Cli {
    /// Input markdown file
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    format: Format,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to briefmark.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let markdown = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from("briefmark.toml"));
    let config = Config::load(&config_path);

    let rendered = match cli.format {
        Format::Html => briefmark::markdown_to_html_with_config(&markdown, &config),
        Format::Text => briefmark::markdown_to_text_with_config(&markdown, &config),
        Format::Json => match briefmark::markdown_to_json(&markdown) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    };

    match cli.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, rendered) {
                eprintln!("Error writing {}: {}", path.display(), e);
                std::process::exit(1);
            }
            println!("Created {}", path.display());
        }
        None => print!("{rendered}"),
    }
}
