//! CLI for roadmark - Markdown to HTML fragment renderer

use clap::Parser;
use roadmark::{ClassMap, MarkdownToHtml, RenderOptions, SanitizeMode};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Markdown file path (reads stdin if omitted or "-")
    input: Option<PathBuf>,

    /// Output HTML file path (prints to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file with render options and class names
    #[arg(long)]
    config: Option<PathBuf>,

    /// Escape fenced code bodies only, passing other text through as markup
    #[arg(long)]
    legacy_escaping: bool,

    /// Merge consecutive blockquote lines into one blockquote
    #[arg(long)]
    merge_blockquotes: bool,

    /// Emit elements without class attributes or bullet prefixes
    #[arg(long)]
    bare: bool,

    /// Wrap the fragment in a div with this class
    #[arg(long)]
    container: Option<String>,
}

fn build_options(args: &Args) -> roadmark::Result<RenderOptions> {
    let mut options = match &args.config {
        Some(path) => roadmark::config::load_from_path(path)?,
        None => RenderOptions::default(),
    };
    if args.legacy_escaping {
        options.sanitize = SanitizeMode::Legacy;
    }
    if args.merge_blockquotes {
        options.merge_blockquotes = true;
    }
    if args.bare {
        options.classes = ClassMap::bare();
    }
    if let Some(container) = &args.container {
        options.container = Some(container.clone());
    }
    Ok(options)
}

fn read_input(input: Option<&PathBuf>) -> roadmark::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn run(args: &Args) -> roadmark::Result<()> {
    let options = build_options(args)?;
    let source = read_input(args.input.as_ref())?;
    let converter = MarkdownToHtml::new(options);

    let Some(html) = converter.render_optional(Some(&source)) else {
        log::info!("input is empty, nothing to render");
        return Ok(());
    };

    match &args.output {
        Some(output) => {
            std::fs::write(output, &html)?;
            log::info!("wrote {} bytes to {}", html.len(), output.display());
        }
        None => println!("{}", html),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
