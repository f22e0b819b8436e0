//! Reads an HTML document from stdin and writes the extracted article to
//! stdout as JSON.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use article_reader::{read_bytes_with_options, Options, ScoringConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Address the document was fetched from, for resolving relative links
    #[arg(long)]
    base_url: Option<String>,

    /// Keep the ancestor chain from the document root down to the article
    #[arg(long)]
    full_page: bool,

    /// Remove the leading headline from the content
    #[arg(long)]
    no_headline: bool,

    /// JSON file overriding scoring constants
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    let scoring = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
            ScoringConfig::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => ScoringConfig::default(),
    };
    let options = Options {
        body_only: !cli.full_page,
        no_headline: cli.no_headline,
        base_url: cli.base_url.clone(),
        scoring,
        ..Options::default()
    };

    let mut html = Vec::new();
    io::stdin()
        .read_to_end(&mut html)
        .map_err(|e| format!("failed to read stdin: {e}"))?;

    let article = read_bytes_with_options(&html, &options).map_err(|e| e.to_string())?;
    serde_json::to_string_pretty(&article).map_err(|e| e.to_string())
}
