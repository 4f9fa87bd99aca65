//! CLI that analyzes one page and prints the result as JSON.
//!
//! Usage: `analyze_website [--only-text] [URL]`
//!
//! Logs go to stderr, filtered by `RUST_LOG` (default `info`).

use ru_page_lang::{analyze_website, Options};
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_URL: &str = "https://support.wix.com/ru";

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let mut options = Options::default();
    let mut url = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--only-text" => options = Options::only_text(),
            "-h" | "--help" => {
                eprintln!("Usage: analyze_website [--only-text] [URL]");
                return ExitCode::SUCCESS;
            }
            _ => url = Some(arg),
        }
    }
    let url = url.unwrap_or_else(|| DEFAULT_URL.to_string());

    eprintln!("Analyzing website...");
    let analysis = analyze_website(&url, &options).await;

    match analysis.to_json_pretty() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize result: {e}");
            ExitCode::FAILURE
        }
    }
}
