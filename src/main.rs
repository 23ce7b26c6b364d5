//! regscan - bulk URL scanner CLI

use clap::Parser;
use colored::Colorize;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, BufReader};
use tracing_subscriber::EnvFilter;

use regscan::config;
use regscan::http::HttpClient;
use regscan::models::ScanConfig;
use regscan::report::{JsonlSink, OutputFormat, ReportSink, TextSink};
use regscan::scanner::{PatternCatalog, Runner};

/// Fetch URLs and report every regex pattern match in their responses
#[derive(Parser)]
#[command(name = "regscan", version, about, long_about = None)]
struct Cli {
    /// File containing list of URLs (default: stdin)
    #[arg(short, long, conflicts_with = "url")]
    file: Option<PathBuf>,

    /// Single URL to scan
    #[arg(short, long)]
    url: Option<String>,

    /// Pattern catalog (YAML)
    #[arg(short, long)]
    patterns: Option<String>,

    /// Follow HTTP redirects instead of matching the redirect response
    #[arg(long)]
    redirect: bool,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (text or jsonl)
    #[arg(long, default_value = "text")]
    format: String,

    /// Overall request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "regscan=debug" } else { "regscan=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_scan_config(path: Option<&Path>) -> regscan::error::Result<ScanConfig> {
    match path {
        Some(path) => config::load_config(path),
        None => {
            let default_path = Path::new("regscan.toml");
            if default_path.exists() {
                config::load_config(default_path)
            } else {
                Ok(ScanConfig::default())
            }
        }
    }
}

async fn open_input(cli: &Cli) -> regscan::error::Result<Box<dyn AsyncBufRead + Unpin>> {
    if let Some(url) = &cli.url {
        return Ok(Box::new(io::Cursor::new(format!("{url}\n").into_bytes())));
    }
    match &cli.file {
        Some(path) => {
            let file = tokio::fs::File::open(path).await?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(tokio::io::stdin()))),
    }
}

async fn run(cli: Cli) -> regscan::error::Result<()> {
    let format: OutputFormat = cli.format.parse()?;

    let mut scan_config = load_scan_config(cli.config.as_deref())?;
    config::merge_cli_args(
        &mut scan_config,
        cli.patterns.clone(),
        cli.redirect,
        cli.timeout,
    )?;

    // Everything fatal happens before the first URL is read
    let catalog = PatternCatalog::load(Path::new(&scan_config.patterns_path))?;
    let client = HttpClient::from_config(&scan_config)?;
    let input = open_input(&cli).await?;

    let runner = Runner::new(client, &catalog, scan_config.follow_redirects);
    let color = !cli.no_color && io::stdout().is_terminal();

    let mut sink: Box<dyn ReportSink> = match format {
        OutputFormat::Text => Box::new(TextSink::new(io::stdout(), io::stderr(), color)),
        OutputFormat::Jsonl => Box::new(JsonlSink::new(io::stdout(), io::stderr())),
    };

    runner.run(input, sink.as_mut()).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli).await {
        eprintln!("  {} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
