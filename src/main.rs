use anyhow::{Context, Result};
use bugurtc::config::Config;
use clap::Parser;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bugurtc",
    about = "Bugurt Cleaner — normalize scraped bugurt posts into training sequences"
)]
struct Cli {
    /// Raw posts file
    #[arg(short, long, default_value = "raw.txt")]
    input: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "clean.tsv")]
    output: PathBuf,

    /// Raw posts separator line (default: <BAGUETTE>)
    #[arg(short = 'r', long)]
    separator: Option<String>,

    /// Context prepended to every record, empty to disable
    #[arg(short, long)]
    context: Option<String>,

    /// Begin-of-sequence token (default: <BOS>)
    #[arg(short, long)]
    bos: Option<String>,

    /// End-of-sequence token (default: <EOS>)
    #[arg(short, long)]
    eos: Option<String>,

    /// Pad token written for every boundary (default: <PAD>)
    #[arg(short, long)]
    pad: Option<String>,

    /// Stop after this many accepted posts (default: 0 = no limit)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Write an id column and header row (default: true)
    #[arg(short, long, value_name = "BOOL")]
    tsv: Option<bool>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(ref path) = cli.config {
        return Ok(bugurtc::load_config(path)?);
    }
    for p in ["bugurtc.config.json", "config/bugurtc.config.json"] {
        let path = PathBuf::from(p);
        if path.is_file() {
            tracing::info!("using config {}", path.display());
            return Ok(bugurtc::load_config(&path)?);
        }
    }
    Ok(Config::default())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = load_config(&cli)?;

    // CLI overrides
    if let Some(ref separator) = cli.separator {
        config.separator = separator.clone();
    }
    if let Some(ref context) = cli.context {
        config.context = context.clone();
    }
    if let Some(ref bos) = cli.bos {
        config.bos = bos.clone();
    }
    if let Some(ref eos) = cli.eos {
        config.eos = eos.clone();
    }
    if let Some(ref pad) = cli.pad {
        config.pad = pad.clone();
    }
    if let Some(limit) = cli.limit {
        config.limit = limit;
    }
    if let Some(tsv) = cli.tsv {
        config.tsv = tsv;
    }

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);
    ctrlc::set_handler(move || {
        tracing::info!("interrupt received, stopping after the current post");
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl+C handler")?;

    let stats = bugurtc::clean_files(&cli.input, &cli.output, &config, &running)
        .with_context(|| format!("cleaning {}", cli.input.display()))?;

    if stats.cancelled {
        tracing::info!("interrupted, {} posts written", stats.accepted);
    }
    Ok(())
}
