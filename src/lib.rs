pub mod assemble;
pub mod collapse;
pub mod config;
pub mod error;
pub mod filter;
pub mod hashtags;
pub mod ir;
pub mod normalize;
pub mod record;
pub mod segment;

use config::Config;
use error::{Error, Result};
use ir::{Outcome, Rejection};
use segment::Stats;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use tracing::info;

fn run_stages(text: &str, pad: &str) -> std::result::Result<String, Rejection> {
    // Stage 1
    let text = filter::screen(text)?;

    // Stage 2
    let lines = normalize::stage_lines(&text);

    // Stage 3
    let lines = hashtags::stage_hashtags(&lines);

    // Stage 4
    let lines = collapse::stage_collapse(lines)?;

    // Stage 5
    Ok(assemble::stage_assemble(&lines, pad))
}

/// Runs one raw post through every stage. Each call owns all of its
/// intermediate state, so posts can be cleaned independently.
pub fn clean_post(raw: &[u8], config: &Config) -> Outcome {
    let text = assemble::decode(raw);
    match run_stages(&text, &config.pad) {
        Ok(stream) => Outcome::Accepted(stream),
        Err(reason) => Outcome::Rejected(reason),
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Cleans the raw dump at `input` into `output`, replacing any existing file.
pub fn clean_files(
    input: &Path,
    output: &Path,
    config: &Config,
    running: &AtomicBool,
) -> Result<Stats> {
    let input = absolute(input);
    let reader = File::open(&input).map_err(|source| Error::OpenInput {
        path: input.clone(),
        source,
    })?;
    info!("parsing posts from {}", input.display());

    let output = absolute(output);
    let writer = File::create(&output).map_err(|source| Error::CreateOutput {
        path: output.clone(),
        source,
    })?;
    info!("saving posts to {}", output.display());
    info!("processing posts, limit {}", config.limit);

    let stats = segment::segment(
        BufReader::new(reader),
        BufWriter::new(writer),
        config,
        running,
    )?;

    info!(
        posts = stats.posts,
        rejected = stats.rejected(),
        no_markers = stats.no_markers,
        spam = stats.spam,
        too_short = stats.too_short,
        "processed {} posts",
        stats.accepted
    );
    Ok(stats)
}
