use crate::config::Config;
use crate::error::{Error, Result};
use crate::ir::{Outcome, Rejection};
use crate::record;
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

/// Counters for one run over an input stream.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    pub posts: usize,
    pub accepted: usize,
    pub no_markers: usize,
    pub spam: usize,
    pub too_short: usize,
    /// The run stopped early because the running flag was cleared.
    pub cancelled: bool,
}

impl Stats {
    fn reject(&mut self, reason: Rejection) {
        match reason {
            Rejection::NoMarkers => self.no_markers += 1,
            Rejection::Spam => self.spam += 1,
            Rejection::TooShort => self.too_short += 1,
        }
    }

    pub fn rejected(&self) -> usize {
        self.no_markers + self.spam + self.too_short
    }
}

/// Reads one line into `buf` without its `\n` or `\r\n` terminator.
/// Returns `false` at end of input.
fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(true)
}

/// Splits `reader` into posts on the separator line, cleans each one and
/// writes a record for every accepted post.
///
/// `running` and the post limit are only consulted right after a separator,
/// so a post is either written whole or not at all. Lines after the last
/// separator never form a post.
pub fn segment<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    config: &Config,
    running: &AtomicBool,
) -> Result<Stats> {
    let mut stats = Stats::default();
    let separator = config.separator.as_bytes();

    if let Some(header) = record::header(config) {
        writer.write_all(header.as_bytes()).map_err(Error::Write)?;
    }

    let mut line = Vec::new();
    let mut post: Vec<u8> = Vec::new();

    while read_line(&mut reader, &mut line).map_err(Error::Read)? {
        if line != separator {
            post.extend_from_slice(&line);
            post.push(b'\n');
            continue;
        }

        let raw = std::mem::take(&mut post);
        stats.posts += 1;

        match crate::clean_post(&raw, config) {
            Outcome::Accepted(stream) => {
                stats.accepted += 1;
                let rec = record::format_record(stats.accepted, &stream, config);
                writer.write_all(rec.as_bytes()).map_err(Error::Write)?;
            }
            Outcome::Rejected(reason) => {
                debug!(post = stats.posts, reason = reason.as_str(), "post rejected");
                stats.reject(reason);
            }
        }

        if config.limit_reached(stats.accepted) {
            info!("limit of {} posts reached", config.limit);
            break;
        }
        if !running.load(Ordering::SeqCst) {
            info!("stop requested, finishing after post {}", stats.posts);
            stats.cancelled = true;
            break;
        }
    }

    if !post.is_empty() {
        warn!(
            "discarding {} trailing bytes not followed by a separator",
            post.len()
        );
    }

    writer.flush().map_err(Error::Write)?;
    Ok(stats)
}
