use crate::ir::Line;
use regex::Regex;
use std::sync::LazyLock;

static RE_HASHTAG_LED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\S").unwrap());

fn unpack(line: &str, out: &mut Vec<Line>) {
    let mut rest = line;
    loop {
        let Some((tag, tail)) = rest.split_once(' ') else {
            out.push(Line::text(rest));
            return;
        };
        out.push(Line::text(tag));
        out.push(Line::Boundary);

        let next = tail.split_once(' ').map_or(tail, |(head, _)| head);
        if !next.starts_with('#') {
            out.push(Line::text(tail));
            return;
        }
        rest = tail;
    }
}

/// Leading hashtags act as turn boundaries: each one is moved onto its own
/// line followed by a boundary, then the body follows.
pub fn stage_hashtags(lines: &[Line]) -> Vec<Line> {
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        match line {
            Line::Text(text) if RE_HASHTAG_LED.is_match(text) => unpack(text, &mut out),
            other => out.push(other.clone()),
        }
    }
    out
}
