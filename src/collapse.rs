use crate::ir::{Line, Rejection};

const MIN_LINES: usize = 3;

fn is_empty(line: &Line) -> bool {
    matches!(line, Line::Text(t) if t.is_empty())
}

fn trim_blank(mut lines: Vec<Line>) -> Vec<Line> {
    while lines.last().is_some_and(Line::is_blank) {
        lines.pop();
    }
    let lead = lines.iter().take_while(|l| l.is_blank()).count();
    lines.drain(..lead);
    lines
}

/// Turns paragraph breaks into boundaries and enforces the minimum shape of
/// a post: at least two line breaks once surrounding blank lines are gone.
///
/// Blank lines are paired off left to right, so a run of `k` blank lines
/// yields `ceil(k / 2)` boundaries.
pub fn stage_collapse(lines: Vec<Line>) -> Result<Vec<Line>, Rejection> {
    let lines = trim_blank(lines);
    if lines.len() < MIN_LINES {
        return Err(Rejection::TooShort);
    }

    let mut out = Vec::with_capacity(lines.len());
    let mut run = 0usize;
    for line in lines {
        if is_empty(&line) {
            run += 1;
            continue;
        }
        out.extend(std::iter::repeat(Line::Boundary).take(run.div_ceil(2)));
        run = 0;
        out.push(line);
    }

    if out.last() == Some(&Line::Boundary) {
        out.pop();
    }
    Ok(out)
}
