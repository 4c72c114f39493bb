use crate::ir::Line;

const TURN_MARKER: &str = " @ ";

fn classify(part: &str) -> Line {
    if part == "@" {
        Line::Boundary
    } else {
        Line::text(part)
    }
}

/// Trims and upper-cases every line, then breaks inline ` @ ` turn markers
/// out into standalone boundary lines.
pub fn stage_lines(text: &str) -> Vec<Line> {
    let mut out = Vec::new();
    for raw in text.lines() {
        let line = raw.trim().to_uppercase();
        for (i, part) in line.split(TURN_MARKER).enumerate() {
            if i > 0 {
                out.push(Line::Boundary);
            }
            out.push(classify(part));
        }
    }
    out
}
