use crate::ir::{Line, Token};

const TRIPLE: usize = 3;

/// Stands in for an invalid byte sequence until the stream is finished.
/// A noncharacter: never whitespace, never part of any filter or marker.
pub const INVALID: char = '\u{FFFF}';

/// Decodes raw post bytes, marking every invalid UTF-8 sequence with
/// [`INVALID`] so the text around it is not joined together.
pub fn decode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            out.push(INVALID);
        }
    }
    out
}

pub fn strip_invalid(text: &str) -> String {
    text.chars().filter(|&c| c != INVALID).collect()
}

fn is_marker_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b == b'@')
}

pub fn tokenize(lines: &[Line]) -> Vec<Token> {
    let mut out = Vec::new();
    for line in lines {
        match line {
            Line::Boundary => out.push(Token::Boundary),
            Line::Text(text) => {
                for word in text.split_whitespace() {
                    if is_marker_word(word) {
                        out.extend(std::iter::repeat(Token::Boundary).take(word.len()));
                    } else {
                        out.push(Token::Word(word.to_string()));
                    }
                }
            }
        }
    }
    out
}

/// Fuses boundary runs: every three in a row, counted from the left, become
/// one triple; whatever is left of the run becomes a single boundary.
/// Boundaries at either end of the stream are dropped.
pub fn fuse(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut run = 0usize;

    let flush = |run: &mut usize, out: &mut Vec<Token>| {
        out.extend(std::iter::repeat(Token::TripleBoundary).take(*run / TRIPLE));
        if *run % TRIPLE > 0 {
            out.push(Token::Boundary);
        }
        *run = 0;
    };

    for token in tokens {
        match token {
            Token::Boundary => run += 1,
            other => {
                flush(&mut run, &mut out);
                out.push(other);
            }
        }
    }
    flush(&mut run, &mut out);

    let lead = out.iter().take_while(|t| t.is_boundary()).count();
    out.drain(..lead);
    while out.last().is_some_and(Token::is_boundary) {
        out.pop();
    }
    out
}

pub fn render(tokens: &[Token], pad: &str) -> String {
    let triple = pad.repeat(TRIPLE);
    tokens
        .iter()
        .map(|t| match t {
            Token::Word(w) => w.as_str(),
            Token::Boundary => pad,
            Token::TripleBoundary => triple.as_str(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Joins the collapsed lines into the final single-line stream. Invalid
/// byte markers are only dropped here, right before whitespace is
/// normalized.
pub fn stage_assemble(lines: &[Line], pad: &str) -> String {
    let rendered = render(&fuse(tokenize(lines)), pad);
    strip_invalid(&rendered)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
