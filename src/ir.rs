/// One line of a post while it moves through the line-level stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    Boundary,
}

impl Line {
    pub fn text(s: impl Into<String>) -> Self {
        Line::Text(s.into())
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Line::Text(t) if t.trim().is_empty())
    }
}

/// A unit of the assembled single-line stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Word(String),
    Boundary,
    /// Three consecutive boundaries kept together as one token.
    TripleBoundary,
}

impl Token {
    pub fn is_boundary(&self) -> bool {
        matches!(self, Token::Boundary | Token::TripleBoundary)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// No `@` or `>` left after the group tag is removed.
    NoMarkers,
    /// URL, broadcast channel hashtag or club reference.
    Spam,
    /// Fewer than three lines after hashtag segmentation.
    TooShort,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::NoMarkers => "no_markers",
            Rejection::Spam => "spam",
            Rejection::TooShort => "too_short",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted(String),
    Rejected(Rejection),
}

impl Outcome {
    pub fn accepted(&self) -> Option<&str> {
        match self {
            Outcome::Accepted(s) => Some(s),
            Outcome::Rejected(_) => None,
        }
    }
}
