use std::ops::RangeInclusive;

/// One construct of a parsed pattern
///
/// Children of [`Node::Concat`] and [`Node::Alternate`] are expected to be non-empty. Empty lists
/// are tolerated and produce empty descriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Node {
    /// Matches empty string
    Empty,
    /// Matches any code point from given inclusive ranges
    Class(Vec<RangeInclusive<char>>),
    /// Matches code points in order
    Literal(Vec<char>),
    /// `(?s).`
    AnyChar,
    /// `.`
    AnyCharNotNewline,
    /// `(?m)^`
    BeginLine,
    /// `(?m)$`
    EndLine,
    /// `^`
    BeginText,
    /// `$`
    EndText,
    /// `\b`
    WordBoundary,
    /// `\B`
    NoWordBoundary,
    /// `(x)`
    Capture(Box<Node>),
    /// `x*`
    Star(Box<Node>),
    /// `x+`
    Plus(Box<Node>),
    /// `x?`
    Optional(Box<Node>),
    /// `x{min,max}`, unbounded if `max` is [`None`]
    Repeat {
        sub: Box<Node>,
        min: u32,
        max: Option<u32>,
    },
    /// `xy`
    Concat(Vec<Node>),
    /// `x|y`
    Alternate(Vec<Node>),
}

impl Node {
    pub fn literal(s: &str) -> Self {
        Self::Literal(s.chars().collect())
    }

    pub fn class(ranges: impl IntoIterator<Item = RangeInclusive<char>>) -> Self {
        Self::Class(ranges.into_iter().collect())
    }

    pub fn capture(sub: Node) -> Self {
        Self::Capture(Box::new(sub))
    }

    pub fn star(sub: Node) -> Self {
        Self::Star(Box::new(sub))
    }

    pub fn plus(sub: Node) -> Self {
        Self::Plus(Box::new(sub))
    }

    pub fn optional(sub: Node) -> Self {
        Self::Optional(Box::new(sub))
    }

    pub fn repeat(sub: Node, min: u32, max: Option<u32>) -> Self {
        Self::Repeat {
            sub: Box::new(sub),
            min,
            max,
        }
    }
}
