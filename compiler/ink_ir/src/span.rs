//! Source location spans.

use std::fmt;

/// Source location span.
///
/// `start`/`end` are byte offsets (end exclusive); `line`/`col` are the
/// 1-based position of `start`, kept alongside so diagnostics never need
/// the source text to render a location.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct Span {
    pub start: u32,
    pub end: u32,
    pub line: u32,
    pub col: u32,
}

impl Span {
    /// Dummy span for values synthesized outside any source text.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        col: 0,
    };

    #[inline]
    pub const fn new(start: u32, end: u32, line: u32, col: u32) -> Self {
        Span {
            start,
            end,
            line,
            col,
        }
    }

    /// Extend this span to cover `other`, keeping the leftmost position.
    #[must_use]
    pub fn to(self, other: Span) -> Span {
        if other.start < self.start {
            return other.to(self);
        }
        Span {
            end: self.end.max(other.end),
            ..self
        }
    }

    pub fn is_dummy(&self) -> bool {
        self.line == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dummy() {
            write!(f, "?")
        } else {
            write!(f, "{}:{}", self.line, self.col)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_keeps_leftmost_position() {
        let left = Span::new(4, 6, 1, 5);
        let right = Span::new(10, 14, 2, 3);

        assert_eq!(left.to(right), Span::new(4, 14, 1, 5));
        assert_eq!(right.to(left), Span::new(4, 14, 1, 5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::new(0, 1, 3, 7).to_string(), "3:7");
        assert_eq!(Span::DUMMY.to_string(), "?");
    }
}
