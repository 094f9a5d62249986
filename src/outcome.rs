use crate::prelude::*;

/// Result of one parse attempt at a cursor position.
///
/// Positions are byte offsets into the parsed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ParseOutcome {
    /// Text consumed up to `end`, `value` committed to the context.
    #[display(fmt = "matched {value} up to {end}")]
    Matched { end: usize, value: i64 },
    /// Nothing usable at `position`.
    #[display(fmt = "no match at {position}")]
    NotMatched { position: usize },
}

impl ParseOutcome {
    pub const fn is_matched(self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    /// Cursor after the consumed text, if any
    pub const fn end(self) -> Option<usize> {
        match self {
            Self::Matched { end, .. } => Some(end),
            Self::NotMatched { .. } => None,
        }
    }

    /// Encodes to the pipeline convention: the next cursor position on
    /// success, the bitwise complement of the failure position otherwise.
    pub fn encode(self) -> i64 {
        match self {
            Self::Matched { end, .. } => to_i64(end),
            Self::NotMatched { position } => !to_i64(position),
        }
    }
}

fn to_i64(position: usize) -> i64 {
    i64::try_from(position).unwrap_or(i64::MAX)
}
