use std::ops::Range;

/// A malformed regex. Positions are byte offsets into the regex string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    #[error("invalid character '{ch}' at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },

    #[error("unbalanced parentheses: unexpected ')' at position {pos}")]
    UnexpectedClose { pos: usize },

    #[error("unbalanced parentheses: missing ')' for '(' at position {pos}")]
    MissingClose { pos: usize },
}

impl SpecError {
    pub fn pos(&self) -> usize {
        match self {
            SpecError::InvalidCharacter { pos, .. }
            | SpecError::UnexpectedClose { pos }
            | SpecError::MissingClose { pos } => *pos,
        }
    }

    /// Byte range of the offending character.
    pub fn span(&self) -> Range<usize> {
        let width = match self {
            SpecError::InvalidCharacter { ch, .. } => ch.len_utf8(),
            SpecError::UnexpectedClose { .. } | SpecError::MissingClose { .. } => 1,
        };
        self.pos()..self.pos() + width
    }

    /// Short annotation shown under the offending character.
    pub fn label(&self) -> &'static str {
        match self {
            SpecError::InvalidCharacter { .. } => "expected a letter, '.', an operator or a parenthesis",
            SpecError::UnexpectedClose { .. } => "no matching '('",
            SpecError::MissingClose { .. } => "this group is never closed",
        }
    }
}
