#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing an expression.
pub enum ParseError {
    /// An opening parenthesis `(` was never closed.
    UnterminatedGroup {
        /// Character index of the offending `(`.
        position: usize,
    },
    /// A closing parenthesis `)` appeared with no matching `(`.
    UnexpectedClosingParen {
        /// Character index of the offending `)`.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedGroup { position } => {
                write!(f, "Unterminated group: '(' at position {position} is never closed.")
            },

            Self::UnexpectedClosingParen { position } => {
                write!(f, "Unexpected ')' at position {position}: no matching '('.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
