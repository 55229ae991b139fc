#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a term tree.
pub enum EvalError {
    /// A leaf's text could not be parsed as a floating-point number after
    /// sign normalization.
    InvalidNumberFormat {
        /// The literal as it appeared in the term.
        literal: String,
    },
    /// The right operand of a `%` operation truncated to zero.
    ModuloByZero,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumberFormat { literal } => {
                write!(f, "Invalid number format: '{literal}' is not a number.")
            },

            Self::ModuloByZero => write!(f, "Modulo by zero."),
        }
    }
}

impl std::error::Error for EvalError {}
