use crate::{error::ParseError, interpreter::parser::parse, util::chars::is_operator};

/// A node in the expression tree.
///
/// A `Term` is either a **leaf** or a **group**. A leaf has no subterms and
/// its `text` holds a signed numeric literal exactly as it was scanned
/// (`"+3.5"`, `"-2"`, possibly a multi-character sign run such as `"--5"`).
/// A group has a non-empty list of subterms representing a parenthesized
/// sequence (or the implicit top-level sequence); its `text`, when non-empty,
/// carries the operator that combines the whole group with its left sibling.
///
/// Every child after the first always starts with its own operator character,
/// which [`Term::operator`] extracts; a child with no leading operator
/// defaults to `+`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Term {
    /// Literal text of a leaf, or the leading operator text of a group.
    pub text:         String,
    /// Whether `result` holds a finalized value. Set once, never unset.
    pub is_evaluated: bool,
    /// The cached value, meaningful only once `is_evaluated` is true.
    pub result:       f64,
    /// Ordered children; empty for leaves.
    pub subterms:     Vec<Term>,
}

impl Term {
    /// Parses an expression string into a term tree.
    ///
    /// This is the entry point for the parsing phase. The input is expected
    /// to already have whitespace removed; the scanner treats every character
    /// as significant.
    ///
    /// # Parameters
    /// - `expression`: The raw expression text, e.g. `"1-(12*3-(11+5))/8"`.
    ///
    /// # Returns
    /// The root term, a group whose subterms are the top-level operands.
    ///
    /// # Errors
    /// - [`ParseError::UnterminatedGroup`] if a `(` is never closed.
    /// - [`ParseError::UnexpectedClosingParen`] if a `)` has no matching `(`.
    ///
    /// # Example
    /// ```
    /// use termcalc::term::Term;
    ///
    /// let mut term = Term::new("2*(3+1)").unwrap();
    /// assert_eq!(term.calculate().unwrap(), 8.0);
    ///
    /// assert!(Term::new("2*(3+1").is_err());
    /// ```
    pub fn new(expression: &str) -> Result<Self, ParseError> {
        let chars: Vec<char> = expression.chars().collect();
        let (term, end) = parse(&chars, 0)?;

        // The top-level scan only stops early on a `)` that no `(` opened.
        if end < chars.len() {
            return Err(ParseError::UnexpectedClosingParen { position: end });
        }

        Ok(term)
    }

    /// Builds an already-evaluated leaf carrying `result`.
    ///
    /// Collapsing a pair of siblings produces one of these. The text form
    /// keeps an explicit `+` prefix for non-negative values so the leaf looks
    /// exactly like a scanned operand to the remaining passes.
    pub(crate) fn evaluated(result: f64) -> Self {
        let text = if result >= 0.0 {
            format!("+{result}")
        } else {
            format!("{result}")
        };

        Self { text,
               is_evaluated: true,
               result,
               subterms: Vec::new() }
    }

    /// Returns the operator combining this term with its left sibling.
    ///
    /// The operator is the first character of `text` when that character is
    /// one of `+ - * / % ^`; anything else (including empty text) defaults to
    /// `+`.
    ///
    /// # Example
    /// ```
    /// use termcalc::term::Term;
    ///
    /// let term = Term::new("1*2").unwrap();
    /// assert_eq!(term.subterms[0].operator(), '+');
    /// assert_eq!(term.subterms[1].operator(), '*');
    /// ```
    #[must_use]
    pub fn operator(&self) -> char {
        match self.text.chars().next() {
            Some(ch) if is_operator(ch) => ch,
            _ => '+',
        }
    }
}

impl std::fmt::Display for Term {
    /// Renders the term back to expression text: the leading text, then the
    /// children wrapped in parentheses.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.text.is_empty() {
            write!(f, "{}", self.text)?;
        }

        if !self.subterms.is_empty() {
            write!(f, "(")?;
            for subterm in &self.subterms {
                write!(f, "{subterm}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}
