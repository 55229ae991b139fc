use crate::{
    error::EvalError,
    term::Term,
    util::chars::{is_additive, is_exponent, is_multiplicative, is_numeric, is_sign},
};

pub type EvalResult<T> = Result<T, EvalError>;

/// One precedence class, applied to a group as a full left-to-right pass.
#[derive(Debug, Clone, Copy)]
enum Pass {
    Exponent,
    Multiplicative,
    Additive,
}

impl Pass {
    /// The passes in evaluation order, highest precedence first.
    const ORDER: [Self; 3] = [Self::Exponent, Self::Multiplicative, Self::Additive];

    /// Returns whether `operator` belongs to this pass's class.
    const fn matches(self, operator: char) -> bool {
        match self {
            Self::Exponent => is_exponent(operator),
            Self::Multiplicative => is_multiplicative(operator),
            Self::Additive => is_additive(operator),
        }
    }
}

impl Term {
    /// Evaluates the term to a single value, collapsing it in place.
    ///
    /// A leaf parses its own text after sign normalization. A group runs the
    /// three precedence passes over its children, replacing each resolved
    /// pair of neighbors with one synthesized leaf until a single child
    /// remains, then adopts that child's value. A group whose own text
    /// carries a `-` negates the surviving child's stored result before
    /// adopting it.
    ///
    /// The first successful call finalizes the term; subsequent calls return
    /// the cached value.
    ///
    /// # Returns
    /// The numeric value of the expression this term represents.
    ///
    /// # Errors
    /// - [`EvalError::InvalidNumberFormat`] if a leaf's normalized text is
    ///   not a floating-point number.
    /// - [`EvalError::ModuloByZero`] if the right operand of `%` truncates to
    ///   zero.
    ///
    /// # Example
    /// ```
    /// use termcalc::term::Term;
    ///
    /// let mut term = Term::new("1-(12*3-(11+5))/8").unwrap();
    /// assert_eq!(term.calculate().unwrap(), -1.5);
    /// // Idempotent: the collapsed tree keeps returning the same value.
    /// assert_eq!(term.calculate().unwrap(), -1.5);
    /// ```
    pub fn calculate(&mut self) -> EvalResult<f64> {
        if self.subterms.is_empty() {
            return self.resolve_leaf();
        }

        if self.is_evaluated {
            return Ok(self.result);
        }

        if self.subterms.len() == 1 {
            self.subterms[0].calculate()?;
        }

        for pass in Pass::ORDER {
            let mut i = 0;

            while i + 1 < self.subterms.len() {
                let operator = self.subterms[i + 1].operator();

                if !pass.matches(operator) {
                    i += 1;
                    continue;
                }

                let left = self.subterms[i].calculate()?;
                let right = self.subterms[i + 1].calculate()?;
                let result = apply(operator, left, right)?;

                self.subterms[i] = Term::evaluated(result);
                self.subterms.remove(i + 1);
                // Stay at `i`: the synthesized leaf may combine with its new
                // right neighbor in this same pass.
            }
        }

        if !self.text.is_empty() && self.operator() == '-' {
            // The whole group was subtracted at the parent level; the sign
            // lands on the surviving child's stored result.
            self.subterms[0].result = -self.subterms[0].result;
        }

        self.result = self.subterms[0].result;
        self.is_evaluated = true;

        Ok(self.result)
    }

    /// Resolves a leaf by normalizing its sign prefix and parsing the rest.
    ///
    /// Each prefix rewrite applies at most once, in order, on the already
    /// rewritten string: `"---5"` becomes `"-5"` (two rules fire in
    /// sequence), while `"----5"` only reaches `"--5"` and fails to parse.
    fn resolve_leaf(&mut self) -> EvalResult<f64> {
        if self.is_evaluated {
            return Ok(self.result);
        }

        let mut number = self.text.clone();

        if number.starts_with("--") {
            number.replace_range(..2, "+");
        }
        if number.starts_with("+-") {
            number.replace_range(..2, "-");
        }
        if number.starts_with("-+") {
            number.replace_range(..2, "+");
        }
        if number.starts_with("++") {
            number.replace_range(..2, "+");
        }

        // A stray leading operator (`*`, `/`, ...) is an artifact of the
        // scanner's operand splitting, not part of the number.
        if let Some(first) = number.chars().next() {
            if !is_numeric(first) && !is_sign(first) {
                number.remove(0);
            }
        }

        self.result = number.parse()
                            .map_err(|_| EvalError::InvalidNumberFormat { literal: self.text.clone() })?;
        self.is_evaluated = true;

        Ok(self.result)
    }
}

/// Applies `operator` to two resolved values.
///
/// A negative left operand under a multiplicative operator carries a sign the
/// scanner attached to the operand rather than the operation; the magnitude
/// is used and the sign is restored on the combined result. Both additive
/// operators reduce to addition because a binary `-` is already folded into
/// the right operand's sign while scanning.
fn apply(operator: char, left: f64, right: f64) -> EvalResult<f64> {
    let negate = is_multiplicative(operator) && left < 0.0;
    let left = if negate { left.abs() } else { left };

    let result = match operator {
        '^' => left.powf(right),
        '+' | '-' => left + right,
        '*' => left * right,
        '/' => left / right,
        '%' => modulo(left, right)?,
        _ => unreachable!(),
    };

    Ok(if negate { -result } else { result })
}

/// Integer remainder of the truncated operands.
///
/// Division by zero propagates as infinity under `/`, but `%` has no such
/// escape hatch in integer arithmetic, so a zero divisor is an error here.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn modulo(left: f64, right: f64) -> EvalResult<f64> {
    let divisor = right.trunc();

    if divisor == 0.0 {
        return Err(EvalError::ModuloByZero);
    }

    Ok(((left.trunc() as i64) % (divisor as i64)) as f64)
}
