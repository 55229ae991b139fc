/// Returns whether `ch` is a sign character (`+` or `-`).
#[must_use]
pub const fn is_sign(ch: char) -> bool {
    matches!(ch, '+' | '-')
}

/// Returns whether `ch` is any operator character (`+ - * / % ^`).
#[must_use]
pub const fn is_operator(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '%' | '^')
}

/// Returns whether `ch` is the exponent operator (`^`), the highest
/// precedence class.
#[must_use]
pub const fn is_exponent(ch: char) -> bool {
    matches!(ch, '^')
}

/// Returns whether `ch` is a multiplicative operator (`*`, `/` or `%`), the
/// middle precedence class.
#[must_use]
pub const fn is_multiplicative(ch: char) -> bool {
    matches!(ch, '*' | '/' | '%')
}

/// Returns whether `ch` is an additive operator (`+` or `-`), the lowest
/// precedence class.
#[must_use]
pub const fn is_additive(ch: char) -> bool {
    matches!(ch, '+' | '-')
}

/// Returns whether `ch` can appear inside a numeric literal (a digit or the
/// decimal point).
#[must_use]
pub const fn is_numeric(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.'
}

/// Returns whether `text` contains at least one numeric character.
///
/// The scanner uses this to detect implicit multiplication: a pending operand
/// that already contains a digit (or `.`) when a `(` appears is a complete
/// number, so the group that follows is multiplied with it.
///
/// # Example
/// ```
/// use termcalc::util::chars::contains_numeric;
///
/// assert!(contains_numeric("+2"));
/// assert!(!contains_numeric("-"));
/// assert!(!contains_numeric(""));
/// ```
#[must_use]
pub fn contains_numeric(text: &str) -> bool {
    text.chars().any(is_numeric)
}
