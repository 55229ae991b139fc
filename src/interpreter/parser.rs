use crate::{
    error::ParseError,
    term::Term,
    util::chars::{contains_numeric, is_operator},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Scans `chars` from `start` and builds a group term from what it finds.
///
/// The scan accumulates one operand at a time, character by character. An
/// operator character that is not immediately preceded by another operator
/// finalizes the accumulated operand and opens the next one, so every operand
/// after the first begins with the operator that combines it with its left
/// neighbor. An operator inside a run (`*-5`, `--3`) is appended instead,
/// which is how unary signs end up embedded in the operand text.
///
/// An opening parenthesis recurses: the accumulated text becomes the group's
/// combining operator, unless it already contains numeric characters, in
/// which case the operand is complete and the group is combined with `*`
/// (implicit multiplication). The scan stops at a closing parenthesis without
/// consuming it, or at the end of input.
///
/// # Parameters
/// - `chars`: The whole expression as characters.
/// - `start`: Index at which this scan begins.
///
/// # Returns
/// The group term holding the operands found, and the index at which the
/// scan stopped (the index of the terminating `)`, or `chars.len()`).
///
/// # Errors
/// - `UnterminatedGroup` if a `(` is opened and the input ends before the
///   matching `)`.
pub fn parse(chars: &[char], start: usize) -> ParseResult<(Term, usize)> {
    let mut subterms = Vec::new();
    let mut pending = Term::default();
    let mut last_ch = None;

    let mut i = start;
    while i < chars.len() {
        let ch = chars[i];

        match ch {
            '(' => {
                let mut operator = std::mem::take(&mut pending.text);

                if contains_numeric(&operator) {
                    // The accumulated text is a complete number: implicit
                    // multiplication with the group that follows.
                    pending.text = operator;
                    flush(&mut subterms, &mut pending);
                    operator = String::from("*");
                }

                let (group, end) = parse(chars, i + 1)?;

                if end == chars.len() {
                    return Err(ParseError::UnterminatedGroup { position: i });
                }

                pending = group;
                pending.text.insert_str(0, &operator);
                flush(&mut subterms, &mut pending);

                // Resume on the inner scan's `)`; the bottom of the loop
                // steps past it.
                i = end;
            },

            ')' => break,

            _ => {
                if is_operator(ch) && !last_ch.is_some_and(is_operator) {
                    flush(&mut subterms, &mut pending);
                }

                pending.text.push(ch);
            },
        }

        last_ch = Some(ch);
        i += 1;
    }

    flush(&mut subterms, &mut pending);

    Ok((Term { subterms,
               ..Term::default() },
        i))
}

/// Moves `pending` into `subterms` if it accumulated anything, and resets it.
fn flush(subterms: &mut Vec<Term>, pending: &mut Term) {
    if !pending.text.is_empty() || !pending.subterms.is_empty() {
        subterms.push(std::mem::take(pending));
    }
}
