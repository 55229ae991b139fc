/// The parser module builds a term tree from expression text.
///
/// The parser scans the raw character sequence in a single left-to-right
/// pass, splitting it into signed operands at operator boundaries and
/// recursing on parentheses. It performs no numeric validation; operand
/// content is checked later, when the evaluator resolves each leaf.
///
/// # Responsibilities
/// - Splits the input into signed operand leaves and parenthesized groups.
/// - Attaches each operand's combining operator as its leading character.
/// - Detects implicit multiplication (`2(3)`) and mismatched parentheses.
pub mod parser;
/// The evaluator module collapses a term tree into a single value.
///
/// The evaluator mutates the tree in place: within each group it repeatedly
/// replaces an adjacent pair of siblings with one synthesized, already
/// evaluated leaf, running one full pass per precedence class. When a single
/// sibling remains, its value becomes the group's value.
///
/// # Responsibilities
/// - Resolves leaves by sign normalization and floating-point parsing.
/// - Applies the three precedence passes (exponent, multiplicative,
///   additive), left-associatively within each class.
/// - Reports evaluation errors such as unparsable literals and modulo by
///   zero.
pub mod evaluator;
