/// Parsing errors.
///
/// Defines the error types that can occur while scanning an expression into a
/// term tree. Parsing is deliberately permissive about operand content (bad
/// literals surface later, at evaluation time), so the only structural errors
/// are mismatched parentheses.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the error types that can be raised while collapsing a term tree
/// into a value, such as numeric literals that fail to parse and modulo by
/// zero.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
