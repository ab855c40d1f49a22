pub mod error;
pub mod eval;
pub mod functions;
pub mod scanner;
pub mod session;

pub use error::{EvalError, Malformation};
pub use eval::{Evaluator, Variables};
pub use scanner::{find_variables, scan_variables};
pub use session::{Prompt, Session, SessionError, VariableResolver};

/// Evaluates `expression` against `variables`.
///
/// Every variable the expression uses must already be bound; see
/// [`find_variables`] and [`Session`] for collecting them first.
pub fn evaluate(expression: &str, variables: &Variables) -> Result<f64, EvalError> {
    Evaluator::new(variables).evaluate(expression)
}
