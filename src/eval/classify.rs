use crate::error::EvalError;
use crate::eval::Variables;
use crate::functions::Function;

/// What an identifier stands for once the variables are known.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Symbol {
    Value(f64),
    Function(Function),
}

/// Parses a run as a numeric literal.
///
/// Only runs starting with a digit or `.` qualify, so words such as `inf`
/// or `nan` stay identifiers.
pub fn parse_number(run: &str) -> Option<f64> {
    match run.chars().next() {
        Some(c) if c.is_ascii_digit() || c == '.' => run.parse::<f64>().ok(),
        _ => None,
    }
}

/// Resolves an identifier: a bound variable wins over a function name.
pub fn resolve(name: &str, variables: &Variables) -> Result<Symbol, EvalError> {
    if let Some(value) = variables.get(name) {
        return Ok(Symbol::Value(*value));
    }
    Function::from_name(name)
        .map(Symbol::Function)
        .ok_or_else(|| EvalError::UnknownSymbol(name.to_string()))
}
