use crate::eval::Operator;
use crate::functions::Function;
use thiserror::Error;

/// Everything that can go wrong while evaluating a single expression.
///
/// All variants are deterministic functions of the input, so none of them
/// is worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("unknown variable or function: {0}")]
    UnknownSymbol(String),

    #[error("division by zero in '{0}'")]
    DivisionByZero(Operator),

    #[error("{function} is undefined for {value}")]
    DomainError { function: Function, value: f64 },

    #[error("malformed expression: {0}")]
    MalformedExpression(Malformation),
}

/// Structural reasons an expression could not be reduced to one value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Malformation {
    #[error("nothing to evaluate")]
    Empty,

    #[error("operator '{0}' is missing an operand")]
    MissingOperand(Operator),

    #[error("{0}() has no argument")]
    MissingArgument(Function),

    #[error("{0} must be followed by a parenthesized argument")]
    DanglingFunction(Function),

    #[error("unmatched '('")]
    UnmatchedOpenParen,

    #[error("unmatched ')'")]
    UnmatchedCloseParen,

    #[error("{operands} values are not joined by an operator")]
    MissingOperator { operands: usize },

    #[error("{0}")]
    Unlexable(String),
}

impl From<Malformation> for EvalError {
    fn from(malformation: Malformation) -> Self {
        EvalError::MalformedExpression(malformation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_culprit() {
        assert_eq!(
            EvalError::UnknownSymbol("foo".to_string()).to_string(),
            "unknown variable or function: foo"
        );
        assert_eq!(
            EvalError::DivisionByZero(Operator::Modulo).to_string(),
            "division by zero in '%'"
        );
        assert_eq!(
            EvalError::DomainError {
                function: Function::Log,
                value: -2.0
            }
            .to_string(),
            "log is undefined for -2"
        );
        assert_eq!(
            EvalError::from(Malformation::MissingOperand(Operator::Subtract)).to_string(),
            "malformed expression: operator '-' is missing an operand"
        );
    }
}
