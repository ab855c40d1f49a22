use crate::error::EvalError;
use std::collections::HashMap;
use std::fmt;

mod classify;
mod evaluator;
mod lexer;

pub use classify::{parse_number, resolve, Symbol};
pub use evaluator::Evaluator;
pub use lexer::{ExpressionLexer, Lexeme};

/// Variable bindings, keyed by case-sensitive name.
pub type Variables = HashMap<String, f64>;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Identifier(String),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl Token {
    /// Classifies a maximal run as a numeric literal or an identifier.
    /// Resolving the identifier happens later, against the variables.
    pub fn from_run(run: &str) -> Self {
        match parse_number(run) {
            Some(value) => Token::Number(value),
            None => Token::Identifier(run.to_string()),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Operator {
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide | Operator::Modulo => 2,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Modulo => '%',
        }
    }

    pub fn apply(&self, left: f64, right: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide | Operator::Modulo if right == 0.0 => {
                Err(EvalError::DivisionByZero(*self))
            }
            Operator::Divide => Ok(left / right),
            Operator::Modulo => Ok(left % right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
