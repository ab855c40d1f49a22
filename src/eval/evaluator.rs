use crate::error::{EvalError, Malformation};
use crate::eval::{resolve, ExpressionLexer, Lexeme, Operator, Symbol, Token, Variables};
use crate::functions::Function;
use log::trace;

/// Entries waiting on the operator stack.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Pending {
    Operator(Operator),
    LeftParen,
    Function(Function),
}

/// Two-stack evaluator. Borrows the variables for the duration of a call and
/// keeps no state between calls.
pub struct Evaluator<'v> {
    variables: &'v Variables,
}

impl<'v> Evaluator<'v> {
    pub fn new(variables: &'v Variables) -> Self {
        Self { variables }
    }

    /// Evaluates `expression` to a single number.
    ///
    /// Whitespace is stripped first, so `s q r t (4)` reads as `sqrt(4)`.
    /// Operators are applied as soon as precedence or a closing parenthesis
    /// allows; a function is applied when its argument's `)` is consumed.
    pub fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        let stripped: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
        let mut stacks = Stacks::default();

        for lexeme in ExpressionLexer::lex(&stripped)? {
            match lexeme {
                Lexeme::Token(token) => self.feed(&mut stacks, token)?,
                Lexeme::Stray(text) => return Err(EvalError::UnknownSymbol(text.to_string())),
            }
        }

        stacks.finish()
    }

    fn feed(&self, stacks: &mut Stacks, token: Token) -> Result<(), EvalError> {
        let opens_group = token == Token::LeftParen;
        match token {
            Token::Number(value) => stacks.operands.push(value),
            Token::Identifier(name) => match resolve(&name, self.variables)? {
                Symbol::Value(value) => stacks.operands.push(value),
                Symbol::Function(function) => stacks.operators.push(Pending::Function(function)),
            },
            Token::LeftParen => stacks.operators.push(Pending::LeftParen),
            Token::RightParen => stacks.close_group()?,
            Token::Operator(op) => stacks.push_operator(op)?,
        }
        stacks.after_open_paren = opens_group;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Stacks {
    operands: Vec<f64>,
    operators: Vec<Pending>,
    after_open_paren: bool,
}

impl Stacks {
    fn push_operator(&mut self, incoming: Operator) -> Result<(), EvalError> {
        // A sign right after '(' works on an implicit zero: `(-x)` is `(0-x)`.
        if self.after_open_paren && incoming.precedence() == Operator::Add.precedence() {
            self.operands.push(0.0);
        }

        while let Some(&top) = self.operators.last() {
            match top {
                Pending::Operator(op) if op.precedence() >= incoming.precedence() => {
                    self.operators.pop();
                    self.apply_operator(op)?;
                }
                Pending::Function(function) => {
                    return Err(Malformation::DanglingFunction(function).into())
                }
                _ => break,
            }
        }

        self.operators.push(Pending::Operator(incoming));
        Ok(())
    }

    fn close_group(&mut self) -> Result<(), EvalError> {
        loop {
            match self.operators.pop() {
                Some(Pending::Operator(op)) => self.apply_operator(op)?,
                Some(Pending::LeftParen) => break,
                Some(Pending::Function(function)) => {
                    return Err(Malformation::DanglingFunction(function).into())
                }
                None => return Err(Malformation::UnmatchedCloseParen.into()),
            }
        }

        if let Some(&Pending::Function(function)) = self.operators.last() {
            self.operators.pop();
            self.apply_function(function)?;
        }
        Ok(())
    }

    fn apply_operator(&mut self, op: Operator) -> Result<(), EvalError> {
        let missing = || EvalError::from(Malformation::MissingOperand(op));
        let (right, left) = (
            self.operands.pop().ok_or_else(missing)?,
            self.operands.pop().ok_or_else(missing)?,
        );
        let result = op.apply(left, right)?;
        trace!("{} {} {} = {}", left, op, right, result);
        self.operands.push(result);
        Ok(())
    }

    fn apply_function(&mut self, function: Function) -> Result<(), EvalError> {
        let argument = self
            .operands
            .pop()
            .ok_or(Malformation::MissingArgument(function))?;
        let result = function.apply(argument)?;
        trace!("{}({}) = {}", function, argument, result);
        self.operands.push(result);
        Ok(())
    }

    fn finish(mut self) -> Result<f64, EvalError> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(op) => self.apply_operator(op)?,
                Pending::LeftParen => return Err(Malformation::UnmatchedOpenParen.into()),
                Pending::Function(function) => {
                    return Err(Malformation::DanglingFunction(function).into())
                }
            }
        }

        match self.operands.as_slice() {
            [result] => Ok(*result),
            [] => Err(Malformation::Empty.into()),
            operands => Err(Malformation::MissingOperator {
                operands: operands.len(),
            }
            .into()),
        }
    }
}
