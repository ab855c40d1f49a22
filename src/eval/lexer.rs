use crate::error::{EvalError, Malformation};
use crate::eval::{Operator, Token};
use log::trace;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "./expression.pest"]
pub struct ExpressionLexer;

/// One lexical unit. `Stray` holds a character that starts no token; the
/// evaluator rejects it, the variable scanner skips it.
#[derive(Debug, Clone, PartialEq)]
pub enum Lexeme<'a> {
    Token(Token),
    Stray(&'a str),
}

impl ExpressionLexer {
    /// Splits `input` into lexemes in a single left-to-right pass. Whitespace
    /// separates runs but is otherwise dropped.
    pub fn lex(input: &str) -> Result<Vec<Lexeme<'_>>, EvalError> {
        trace!("Lexing expression: {}", input);
        let pairs = ExpressionLexer::parse(Rule::tokens, input)
            .map_err(|e| Malformation::Unlexable(e.to_string()))?;

        Ok(pairs
            .flat_map(|tokens| tokens.into_inner())
            .filter(|pair| pair.as_rule() != Rule::EOI)
            .map(Self::build_lexeme)
            .collect())
    }

    fn build_lexeme(pair: Pair<'_, Rule>) -> Lexeme<'_> {
        let token = match pair.as_rule() {
            Rule::run => Token::from_run(pair.as_str()),
            Rule::PLUS => Token::Operator(Operator::Add),
            Rule::MINUS => Token::Operator(Operator::Subtract),
            Rule::STAR => Token::Operator(Operator::Multiply),
            Rule::SLASH => Token::Operator(Operator::Divide),
            Rule::MOD => Token::Operator(Operator::Modulo),
            Rule::LPAREN => Token::LeftParen,
            Rule::RPAREN => Token::RightParen,
            // `stray` is the only other rule inside `tokens`.
            _ => return Lexeme::Stray(pair.as_str()),
        };
        trace!("Lexeme: {:?}", token);
        Lexeme::Token(token)
    }
}
