use crate::eval::{ExpressionLexer, Lexeme, Token};
use crate::functions::reserved_names;
use log::{debug, warn};
use std::collections::HashSet;

/// Collects the variable names an expression refers to.
///
/// Every maximal run of letters, digits and `_` that begins with a letter or
/// `_` is reported unless it is in `reserved`; `a.b` names both `a` and `b`.
/// Numeric literals, operators and characters the lexer does not know are
/// skipped, so this never fails.
pub fn scan_variables(expression: &str, reserved: &HashSet<&str>) -> HashSet<String> {
    // The grammar ends in a catch-all `stray` rule, so lexing is total.
    let lexemes = match ExpressionLexer::lex(expression) {
        Ok(lexemes) => lexemes,
        Err(e) => {
            warn!("Cannot scan {:?} for variables: {}", expression, e);
            return HashSet::new();
        }
    };

    let names: HashSet<String> = lexemes
        .iter()
        .filter_map(|lexeme| match lexeme {
            Lexeme::Token(Token::Identifier(run)) => Some(run.split('.')),
            _ => None,
        })
        .flatten()
        .filter(|name| starts_identifier(name) && !reserved.contains(name))
        .map(str::to_string)
        .collect();

    debug!("Variables in {:?}: {:?}", expression, names);
    names
}

/// [`scan_variables`] with the built-in function names reserved.
pub fn find_variables(expression: &str) -> HashSet<String> {
    scan_variables(expression, &reserved_names())
}

fn starts_identifier(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
}
