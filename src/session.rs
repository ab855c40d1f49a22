use crate::error::EvalError;
use crate::eval::{Evaluator, Variables};
use crate::scanner::find_variables;
use log::debug;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("no value given for {name}")]
    MissingValue { name: String },

    #[error("'{input}' is not a valid value for {name}")]
    InvalidValue { name: String, input: String },
}

/// Supplies values for variables the session has not seen yet.
pub trait VariableResolver {
    fn resolve(&mut self, name: &str) -> Result<f64, SessionError>;
}

impl<F> VariableResolver for F
where
    F: FnMut(&str) -> Result<f64, SessionError>,
{
    fn resolve(&mut self, name: &str) -> Result<f64, SessionError> {
        self(name)
    }
}

/// A calculator session. Variables bound here live until the session is
/// dropped, so each one is resolved at most once.
#[derive(Debug, Default)]
pub struct Session {
    variables: Variables,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variables(variables: Variables) -> Self {
        Self { variables }
    }

    pub fn bind(&mut self, name: impl Into<String>, value: f64) {
        self.variables.insert(name.into(), value);
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Names used by `expression` that have no value yet, sorted.
    pub fn unresolved(&self, expression: &str) -> Vec<String> {
        let mut names: Vec<String> = find_variables(expression)
            .into_iter()
            .filter(|name| !self.variables.contains_key(name))
            .collect();
        names.sort();
        names
    }

    /// Resolves any missing variables through `resolver`, then evaluates.
    pub fn evaluate<R>(&mut self, expression: &str, resolver: &mut R) -> Result<f64, SessionError>
    where
        R: VariableResolver + ?Sized,
    {
        for name in self.unresolved(expression) {
            let value = resolver.resolve(&name)?;
            debug!("Bound {} = {}", name, value);
            self.variables.insert(name, value);
        }

        let result = Evaluator::new(&self.variables).evaluate(expression)?;
        Ok(result)
    }
}

/// Line-oriented prompt, used by the binary to read expressions and to ask
/// for variable values.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `message` and reads one line. Returns `None` at end of input.
    pub fn read_line(&mut self, message: &str) -> Result<Option<String>, SessionError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> VariableResolver for Prompt<R, W> {
    fn resolve(&mut self, name: &str) -> Result<f64, SessionError> {
        let line = self
            .read_line(&format!("Enter a value for {}: ", name))?
            .ok_or_else(|| SessionError::MissingValue {
                name: name.to_string(),
            })?;

        let input = line.trim();
        input.parse::<f64>().map_err(|_| SessionError::InvalidValue {
            name: name.to_string(),
            input: input.to_string(),
        })
    }
}
