use crate::error::EvalError;
use std::collections::HashSet;
use std::fmt;

/// The built-in unary functions. The set is closed: these names are
/// reserved and can never be used as variables.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Sqrt,
    Log,
    Exp,
    Abs,
}

impl Function {
    pub const ALL: [Function; 6] = [
        Function::Sin,
        Function::Cos,
        Function::Sqrt,
        Function::Log,
        Function::Exp,
        Function::Abs,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Function::Sin),
            "cos" => Some(Function::Cos),
            "sqrt" => Some(Function::Sqrt),
            "log" => Some(Function::Log),
            "exp" => Some(Function::Exp),
            "abs" => Some(Function::Abs),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Sqrt => "sqrt",
            Function::Log => "log",
            Function::Exp => "exp",
            Function::Abs => "abs",
        }
    }

    /// Applies the function, rejecting arguments outside its real domain.
    /// `log` is the natural logarithm.
    pub fn apply(&self, value: f64) -> Result<f64, EvalError> {
        match self {
            Function::Sin => Ok(value.sin()),
            Function::Cos => Ok(value.cos()),
            Function::Sqrt => {
                if value < 0.0 {
                    Err(self.domain_error(value))
                } else {
                    Ok(value.sqrt())
                }
            }
            Function::Log => {
                if value <= 0.0 {
                    Err(self.domain_error(value))
                } else {
                    Ok(value.ln())
                }
            }
            Function::Exp => Ok(value.exp()),
            Function::Abs => Ok(value.abs()),
        }
    }

    fn domain_error(&self, value: f64) -> EvalError {
        EvalError::DomainError {
            function: *self,
            value,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Names the variable scanner must skip.
pub fn reserved_names() -> HashSet<&'static str> {
    Function::ALL.iter().map(Function::name).collect()
}
