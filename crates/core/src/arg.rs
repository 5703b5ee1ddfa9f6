//! Loosely-typed arguments.
//!
//! The typed constructors make non-text names impossible. Callers that carry
//! values of unknown shape (scripts, fixtures, user input already split into
//! fields) go through [`Arg`] instead, which reports a wrong text field as
//! [`DomainError::Type`] and a bad number as [`DomainError::Value`].

use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Text(String),
    Int(i64),
    Real(f64),
}

impl Arg {
    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Arg::Text(_) => "text",
            Arg::Int(_) => "integer",
            Arg::Real(_) => "real",
        }
    }

    /// Take the text out, or fail with a type error carrying `msg`.
    pub fn into_text(self, msg: &str) -> DomainResult<String> {
        match self {
            Arg::Text(s) => Ok(s),
            other => Err(DomainError::type_mismatch(format!("{msg} (got {})", other.kind()))),
        }
    }

    /// A strictly positive integer that fits in `u32`.
    pub fn positive_int(&self, msg: &str) -> DomainResult<u32> {
        match self {
            Arg::Int(n) if *n > 0 => u32::try_from(*n).map_err(|_| DomainError::value(msg)),
            _ => Err(DomainError::value(msg)),
        }
    }

    /// A strictly positive, finite number. Integers are widened.
    pub fn positive_real(&self, msg: &str) -> DomainResult<f64> {
        let value = match self {
            Arg::Int(n) => *n as f64,
            Arg::Real(x) => *x,
            Arg::Text(_) => return Err(DomainError::value(msg)),
        };
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(DomainError::value(msg))
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Int(value)
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Arg::Int(value.into())
    }
}

impl From<u32> for Arg {
    fn from(value: u32) -> Self {
        Arg::Int(value.into())
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Real(value)
    }
}
