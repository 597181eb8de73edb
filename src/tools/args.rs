//! Argument extraction and conversion for tool invocations
//!
//! Arguments arrive as a JSON object of scalars. Strings pass through (any
//! other scalar is rendered to its string content); integers accept a JSON
//! number or a numeric string; booleans accept a JSON boolean or the
//! literal strings "true"/"false". A required argument that is missing, or
//! any present value that fails to convert, aborts the invocation before a
//! remote call is made.

use serde_json::Value;
use thiserror::Error;

/// Invocation-argument failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    #[error("missing required argument: {0}")]
    Missing(&'static str),

    #[error("argument {name} must be an integer, got {value}")]
    NotAnInteger { name: &'static str, value: String },

    #[error("argument {name} must be a boolean, got {value}")]
    NotABoolean { name: &'static str, value: String },

    #[error("argument {name} must be a scalar value")]
    NotAScalar { name: &'static str },
}

/// String content of a scalar, the way a JSON primitive renders itself
fn scalar_content(name: &'static str, value: &Value) -> Result<String, ArgError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(ArgError::NotAScalar { name }),
    }
}

/// Required string argument
pub fn require_str(input: &Value, name: &'static str) -> Result<String, ArgError> {
    match input.get(name) {
        Some(Value::Null) | None => Err(ArgError::Missing(name)),
        Some(value) => scalar_content(name, value),
    }
}

/// Optional string argument; absent or null means absent
pub fn optional_str(input: &Value, name: &'static str) -> Result<Option<String>, ArgError> {
    match input.get(name) {
        Some(Value::Null) | None => Ok(None),
        Some(value) => scalar_content(name, value).map(Some),
    }
}

fn parse_integer(name: &'static str, value: &Value) -> Result<i32, ArgError> {
    let not_an_integer = || ArgError::NotAnInteger {
        name,
        value: value.to_string(),
    };

    match value {
        Value::Number(n) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(not_an_integer),
        Value::String(s) => s.trim().parse::<i32>().map_err(|_| not_an_integer()),
        _ => Err(not_an_integer()),
    }
}

/// Required integer argument (JSON number or numeric string)
pub fn require_i32(input: &Value, name: &'static str) -> Result<i32, ArgError> {
    match input.get(name) {
        Some(Value::Null) | None => Err(ArgError::Missing(name)),
        Some(value) => parse_integer(name, value),
    }
}

/// Optional integer argument; a present but unparsable value is an error
pub fn optional_i32(input: &Value, name: &'static str) -> Result<Option<i32>, ArgError> {
    match input.get(name) {
        Some(Value::Null) | None => Ok(None),
        Some(value) => parse_integer(name, value).map(Some),
    }
}

fn parse_boolean(name: &'static str, value: &Value) -> Result<bool, ArgError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s == "true" => Ok(true),
        Value::String(s) if s == "false" => Ok(false),
        _ => Err(ArgError::NotABoolean {
            name,
            value: value.to_string(),
        }),
    }
}

/// Optional boolean argument (JSON bool or the literals "true"/"false")
pub fn optional_bool(input: &Value, name: &'static str) -> Result<Option<bool>, ArgError> {
    match input.get(name) {
        Some(Value::Null) | None => Ok(None),
        Some(value) => parse_boolean(name, value).map(Some),
    }
}
