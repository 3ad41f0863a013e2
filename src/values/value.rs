use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

use crate::registry::aliases::{BOOLEAN, DOUBLE, INTEGER, STRING};

lazy_static! {
    static ref INTEGER_LITERAL: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
    static ref DOUBLE_LITERAL: Regex =
        Regex::new(r"^[+-]?([0-9]+\.[0-9]*|\.[0-9]+|[0-9]+(\.[0-9]*)?[eE][+-]?[0-9]+)$").unwrap();
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Double(f64),
    Integer(i64),
    Boolean(bool),
    Null,
    Array(Vec<Value>),
    /// An object instance, carrying its class name.
    Object(String),
}

impl Value {
    /// The runtime type name. Scalars report their canonical type name.
    pub fn runtime_type(&self) -> &'static str {
        match self {
            Value::String(_) => STRING,
            Value::Double(_) => DOUBLE,
            Value::Integer(_) => INTEGER,
            Value::Boolean(_) => BOOLEAN,
            Value::Null => "NULL",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::String(_) | Value::Double(_) | Value::Integer(_) | Value::Boolean(_)
        )
    }

    /// Reads a command line literal into a value.
    ///
    /// Quoted text is always a string, so `'42'` stays a string while `42`
    /// becomes an integer.
    pub fn parse_literal(literal: &str) -> Value {
        let trimmed = literal.trim();

        if trimmed.len() >= 2 {
            let first = trimmed.as_bytes()[0];
            let last = trimmed.as_bytes()[trimmed.len() - 1];
            if (first == b'"' || first == b'\'') && first == last {
                return Value::String(trimmed[1..trimmed.len() - 1].to_string());
            }
        }

        match trimmed {
            "true" => return Value::Boolean(true),
            "false" => return Value::Boolean(false),
            "null" => return Value::Null,
            _ => {}
        }

        if INTEGER_LITERAL.is_match(trimmed) {
            if let Ok(number) = trimmed.parse::<i64>() {
                return Value::Integer(number);
            }
        }

        if DOUBLE_LITERAL.is_match(trimmed) {
            if let Ok(number) = trimmed.parse::<f64>() {
                return Value::Double(number);
            }
        }

        Value::String(literal.to_string())
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(string) => write!(f, "\"{}\"", string),
            Value::Double(number) => write!(f, "{:?}", number),
            Value::Integer(number) => write!(f, "{}", number),
            Value::Boolean(boolean) => write!(f, "{}", boolean),
            Value::Null => write!(f, "null"),
            Value::Array(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
            Value::Object(class) => write!(f, "{} {{}}", class),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Double(value as f64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}
