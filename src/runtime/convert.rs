//! Type conversion
//!
//! This module provides the conversions the demonstrations exercise:
//!
//! - Implicit numeric widening: mixing an int with a float widens the int,
//!   so the result is a float ([`widen_pair`])
//! - Explicit conversions: [`to_int`], [`to_float`], [`to_str`],
//!   [`list_to_set`]
//! - Input parsing: [`parse_int`] and [`parse_float`] turn interactive text
//!   into values, failing with [`DemoError::MalformedInput`]
//!
//! # Conversion Rules
//!
//! - float → int truncates toward zero
//! - bool → int maps to 0 or 1
//! - text → number trims surrounding whitespace, then parses; anything else
//!   is malformed input and ends the demonstration

use super::value::Value;
use crate::errors::DemoError;

/// Widen a pair of numbers so both have the same kind.
/// If either side is a float, both come back as floats.
pub fn widen_pair(a: &Value, b: &Value) -> Result<(Value, Value), DemoError> {
    match (a, b) {
        (Value::Int(_), Value::Int(_)) => Ok((a.clone(), b.clone())),
        (Value::Float(_), Value::Float(_)) => Ok((a.clone(), b.clone())),
        (Value::Int(n), Value::Float(_)) => Ok((Value::Float(*n as f64), b.clone())),
        (Value::Float(_), Value::Int(n)) => Ok((a.clone(), Value::Float(*n as f64))),
        _ => Err(DemoError::TypeMismatch {
            expected: "two numbers".to_string(),
            got: format!("{} and {}", a.type_name(), b.type_name()),
        }),
    }
}

/// Add two numeric values, widening implicitly
pub fn add(a: &Value, b: &Value) -> Result<Value, DemoError> {
    match widen_pair(a, b)? {
        (Value::Int(x), Value::Int(y)) => Ok(Value::Int(x + y)),
        (Value::Float(x), Value::Float(y)) => Ok(Value::Float(x + y)),
        _ => unreachable!("widen_pair returns matching kinds"),
    }
}

/// Convert a value to an int
pub fn to_int(value: &Value) -> Result<Value, DemoError> {
    match value {
        Value::Int(_) => Ok(value.clone()),
        Value::Float(x) => Ok(Value::Int(x.trunc() as i64)),
        Value::Bool(b) => Ok(Value::Int(i64::from(*b))),
        Value::Str(s) => parse_int(s),
        _ => Err(DemoError::TypeMismatch {
            expected: "a scalar convertible to int".to_string(),
            got: value.type_name().to_string(),
        }),
    }
}

/// Convert a value to a float
pub fn to_float(value: &Value) -> Result<Value, DemoError> {
    match value {
        Value::Float(_) => Ok(value.clone()),
        Value::Int(n) => Ok(Value::Float(*n as f64)),
        Value::Bool(b) => Ok(Value::Float(f64::from(u8::from(*b)))),
        Value::Str(s) => parse_float(s),
        _ => Err(DemoError::TypeMismatch {
            expected: "a scalar convertible to float".to_string(),
            got: value.type_name().to_string(),
        }),
    }
}

/// Convert any value to its text form
pub fn to_str(value: &Value) -> Value {
    Value::Str(value.to_string())
}

/// Convert a list of ints into a set, collapsing duplicates
pub fn list_to_set(value: &Value) -> Result<Value, DemoError> {
    match value {
        Value::List(items) => {
            let mut ints = Vec::new();
            for item in items.borrow().iter() {
                ints.push(item.expect_int()?);
            }
            Ok(Value::set(ints))
        }
        _ => Err(DemoError::TypeMismatch {
            expected: "list".to_string(),
            got: value.type_name().to_string(),
        }),
    }
}

/// Parse interactive text as an int value
pub fn parse_int(text: &str) -> Result<Value, DemoError> {
    text.trim()
        .parse::<i64>()
        .map(Value::Int)
        .map_err(|_| DemoError::MalformedInput {
            expected: "an integer",
            text: text.trim().to_string(),
        })
}

/// Parse interactive text as a float value
pub fn parse_float(text: &str) -> Result<Value, DemoError> {
    text.trim()
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|_| DemoError::MalformedInput {
            expected: "a number",
            text: text.trim().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_arithmetic_widens_to_float() {
        let result = add(&Value::Int(5), &Value::Float(2.5)).unwrap();
        assert_eq!(result, Value::Float(7.5));
        assert_eq!(result.type_name(), "float");
    }

    #[test]
    fn float_to_int_truncates() {
        assert_eq!(to_int(&Value::Float(9.99)).unwrap(), Value::Int(9));
        assert_eq!(to_int(&Value::Float(-2.7)).unwrap(), Value::Int(-2));
    }

    #[test]
    fn text_conversions() {
        assert_eq!(to_int(&Value::text("123")).unwrap(), Value::Int(123));
        assert_eq!(to_str(&Value::Int(456)), Value::text("456"));
        assert_eq!(to_float(&Value::Int(10)).unwrap(), Value::Float(10.0));
    }

    #[test]
    fn malformed_text_is_rejected() {
        let err = parse_int("twelve").unwrap_err();
        assert!(matches!(err, DemoError::MalformedInput { .. }));
        assert!(parse_float("abc").is_err());
    }

    #[test]
    fn list_collapses_into_set() {
        let list = Value::list(vec![
            Value::Int(1),
            Value::Int(2),
            Value::Int(2),
            Value::Int(3),
            Value::Int(4),
        ]);
        assert_eq!(list_to_set(&list).unwrap().to_string(), "{1, 2, 3, 4}");
    }
}
