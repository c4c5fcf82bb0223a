#![allow(dead_code)] // Complete API module, not all methods currently used
//! Runtime value representation
//!
//! This module defines the [`Value`] enum, the dynamically-typed values the
//! demonstrations bind, rebind, and print. A name can hold a value of any kind
//! and can later be rebound to a different kind entirely.
//!
//! # Value Kinds
//!
//! - [`Value::Int`]: 64-bit signed integer
//! - [`Value::Float`]: 64-bit floating point
//! - [`Value::Bool`]: boolean
//! - [`Value::Str`]: owned UTF-8 text
//! - [`Value::List`]: shared ordered sequence
//! - [`Value::Map`]: shared key-to-value mapping
//! - [`Value::Set`]: shared set of unique integers
//!
//! # Sharing
//!
//! Composite values are held behind `Rc<RefCell<_>>`. Cloning a composite
//! clones the handle, so a second binding aliases the same contents.
//! [`Value::is_alias_of`] tests handle identity, which is distinct from `==`
//! (structural equality over contents).

use crate::errors::DemoError;
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

/// Runtime values in the demonstrations
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    List(Rc<RefCell<Vec<Value>>>),
    Map(Rc<RefCell<FxHashMap<String, Value>>>),
    Set(Rc<RefCell<BTreeSet<i64>>>),
}

impl Value {
    /// Create a text value
    pub fn text(s: &str) -> Value {
        Value::Str(s.to_string())
    }

    /// Create a shared list value
    pub fn list(items: Vec<Value>) -> Value {
        Value::List(Rc::new(RefCell::new(items)))
    }

    /// Create a shared map value
    pub fn map<I>(entries: I) -> Value
    where
        I: IntoIterator<Item = (&'static str, Value)>,
    {
        let mut inner = FxHashMap::default();
        for (key, value) in entries {
            inner.insert(key.to_string(), value);
        }
        Value::Map(Rc::new(RefCell::new(inner)))
    }

    /// Create a shared set value (duplicates collapse)
    pub fn set<I>(items: I) -> Value
    where
        I: IntoIterator<Item = i64>,
    {
        Value::Set(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    /// The kind of this value, as printed in the demonstrations
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Set(_) => "set",
        }
    }

    /// Convert to a boolean for conditionals: zero and empty are false
    pub fn truthy(&self) -> bool {
        match self {
            Value::Int(n) => *n != 0,
            Value::Float(x) => *x != 0.0,
            Value::Bool(b) => *b,
            Value::Str(s) => !s.is_empty(),
            Value::List(items) => !items.borrow().is_empty(),
            Value::Map(entries) => !entries.borrow().is_empty(),
            Value::Set(items) => !items.borrow().is_empty(),
        }
    }

    /// Get the integer value, returns None if not an Int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the float value, returns None if not a Float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Expect an integer value
    pub fn expect_int(&self) -> Result<i64, DemoError> {
        self.as_int().ok_or_else(|| DemoError::TypeMismatch {
            expected: "int".to_string(),
            got: self.type_name().to_string(),
        })
    }

    /// Check whether two values are the same shared composite (handle
    /// identity, not structural equality)
    pub fn is_alias_of(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::List(a), Value::List(b)) => Rc::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b),
            (Value::Set(a), Value::Set(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Index into a list, cloning the element out
    pub fn index(&self, i: usize) -> Result<Value, DemoError> {
        match self {
            Value::List(items) => {
                items
                    .borrow()
                    .get(i)
                    .cloned()
                    .ok_or_else(|| DemoError::TypeMismatch {
                        expected: format!("an index below {}", items.borrow().len()),
                        got: i.to_string(),
                    })
            }
            _ => Err(DemoError::TypeMismatch {
                expected: "list".to_string(),
                got: self.type_name().to_string(),
            }),
        }
    }

    /// Look up a map key, cloning the entry out
    pub fn get(&self, key: &str) -> Result<Value, DemoError> {
        match self {
            Value::Map(entries) => {
                entries
                    .borrow()
                    .get(key)
                    .cloned()
                    .ok_or_else(|| DemoError::UnboundName {
                        name: key.to_string(),
                    })
            }
            _ => Err(DemoError::TypeMismatch {
                expected: "map".to_string(),
                got: self.type_name().to_string(),
            }),
        }
    }

    /// Membership test for lists of text (the membership-operator block)
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            Value::List(items) => items
                .borrow()
                .iter()
                .any(|v| matches!(v, Value::Str(s) if s == needle)),
            _ => false,
        }
    }

    /// Map entries in sorted key order, for deterministic iteration
    pub fn map_entries(&self) -> Vec<(String, Value)> {
        match self {
            Value::Map(entries) => {
                let mut pairs: Vec<(String, Value)> = entries
                    .borrow()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                pairs.sort_by(|a, b| a.0.cmp(&b.0));
                pairs
            }
            _ => Vec::new(),
        }
    }
}

/// Format a float the way the demonstrations print one: integral values keep
/// a trailing `.0` so the kind stays visible
pub fn format_float(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{:.1}", x)
    } else {
        format!("{}", x)
    }
}

/// Render a value the way it appears inside a composite: text is quoted
fn fmt_element(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Str(s) => write!(f, "\"{}\"", s),
        other => write!(f, "{}", other),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", format_float(*x)),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    fmt_element(item, f)?;
                }
                write!(f, "]")
            }
            Value::Map(_) => {
                // Sorted key order keeps re-runs byte-identical
                write!(f, "{{")?;
                for (i, (key, value)) in self.map_entries().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\": ", key)?;
                    fmt_element(value, f)?;
                }
                write!(f, "}}")
            }
            Value::Set(items) => {
                write!(f, "{{")?;
                for (i, item) in items.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_deterministic() {
        let map = Value::map([("y", Value::Int(2)), ("x", Value::Int(1))]);
        assert_eq!(map.to_string(), "{\"x\": 1, \"y\": 2}");

        let set = Value::set([4, 1, 2, 2, 3]);
        assert_eq!(set.to_string(), "{1, 2, 3, 4}");

        let list = Value::list(vec![Value::text("red"), Value::Int(7)]);
        assert_eq!(list.to_string(), "[\"red\", 7]");
    }

    #[test]
    fn floats_keep_their_point() {
        assert_eq!(format_float(1000.0), "1000.0");
        assert_eq!(format_float(0.025), "0.025");
        assert_eq!(format_float(7.5), "7.5");
    }

    #[test]
    fn alias_identity_differs_from_equality() {
        let list1 = Value::list(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        let list2 = list1.clone();
        let list3 = Value::list(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);

        assert!(list1.is_alias_of(&list2));
        assert!(!list1.is_alias_of(&list3));
        assert_eq!(list1, list3);
    }

    #[test]
    fn truthiness_of_scalars_and_composites() {
        assert!(Value::Int(5).truthy());
        assert!(!Value::Int(0).truthy());
        assert!(!Value::text("").truthy());
        assert!(Value::list(vec![Value::Int(1)]).truthy());
        assert!(!Value::map([]).truthy());
    }
}
