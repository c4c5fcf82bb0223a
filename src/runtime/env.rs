#![allow(dead_code)] // Complete API module, not all methods currently used
//! Name-binding environment
//!
//! This module provides [`Env`], the table of named bindings the
//! demonstrations work against:
//! - binding and rebinding names (a rebind may change the value's kind)
//! - unbinding, after which the name resolves to nothing until redefined
//! - nested scopes with shadowing, for the global-versus-local block
//!
//! # Declaration Order
//!
//! Bindings remember the order they first appeared in, so dumping the
//! environment prints names in the order the reader saw them bound.

use super::value::Value;
use crate::errors::DemoError;
use rustc_hash::FxHashMap;

/// Words that cannot be used as binding names
pub const RESERVED_WORDS: &[&str] = &[
    "and", "break", "continue", "def", "del", "else", "false", "for", "if", "in", "not", "or",
    "return", "true", "while",
];

/// Check whether a name is a reserved word
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

#[derive(Debug, Clone, Default)]
struct ScopeData {
    shadowed: Vec<(String, Value)>,
    declared: Vec<String>,
}

/// A table of name-to-value bindings with declaration order and scopes
#[derive(Debug, Clone, Default)]
pub struct Env {
    bindings: FxHashMap<String, Value>,
    insertion_order: Vec<String>,
    scope_stack: Vec<ScopeData>,
}

impl Env {
    pub fn new() -> Self {
        Env::default()
    }

    /// Bind a name to a value, creating or rebinding it.
    /// Rejects reserved words; rebinding keeps the original order slot.
    pub fn bind(&mut self, name: &str, value: Value) -> Result<(), DemoError> {
        if is_reserved(name) {
            return Err(DemoError::ReservedName {
                name: name.to_string(),
            });
        }

        if let Some(scope) = self.scope_stack.last_mut() {
            if let Some(old) = self.bindings.insert(name.to_string(), value) {
                // Name existed outside this scope: track the first shadow only,
                // so pop_scope restores the outer value
                if !scope.declared.iter().any(|n| n == name)
                    && !scope.shadowed.iter().any(|(n, _)| n == name)
                {
                    scope.shadowed.push((name.to_string(), old));
                }
            } else {
                scope.declared.push(name.to_string());
                self.insertion_order.push(name.to_string());
            }
        } else {
            if !self.bindings.contains_key(name) {
                self.insertion_order.push(name.to_string());
            }
            self.bindings.insert(name.to_string(), value);
        }

        Ok(())
    }

    /// Resolve a name to its current value
    pub fn lookup(&self, name: &str) -> Result<&Value, DemoError> {
        self.bindings.get(name).ok_or_else(|| DemoError::UnboundName {
            name: name.to_string(),
        })
    }

    /// Remove a name's binding, returning the dropped handle.
    /// A composite the value aliases survives through any other binding.
    pub fn unbind(&mut self, name: &str) -> Result<Value, DemoError> {
        let value = self
            .bindings
            .remove(name)
            .ok_or_else(|| DemoError::UnboundName {
                name: name.to_string(),
            })?;

        if let Some(pos) = self.insertion_order.iter().rposition(|n| n == name) {
            self.insertion_order.remove(pos);
        }
        if let Some(scope) = self.scope_stack.last_mut() {
            if let Some(pos) = scope.declared.iter().rposition(|n| n == name) {
                scope.declared.remove(pos);
            }
        }

        Ok(value)
    }

    /// Check whether a name currently has a binding
    pub fn is_bound(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Enter a new scope
    pub fn push_scope(&mut self) {
        self.scope_stack.push(ScopeData::default());
    }

    /// Exit the current scope, dropping its bindings and restoring shadowed ones
    pub fn pop_scope(&mut self) {
        if let Some(scope) = self.scope_stack.pop() {
            for name in scope.declared {
                self.bindings.remove(&name);
                if let Some(pos) = self.insertion_order.iter().rposition(|n| n == &name) {
                    self.insertion_order.remove(pos);
                }
            }
            for (name, value) in scope.shadowed {
                self.bindings.insert(name, value);
            }
        }
    }

    /// All bindings in declaration order
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.insertion_order
            .iter()
            .filter_map(|name| self.bindings.get(name).map(|v| (name.as_str(), v)))
    }

    /// Number of live bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if no names are bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebinding_replaces_the_value() {
        let mut env = Env::new();
        env.bind("num", Value::Int(10)).unwrap();
        env.bind("num", Value::Int(20)).unwrap();
        assert_eq!(env.lookup("num").unwrap(), &Value::Int(20));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn rebinding_may_change_the_kind() {
        let mut env = Env::new();
        env.bind("a", Value::Int(50)).unwrap();
        env.bind("a", Value::list(vec![Value::Int(1), Value::Int(2)]))
            .unwrap();
        assert_eq!(env.lookup("a").unwrap().type_name(), "list");
    }

    #[test]
    fn unbinding_leaves_aliases_intact() {
        let mut env = Env::new();
        let map = Value::map([("x", Value::Int(1)), ("y", Value::Int(2))]);
        env.bind("c", map.clone()).unwrap();
        env.bind("d", map).unwrap();

        env.unbind("c").unwrap();
        assert!(matches!(
            env.lookup("c"),
            Err(DemoError::UnboundName { .. })
        ));

        let survivor = env.lookup("d").unwrap();
        assert_eq!(survivor.get("x").unwrap(), Value::Int(1));
        assert_eq!(survivor.get("y").unwrap(), Value::Int(2));
        assert_eq!(survivor.to_string(), "{\"x\": 1, \"y\": 2}");
    }

    #[test]
    fn reserved_words_are_rejected() {
        let mut env = Env::new();
        let err = env.bind("return", Value::Int(50)).unwrap_err();
        assert!(matches!(err, DemoError::ReservedName { .. }));
    }

    #[test]
    fn scopes_shadow_and_restore() {
        let mut env = Env::new();
        env.bind("message", Value::text("global")).unwrap();

        env.push_scope();
        env.bind("note", Value::text("local")).unwrap();
        env.bind("message", Value::text("shadowed")).unwrap();
        assert_eq!(env.lookup("note").unwrap().to_string(), "local");
        assert_eq!(env.lookup("message").unwrap().to_string(), "shadowed");
        env.pop_scope();

        assert!(!env.is_bound("note"));
        assert_eq!(env.lookup("message").unwrap().to_string(), "global");
    }

    #[test]
    fn bindings_iterate_in_declaration_order() {
        let mut env = Env::new();
        env.bind("first", Value::Int(1)).unwrap();
        env.bind("second", Value::Int(2)).unwrap();
        env.bind("first", Value::Int(3)).unwrap();

        let names: Vec<&str> = env.bindings().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
