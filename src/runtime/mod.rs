//! Runtime primitives for the demonstrations
//!
//! This module provides the small dynamic building blocks the demos operate on:
//! - [`value`]: tagged runtime values (Int, Float, Bool, Str, List, Map, Set)
//! - [`env`]: name-to-value bindings with declaration order and scopes
//! - [`convert`]: implicit widening and explicit type conversion
//!
//! # Aliasing
//!
//! Composite values ([`value::Value::List`], [`value::Value::Map`],
//! [`value::Value::Set`]) live behind `Rc<RefCell<_>>` handles. Binding one to
//! a second name clones the handle, not the contents, so two names can observe
//! the same value. Unbinding one name drops one handle; the value itself is
//! freed only when the last handle goes away.

pub mod convert;
pub mod env;
pub mod value;
