//! Token categories
//!
//! The five kinds of token a reader meets in source text: identifiers,
//! keywords, operators, delimiters, and literals.

use crate::console::Session;
use crate::errors::DemoError;
use crate::runtime::env::{Env, RESERVED_WORDS};
use crate::runtime::value::Value;

pub fn run(session: &mut Session) -> Result<(), DemoError> {
    let mut env = Env::new();

    session.heading("Identifiers");
    env.bind("variable_name", Value::text("Hello"))?;
    session.line(format!(
        "variable_name is an identifier bound to \"{}\"",
        env.lookup("variable_name")?
    ));
    session.line("my_function would be an identifier too.");
    session.blank();

    session.heading("Keywords");
    session.line("Some reserved words that can never be identifiers:");
    session.line(format!("  {}", RESERVED_WORDS.join(", ")));
    session.blank();

    session.heading("Operators");
    let a = 10 + 5;
    let b = a * 2;
    session.line(format!("a = 10 + 5    -> {}  ('+' is an operator)", a));
    session.line(format!("b = a * 2     -> {}  ('*' is an operator)", b));
    session.blank();

    session.heading("Delimiters");
    let my_list = Value::list(vec![
        Value::Int(1),
        Value::Int(2),
        Value::Int(3),
        Value::Int(4),
    ]);
    let my_map = Value::map([("key", Value::text("value"))]);
    session.line(format!("Square brackets build a sequence: {}", my_list));
    session.line(format!("Curly braces build a mapping:     {}", my_map));
    session.blank();

    session.heading("Literals");
    let literals = [
        Value::text("Hello, World!"),
        Value::Int(42),
        Value::Float(3.14),
        Value::Bool(true),
    ];
    for literal in &literals {
        session.line(format!("{:<15} is a {} literal", literal.to_string(), literal.type_name()));
    }

    Ok(())
}
