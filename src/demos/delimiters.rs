//! Delimiters
//!
//! Parentheses, brackets, braces, colons, commas, the dot, assignment, and
//! line continuation, each shown doing its one job.

use crate::console::Session;
use crate::errors::DemoError;
use crate::runtime::convert;
use crate::runtime::value::Value;

pub fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Parentheses Group Expressions");
    let result = (2 + 3) * 4;
    session.line(format!("(2 + 3) * 4 = {}", result));
    session.blank();

    session.heading("Square Brackets: Sequences and Indexing");
    let numbers = Value::list(vec![
        Value::Int(1),
        Value::Int(2),
        Value::Int(3),
        Value::Int(4),
        Value::Int(5),
    ]);
    session.line(format!("numbers = {}", numbers));
    session.line(format!("numbers[0] = {}", numbers.index(0)?));
    session.blank();

    session.heading("Curly Braces: Mappings and Sets");
    let student = Value::map([("name", Value::text("Ali")), ("age", Value::Int(18))]);
    session.line(format!("student = {}", student));
    session.line(format!("student[\"name\"] = {}", student.get("name")?));

    let raw = Value::list(vec![
        Value::Int(1),
        Value::Int(2),
        Value::Int(2),
        Value::Int(3),
        Value::Int(4),
    ]);
    let unique_values = convert::list_to_set(&raw)?;
    session.line(format!("{} as a set: {}  (duplicates collapse)", raw, unique_values));
    session.blank();

    session.heading("Colons Pair Keys with Values");
    let ages = Value::map([("Ahmed", Value::Int(20)), ("Sara", Value::Int(22))]);
    for (name, age) in ages.map_entries() {
        session.line(format!("{} is {} years old", name, age));
    }
    session.blank();

    session.heading("Commas Separate Items");
    let colors = Value::list(vec![
        Value::text("red"),
        Value::text("blue"),
        Value::text("green"),
    ]);
    session.line(format!("colors = {}", colors));
    session.blank();

    session.heading("The Dot Marks the Fraction");
    let pi = Value::Float(3.14);
    session.line(format!("pi = {}", pi));
    session.blank();

    session.heading("Assignment");
    let x = 10;
    let y = x + 5;
    session.line(format!("x = {}, y = x + 5 = {}", x, y));
    session.blank();

    session.heading("Line Continuation");
    let long_text = String::from("This is a very long sentence that we ")
        + "can split across multiple lines.";
    session.line(long_text);

    Ok(())
}
