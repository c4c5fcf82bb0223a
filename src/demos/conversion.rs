//! Type conversion
//!
//! Implicit widening when kinds mix in arithmetic, the explicit conversions,
//! and finally converting interactive input. A line that cannot be parsed
//! ends the demonstration with a diagnostic; that abrupt stop is the lesson.

use crate::console::Session;
use crate::errors::DemoError;
use crate::runtime::convert;
use crate::runtime::value::Value;

pub fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Implicit Type Conversion");
    let a = Value::Int(5);
    let b = Value::Float(2.5);
    let sum = convert::add(&a, &b)?;
    session.line(format!(
        "{} + {} = {} ({})  (the int widened to float)",
        a,
        b,
        sum,
        sum.type_name()
    ));
    session.blank();

    session.heading("Explicit Type Conversion");
    let num_str = Value::text("123");
    let num_int = convert::to_int(&num_str)?;
    session.line(format!("\"{}\" -> {} ({})", num_str, num_int, num_int.type_name()));

    let flt = Value::Float(9.99);
    let truncated = convert::to_int(&flt)?;
    session.line(format!("{} -> {} ({}, truncation)", flt, truncated, truncated.type_name()));

    let int_val = Value::Int(10);
    let widened = convert::to_float(&int_val)?;
    session.line(format!("{} -> {} ({})", int_val, widened, widened.type_name()));

    let num = Value::Int(456);
    let as_text = convert::to_str(&num);
    session.line(format!("{} -> \"{}\" ({})", num, as_text, as_text.type_name()));

    let my_list = Value::list(vec![
        Value::Int(1),
        Value::Int(2),
        Value::Int(2),
        Value::Int(3),
    ]);
    let my_set = convert::list_to_set(&my_list)?;
    session.line(format!("{} -> {} ({})", my_list, my_set, my_set.type_name()));
    session.blank();

    session.heading("Conversion to Bool");
    let cases = [
        ("0", Value::Int(0)),
        ("7", Value::Int(7)),
        ("\"\"", Value::text("")),
        ("\"text\"", Value::text("text")),
        ("[]", Value::list(vec![])),
    ];
    for (shown, value) in &cases {
        session.line(format!("{:<8} ({}) -> {}", shown, value.type_name(), value.truthy()));
    }
    session.line("Zero and empty are false; everything else is true.");
    session.blank();

    session.heading("Input Conversion");
    let entered = session.prompt_int("Enter an integer: ")?;
    let entered = Value::Int(entered);
    session.line(format!("You entered {} ({})", entered, entered.type_name()));

    let entered = session.prompt_float("Enter a floating-point number: ")?;
    let entered = Value::Float(entered);
    session.line(format!("You entered {} ({})", entered, entered.type_name()));

    Ok(())
}
