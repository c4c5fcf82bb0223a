//! Loop constructs
//!
//! Counted loops, iteration over a sequence, stepped ranges, while loops with
//! break and continue, and two interactive generators that repeat until the
//! operator declines to continue.

use crate::console::Session;
use crate::errors::DemoError;
use crate::runtime::convert;
use crate::runtime::value::Value;

pub fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("For Loops");
    for i in 1..=10 {
        session.line(format!("5 x {} = {}", i, 5 * i));
    }
    session.blank();

    let fruits = Value::list(vec![
        Value::text("apple"),
        Value::text("banana"),
        Value::text("cherry"),
    ]);
    for i in 0..3 {
        session.line(format!("I like {}!", fruits.index(i)?));
    }
    session.blank();

    session.line("Even numbers from 2 to 20:");
    for number in (2..=20).step_by(2) {
        session.line(format!("{}", number));
    }
    session.blank();

    session.heading("While Loops");
    let mut number = 1;
    while number <= 10 {
        session.line(format!("5 x {} = {}", number, 5 * number));
        number += 1;
    }
    session.blank();

    // Repeat until the operator types 'quit'; a non-numeric, non-quit answer
    // ends the demonstration with a conversion diagnostic
    loop {
        let answer = session.prompt_line("Enter a number to get its square (or 'quit' to stop): ")?;
        if answer.trim().eq_ignore_ascii_case("quit") {
            break;
        }
        let number = convert::parse_int(&answer)?.expect_int()?;
        session.line(format!("The square of {} is {}", number, number * number));
    }
    session.blank();

    session.line("Odd numbers below 10, via continue:");
    let mut current = 0;
    while current < 10 {
        current += 1;
        if current % 2 == 0 {
            continue;
        }
        session.line(format!("{}", current));
    }
    session.blank();

    session.heading("Nested Loops");
    session.line("Welcome to the Multiplication Table Generator!");
    loop {
        let table_number = session.prompt_int("Enter a number for its multiplication table: ")?;
        session.blank();
        session.line(format!("Multiplication Table for {}", table_number));
        for i in 1..=10 {
            session.line(format!("{} x {} = {}", table_number, i, table_number * i));
        }
        if !session.prompt_yes("Do you want to print another table? (yes/no): ")? {
            session.line("Exiting the Multiplication Table Generator. Thank you!");
            break;
        }
    }
    session.blank();

    session.line("Welcome to the Pyramid Pattern Generator!");
    loop {
        let height = session.prompt_int("Enter the height of the pyramid: ")?;
        session.blank();
        session.line(format!("Pyramid of height {}", height));
        for i in 1..=height {
            let indent = " ".repeat((height - i).max(0) as usize);
            let stars = "*".repeat((2 * i - 1).max(0) as usize);
            session.line(format!("{}{}", indent, stars));
        }
        if !session.prompt_yes("Do you want to create another pyramid? (yes/no): ")? {
            session.line("Exiting the Pyramid Pattern Generator. Thank you!");
            break;
        }
    }

    Ok(())
}
