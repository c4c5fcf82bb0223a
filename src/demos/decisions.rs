//! Decision statements
//!
//! Simple if, if/else, a chained ladder with interactive input, nesting, and
//! two fixed ladders whose selected branch can be checked against the bound
//! value above them.

use crate::console::Session;
use crate::errors::DemoError;

pub fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Simple if");
    let voter_age = 19;
    session.line(format!("voter_age = {}", voter_age));
    if voter_age >= 18 {
        session.line("You are old enough to vote!");
    }
    session.blank();

    session.heading("if-else");
    let voter_age = 17;
    session.line(format!("voter_age = {}", voter_age));
    if voter_age >= 18 {
        session.line("You are old enough to vote!");
    } else {
        session.line("Sorry, you are too young to vote.");
    }
    session.blank();

    session.heading("Chained Conditions");
    let age = session.prompt_int("Enter your age for ticket pricing: ")?;
    if age < 4 {
        session.line("Your admission cost is $0.");
    } else if age < 18 {
        session.line("Your admission cost is $25.");
    } else {
        session.line("Your admission cost is $40.");
    }
    session.blank();

    session.heading("Nested Conditions");
    let age = session.prompt_int("Enter your age for eligibility check: ")?;
    if age >= 18 {
        if age > 20 {
            session.line("You are eligible for a special adult ticket.");
        } else {
            session.line("You are eligible to vote!");
        }
    } else {
        session.line("You are too young to vote.");
    }
    session.blank();

    session.heading("Number Parity");
    let number = session.prompt_int("Enter a number to check if it is even or odd: ")?;
    if number % 2 == 0 {
        session.line("The number is even.");
    } else {
        session.line("The number is odd.");
    }
    session.blank();

    session.heading("Fixed Ladder: Admission");
    let our_age = 12;
    session.line(format!("our_age = {}", our_age));
    if our_age < 4 {
        session.line("Your admission cost is $0.");
    } else if our_age < 18 {
        session.line("Your admission cost is $25.");
    } else {
        session.line("Your admission cost is $40.");
    }
    session.blank();

    session.heading("Fixed Ladder: Grades");
    let marks = 85;
    session.line(format!("marks = {}", marks));
    if marks >= 90 {
        session.line("You got an A grade!");
    } else if marks >= 75 {
        session.line("You got a B grade!");
    } else if marks >= 60 {
        session.line("You got a C grade!");
    } else {
        session.line("You need to improve.");
    }
    session.blank();

    session.heading("Matching on Text");
    let mood = "energetic";
    session.line(format!("mood = {}", mood));
    let suggestion = match mood {
        "happy" => "How about listening to some pop music?",
        "sad" => "Try some blues to feel those emotions!",
        "energetic" => "Rock music is your go-to!",
        "relaxed" => "Smooth jazz will be perfect for you.",
        _ => "Discover some new indie tracks!",
    };
    session.line(suggestion);

    Ok(())
}
