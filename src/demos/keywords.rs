//! Reserved words
//!
//! Keywords are spellings the language claims for itself. They can appear in
//! control flow but never as binding names; the rejected bind shows the
//! diagnostic a reader would hit.

use crate::console::Session;
use crate::errors::DemoError;
use crate::runtime::env::{Env, RESERVED_WORDS};
use crate::runtime::value::Value;

pub fn run(session: &mut Session) -> Result<(), DemoError> {
    let mut env = Env::new();

    session.heading("Reserved Words");
    session.line(format!("{} words are reserved:", RESERVED_WORDS.len()));
    session.line(format!("  {}", RESERVED_WORDS.join(", ")));
    session.blank();

    session.heading("Keywords vs Identifiers");
    env.bind("my_var", Value::Int(20))?;
    session.line(format!("my_var = {}  (allowed: ordinary identifier)", env.lookup("my_var")?));

    match env.bind("return", Value::Int(50)) {
        Ok(()) => session.line("return = 50  (unexpectedly allowed)"),
        Err(e) => session.line(format!("return = 50  rejected: {}", e)),
    }
    session.blank();

    session.heading("Keywords in Control Flow");
    let x = 10;
    if x > 5 {
        session.line("x is greater than 5");
    } else {
        session.line("x is 5 or less");
    }

    Ok(())
}
