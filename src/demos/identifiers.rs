//! Identifiers and naming
//!
//! Valid naming styles, spellings that can never be names, and Unicode
//! identifiers. The environment dump at the end shows that bindings remember
//! the order they first appeared in.

use crate::console::Session;
use crate::errors::DemoError;
use crate::runtime::env::Env;
use crate::runtime::value::Value;

pub fn run(session: &mut Session) -> Result<(), DemoError> {
    let mut env = Env::new();

    session.heading("Valid Identifiers");
    env.bind("student_name", Value::text("John Doe"))?;
    env.bind("StudentName", Value::text("Alice"))?;
    env.bind("studentAge", Value::Int(20))?;
    env.bind("_studentID", Value::Int(1001))?;
    env.bind("PI", Value::Float(3.14159))?;
    for (name, value) in env.bindings() {
        session.line(format!("{:<14} = {} ({})", name, value, value.type_name()));
    }
    session.blank();

    session.heading("Invalid Identifiers");
    session.line("1student      cannot start with a digit");
    session.line("student-name  cannot contain hyphens");
    session.line("student@id    cannot contain special characters");
    session.blank();

    session.heading("Unicode Identifiers");
    env.bind("नाम", Value::text("राम"))?;
    env.bind("رقم", Value::Int(500))?;
    env.bind("結果", Value::Int(98))?;
    session.line(format!(
        "{} {} {}",
        env.lookup("नाम")?,
        env.lookup("رقم")?,
        env.lookup("結果")?
    ));
    session.blank();

    session.heading("Naming Conventions");
    session.line("lower_snake_case for ordinary names, UPPERCASE for constants,");
    session.line("and a leading underscore to mark a name as internal.");

    Ok(())
}
