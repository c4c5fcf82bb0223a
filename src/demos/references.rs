//! Variables as references
//!
//! A name is a label pointing at a value, not a box containing one. The
//! blocks walk through binding, rebinding (including to a different kind),
//! unbinding while an alias survives, and global-versus-local scope.

use crate::console::Session;
use crate::errors::DemoError;
use crate::runtime::env::Env;
use crate::runtime::value::Value;

pub fn run(session: &mut Session) -> Result<(), DemoError> {
    let mut env = Env::new();

    session.heading("References");
    env.bind("a", Value::Int(50))?;
    session.line(format!("a initially: {}", env.lookup("a")?));
    env.bind(
        "a",
        Value::list(vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
    )?;
    session.line(format!("a now references a list: {}", env.lookup("a")?));
    session.blank();

    session.heading("Binding and Rebinding");
    env.bind("b", Value::Int(30))?;
    session.line(format!("Original value of b: {}", env.lookup("b")?));
    let bumped = env.lookup("b")?.expect_int()? + 5;
    env.bind("b", Value::Int(bumped))?;
    session.line(format!("Rebound value of b: {}", env.lookup("b")?));

    env.bind("num", Value::Int(10))?;
    env.bind("num", Value::Int(20))?;
    session.line(format!("num bound to 10, then 20; num now resolves to: {}", env.lookup("num")?));
    session.blank();

    session.heading("Unbinding Variables");
    let shared = Value::map([("x", Value::Int(1)), ("y", Value::Int(2))]);
    env.bind("c", shared.clone())?;
    env.bind("d", shared)?; // 'd' aliases the same map
    session.line(format!("Before unbinding, d: {}", env.lookup("d")?));

    env.unbind("c")?;
    session.line(format!(
        "After unbinding c, d still holds: {}",
        env.lookup("d")?
    ));
    match env.lookup("c") {
        Ok(value) => session.line(format!("c unexpectedly resolves to {}", value)),
        Err(e) => session.line(format!("Reading c now fails: {}", e)),
    }
    session.blank();

    session.heading("Global and Local Variables");
    env.bind("global_message", Value::text("I am a global variable"))?;
    env.push_scope();
    env.bind("local_message", Value::text("I am a local variable"))?;
    session.line(format!("Inside function, local_message: {}", env.lookup("local_message")?));
    session.line(format!("Inside function, global_message: {}", env.lookup("global_message")?));
    env.pop_scope();
    session.line(format!("Outside function, global_message: {}", env.lookup("global_message")?));
    session.line(format!(
        "Outside function, local_message is bound: {}",
        env.is_bound("local_message")
    ));

    Ok(())
}
