//! Data types and literals
//!
//! Scalar kinds and their literal forms: integer bases, scientific notation,
//! digit-group underscores, string forms, and booleans. The rebinding block
//! shows that replacing a scalar never disturbs a second binding that still
//! holds the original.

use crate::console::Session;
use crate::errors::DemoError;
use crate::runtime::env::Env;
use crate::runtime::value::Value;

pub fn run(session: &mut Session) -> Result<(), DemoError> {
    let mut env = Env::new();

    session.heading("Values and Their Kinds");
    env.bind("x", Value::Int(42))?;
    env.bind("y", Value::text("Hello"))?;
    session.line(format!("x = {} ({})", env.lookup("x")?, env.lookup("x")?.type_name()));
    session.line(format!("y = {} ({})", env.lookup("y")?, env.lookup("y")?.type_name()));
    session.blank();

    session.heading("Rebinding Leaves Old Holders Alone");
    env.bind("original_x", env.lookup("x")?.clone())?;
    let bumped = env.lookup("x")?.expect_int()? + 1;
    env.bind("x", Value::Int(bumped))?;
    session.line(format!("Modified x:  {}", env.lookup("x")?));
    session.line(format!("Original x:  {}", env.lookup("original_x")?));

    env.bind("original_y", env.lookup("y")?.clone())?;
    let longer = format!("{} World", env.lookup("y")?);
    env.bind("y", Value::Str(longer))?;
    session.line(format!("Modified y:  {}", env.lookup("y")?));
    session.line(format!("Original y:  {}", env.lookup("original_y")?));
    session.blank();

    session.heading("Kind Checks");
    session.line(format!("Is x an int? {}", env.lookup("x")?.type_name() == "int"));
    session.line(format!("Is y a str?  {}", env.lookup("y")?.type_name() == "str"));
    session.blank();

    session.heading("Integer Literals in Different Bases");
    session.line(format!("Decimal 23        = {}", 23));
    session.line(format!("Binary 0b1010     = {}", 0b1010));
    session.line(format!("Octal 0o27        = {}", 0o27));
    session.line(format!("Hexadecimal 0x1F  = {}", 0x1F));
    session.blank();

    session.heading("Floats and Scientific Notation");
    session.line(format!("3.14159 stays {}", Value::Float(3.14159)));
    session.line(format!("1e3     means {}", Value::Float(1e3)));
    session.line(format!("2.5e-2  means {}", Value::Float(2.5e-2)));
    session.blank();

    session.heading("Underscores Group Digits");
    session.line(format!("100_000   = {}", 100_000));
    session.line(format!("0xFF_FF   = {}", 0xFF_FF));
    session.blank();

    session.heading("String Forms");
    let single = Value::text("Hello");
    let double = Value::text("World");
    let multi_line = Value::text("This is a\nmulti-line string example.");
    session.line(format!("{} {}  (quote style does not change the value)", single, double));
    session.line(format!("Multi-line:\n{}", multi_line));
    session.blank();

    session.heading("Booleans");
    let is_fun = true;
    session.line(format!("is_fun          = {}", is_fun));
    session.line(format!("is_fun && false = {}", is_fun && false));
    session.line(format!("!is_fun         = {}", !is_fun));

    Ok(())
}
