//! Character sets and encodings
//!
//! Console output here is always UTF-8, so any Unicode character can appear
//! in a text value. The byte-count block shows why "one character" and "one
//! byte" are different ideas once you leave ASCII.

use crate::console::Session;
use crate::errors::DemoError;
use crate::runtime::value::Value;

pub fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Character Sets");
    session.line("Hello, World!");
    session.line("こんにちは, 世界!");
    session.line("Hola, señor!");
    session.blank();

    session.heading("ASCII vs UTF-8");
    session.line("ASCII covers code points 0-127, one byte each.");
    session.line("UTF-8 encodes every Unicode character, using 1 to 4 bytes.");
    for text in ["Hello", "señor", "世界"] {
        session.line(format!(
            "\"{}\" is {} characters encoded in {} bytes",
            text,
            text.chars().count(),
            text.len()
        ));
    }
    session.blank();

    session.heading("Unicode in Text Values");
    let greeting_target = Value::text("世界");
    session.line(format!("Hello, {}!", greeting_target));
    session.line(format!(
        "The accented 'ñ' is code point U+{:04X}",
        'ñ' as u32
    ));

    Ok(())
}
