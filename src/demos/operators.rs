//! Operators
//!
//! Arithmetic, comparison, logical, bitwise, compound assignment, identity,
//! and membership, each on a pair of fixed operands so every printed result
//! can be checked by eye.

use crate::console::Session;
use crate::errors::DemoError;
use crate::runtime::value::Value;

pub fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Arithmetic Operators");
    let a: i64 = 10;
    let b: i64 = 3;
    session.line(format!("{} + {} = {}", a, b, a + b));
    session.line(format!("{} - {} = {}", a, b, a - b));
    session.line(format!("{} * {} = {}", a, b, a * b));
    session.line(format!("{} / {} = {}", a, b, a as f64 / b as f64));
    session.line(format!("{} % {} = {}", a, b, a % b));
    session.line(format!("{} ** {} = {}", a, b, a.pow(b as u32)));
    session.line(format!("{} // {} = {}", a, b, a.div_euclid(b)));
    session.blank();

    session.heading("Comparison Operators");
    let x = 5;
    let y = 3;
    session.line(format!("{} <  {} = {}", x, y, x < y));
    session.line(format!("{} <= {} = {}", x, y, x <= y));
    session.line(format!("{} >  {} = {}", x, y, x > y));
    session.line(format!("{} >= {} = {}", x, y, x >= y));
    session.line(format!("{} == {} = {}", x, y, x == y));
    session.line(format!("{} != {} = {}", x, y, x != y));
    session.blank();

    session.heading("Logical Operators");
    let p = true;
    let q = false;
    session.line(format!("p && q = {}  (both must be true)", p && q));
    session.line(format!("p || q = {}   (at least one true)", p || q));
    session.line(format!("!p     = {}  (negation)", !p));
    session.blank();

    session.heading("Bitwise Operators");
    let m: i64 = 5; // 101 in binary
    let n: i64 = 3; // 011 in binary
    session.line(format!("{} & {}  = {}   (101 & 011 = 001)", m, n, m & n));
    session.line(format!("{} | {}  = {}   (101 | 011 = 111)", m, n, m | n));
    session.line(format!("{} ^ {}  = {}   (101 ^ 011 = 110)", m, n, m ^ n));
    session.line(format!("!{}     = {}  (all bits inverted)", m, !m));
    session.line(format!("{} << 1 = {}  (101 -> 1010)", m, m << 1));
    session.line(format!("{} >> 1 = {}   (101 -> 10)", m, m >> 1));
    session.blank();

    session.heading("Compound Assignment");
    let mut num = 10;
    num += 5;
    session.line(format!("num = 10; num += 5  -> {}", num));
    num *= 2;
    session.line(format!("num *= 2            -> {}", num));
    session.blank();

    session.heading("Identity vs Equality");
    let list1 = Value::list(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    let list2 = list1.clone(); // second handle to the same list
    let list3 = Value::list(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    session.line(format!("list1 is list2: {}  (same shared value)", list1.is_alias_of(&list2)));
    session.line(format!("list1 is list3: {}  (a distinct value)", list1.is_alias_of(&list3)));
    session.line(format!("list1 == list3: {}   (contents match)", list1 == list3));
    session.blank();

    session.heading("Membership Operators");
    let fruits = Value::list(vec![
        Value::text("apple"),
        Value::text("banana"),
        Value::text("cherry"),
    ]);
    session.line(format!("fruits = {}", fruits));
    session.line(format!("\"banana\" in fruits:     {}", fruits.contains_text("banana")));
    session.line(format!("\"grape\" not in fruits:  {}", !fruits.contains_text("grape")));

    Ok(())
}
