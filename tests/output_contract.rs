// Observable-output contract for the demonstrations

use langtour::console::Session;
use langtour::demos;

/// Replay a catalog demo against its sample input and return the transcript
/// lines, panicking with context on failure.
fn replay_lines(name: &str) -> Vec<String> {
    let demo = demos::find(name).expect("demo should exist in the catalog");
    let transcript = demos::replay(demo).expect("replay should complete");
    transcript.lines()
}

#[test]
fn arithmetic_on_ten_and_three() {
    let joined = replay_lines("operators").join("\n");
    println!("Operator output:\n{}", joined);

    assert!(joined.contains("10 + 3 = 13"));
    assert!(joined.contains("10 - 3 = 7"));
    assert!(joined.contains("10 * 3 = 30"));
    assert!(joined.contains("10 // 3 = 3"));
    assert!(joined.contains("10 % 3 = 1"));
}

#[test]
fn rebinding_resolves_to_the_newest_value() {
    let joined = replay_lines("references").join("\n");
    assert!(joined.contains("num bound to 10, then 20; num now resolves to: 20"));
}

#[test]
fn unbinding_one_alias_preserves_the_shared_map() {
    let joined = replay_lines("references").join("\n");
    println!("References output:\n{}", joined);

    assert!(joined.contains("Before unbinding, d: {\"x\": 1, \"y\": 2}"));
    assert!(joined.contains("After unbinding c, d still holds: {\"x\": 1, \"y\": 2}"));
    assert!(joined.contains("Reading c now fails: name 'c' is not bound"));
}

#[test]
fn decision_chain_selects_by_age() {
    let joined = replay_lines("decisions").join("\n");
    println!("Decision output:\n{}", joined);

    // voter_age = 17 takes the too-young branch, 19 the old-enough branch
    assert!(joined.contains("Sorry, you are too young to vote."));
    assert!(joined.contains("You are old enough to vote!"));
}

#[test]
fn even_number_loop_prints_exactly_ten_ascending_lines() {
    let lines = replay_lines("loops");

    let start = lines
        .iter()
        .position(|l| l == "Even numbers from 2 to 20:")
        .expect("even-number block should be labeled")
        + 1;
    let block: Vec<&String> = lines[start..]
        .iter()
        .take_while(|l| !l.is_empty())
        .collect();

    let expected: Vec<String> = (2..=20).step_by(2).map(|n| n.to_string()).collect();
    assert_eq!(block.len(), 10, "block: {:?}", block);
    for (printed, expected) in block.iter().zip(&expected) {
        assert_eq!(printed.as_str(), expected);
    }
}

#[test]
fn replays_are_byte_identical() {
    for demo in demos::CATALOG {
        let first = demos::replay(demo).expect("first replay should complete");
        let second = demos::replay(demo).expect("second replay should complete");
        assert_eq!(
            first.joined(),
            second.joined(),
            "'{}' transcript drifted between runs",
            demo.name
        );
    }
}

#[test]
fn interactive_answers_are_echoed_into_the_transcript() {
    let joined = replay_lines("conversion").join("\n");
    println!("Conversion output:\n{}", joined);

    assert!(joined.contains("Enter an integer: 42"));
    assert!(joined.contains("You entered 42 (int)"));
    assert!(joined.contains("Enter a floating-point number: 2.5"));
    assert!(joined.contains("You entered 2.5 (float)"));
}

#[test]
fn square_loop_stops_on_quit() {
    let demo = demos::find("loops").expect("loops demo should exist");
    let mut session = Session::scripted(["6", "quit", "2", "no", "1", "no"]);
    (demo.run)(&mut session).expect("run should complete");

    let joined = session
        .into_transcript()
        .expect("scripted sessions record a transcript")
        .joined();
    assert!(joined.contains("The square of 6 is 36"));
    assert!(joined.contains("Multiplication Table for 2"));
    assert!(joined.contains("Exiting the Pyramid Pattern Generator. Thank you!"));
}
