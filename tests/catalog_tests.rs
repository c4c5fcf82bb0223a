// Integration tests over the whole demonstration catalog

use langtour::console::Session;
use langtour::demos;
use langtour::errors::DemoError;

#[test]
fn every_demo_replays_successfully() {
    for demo in demos::CATALOG {
        let transcript = demos::replay(demo)
            .unwrap_or_else(|e| panic!("'{}' failed to replay: {}", demo.name, e));
        assert!(
            !transcript.is_empty(),
            "'{}' produced no output",
            demo.name
        );
    }
}

#[test]
fn catalog_names_are_unique() {
    for (i, demo) in demos::CATALOG.iter().enumerate() {
        for other in &demos::CATALOG[i + 1..] {
            assert_ne!(demo.name, other.name);
        }
    }
}

#[test]
fn every_catalog_entry_is_findable() {
    for demo in demos::CATALOG {
        let found = demos::find(demo.name).expect("catalog entry should resolve");
        assert_eq!(found.title, demo.title);
    }
}

#[test]
fn catalog_entries_format_for_diagnostics() {
    // Demo is used in unwrap_err/expect messages, so it has to be Debug
    let demo = demos::find("operators").expect("operators demo should exist");
    let rendered = format!("{:?}", demo);
    assert!(rendered.contains("operators"), "got: {}", rendered);
}

#[test]
fn unknown_demo_is_an_error() {
    let err = demos::find("pointer-arithmetic").unwrap_err();
    assert!(matches!(err, DemoError::UnknownDemo { .. }));
    assert_eq!(
        err.to_string(),
        "no demonstration named 'pointer-arithmetic'"
    );
}

#[test]
fn malformed_interactive_input_stops_the_run() {
    let demo = demos::find("conversion").expect("conversion demo should exist");

    let mut session = Session::scripted(["definitely not a number"]);
    let err = (demo.run)(&mut session).unwrap_err();
    assert!(
        matches!(err, DemoError::MalformedInput { .. }),
        "got: {:?}",
        err
    );
}

#[test]
fn exhausted_input_stops_the_run() {
    let demo = demos::find("decisions").expect("decisions demo should exist");

    let mut session = Session::scripted(Vec::<String>::new());
    let err = (demo.run)(&mut session).unwrap_err();
    assert!(matches!(err, DemoError::InputClosed { .. }), "got: {:?}", err);
}

#[test]
fn demos_without_prompts_need_no_input() {
    for name in [
        "character-sets",
        "tokens",
        "identifiers",
        "keywords",
        "operators",
        "delimiters",
        "data-types",
        "references",
    ] {
        let demo = demos::find(name).expect("demo should exist");
        assert!(
            demo.sample_input.is_empty(),
            "'{}' unexpectedly declares sample input",
            name
        );

        let mut session = Session::scripted(Vec::<String>::new());
        (demo.run)(&mut session)
            .unwrap_or_else(|e| panic!("'{}' should not prompt, but failed: {}", name, e));
    }
}
