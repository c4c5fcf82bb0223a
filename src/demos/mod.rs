//! The demonstration catalog
//!
//! Each demonstration is a linear sequence of labeled blocks: it binds a few
//! named values, operates on them, and writes human-readable lines to its
//! [`Session`]. Blocks are independent; order matters only for readability.
//!
//! # Catalog
//!
//! [`CATALOG`] holds one [`Demo`] per subject, in teaching order. A demo's
//! `sample_input` answers its prompts during scripted runs (tests, `--replay`,
//! the browser, `all`), so replays are deterministic and byte-identical.

pub mod character_sets;
pub mod conversion;
pub mod data_types;
pub mod decisions;
pub mod delimiters;
pub mod identifiers;
pub mod keywords;
pub mod loops;
pub mod operators;
pub mod references;
pub mod tokens;

use crate::console::transcript::Transcript;
use crate::console::Session;
use crate::errors::DemoError;

/// One runnable demonstration
#[derive(Debug)]
pub struct Demo {
    /// Catalog name, as typed on the command line
    pub name: &'static str,
    /// Human-readable title
    pub title: &'static str,
    /// Canned answers for scripted runs, in prompt order
    pub sample_input: &'static [&'static str],
    pub run: fn(&mut Session) -> Result<(), DemoError>,
}

/// All demonstrations, in teaching order
pub const CATALOG: &[Demo] = &[
    Demo {
        name: "character-sets",
        title: "Character sets and encodings",
        sample_input: &[],
        run: character_sets::run,
    },
    Demo {
        name: "tokens",
        title: "Token categories",
        sample_input: &[],
        run: tokens::run,
    },
    Demo {
        name: "identifiers",
        title: "Identifiers and naming",
        sample_input: &[],
        run: identifiers::run,
    },
    Demo {
        name: "keywords",
        title: "Reserved words",
        sample_input: &[],
        run: keywords::run,
    },
    Demo {
        name: "operators",
        title: "Operators",
        sample_input: &[],
        run: operators::run,
    },
    Demo {
        name: "delimiters",
        title: "Delimiters",
        sample_input: &[],
        run: delimiters::run,
    },
    Demo {
        name: "data-types",
        title: "Data types and literals",
        sample_input: &[],
        run: data_types::run,
    },
    Demo {
        name: "references",
        title: "Variables as references",
        sample_input: &[],
        run: references::run,
    },
    Demo {
        name: "conversion",
        title: "Type conversion",
        sample_input: &["42", "2.5"],
        run: conversion::run,
    },
    Demo {
        name: "decisions",
        title: "Decision statements",
        sample_input: &["15", "21", "7"],
        run: decisions::run,
    },
    Demo {
        name: "loops",
        title: "Loop constructs",
        sample_input: &["4", "quit", "7", "no", "3", "no"],
        run: loops::run,
    },
];

/// Look up a demonstration by catalog name
pub fn find(name: &str) -> Result<&'static Demo, DemoError> {
    CATALOG
        .iter()
        .find(|demo| demo.name == name)
        .ok_or_else(|| DemoError::UnknownDemo {
            name: name.to_string(),
        })
}

/// Run a demonstration against its sample input, returning the transcript
pub fn replay(demo: &Demo) -> Result<Transcript, DemoError> {
    let mut session = Session::scripted(demo.sample_input.iter().copied());
    (demo.run)(&mut session)?;
    Ok(session.into_transcript().unwrap_or_default())
}
