//! # Introduction
//!
//! langtour is a catalog of self-contained console demonstrations of basic
//! programming-language concepts: character sets, tokens, identifiers,
//! keywords, operators, delimiters, data types, variables as references,
//! type conversion, decisions, and loops.  Each demonstration is a linear
//! sequence of labeled blocks that binds named values and prints what it did.
//!
//! ## Run pipeline
//!
//! ```text
//! Catalog → Demo → Session → stdout (live) or Transcript (scripted)
//! ```
//!
//! 1. [`demos`] — the catalog and the eleven demonstrations.
//! 2. [`runtime`] — the values the demos bind: tagged
//!    [`runtime::value::Value`] variants in a [`runtime::env::Env`] of named
//!    bindings, with conversions in [`runtime::convert`].
//! 3. [`console`] — the [`console::Session`] I/O surface and the recorded
//!    [`console::transcript::Transcript`].
//! 4. [`ui`] — ratatui-based transcript browser; not part of the stable
//!    library API.
//!
//! ## Console contract
//!
//! Output is UTF-8 text on stdout.  Input, where a demo prompts at all, is
//! line-oriented.  Malformed input and reads of unbound names stop the run
//! with a diagnostic; replaying a demo against fixed input reproduces its
//! output byte for byte.

pub mod console;
pub mod demos;
pub mod errors;
pub mod runtime;
pub mod ui;
