// src/lib.rs

// --- Module Declarations ---
pub mod ansi;
pub mod ast;
pub mod church;
pub mod defs;
pub mod error;
pub mod parser;
pub mod printer;
pub mod reduce;
pub mod vars;

// --- Public API Re-exports ---
// The core surface: parse, normalize, decode. Everything else is exposed
// for the display layer and for tests.
pub use ast::{Term, TermRef};
pub use church::{abstract_numerals, church, decode_church};
pub use defs::{Defs, DEFS};
pub use error::{ParseError, ParseErrorKind};
pub use parser::parse;
pub use reduce::{normalize, reduce_once, Outcome, RuleKind, Step, Trace};
pub use vars::{free_vars, fresh_var, subst};
