// src/defs.rs
//
// The δ-primitive table: symbolic names mapped to closed λ-terms. The
// source text lives in a static phf map; the parsed table is built once
// and is immutable from then on, so it can be shared across evaluations
// (and threads) without any locking.

use std::collections::HashMap;

use lazy_static::lazy_static;
use phf::phf_map;

use crate::ast::TermRef;
use crate::error::ParseError;
use crate::parser::parse;

/// λ-source for every built-in primitive. Numeral literals inside the
/// definitions (the `0` in `*`) parse into Church numerals like any other
/// source text.
static DEFS_SRC: phf::Map<&'static str, &'static str> = phf_map! {
    "⊤" => "λx.λy.x",
    "⊥" => "λx.λy.y",
    "∧" => "λp.λq.p q p",
    "∨" => "λp.λq.p p q",
    "¬" => "λp.p ⊥ ⊤",
    "↑" => "λn.λf.λx.f (n f x)",
    "↓" => "λn.λf.λx.n (λg.λh.h (g f)) (λu.x) (λu.u)",
    "+" => "λm.λn.m ↑ n",
    "-" => "λm.λn.n ↓ m",
    "*" => "λm.λn.m (+ n) 0",
    "is0" => "λn.n (λx.⊥) ⊤",
    "≤" => "λm.λn.is0 (- m n)",
    "pair" => "λx.λy.λf.f x y",
    "fst" => "λp.p ⊤",
    "snd" => "λp.p ⊥",
};

/// An immutable name → term table consulted by δ-reduction. Names absent
/// from the table never match a δ-redex and behave as ordinary free
/// variables.
#[derive(Debug, Clone)]
pub struct Defs {
    map: HashMap<String, TermRef>,
}

impl Defs {
    /// The standard primitive set. The sources are authored in this file,
    /// so a parse failure here is a bug in the table itself; panicking at
    /// startup is the right response.
    pub fn standard() -> Self {
        let map = DEFS_SRC
            .entries()
            .map(|(name, src)| {
                let term = parse(src)
                    .unwrap_or_else(|e| panic!("bad builtin definition for '{}': {}", name, e));
                (name.to_string(), term)
            })
            .collect();
        Defs { map }
    }

    /// A table with no primitives at all; δ-reduction never fires.
    pub fn empty() -> Self {
        Defs { map: HashMap::new() }
    }

    /// Build a table from custom `(name, source)` pairs.
    pub fn from_sources<'a, I>(sources: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut map = HashMap::new();
        for (name, src) in sources {
            map.insert(name.to_string(), parse(src)?);
        }
        Ok(Defs { map })
    }

    pub fn get(&self, name: &str) -> Option<&TermRef> {
        self.map.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }
}

lazy_static! {
    /// The shared standard table, parsed on first use.
    pub static ref DEFS: Defs = Defs::standard();
}
