// src/church.rs
//
// Church-numeral encoding and the display-time inverse. Decoding is only
// ever used to re-present results; the reduction engine never consults it.

use crate::ast::{Term, TermRef};

/// Church encoding of `n`: `λf.λx.f (f (... (f x)))` with `n` copies of
/// `f`. The unsigned argument type is the whole negativity contract.
pub fn church(n: u64) -> TermRef {
    let mut body = Term::var("x");
    for _ in 0..n {
        body = Term::app(Term::var("f"), body);
    }
    Term::lam("f", Term::lam("x", body))
}

/// Structural recogniser for terms of exactly the Church-numeral shape.
/// Returns the encoded number, or `None` for any other term.
pub fn decode_church(term: &TermRef) -> Option<u64> {
    let (fpar, inner) = match term.as_ref() {
        Term::Lam(fpar, inner) => (fpar, inner),
        _ => return None,
    };
    let (xpar, mut current) = match inner.as_ref() {
        Term::Lam(xpar, body) => (xpar, body),
        _ => return None,
    };

    let mut count = 0u64;
    loop {
        match current.as_ref() {
            Term::App(func, arg) => match func.as_ref() {
                Term::Var(name) if name == fpar => {
                    count += 1;
                    current = arg;
                }
                _ => return None,
            },
            Term::Var(name) if name == xpar => {
                // `λf.λf.f f` ends in the inner binder, not an n-fold
                // application of the outer one; only n = 0 survives a
                // shadowed binder.
                if count > 0 && fpar == xpar {
                    return None;
                }
                return Some(count);
            }
            _ => return None,
        }
    }
}

/// Rewrite every numeral-shaped subterm into a variable named by its
/// digits, e.g. `λf.λx.f (f x)` becomes `2`. Display-layer sugar only.
pub fn abstract_numerals(term: &TermRef) -> TermRef {
    if let Some(n) = decode_church(term) {
        return Term::var(n.to_string());
    }
    match term.as_ref() {
        Term::Var(_) => term.clone(),
        Term::Lam(param, body) => Term::lam(param.clone(), abstract_numerals(body)),
        Term::App(func, arg) => Term::app(abstract_numerals(func), abstract_numerals(arg)),
    }
}
