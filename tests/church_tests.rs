// tests/church_tests.rs

use delta_lambda::{
    abstract_numerals, church, decode_church, normalize, parse, Outcome, Term, DEFS,
};

fn nf(input: &str) -> delta_lambda::TermRef {
    let term = parse(input).unwrap();
    normalize(&term, &DEFS, 100_000).final_term().clone()
}

#[test]
fn church_round_trip_up_to_200() {
    // A numeral is already in normal form, so normalize must hand it
    // back untouched and decoding must invert the encoding.
    for n in 0..=200 {
        let trace = normalize(&church(n), &DEFS, 10);
        assert_eq!(trace.outcome, Outcome::NormalForm);
        assert_eq!(trace.reductions(), 0);
        assert_eq!(decode_church(trace.final_term()), Some(n));
    }
}

#[test]
fn numeral_literals_in_source() {
    assert_eq!(parse("0").unwrap(), church(0));
    assert_eq!(parse("17").unwrap(), church(17));
    assert_eq!(decode_church(&parse("42").unwrap()), Some(42));
}

#[test]
fn computed_numerals_decode() {
    assert_eq!(decode_church(&nf("+ 3 4")), Some(7));
    assert_eq!(decode_church(&nf("* 3 3")), Some(9));
    assert_eq!(decode_church(&nf("* 2 (+ 1 2)")), Some(6));
    assert_eq!(decode_church(&nf("- (* 2 4) 3")), Some(5));
}

#[test]
fn abstract_numerals_rewrites_subterms() {
    // pair 2 3 normalizes to λf.f 2 3 with the numerals in Church form;
    // abstraction re-presents them as digits without touching the rest.
    let result = abstract_numerals(&nf("pair 2 3"));
    assert_eq!(result.to_string(), "λf.f 2 3");

    // Non-numeral subterms are left alone.
    let untouched = parse("λz.z y").unwrap();
    assert_eq!(abstract_numerals(&untouched), untouched);
}

#[test]
fn abstract_numerals_handles_zero() {
    assert_eq!(abstract_numerals(&church(0)), Term::var("0"));
    assert_eq!(abstract_numerals(&nf("* 5 0")), Term::var("0"));
}
