// tests/reduction_tests.rs

use delta_lambda::{
    decode_church, free_vars, normalize, parse, reduce_once, Outcome, RuleKind, TermRef, DEFS,
};

fn t(input: &str) -> TermRef {
    parse(input).unwrap()
}

fn norm(input: &str) -> delta_lambda::Trace {
    normalize(&t(input), &DEFS, 100_000)
}

#[test]
fn arithmetic_scenarios() {
    assert_eq!(decode_church(norm("+ 2 2").final_term()), Some(4));
    assert_eq!(decode_church(norm("* 2 3").final_term()), Some(6));
    assert_eq!(norm("is0 0").final_term(), &t("λx.λy.x"));
}

#[test]
fn comparison_chain() {
    assert_eq!(norm("≤ 0 0").final_term(), &t("λx.λy.x"));
    assert_eq!(norm("≤ 2 3").final_term(), &t("λx.λy.x"));
    assert_eq!(norm("≤ 4 1").final_term(), &t("λx.λy.y"));
}

#[test]
fn pair_projections_compose_with_arithmetic() {
    assert_eq!(decode_church(norm("fst (pair (+ 1 1) 0)").final_term()), Some(2));
    assert_eq!(decode_church(norm("snd (pair 0 (* 2 2))").final_term()), Some(4));
}

#[test]
fn traces_are_deterministic() {
    for input in ["* 2 3", "¬ (∧ ⊤ ⊥)", "(λx.x x) (λy.y)"] {
        assert_eq!(norm(input), norm(input));
    }
}

#[test]
fn trace_rules_match_step_kinds() {
    // Unfolding a primitive is a δ step of its own; the β it enables is
    // traced separately.
    let trace = norm("is0 0");
    assert_eq!(trace.steps[0].rule, RuleKind::Delta);
    assert!(trace
        .steps
        .iter()
        .rev()
        .skip(1)
        .all(|s| s.rule != RuleKind::None));
    assert_eq!(trace.steps.last().unwrap().rule, RuleKind::None);
}

#[test]
fn omega_stops_exactly_at_limit() {
    let omega = t("(λx.x x) (λx.x x)");
    for limit in [1, 10, 100] {
        let trace = normalize(&omega, &DEFS, limit);
        assert_eq!(trace.outcome, Outcome::LimitExceeded);
        assert_eq!(trace.reductions(), limit);
    }
}

#[test]
fn partial_trace_is_still_useful() {
    // Cutting off a converging reduction still yields the in-progress
    // term, which a later call can pick up and finish.
    let cut = normalize(&t("* 2 3"), &DEFS, 3);
    assert_eq!(cut.outcome, Outcome::LimitExceeded);
    let resumed = normalize(cut.final_term(), &DEFS, 100_000);
    assert_eq!(resumed.outcome, Outcome::NormalForm);
    assert_eq!(decode_church(resumed.final_term()), Some(6));
}

#[test]
fn normal_form_has_no_redex_anywhere() {
    for input in ["* 2 3", "¬ ⊤", "fst (pair 1 2)"] {
        let final_term = norm(input).final_term().clone();
        assert!(reduce_once(&final_term, &DEFS).is_none());
    }
}

#[test]
fn capture_avoidance_in_full_reductions() {
    // (λx.λy.x y) y: substituting y under λy must rename the binder,
    // keeping the outer y free in the result.
    let trace = norm("(λx.λy.x y) y");
    let result = trace.final_term();
    assert!(free_vars(result).contains("y"));
    assert_eq!(result, &t("λy1.y y1"));
}

#[test]
fn alpha_equivalent_inputs_reduce_consistently() {
    assert_eq!(norm("(λx.x) (λy.y)").final_term(), &t("λy.y"));
    assert_eq!(norm("(λa.a) (λb.b)").final_term(), &t("λb.b"));
    // Same number of steps either way
    assert_eq!(
        norm("(λx.x) (λy.y)").reductions(),
        norm("(λa.a) (λb.b)").reductions()
    );
}
