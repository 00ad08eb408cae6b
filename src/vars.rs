// src/vars.rs
//
// Variable bookkeeping: free-variable analysis, fresh-name generation,
// and capture-avoiding substitution. Substitution is the one
// correctness-critical algorithm in the crate; everything the reduction
// engine does reduces to calls into this module.

use std::collections::HashSet;

use crate::ast::{Term, TermRef};

/// Set of variable names occurring free in `term`.
///
/// Walks the term with an explicit work stack so that deeply nested input
/// cannot overflow the call stack.
pub fn free_vars(term: &TermRef) -> HashSet<String> {
    let mut result = HashSet::new();
    let mut stack: Vec<(&TermRef, Vec<&str>)> = vec![(term, Vec::new())];

    while let Some((expr, bound)) = stack.pop() {
        match expr.as_ref() {
            Term::Var(name) => {
                if !bound.iter().any(|b| *b == name.as_str()) {
                    result.insert(name.clone());
                }
            }
            Term::Lam(param, body) => {
                let mut inner = bound.clone();
                inner.push(param.as_str());
                stack.push((body, inner));
            }
            Term::App(func, arg) => {
                stack.push((func, bound.clone()));
                stack.push((arg, bound));
            }
        }
    }

    result
}

/// Smallest name of the form `base`, `base1`, `base2`, ... not present in
/// `avoid`. Purely deterministic, so reduction traces are reproducible.
pub fn fresh_var(base: &str, avoid: &HashSet<String>) -> String {
    if !avoid.contains(base) {
        return base.to_string();
    }
    let mut i = 1u64;
    loop {
        let candidate = format!("{}{}", base, i);
        if !avoid.contains(&candidate) {
            return candidate;
        }
        i += 1;
    }
}

/// Replace every free occurrence of `target` in `term` with `replacement`,
/// α-renaming binders lazily whenever a free variable of `replacement`
/// would otherwise be captured.
pub fn subst(term: &TermRef, target: &str, replacement: &TermRef) -> TermRef {
    match term.as_ref() {
        Term::Var(name) => {
            if name == target {
                replacement.clone()
            } else {
                term.clone()
            }
        }
        Term::App(func, arg) => Term::app(
            subst(func, target, replacement),
            subst(arg, target, replacement),
        ),
        Term::Lam(param, body) => {
            if param == target {
                // target is shadowed; nothing below is free
                term.clone()
            } else if !free_vars(replacement).contains(param) {
                Term::lam(param.clone(), subst(body, target, replacement))
            } else {
                // The binder would capture a free variable of the
                // replacement: rename it first, then substitute.
                let mut avoid = free_vars(body);
                avoid.extend(free_vars(replacement));
                avoid.insert(param.clone());
                avoid.insert(target.to_string());
                let renamed = fresh_var(param, &avoid);
                let renamed_body = subst(body, param, &Term::var(renamed.clone()));
                Term::lam(renamed, subst(&renamed_body, target, replacement))
            }
        }
    }
}
