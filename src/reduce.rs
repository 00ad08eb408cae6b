// src/reduce.rs
//
// The reduction engine: one-step normal-order reduction (β plus δ over
// the primitive table) and the driver loop that produces a trace.

use std::fmt;

use crate::ast::{Term, TermRef};
use crate::defs::Defs;
use crate::vars::subst;

/// Which rule produced a reduction step. `None` tags the final trace
/// entry, where no rule applies any more (or the step budget ran out).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Beta,
    Delta,
    None,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Beta => write!(f, "β"),
            RuleKind::Delta => write!(f, "δ"),
            RuleKind::None => Ok(()),
        }
    }
}

/// One trace entry: a term and the rule that was applied to leave it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub term: TermRef,
    pub rule: RuleKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NormalForm,
    LimitExceeded,
}

/// The full record of one `normalize` run. `steps` always ends with a
/// `RuleKind::None` entry holding the final (or cut-off) term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub steps: Vec<Step>,
    pub outcome: Outcome,
}

impl Trace {
    pub fn final_term(&self) -> &TermRef {
        &self.steps.last().expect("a trace holds at least its input term").term
    }

    /// Number of reductions actually performed.
    pub fn reductions(&self) -> usize {
        self.steps.len() - 1
    }
}

// Where a subterm sits inside its parent, carrying the siblings needed to
// rebuild the parent around a reduced child.
enum PathFrame {
    AppFunc(TermRef),
    AppArg(TermRef),
    LamBody(String),
}

fn rebuild(mut term: TermRef, path: &[PathFrame]) -> TermRef {
    for frame in path.iter().rev() {
        term = match frame {
            PathFrame::AppFunc(arg) => Term::app(term, arg.clone()),
            PathFrame::AppArg(func) => Term::app(func.clone(), term),
            PathFrame::LamBody(param) => Term::lam(param.clone(), term),
        };
    }
    term
}

fn clone_path(path: &[PathFrame]) -> Vec<PathFrame> {
    path.iter()
        .map(|frame| match frame {
            PathFrame::AppFunc(arg) => PathFrame::AppFunc(arg.clone()),
            PathFrame::AppArg(func) => PathFrame::AppArg(func.clone()),
            PathFrame::LamBody(param) => PathFrame::LamBody(param.clone()),
        })
        .collect()
}

/// Perform exactly one normal-order reduction step, or return `None` if
/// the term is already in normal form.
///
/// The leftmost-outermost redex wins: each node is tried before its
/// children, and an application's function side before its argument. At
/// an application whose head is an abstraction the step is β; at a
/// variable naming a primitive the step is δ (the name unfolds into its
/// definition; any β it enables is a later, separately traced step).
///
/// The search uses an explicit stack of (subterm, path-to-root) pairs so
/// that term depth never translates into call-stack depth.
pub fn reduce_once(term: &TermRef, defs: &Defs) -> Option<(TermRef, RuleKind)> {
    let mut stack: Vec<(TermRef, Vec<PathFrame>)> = vec![(term.clone(), Vec::new())];

    while let Some((expr, path)) = stack.pop() {
        let fired = match expr.as_ref() {
            Term::App(func, arg) => match func.as_ref() {
                Term::Lam(param, body) => Some((subst(body, param, arg), RuleKind::Beta)),
                _ => None,
            },
            Term::Var(name) => defs.get(name).map(|def| (def.clone(), RuleKind::Delta)),
            Term::Lam(_, _) => None,
        };
        if let Some((reduced, rule)) = fired {
            return Some((rebuild(reduced, &path), rule));
        }

        match expr.as_ref() {
            Term::App(func, arg) => {
                // func is pushed last so it pops (and reduces) first
                let mut arg_path = clone_path(&path);
                arg_path.push(PathFrame::AppArg(func.clone()));
                stack.push((arg.clone(), arg_path));

                let mut func_path = path;
                func_path.push(PathFrame::AppFunc(arg.clone()));
                stack.push((func.clone(), func_path));
            }
            Term::Lam(param, body) => {
                let mut body_path = path;
                body_path.push(PathFrame::LamBody(param.clone()));
                stack.push((body.clone(), body_path));
            }
            Term::Var(_) => {}
        }
    }

    None
}

/// Drive `reduce_once` until normal form or until `max_steps` reductions
/// have been performed. Hitting the limit is an expected outcome, not an
/// error: the partial trace is still returned.
pub fn normalize(term: &TermRef, defs: &Defs, max_steps: usize) -> Trace {
    let mut steps = Vec::new();
    let mut current = term.clone();

    for _ in 0..max_steps {
        match reduce_once(&current, defs) {
            Some((next, rule)) => {
                steps.push(Step { term: current, rule });
                current = next;
            }
            None => {
                steps.push(Step { term: current, rule: RuleKind::None });
                return Trace { steps, outcome: Outcome::NormalForm };
            }
        }
    }

    // Budget exhausted. One more probe tells a term that landed exactly
    // on its normal form apart from a genuine cutoff.
    let outcome = if reduce_once(&current, defs).is_none() {
        Outcome::NormalForm
    } else {
        Outcome::LimitExceeded
    };
    steps.push(Step { term: current, rule: RuleKind::None });
    Trace { steps, outcome }
}
