// src/ast.rs

use std::fmt;
use std::sync::Arc;

/// Shared handle to an immutable term. Reduction never mutates a term in
/// place, so unchanged subtrees are reused across steps via cheap clones,
/// and the primitive table can be shared across threads.
pub type TermRef = Arc<Term>;

// AST Definition
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Var(String),
    Lam(String, TermRef),
    App(TermRef, TermRef),
}

impl Term {
    pub fn var(name: impl Into<String>) -> TermRef {
        Arc::new(Term::Var(name.into()))
    }

    /// Build an abstraction. An empty binder name is a contract violation
    /// (the parser cannot produce one), so fail fast.
    pub fn lam(param: impl Into<String>, body: TermRef) -> TermRef {
        let param = param.into();
        assert!(!param.is_empty(), "abstraction with empty parameter name");
        Arc::new(Term::Lam(param, body))
    }

    pub fn app(func: TermRef, arg: TermRef) -> TermRef {
        Arc::new(Term::App(func, arg))
    }

    pub fn is_lam(&self) -> bool {
        matches!(self, Term::Lam(_, _))
    }
}

// Minimal parenthesisation: abstraction bodies are wrapped only when they
// are themselves abstractions, application heads when they are
// abstractions, and application arguments when they are compound.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(name) => write!(f, "{}", name),
            Term::Lam(param, body) => {
                if body.is_lam() {
                    write!(f, "λ{}.({})", param, body)
                } else {
                    write!(f, "λ{}.{}", param, body)
                }
            }
            Term::App(func, arg) => {
                if func.is_lam() {
                    write!(f, "({}) ", func)?;
                } else {
                    write!(f, "{} ", func)?;
                }
                match arg.as_ref() {
                    Term::Var(_) => write!(f, "{}", arg),
                    _ => write!(f, "({})", arg),
                }
            }
        }
    }
}
