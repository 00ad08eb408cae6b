// src/printer.rs
//
// Display layer for already-computed terms: compact spacing, paren
// coloring by nesting depth, and diff highlighting between consecutive
// steps. Strictly downstream of the engine; nothing here feeds back into
// reduction.

use crate::ansi::{rgb, HIGHLIGHT, RESET};
use crate::ast::TermRef;

#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
    /// Drop all spaces in printed terms.
    pub compact: bool,
    /// Color parentheses by nesting level.
    pub color_parens: bool,
    /// Highlight the subterm that changed since the previous step.
    pub color_diff: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            compact: true,
            color_parens: true,
            color_diff: false,
        }
    }
}

/// Uncolored rendering, with compact spacing applied.
pub fn plain_expr(term: &TermRef, opts: &PrintOptions) -> String {
    let s = term.to_string();
    if opts.compact {
        s.replace(' ', "")
    } else {
        s
    }
}

/// Full rendering with paren coloring when enabled.
pub fn format_expr(term: &TermRef, opts: &PrintOptions) -> String {
    let s = plain_expr(term, opts);
    if opts.color_parens {
        color_parens(&s)
    } else {
        s
    }
}

// Teal at the outermost level shading to cyan at the deepest.
fn paren_color(depth: usize, max_depth: usize) -> String {
    let ratio = if max_depth > 1 {
        (depth - 1) as f64 / (max_depth - 1) as f64
    } else {
        0.0
    };
    let g = (128.0 * (1.0 - ratio) + 255.0 * ratio) as u8;
    let b = (128.0 * (1.0 - ratio) + 255.0 * ratio) as u8;
    rgb(0, g, b)
}

/// Color each paren by its nesting level.
pub fn color_parens(s: &str) -> String {
    let mut max_depth = 0usize;
    let mut depth = 0usize;
    for c in s.chars() {
        match c {
            '(' => {
                depth += 1;
                max_depth = max_depth.max(depth);
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    let mut result = String::with_capacity(s.len());
    depth = 0;
    for c in s.chars() {
        match c {
            '(' => {
                depth += 1;
                result.push_str(&paren_color(depth, max_depth));
                result.push(c);
                result.push_str(RESET);
            }
            ')' => {
                result.push_str(&paren_color(depth, max_depth));
                result.push(c);
                result.push_str(RESET);
                depth = depth.saturating_sub(1);
            }
            _ => result.push(c),
        }
    }
    result
}

/// Wrap the region of `new` that differs from `old` in a reverse-video
/// highlight. Both inputs must be plain (uncolored) strings.
pub fn highlight_diff(old: &str, new: &str) -> String {
    let old_chars: Vec<char> = old.chars().collect();
    let new_chars: Vec<char> = new.chars().collect();
    let limit = old_chars.len().min(new_chars.len());

    let prefix = (0..limit)
        .find(|&i| old_chars[i] != new_chars[i])
        .unwrap_or(limit);
    let suffix = (0..limit - prefix)
        .find(|&k| old_chars[old_chars.len() - 1 - k] != new_chars[new_chars.len() - 1 - k])
        .unwrap_or(limit - prefix);

    let head: String = new_chars[..prefix].iter().collect();
    let mid: String = new_chars[prefix..new_chars.len() - suffix].iter().collect();
    let tail: String = new_chars[new_chars.len() - suffix..].iter().collect();
    if mid.is_empty() {
        return new.to_string();
    }
    format!("{}{}{}{}{}", head, HIGHLIGHT, mid, RESET, tail)
}
