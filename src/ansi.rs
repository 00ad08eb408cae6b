// src/ansi.rs

/// Control Sequence Introducer shared by every code we emit.
pub const ESC: &str = "\x1b[";
pub const RESET: &str = "\x1b[0m";
/// Reverse video, used to mark the changed part of a step.
pub const HIGHLIGHT: &str = "\x1b[7m";

/// 24-bit foreground color code.
pub fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("{}38;2;{};{};{}m", ESC, r, g, b)
}

/// Remove ANSI escape sequences, leaving only printable text.
pub fn strip_ansi(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // skip to the terminating 'm' of the sequence
            for esc in chars.by_ref() {
                if esc == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}
