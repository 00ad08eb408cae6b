// src/parser.rs

use crate::ast::{Term, TermRef};
use crate::church::church;
use crate::error::{ParseError, ParseErrorKind};

/// Characters that can never appear inside a variable name.
fn is_name_break(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | '.' | 'λ' | '\\')
}

// --- The Parser ---
pub struct Parser {
    input: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        Parser {
            input: input.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) {
        if let Some(c) = self.current_char() {
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
            self.pos += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError { kind, line: self.line, col: self.col }
    }

    pub fn parse(&mut self) -> Result<TermRef, ParseError> {
        let term = self.parse_expr()?;
        self.skip_whitespace();
        if let Some(c) = self.current_char() {
            Err(self.error(ParseErrorKind::UnexpectedChar(c)))
        } else {
            Ok(term)
        }
    }

    fn parse_expr(&mut self) -> Result<TermRef, ParseError> {
        self.skip_whitespace();
        match self.current_char() {
            Some('λ') | Some('\\') => self.parse_lambda(),
            _ => self.parse_application(),
        }
    }

    fn parse_lambda(&mut self) -> Result<TermRef, ParseError> {
        self.advance(); // consume 'λ' or '\'
        self.skip_whitespace();
        let param = self.parse_varname()?;
        self.skip_whitespace();
        if self.current_char() != Some('.') {
            return Err(self.error(ParseErrorKind::InvalidSyntax(
                "Expected '.' after λ parameter".to_string(),
            )));
        }
        self.advance(); // consume '.'
        let body = self.parse_expr()?;
        Ok(Term::lam(param, body))
    }

    // One or more atoms in juxtaposition, folded into left-nested
    // applications. A '.' or ')' ends the sequence so that abstraction
    // bodies and groups close correctly.
    fn parse_application(&mut self) -> Result<TermRef, ParseError> {
        self.skip_whitespace();
        let mut expr = self.parse_atom()?;
        loop {
            self.skip_whitespace();
            match self.current_char() {
                None | Some(')') | Some('.') => break,
                Some(_) => {
                    let arg = self.parse_atom()?;
                    expr = Term::app(expr, arg);
                }
            }
        }
        Ok(expr)
    }

    fn parse_atom(&mut self) -> Result<TermRef, ParseError> {
        self.skip_whitespace();
        match self.current_char() {
            Some('(') => {
                self.advance();
                let expr = self.parse_expr()?;
                self.skip_whitespace();
                if self.current_char() != Some(')') {
                    return Err(self.error(ParseErrorKind::InvalidSyntax(
                        "Expected ')'".to_string(),
                    )));
                }
                self.advance();
                Ok(expr)
            }
            Some('λ') | Some('\\') => self.parse_lambda(),
            Some(c) if c.is_ascii_digit() => self.parse_number(),
            Some(_) => Ok(Term::var(self.parse_varname()?)),
            None => Err(self.error(ParseErrorKind::UnexpectedEnd)),
        }
    }

    // Decimal literals become Church numerals right here; there is no
    // integer form of Term. Negative literals do not exist in the
    // grammar ('-' on its own is the subtraction primitive's name).
    fn parse_number(&mut self) -> Result<TermRef, ParseError> {
        let start_line = self.line;
        let start_col = self.col;
        let mut digits = String::new();
        while let Some(c) = self.current_char() {
            if c.is_ascii_digit() {
                digits.push(c);
                self.advance();
            } else {
                break;
            }
        }
        match digits.parse::<u64>() {
            Ok(n) => Ok(church(n)),
            Err(_) => Err(ParseError {
                kind: ParseErrorKind::InvalidNumber(digits),
                line: start_line,
                col: start_col,
            }),
        }
    }

    fn parse_varname(&mut self) -> Result<String, ParseError> {
        let mut name = String::new();
        while let Some(c) = self.current_char() {
            if is_name_break(c) {
                break;
            }
            name.push(c);
            self.advance();
        }
        if name.is_empty() {
            match self.current_char() {
                Some(c) => Err(self.error(ParseErrorKind::UnexpectedChar(c))),
                None => Err(self.error(ParseErrorKind::UnexpectedEnd)),
            }
        } else {
            Ok(name)
        }
    }
}

// Convenience function for parsing
pub fn parse(input: &str) -> Result<TermRef, ParseError> {
    Parser::new(input).parse()
}
