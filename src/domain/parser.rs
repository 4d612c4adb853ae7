//! Parser for the bracket notation written by [`Mobile::pretty`]
//!
//! ```text
//! mobile    := simple | composite
//! simple    := '(' number ')'
//! composite := '[' mobile ',' number ',' mobile ',' number ']'
//! ```
//!
//! Composites list the right side first, matching the printed form.

use std::str::FromStr;

use tracing::{instrument, trace};

use crate::domain::{DomainError, DomainResult, Mobile};

#[instrument(level = "debug")]
pub fn parse_mobile(input: &str) -> DomainResult<Mobile> {
    let mut parser = Parser::new(input);
    let mobile = parser.mobile()?;
    parser.skip_ws();
    if let Some(c) = parser.peek() {
        return Err(DomainError::parse(
            parser.pos,
            format!("unexpected '{}' after mobile", c),
        ));
    }
    Ok(mobile)
}

impl FromStr for Mobile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mobile(s)
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn expect(&mut self, expected: char) -> DomainResult<()> {
        self.skip_ws();
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(c) => Err(DomainError::parse(
                self.pos,
                format!("expected '{}', found '{}'", expected, c),
            )),
            None => Err(DomainError::parse(
                self.pos,
                format!("expected '{}', found end of input", expected),
            )),
        }
    }

    fn mobile(&mut self) -> DomainResult<Mobile> {
        self.skip_ws();
        match self.peek() {
            Some('(') => self.simple(),
            Some('[') => self.composite(),
            Some(c) => Err(DomainError::parse(
                self.pos,
                format!("expected '(' or '[', found '{}'", c),
            )),
            None => Err(DomainError::parse(self.pos, "empty mobile")),
        }
    }

    fn simple(&mut self) -> DomainResult<Mobile> {
        self.expect('(')?;
        let weight = self.number()?;
        self.expect(')')?;
        trace!(weight, "simple");
        Ok(Mobile::simple(weight))
    }

    fn composite(&mut self) -> DomainResult<Mobile> {
        self.expect('[')?;
        let right = self.child("right")?;
        self.expect(',')?;
        let right_length = self.number()?;
        self.expect(',')?;
        let left = self.child("left")?;
        self.expect(',')?;
        let left_length = self.number()?;
        self.expect(']')?;
        trace!(left_length, right_length, "composite");
        Ok(Mobile::composite(left, left_length, right, right_length))
    }

    /// A composite must hang something on both arms.
    fn child(&mut self, side: &str) -> DomainResult<Mobile> {
        self.skip_ws();
        match self.peek() {
            Some(',') | Some(']') | None => Err(DomainError::InvalidArgument(format!(
                "composite at {} is missing its {} child",
                self.pos, side
            ))),
            _ => self.mobile(),
        }
    }

    fn number(&mut self) -> DomainResult<f32> {
        self.skip_ws();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')) {
                break;
            }
            self.pos += 1;
        }
        let text = &self.input[start..self.pos];
        if text.is_empty() {
            return Err(DomainError::parse(start, "expected a number"));
        }
        text.parse::<f32>()
            .map_err(|e| DomainError::parse(start, format!("invalid number '{}': {}", text, e)))
    }
}
