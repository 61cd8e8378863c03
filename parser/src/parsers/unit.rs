use crate::ast::Expr;
use crate::error::{ParseError, ParseErrorKind};
use crate::table::lookup_function_by_keyword;
use crate::Parser;

impl Parser {
  /// `unit := '(' expr ')' | call`
  pub(crate) fn parse_unit(&mut self) -> Result<Expr, ParseError> {
    match self.cursor.peek() {
      Some('(') => {
        self.cursor.advance();
        let inner = self.parse_expr()?;
        if !self.cursor.eat(')') {
          return Err(ParseError::new(ParseErrorKind::UnclosedBracket, self.cursor.position, 1));
        }
        Ok(inner)
      },
      Some(c) if c.is_ascii_digit() => self.parse_number(),
      Some('.') if matches!(self.cursor.peek_next(), Some(c) if c.is_ascii_digit()) => self.parse_number(),
      Some(c) if c.is_ascii_alphabetic() => self.parse_call(),
      _ => Err(ParseError::new(ParseErrorKind::SyntaxError, self.cursor.position, 1)),
    }
  }

  /// `call := IDENT '(' expr ')' | IDENT | NUMBER`
  ///
  /// `NUMBER` is dispatched from `parse_unit` directly; this handles the
  /// two identifier-led alternatives.
  fn parse_call(&mut self) -> Result<Expr, ParseError> {
    let start = self.cursor.position;
    let ident = self.scan_identifier();

    if self.cursor.peek() == Some('(') {
      match lookup_function_by_keyword(&ident) {
        Some(code) => {
          self.cursor.advance();
          let arg = self.parse_expr()?;
          if !self.cursor.eat(')') {
            return Err(ParseError::new(ParseErrorKind::UnclosedBracket, self.cursor.position, 1));
          }
          Ok(Expr::call(code, arg))
        },
        None => Err(ParseError::new(ParseErrorKind::UnknownFunction, start, ident.len())),
      }
    } else {
      Ok(Expr::variable(ident))
    }
  }

  /// `IDENT := alpha (alpha | digit)*`
  fn scan_identifier(&mut self) -> String {
    let mut out = String::new();
    while let Some(c) = self.cursor.peek() {
      if c.is_ascii_alphanumeric() {
        out.push(c);
        self.cursor.advance();
      } else {
        break;
      }
    }
    out
  }
}
