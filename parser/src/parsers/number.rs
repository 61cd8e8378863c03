use crate::ast::Expr;
use crate::error::{ParseError, ParseErrorKind};
use crate::Parser;

impl Parser {
  /// `NUMBER := decimal literal accepted by the standard C-style
  /// floating-point grammar; optionally followed by 'i'` (4.3). Consuming
  /// zero characters is a `BadNumber` error.
  pub(crate) fn parse_number(&mut self) -> Result<Expr, ParseError> {
    let start = self.cursor.position;

    while matches!(self.cursor.peek(), Some(c) if c.is_ascii_digit()) {
      self.cursor.advance();
    }

    if self.cursor.peek() == Some('.') && matches!(self.cursor.peek_next(), Some(c) if c.is_ascii_digit()) {
      self.cursor.advance();
      while matches!(self.cursor.peek(), Some(c) if c.is_ascii_digit()) {
        self.cursor.advance();
      }
    }

    if matches!(self.cursor.peek(), Some('e') | Some('E')) {
      let exponent_start = self.cursor.position;
      self.cursor.advance();
      if matches!(self.cursor.peek(), Some('+') | Some('-')) {
        self.cursor.advance();
      }
      if matches!(self.cursor.peek(), Some(c) if c.is_ascii_digit()) {
        while matches!(self.cursor.peek(), Some(c) if c.is_ascii_digit()) {
          self.cursor.advance();
        }
      } else {
        // "1e" with no digits following isn't a valid exponent; back off
        // and let the literal end before the 'e'.
        self.cursor.position = exponent_start;
      }
    }

    if self.cursor.position == start {
      return Err(ParseError::new(ParseErrorKind::BadNumber, start, 1));
    }

    let digits = self.cursor.source[start..self.cursor.position].to_string();
    let value: f64 = digits
      .parse()
      .map_err(|_| ParseError::new(ParseErrorKind::BadNumber, start, digits.len()))?;

    let mut literal = digits;
    if self.cursor.peek() == Some('i') {
      self.cursor.advance();
      literal.push('i');
    }

    Ok(Expr::number(literal, value))
  }
}

#[cfg(test)]
mod tests {
  use crate::Parser;

  fn number_literal(source: &str) -> String {
    let mut parser = Parser::new(source);
    match parser.parse_number().expect("should parse") {
      crate::ast::Expr::Number { literal, .. } => literal,
      other => panic!("expected a Number node, got {other:?}"),
    }
  }

  #[test]
  fn parses_plain_integers() {
    assert_eq!(number_literal("42"), "42");
  }

  #[test]
  fn parses_leading_dot_decimals() {
    assert_eq!(number_literal(".5"), ".5");
  }

  #[test]
  fn parses_exponents() {
    assert_eq!(number_literal("1e10"), "1e10");
    assert_eq!(number_literal("1.5e-3"), "1.5e-3");
  }

  #[test]
  fn stops_before_a_non_numeric_exponent_tail() {
    let mut parser = Parser::new("1e+x");
    let expr = parser.parse_number().expect("should parse");
    match expr {
      crate::ast::Expr::Number { literal, .. } => assert_eq!(literal, "1"),
      other => panic!("expected a Number node, got {other:?}"),
    }
  }

  #[test]
  fn records_a_trailing_imaginary_marker() {
    assert_eq!(number_literal("2i"), "2i");
  }

  #[test]
  fn empty_input_is_a_bad_number_error() {
    let mut parser = Parser::new("+");
    assert!(parser.parse_number().is_err());
  }
}
