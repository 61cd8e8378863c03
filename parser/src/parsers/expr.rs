use crate::ast::Expr;
use crate::error::ParseError;
use crate::table::OpCode;
use crate::Parser;

impl Parser {
  /// `expr := ['-'] term (('+' | '-') term)*`
  pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
    let mut lhs = if self.cursor.eat('-') {
      Expr::neg(self.parse_term()?)
    } else {
      self.parse_term()?
    };

    loop {
      match self.cursor.peek() {
        Some('+') => {
          self.cursor.advance();
          let rhs = self.parse_term()?;
          lhs = Expr::binary(OpCode::Add, lhs, rhs);
        },
        Some('-') => {
          self.cursor.advance();
          let rhs = self.parse_term()?;
          lhs = Expr::binary(OpCode::Sub, lhs, rhs);
        },
        _ => break,
      }
    }

    Ok(lhs)
  }
}
