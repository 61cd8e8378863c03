use crate::ast::Expr;
use crate::error::ParseError;
use crate::table::OpCode;
use crate::Parser;

impl Parser {
  /// `term := factor (('*' | '/') factor)*`
  pub(crate) fn parse_term(&mut self) -> Result<Expr, ParseError> {
    let mut lhs = self.parse_factor()?;

    loop {
      match self.cursor.peek() {
        Some('*') => {
          self.cursor.advance();
          let rhs = self.parse_factor()?;
          lhs = Expr::binary(OpCode::Mul, lhs, rhs);
        },
        Some('/') => {
          self.cursor.advance();
          let rhs = self.parse_factor()?;
          lhs = Expr::binary(OpCode::Div, lhs, rhs);
        },
        _ => break,
      }
    }

    Ok(lhs)
  }
}
