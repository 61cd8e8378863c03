use crate::ast::Expr;
use crate::error::ParseError;
use crate::table::OpCode;
use crate::Parser;

impl Parser {
  /// `factor := unit ('^' factor)?` -- right-associative, hence the
  /// recursive call back into `parse_factor` rather than `parse_unit` on
  /// the exponent side.
  pub(crate) fn parse_factor(&mut self) -> Result<Expr, ParseError> {
    let base = self.parse_unit()?;

    if self.cursor.eat('^') {
      let exponent = self.parse_factor()?;
      Ok(Expr::binary(OpCode::Pow, base, exponent))
    } else {
      Ok(base)
    }
  }
}
