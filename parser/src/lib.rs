//! Recursive-descent parser (component C) and its supporting modules: the
//! AST core (D), the operator/function catalogue (B) and the pretty-printer
//! (E). `lexer::normalize` is expected to have already run over `source`;
//! this crate re-reads the normalized character stream itself rather than
//! tokenizing it (4.1).

pub mod ast;
pub mod error;
pub mod printer;
pub mod table;

mod cursor;
mod parsers;

use ast::Ast;
use cursor::Cursor;
use error::{ParseError, ParseErrorKind};

pub use printer::print;

/// The parser's working state: the cursor over the normalized source plus
/// nothing else -- there is no token stream, no lookahead buffer beyond
/// what `Cursor::peek`/`peek_next` give directly.
pub struct Parser {
  cursor: Cursor,
}

impl Parser {
  pub fn new(source: impl Into<String>) -> Self {
    Self { cursor: Cursor::new(source) }
  }

  /// Parses the whole input as one `expr` production, then requires
  /// end-of-input; any leftover character is a `SyntaxError` at that
  /// position (4.3's "trailing garbage" contract).
  pub fn parse(&mut self) -> Result<Ast, ParseError> {
    let root = self.parse_expr()?;
    if !self.cursor.is_eof() {
      return Err(ParseError::new(ParseErrorKind::SyntaxError, self.cursor.position, 1));
    }
    Ok(Ast::new("expression", root))
  }
}

/// Normalizes nothing itself -- callers run `lexer::normalize` first -- and
/// parses `source` into a well-formed `Ast`, or a structured `ParseError`
/// pointing into it.
pub fn parse(source: &str) -> Result<Ast, ParseError> {
  Parser::new(source).parse()
}

#[cfg(test)]
mod tests {
  use super::*;
  use ast::Expr;
  use table::{FuncCode, OpCode};

  #[test]
  fn parses_a_simple_arithmetic_expression_with_correct_precedence() {
    let ast = parse("2+3*4").expect("should parse");
    assert_eq!(
      ast.root,
      Expr::binary(
        OpCode::Add,
        Expr::number("2", 2.0),
        Expr::binary(OpCode::Mul, Expr::number("3", 3.0), Expr::number("4", 4.0)),
      )
    );
  }

  #[test]
  fn power_is_right_associative() {
    let ast = parse("2^3^2").expect("should parse");
    assert_eq!(
      ast.root,
      Expr::binary(
        OpCode::Pow,
        Expr::number("2", 2.0),
        Expr::binary(OpCode::Pow, Expr::number("3", 3.0), Expr::number("2", 2.0)),
      )
    );
  }

  #[test]
  fn unary_minus_only_recognised_at_the_expr_level() {
    let ast = parse("-x+1").expect("should parse");
    assert_eq!(
      ast.root,
      Expr::binary(OpCode::Add, Expr::neg(Expr::variable("x")), Expr::number("1", 1.0))
    );
  }

  #[test]
  fn function_application_recognises_table_entries() {
    let ast = parse("sin(x)^2").expect("should parse");
    assert_eq!(
      ast.root,
      Expr::binary(OpCode::Pow, Expr::call(FuncCode::Sin, Expr::variable("x")), Expr::number("2", 2.0))
    );
  }

  #[test]
  fn unknown_function_name_is_reported_at_the_identifier_start() {
    let err = parse("frobnicate(x)").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnknownFunction);
    assert_eq!(err.position, 0);
    assert_eq!(err.span, "frobnicate".len());
  }

  #[test]
  fn unclosed_bracket_is_reported_at_the_missing_close_paren_position() {
    let err = parse("sin(2+3").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnclosedBracket);
  }

  #[test]
  fn dangling_operator_at_expr_boundary_is_a_syntax_error() {
    let err = parse("sin(").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::SyntaxError);
    assert_eq!(err.position, 4);
  }

  #[test]
  fn trailing_garbage_after_a_well_formed_expr_is_a_syntax_error() {
    let err = parse("2+3)").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::SyntaxError);
    assert_eq!(err.position, 3);
  }

  #[test]
  fn round_trip_parse_print_parse_is_structurally_stable() {
    for source in ["2+3*4", "sin(x)^2+cos(x)^2", "(a+b)*(a-b)", "x^y^z", "-x/2", "arctan(x)+1"] {
      let first = parse(source).expect("should parse");
      let printed = print(&first.root);
      let second = parse(&printed).unwrap_or_else(|e| panic!("reparsing {printed:?} failed: {e:?}"));
      assert_eq!(first.root, second.root, "source {source:?} printed as {printed:?}");
    }
  }
}
