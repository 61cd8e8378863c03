//! Structural invariant checker backing the `Tree*` row of the error
//! taxonomy (§7): "printer/visitor sees a Function node with a left child
//! or missing right child" and "binary Operator missing its right child
//! (or its left on a non-unary `-`)".
//!
//! `Expr`'s shape already makes most of that unreachable by construction:
//! a `Function` variant has no `left` field to be non-null, and a
//! `Number`/`Variable` leaf has no child fields at all, so
//! `TreeFunctionArgCount` and `TreeLeafNonNull` can never actually fire
//! against this representation -- the type system discharges them, per
//! `SPEC_FULL.md`'s open-question resolution. The one invariant the type
//! system does *not* rule out is an `Operator`'s `left` being `None` for a
//! code other than `Sub`; `validate` is the runtime check for that case,
//! meant to run over a differentiator/simplifier output before it's
//! handed to the printer.

use parser::ast::Expr;
use parser::table::OpCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
  OperatorArgCount,
}

impl From<TreeError> for diagnostic::DiagnosticError {
  fn from(error: TreeError) -> Self {
    match error {
      TreeError::OperatorArgCount => diagnostic::DiagnosticError::TreeOperatorArgCount,
    }
  }
}

/// Walks `expr`, failing as soon as a non-`Sub` `Operator` with no left
/// child is found.
pub fn validate(expr: &Expr) -> Result<(), TreeError> {
  match expr {
    Expr::Number { .. } | Expr::Variable { .. } => Ok(()),
    Expr::Function { arg, .. } => validate(arg),
    Expr::Operator { code, left, right } => {
      match left {
        Some(left) => validate(left)?,
        None if *code == OpCode::Sub => {},
        None => return Err(TreeError::OperatorArgCount),
      }
      validate(right)
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use parser::ast::Expr as E;

  #[test]
  fn a_well_formed_tree_from_the_parser_always_validates() {
    for source in ["2+3*4", "-x/2", "sin(x)^2+cos(x)^2", "arctan(x)+1"] {
      let ast = parser::parse(source).expect("should parse");
      assert!(validate(&ast.root).is_ok());
    }
  }

  #[test]
  fn a_non_sub_operator_missing_its_left_child_is_rejected() {
    let malformed = E::Operator { code: OpCode::Add, left: None, right: Box::new(E::number("1", 1.0)) };
    assert_eq!(validate(&malformed), Err(TreeError::OperatorArgCount));
  }

  #[test]
  fn unary_minus_with_no_left_child_is_valid() {
    assert!(validate(&E::neg(E::variable("x"))).is_ok());
  }

  #[test]
  fn the_violation_is_found_even_when_nested_deep_in_the_tree() {
    let malformed = E::call(
      parser::table::FuncCode::Sin,
      E::Operator { code: OpCode::Mul, left: None, right: Box::new(E::number("1", 1.0)) },
    );
    assert_eq!(validate(&malformed), Err(TreeError::OperatorArgCount));
  }
}
