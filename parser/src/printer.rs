//! Pretty-printer (component E): AST -> text with the minimum number of
//! parentheses consistent with precedence (4.4).

use crate::ast::Expr;
use crate::table::{function_spelling, FuncCode, OpCode};

/// Renders `expr` back to the grammar of 4.3, inserting parentheses around
/// a child only where one of 4.4's two rules applies.
pub fn print(expr: &Expr) -> String {
  print_child(expr, None)
}

/// Which side of a binary `Operator` a child is being printed as; the
/// left/right distinction matters only for the third rule below.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
  Root,
  Left,
  Right,
}

/// `parent` is `None` at the root and `Some(code)` when printing an operand
/// of an `Operator` parent, so the precedence rules can be applied locally
/// without look-ahead into the grandparent.
fn print_child(expr: &Expr, parent: Option<OpCode>) -> String {
  print_side(expr, parent, Side::Root)
}

fn print_side(expr: &Expr, parent: Option<OpCode>, side: Side) -> String {
  match expr {
    // A folded constant can carry a negative literal directly (4.6's
    // constant-folding rule), unlike a parsed negative number, which is
    // always a unary-minus `Operator` wrapping a positive literal (4.3).
    // Printed text can't tell the two apart, so a negative literal needs
    // the same position-aware wrapping a unary-minus operator gets, or a
    // reparse would read its leading `-` as part of the surrounding
    // operator chain instead of the literal.
    Expr::Number { literal, .. } if literal.starts_with('-') => match parent {
      Some(parent_code) if leading_minus_unsafe(parent_code, side) => format!("({literal})"),
      _ => literal.clone(),
    },
    Expr::Number { literal, .. } => literal.clone(),
    Expr::Variable { name } => name.clone(),
    Expr::Function { code, arg } => {
      format!("{}({})", function_spelling(*code), print_side(arg, None, Side::Root))
    },
    Expr::Operator { code, left, right } => {
      let right_text = print_side(right, Some(*code), Side::Right);
      let body = match left {
        Some(left) => format!("{}{}{}", print_side(left, Some(*code), Side::Left), code.spelling(), right_text),
        None => format!("{}{}", code.spelling(), right_text),
      };
      match parent {
        Some(parent_code) if needs_parens(parent_code, *code, side) => format!("({body})"),
        _ => body,
      }
    },
  }
}

/// Rule 1: `*`/`/` parent around a `+`/`-` child. Rule 2: `^` parent around
/// any operator child other than `^` (the right-associative exponent chain
/// reads bare; only a lower-precedence left operand needs wrapping).
///
/// Rule 3 (not in 4.4's enumerated pair, but required for the round-trip
/// property of 8: `+`/`-` is left-associative and `-` doesn't commute, so a
/// `+`/`-` coded child on the *right* of a `+`/`-` parent must be wrapped --
/// otherwise `a-(b+c)` and `a-b-c` print identically and a reparse merges
/// them into the wrong tree. A unary minus shares its parent `-`'s code, so
/// this rule also covers the `-(-x)` case the differentiator can produce
/// (4.5's `cot`/`coth` rules negate an already-negated derivative).
///
/// The same associativity problem exists one precedence level up: `*`/`/`
/// is also left-associative and `/` doesn't commute, so a `*`/`/` coded
/// child on the *right* of a `*`/`/` parent needs the identical wrapping --
/// `a/(b*c)` and `a/b*c` would otherwise print identically and reparse to
/// the wrong (left-associative) tree.
fn needs_parens(parent: OpCode, child: OpCode, side: Side) -> bool {
  match parent {
    OpCode::Mul | OpCode::Div if side == Side::Right => {
      matches!(child, OpCode::Add | OpCode::Sub | OpCode::Mul | OpCode::Div)
    },
    OpCode::Mul | OpCode::Div => matches!(child, OpCode::Add | OpCode::Sub),
    OpCode::Pow => !matches!(child, OpCode::Pow),
    OpCode::Add | OpCode::Sub if side == Side::Right => matches!(child, OpCode::Add | OpCode::Sub),
    _ => false,
  }
}

/// Whether a bare leading `-` is unsafe to print at this position: unsafe
/// anywhere to the right of an operator (a `-` there reads as part of the
/// operator, not a fresh unary minus), and on the left only under `*`/`/`/`^`
/// (inside a `term`/`factor` production, which -- unlike `expr` -- never
/// accepts a leading `-`). The left operand of `+`/`-` is always safe: the
/// grammar's optional leading `-` at the start of `expr` applies to exactly
/// the first `term`, so a left-associated chain of `+`/`-` stays correct
/// without parentheses as long as nothing is printed before it.
fn leading_minus_unsafe(parent: OpCode, side: Side) -> bool {
  match (parent, side) {
    (OpCode::Add | OpCode::Sub, Side::Left) => false,
    _ => true,
  }
}
