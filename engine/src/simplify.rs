//! Algebraic simplifier (component H): a fixed-point loop of local
//! rewrites over `Operator` nodes (4.6). Each pass folds bottom-up and
//! reports whether any rewrite fired; the outer loop keeps passing until
//! one reports no change, which is the fixed point 4.6 describes as
//! "walk; on the first rewrite, restart; stop when a full walk changes
//! nothing." Folding bottom-up in one pass rather than literally restarting
//! at the root after every single rewrite reaches the same fixed point
//! (the rule set is confluent on this representation) in fewer passes.

use parser::ast::Expr;
use parser::literal;
use parser::table::OpCode;

/// Repeatedly rewrites `expr` until a full pass makes no further change.
/// Terminates because every firing rewrite strictly reduces node count
/// (4.6), so the node count is a strictly decreasing, non-negative
/// measure.
pub fn simplify(expr: Expr) -> Expr {
  let mut current = expr;
  loop {
    let (next, changed) = pass(current);
    current = next;
    if !changed {
      return current;
    }
  }
}

/// One bottom-up pass: recurse into children first (rewrites do not look
/// inside a `Function`'s subtree except to recurse on its single
/// argument, per 4.6), then try to rewrite the reassembled node.
fn pass(expr: Expr) -> (Expr, bool) {
  match expr {
    Expr::Number { .. } | Expr::Variable { .. } => (expr, false),
    Expr::Function { code, arg } => {
      let (arg, changed) = pass(*arg);
      (Expr::Function { code, arg: Box::new(arg) }, changed)
    },
    Expr::Operator { code, left, right } => {
      let (left, left_changed) = match left {
        Some(left) => {
          let (left, changed) = pass(*left);
          (Some(left), changed)
        },
        None => (None, false),
      };
      let (right, right_changed) = pass(*right);
      let node = Expr::Operator { code, left: left.map(Box::new), right: Box::new(right) };
      match rewrite(&node) {
        Some(rewritten) => (rewritten, true),
        None => (node, left_changed || right_changed),
      }
    },
  }
}

fn is_literal(expr: &Expr, text: &str) -> bool {
  matches!(expr, Expr::Number { literal, .. } if literal == text)
}

/// `x/x` matches when both sides are the *same* Variable or the *same*
/// Number literal (4.6) -- not arbitrary structurally-equal subtrees.
fn same_leaf(a: &Expr, b: &Expr) -> bool {
  match (a, b) {
    (Expr::Variable { name: a }, Expr::Variable { name: b }) => a == b,
    (Expr::Number { literal: a, .. }, Expr::Number { literal: b, .. }) => a == b,
    _ => false,
  }
}

fn fold(left: f64, code: OpCode, right: f64) -> Expr {
  let value = match code {
    OpCode::Add => left + right,
    OpCode::Sub => left - right,
    OpCode::Mul => left * right,
    OpCode::Div | OpCode::Pow => unreachable!("constant folding only applies to +, - and *"),
  };
  Expr::number(literal::canonical(value), value)
}

/// The local rewrites of 4.6's table, tried against `node` (already
/// folded bottom-up). Returns `None` when no rule fires.
fn rewrite(node: &Expr) -> Option<Expr> {
  let Expr::Operator { code, left, right } = node else {
    return None;
  };

  match (*code, left.as_deref(), right.as_ref()) {
    // 0 - v (unary minus of a literal zero) -> 0
    (OpCode::Sub, None, v) if is_literal(v, "0") => Some(Expr::number("0", 0.0)),

    // 0 + v, v + 0, v - 0 -> v
    (OpCode::Add, Some(u), v) if is_literal(u, "0") => Some(v.clone()),
    (OpCode::Add, Some(u), v) if is_literal(v, "0") => Some(u.clone()),
    (OpCode::Sub, Some(u), v) if is_literal(v, "0") => Some(u.clone()),

    // 0 * _, _ * 0 -> 0
    (OpCode::Mul, Some(u), _) if is_literal(u, "0") => Some(Expr::number("0", 0.0)),
    (OpCode::Mul, Some(_), v) if is_literal(v, "0") => Some(Expr::number("0", 0.0)),

    // 1 * v, v * 1 -> v
    (OpCode::Mul, Some(u), v) if is_literal(u, "1") => Some(v.clone()),
    (OpCode::Mul, Some(u), v) if is_literal(v, "1") => Some(u.clone()),

    // 0 / _ -> 0
    (OpCode::Div, Some(u), _) if is_literal(u, "0") => Some(Expr::number("0", 0.0)),

    // v / 1 -> v
    (OpCode::Div, Some(u), v) if is_literal(v, "1") => Some(u.clone()),

    // x / x, for the same Variable or the same Number literal -> 1
    (OpCode::Div, Some(u), v) if same_leaf(u, v) => Some(Expr::number("1", 1.0)),

    // constant folding for +, -, *
    (op @ (OpCode::Add | OpCode::Sub | OpCode::Mul), Some(Expr::Number { value: a, .. }), Expr::Number { value: b, .. }) => {
      Some(fold(*a, op, *b))
    },

    _ => None,
  }
}
