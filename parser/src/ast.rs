//! AST core (component D): the closed sum type every other component reads
//! and writes, plus the derived, on-demand parent/depth lookups that stand
//! in for a back-pointer.

use crate::table::{FuncCode, OpCode};

/// Every expression node is one of these four variants; the structural
/// invariants from the data model (which children are present) are
/// enforced by the shape of each variant itself rather than by a tag beside
/// dead fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
  Number { literal: String, value: f64 },
  Variable { name: String },
  /// `left` is absent exactly for a unary minus (`code == OpCode::Sub`).
  Operator { code: OpCode, left: Option<Box<Expr>>, right: Box<Expr> },
  Function { code: FuncCode, arg: Box<Expr> },
}

impl Expr {
  pub fn number(literal: impl Into<String>, value: f64) -> Self {
    Expr::Number { literal: literal.into(), value }
  }

  pub fn variable(name: impl Into<String>) -> Self {
    Expr::Variable { name: name.into() }
  }

  pub fn binary(code: OpCode, left: Expr, right: Expr) -> Self {
    Expr::Operator { code, left: Some(Box::new(left)), right: Box::new(right) }
  }

  /// A unary minus: a `Sub` operator node with no left child.
  pub fn neg(right: Expr) -> Self {
    Expr::Operator { code: OpCode::Sub, left: None, right: Box::new(right) }
  }

  pub fn call(code: FuncCode, arg: Expr) -> Self {
    Expr::Function { code, arg: Box::new(arg) }
  }

  pub fn is_unary_minus(&self) -> bool {
    matches!(self, Expr::Operator { code: OpCode::Sub, left: None, .. })
  }

  /// Total node count, used by the simplifier to prove termination (each
  /// firing rewrite strictly reduces this).
  pub fn node_count(&self) -> usize {
    1 + match self {
      Expr::Number { .. } | Expr::Variable { .. } => 0,
      Expr::Operator { left, right, .. } => left.as_ref().map_or(0, |l| l.node_count()) + right.node_count(),
      Expr::Function { arg, .. } => arg.node_count(),
    }
  }

  /// Depth of the deepest leaf, root counted as depth 1.
  pub fn max_depth(&self) -> usize {
    match self {
      Expr::Number { .. } | Expr::Variable { .. } => 1,
      Expr::Operator { left, right, .. } => {
        let left_depth = left.as_ref().map_or(0, |l| l.max_depth());
        1 + left_depth.max(right.max_depth())
      },
      Expr::Function { arg, .. } => 1 + arg.max_depth(),
    }
  }

  /// Resolves a `NodePath` against this node, returning `None` if the path
  /// steps off the tree (e.g. `Left` into a unary minus or a `Function`).
  pub fn get(&self, path: &[Step]) -> Option<&Expr> {
    match path.split_first() {
      None => Some(self),
      Some((Step::Left, rest)) => match self {
        Expr::Operator { left: Some(l), .. } => l.get(rest),
        _ => None,
      },
      Some((Step::Right, rest)) => match self {
        Expr::Operator { right, .. } => right.get(rest),
        Expr::Function { arg, .. } => arg.get(rest),
        _ => None,
      },
    }
  }
}

/// A single downward step from a node to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
  Left,
  Right,
}

/// The path from the AST root to a node, used as a derived, on-demand
/// parent lookup instead of a back-pointer (9's design note).
pub type NodePath = Vec<Step>;

/// The path one step shorter than `path`, i.e. the parent address -- or
/// `None` if `path` already addresses the root.
pub fn parent_of(path: &NodePath) -> Option<NodePath> {
  if path.is_empty() {
    None
  } else {
    Some(path[..path.len() - 1].to_vec())
  }
}

/// A rooted expression tree with a label for dumps/diagnostics. Depth and
/// parent links are derived metrics recomputed from `root` on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Ast {
  pub label: String,
  pub root: Expr,
}

impl Ast {
  pub fn new(label: impl Into<String>, root: Expr) -> Self {
    Self { label: label.into(), root }
  }

  pub fn node_count(&self) -> usize {
    self.root.node_count()
  }

  pub fn depth(&self) -> usize {
    self.root.max_depth()
  }

  pub fn get(&self, path: &NodePath) -> Option<&Expr> {
    self.root.get(path)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::table::OpCode;

  #[test]
  fn node_count_counts_every_node_including_the_root() {
    let e = Expr::binary(OpCode::Add, Expr::number("2", 2.0), Expr::number("3", 3.0));
    assert_eq!(e.node_count(), 3);
  }

  #[test]
  fn unary_minus_has_no_left_child() {
    let e = Expr::neg(Expr::variable("x"));
    assert!(e.is_unary_minus());
    assert_eq!(e.node_count(), 2);
  }

  #[test]
  fn max_depth_of_a_leaf_is_one() {
    assert_eq!(Expr::number("1", 1.0).max_depth(), 1);
  }

  #[test]
  fn get_resolves_a_path_of_steps() {
    let e = Expr::binary(OpCode::Mul, Expr::variable("x"), Expr::number("2", 2.0));
    assert_eq!(e.get(&[Step::Left]), Some(&Expr::variable("x")));
    assert_eq!(e.get(&[Step::Right]), Some(&Expr::number("2".to_string(), 2.0)));
    assert_eq!(e.get(&[Step::Left, Step::Right]), None);
  }

  #[test]
  fn parent_of_the_root_path_is_none() {
    assert_eq!(parent_of(&vec![]), None);
    assert_eq!(parent_of(&vec![Step::Left]), Some(vec![]));
  }
}
