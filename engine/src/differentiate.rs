//! Symbolic differentiator (component G): structural recursion over an
//! `Expr`'s variant, producing the AST of its derivative with respect to a
//! distinguished variable (4.5). The 25+ per-head rules are expressed as
//! small template builders keyed by operator/function code, per 9's design
//! note, so the dispatch in `differentiate` itself stays one match.
//!
//! Every `u`/`v` slot a rule's template uses more than once is cloned --
//! aliasing two positions to the same subtree is exactly the defect 4.5
//! calls out, and `Expr::clone` gives each slot its own owned copy.

use parser::ast::Expr;
use parser::table::{FuncCode, OpCode};

/// d/d`var` of `expr`, by structural recursion. `u` = left child, `v` =
/// right child in the rule table below; a missing left child (unary
/// minus) is treated as the constant `0`.
pub fn differentiate(expr: &Expr, var: &str) -> Expr {
  match expr {
    Expr::Number { .. } => zero(),
    Expr::Variable { name } => {
      if name == var {
        one()
      } else {
        zero()
      }
    },
    Expr::Operator { code, left, right } => differentiate_operator(*code, left.as_deref(), right, var),
    Expr::Function { code, arg } => differentiate_function(*code, arg, var),
  }
}

fn zero() -> Expr {
  Expr::number("0", 0.0)
}

fn one() -> Expr {
  Expr::number("1", 1.0)
}

fn two() -> Expr {
  Expr::number("2", 2.0)
}

fn d(expr: &Expr, var: &str) -> Expr {
  differentiate(expr, var)
}

/// `u + v -> u' + v'`, `u - v -> u' - v'`, unary `-v -> -v'`,
/// `u*v -> u'*v + u*v'`, `u/v -> (u'*v - u*v') / v^2`,
/// `u^v -> u^v * (v'*ln(u) + (v/u)*u')` (4.5's table).
fn differentiate_operator(code: OpCode, left: Option<&Expr>, right: &Expr, var: &str) -> Expr {
  let v = right;
  match (code, left) {
    (OpCode::Sub, None) => Expr::neg(d(v, var)),
    (OpCode::Add, Some(u)) => Expr::binary(OpCode::Add, d(u, var), d(v, var)),
    (OpCode::Sub, Some(u)) => Expr::binary(OpCode::Sub, d(u, var), d(v, var)),
    (OpCode::Mul, Some(u)) => Expr::binary(
      OpCode::Add,
      Expr::binary(OpCode::Mul, d(u, var), v.clone()),
      Expr::binary(OpCode::Mul, u.clone(), d(v, var)),
    ),
    (OpCode::Div, Some(u)) => Expr::binary(
      OpCode::Div,
      Expr::binary(
        OpCode::Sub,
        Expr::binary(OpCode::Mul, d(u, var), v.clone()),
        Expr::binary(OpCode::Mul, u.clone(), d(v, var)),
      ),
      Expr::binary(OpCode::Pow, v.clone(), two()),
    ),
    (OpCode::Pow, Some(u)) => Expr::binary(
      OpCode::Mul,
      Expr::binary(OpCode::Pow, u.clone(), v.clone()),
      Expr::binary(
        OpCode::Add,
        Expr::binary(OpCode::Mul, d(v, var), Expr::call(FuncCode::Ln, u.clone())),
        Expr::binary(OpCode::Mul, Expr::binary(OpCode::Div, v.clone(), u.clone()), d(u, var)),
      ),
    ),
    // Every binary code but `Sub` always carries a left operand -- the
    // grammar (4.3) never produces a unary `+`, `*`, `/` or `^`. Reaching
    // here means a tree was built outside the parser in violation of that
    // invariant.
    (_, None) => unreachable!("non-Sub binary operator with no left operand"),
  }
}

/// One minus `u` squared, used by `arcsin`/`arccos`/`arctanh`/`arccoth`.
fn one_minus_u_squared(u: &Expr) -> Expr {
  Expr::binary(OpCode::Sub, one(), Expr::binary(OpCode::Pow, u.clone(), two()))
}

/// One plus `u` squared, used by `arctan`/`arccot`/`arcsinh`.
fn one_plus_u_squared(u: &Expr) -> Expr {
  Expr::binary(OpCode::Add, one(), Expr::binary(OpCode::Pow, u.clone(), two()))
}

/// `u` squared minus one, used by `arccosh`.
fn u_squared_minus_one(u: &Expr) -> Expr {
  Expr::binary(OpCode::Sub, Expr::binary(OpCode::Pow, u.clone(), two()), one())
}

fn differentiate_function(code: FuncCode, arg: &Expr, var: &str) -> Expr {
  let u = arg;
  let du = d(u, var);
  match code {
    FuncCode::Sin => Expr::binary(OpCode::Mul, du, Expr::call(FuncCode::Cos, u.clone())),
    FuncCode::Cos => Expr::neg(Expr::binary(OpCode::Mul, du, Expr::call(FuncCode::Sin, u.clone()))),
    FuncCode::Tan => Expr::binary(
      OpCode::Div,
      du,
      Expr::binary(OpCode::Pow, Expr::call(FuncCode::Cos, u.clone()), two()),
    ),
    FuncCode::Cot => Expr::neg(Expr::binary(
      OpCode::Div,
      du,
      Expr::binary(OpCode::Pow, Expr::call(FuncCode::Sin, u.clone()), two()),
    )),
    FuncCode::Sinh => Expr::binary(OpCode::Mul, du, Expr::call(FuncCode::Cosh, u.clone())),
    FuncCode::Cosh => Expr::binary(OpCode::Mul, du, Expr::call(FuncCode::Sinh, u.clone())),
    FuncCode::Tanh => Expr::binary(
      OpCode::Div,
      du,
      Expr::binary(OpCode::Pow, Expr::call(FuncCode::Cosh, u.clone()), two()),
    ),
    FuncCode::Coth => Expr::neg(Expr::binary(
      OpCode::Div,
      du,
      Expr::binary(OpCode::Pow, Expr::call(FuncCode::Sinh, u.clone()), two()),
    )),
    FuncCode::ArcSin => Expr::binary(OpCode::Div, du, Expr::call(FuncCode::Sqrt, one_minus_u_squared(u))),
    FuncCode::ArcCos => Expr::neg(Expr::binary(OpCode::Div, du, Expr::call(FuncCode::Sqrt, one_minus_u_squared(u)))),
    FuncCode::ArcTan => Expr::binary(OpCode::Div, du, one_plus_u_squared(u)),
    FuncCode::ArcCot => Expr::neg(Expr::binary(OpCode::Div, du, one_plus_u_squared(u))),
    FuncCode::ArcSinh => Expr::binary(OpCode::Div, du, Expr::call(FuncCode::Sqrt, one_plus_u_squared(u))),
    FuncCode::ArcCosh => Expr::binary(OpCode::Div, du, Expr::call(FuncCode::Sqrt, u_squared_minus_one(u))),
    FuncCode::ArcTanh => Expr::binary(OpCode::Div, du, one_minus_u_squared(u)),
    FuncCode::ArcCoth => Expr::binary(OpCode::Div, du, one_minus_u_squared(u)),
    FuncCode::Exp => Expr::binary(OpCode::Mul, du, Expr::call(FuncCode::Exp, u.clone())),
    FuncCode::Ln => Expr::binary(OpCode::Div, du, u.clone()),
    FuncCode::Lg => Expr::binary(
      OpCode::Div,
      du,
      Expr::binary(OpCode::Mul, u.clone(), Expr::call(FuncCode::Ln, Expr::number("10", 10.0))),
    ),
    FuncCode::Sqrt => Expr::binary(OpCode::Div, du, Expr::binary(OpCode::Mul, two(), Expr::call(FuncCode::Sqrt, u.clone()))),
    FuncCode::Cbrt => Expr::binary(
      OpCode::Div,
      du,
      Expr::binary(
        OpCode::Mul,
        Expr::number("3", 3.0),
        Expr::binary(OpCode::Pow, u.clone(), Expr::binary(OpCode::Div, two(), Expr::number("3", 3.0))),
      ),
    ),
  }
}
