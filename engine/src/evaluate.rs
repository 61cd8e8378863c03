//! Numeric evaluator (component F): a post-order fold of an `Expr` to a
//! single `f64`, prompting an external `ValueSource` for each free
//! variable it meets along the way (4.7).

use std::collections::HashMap;

use parser::ast::Expr;
use parser::table::{FuncCode, OpCode};

/// A keyed collection mapping identifier -> number (3's "variable
/// binding"). `pi` and `e` are pre-bound; everything else is populated on
/// demand by `evaluate`. First-bind-wins: once an identifier has a value
/// within a session, later binds to the same name are no-ops.
#[derive(Debug, Clone)]
pub struct VariableBindings {
  values: HashMap<String, f64>,
}

impl Default for VariableBindings {
  fn default() -> Self {
    let mut values = HashMap::new();
    values.insert("pi".to_string(), std::f64::consts::PI);
    values.insert("e".to_string(), std::f64::consts::E);
    Self { values }
  }
}

impl VariableBindings {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, name: &str) -> Option<f64> {
    self.values.get(name).copied()
  }

  pub fn bind(&mut self, name: &str, value: f64) {
    self.values.entry(name.to_string()).or_insert(value);
  }
}

/// The source of input strings an evaluation session prompts for its free
/// variables -- the "source of input strings" external collaborator of
/// §6, kept out of this crate's scope as a trait so `core`'s stdin-backed
/// driver and a test's scripted source can both satisfy it.
pub trait ValueSource {
  fn read_value(&mut self, name: &str) -> std::io::Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
  /// The value source failed (e.g. stdin closed) before a free variable
  /// could be bound.
  Io,
  /// The grammar's `NUMBER` production records a trailing `i` (4.3), but
  /// this port's evaluator operates on `f64` only; rather than silently
  /// dropping the imaginary marker it rejects the literal (§6).
  Imaginary,
}

/// Post-order fold (4.7): Numbers evaluate to their literal value,
/// Variables trigger a prompt (memoised in `bindings` for the rest of the
/// session), Functions/Operators apply the corresponding host arithmetic.
/// Domain errors are not intercepted -- a NaN or infinite `f64` is an
/// ordinary result, per 4.7.
pub fn evaluate(expr: &Expr, bindings: &mut VariableBindings, source: &mut dyn ValueSource) -> Result<f64, EvalError> {
  match expr {
    Expr::Number { literal, value } => {
      if literal.ends_with('i') {
        return Err(EvalError::Imaginary);
      }
      Ok(*value)
    },
    Expr::Variable { name } => {
      if let Some(value) = bindings.get(name) {
        return Ok(value);
      }
      let value = prompt_for_variable(name, bindings, source)?;
      bindings.bind(name, value);
      Ok(value)
    },
    Expr::Operator { code, left, right } => {
      let left_value = match left {
        Some(left) => evaluate(left, bindings, source)?,
        None => 0.0,
      };
      let right_value = evaluate(right, bindings, source)?;
      Ok(apply_operator(*code, left_value, right_value))
    },
    Expr::Function { code, arg } => {
      let arg_value = evaluate(arg, bindings, source)?;
      Ok(apply_function(*code, arg_value))
    },
  }
}

/// `evaluate`, but collapses the result into the `Number` leaf 4.7 says the
/// evaluated tree becomes -- the shape the calculator-mode driver prints.
pub fn evaluate_to_literal(
  expr: &Expr,
  bindings: &mut VariableBindings,
  source: &mut dyn ValueSource,
) -> Result<Expr, EvalError> {
  let value = evaluate(expr, bindings, source)?;
  Ok(Expr::number(parser::literal::canonical(value), value))
}

/// Reads a line from `source`, parses it as a full sub-expression (the
/// richer variant of §6 rather than a bare decimal), and evaluates it in
/// the same session -- re-prompting on a parse error instead of failing
/// the whole session.
fn prompt_for_variable(name: &str, bindings: &mut VariableBindings, source: &mut dyn ValueSource) -> Result<f64, EvalError> {
  loop {
    let line = source.read_value(name).map_err(|_| EvalError::Io)?;
    let normalized = lexer::normalize(&line);
    if let Ok(ast) = parser::parse(&normalized) {
      if let Ok(value) = evaluate(&ast.root, bindings, source) {
        return Ok(value);
      }
    }
  }
}

fn apply_operator(code: OpCode, left: f64, right: f64) -> f64 {
  match code {
    OpCode::Add => left + right,
    OpCode::Sub => left - right,
    OpCode::Mul => left * right,
    OpCode::Div => left / right,
    OpCode::Pow => left.powf(right),
  }
}

fn apply_function(code: FuncCode, arg: f64) -> f64 {
  match code {
    FuncCode::ArcCos => arg.acos(),
    FuncCode::ArcCosh => arg.acosh(),
    FuncCode::ArcCot => (1.0 / arg).atan(),
    FuncCode::ArcCoth => (1.0 / arg).atanh(),
    FuncCode::ArcSin => arg.asin(),
    FuncCode::ArcSinh => arg.asinh(),
    FuncCode::ArcTan => arg.atan(),
    FuncCode::ArcTanh => arg.atanh(),
    FuncCode::Cbrt => arg.cbrt(),
    FuncCode::Cos => arg.cos(),
    FuncCode::Cosh => arg.cosh(),
    FuncCode::Cot => 1.0 / arg.tan(),
    FuncCode::Coth => 1.0 / arg.tanh(),
    FuncCode::Exp => arg.exp(),
    FuncCode::Lg => arg.log10(),
    FuncCode::Ln => arg.ln(),
    FuncCode::Sin => arg.sin(),
    FuncCode::Sinh => arg.sinh(),
    FuncCode::Sqrt => arg.sqrt(),
    FuncCode::Tan => arg.tan(),
    FuncCode::Tanh => arg.tanh(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct NoPrompt;
  impl ValueSource for NoPrompt {
    fn read_value(&mut self, _name: &str) -> std::io::Result<String> {
      Err(std::io::Error::other("no prompts expected in this test"))
    }
  }

  fn eval_str(source: &str, bindings: &mut VariableBindings) -> f64 {
    let normalized = lexer::normalize(source);
    let ast = parser::parse(&normalized).expect("should parse");
    evaluate(&ast.root, bindings, &mut NoPrompt).expect("should evaluate without prompting")
  }

  #[test]
  fn evaluates_arithmetic_with_correct_precedence() {
    let mut bindings = VariableBindings::new();
    assert_eq!(eval_str("2+3*4", &mut bindings), 14.0);
  }

  #[test]
  fn pi_and_e_are_pre_bound() {
    let mut bindings = VariableBindings::new();
    assert!((eval_str("pi", &mut bindings) - std::f64::consts::PI).abs() < 1e-12);
    assert!((eval_str("e", &mut bindings) - std::f64::consts::E).abs() < 1e-12);
  }

  #[test]
  fn pythagorean_identity_evaluates_to_one() {
    let mut bindings = VariableBindings::new();
    bindings.bind("x", 0.5);
    let value = eval_str("sin(x)^2+cos(x)^2", &mut bindings);
    assert!((value - 1.0).abs() < 1e-12);
  }

  #[test]
  fn unary_minus_negates_its_operand() {
    let mut bindings = VariableBindings::new();
    assert_eq!(eval_str("-3+5", &mut bindings), 2.0);
  }

  #[test]
  fn domain_errors_surface_as_ordinary_floats_rather_than_being_intercepted() {
    let mut bindings = VariableBindings::new();
    assert!(eval_str("1/0", &mut bindings).is_infinite());
    assert!(eval_str("ln(-1)", &mut bindings).is_nan());
  }

  #[test]
  fn a_free_variable_is_prompted_once_then_memoised() {
    struct Script {
      lines: Vec<&'static str>,
      calls: usize,
    }
    impl ValueSource for Script {
      fn read_value(&mut self, _name: &str) -> std::io::Result<String> {
        let line = self.lines[self.calls];
        self.calls += 1;
        Ok(line.to_string())
      }
    }

    let mut bindings = VariableBindings::new();
    let ast = parser::parse("x+x").expect("should parse");
    let mut script = Script { lines: vec!["3"], calls: 0 };
    let value = evaluate(&ast.root, &mut bindings, &mut script).expect("should evaluate");
    assert_eq!(value, 6.0);
    assert_eq!(script.calls, 1);
  }

  #[test]
  fn evaluate_to_literal_collapses_the_tree_into_a_single_number() {
    let mut bindings = VariableBindings::new();
    let ast = parser::parse("2+3*4").expect("should parse");
    let folded = evaluate_to_literal(&ast.root, &mut bindings, &mut NoPrompt).expect("should evaluate");
    assert_eq!(folded, Expr::number("14", 14.0));
  }

  #[test]
  fn an_imaginary_literal_is_rejected_rather_than_silently_truncated() {
    let mut bindings = VariableBindings::new();
    let ast = parser::parse("2i").expect("should parse");
    let err = evaluate(&ast.root, &mut bindings, &mut NoPrompt).expect_err("should reject");
    assert_eq!(err, EvalError::Imaginary);
  }

  #[test]
  fn operands_are_evaluated_left_before_right() {
    struct Script {
      lines: Vec<&'static str>,
      calls: usize,
    }
    impl ValueSource for Script {
      fn read_value(&mut self, _name: &str) -> std::io::Result<String> {
        let line = self.lines[self.calls];
        self.calls += 1;
        Ok(line.to_string())
      }
    }

    // `a` and `b` are both free, so whichever one is evaluated first gets
    // bound to the first scripted answer. "10" first means `a` was asked
    // before `b` only if `a-b` evaluates to 10-3=7, not 3-10=-7.
    let mut bindings = VariableBindings::new();
    let ast = parser::parse("a-b").expect("should parse");
    let mut script = Script { lines: vec!["10", "3"], calls: 0 };
    let value = evaluate(&ast.root, &mut bindings, &mut script).expect("should evaluate");
    assert_eq!(value, 7.0);
  }
}
