//! Driver loop (component J): dispatches between the interactive and batch
//! invocation of §6, feeds a parsed expression into either the evaluator
//! (calculator mode, F) or the differentiator+simplifier (differentiator
//! mode, G then H), and routes every diagnostic to both the console and the
//! `differentiator.log`/`calculator.log` sink of §4.8.
//!
//! Mode selection (calculator vs. differentiator, and the differentiation
//! variable) sits outside spec.md's grammar and tree algorithms -- it's
//! exactly the kind of "thin wrapper" external collaborator §1 carves out
//! of the core's scope -- so `core::main` resolves it from an extra `--diff`
//! flag layered on top of §6's plain "no path vs. one path" argument count.

use std::io::{self, Write};

use diagnostic::{origin, Diagnostic, DiagnosticEngine, DiagnosticError, Span};
use engine::{differentiate, evaluate_to_literal, simplify, validate, EvalError, TreeError, ValueSource, VariableBindings};
use parser::error::{ParseError, ParseErrorKind};

/// Which of §4.7's evaluator or §4.5's differentiator a parsed expression
/// is fed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
  Calculate,
  Differentiate(String),
}

impl Mode {
  /// The fixed log file name of §6: `calculator.log` in the calculator
  /// variant, `differentiator.log` in the differentiator variant.
  fn log_path(&self) -> &'static str {
    match self {
      Mode::Calculate => "calculator.log",
      Mode::Differentiate(_) => "differentiator.log",
    }
  }
}

/// The outcome of processing one expression, already reported to both
/// sinks when it carries an error.
enum Outcome {
  /// Processing succeeded; this is the `result:` text to emit.
  Printed(String),
  /// A recoverable parse-kind error (§7): already logged and printed.
  Recovered,
  /// An unrecoverable tree-structural or interface-contract error (§7):
  /// already logged and printed; carries the process exit code.
  Fatal(i32),
}

/// Feeds `read_value`'s free-variable prompts (§6's richer variant) through
/// stdin: a full sub-expression, parsed and evaluated in the same session,
/// re-prompted by the evaluator on a parse error.
struct StdinSource;

impl ValueSource for StdinSource {
  fn read_value(&mut self, name: &str) -> io::Result<String> {
    print!("Enter value of variable {name}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
      return Err(io::Error::other("stdin closed while awaiting a variable value"));
    }
    Ok(line)
  }
}

pub struct Runner {
  mode: Mode,
}

impl Runner {
  pub fn new(mode: Mode) -> Self {
    Self { mode }
  }

  /// §6's interactive mode: `Enter expression: ` / process / `result: ` /
  /// `Continue [Y/n]? ` loop. A parse error discards the line and
  /// re-prompts directly at `Enter expression: ` (§7); it does not reach
  /// the continue prompt.
  pub fn run_interactive(&mut self, engine: &mut DiagnosticEngine) -> i32 {
    loop {
      print!("\nEnter expression: ");
      if io::stdout().flush().is_err() {
        return self.fatal(engine, "unable to flush stdout");
      }

      let mut line = String::new();
      match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => return self.fatal(engine, "unable to read stdin"),
        Ok(_) => {},
      }

      match self.process(line.trim_end_matches(['\n', '\r']), engine) {
        Outcome::Printed(result) => println!("result: {result}"),
        Outcome::Recovered => continue,
        Outcome::Fatal(code) => return code,
      }

      match self.ask_continue() {
        Ok(true) => continue,
        Ok(false) | Err(_) => return if engine.has_fatal() { 70 } else { 0 },
      }
    }
  }

  /// `Continue [Y/n]? `: any first byte (case-folded) of `Y` loops, `N`
  /// exits, anything else re-prompts the same question (§6).
  fn ask_continue(&self) -> io::Result<bool> {
    loop {
      print!("Continue [Y/n]? ");
      io::stdout().flush()?;
      let mut answer = String::new();
      if io::stdin().read_line(&mut answer)? == 0 {
        return Ok(false);
      }
      match answer.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('Y') => return Ok(true),
        Some('N') => return Ok(false),
        _ => continue,
      }
    }
  }

  /// §6's batch mode: the whole file is one expression; on success the
  /// result overwrites the file, on any error the program aborts (§7 --
  /// batch mode does not retry).
  pub fn run_file(&mut self, path: &str, engine: &mut DiagnosticEngine) -> i32 {
    let source = match std::fs::read_to_string(path) {
      Ok(s) => s,
      Err(e) => return self.fatal(engine, &format!("unable to read {path}: {e}")),
    };

    match self.process(source.trim_end_matches(['\n', '\r']), engine) {
      Outcome::Printed(result) => match std::fs::write(path, result) {
        Ok(()) => {
          if engine.has_fatal() {
            70
          } else {
            0
          }
        },
        Err(e) => self.fatal(engine, &format!("unable to write {path}: {e}")),
      },
      // Batch mode has nowhere to re-prompt to, so a recoverable parse
      // error still aborts the process (§7's "in batch mode, abort").
      Outcome::Recovered => 65,
      Outcome::Fatal(code) => code,
    }
  }

  /// Normalizes, parses, and dispatches `raw` into this runner's mode,
  /// reporting any diagnostic raised along the way to both sinks before
  /// returning.
  fn process(&mut self, raw: &str, engine: &mut DiagnosticEngine) -> Outcome {
    let normalized = lexer::normalize(raw);

    let ast = match parser::parse(&normalized) {
      Ok(ast) => ast,
      Err(err) => {
        engine.add(parse_error_diagnostic(err, &normalized));
        let _ = engine.report(self.mode.log_path());
        return Outcome::Recovered;
      },
    };

    match &self.mode {
      Mode::Calculate => {
        let mut bindings = VariableBindings::new();
        let mut source = StdinSource;
        match evaluate_to_literal(&ast.root, &mut bindings, &mut source) {
          Ok(literal) => Outcome::Printed(parser::print(&literal)),
          Err(EvalError::Io) => {
            engine.add(Diagnostic::new(
              DiagnosticError::NullInput,
              "stdin closed while awaiting a free variable's value",
              origin!(),
            ));
            let _ = engine.report(self.mode.log_path());
            Outcome::Fatal(70)
          },
          Err(EvalError::Imaginary) => {
            engine.add(Diagnostic::new(
              DiagnosticError::BadNumber,
              "imaginary literal is not supported by the real-valued evaluator",
              origin!(),
            ));
            let _ = engine.report(self.mode.log_path());
            Outcome::Recovered
          },
        }
      },
      Mode::Differentiate(var) => {
        let derivative = simplify(differentiate(&ast.root, var));
        match validate(&derivative) {
          Ok(()) => Outcome::Printed(parser::print(&derivative)),
          Err(TreeError::OperatorArgCount) => {
            engine.add(Diagnostic::new(
              DiagnosticError::TreeOperatorArgCount,
              "differentiator produced an operator node missing a required child",
              origin!(),
            ));
            let _ = engine.report(self.mode.log_path());
            Outcome::Fatal(70)
          },
        }
      },
    }
  }

  fn fatal(&self, engine: &mut DiagnosticEngine, message: &str) -> i32 {
    engine.add(Diagnostic::new(DiagnosticError::NullInput, message, origin!()));
    let _ = engine.report(self.mode.log_path());
    70
  }
}

/// Builds the console/log diagnostic for a parser error (§4.3/§4.8): the
/// caret excerpt against the normalized source, plus a message naming the
/// offending identifier for `UnknownFunction`.
fn parse_error_diagnostic(err: ParseError, normalized: &str) -> Diagnostic {
  let message = match err.kind {
    ParseErrorKind::SyntaxError => "unexpected character".to_string(),
    ParseErrorKind::UnclosedBracket => "missing closing parenthesis".to_string(),
    ParseErrorKind::BadNumber => "malformed numeric literal".to_string(),
    ParseErrorKind::UnknownFunction => {
      let end = (err.position + err.span).min(normalized.len());
      format!("unknown function `{}`", &normalized[err.position..end])
    },
  };

  Diagnostic::new(DiagnosticError::from(err.kind), message, origin!())
    .with_caret(normalized, Span::new(err.position, err.span))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn calculator_mode_and_differentiator_mode_pick_distinct_log_paths() {
    assert_eq!(Mode::Calculate.log_path(), "calculator.log");
    assert_eq!(Mode::Differentiate("x".to_string()).log_path(), "differentiator.log");
  }

  #[test]
  fn processing_a_well_formed_expression_in_calculate_mode_prints_its_value() {
    let mut engine = DiagnosticEngine::new();
    let mut runner = Runner::new(Mode::Calculate);
    match runner.process("2+3*4", &mut engine) {
      Outcome::Printed(result) => assert_eq!(result, "14"),
      _ => panic!("expected a printed result"),
    }
    assert!(!engine.has_errors());
  }

  #[test]
  fn processing_a_well_formed_expression_in_differentiate_mode_prints_the_derivative() {
    let mut engine = DiagnosticEngine::new();
    let mut runner = Runner::new(Mode::Differentiate("x".to_string()));
    match runner.process("ln(x)", &mut engine) {
      Outcome::Printed(result) => assert_eq!(result, "1/x"),
      _ => panic!("expected a printed result"),
    }
  }

  #[test]
  fn a_parse_error_is_recovered_and_reported() {
    // `process` logs to the fixed relative `differentiator.log` path (§6);
    // avoided changing the test process's cwd here since tests run
    // concurrently in one process. The stray log file is removed after.
    let mut engine = DiagnosticEngine::new();
    let mut runner = Runner::new(Mode::Differentiate("x".to_string()));
    let outcome = runner.process("sin(", &mut engine);

    match outcome {
      Outcome::Recovered => {},
      _ => panic!("expected a recovered parse error"),
    }
    assert!(engine.has_errors());
    assert!(engine.diagnostics().is_empty(), "report() should have drained the buffer");

    let _ = std::fs::remove_file("differentiator.log");
  }
}
