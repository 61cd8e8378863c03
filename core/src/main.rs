//! Binary entry point (component J). Parses the argument vector into §6's
//! invocation contract (no path argument vs. one path argument) plus the
//! `--diff[=VAR]` mode flag, then hands off to `Runner`.

use colored::Colorize;
use diagnostic::{origin, Diagnostic, DiagnosticEngine, DiagnosticError};

use crate::runner::{Mode, Runner};

mod runner;

/// The default differentiation variable when `--diff` is given with no
/// explicit name, matching the `x` spec.md's examples differentiate
/// against throughout §8.
const DEFAULT_DIFF_VAR: &str = "x";

fn main() {
  let args: Vec<String> = std::env::args().skip(1).collect();
  let mut engine = DiagnosticEngine::new();

  let mut mode = Mode::Calculate;
  let mut positional = Vec::new();
  for arg in &args {
    match arg.strip_prefix("--diff") {
      Some(rest) => {
        let var = rest.strip_prefix('=').filter(|s| !s.is_empty()).unwrap_or(DEFAULT_DIFF_VAR);
        mode = Mode::Differentiate(var.to_string());
      },
      None => positional.push(arg),
    }
  }

  if positional.len() > 1 {
    engine.add(Diagnostic::new(
      DiagnosticError::NullInput,
      "invalid number of arguments",
      origin!(),
    ));
    engine.print_diagnostics();
    eprintln!("Usage: core [--diff[=VAR]] [FILE]");
    std::process::exit(64);
  }

  let mut runner = Runner::new(mode);
  let code = match positional.first() {
    None => {
      println!("{}", "Running the interactive mode".cyan().bold());
      runner.run_interactive(&mut engine)
    },
    Some(path) => {
      println!("{}", format!("Running file: {path}").cyan().bold());
      runner.run_file(path, &mut engine)
    },
  };

  std::process::exit(code);
}
