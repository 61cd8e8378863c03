use std::fs::OpenOptions;
use std::io::Write;

use chrono::Local;

pub mod diagnostic;
pub mod types;

pub use diagnostic::{CaretExcerpt, Diagnostic, Origin, Span};
pub use types::error::DiagnosticError;
pub use types::Severity;

/// Accumulates diagnostics raised while parsing, differentiating or
/// simplifying one input line, and knows how to print them to the console
/// and append them to the log file.
#[derive(Debug, Default)]
pub struct DiagnosticEngine {
  diagnostics: Vec<Diagnostic>,
  error_count: usize,
  fatal_count: usize,
}

impl DiagnosticEngine {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add(&mut self, diagnostic: Diagnostic) {
    match diagnostic.error.severity() {
      Severity::Recoverable => self.error_count += 1,
      Severity::Fatal => self.fatal_count += 1,
    }
    self.diagnostics.push(diagnostic);
  }

  pub fn print_diagnostics(&self) {
    for d in &self.diagnostics {
      d.print();
    }
  }

  pub fn error_count(&self) -> usize {
    self.error_count
  }

  pub fn fatal_count(&self) -> usize {
    self.fatal_count
  }

  pub fn has_errors(&self) -> bool {
    self.error_count > 0 || self.fatal_count > 0
  }

  pub fn has_fatal(&self) -> bool {
    self.fatal_count > 0
  }

  pub fn diagnostics(&self) -> &[Diagnostic] {
    &self.diagnostics
  }

  /// Appends every accumulated diagnostic to `log_path`, each one preceded
  /// by a timestamp header, matching the log sink contract.
  pub fn flush_log(&self, log_path: &str) -> std::io::Result<()> {
    if self.diagnostics.is_empty() {
      return Ok(());
    }
    let mut file = OpenOptions::new().create(true).append(true).open(log_path)?;
    for d in &self.diagnostics {
      let now = Local::now();
      writeln!(
        file,
        "###############################################################################"
      )?;
      writeln!(file, "TIME: {}", now.format("%Y-%m-%d %H:%M:%S"))?;
      writeln!(file)?;
      write!(file, "{}", d.body())?;
    }
    Ok(())
  }

  /// Routes every diagnostic raised so far to both sinks of §6 (console via
  /// `print_diagnostics`, the log file via `flush_log`), then clears the
  /// buffer so a long-running interactive session doesn't re-log errors
  /// already reported on a prior iteration. `error_count`/`fatal_count`
  /// stay cumulative for the session so `core` can still pick an exit code
  /// from them after the buffer has been drained.
  pub fn report(&mut self, log_path: &str) -> std::io::Result<()> {
    self.print_diagnostics();
    self.flush_log(log_path)?;
    self.diagnostics.clear();
    Ok(())
  }
}
