use colored::Colorize;

use crate::types::error::DiagnosticError;

/// A half-open region of the source line an error was raised against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
  pub position: usize,
  pub len: usize,
}

impl Span {
  pub fn new(position: usize, len: usize) -> Self {
    Self { position, len: len.max(1) }
  }
}

/// Where in this crate's own source a diagnostic was raised, standing in for
/// the original's `(file, line, function)` triple captured at the call site.
#[derive(Debug, Clone)]
pub struct Origin {
  pub file: &'static str,
  pub line: u32,
  pub function: String,
}

/// Captures `file!()`/`line!()` and the enclosing function name at the call
/// site, the way `__FUNC_NAME__` did in the source this was ported from.
#[macro_export]
macro_rules! origin {
  () => {{
    fn __marker() {}
    fn __type_name_of<T>(_: T) -> &'static str {
      std::any::type_name::<T>()
    }
    let name = __type_name_of(__marker);
    $crate::diagnostic::Origin {
      file: file!(),
      line: line!(),
      function: name[..name.len() - 10].to_string(),
    }
  }};
}

/// A one-line source excerpt with a caret under the offending position,
/// per the two-line rendering contract: the source line, then spaces up to
/// `position` followed by `^` and `len - 1` `~` characters.
#[derive(Debug, Clone)]
pub struct CaretExcerpt {
  pub source: String,
  pub span: Span,
}

impl CaretExcerpt {
  pub fn render(&self) -> String {
    let mut out = String::new();
    out.push_str(&self.source);
    out.push('\n');
    out.push_str(&" ".repeat(self.span.position));
    out.push('^');
    out.push_str(&"~".repeat(self.span.len.saturating_sub(1)));
    out
  }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
  pub error: DiagnosticError,
  pub message: String,
  pub origin: Origin,
  pub caret: Option<CaretExcerpt>,
}

impl Diagnostic {
  pub fn new(error: DiagnosticError, message: impl Into<String>, origin: Origin) -> Self {
    Self { error, message: message.into(), origin, caret: None }
  }

  pub fn with_caret(mut self, source: impl Into<String>, span: Span) -> Self {
    self.caret = Some(CaretExcerpt { source: source.into(), span });
    self
  }

  /// Plain-text body shared by the console printer and the log sink; the
  /// log sink prepends its own timestamp header around this.
  pub fn body(&self) -> String {
    let mut out = format!(
      "ERROR: file {} line {} function {}\n",
      self.origin.file, self.origin.line, self.origin.function
    );
    out.push_str(&self.message);
    out.push('\n');
    if let Some(caret) = &self.caret {
      out.push_str(&caret.render());
      out.push('\n');
    }
    out
  }

  pub fn print(&self) {
    let header = format!("error[{}]:", self.error.code());
    println!("{} {}", header.red().bold(), self.message.clone().red().bold());
    if let Some(caret) = &self.caret {
      println!("{}", caret.render());
    }
  }
}
