use crate::types::Severity;

/// The fixed error taxonomy: four recoverable parse-time kinds, and four
/// fatal kinds that indicate a defect in the tree transformer or the
/// interface contract rather than a malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticError {
  SyntaxError,
  UnclosedBracket,
  BadNumber,
  UnknownFunction,
  TreeFunctionArgCount,
  TreeOperatorArgCount,
  TreeLeafNonNull,
  NullInput,
}

impl DiagnosticError {
  pub fn code(&self) -> &'static str {
    match self {
      Self::SyntaxError => "E0701",
      Self::UnclosedBracket => "E0702",
      Self::BadNumber => "E0703",
      Self::UnknownFunction => "E0704",
      Self::TreeFunctionArgCount => "E0705",
      Self::TreeOperatorArgCount => "E0706",
      Self::TreeLeafNonNull => "E0707",
      Self::NullInput => "E0708",
    }
  }

  pub fn severity(&self) -> Severity {
    match self {
      Self::SyntaxError | Self::UnclosedBracket | Self::BadNumber | Self::UnknownFunction => {
        Severity::Recoverable
      },
      Self::TreeFunctionArgCount
      | Self::TreeOperatorArgCount
      | Self::TreeLeafNonNull
      | Self::NullInput => Severity::Fatal,
    }
  }
}
