/// Whether an error can be recovered from (the parser re-prompts / skips the
/// line) or indicates an internal defect that aborts the process. Mirrors
/// the Recovery column of the error taxonomy table.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
  Recoverable,
  Fatal,
}

pub mod error;
