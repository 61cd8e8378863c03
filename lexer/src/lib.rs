//! Lexical preprocessing: the mutable source-buffer pass that runs before
//! parsing. There is no tokenization here — the parser re-reads the
//! character stream directly, so this crate's only job is to normalize the
//! raw input text into the shape the grammar expects.

/// Strips every ASCII space (`0x20`) and tab, and lowercases every ASCII
/// letter. Every other byte — digits, operators, parentheses, non-ASCII
/// characters — passes through untouched.
pub fn normalize(source: &str) -> String {
  source
    .chars()
    .filter(|c| *c != ' ' && *c != '\t')
    .map(|c| c.to_ascii_lowercase())
    .collect()
}
