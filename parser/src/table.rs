//! Fixed catalogue mapping keyword <-> code <-> arity for every operator and
//! unary function the grammar recognises (component B).

/// Binary operator codes, in their canonical precedence-independent order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
  Add,
  Sub,
  Mul,
  Div,
  Pow,
}

impl OpCode {
  /// The canonical printable spelling, also used by the parser to recognise
  /// the operator character.
  pub fn spelling(self) -> &'static str {
    match self {
      OpCode::Add => "+",
      OpCode::Sub => "-",
      OpCode::Mul => "*",
      OpCode::Div => "/",
      OpCode::Pow => "^",
    }
  }
}

/// Unary function codes. Declared in lexicographic order by keyword, which
/// doubles as the order `FUNCTION_TABLE` is sorted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FuncCode {
  ArcCos,
  ArcCosh,
  ArcCot,
  ArcCoth,
  ArcSin,
  ArcSinh,
  ArcTan,
  ArcTanh,
  Cbrt,
  Cos,
  Cosh,
  Cot,
  Coth,
  Exp,
  Lg,
  Ln,
  Sin,
  Sinh,
  Sqrt,
  Tan,
  Tanh,
}

struct FunctionEntry {
  keyword: &'static str,
  code: FuncCode,
}

// The table's source-of-truth ordering is lexicographic on keyword, not on
// code (4.2) -- keep entries alphabetical when adding a function.
const FUNCTION_TABLE: &[FunctionEntry] = &[
  FunctionEntry { keyword: "arccos", code: FuncCode::ArcCos },
  FunctionEntry { keyword: "arccosh", code: FuncCode::ArcCosh },
  FunctionEntry { keyword: "arccot", code: FuncCode::ArcCot },
  FunctionEntry { keyword: "arccoth", code: FuncCode::ArcCoth },
  FunctionEntry { keyword: "arcsin", code: FuncCode::ArcSin },
  FunctionEntry { keyword: "arcsinh", code: FuncCode::ArcSinh },
  FunctionEntry { keyword: "arctan", code: FuncCode::ArcTan },
  FunctionEntry { keyword: "arctanh", code: FuncCode::ArcTanh },
  FunctionEntry { keyword: "cbrt", code: FuncCode::Cbrt },
  FunctionEntry { keyword: "cos", code: FuncCode::Cos },
  FunctionEntry { keyword: "cosh", code: FuncCode::Cosh },
  FunctionEntry { keyword: "cot", code: FuncCode::Cot },
  FunctionEntry { keyword: "coth", code: FuncCode::Coth },
  FunctionEntry { keyword: "exp", code: FuncCode::Exp },
  FunctionEntry { keyword: "lg", code: FuncCode::Lg },
  FunctionEntry { keyword: "ln", code: FuncCode::Ln },
  FunctionEntry { keyword: "sin", code: FuncCode::Sin },
  FunctionEntry { keyword: "sinh", code: FuncCode::Sinh },
  FunctionEntry { keyword: "sqrt", code: FuncCode::Sqrt },
  FunctionEntry { keyword: "tan", code: FuncCode::Tan },
  FunctionEntry { keyword: "tanh", code: FuncCode::Tanh },
];

/// Binary search over the lexicographically sorted keyword table. Used by
/// the parser to recognise a function name before the `(` it must be
/// followed by.
pub fn lookup_function_by_keyword(keyword: &str) -> Option<FuncCode> {
  FUNCTION_TABLE.binary_search_by(|entry| entry.keyword.cmp(keyword)).ok().map(|i| FUNCTION_TABLE[i].code)
}

/// Binary search by code. The discriminant order matches the keyword order
/// for this catalogue, so the table doubles as its own by-code index.
pub fn function_spelling(code: FuncCode) -> &'static str {
  FUNCTION_TABLE
    .binary_search_by_key(&(code as u8), |entry| entry.code as u8)
    .map(|i| FUNCTION_TABLE[i].keyword)
    .expect("every FuncCode variant has a table entry")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lookup_by_keyword_finds_every_table_entry() {
    for entry in FUNCTION_TABLE {
      assert_eq!(lookup_function_by_keyword(entry.keyword), Some(entry.code));
    }
  }

  #[test]
  fn lookup_by_keyword_rejects_unknown_identifiers() {
    assert_eq!(lookup_function_by_keyword("frobnicate"), None);
    assert_eq!(lookup_function_by_keyword(""), None);
  }

  #[test]
  fn function_spelling_round_trips_through_lookup_by_keyword() {
    for entry in FUNCTION_TABLE {
      assert_eq!(lookup_function_by_keyword(function_spelling(entry.code)), Some(entry.code));
    }
  }

  #[test]
  fn table_is_sorted_lexicographically_by_keyword() {
    for pair in FUNCTION_TABLE.windows(2) {
      assert!(pair[0].keyword < pair[1].keyword);
    }
  }

  #[test]
  fn operator_spellings_match_the_grammar_characters() {
    assert_eq!(OpCode::Add.spelling(), "+");
    assert_eq!(OpCode::Sub.spelling(), "-");
    assert_eq!(OpCode::Mul.spelling(), "*");
    assert_eq!(OpCode::Div.spelling(), "/");
    assert_eq!(OpCode::Pow.spelling(), "^");
  }
}
