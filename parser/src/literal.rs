//! Canonical numeric-literal formatting, shared by every component that
//! mints a fresh `Number` node from an `f64` rather than from parsed text:
//! the differentiator's `0`/`1` constants, the simplifier's folded
//! constants, and the evaluator's final result.
//!
//! 9's open question flags the source's `%.0lf` constant-folding format as
//! likely unintentional, since it truncates fractions and breaks 8's
//! round-trip and evaluation-agreement properties for inputs like
//! `0.5 * 2`. This port resolves that in favor of a lossless format: finite
//! values use Rust's default `Display`, which round-trips through
//! `f64::from_str`; non-finite results get a printable, if non-reparseable,
//! spelling.

/// The canonical decimal spelling for `value`, used both as the printed
/// text and as the string the simplifier's literal-equality rules compare
/// against.
pub fn canonical(value: f64) -> String {
  if value.is_nan() {
    "nan".to_string()
  } else if value.is_infinite() {
    if value > 0.0 {
      "inf".to_string()
    } else {
      "-inf".to_string()
    }
  } else {
    format!("{value}")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn integers_print_without_a_trailing_decimal_point() {
    assert_eq!(canonical(2.0), "2");
    assert_eq!(canonical(0.0), "0");
  }

  #[test]
  fn fractions_are_not_truncated() {
    assert_eq!(canonical(0.5), "0.5");
    assert_eq!(canonical(1.0), "1");
  }

  #[test]
  fn non_finite_values_get_a_printable_spelling() {
    assert_eq!(canonical(f64::NAN), "nan");
    assert_eq!(canonical(f64::INFINITY), "inf");
    assert_eq!(canonical(f64::NEG_INFINITY), "-inf");
  }

  #[test]
  fn negative_values_keep_their_sign() {
    assert_eq!(canonical(-3.5), "-3.5");
  }
}
