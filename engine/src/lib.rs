//! The three tightly coupled subsystems that sit on top of the AST (D):
//! the numeric evaluator (F), the symbolic differentiator (G) and the
//! algebraic simplifier (H), plus a structural validator backing the
//! `Tree*` row of the error taxonomy (I).

pub mod differentiate;
pub mod evaluate;
pub mod simplify;
pub mod validate;

pub use differentiate::differentiate;
pub use evaluate::{evaluate, evaluate_to_literal, EvalError, ValueSource, VariableBindings};
pub use simplify::simplify;
pub use validate::{validate, TreeError};
