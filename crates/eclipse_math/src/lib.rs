//! Polynomial evaluation and scalar root-finding primitives.
//!
//! This crate provides:
//! - Horner-rule evaluation of lowest-order-first coefficient sequences
//! - Sign-change bracketing over a scan window
//! - Bisection refinement of a bracketed root

pub mod poly;
pub mod roots;

pub use poly::horner_eval;
pub use roots::{bisect, bracket_roots, BisectResult, Bracket, DEFAULT_MAX_ITERATIONS};
