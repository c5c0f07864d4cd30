//! Eclipse circumstances solver: given a precomputed Besselian-element
//! eclipse record and an observer's geodetic position, computes the
//! four contact times, the time of maximum obscuration, visibility,
//! local eclipse classification, magnitude, and central duration.
//!
//! This crate provides:
//! - The input data model ([`EclipseRecord`], [`Observer`])
//! - The per-instant geometry evaluator ([`EvalAtT`], [`eval_at_t`])
//! - The contact solver ([`compute_circumstances`])

pub mod eval;
pub mod record;
pub mod solver;

pub use eval::{eval_at_t, f_pen, f_umb, EvalAtT};
pub use record::{EclipseKind, EclipseRecord, Observer};
pub use solver::{
    compute_circumstances, compute_circumstances_with_config, Circumstances, DebugInfo,
    LocalKind, SolverConfig,
};
