//! TT/UTC instant construction and ISO-8601 formatting for eclipse records.
//!
//! This crate provides:
//! - Proleptic-Gregorian calendar date arithmetic
//! - Construction of a record's `t0` TT instant, and offsets from it
//! - Delta-T application (TT -> UTC)
//! - Millisecond-precision ISO-8601 UTC formatting

pub mod civil;
pub mod error;
pub mod instant;

pub use civil::{civil_from_days, days_from_civil, parse_ymd};
pub use error::TimeError;
pub use instant::{format_iso8601_utc, TtInstant};
