//! Insurance risk profiling: applicant intake, rule-based scoring, and the HTTP
//! surface that exposes them.

pub mod config;
pub mod error;
pub mod policies;
pub mod telemetry;
