//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O, networking, or heavy logic. Just data and simple helpers.

pub mod config;
pub mod constants;
pub mod plan;

pub use crate::plan::{BASIC_FEATURES, PRO_FEATURES, PlanFeatures, PlanType};
