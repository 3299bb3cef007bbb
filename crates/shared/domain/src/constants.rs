//! Canonical plan identifiers as they appear on the wire and in config files.

pub const BASIC: &str = "basic";
pub const PRO: &str = "pro";
