//! Kernel utilities shared across slices and apps.
//! Keep this crate lightweight; today it owns layered config loading.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use sitely_kernel::config::load_config;
//! use sitely_kernel::domain::config::ShellConfig;
//!
//! let cfg: ShellConfig = load_config(Some("sitely.toml")).unwrap_or_default();
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use sitely_domain as domain;
