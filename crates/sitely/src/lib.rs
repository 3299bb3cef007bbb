//! Facade crate for Sitely features and shared modules.
//! Re-exports domain/kernel primitives and the feature slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `sitely` with the desired feature flags (`client` for the Dioxus components).
//! - Reach plan entitlements through [`features::billing`].

pub use sitely_domain as domain;
pub use sitely_kernel as kernel;
#[cfg(feature = "client")]
pub use sitely_ui as ui;

/// Feature slices and build-time introspection.
pub mod features {
    pub use sitely_billing as billing;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "billing",
        #[cfg(feature = "client")]
        "client",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
