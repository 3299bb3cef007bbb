//! # Billing
//!
//! Answers "what may this account do?" from the plan identifier reported by the
//! subscription service, and reserves the seam where a payment processor will plug in.
//!
//! * **Resolution ([`resolver`])**: [`is_pro`] and [`get_plan_features`] are total.
//!   Unknown or missing identifiers get the basic tier instead of an error.
//! * **Upgrades ([`upgrade`])**: [`handle_real_upgrade`] is an awaitable placeholder.
//!   [`BillingProvider`] is the contract a real integration will satisfy.
//! * **Entitlements ([`Entitlements`])**: a resolved plan bundled with quota helpers for
//!   gated UI.
//!
//! ```rust
//! use sitely_billing::{get_plan_features, is_pro};
//!
//! assert!(is_pro(Some("pro")));
//! assert_eq!(get_plan_features(Some("gold")).max_sites.get(), 1);
//! ```

mod entitlements;
mod error;
pub mod resolver;
pub mod upgrade;

pub use crate::entitlements::Entitlements;
pub use crate::error::{BillingError, BillingErrorExt};
pub use crate::resolver::{get_plan_features, is_pro};
pub use crate::upgrade::{BillingProvider, NoopBilling, handle_real_upgrade};
pub use sitely_domain::{PlanFeatures, PlanType};
