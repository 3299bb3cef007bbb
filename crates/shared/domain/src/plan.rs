//! Subscription plans and the entitlements attached to each of them.
//!
//! The table is fixed at compile time: every [`PlanType`] maps to exactly one
//! static [`PlanFeatures`] record, and nothing mutates it afterwards.

use crate::constants::PRO;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Subscription tier identifier.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlanType {
    #[default]
    Basic,
    Pro,
}

impl PlanType {
    /// Leniently resolves an optional plan identifier.
    ///
    /// Only the exact string `"pro"` selects [`PlanType::Pro`]. Anything else,
    /// including a missing value, falls back to [`PlanType::Basic`].
    /// Use [`str::parse`] when an unknown identifier should be reported instead.
    #[must_use]
    pub fn resolve(plan: Option<&str>) -> Self {
        match plan {
            Some(PRO) => Self::Pro,
            _ => Self::Basic,
        }
    }

    /// Returns the entitlements of this plan.
    #[must_use]
    pub const fn features(self) -> &'static PlanFeatures {
        match self {
            Self::Basic => &BASIC_FEATURES,
            Self::Pro => &PRO_FEATURES,
        }
    }

    /// `true` for the paid tier.
    #[must_use]
    pub const fn is_paid(self) -> bool {
        matches!(self, Self::Pro)
    }
}

/// Feature entitlements granted by a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlanFeatures {
    /// Maximum number of sites an account may own.
    pub max_sites: NonZeroU32,
    /// Whether sites may be served from a custom domain.
    pub custom_domain: bool,
    /// Whether the advanced template gallery is unlocked.
    pub advanced_templates: bool,
}

impl PlanFeatures {
    /// `true` if an account holding `count` sites stays within the quota.
    #[must_use]
    pub const fn allows_sites(&self, count: u32) -> bool {
        count <= self.max_sites.get()
    }

    /// Number of sites that can still be created when `used` already exist.
    #[must_use]
    pub const fn remaining_sites(&self, used: u32) -> u32 {
        self.max_sites.get().saturating_sub(used)
    }
}

const fn site_quota(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(n) => n,
        None => panic!("site quota must be positive"),
    }
}

/// Entitlements of the free tier, also used for any unrecognized plan.
pub static BASIC_FEATURES: PlanFeatures =
    PlanFeatures { max_sites: site_quota(1), custom_domain: false, advanced_templates: false };

/// Entitlements of the paid tier.
pub static PRO_FEATURES: PlanFeatures =
    PlanFeatures { max_sites: site_quota(10), custom_domain: true, advanced_templates: true };
