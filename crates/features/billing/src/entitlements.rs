use crate::resolver::get_plan_features;
use sitely_domain::{PlanFeatures, PlanType};

/// A plan resolved once, with the questions gated UI asks about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entitlements {
    plan: PlanType,
    features: &'static PlanFeatures,
}

impl Entitlements {
    /// Resolves leniently; see [`get_plan_features`].
    #[must_use]
    pub fn resolve(plan: Option<&str>) -> Self {
        Self { plan: PlanType::resolve(plan), features: get_plan_features(plan) }
    }

    #[must_use]
    pub const fn plan(&self) -> PlanType {
        self.plan
    }

    #[must_use]
    pub const fn features(&self) -> &'static PlanFeatures {
        self.features
    }

    #[must_use]
    pub const fn is_pro(&self) -> bool {
        self.plan.is_paid()
    }

    /// `true` if one more site fits next to `existing` ones.
    #[must_use]
    pub const fn can_create_site(&self, existing: u32) -> bool {
        existing < self.features.max_sites.get()
    }
}

impl Default for Entitlements {
    fn default() -> Self {
        Self::from(PlanType::default())
    }
}

impl From<PlanType> for Entitlements {
    fn from(plan: PlanType) -> Self {
        Self { plan, features: plan.features() }
    }
}
