//! Plan identifier to entitlement lookup.

use sitely_domain::{PlanFeatures, PlanType};
use tracing::debug;

/// `true` only for the exact identifier `"pro"`.
///
/// Case variants, padded strings, `"basic"` and a missing value are all `false`.
#[must_use]
pub fn is_pro(plan: Option<&str>) -> bool {
    PlanType::resolve(plan).is_paid()
}

/// Returns the feature set for `plan`.
///
/// Known identifiers map to their own record. Anything else, including `None`, gets the
/// basic record; that is the fallback branch, not an error.
#[must_use]
pub fn get_plan_features(plan: Option<&str>) -> &'static PlanFeatures {
    let resolved = PlanType::resolve(plan);
    if let Some(raw) = plan
        && raw != resolved.as_ref()
    {
        debug!(plan = raw, fallback = %resolved, "Unknown plan identifier");
    }
    resolved.features()
}
