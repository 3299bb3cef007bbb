//! The upgrade hook.
//!
//! Call sites already `await` [`handle_real_upgrade`], so swapping in a real payment
//! processor later does not change them.

use crate::error::BillingError;
use sitely_domain::PlanType;
use tracing::info;

/// Placeholder for the payment-processor upgrade call.
///
/// Emits one diagnostic event and resolves on its first poll. It performs no I/O and
/// changes no state.
pub async fn handle_real_upgrade() {
    info!(target: "sitely_billing", "Real billing integration is not implemented yet");
}

/// Contract for a payment-processor client.
///
/// An implementation authorizes the charge for `target` and persists the plan change,
/// or reports a [`BillingError`].
pub trait BillingProvider {
    fn upgrade(&self, target: PlanType) -> impl Future<Output = Result<(), BillingError>> + Send;
}

/// Provider used until a real integration exists. Delegates to [`handle_real_upgrade`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopBilling;

impl BillingProvider for NoopBilling {
    async fn upgrade(&self, target: PlanType) -> Result<(), BillingError> {
        tracing::debug!(%target, "Upgrade requested");
        handle_real_upgrade().await;
        Ok(())
    }
}
