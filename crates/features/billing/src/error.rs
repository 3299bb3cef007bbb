use std::borrow::Cow;

/// Failures a real billing integration can report.
///
/// Nothing in this crate produces them yet; [`crate::handle_real_upgrade`] cannot fail.
#[sitely_derive::sitely_error]
pub enum BillingError {
    /// The payment processor declined or could not authorize the charge.
    #[error("Payment authorization failed{}: {message}", format_context(.context))]
    Authorization { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The payment processor could not be reached.
    #[error("Billing network failure{}: {message}", format_context(.context))]
    Network { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal billing error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
