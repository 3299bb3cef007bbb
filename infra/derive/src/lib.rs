#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Sitely crates:
//!
//! * [`macro@sitely_error`] turns an enum into a context-aware error type.
//! * [`macro@main`] bootstraps a Tokio runtime from a named profile. Consumers use it
//!   through `sitely_runtime::main`, which re-exports it.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, parse_macro_input};

/// Attribute macro to bootstrap a Tokio runtime around an `async fn main`.
///
/// # Arguments
///
/// * `current_thread` - single-threaded scheduler; the shell default.
/// * `multi_thread` - work-stealing scheduler sized from available parallelism.
/// * *(none)* - same as `multi_thread`.
///
/// The annotated function must be `async` and return a `Result`.
///
/// # Examples
///
/// ```rust,ignore
/// #[sitely_runtime::main(current_thread)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for domain-specific error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>`, and for
///   `Result<T, Source>` of every variant with a source field.
/// * `From<Source>` for every variant with a source field.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant is present.
/// * A private `format_context` helper for use in `#[error(...)]` strings.
///
/// # Requirements
///
/// Every variant uses named fields. A variant with a `source` field (or a field marked
/// `#[source]`/`#[from]`) must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[sitely_derive::sitely_error]
/// pub enum BillingError {
///     #[error("Network failure{}: {source}", format_context(.context))]
///     Network { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal billing error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn sitely_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
