#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! vls-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns a plain enum into the workspace's standard error type.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already present.
/// * `<ErrorName>Ext` trait adding `.context(...)` to `Result<T, ErrorName>` and to
///   `Result<T, Source>` for every variant carrying a source.
/// * `From<Source>` for every variant with a `source` field (or a field marked
///   `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A module-private `format_context` helper for the `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Variants use named fields; tuple and unit variants are rejected.
/// 3. A variant with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
/// use vls_derive::vls_error;
///
/// #[vls_error]
/// pub enum PageError {
///     #[error("Serialization failed{}: {source}", format_context(.context))]
///     Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal page error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn payload(value: &serde_json::Value) -> Result<String, PageError> {
///     serde_json::to_string(value).context("Encoding JSON-LD")
/// }
/// ```
#[proc_macro_attribute]
pub fn vls_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
