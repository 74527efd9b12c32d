#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros for the build tool crates.
//!
//! ## Usage
//! Declare the dependency through the workspace:
//! ```toml
//! [dependencies]
//! rescs-derive.workspace = true
//! ```
//!
//! Consumers also need `thiserror` in their own dependency list because the
//! expansion refers to `::thiserror::Error`.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// An attribute macro for defining crate-level error enums.
///
/// Turns a plain enum into an error type with context support, so every crate in
/// the workspace reports failures the same way.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Type Aliasing**: Emits `pub type Result<T, E = ErrorName>` next to the enum.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source`
///   field (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source` field.
/// 4. Tuple or unit variants are rejected.
/// 5. At most one variant per source type, otherwise the `From` impls overlap.
///
/// # Example
///
/// ```rust,ignore
/// use rescs_derive::rescs_error;
/// use std::borrow::Cow;
///
/// #[rescs_error]
/// pub enum ShapesError {
///     #[error("I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String> {
///     std::fs::read_to_string(path).context("Reading shape file")
/// }
/// ```
#[proc_macro_attribute]
pub fn rescs_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
