//! JSON-LD keywords handled by this crate.

pub const CONTEXT: &str = "@context";
pub const ID: &str = "@id";
pub const TYPE: &str = "@type";
pub const GRAPH: &str = "@graph";
pub const VALUE: &str = "@value";
pub const LANGUAGE: &str = "@language";
pub const LIST: &str = "@list";
pub const SET: &str = "@set";
pub const VOCAB: &str = "@vocab";
pub const BASE: &str = "@base";
pub const CONTAINER: &str = "@container";

/// Everything starting with `@` is treated as a keyword.
#[must_use]
pub fn is_keyword(value: &str) -> bool {
    value.starts_with('@')
}
