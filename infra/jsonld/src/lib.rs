//! # JSON-LD
//!
//! A small JSON-LD processor for documents carrying their own contexts.
//!
//! Documents are handled in **expanded form**: every property value is an
//! array and every IRI is absolute. [`expand`] gets there, [`compact`] goes
//! back to a prefixed document and [`to_quads`] feeds a triple store.
//!
//! Not covered: remote contexts, framing, `@reverse`, `@nest`, language and
//! index maps, and named graphs in RDF conversion.
//!
//! ```rust
//! use rescs_jsonld::{Context, compact, expand};
//! use serde_json::json;
//!
//! let doc = json!({
//!     "@context": { "schema": "http://schema.org/" },
//!     "@id": "schema:Thing",
//!     "schema:name": "Thing"
//! });
//! let nodes = expand(&doc).unwrap();
//! assert_eq!(nodes[0]["http://schema.org/name"][0]["@value"], "Thing");
//!
//! let ctx = Context::from_prefixes([("schema", "http://schema.org/")]);
//! assert_eq!(compact(&nodes, &ctx)["schema:name"], "Thing");
//! ```

mod compact;
mod context;
mod error;
mod expand;
pub mod keyword;
pub mod node;
mod rdf;

pub use crate::compact::{Compactor, compact};
pub use crate::context::{Container, Context, TermDefinition, TypeMapping};
pub use crate::error::{JsonLdError, JsonLdErrorExt, Result};
pub use crate::expand::{expand, expand_with};
pub use crate::rdf::to_quads;
