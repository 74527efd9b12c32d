//! Absolute IRIs of the terms the build tools read or write.
//!
//! Grouped by namespace so call sites read like their compact form
//! (`sh::TARGET_CLASS` for `sh:targetClass`).

/// SHACL, `http://www.w3.org/ns/shacl#`.
pub mod sh {
    pub const NS: &str = "http://www.w3.org/ns/shacl#";

    pub const NODE_SHAPE: &str = "http://www.w3.org/ns/shacl#NodeShape";
    pub const TARGET_CLASS: &str = "http://www.w3.org/ns/shacl#targetClass";
    pub const PROPERTY: &str = "http://www.w3.org/ns/shacl#property";
    pub const AND: &str = "http://www.w3.org/ns/shacl#and";
    pub const OR: &str = "http://www.w3.org/ns/shacl#or";
    pub const PATH: &str = "http://www.w3.org/ns/shacl#path";
    pub const NAME: &str = "http://www.w3.org/ns/shacl#name";
    pub const DESCRIPTION: &str = "http://www.w3.org/ns/shacl#description";
    pub const DATATYPE: &str = "http://www.w3.org/ns/shacl#datatype";
    pub const CLASS: &str = "http://www.w3.org/ns/shacl#class";
    pub const NODE_KIND: &str = "http://www.w3.org/ns/shacl#nodeKind";
    pub const CLOSED: &str = "http://www.w3.org/ns/shacl#closed";
    pub const IGNORED_PROPERTIES: &str = "http://www.w3.org/ns/shacl#ignoredProperties";
}

/// RDF, `http://www.w3.org/1999/02/22-rdf-syntax-ns#`.
pub mod rdf {
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
}

/// RDF Schema, `http://www.w3.org/2000/01/rdf-schema#`.
pub mod rdfs {
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
}

/// XML Schema datatypes, `http://www.w3.org/2001/XMLSchema#`.
pub mod xsd {
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
}

/// schema.org, `http://schema.org/`.
pub mod schema {
    pub const NS: &str = "http://schema.org/";

    pub const THING: &str = "http://schema.org/Thing";
    pub const DOMAIN_INCLUDES: &str = "http://schema.org/domainIncludes";
    pub const RANGE_INCLUDES: &str = "http://schema.org/rangeIncludes";
}

/// Nexus platform vocabulary.
pub mod nxv {
    /// Property of a Nexus schema resource holding its SHACL shapes.
    pub const SHAPES: &str = "https://bluebrain.github.io/nexus/vocabulary/shapes";
}

/// RESCS resources.
pub mod rescs {
    /// The root shape, targeting `schema:Thing`.
    pub const THING_SHAPE: &str = "http://rescs.org/dash/thing/ThingShape";
}
