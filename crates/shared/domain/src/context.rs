/// Prefix mappings of the context every generated graph is compacted with.
///
/// Order is the order in which the prefixes appear in the written `@context`
/// when serialized with insertion order; lookups never depend on it.
pub const PREFIXES: [(&str, &str); 12] = [
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("skos", "http://www.w3.org/2004/02/skos/core#"),
    ("prov", "http://www.w3.org/ns/prov#"),
    ("dcat", "http://www.w3.org/ns/dcat#"),
    ("sh", "http://www.w3.org/ns/shacl#"),
    ("shsh", "http://www.w3.org/ns/shacl-shacl#"),
    ("dcterms", "http://purl.org/dc/terms/"),
    ("schema", "http://schema.org/"),
    ("rescs", "http://rescs.org/"),
];

/// Looks up the namespace IRI bound to `prefix` in [`PREFIXES`].
#[must_use]
pub fn namespace(prefix: &str) -> Option<&'static str> {
    PREFIXES.iter().find(|(p, _)| *p == prefix).map(|(_, ns)| *ns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{rdf, schema, sh};

    #[test]
    fn prefixes_agree_with_vocabulary() {
        assert_eq!(namespace("sh"), Some(sh::NS));
        assert_eq!(namespace("rdf"), Some(rdf::NS));
        assert_eq!(namespace("schema"), Some(schema::NS));
        assert_eq!(namespace("nxv"), None);
    }

    #[test]
    fn every_namespace_ends_with_a_delimiter() {
        for (prefix, ns) in PREFIXES {
            assert!(ns.ends_with('/') || ns.ends_with('#'), "{prefix} -> {ns}");
        }
    }
}
