use crate::error::{JsonLdError, Result};
use crate::keyword::{BASE, CONTAINER, CONTEXT, ID, LIST, SET, TYPE, VOCAB, is_keyword};
use fxhash::FxHashMap;
use serde_json::{Map, Value};

/// Container types understood for `@container`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    List,
    Set,
}

/// Value coercion declared by a term's `@type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeMapping {
    /// `@id`: string values are IRIs, resolved without the vocabulary mapping.
    Id,
    /// `@vocab`: string values are IRIs, resolved like property names.
    Vocab,
    /// Typed literal with the given datatype IRI.
    Datatype(String),
}

/// A single term definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermDefinition {
    pub iri: String,
    pub type_mapping: Option<TypeMapping>,
    pub container: Option<Container>,
    simple: bool,
}

impl TermDefinition {
    fn simple(iri: String) -> Self {
        Self { iri, type_mapping: None, container: None, simple: true }
    }

    /// Usable to build compact IRIs (`prefix:suffix`) when compacting.
    #[must_use]
    pub fn is_prefix(&self) -> bool {
        self.simple && (self.iri.ends_with('/') || self.iri.ends_with('#'))
    }

    fn to_json(&self) -> Value {
        if self.simple {
            return Value::String(self.iri.clone());
        }

        let mut obj = Map::new();
        obj.insert(ID.to_owned(), Value::String(self.iri.clone()));
        if let Some(mapping) = &self.type_mapping {
            let ty = match mapping {
                TypeMapping::Id => ID.to_owned(),
                TypeMapping::Vocab => VOCAB.to_owned(),
                TypeMapping::Datatype(iri) => iri.clone(),
            };
            obj.insert(TYPE.to_owned(), Value::String(ty));
        }
        if let Some(container) = self.container {
            let name = match container {
                Container::List => LIST,
                Container::Set => SET,
            };
            obj.insert(CONTAINER.to_owned(), Value::String(name.to_owned()));
        }
        Value::Object(obj)
    }
}

/// An active JSON-LD context.
///
/// Only local contexts are processed; a context given as a URL fails with
/// [`JsonLdError::RemoteContext`]. Term definitions keep their declaration
/// order so [`Context::to_json`] reproduces the input layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    base: Option<String>,
    vocab: Option<String>,
    terms: Vec<(String, TermDefinition)>,
}

impl Context {
    /// Parses a `@context` value against an empty active context.
    ///
    /// # Errors
    /// Fails on remote contexts, cyclic term definitions and malformed entries.
    pub fn parse(value: &Value) -> Result<Self> {
        Self::default().merge(value)
    }

    /// Builds a context made of plain prefix mappings.
    pub fn from_prefixes<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut context = Self::default();
        for (prefix, iri) in pairs {
            context.insert(prefix, TermDefinition::simple(iri.to_owned()));
        }
        context
    }

    /// Processes `local` on top of this context and returns the result.
    ///
    /// `null` resets to an empty context and arrays are applied in order.
    ///
    /// # Errors
    /// See [`Context::parse`].
    pub fn merge(&self, local: &Value) -> Result<Self> {
        match local {
            Value::Null => Ok(Self::default()),
            Value::String(url) => Err(JsonLdError::RemoteContext { url: url.clone(), context: None }),
            Value::Array(items) => {
                items.iter().try_fold(self.clone(), |active, item| active.merge(item))
            },
            Value::Object(map) => match map.get(CONTEXT) {
                Some(inner) => self.merge(inner),
                None => self.merge_map(map),
            },
            other => Err(JsonLdError::InvalidContext {
                message: format!("unexpected context value {other}").into(),
                context: None,
            }),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.vocab.is_none() && self.base.is_none()
    }

    #[must_use]
    pub fn vocab(&self) -> Option<&str> {
        self.vocab.as_deref()
    }

    #[must_use]
    pub fn term(&self, name: &str) -> Option<&TermDefinition> {
        self.terms.iter().find(|(term, _)| term == name).map(|(_, def)| def)
    }

    pub fn terms(&self) -> impl Iterator<Item = (&str, &TermDefinition)> {
        self.terms.iter().map(|(term, def)| (term.as_str(), def))
    }

    /// Serializes the context back into its `@context` object form.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        if let Some(base) = &self.base {
            obj.insert(BASE.to_owned(), Value::String(base.clone()));
        }
        if let Some(vocab) = &self.vocab {
            obj.insert(VOCAB.to_owned(), Value::String(vocab.clone()));
        }
        for (term, def) in &self.terms {
            obj.insert(term.clone(), def.to_json());
        }
        Value::Object(obj)
    }

    /// Expands a term, compact IRI or relative IRI.
    ///
    /// With `vocab` set, terms and the `@vocab` mapping apply (property names,
    /// `@type` values); otherwise only prefixes and `@base` do (`@id` values).
    /// Values that cannot be made absolute are returned unchanged.
    #[must_use]
    pub fn expand_iri(&self, value: &str, vocab: bool) -> String {
        if is_keyword(value) {
            return value.to_owned();
        }
        if vocab && let Some(def) = self.term(value) {
            return def.iri.clone();
        }
        if let Some((prefix, suffix)) = split_compact_iri(value) {
            if prefix == "_" {
                return value.to_owned();
            }
            if let Some(def) = self.term(prefix) {
                return format!("{}{suffix}", def.iri);
            }
            return value.to_owned();
        }
        if vocab {
            if let Some(mapping) = &self.vocab {
                return format!("{mapping}{value}");
            }
        } else if let Some(base) = &self.base {
            return resolve_relative(base, value);
        }
        value.to_owned()
    }

    fn insert(&mut self, name: &str, def: TermDefinition) {
        match self.terms.iter_mut().find(|(term, _)| term == name) {
            Some((_, existing)) => *existing = def,
            None => self.terms.push((name.to_owned(), def)),
        }
    }

    fn remove(&mut self, name: &str) {
        self.terms.retain(|(term, _)| term != name);
    }

    fn merge_map(&self, map: &Map<String, Value>) -> Result<Self> {
        let mut result = self.clone();

        match map.get(BASE) {
            None => {},
            Some(Value::Null) => result.base = None,
            Some(Value::String(base)) => {
                result.base = Some(match &self.base {
                    Some(current) if !is_absolute_iri(base) => resolve_relative(current, base),
                    _ => base.clone(),
                });
            },
            Some(other) => return Err(invalid(format!("@base must be a string, found {other}"))),
        }

        match map.get(VOCAB) {
            None => {},
            Some(Value::Null) => result.vocab = None,
            Some(Value::String(vocab)) => result.vocab = Some(result.expand_iri(vocab, true)),
            Some(other) => return Err(invalid(format!("@vocab must be a string, found {other}"))),
        }

        let mut defined = FxHashMap::default();
        for term in map.keys().filter(|key| !is_keyword(key)) {
            result.define(map, term, &mut defined)?;
        }

        Ok(result)
    }

    /// Creates the definition of `term`, defining the terms it depends on first.
    fn define(
        &mut self,
        local: &Map<String, Value>,
        term: &str,
        defined: &mut FxHashMap<String, bool>,
    ) -> Result<()> {
        match defined.get(term) {
            Some(true) => return Ok(()),
            Some(false) => {
                return Err(JsonLdError::CyclicIriMapping { term: term.to_owned(), context: None });
            },
            None => {},
        }
        defined.insert(term.to_owned(), false);

        let def = match local.get(term) {
            None | Some(Value::Null) => None,
            Some(Value::String(id)) => {
                Some(TermDefinition::simple(self.expand_local(local, term, id, defined)?))
            },
            Some(Value::Object(entry)) => self.expanded_definition(local, term, entry, defined)?,
            Some(other) => {
                return Err(invalid(format!("term '{term}' has an invalid definition {other}")));
            },
        };

        match def {
            Some(def) => self.insert(term, def),
            None => self.remove(term),
        }
        defined.insert(term.to_owned(), true);
        Ok(())
    }

    fn expanded_definition(
        &mut self,
        local: &Map<String, Value>,
        term: &str,
        entry: &Map<String, Value>,
        defined: &mut FxHashMap<String, bool>,
    ) -> Result<Option<TermDefinition>> {
        let iri = match entry.get(ID) {
            Some(Value::Null) => return Ok(None),
            Some(Value::String(id)) => self.expand_local(local, term, id, defined)?,
            Some(other) => return Err(invalid(format!("@id of '{term}' must be a string, found {other}"))),
            None if split_compact_iri(term).is_some() => self.expand_local(local, term, term, defined)?,
            None => match &self.vocab {
                Some(vocab) => format!("{vocab}{term}"),
                None => return Err(invalid(format!("term '{term}' has no IRI mapping"))),
            },
        };

        let type_mapping = match entry.get(TYPE) {
            None => None,
            Some(Value::String(ty)) if ty == ID => Some(TypeMapping::Id),
            Some(Value::String(ty)) if ty == VOCAB => Some(TypeMapping::Vocab),
            Some(Value::String(ty)) => {
                let datatype = self.expand_local(local, term, ty, defined)?;
                if !is_absolute_iri(&datatype) {
                    return Err(invalid(format!("@type of '{term}' is not an IRI: {datatype}")));
                }
                Some(TypeMapping::Datatype(datatype))
            },
            Some(other) => return Err(invalid(format!("@type of '{term}' must be a string, found {other}"))),
        };

        let container = match entry.get(CONTAINER) {
            Some(Value::String(name)) => container_of(name),
            Some(Value::Array(names)) => names.iter().filter_map(Value::as_str).find_map(container_of),
            _ => None,
        };

        Ok(Some(TermDefinition { iri, type_mapping, container, simple: false }))
    }

    /// Vocabulary-relative expansion inside the local context being processed.
    fn expand_local(
        &mut self,
        local: &Map<String, Value>,
        term: &str,
        value: &str,
        defined: &mut FxHashMap<String, bool>,
    ) -> Result<String> {
        if is_keyword(value) {
            return Ok(value.to_owned());
        }
        if value != term && local.contains_key(value) {
            self.define(local, value, defined)?;
        } else if value == term && split_compact_iri(value).is_none() {
            return Err(JsonLdError::CyclicIriMapping { term: term.to_owned(), context: None });
        }
        if let Some((prefix, _)) = split_compact_iri(value)
            && prefix != term
            && local.contains_key(prefix)
        {
            self.define(local, prefix, defined)?;
        }
        Ok(self.expand_iri(value, true))
    }
}

fn container_of(name: &str) -> Option<Container> {
    match name {
        LIST => Some(Container::List),
        SET => Some(Container::Set),
        _ => None,
    }
}

fn invalid(message: String) -> JsonLdError {
    JsonLdError::InvalidContext { message: message.into(), context: None }
}

/// Splits `prefix:suffix`, rejecting absolute IRIs such as `http://...`.
pub(crate) fn split_compact_iri(value: &str) -> Option<(&str, &str)> {
    let (prefix, suffix) = value.split_once(':')?;
    if prefix.is_empty() || prefix.contains('/') || suffix.starts_with("//") {
        return None;
    }
    Some((prefix, suffix))
}

/// `scheme:` per RFC 3986.
pub(crate) fn is_absolute_iri(value: &str) -> bool {
    value.split_once(':').is_some_and(|(scheme, _)| {
        scheme.as_bytes().first().is_some_and(u8::is_ascii_alphabetic)
            && scheme.bytes().all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
    })
}

fn resolve_relative(base: &str, relative: &str) -> String {
    if relative.is_empty() {
        return base.to_owned();
    }
    if is_absolute_iri(relative) || relative.starts_with("_:") {
        return relative.to_owned();
    }
    if relative.starts_with('#') {
        let stem = base.split_once('#').map_or(base, |(stem, _)| stem);
        return format!("{stem}{relative}");
    }
    let stem = base.rfind('/').map_or(base, |idx| &base[..=idx]);
    format!("{stem}{relative}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_context_is_rejected() {
        let err = Context::parse(&json!("https://example.org/context.json")).unwrap_err();
        assert!(matches!(err, JsonLdError::RemoteContext { .. }));
    }

    #[test]
    fn terms_may_refer_to_later_prefixes() {
        let ctx = Context::parse(&json!({
            "name": { "@id": "schema:name" },
            "age": { "@id": "schema:age", "@type": "xsd:integer" },
            "schema": "http://schema.org/",
            "xsd": "http://www.w3.org/2001/XMLSchema#"
        }))
        .unwrap();

        assert_eq!(ctx.expand_iri("name", true), "http://schema.org/name");
        let age = ctx.term("age").unwrap();
        assert_eq!(
            age.type_mapping,
            Some(TypeMapping::Datatype("http://www.w3.org/2001/XMLSchema#integer".into()))
        );
        assert!(!age.is_prefix());
        assert!(ctx.term("schema").unwrap().is_prefix());
    }

    #[test]
    fn cyclic_terms_are_rejected() {
        let err = Context::parse(&json!({ "a": "b", "b": "a" })).unwrap_err();
        assert!(matches!(err, JsonLdError::CyclicIriMapping { .. }));
    }

    #[test]
    fn arrays_merge_and_null_resets() {
        let ctx = Context::parse(&json!([
            { "sh": "http://www.w3.org/ns/shacl#" },
            { "@vocab": "http://schema.org/" }
        ]))
        .unwrap();
        assert_eq!(ctx.expand_iri("sh:path", true), "http://www.w3.org/ns/shacl#path");
        assert_eq!(ctx.expand_iri("Person", true), "http://schema.org/Person");
        assert_eq!(ctx.expand_iri("Person", false), "Person");

        let reset = ctx.merge(&json!([null, { "ex": "http://example.org/" }])).unwrap();
        assert!(reset.term("sh").is_none());
        assert!(reset.vocab().is_none());
    }

    #[test]
    fn base_resolves_relative_ids() {
        let ctx = Context::parse(&json!({ "@base": "http://rescs.org/dash/thing/" })).unwrap();
        assert_eq!(ctx.expand_iri("ThingShape", false), "http://rescs.org/dash/thing/ThingShape");
        assert_eq!(ctx.expand_iri("http://other.org/x", false), "http://other.org/x");
    }

    #[test]
    fn list_container_and_json_round_trip() {
        let raw = json!({
            "sh": "http://www.w3.org/ns/shacl#",
            "and": { "@id": "sh:and", "@container": "@list" },
            "class": { "@id": "sh:class", "@type": "@id" }
        });
        let ctx = Context::parse(&raw).unwrap();
        assert_eq!(ctx.term("and").unwrap().container, Some(Container::List));
        assert_eq!(ctx.term("class").unwrap().type_mapping, Some(TypeMapping::Id));

        let written = ctx.to_json();
        assert_eq!(written["sh"], json!("http://www.w3.org/ns/shacl#"));
        assert_eq!(written["and"]["@container"], json!("@list"));
        assert_eq!(Context::parse(&written).unwrap(), ctx);
    }

    #[test]
    fn absolute_iri_detection() {
        assert!(is_absolute_iri("http://schema.org/Thing"));
        assert!(is_absolute_iri("urn:uuid:1"));
        assert!(!is_absolute_iri("_:b0"));
        assert!(!is_absolute_iri("Thing"));
        assert_eq!(split_compact_iri("schema:Thing"), Some(("schema", "Thing")));
        assert_eq!(split_compact_iri("http://schema.org/"), None);
    }
}
