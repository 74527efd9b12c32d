use crate::context::{Container, Context, TypeMapping};
use crate::keyword::{CONTEXT, GRAPH, ID, LANGUAGE, LIST, TYPE, VALUE, is_keyword};
use fxhash::FxHashMap;
use serde_json::{Map, Value};

/// Compacts expanded node objects with `context`.
///
/// A single node becomes the document itself, several nodes are wrapped in
/// `@graph`. `@context` is emitted unless the context is empty.
#[must_use]
pub fn compact(nodes: &[Value], context: &Context) -> Value {
    let compactor = Compactor::new(context);
    let mut items: Vec<Value> = nodes.iter().map(|node| compactor.element(None, node)).collect();

    let mut out = Map::new();
    if !context.is_empty() {
        out.insert(CONTEXT.to_owned(), context.to_json());
    }
    match items.pop() {
        None => {},
        Some(Value::Object(node)) if items.is_empty() => out.extend(node),
        Some(last) => {
            items.push(last);
            out.insert(GRAPH.to_owned(), Value::Array(items));
        },
    }
    Value::Object(out)
}

/// Reverse lookup tables built once per compaction.
///
/// Prefix IRIs are sorted longest-first so the most specific prefix wins.
#[derive(Debug)]
pub struct Compactor<'a> {
    context: &'a Context,
    exact: FxHashMap<&'a str, &'a str>,
    prefixes: Vec<(&'a str, &'a str)>,
}

impl<'a> Compactor<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        let mut exact = FxHashMap::default();
        let mut prefixes = Vec::new();
        for (term, def) in context.terms() {
            if is_keyword(&def.iri) {
                continue;
            }
            if def.type_mapping.is_none() && def.container.is_none() {
                exact.entry(def.iri.as_str()).or_insert(term);
            }
            if def.is_prefix() {
                prefixes.push((def.iri.as_str(), term));
            }
        }
        prefixes.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.1.cmp(b.1)));
        Self { context, exact, prefixes }
    }

    /// Compacts an IRI in a property or `@type` position.
    #[must_use]
    pub fn compact_vocab(&self, iri: &str) -> String {
        self.compact_iri(iri, true)
    }

    /// Compacts an IRI in an `@id` position: prefixes only, never `@vocab`.
    #[must_use]
    pub fn compact_id(&self, iri: &str) -> String {
        self.compact_iri(iri, false)
    }

    fn compact_iri(&self, iri: &str, vocab: bool) -> String {
        if is_keyword(iri) {
            return iri.to_owned();
        }
        if vocab {
            if let Some(term) = self.exact.get(iri) {
                return (*term).to_owned();
            }
            if let Some(suffix) = self.context.vocab().and_then(|v| iri.strip_prefix(v))
                && !suffix.is_empty()
                && self.context.term(suffix).is_none()
            {
                return suffix.to_owned();
            }
        }
        for (namespace, prefix) in &self.prefixes {
            let Some(suffix) = iri.strip_prefix(namespace) else { continue };
            if suffix.is_empty() {
                continue;
            }
            let candidate = format!("{prefix}:{suffix}");
            if self.context.term(&candidate).is_some_and(|def| def.iri != iri) {
                continue;
            }
            return candidate;
        }
        iri.to_owned()
    }

    fn element(&self, property: Option<&str>, value: &Value) -> Value {
        match value {
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| self.element(property, item)).collect())
            },
            Value::Object(map) => self.object(property, map),
            other => other.clone(),
        }
    }

    fn object(&self, property: Option<&str>, map: &Map<String, Value>) -> Value {
        let def = property.and_then(|p| self.context.term(p));

        if map.contains_key(VALUE) {
            return self.value(def.and_then(|d| d.type_mapping.as_ref()), map);
        }

        if let Some(list) = map.get(LIST) {
            let items = list.as_array().map_or_else(Vec::new, |items| {
                items.iter().map(|item| self.element(property, item)).collect()
            });
            if def.is_some_and(|d| d.container == Some(Container::List)) {
                return Value::Array(items);
            }
            let mut out = Map::new();
            out.insert(LIST.to_owned(), Value::Array(items));
            return Value::Object(out);
        }

        if map.len() == 1
            && let Some(id) = map.get(ID).and_then(Value::as_str)
        {
            match def.and_then(|d| d.type_mapping.as_ref()) {
                Some(TypeMapping::Id) => return Value::String(self.compact_id(id)),
                Some(TypeMapping::Vocab) => return Value::String(self.compact_vocab(id)),
                _ => {},
            }
        }

        let mut keys: Vec<&String> = map.keys().collect();
        keys.sort();

        let mut out = Map::new();
        for key in keys {
            let value = &map[key.as_str()];
            match key.as_str() {
                ID => {
                    if let Some(id) = value.as_str() {
                        out.insert(ID.to_owned(), Value::String(self.compact_id(id)));
                    }
                },
                TYPE => {
                    let types: Vec<Value> = as_slice(value)
                        .iter()
                        .filter_map(Value::as_str)
                        .map(|ty| Value::String(self.compact_vocab(ty)))
                        .collect();
                    out.insert(TYPE.to_owned(), unwrap_single(types));
                },
                GRAPH => {
                    out.insert(GRAPH.to_owned(), self.element(Some(GRAPH), value));
                },
                keyword if is_keyword(keyword) => {},
                iri => {
                    let term = self.compact_vocab(iri);
                    let container = self.context.term(&term).and_then(|d| d.container);
                    let items: Vec<Value> = as_slice(value)
                        .iter()
                        .map(|item| self.element(Some(term.as_str()), item))
                        .collect();
                    let compacted = if container == Some(Container::Set) {
                        Value::Array(items)
                    } else {
                        unwrap_single(items)
                    };
                    out.insert(term, compacted);
                },
            }
        }
        Value::Object(out)
    }

    fn value(&self, mapping: Option<&TypeMapping>, map: &Map<String, Value>) -> Value {
        let raw = map.get(VALUE).cloned().unwrap_or(Value::Null);
        let datatype = map.get(TYPE).and_then(Value::as_str);
        let language = map.get(LANGUAGE).and_then(Value::as_str);
        let mapped = match mapping {
            Some(TypeMapping::Datatype(iri)) => Some(iri.as_str()),
            _ => None,
        };

        if language.is_none() && datatype == mapped {
            return raw;
        }

        let mut out = Map::new();
        out.insert(VALUE.to_owned(), raw);
        if let Some(datatype) = datatype {
            out.insert(TYPE.to_owned(), Value::String(self.compact_vocab(datatype)));
        }
        if let Some(language) = language {
            out.insert(LANGUAGE.to_owned(), Value::String(language.to_owned()));
        }
        Value::Object(out)
    }
}

fn as_slice(value: &Value) -> &[Value] {
    match value {
        Value::Array(items) => items,
        other => std::slice::from_ref(other),
    }
}

fn unwrap_single(mut items: Vec<Value>) -> Value {
    if items.len() == 1 {
        items.pop().unwrap_or(Value::Null)
    } else {
        Value::Array(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_prefix_wins() {
        let ctx = Context::from_prefixes([
            ("rescs", "http://rescs.org/"),
            ("thing", "http://rescs.org/dash/thing/"),
        ]);
        let compactor = Compactor::new(&ctx);
        assert_eq!(compactor.compact_id("http://rescs.org/dash/thing/ThingShape"), "thing:ThingShape");
        assert_eq!(compactor.compact_id("http://rescs.org/Other"), "rescs:Other");
        assert_eq!(compactor.compact_vocab("http://rescs.org/"), "rescs");
        assert_eq!(compactor.compact_id("http://rescs.org/"), "http://rescs.org/");
        assert_eq!(compactor.compact_id("https://example.org/x"), "https://example.org/x");
    }

    #[test]
    fn vocab_applies_to_properties_only() {
        let ctx = Context::parse(&serde_json::json!({ "@vocab": "http://schema.org/" })).unwrap();
        let compactor = Compactor::new(&ctx);
        assert_eq!(compactor.compact_vocab("http://schema.org/name"), "name");
        assert_eq!(compactor.compact_id("http://schema.org/name"), "http://schema.org/name");
    }
}
