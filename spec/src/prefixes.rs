//! The fixed prefix table used to qualify every generated name.
//!
//! The table is ordered: JSON-LD contexts and Turtle documents list the
//! prefixes in the order they appear here.

use crate::error::GenerationError;

/// Base IRI written into the `@base` entry of both contexts.
pub const CONTEXT_BASE: &str = "http://tiny.cc/dymo-context/";

/// All prefixes in declaration order.
pub const PREFIXES: &[(&str, &str)] = &[
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("sch", "http://schema.org/"),
    ("mo", "http://purl.org/ontology/mo/"),
    ("mt", "http://purl.org/ontology/studio/multitrack#"),
    ("ch", "http://tiny.cc/charm-ontology#"),
    ("dy", "http://tiny.cc/dymo-ontology#"),
    ("mb", "http://tiny.cc/mobile-audio-ontology#"),
    ("ex", "http://tiny.cc/expression-ontology#"),
];

/// An immutable, ordered prefix → namespace mapping.
#[derive(Debug, Clone, Copy)]
pub struct PrefixTable {
    entries: &'static [(&'static str, &'static str)],
}

impl Default for PrefixTable {
    fn default() -> Self {
        Self::new(PREFIXES)
    }
}

impl PrefixTable {
    /// Wraps a static prefix list.
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// All `(prefix, namespace)` pairs in order.
    #[must_use]
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    /// Looks up a namespace by prefix.
    #[must_use]
    pub fn namespace(&self, prefix: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|(_, ns)| *ns)
    }

    /// Returns the table's own `(prefix, namespace)` pair for `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::UnknownPrefix`] if `prefix` is not in the table.
    pub fn entry(&self, prefix: &str) -> Result<(&'static str, &'static str), GenerationError> {
        self.entries
            .iter()
            .copied()
            .find(|(p, _)| *p == prefix)
            .ok_or_else(|| GenerationError::UnknownPrefix(prefix.to_owned()))
    }

    /// Like [`namespace`](Self::namespace), but unknown prefixes are an error.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::UnknownPrefix`] if `prefix` is not in the table.
    pub fn require(&self, prefix: &str) -> Result<&'static str, GenerationError> {
        self.entry(prefix).map(|(_, ns)| ns)
    }

    /// Expands a `prefix:local` name into an absolute IRI.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::UnknownPrefix`] if the name has no colon or
    /// its prefix is not in the table.
    pub fn expand(&self, qualified: &str) -> Result<String, GenerationError> {
        let (prefix, local) = qualified
            .split_once(':')
            .ok_or_else(|| GenerationError::UnknownPrefix(qualified.to_owned()))?;
        Ok(format!("{}{local}", self.require(prefix)?))
    }

    /// Compacts an absolute IRI into `prefix:local` form.
    ///
    /// Picks the longest matching namespace and returns `None` when no
    /// namespace matches or the remainder is not a valid Turtle local name.
    #[must_use]
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.entries
            .iter()
            .filter_map(|(prefix, ns)| iri.strip_prefix(ns).map(|local| (prefix, ns, local)))
            .filter(|(_, _, local)| is_local_name(local))
            .max_by_key(|(_, ns, _)| ns.len())
            .map(|(prefix, _, local)| format!("{prefix}:{local}"))
    }
}

// Conservative subset of Turtle's PN_LOCAL: ASCII letters, digits, `_` and
// `-`, not starting with `-`. The empty local name is valid (`ex:`).
fn is_local_name(local: &str) -> bool {
    !local.starts_with('-')
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
