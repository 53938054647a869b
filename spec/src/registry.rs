//! Term registry: short name ↔ full URI bookkeeping.
//!
//! Every class, property and individual declared during a run is recorded
//! once. Builders refer to earlier declarations by short name, and the
//! constants module is keyed by the full URI.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{GenerationError, Result};

/// One declared term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryEntry {
    /// Local name the term was declared under (unique per run).
    pub short_name: String,
    /// Namespace IRI + local name.
    pub full_uri: String,
    /// JSON-LD context term.
    pub term: String,
}

/// Maps short names to URIs and URIs back to terms.
#[derive(Debug, Default)]
pub struct TermRegistry {
    entries: Vec<RegistryEntry>,
    by_name: HashMap<String, usize>,
    by_uri: HashMap<String, usize>,
}

impl TermRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `short_name → full_uri` and `full_uri → term`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::DuplicateDeclaration`] if `short_name` (or
    /// the URI it maps to) is already registered.
    pub fn insert(&mut self, short_name: &str, full_uri: String, term: &str) -> Result<()> {
        self.check(short_name, &full_uri)?;
        let idx = self.entries.len();
        self.by_name.insert(short_name.to_owned(), idx);
        self.by_uri.insert(full_uri.clone(), idx);
        self.entries.push(RegistryEntry {
            short_name: short_name.to_owned(),
            full_uri,
            term: term.to_owned(),
        });
        Ok(())
    }

    /// Fails exactly when [`insert`](Self::insert) would, without recording anything.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::DuplicateDeclaration`] if `short_name` or
    /// `full_uri` is already registered.
    pub fn check(&self, short_name: &str, full_uri: &str) -> Result<()> {
        let existing = self
            .by_name
            .get(short_name)
            .or_else(|| self.by_uri.get(full_uri));
        match existing {
            Some(&idx) => Err(GenerationError::DuplicateDeclaration {
                name: short_name.to_owned(),
                existing: self.entries[idx].full_uri.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Returns the full URI for a declared short name.
    #[must_use]
    pub fn get(&self, short_name: &str) -> Option<&str> {
        self.by_name
            .get(short_name)
            .map(|&idx| self.entries[idx].full_uri.as_str())
    }

    /// Resolves a declared short name, or returns `name` unchanged.
    ///
    /// Use this only where `name` may legitimately be an absolute IRI or a
    /// literal; a misspelled short name passes through silently.
    #[must_use]
    pub fn resolve_lenient<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).unwrap_or(name)
    }

    /// Resolves a declared short name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::UnresolvedReference`] if `name` was never declared.
    pub fn resolve_strict(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| GenerationError::UnresolvedReference(name.to_owned()))
    }

    /// Returns the context term a full URI was declared with.
    #[must_use]
    pub fn term_for(&self, full_uri: &str) -> Option<&str> {
        self.by_uri
            .get(full_uri)
            .map(|&idx| self.entries[idx].term.as_str())
    }

    /// All entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Number of declared terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derives an exported constant name from a local name.
///
/// An underscore is inserted before every upper-case letter (other than the
/// first character) that follows a lower-case letter or digit, and the
/// result is upper-cased. Runs of capitals stay together, so `CDT` and `cdt`
/// both yield `CDT`.
#[must_use]
pub fn constant_name(local_name: &str) -> String {
    let mut result = String::with_capacity(local_name.len() + 4);
    let mut prev: Option<char> = None;
    for ch in local_name.chars() {
        if let Some(p) = prev {
            if ch.is_uppercase() && (p.is_lowercase() || p.is_ascii_digit()) {
                result.push('_');
            }
        }
        result.extend(ch.to_uppercase());
        prev = Some(ch);
    }
    result
}
