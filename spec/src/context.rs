//! JSON-LD context accumulation.
//!
//! Every term lands in two parallel lists: the *full* context, which keeps
//! `@type` coercions, and the *simple* context, which maps each term to its
//! qualified name only. Both lists always hold the same terms in the same
//! order.

use std::collections::HashSet;

use crate::error::{GenerationError, Result};
use crate::model::TypeAnnotation;
use crate::prefixes::PrefixTable;

/// Value side of a context entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextValue {
    /// `"prefix:local"`.
    Name(String),
    /// `{ "@id": "prefix:local", "@type": … }`.
    Typed {
        /// Qualified name of the term.
        id: String,
        /// The `@type` coercion.
        type_annotation: TypeAnnotation,
    },
}

/// One `term → value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextEntry {
    /// The context key.
    pub term: String,
    /// The value written for the key.
    pub value: ContextValue,
}

/// Accumulates context entries in declaration order.
#[derive(Debug)]
pub struct ContextBuilder {
    prefixes: PrefixTable,
    full: Vec<ContextEntry>,
    simple: Vec<ContextEntry>,
    terms: HashSet<String>,
}

impl ContextBuilder {
    /// Creates an empty builder whose terms may not shadow `prefixes`.
    #[must_use]
    pub fn new(prefixes: PrefixTable) -> Self {
        Self {
            prefixes,
            full: Vec::new(),
            simple: Vec::new(),
            terms: HashSet::new(),
        }
    }

    /// Adds `term → "prefix:local"` to both contexts.
    ///
    /// `local_name` defaults to `term`. With a type annotation the full
    /// context gets the typed form instead of the plain name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::DuplicateTerm`] if `term` is already present,
    /// is a prefix of the table, or is `@base`; and
    /// [`GenerationError::UnknownPrefix`] if `prefix` is not in the table.
    pub fn add_term(
        &mut self,
        prefix: &str,
        term: &str,
        local_name: Option<&str>,
        type_annotation: Option<TypeAnnotation>,
    ) -> Result<()> {
        self.check(prefix, term)?;
        let id = format!("{prefix}:{}", local_name.unwrap_or(term));
        let full_value = match type_annotation {
            Some(type_annotation) => ContextValue::Typed {
                id: id.clone(),
                type_annotation,
            },
            None => ContextValue::Name(id.clone()),
        };
        self.terms.insert(term.to_owned());
        self.simple.push(ContextEntry {
            term: term.to_owned(),
            value: ContextValue::Name(id),
        });
        self.full.push(ContextEntry {
            term: term.to_owned(),
            value: full_value,
        });
        Ok(())
    }

    /// Fails exactly when [`add_term`](Self::add_term) would, without adding anything.
    ///
    /// # Errors
    ///
    /// Same as [`add_term`](Self::add_term).
    pub fn check(&self, prefix: &str, term: &str) -> Result<()> {
        self.prefixes.require(prefix)?;
        if term == "@base" || self.prefixes.namespace(term).is_some() || self.terms.contains(term)
        {
            return Err(GenerationError::DuplicateTerm(term.to_owned()));
        }
        Ok(())
    }

    /// Entries of the full context.
    #[must_use]
    pub fn full(&self) -> &[ContextEntry] {
        &self.full
    }

    /// Entries of the simple context.
    #[must_use]
    pub fn simple(&self) -> &[ContextEntry] {
        &self.simple
    }

    /// The prefix table written ahead of the entries.
    #[must_use]
    pub fn prefixes(&self) -> PrefixTable {
        self.prefixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ContextBuilder {
        ContextBuilder::new(PrefixTable::default())
    }

    #[test]
    fn untyped_term_is_identical_in_both_forms() {
        let mut b = builder();
        b.add_term("rdf", "value", None, None).expect("add");
        assert_eq!(b.full(), b.simple());
        assert_eq!(b.full()[0].value, ContextValue::Name("rdf:value".to_owned()));
    }

    #[test]
    fn typed_term_differs_only_in_full_form() {
        let mut b = builder();
        b.add_term("ch", "parts", Some("hasPart"), None).expect("add");
        b.add_term("ch", "cdt", Some("cdt"), Some(TypeAnnotation::Vocab))
            .expect("add");
        assert_eq!(b.simple()[1].value, ContextValue::Name("ch:cdt".to_owned()));
        assert_eq!(
            b.full()[1].value,
            ContextValue::Typed {
                id: "ch:cdt".to_owned(),
                type_annotation: TypeAnnotation::Vocab,
            }
        );
        assert_eq!(b.simple()[0].value, ContextValue::Name("ch:hasPart".to_owned()));
    }

    #[test]
    fn both_forms_hold_the_same_terms_in_order() {
        let mut b = builder();
        b.add_term("ex", "directed", None, Some(TypeAnnotation::Datatype("xsd:boolean")))
            .expect("add");
        b.add_term("ex", "Variable", None, None).expect("add");
        b.add_term("dy", "paramType", Some("hasParameterType"), Some(TypeAnnotation::Vocab))
            .expect("add");
        let full: Vec<_> = b.full().iter().map(|e| e.term.as_str()).collect();
        let simple: Vec<_> = b.simple().iter().map(|e| e.term.as_str()).collect();
        assert_eq!(full, simple);
        assert_eq!(full, ["directed", "Variable", "paramType"]);
    }

    #[test]
    fn duplicate_and_prefix_collisions_are_rejected() {
        let mut b = builder();
        b.add_term("sch", "name", None, None).expect("add");
        assert_eq!(
            b.add_term("sch", "name", None, None),
            Err(GenerationError::DuplicateTerm("name".to_owned()))
        );
        assert_eq!(
            b.add_term("dy", "owl", None, None),
            Err(GenerationError::DuplicateTerm("owl".to_owned()))
        );
        assert_eq!(
            b.add_term("dy", "@base", None, None),
            Err(GenerationError::DuplicateTerm("@base".to_owned()))
        );
        assert_eq!(b.full().len(), 1);
        assert_eq!(b.simple().len(), 1);
    }

    #[test]
    fn unknown_prefix_is_rejected() {
        let mut b = builder();
        assert!(matches!(
            b.add_term("nope", "x", None, None),
            Err(GenerationError::UnknownPrefix(_))
        ));
    }
}
