//! Exported constants, in declaration order.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{GenerationError, Result};
use crate::model::ExportValue;

/// One `NAME = value` pair of the generated constants module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportEntry {
    /// SCREAMING_SNAKE_CASE constant name.
    pub name: String,
    /// The constant's value.
    pub value: ExportValue,
}

/// Accumulates [`ExportEntry`] values.
#[derive(Debug, Default)]
pub struct ExportTable {
    entries: Vec<ExportEntry>,
    names: HashSet<String>,
}

impl ExportTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a constant.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::DuplicateExport`] if `name` was already added.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<ExportValue>) -> Result<()> {
        let name = name.into();
        self.check(&name)?;
        self.names.insert(name.clone());
        self.entries.push(ExportEntry {
            name,
            value: value.into(),
        });
        Ok(())
    }

    /// Fails exactly when [`add`](Self::add) would, without adding anything.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::DuplicateExport`] if `name` was already added.
    pub fn check(&self, name: &str) -> Result<()> {
        if self.names.contains(name) {
            return Err(GenerationError::DuplicateExport(name.to_owned()));
        }
        Ok(())
    }

    /// Looks up a constant's value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ExportValue> {
        self.entries.iter().find(|e| e.name == name).map(|e| &e.value)
    }

    /// All entries in the order they were added.
    #[must_use]
    pub fn entries(&self) -> &[ExportEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_call_order() {
        let mut t = ExportTable::new();
        t.add("TYPE", "http://www.w3.org/1999/02/22-rdf-syntax-ns#type")
            .expect("add");
        t.add("PRIMES", ExportValue::ListLiteral(vec!["2".into(), "3".into()]))
            .expect("add");
        let names: Vec<_> = t.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["TYPE", "PRIMES"]);
        assert_eq!(
            t.get("PRIMES"),
            Some(&ExportValue::ListLiteral(vec!["2".into(), "3".into()]))
        );
    }

    #[test]
    fn duplicate_names_fail_fast() {
        let mut t = ExportTable::new();
        t.add("DURATION", "http://a#Duration").expect("add");
        assert_eq!(
            t.add("DURATION", "http://a#Duration"),
            Err(GenerationError::DuplicateExport("DURATION".to_owned()))
        );
        assert_eq!(t.entries().len(), 1);
    }
}
