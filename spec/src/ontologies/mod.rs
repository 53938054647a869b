//! The three ontologies of the Dynamic Music Object framework.
//!
//! Modules are listed in build order: later ontologies refer to terms of
//! earlier ones (the mobile audio ontology constrains renderings with
//! expressions and points at dymos), so the order is significant.

pub mod dymo;
pub mod expression;
pub mod mobile_audio;

use crate::generation::OntologySource;

/// Returns every ontology in build order.
#[must_use]
pub fn all() -> [OntologySource; 3] {
    [expression::source(), dymo::source(), mobile_audio::source()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_and_file_stems_are_distinct() {
        let sources = all();
        for (i, a) in sources.iter().enumerate() {
            for b in &sources[i + 1..] {
                assert_ne!(a.prefix, b.prefix);
                assert_ne!(a.file_stem, b.file_stem);
            }
        }
    }
}
