//! Core model types.
//!
//! These types describe what the ontology builders hand to the generation
//! engine: term definitions, references to other resources, literal values,
//! and the RDF nodes and triples the engine emits. The top-level entry point
//! is [`GenerationContext`](crate::GenerationContext).

use serde::Serialize;

/// JSON-LD `@type` coercion attached to a context term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TypeAnnotation {
    /// `"@id"`: values are IRIs.
    Id,
    /// `"@vocab"`: values are vocabulary-relative terms.
    Vocab,
    /// A datatype given as a qualified name (e.g. `"xsd:string"`).
    Datatype(&'static str),
}

impl TypeAnnotation {
    /// Returns the string written into the `@type` field of the context.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TypeAnnotation::Id => "@id",
            TypeAnnotation::Vocab => "@vocab",
            TypeAnnotation::Datatype(curie) => curie,
        }
    }
}

/// How a class, property or individual is named.
///
/// A bare definition uses one string as context term, local name and
/// constant source. A structured definition separates the context term from
/// the local name appended to the namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermDefinition {
    /// Term, local name and constant name all derive from this string.
    Bare(&'static str),
    /// Distinct context term and local name, with an optional type coercion.
    Structured {
        /// JSON-LD context key.
        term: &'static str,
        /// Local name appended to the active namespace IRI.
        local_name: &'static str,
        /// Optional `@type` coercion for the full context.
        type_annotation: Option<TypeAnnotation>,
    },
}

impl TermDefinition {
    /// Structured definition without a type coercion.
    #[must_use]
    pub const fn named(term: &'static str, local_name: &'static str) -> Self {
        TermDefinition::Structured {
            term,
            local_name,
            type_annotation: None,
        }
    }

    /// Structured definition with a type coercion.
    #[must_use]
    pub const fn typed(
        term: &'static str,
        local_name: &'static str,
        type_annotation: TypeAnnotation,
    ) -> Self {
        TermDefinition::Structured {
            term,
            local_name,
            type_annotation: Some(type_annotation),
        }
    }

    /// Normalizes either form into the uniform shape used downstream.
    #[must_use]
    pub fn normalize(self) -> NormalizedTerm {
        match self {
            TermDefinition::Bare(name) => NormalizedTerm {
                term: name,
                local_name: name,
                type_annotation: None,
            },
            TermDefinition::Structured {
                term,
                local_name,
                type_annotation,
            } => NormalizedTerm {
                term,
                local_name,
                type_annotation,
            },
        }
    }
}

impl From<&'static str> for TermDefinition {
    fn from(name: &'static str) -> Self {
        TermDefinition::Bare(name)
    }
}

/// A [`TermDefinition`] after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTerm {
    /// JSON-LD context key.
    pub term: &'static str,
    /// Local name within the active namespace.
    pub local_name: &'static str,
    /// Optional `@type` coercion.
    pub type_annotation: Option<TypeAnnotation>,
}

/// A reference to a resource made from a builder call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference<'a> {
    /// A short name that must already be declared in the registry.
    Term(&'a str),
    /// A `prefix:local` name expanded through the prefix table.
    Curie(&'a str),
    /// An absolute IRI used as is.
    Iri(&'a str),
}

impl<'a> From<&'a str> for Reference<'a> {
    fn from(name: &'a str) -> Self {
        Reference::Term(name)
    }
}

/// Shorthand for [`Reference::Curie`].
#[must_use]
pub const fn curie(qualified: &str) -> Reference<'_> {
    Reference::Curie(qualified)
}

/// A literal value asserted on a named individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralValue {
    /// An `xsd:integer` literal.
    Int(i64),
    /// An `xsd:boolean` literal.
    Bool(bool),
}

impl LiteralValue {
    /// Converts the value into an RDF literal node.
    #[must_use]
    pub fn to_literal(self) -> Literal {
        match self {
            LiteralValue::Int(i) => Literal::typed(i.to_string(), iris::XSD_INTEGER),
            LiteralValue::Bool(b) => Literal::typed(b.to_string(), iris::XSD_BOOLEAN),
        }
    }
}

/// An RDF literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    /// Lexical form.
    pub value: String,
    /// Full datatype IRI, or `None` for a plain string.
    pub datatype: Option<&'static str>,
}

impl Literal {
    /// A plain (untyped) string literal.
    #[must_use]
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: None,
        }
    }

    /// A literal with an explicit datatype IRI.
    #[must_use]
    pub fn typed(value: impl Into<String>, datatype: &'static str) -> Self {
        Self {
            value: value.into(),
            datatype: Some(datatype),
        }
    }
}

/// Identifier of a blank node within one [`OntologyGraph`](crate::emitter::OntologyGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankNode(pub usize);

/// An RDF term in subject or object position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// An absolute IRI.
    Iri(String),
    /// A blank node (RDF list cells).
    Blank(BlankNode),
    /// A literal (object position only).
    Literal(Literal),
}

impl Node {
    /// An IRI node.
    #[must_use]
    pub fn iri(iri: impl Into<String>) -> Self {
        Node::Iri(iri.into())
    }

    /// Returns the IRI if this node is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }
}

/// One RDF statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// IRI or blank node.
    pub subject: Node,
    /// Predicate IRI.
    pub predicate: String,
    /// IRI, blank node, or literal.
    pub object: Node,
}

/// Whether a declared property relates resources or literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// `owl:DatatypeProperty`: range is a literal type, written as a quoted string.
    Datatype,
    /// `owl:ObjectProperty`: range is a class reference.
    Object,
}

/// Value of an exported constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExportValue {
    /// A single string constant.
    Scalar(String),
    /// A list of strings, written as an array literal.
    ListLiteral(Vec<String>),
}

impl From<&str> for ExportValue {
    fn from(value: &str) -> Self {
        ExportValue::Scalar(value.to_owned())
    }
}

impl From<String> for ExportValue {
    fn from(value: String) -> Self {
        ExportValue::Scalar(value)
    }
}

/// Standard IRI constants used by the declaration primitives.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:first`.
    pub const RDF_FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    /// `rdf:rest`.
    pub const RDF_REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    /// `rdf:nil`.
    pub const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
    /// `rdf:value`.
    pub const RDF_VALUE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#value";

    /// `rdfs:comment`.
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    /// `rdfs:subClassOf`.
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// `rdfs:domain`.
    pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    /// `rdfs:range`.
    pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
    /// `rdfs:label`.
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// `owl:Ontology`.
    pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    /// `owl:Class`.
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:unionOf`.
    pub const OWL_UNION_OF: &str = "http://www.w3.org/2002/07/owl#unionOf";
    /// `owl:ObjectProperty`.
    pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    /// `owl:DatatypeProperty`.
    pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    /// `owl:FunctionalProperty`.
    pub const OWL_FUNCTIONAL_PROPERTY: &str = "http://www.w3.org/2002/07/owl#FunctionalProperty";

    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
}
