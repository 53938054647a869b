//! The generation context and the ontology declaration primitives.
//!
//! A [`GenerationContext`] owns the four accumulators of a run: the term
//! registry, the JSON-LD context builder, the URI export table and the
//! triple emitter. Every declaration goes through it, so one call registers
//! the term, adds the context entry, adds the export entry and emits the
//! triples together.

use tracing::{debug, info};

use crate::context::ContextBuilder;
use crate::emitter::{ActiveNamespace, OntologyGraph, TripleEmitter};
use crate::error::{GenerationError, Result};
use crate::exports::ExportTable;
use crate::model::{iris, Literal, LiteralValue, Node, PropertyKind, Reference, TermDefinition};
use crate::prefixes::{PrefixTable, CONTEXT_BASE};
use crate::registry::{constant_name, TermRegistry};

/// Describes one ontology produced by a run.
#[derive(Debug, Clone, Copy)]
pub struct OntologySource {
    /// Prefix of the ontology's namespace (e.g. `"ex"`).
    pub prefix: &'static str,
    /// Output file stem (e.g. `"expression-ontology"`).
    pub file_stem: &'static str,
    /// `rdfs:comment` of the `owl:Ontology` resource.
    pub comment: &'static str,
    /// Declares the ontology's classes, properties and individuals.
    pub build: fn(&mut GenerationContext) -> Result<()>,
}

/// A finished ontology.
#[derive(Debug, Clone)]
pub struct BuiltOntology {
    /// Where it came from.
    pub source: OntologySource,
    /// Everything it emitted.
    pub graph: OntologyGraph,
}

/// All mutable state of one generation run.
#[derive(Debug)]
pub struct GenerationContext {
    prefixes: PrefixTable,
    registry: TermRegistry,
    context: ContextBuilder,
    exports: ExportTable,
    emitter: TripleEmitter,
}

impl Default for GenerationContext {
    fn default() -> Self {
        Self::new(PrefixTable::default())
    }
}

impl GenerationContext {
    /// Creates an empty context over `prefixes`, with no active namespace.
    #[must_use]
    pub fn new(prefixes: PrefixTable) -> Self {
        Self {
            prefixes,
            registry: TermRegistry::new(),
            context: ContextBuilder::new(prefixes),
            exports: ExportTable::new(),
            emitter: TripleEmitter::new(prefixes),
        }
    }

    /// The prefix table.
    #[must_use]
    pub fn prefixes(&self) -> PrefixTable {
        self.prefixes
    }

    /// The term registry.
    #[must_use]
    pub fn registry(&self) -> &TermRegistry {
        &self.registry
    }

    /// The JSON-LD context builder.
    #[must_use]
    pub fn context(&self) -> &ContextBuilder {
        &self.context
    }

    /// Mutable access to the context builder for terms without a declaration.
    pub fn context_mut(&mut self) -> &mut ContextBuilder {
        &mut self.context
    }

    /// The URI export table.
    #[must_use]
    pub fn exports(&self) -> &ExportTable {
        &self.exports
    }

    /// Mutable access to the export table for constants without a declaration.
    pub fn exports_mut(&mut self) -> &mut ExportTable {
        &mut self.exports
    }

    /// Re-scopes the emitter to `prefix`, discarding in-flight triples.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::UnknownPrefix`] for a prefix outside the table.
    pub fn reset(&mut self, prefix: &str) -> Result<ActiveNamespace> {
        self.emitter.reset(prefix)
    }

    /// Takes every triple emitted since the last [`reset`](Self::reset).
    pub fn finalize(&mut self) -> OntologyGraph {
        self.emitter.finalize()
    }

    /// Runs one ontology builder against a freshly scoped emitter.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the builder's declarations.
    pub fn build(&mut self, source: OntologySource) -> Result<BuiltOntology> {
        self.reset(source.prefix)?;
        self.add_ontology(source.comment)?;
        (source.build)(self)?;
        let graph = self.finalize();
        info!(
            prefix = source.prefix,
            triples = graph.len(),
            "built {}",
            source.file_stem
        );
        Ok(BuiltOntology { source, graph })
    }

    fn namespace(&self) -> Result<ActiveNamespace> {
        self.emitter
            .namespace()
            .ok_or(GenerationError::NoActiveNamespace)
    }

    /// Declares a term in the active namespace and returns its full URI.
    ///
    /// Registers the term, appends its context entry, and appends an export
    /// constant named after the local name. A rejected declaration leaves
    /// all three untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::NoActiveNamespace`] before any reset, and
    /// the duplicate errors of the registry, context builder and export table.
    pub fn declare(&mut self, definition: TermDefinition) -> Result<String> {
        let ns = self.namespace()?;
        let term = definition.normalize();
        let full_uri = format!("{}{}", ns.iri, term.local_name);
        let constant = constant_name(term.local_name);
        // All three collisions are checked before any accumulator changes.
        self.registry.check(term.local_name, &full_uri)?;
        self.context.check(ns.prefix, term.term)?;
        self.exports.check(&constant)?;
        self.registry
            .insert(term.local_name, full_uri.clone(), term.term)?;
        self.context.add_term(
            ns.prefix,
            term.term,
            Some(term.local_name),
            term.type_annotation,
        )?;
        self.exports.add(constant, full_uri.as_str())?;
        debug!(term = term.term, uri = %full_uri, "declared");
        Ok(full_uri)
    }

    /// Resolves a declared short name, passing anything else through.
    #[must_use]
    pub fn resolve_lenient<'a>(&'a self, name: &'a str) -> &'a str {
        self.registry.resolve_lenient(name)
    }

    /// Resolves a declared short name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::UnresolvedReference`] for undeclared names.
    pub fn resolve_strict(&self, name: &str) -> Result<String> {
        self.registry.resolve_strict(name).map(str::to_owned)
    }

    /// Resolves a builder reference to an absolute IRI.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::UnresolvedReference`] for an undeclared
    /// term and [`GenerationError::UnknownPrefix`] for a bad qualified name.
    pub fn resolve(&self, reference: Reference<'_>) -> Result<String> {
        match reference {
            Reference::Term(name) => self.resolve_strict(name),
            Reference::Curie(qualified) => self.prefixes.expand(qualified),
            Reference::Iri(iri) => Ok(iri.to_owned()),
        }
    }

    /// Records one triple.
    pub fn emit(&mut self, subject: &str, predicate: &str, object: Node) {
        self.emitter.emit(Node::iri(subject), predicate, object);
    }

    /// Declares the `owl:Ontology` resource of the active namespace.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::NoActiveNamespace`] before any reset.
    pub fn add_ontology(&mut self, comment: &str) -> Result<()> {
        let ns = self.namespace()?;
        self.emit(ns.iri, iris::RDF_TYPE, Node::iri(iris::OWL_ONTOLOGY));
        self.add_comment(ns.iri, Some(comment));
        Ok(())
    }

    /// Declares an `owl:Class`, optionally a subclass of `superclass`.
    ///
    /// # Errors
    ///
    /// Returns declaration and resolution errors.
    pub fn add_class(
        &mut self,
        name: impl Into<TermDefinition>,
        superclass: Option<Reference<'_>>,
        comment: Option<&str>,
    ) -> Result<String> {
        let uri = self.declare(name.into())?;
        let superclass = superclass.map(|s| self.resolve(s)).transpose()?;
        self.emit(&uri, iris::RDF_TYPE, Node::iri(iris::OWL_CLASS));
        if let Some(superclass) = superclass {
            self.emit(&uri, iris::RDFS_SUBCLASS_OF, Node::iri(superclass));
        }
        self.add_comment(&uri, comment);
        Ok(uri)
    }

    /// Declares an `owl:Class` defined as the union of `members`.
    ///
    /// # Errors
    ///
    /// Returns declaration and resolution errors.
    pub fn add_union_class(
        &mut self,
        name: impl Into<TermDefinition>,
        members: &[Reference<'_>],
        comment: Option<&str>,
    ) -> Result<String> {
        let uri = self.declare(name.into())?;
        let members = members
            .iter()
            .map(|m| self.resolve(*m).map(Node::iri))
            .collect::<Result<Vec<_>>>()?;
        self.emit(&uri, iris::RDF_TYPE, Node::iri(iris::OWL_CLASS));
        let list = self.emitter.emit_list(members);
        self.emit(&uri, iris::OWL_UNION_OF, list);
        self.add_comment(&uri, comment);
        Ok(uri)
    }

    /// Declares an object or datatype property.
    ///
    /// The range of a datatype property is written as a quoted string; the
    /// range of an object property as an IRI.
    ///
    /// # Errors
    ///
    /// Returns declaration and resolution errors.
    pub fn add_property<'r>(
        &mut self,
        definition: impl Into<TermDefinition>,
        domain: impl Into<Reference<'r>>,
        range: impl Into<Reference<'r>>,
        kind: PropertyKind,
        functional: bool,
        comment: Option<&str>,
    ) -> Result<String> {
        let uri = self.declare(definition.into())?;
        let domain = self.resolve(domain.into())?;
        let range = self.resolve(range.into())?;
        let type_iri = match kind {
            PropertyKind::Object => iris::OWL_OBJECT_PROPERTY,
            PropertyKind::Datatype => iris::OWL_DATATYPE_PROPERTY,
        };
        self.emit(&uri, iris::RDF_TYPE, Node::iri(type_iri));
        if functional {
            self.emit(&uri, iris::RDF_TYPE, Node::iri(iris::OWL_FUNCTIONAL_PROPERTY));
        }
        self.emit(&uri, iris::RDFS_DOMAIN, Node::iri(domain));
        let range = match kind {
            PropertyKind::Object => Node::iri(range),
            PropertyKind::Datatype => Node::Literal(Literal::plain(range)),
        };
        self.emit(&uri, iris::RDFS_RANGE, range);
        self.add_comment(&uri, comment);
        Ok(uri)
    }

    /// Declares a named individual of `type_` with literal property values.
    ///
    /// # Errors
    ///
    /// Returns declaration and resolution errors.
    pub fn add_individual<'r>(
        &mut self,
        name: impl Into<TermDefinition>,
        type_: impl Into<Reference<'r>>,
        values: &[(&str, LiteralValue)],
        comment: Option<&str>,
    ) -> Result<String> {
        let uri = self.declare(name.into())?;
        let type_ = self.resolve(type_.into())?;
        self.emit(&uri, iris::RDF_TYPE, Node::iri(type_));
        for (property, value) in values {
            let property = self.resolve_strict(property)?;
            self.emit(&uri, &property, Node::Literal(value.to_literal()));
        }
        self.add_comment(&uri, comment);
        Ok(uri)
    }

    /// Asserts `subject property value` between already-declared terms.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::UnresolvedReference`] if any position is
    /// not declared yet.
    pub fn set_property<'r>(
        &mut self,
        subject: impl Into<Reference<'r>>,
        property: impl Into<Reference<'r>>,
        value: impl Into<Reference<'r>>,
    ) -> Result<()> {
        let subject = self.resolve(subject.into())?;
        let property = self.resolve(property.into())?;
        let value = self.resolve(value.into())?;
        self.emit(&subject, &property, Node::iri(value));
        Ok(())
    }

    fn add_comment(&mut self, subject: &str, comment: Option<&str>) {
        if let Some(comment) = comment {
            self.emit(subject, iris::RDFS_COMMENT, Node::Literal(Literal::plain(comment)));
        }
    }

    /// Adds the context terms and constants that exist outside any ontology.
    ///
    /// # Errors
    ///
    /// Returns a duplicate error if called twice on the same context.
    pub fn add_preamble(&mut self) -> Result<()> {
        use crate::model::TypeAnnotation::Vocab;

        self.context.add_term("rdf", "value", None, None)?;
        self.context.add_term("sch", "name", None, None)?;
        self.context.add_term("ch", "cdt", None, Some(Vocab))?;
        self.context.add_term("ch", "adt", None, Some(Vocab))?;
        self.context.add_term("ch", "parts", Some("hasPart"), None)?;

        let p = self.prefixes;
        let rdf = p.require("rdf")?;
        let rdfs = p.require("rdfs")?;
        let sch = p.require("sch")?;
        let ch = p.require("ch")?;
        let constants = [
            ("CONTEXT_URI", CONTEXT_BASE.to_owned()),
            ("RDFS_URI", rdfs.to_owned()),
            ("EXPRESSION_ONTOLOGY_URI", p.require("ex")?.to_owned()),
            ("DYMO_ONTOLOGY_URI", p.require("dy")?.to_owned()),
            ("MOBILE_AUDIO_ONTOLOGY_URI", p.require("mb")?.to_owned()),
            ("TYPE", format!("{rdf}type")),
            ("FIRST", format!("{rdf}first")),
            ("REST", format!("{rdf}rest")),
            ("NIL", format!("{rdf}nil")),
            ("VALUE", format!("{rdf}value")),
            ("DOMAIN", format!("{rdfs}domain")),
            ("RANGE", format!("{rdfs}range")),
            ("LABEL", format!("{rdfs}label")),
            ("NAME", format!("{sch}name")),
            ("CDT", format!("{ch}cdt")),
            ("ADT", format!("{ch}adt")),
            ("HAS_PART", format!("{ch}hasPart")),
        ];
        for (name, value) in constants {
            self.exports.add(name, value)?;
        }
        Ok(())
    }
}
