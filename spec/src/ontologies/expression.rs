//! `ex:` — logical and mathematical expressions.
//!
//! Expressions are used by the other ontologies to state constraints and
//! mappings between controls and parameters.

use crate::error::Result;
use crate::generation::{GenerationContext, OntologySource};
use crate::model::PropertyKind::{Datatype, Object};
use crate::model::{curie, TermDefinition, TypeAnnotation as T};

/// Returns the expression ontology source.
#[must_use]
pub fn source() -> OntologySource {
    OntologySource {
        prefix: "ex",
        file_stem: "expression-ontology",
        comment: "An ontology for the representation of logical and mathematical expressions",
        build,
    }
}

fn build(ctx: &mut GenerationContext) -> Result<()> {
    ctx.add_class("Expression", None, None)?;
    // Only equations can meaningfully be directed.
    ctx.add_property(
        TermDefinition::typed("directed", "directed", T::Datatype("xsd:boolean")),
        "Expression",
        curie("xsd:boolean"),
        Datatype,
        false,
        None,
    )?;

    variables(ctx)?;
    ctx.add_class("Constant", Some("Expression".into()), None)?;
    quantifiers(ctx)?;
    functions(ctx)?;
    conditionals(ctx)?;
    operators(ctx)
}

fn variables(ctx: &mut GenerationContext) -> Result<()> {
    ctx.add_class("Variable", Some("Expression".into()), None)?;
    ctx.add_property(
        TermDefinition::typed("varName", "varName", T::Datatype("xsd:string")),
        "Variable",
        curie("xsd:string"),
        Datatype,
        true,
        None,
    )?;
    ctx.add_property(
        TermDefinition::typed("varType", "varType", T::Vocab),
        "Variable",
        curie("rdf:Resource"),
        Object,
        true,
        None,
    )?;
    ctx.add_property(
        TermDefinition::typed("varExpr", "varExpr", T::Vocab),
        "Variable",
        "Expression",
        Object,
        true,
        None,
    )?;
    ctx.add_property(
        TermDefinition::typed("varValue", "varValue", T::Vocab),
        "Variable",
        curie("rdf:Resource"),
        Object,
        false,
        None,
    )?;
    Ok(())
}

fn quantifiers(ctx: &mut GenerationContext) -> Result<()> {
    ctx.add_class("Quantifier", Some("Expression".into()), None)?;
    ctx.add_class("ForAll", Some("Quantifier".into()), None)?;
    ctx.add_class("ThereExists", Some("Quantifier".into()), None)?;
    ctx.add_property(
        TermDefinition::named("vars", "vars"),
        "Quantifier",
        "Variable",
        Object,
        false,
        None,
    )?;
    ctx.add_property(
        TermDefinition::named("body", "body"),
        "Quantifier",
        "Expression",
        Object,
        false,
        None,
    )?;
    Ok(())
}

fn functions(ctx: &mut GenerationContext) -> Result<()> {
    ctx.add_class("Accessor", Some("Expression".into()), None)?;
    ctx.add_property(
        TermDefinition::typed("object", "object", T::Datatype("xsd:string")),
        "Accessor",
        curie("xsd:string"),
        Datatype,
        true,
        None,
    )?;
    ctx.add_property(
        TermDefinition::typed("property", "property", T::Datatype("xsd:string")),
        "Accessor",
        curie("xsd:string"),
        Datatype,
        true,
        None,
    )?;

    ctx.add_class("FunctionalTerm", Some("Expression".into()), None)?;
    // Named functions carry a sch:name.
    ctx.add_class("NamedFunction", None, None)?;
    ctx.add_class("PropertyFunction", None, None)?;
    ctx.add_property(
        TermDefinition::typed("prop", "prop", T::Vocab),
        "PropertyFunction",
        curie("rdf:Property"),
        Object,
        false,
        None,
    )?;
    ctx.add_union_class(
        "Function",
        &[
            "PropertyFunction".into(),
            "NamedFunction".into(),
            "Accessor".into(),
        ],
        None,
    )?;
    ctx.add_property(
        TermDefinition::named("func", "func"),
        "FunctionalTerm",
        "Function",
        Object,
        true,
        None,
    )?;
    ctx.add_property(
        TermDefinition::named("args", "args"),
        "FunctionalTerm",
        "Variable",
        Object,
        false,
        None,
    )?;
    Ok(())
}

fn conditionals(ctx: &mut GenerationContext) -> Result<()> {
    ctx.add_class("Conditional", Some("Expression".into()), None)?;
    for part in ["antecedent", "consequent", "alternative"] {
        ctx.add_property(
            TermDefinition::named(part, part),
            "Conditional",
            "Expression",
            Object,
            true,
            None,
        )?;
    }
    Ok(())
}

fn operators(ctx: &mut GenerationContext) -> Result<()> {
    ctx.add_class("BinaryOperator", Some("Expression".into()), None)?;
    for side in ["left", "right"] {
        ctx.add_property(
            TermDefinition::named(side, side),
            "BinaryOperator",
            "Expression",
            Object,
            true,
            None,
        )?;
    }

    ctx.add_class("RelationalOperator", Some("BinaryOperator".into()), None)?;
    for op in [
        "EqualTo",
        "NotEqualTo",
        "GreaterThan",
        "LessThan",
        "GreaterThanOrEqualTo",
        "LessThanOrEqualTo",
    ] {
        ctx.add_class(op, Some("RelationalOperator".into()), None)?;
    }

    ctx.add_class("ArithmeticOperator", Some("BinaryOperator".into()), None)?;
    for op in ["Addition", "Subtraction", "Multiplication", "Division", "Power"] {
        ctx.add_class(op, Some("ArithmeticOperator".into()), None)?;
    }
    Ok(())
}
