//! `dy:` — Dynamic Music Objects.
//!
//! Dymos are hierarchical musical structures built on the CHARM constituent
//! model. They carry immutable features and mutable parameters; audio
//! parameters declare a standard value and how nested values combine.

use crate::error::Result;
use crate::generation::{GenerationContext, OntologySource};
use crate::model::LiteralValue::{Bool, Int};
use crate::model::PropertyKind::{Datatype, Object};
use crate::model::{curie, TermDefinition, TypeAnnotation as T};

/// Returns the dymo ontology source.
#[must_use]
pub fn source() -> OntologySource {
    OntologySource {
        prefix: "dy",
        file_stem: "dymo-ontology",
        comment: "An ontology for describing Dynamic Music Objects",
        build,
    }
}

/// Feature types: `(context term, local name)`.
const FEATURES: &[(&str, &str)] = &[
    ("level", "LevelFeature"),
    ("index", "IndexFeature"),
    ("onset", "OnsetFeature"),
    ("pitch", "PitchFeature"),
    ("duration", "DurationFeature"),
    ("time", "TimeFeature"),
    ("segmentLabel", "SegmentLabelFeature"),
];

fn build(ctx: &mut GenerationContext) -> Result<()> {
    dymos(ctx)?;
    attributes(ctx)?;
    audio_parameters(ctx)?;
    structural_parameters(ctx)?;
    dymo_properties(ctx)
}

fn dymos(ctx: &mut GenerationContext) -> Result<()> {
    ctx.add_class(
        "Dymo",
        Some(curie("ch:Constituent")),
        Some("A Dynamic Music Object is a hierarchical structure of musical objects with modifiable parameters"),
    )?;
    ctx.add_class("DymoType", Some(curie("ch:ConstituentType")), None)?;
    for kind in ["Conjunction", "Disjunction", "Sequence", "Event"] {
        ctx.add_individual(kind, "DymoType", &[], None)?;
    }
    Ok(())
}

fn attributes(ctx: &mut GenerationContext) -> Result<()> {
    ctx.add_class(
        "Feature",
        Some(curie("ch:Attribute")),
        Some("A feature is an immutable attribute of a Dymo"),
    )?;
    ctx.add_class(
        "Parameter",
        Some(curie("ch:Attribute")),
        Some("A parameter is a mutable attribute of a Dymo"),
    )?;
    ctx.add_class("FeatureType", Some(curie("ch:AttributeType")), None)?;
    ctx.add_class("ParameterType", Some(curie("ch:AttributeType")), None)?;
    ctx.add_property(
        TermDefinition::typed("paramType", "hasParameterType", T::Vocab),
        "Parameter",
        "ParameterType",
        Object,
        false,
        None,
    )?;
    ctx.add_property(
        TermDefinition::typed("featureType", "hasFeatureType", T::Vocab),
        "Feature",
        "FeatureType",
        Object,
        false,
        None,
    )?;

    ctx.add_class("ParameterBehavior", None, None)?;
    for behavior in ["Independent", "Additive", "Multiplicative", "ArithmeticMean"] {
        ctx.add_class(behavior, Some("ParameterBehavior".into()), None)?;
    }
    ctx.add_property(
        TermDefinition::typed("behavior", "hasBehavior", T::Vocab),
        "ParameterType",
        "ParameterBehavior",
        Object,
        false,
        None,
    )?;

    for &(term, local_name) in FEATURES {
        ctx.add_individual(TermDefinition::named(term, local_name), "FeatureType", &[], None)?;
    }
    Ok(())
}

fn audio_parameters(ctx: &mut GenerationContext) -> Result<()> {
    ctx.add_class("AudioParameter", Some("ParameterType".into()), None)?;
    // Object properties despite their xsd ranges.
    ctx.add_property(
        "hasStandardValue",
        "ParameterType",
        curie("xsd:float"),
        Object,
        false,
        None,
    )?;
    ctx.add_property(
        "isInteger",
        "ParameterType",
        curie("xsd:boolean"),
        Object,
        false,
        None,
    )?;

    let integer_flag = [("hasStandardValue", Int(0)), ("isInteger", Bool(true))];
    for name in ["Play", "Loop", "Repeat"] {
        ctx.add_individual(name, "AudioParameter", &integer_flag, None)?;
    }

    ctx.add_individual("Onset", "AudioParameter", &[], None)?;
    ctx.set_property("Onset", "hasBehavior", "Additive")?;
    ctx.add_individual("Duration", "AudioParameter", &[], None)?;

    let combined = [
        ("DurationRatio", 1, "Multiplicative"),
        ("Amplitude", 1, "Multiplicative"),
        ("PlaybackRate", 1, "Multiplicative"),
        ("TimeStretchRatio", 1, "Multiplicative"),
        ("Pan", 0, "Additive"),
        ("Distance", 0, "Additive"),
        ("Height", 0, "Additive"),
        ("Reverb", 0, "Multiplicative"),
        ("Delay", 0, "Multiplicative"),
    ];
    for (name, standard, behavior) in combined {
        ctx.add_individual(
            name,
            "AudioParameter",
            &[("hasStandardValue", Int(standard))],
            None,
        )?;
        ctx.set_property(name, "hasBehavior", behavior)?;
    }

    ctx.add_individual(
        "Filter",
        "AudioParameter",
        &[("hasStandardValue", Int(20000))],
        None,
    )?;
    Ok(())
}

fn structural_parameters(ctx: &mut GenerationContext) -> Result<()> {
    ctx.add_class("StructuralParameter", Some("ParameterType".into()), None)?;
    for name in ["PartCount", "PartDurationRatio", "PartProportion"] {
        ctx.add_individual(name, "StructuralParameter", &[], None)?;
    }
    Ok(())
}

fn dymo_properties(ctx: &mut GenerationContext) -> Result<()> {
    ctx.add_property(
        TermDefinition::typed("source", "hasSource", T::Datatype("xsd:string")),
        "Dymo",
        curie("xsd:string"),
        Datatype,
        false,
        None,
    )?;
    ctx.add_property(
        TermDefinition::typed("parameters", "hasParameter", T::Vocab),
        "Dymo",
        "Parameter",
        Object,
        false,
        None,
    )?;
    ctx.add_property(
        TermDefinition::typed("features", "hasFeature", T::Vocab),
        "Dymo",
        "Feature",
        Object,
        false,
        None,
    )?;
    for (term, local_name) in [
        ("similars", "hasSimilar"),
        ("successors", "hasSuccessor"),
        ("fst", "hasFirst"),
        ("snd", "hasSecond"),
    ] {
        ctx.add_property(
            TermDefinition::named(term, local_name),
            "Dymo",
            "Dymo",
            Object,
            false,
            None,
        )?;
    }

    // Not in the published dymo vocabulary, where the range of hasTarget is the
    // bare name `Target` with no class behind it. Declaring the class here adds
    // the `Target` context term and the TARGET constant on top of that data.
    ctx.add_class("Target", None, None)?;
    ctx.add_property(
        TermDefinition::named("target", "hasTarget"),
        "Event",
        "Target",
        Object,
        false,
        None,
    )?;
    Ok(())
}
