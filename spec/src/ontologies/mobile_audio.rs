//! `mb:` — renderings of dymos on mobile devices.

use crate::error::Result;
use crate::generation::{GenerationContext, OntologySource};
use crate::model::PropertyKind::{Datatype, Object};
use crate::model::{curie, TermDefinition, TypeAnnotation as T};

/// Returns the mobile audio ontology source.
#[must_use]
pub fn source() -> OntologySource {
    OntologySource {
        prefix: "mb",
        file_stem: "mobile-audio-ontology",
        comment: "An ontology for describing renderings of Dynamic Music Objects on mobile devices",
        build,
    }
}

const SENSOR_CONTROLS: &[&str] = &[
    "AccelerometerX",
    "AccelerometerY",
    "AccelerometerZ",
    "TiltX",
    "TiltY",
    "TiltZ",
    "GeolocationLatitude",
    "GeolocationLongitude",
    "GeolocationDistance",
    "CompassHeading",
    "Beacon",
];

const CONTROL_PARAMETERS: &[&str] = &[
    "AutoControlFrequency",
    "AutoControlTrigger",
    "BrownianMaxStepSize",
    "LeapingProbability",
    "ContinueAfterLeaping",
];

/// Datatype properties of controls: `(term, local name, datatype, domain)`.
const CONTROL_PROPERTIES: &[(&str, &str, &str, &str)] = &[
    ("url", "hasUrl", "xsd:string", "DataControl"),
    ("map", "hasJsonMap", "xsd:string", "DataControl"),
    ("smooth", "isSmooth", "xsd:boolean", "SensorControl"),
    ("average", "isAverageOf", "xsd:integer", "SensorControl"),
    ("uuid", "hasUuid", "xsd:string", "Beacon"),
    ("major", "hasMajor", "xsd:integer", "Beacon"),
    ("minor", "hasMinor", "xsd:integer", "Beacon"),
    ("rampDuration", "hasDuration", "xsd:integer", "Ramp"),
];

fn build(ctx: &mut GenerationContext) -> Result<()> {
    ctx.add_class("Rendering", Some(curie("mt:MultitrackProject")), None)?;
    controls(ctx)?;
    parameters(ctx)?;
    navigators(ctx)?;
    properties(ctx)
}

fn controls(ctx: &mut GenerationContext) -> Result<()> {
    ctx.add_class("MobileControl", None, None)?;
    for family in ["SensorControl", "UiControl", "DataControl", "AutoControl"] {
        ctx.add_class(family, Some("MobileControl".into()), None)?;
    }
    for &sensor in SENSOR_CONTROLS {
        ctx.add_class(sensor, Some("SensorControl".into()), None)?;
    }
    for ui in ["Slider", "Toggle", "Button", "CustomControl"] {
        ctx.add_class(ui, Some("UiControl".into()), None)?;
    }
    for auto in ["Random", "Brownian", "Ramp"] {
        ctx.add_class(auto, Some("AutoControl".into()), None)?;
    }
    Ok(())
}

fn parameters(ctx: &mut GenerationContext) -> Result<()> {
    ctx.add_class("MobileParameter", Some(curie("mt:AutomationParameter")), None)?;
    ctx.add_class("GlobalParameter", Some("MobileParameter".into()), None)?;
    ctx.add_class("ControlParameter", Some("MobileParameter".into()), None)?;
    ctx.add_individual("ListenerOrientation", "GlobalParameter", &[], None)?;
    for &param in CONTROL_PARAMETERS {
        ctx.add_individual(param, "ControlParameter", &[], None)?;
    }
    Ok(())
}

fn navigators(ctx: &mut GenerationContext) -> Result<()> {
    ctx.add_class("Navigator", None, None)?;
    for nav in [
        "OneShotNavigator",
        "SequentialNavigator",
        "SimilarityNavigator",
        "GraphNavigator",
    ] {
        ctx.add_class(nav, Some("Navigator".into()), None)?;
    }
    Ok(())
}

fn properties(ctx: &mut GenerationContext) -> Result<()> {
    ctx.add_property(
        TermDefinition::typed("dymo", "hasDymo", T::Id),
        "Rendering",
        "Dymo",
        Object,
        true,
        None,
    )?;
    ctx.add_union_class("ConstraintOwners", &["Dymo".into(), "Rendering".into()], None)?;
    ctx.add_property(
        TermDefinition::named("constraint", "constraint"),
        "ConstraintOwners",
        "Expression",
        Object,
        false,
        None,
    )?;

    ctx.add_property(
        TermDefinition::named("controlParam", "hasControlParam"),
        "MobileControl",
        "MobileParameter",
        Object,
        false,
        None,
    )?;
    for &(term, local_name, datatype, domain) in CONTROL_PROPERTIES {
        ctx.add_property(
            TermDefinition::typed(term, local_name, T::Datatype(datatype)),
            domain,
            curie(datatype),
            Datatype,
            false,
            None,
        )?;
    }

    // Navigator links are datatype properties; their ranges are written as
    // quoted class IRIs.
    ctx.add_property(
        TermDefinition::named("navigators", "hasNavigator"),
        "Rendering",
        "Navigator",
        Datatype,
        false,
        None,
    )?;
    ctx.add_property(
        TermDefinition::named("dymos", "navDymos"),
        "Navigator",
        "Expression",
        Datatype,
        false,
        None,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;
    use crate::model::{iris, Node};
    use crate::ontologies::{dymo, expression};

    const MB: &str = "http://tiny.cc/mobile-audio-ontology#";

    #[test]
    fn requires_the_other_ontologies() {
        let mut ctx = GenerationContext::default();
        assert_eq!(
            ctx.build(source()).map(|_| ()),
            Err(GenerationError::UnresolvedReference("Dymo".to_owned()))
        );
    }

    #[test]
    fn constraint_owners_span_two_ontologies() {
        let mut ctx = GenerationContext::default();
        ctx.build(expression::source()).expect("expression builds");
        ctx.build(dymo::source()).expect("dymo builds");
        let built = ctx.build(source()).expect("mobile audio builds");

        let owners = format!("{MB}ConstraintOwners");
        let head = built
            .graph
            .about(&owners)
            .find(|t| t.predicate == iris::OWL_UNION_OF)
            .map(|t| t.object.clone())
            .expect("unionOf triple");
        assert_eq!(
            built.graph.walk_list(&head),
            Some(vec![
                Node::iri("http://tiny.cc/dymo-ontology#Dymo"),
                Node::iri(format!("{MB}Rendering")),
            ])
        );
        assert!(built.graph.contains_iri(
            &format!("{MB}constraint"),
            iris::RDFS_RANGE,
            "http://tiny.cc/expression-ontology#Expression"
        ));
        assert!(ctx.exports().get("ACCELEROMETER_X").is_some());
        assert!(ctx.exports().get("HAS_DURATION").is_some());
    }
}
