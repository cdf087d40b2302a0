//! React backend: a self-contained function component driving the Web Animations API
//! with literal keyframes and timing.

use std::fmt::Write as _;

use log::warn;

use crate::data::{AnimationConfig, AnimationKind};
use crate::error::EngineError;
use crate::format;
use crate::resolve::{resolve, Direction, Motion, ResolvedAnimation};

/// Default component name for a family: `FadeAnimation`, `SlideAnimation`, ...
pub fn component_name(kind: &AnimationKind) -> String {
    if !kind.is_supported() {
        return "Animation".to_string();
    }
    let name = kind.name();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("{}{}Animation", first.to_ascii_uppercase(), chars.as_str()),
        None => "Animation".to_string(),
    }
}

fn is_component_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// React component reproducing `config`, named after its family.
pub fn generate_react(config: &AnimationConfig) -> Result<String, EngineError> {
    resolve(config).map(|anim| render(&anim, None))
}

/// Same as [`generate_react`] with an explicit component name.
pub fn generate_react_named(config: &AnimationConfig, name: &str) -> Result<String, EngineError> {
    resolve(config).map(|anim| render(&anim, Some(name)))
}

fn js_value(value: &str) -> String {
    if value.parse::<f64>().is_ok() {
        value.to_string()
    } else {
        format!("\"{value}\"")
    }
}

fn parameter_lines(motion: &Motion) -> Vec<String> {
    match *motion {
        Motion::Fade { opacity } => vec![format!(
            "opacity: {{ start: {}, end: {} }},",
            format::number(opacity.start),
            format::number(opacity.end)
        )],
        Motion::Slide {
            axis,
            distance,
            direction,
        } => {
            let signed = match direction {
                Direction::Negative => -distance,
                Direction::Positive => distance,
            };
            vec![
                format!("axis: \"{}\",", axis.name()),
                format!("distance: {},", format::number(signed)),
            ]
        }
        Motion::Scale { from } => vec![format!("scale: {},", format::number(from))],
        Motion::Rotate { degrees } => vec![format!(
            "degrees: {{ start: {}, end: {} }},",
            format::number(degrees.start),
            format::number(degrees.end)
        )],
        Motion::Bounce { height } => vec![format!("distance: {},", format::number(height))],
    }
}

pub(super) fn render(anim: &ResolvedAnimation, name: Option<&str>) -> String {
    let component = match name {
        Some(n) if is_component_identifier(n) => n.to_string(),
        Some(n) => {
            warn!("ignoring invalid component name '{n}'");
            component_name(&anim.kind)
        }
        None => component_name(&anim.kind),
    };
    let t = &anim.timing;
    let mut out = String::new();

    out.push_str("import { useEffect, useRef } from \"react\";\n\n");

    out.push_str("const animation = {\n");
    let _ = writeln!(out, "  type: \"{}\",", anim.kind.name());
    let _ = writeln!(out, "  duration: {},", format::number(t.duration));
    let _ = writeln!(out, "  delay: {},", format::number(t.delay));
    let _ = writeln!(out, "  easing: \"{}\",", t.easing);
    for line in parameter_lines(&anim.motion) {
        let _ = writeln!(out, "  {line}");
    }
    out.push_str("};\n\n");

    out.push_str("const keyframes = [\n");
    for frame in anim.keyframes() {
        let mut fields = vec![format!("offset: {}", format::number(frame.offset))];
        fields.extend(
            frame
                .declarations
                .iter()
                .map(|d| format!("{}: {}", d.property, js_value(&d.value))),
        );
        let _ = writeln!(out, "  {{ {} }},", fields.join(", "));
    }
    out.push_str("];\n\n");

    let _ = writeln!(out, "export function {component}({{ children }}) {{");
    out.push_str(
        "  const ref = useRef(null);\n\
         \n\
         \x20 useEffect(() => {\n\
         \x20   const element = ref.current;\n\
         \x20   if (!element) {\n\
         \x20     return undefined;\n\
         \x20   }\n\
         \x20   const running = element.animate(keyframes, {\n\
         \x20     duration: animation.duration * 1000,\n\
         \x20     delay: animation.delay * 1000,\n\
         \x20     easing: animation.easing,\n\
         \x20     fill: \"both\",\n\
         \x20   });\n\
         \x20   return () => running.cancel();\n\
         \x20 }, []);\n\
         \n\
         \x20 return <div ref={ref}>{children}</div>;\n\
         }\n\n",
    );
    let _ = writeln!(out, "export default {component};");
    out
}
