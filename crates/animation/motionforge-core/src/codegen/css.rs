//! Plain CSS backend: one `@keyframes` block plus one class rule.

use std::fmt::Write as _;

use crate::data::AnimationConfig;
use crate::error::EngineError;
use crate::format;
use crate::resolve::{resolve, ResolvedAnimation};

/// Standalone stylesheet fragment reproducing `config`.
pub fn generate_css(config: &AnimationConfig) -> Result<String, EngineError> {
    resolve(config).map(|anim| render(&anim))
}

pub(super) fn render(anim: &ResolvedAnimation) -> String {
    let name = anim.kind.name();
    let mut out = String::new();

    let _ = writeln!(out, "@keyframes {name} {{");
    for frame in anim.keyframes() {
        let _ = writeln!(out, "  {} {{", format::percent(frame.offset));
        for decl in &frame.declarations {
            let _ = writeln!(out, "    {}: {};", decl.property, decl.value);
        }
        out.push_str("  }\n");
    }
    out.push_str("}\n\n");

    let t = &anim.timing;
    let _ = writeln!(out, ".{name} {{");
    let _ = writeln!(
        out,
        "  animation: {name} {} {} {} both;",
        format::seconds(t.duration),
        t.easing,
        format::seconds(t.delay)
    );
    out.push_str("}\n");
    out
}
