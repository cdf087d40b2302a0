//! Pre-declared preview families selected by the binder's class tokens.
//!
//! Every family reads its parameters from the custom properties written by
//! [`custom_properties`](crate::binding::custom_properties). The `var()` fallbacks are
//! the `resolve` defaults, so a config without a family parameter previews exactly like
//! the code exported for it.

use std::fmt::Write as _;

use crate::binding::property_name;
use crate::data::Easing;
use crate::format;
use crate::resolve::{
    BOUNCE_STEPS, DEFAULT_DISTANCE_PX, DEFAULT_OPACITY, DEFAULT_ROTATION, DEFAULT_SCALE_FROM,
};

fn var(family: &str, param: &str, fallback: &str) -> String {
    format!("var({}, {fallback})", property_name(family, param))
}

fn keyframes(out: &mut String, name: &str, steps: &[(f64, String)]) {
    let _ = writeln!(out, "@keyframes {name} {{");
    for (offset, declaration) in steps {
        let _ = writeln!(out, "  {} {{ {declaration}; }}", format::percent(*offset));
    }
    out.push_str("}\n\n");
}

fn rule(out: &mut String, token: &str, family: &str) {
    let _ = writeln!(out, ".{token} {{");
    let _ = writeln!(
        out,
        "  animation: {token} {} {} {} both;",
        var(family, "duration", "0.5s"),
        var(family, "easing", &Easing::default().to_string()),
        var(family, "delay", "0s"),
    );
    out.push_str("}\n\n");
}

fn slide(out: &mut String, token: &str, func: &str, sign: &str) {
    let distance = var("slide", "distance", &format::pixels(DEFAULT_DISTANCE_PX));
    let from = format!("transform: {func}(calc({distance} * {sign}))");
    keyframes(
        out,
        token,
        &[(0.0, from), (1.0, format!("transform: {func}(0)"))],
    );
    rule(out, token, "slide");
}

/// The stylesheet a host installs once so bound elements can animate.
pub fn preview_stylesheet() -> String {
    let mut out = String::new();

    keyframes(
        &mut out,
        "mf-fade",
        &[
            (
                0.0,
                format!(
                    "opacity: {}",
                    var("fade", "opacity-start", &format::number(DEFAULT_OPACITY.start))
                ),
            ),
            (
                1.0,
                format!(
                    "opacity: {}",
                    var("fade", "opacity-end", &format::number(DEFAULT_OPACITY.end))
                ),
            ),
        ],
    );
    rule(&mut out, "mf-fade", "fade");

    slide(&mut out, "mf-slide-from-left", "translateX", "-1");
    slide(&mut out, "mf-slide-from-right", "translateX", "1");
    slide(&mut out, "mf-slide-from-top", "translateY", "-1");
    slide(&mut out, "mf-slide-from-bottom", "translateY", "1");

    keyframes(
        &mut out,
        "mf-scale",
        &[
            (
                0.0,
                format!(
                    "transform: scale({})",
                    var("scale", "start", &format::number(DEFAULT_SCALE_FROM))
                ),
            ),
            (1.0, "transform: scale(1)".to_string()),
        ],
    );
    rule(&mut out, "mf-scale", "scale");

    keyframes(
        &mut out,
        "mf-rotate",
        &[
            (
                0.0,
                format!(
                    "transform: rotate({})",
                    var("rotate", "start", &format::degrees(DEFAULT_ROTATION.start))
                ),
            ),
            (
                1.0,
                format!(
                    "transform: rotate({})",
                    var("rotate", "end", &format::degrees(DEFAULT_ROTATION.end))
                ),
            ),
        ],
    );
    rule(&mut out, "mf-rotate", "rotate");

    let height = var("bounce", "distance", &format::pixels(DEFAULT_DISTANCE_PX));
    let bounce: Vec<(f64, String)> = BOUNCE_STEPS
        .iter()
        .map(|&(offset, lift)| {
            let value = if lift == 0.0 {
                "transform: translateY(0)".to_string()
            } else {
                format!(
                    "transform: translateY(calc({height} * {}))",
                    format::number(-lift)
                )
            };
            (offset, value)
        })
        .collect();
    keyframes(&mut out, "mf-bounce", &bounce);
    rule(&mut out, "mf-bounce", "bounce");

    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_every_family_token() {
        let css = preview_stylesheet();
        for token in [
            "mf-fade",
            "mf-slide-from-left",
            "mf-slide-from-right",
            "mf-slide-from-top",
            "mf-slide-from-bottom",
            "mf-scale",
            "mf-rotate",
            "mf-bounce",
        ] {
            assert!(css.contains(&format!("@keyframes {token} {{")), "{token}");
            assert!(css.contains(&format!(".{token} {{")), "{token}");
        }
    }

    #[test]
    fn fallbacks_match_resolve_defaults() {
        let css = preview_stylesheet();
        assert!(css.contains("var(--mf-fade-opacity-start, 0)"));
        assert!(css.contains("var(--mf-fade-opacity-end, 1)"));
        assert!(css.contains("var(--mf-slide-distance, 50px)"));
        assert!(css.contains("var(--mf-bounce-distance, 50px)"));
        assert!(css.contains("var(--mf-scale-start, 0.5)"));
        assert!(css.contains("var(--mf-rotate-end, 360deg)"));
    }

    #[test]
    fn is_stable() {
        assert_eq!(preview_stylesheet(), preview_stylesheet());
    }
}
