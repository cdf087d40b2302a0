//! Resolution of a config into the concrete animation every consumer renders.
//!
//! This is the single home of the defaults: the preview binder, the preview
//! stylesheet and both code generators read them from here, so a partially specified
//! config previews and exports identically.

use crate::data::{AnimationConfig, AnimationKind, Axis, Easing, Range};
use crate::error::EngineError;
use crate::format;

/// Slide offset and bounce height used when `distance` is absent (pixels).
pub const DEFAULT_DISTANCE_PX: f64 = 50.0;
/// Fade bounds used when `opacity` is absent.
pub const DEFAULT_OPACITY: Range = Range::new(0.0, 1.0);
/// Start factor used when `scale` is absent.
pub const DEFAULT_SCALE_FROM: f64 = 0.5;
/// Rotation used when `degrees` is absent.
pub const DEFAULT_ROTATION: Range = Range::new(0.0, 360.0);

/// Bounce profile: (offset, fraction of the bounce height lifted).
pub(crate) const BOUNCE_STEPS: [(f64, f64); 7] = [
    (0.0, 0.0),
    (0.2, 0.0),
    (0.4, 1.0),
    (0.5, 0.0),
    (0.6, 0.5),
    (0.8, 0.0),
    (1.0, 0.0),
];

/// Side a slide enters from, taken from the sign of `distance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Negative distance: from the left (x) or top (y).
    Negative,
    /// Non-negative or absent distance: from the right (x) or bottom (y).
    Positive,
}

impl Direction {
    pub fn of(distance: Option<f64>) -> Self {
        match distance {
            Some(d) if d < 0.0 => Self::Negative,
            _ => Self::Positive,
        }
    }

    #[inline]
    fn sign(self) -> f64 {
        match self {
            Self::Negative => -1.0,
            Self::Positive => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

/// Family parameters with defaults filled and irrelevant fields dropped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    Fade {
        opacity: Range,
    },
    Slide {
        axis: Axis,
        /// Magnitude in pixels; the sign lives in `direction`.
        distance: f64,
        direction: Direction,
    },
    Scale {
        from: f64,
    },
    Rotate {
        degrees: Range,
    },
    Bounce {
        height: f64,
    },
}

/// One CSS declaration inside a keyframe step.
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

/// One keyframe step at `offset` in [0, 1].
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
    pub offset: f64,
    pub declarations: Vec<Declaration>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedAnimation {
    pub kind: AnimationKind,
    pub timing: Timing,
    pub motion: Motion,
}

/// Validate `config` and fill every default its family needs.
///
/// An unknown kind is reported before any field is checked.
pub fn resolve(config: &AnimationConfig) -> Result<ResolvedAnimation, EngineError> {
    if let AnimationKind::Unsupported(name) = &config.kind {
        return Err(EngineError::UnsupportedType { kind: name.clone() });
    }
    config.validate()?;

    let motion = match &config.kind {
        AnimationKind::Fade => Motion::Fade {
            opacity: config.opacity.unwrap_or(DEFAULT_OPACITY),
        },
        AnimationKind::Slide => Motion::Slide {
            axis: config.axis.unwrap_or_default(),
            distance: config.distance.unwrap_or(DEFAULT_DISTANCE_PX).abs(),
            direction: Direction::of(config.distance),
        },
        AnimationKind::Scale => Motion::Scale {
            from: config.scale.unwrap_or(DEFAULT_SCALE_FROM),
        },
        AnimationKind::Rotate => Motion::Rotate {
            degrees: config.degrees.unwrap_or(DEFAULT_ROTATION),
        },
        AnimationKind::Bounce => Motion::Bounce {
            height: config.distance.unwrap_or(DEFAULT_DISTANCE_PX).abs(),
        },
        AnimationKind::Unsupported(name) => {
            return Err(EngineError::UnsupportedType { kind: name.clone() })
        }
    };

    Ok(ResolvedAnimation {
        kind: config.kind.clone(),
        timing: Timing {
            duration: config.duration,
            delay: config.delay,
            easing: config.easing,
        },
        motion,
    })
}

fn step(offset: f64, property: &'static str, value: String) -> Keyframe {
    Keyframe {
        offset,
        declarations: vec![Declaration { property, value }],
    }
}

fn translate(axis: Axis, offset_px: f64) -> String {
    let func = match axis {
        Axis::X => "translateX",
        Axis::Y => "translateY",
    };
    format!("{func}({})", format::length(offset_px))
}

impl ResolvedAnimation {
    /// Keyframe steps in ascending offset order, with literal values.
    pub fn keyframes(&self) -> Vec<Keyframe> {
        match self.motion {
            Motion::Fade { opacity } => vec![
                step(0.0, "opacity", format::number(opacity.start)),
                step(1.0, "opacity", format::number(opacity.end)),
            ],
            Motion::Slide {
                axis,
                distance,
                direction,
            } => vec![
                step(0.0, "transform", translate(axis, distance * direction.sign())),
                step(1.0, "transform", translate(axis, 0.0)),
            ],
            Motion::Scale { from } => vec![
                step(0.0, "transform", format!("scale({})", format::number(from))),
                step(1.0, "transform", "scale(1)".to_string()),
            ],
            Motion::Rotate { degrees } => vec![
                step(
                    0.0,
                    "transform",
                    format!("rotate({})", format::degrees(degrees.start)),
                ),
                step(
                    1.0,
                    "transform",
                    format!("rotate({})", format::degrees(degrees.end)),
                ),
            ],
            Motion::Bounce { height } => BOUNCE_STEPS
                .iter()
                .map(|&(offset, lift)| step(offset, "transform", translate(Axis::Y, -height * lift)))
                .collect(),
        }
    }
}
