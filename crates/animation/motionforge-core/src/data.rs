//! Canonical animation configuration model (AnimationConfig).
//!
//! Pure data + validation. The binder and both generators only ever read a config;
//! defaults are filled in by `resolve`, never written back here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;
use crate::format;

/// Animation family selected by a config.
///
/// Unknown names survive deserialization as `Unsupported` so the closed-enum violation
/// is reported by the engine instead of failing the whole payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnimationKind {
    Fade,
    Slide,
    Scale,
    Rotate,
    Bounce,
    Unsupported(String),
}

impl AnimationKind {
    /// Every supported family, in panel order.
    pub const SUPPORTED: [AnimationKind; 5] = [
        AnimationKind::Fade,
        AnimationKind::Slide,
        AnimationKind::Scale,
        AnimationKind::Rotate,
        AnimationKind::Bounce,
    ];

    /// Lowercase token for this family (`"fade"`, `"slide"`, ...).
    pub fn name(&self) -> &str {
        match self {
            Self::Fade => "fade",
            Self::Slide => "slide",
            Self::Scale => "scale",
            Self::Rotate => "rotate",
            Self::Bounce => "bounce",
            Self::Unsupported(name) => name,
        }
    }

    #[inline]
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl From<String> for AnimationKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "fade" => Self::Fade,
            "slide" => Self::Slide,
            "scale" => Self::Scale,
            "rotate" => Self::Rotate,
            "bounce" => Self::Bounce,
            _ => Self::Unsupported(s),
        }
    }
}

impl From<AnimationKind> for String {
    fn from(kind: AnimationKind) -> Self {
        match kind {
            AnimationKind::Unsupported(name) => name,
            other => other.name().to_string(),
        }
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Timing curve. Serialized in its CSS text form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Easing {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    StepStart,
    StepEnd,
    CubicBezier(f64, f64, f64, f64),
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::Ease => f.write_str("ease"),
            Self::EaseIn => f.write_str("ease-in"),
            Self::EaseOut => f.write_str("ease-out"),
            Self::EaseInOut => f.write_str("ease-in-out"),
            Self::StepStart => f.write_str("step-start"),
            Self::StepEnd => f.write_str("step-end"),
            Self::CubicBezier(x1, y1, x2, y2) => write!(
                f,
                "cubic-bezier({}, {}, {}, {})",
                format::number(*x1),
                format::number(*y1),
                format::number(*x2),
                format::number(*y2)
            ),
        }
    }
}

impl FromStr for Easing {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidEasing {
            value: s.to_string(),
        };
        let text = s.trim();
        match text {
            "linear" => return Ok(Self::Linear),
            "ease" => return Ok(Self::Ease),
            "ease-in" => return Ok(Self::EaseIn),
            "ease-out" => return Ok(Self::EaseOut),
            "ease-in-out" => return Ok(Self::EaseInOut),
            "step-start" => return Ok(Self::StepStart),
            "step-end" => return Ok(Self::StepEnd),
            _ => {}
        }

        let args = text
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let points = args
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;
        let [x1, y1, x2, y2] = points[..] else {
            return Err(invalid());
        };
        let x_in_range = |x: f64| (0.0..=1.0).contains(&x);
        if !(x_in_range(x1) && x_in_range(x2) && y1.is_finite() && y2.is_finite()) {
            return Err(invalid());
        }
        Ok(Self::CubicBezier(x1, y1, x2, y2))
    }
}

impl TryFrom<String> for Easing {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Easing> for String {
    fn from(easing: Easing) -> Self {
        easing.to_string()
    }
}

/// Start/end pair used for opacity bounds and rotation angles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub start: f64,
    pub end: f64,
}

impl Range {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

/// Slide axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    X,
    Y,
}

impl Axis {
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

/// Input shapes accepted for `degrees`; collapsed into [`Range`] on the way in.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDegrees {
    Angle(f64),
    Range(Range),
}

fn deserialize_degrees<'de, D>(deserializer: D) -> Result<Option<Range>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawDegrees>::deserialize(deserializer)?;
    Ok(raw.map(|raw| match raw {
        RawDegrees::Angle(end) => Range::new(0.0, end),
        RawDegrees::Range(range) => range,
    }))
}

/// One animation instance: family, timing and the family's optional parameters.
///
/// Fields that do not belong to `kind` are tolerated and ignored downstream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(rename = "type")]
    pub kind: AnimationKind,
    /// Seconds, > 0.
    pub duration: f64,
    /// Seconds, >= 0.
    pub delay: f64,
    pub easing: Easing,
    /// fade
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Range>,
    /// slide, bounce. Signed pixels; for slide a negative value enters from the left/top.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// slide
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,
    /// scale: start factor, the end is always 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// rotate: a bare number on input means `0 -> value`.
    #[serde(
        default,
        deserialize_with = "deserialize_degrees",
        skip_serializing_if = "Option::is_none"
    )]
    pub degrees: Option<Range>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::new(AnimationKind::Fade, 0.5)
    }
}

impl AnimationConfig {
    /// Config with no delay, `ease` timing and no family parameters.
    pub fn new(kind: AnimationKind, duration: f64) -> Self {
        Self {
            kind,
            duration,
            delay: 0.0,
            easing: Easing::Ease,
            opacity: None,
            distance: None,
            axis: None,
            scale: None,
            degrees: None,
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_opacity(mut self, start: f64, end: f64) -> Self {
        self.opacity = Some(Range::new(start, end));
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Rotation from 0 to `end` degrees.
    pub fn with_degrees(mut self, end: f64) -> Self {
        self.degrees = Some(Range::new(0.0, end));
        self
    }

    pub fn with_degree_range(mut self, start: f64, end: f64) -> Self {
        self.degrees = Some(Range::new(start, end));
        self
    }

    /// Check the model constraints. Does not reject unknown kinds; see `resolve`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(ConfigError::NonPositiveDuration {
                duration: self.duration,
            });
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(ConfigError::NegativeDelay { delay: self.delay });
        }
        // Family fields are only checked for the family that reads them; the rest are
        // carried along and ignored downstream.
        match self.kind {
            AnimationKind::Fade => {
                if let Some(o) = self.opacity {
                    let unit = |v: f64| (0.0..=1.0).contains(&v);
                    if !(unit(o.start) && unit(o.end)) {
                        return Err(ConfigError::OpacityOutOfRange {
                            start: o.start,
                            end: o.end,
                        });
                    }
                }
            }
            AnimationKind::Slide | AnimationKind::Bounce => {
                if let Some(distance) = self.distance {
                    if !distance.is_finite() {
                        return Err(non_finite("distance"));
                    }
                }
            }
            AnimationKind::Scale => {
                if let Some(scale) = self.scale {
                    if !scale.is_finite() || scale <= 0.0 {
                        return Err(ConfigError::NonPositiveScale { scale });
                    }
                }
            }
            AnimationKind::Rotate => {
                if let Some(d) = self.degrees {
                    if !(d.start.is_finite() && d.end.is_finite()) {
                        return Err(non_finite("degrees"));
                    }
                }
            }
            AnimationKind::Unsupported(_) => {}
        }
        Ok(())
    }
}

fn non_finite(field: &str) -> ConfigError {
    ConfigError::NonFinite {
        field: field.to_string(),
    }
}
