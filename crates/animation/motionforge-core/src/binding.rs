//! Preview binding: applies a config to a live host element.
//!
//! The binder never adds wrapper elements. It writes one class token plus a set of
//! namespaced custom properties onto the target; the pre-declared families in
//! [`preview_stylesheet`](crate::stylesheet::preview_stylesheet) read them. Whatever
//! it wrote is tracked and removed again before the next application, on `unbind`,
//! and on drop.

use log::{debug, warn};

use crate::data::{AnimationConfig, AnimationKind, Axis};
use crate::format;
use crate::resolve::{resolve, Direction};

/// Inline style property used to pause/resume in place.
pub const PLAY_STATE_PROPERTY: &str = "animation-play-state";

/// Host element seam. Adapters (wasm/DOM) implement this for their element handle.
pub trait PreviewTarget {
    fn add_class(&mut self, token: &str);
    fn remove_class(&mut self, token: &str);
    fn set_style_property(&mut self, name: &str, value: &str);
    fn remove_style_property(&mut self, name: &str);
    /// Flush pending style so a removed-then-readded class restarts its animation.
    fn reflow(&mut self) {}
}

/// Binder lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BindingState {
    /// No element attached.
    Unbound,
    /// Element attached but nothing animates (unsupported or invalid config).
    Bound,
    Running,
    Paused,
}

impl BindingState {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unbound => "unbound",
            Self::Bound => "bound",
            Self::Running => "running",
            Self::Paused => "paused",
        }
    }
}

/// Class token selecting the pre-declared animation family, or `None` for unknown kinds.
pub fn class_token(config: &AnimationConfig) -> Option<&'static str> {
    let token = match config.kind {
        AnimationKind::Fade => "mf-fade",
        AnimationKind::Slide => {
            let axis = config.axis.unwrap_or_default();
            match (axis, Direction::of(config.distance)) {
                (Axis::X, Direction::Negative) => "mf-slide-from-left",
                (Axis::X, Direction::Positive) => "mf-slide-from-right",
                (Axis::Y, Direction::Negative) => "mf-slide-from-top",
                (Axis::Y, Direction::Positive) => "mf-slide-from-bottom",
            }
        }
        AnimationKind::Scale => "mf-scale",
        AnimationKind::Rotate => "mf-rotate",
        AnimationKind::Bounce => "mf-bounce",
        AnimationKind::Unsupported(_) => return None,
    };
    Some(token)
}

/// Custom property name for `param` of `family`, e.g. `--mf-slide-duration`.
pub fn property_name(family: &str, param: &str) -> String {
    format!("--mf-{family}-{param}")
}

/// Custom properties the binder writes for `config`, in write order.
///
/// Timing goes to every family; family parameters only when the config carries
/// them and they belong to its kind. Distance is written as a magnitude.
pub fn custom_properties(config: &AnimationConfig) -> Vec<(String, String)> {
    let mut props = Vec::new();
    let duration = format::seconds(config.duration);
    let delay = format::seconds(config.delay);
    let easing = config.easing.to_string();
    for kind in AnimationKind::SUPPORTED {
        let family = kind.name();
        props.push((property_name(family, "duration"), duration.clone()));
        props.push((property_name(family, "delay"), delay.clone()));
        props.push((property_name(family, "easing"), easing.clone()));
    }

    match config.kind {
        AnimationKind::Fade => {
            if let Some(o) = config.opacity {
                props.push((property_name("fade", "opacity-start"), format::number(o.start)));
                props.push((property_name("fade", "opacity-end"), format::number(o.end)));
            }
        }
        AnimationKind::Slide | AnimationKind::Bounce => {
            if let Some(d) = config.distance {
                props.push((
                    property_name(config.kind.name(), "distance"),
                    format::pixels(d.abs()),
                ));
            }
        }
        AnimationKind::Scale => {
            if let Some(s) = config.scale {
                props.push((property_name("scale", "start"), format::number(s)));
            }
        }
        AnimationKind::Rotate => {
            if let Some(d) = config.degrees {
                props.push((property_name("rotate", "start"), format::degrees(d.start)));
                props.push((property_name("rotate", "end"), format::degrees(d.end)));
            }
        }
        AnimationKind::Unsupported(_) => {}
    }
    props
}

/// What the binder wrote onto the current target.
#[derive(Debug, Default)]
struct Applied {
    token: Option<&'static str>,
    properties: Vec<String>,
    play_state: bool,
}

/// Owned preview resource over one target element (single slot, last writer wins).
#[derive(Debug)]
pub struct PreviewBinder<T: PreviewTarget> {
    target: Option<T>,
    applied: Applied,
    state: BindingState,
    replay_key: u64,
}

impl<T: PreviewTarget> Default for PreviewBinder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PreviewTarget> PreviewBinder<T> {
    pub fn new() -> Self {
        Self {
            target: None,
            applied: Applied::default(),
            state: BindingState::Unbound,
            replay_key: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> BindingState {
        self.state
    }

    /// Class token currently applied, if any.
    #[inline]
    pub fn class_token(&self) -> Option<&'static str> {
        self.applied.token
    }

    /// Monotonic restart counter; bumped by every successful `replay`.
    #[inline]
    pub fn replay_key(&self) -> u64 {
        self.replay_key
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Apply `config` to `target`. A `None` target detaches (no-op bind).
    ///
    /// Anything written to the previous target is removed first.
    pub fn bind(&mut self, config: &AnimationConfig, target: Option<T>) -> BindingState {
        self.release();
        self.target = target;
        self.apply(config)
    }

    /// Re-apply a (possibly changed) config to the current target.
    pub fn rebind(&mut self, config: &AnimationConfig) -> BindingState {
        self.release();
        self.apply(config)
    }

    /// Restart the animation from the beginning. Returns false when nothing animates.
    pub fn replay(&mut self) -> bool {
        let (Some(target), Some(token)) = (self.target.as_mut(), self.applied.token) else {
            return false;
        };
        self.replay_key = self.replay_key.wrapping_add(1);
        if self.applied.play_state {
            target.remove_style_property(PLAY_STATE_PROPERTY);
            self.applied.play_state = false;
        }
        target.remove_class(token);
        target.reflow();
        target.add_class(token);
        self.state = BindingState::Running;
        debug!("preview replay {token} (key {})", self.replay_key);
        true
    }

    /// Running -> Paused, keeping progress.
    pub fn pause(&mut self) -> bool {
        self.set_play_state(BindingState::Running, BindingState::Paused, "paused")
    }

    /// Paused -> Running, from where it stopped.
    pub fn resume(&mut self) -> bool {
        self.set_play_state(BindingState::Paused, BindingState::Running, "running")
    }

    /// Remove everything from the target and hand it back.
    pub fn unbind(&mut self) -> Option<T> {
        self.release();
        self.state = BindingState::Unbound;
        debug!("preview unbound");
        self.target.take()
    }

    fn set_play_state(&mut self, from: BindingState, to: BindingState, value: &str) -> bool {
        if self.state != from {
            return false;
        }
        let Some(target) = self.target.as_mut() else {
            return false;
        };
        target.set_style_property(PLAY_STATE_PROPERTY, value);
        self.applied.play_state = true;
        self.state = to;
        debug!("preview {}", to.name());
        true
    }

    fn apply(&mut self, config: &AnimationConfig) -> BindingState {
        let Some(target) = self.target.as_mut() else {
            self.state = BindingState::Unbound;
            return self.state;
        };

        if let Err(err) = resolve(config) {
            warn!("preview disabled for '{}': {err}", config.kind);
            self.state = BindingState::Bound;
            return self.state;
        }

        let properties = custom_properties(config);
        for (name, value) in &properties {
            target.set_style_property(name, value);
        }
        let token = class_token(config);
        if let Some(token) = token {
            target.add_class(token);
        }
        self.applied = Applied {
            token,
            properties: properties.into_iter().map(|(name, _)| name).collect(),
            play_state: false,
        };
        self.state = BindingState::Running;
        debug!("preview bound {:?} for '{}'", token, config.kind);
        self.state
    }

    fn release(&mut self) {
        let applied = std::mem::take(&mut self.applied);
        let Some(target) = self.target.as_mut() else {
            return;
        };
        if let Some(token) = applied.token {
            target.remove_class(token);
        }
        for name in &applied.properties {
            target.remove_style_property(name);
        }
        if applied.play_state {
            target.remove_style_property(PLAY_STATE_PROPERTY);
        }
        if self.state != BindingState::Unbound {
            self.state = BindingState::Bound;
        }
    }
}

impl<T: PreviewTarget> Drop for PreviewBinder<T> {
    fn drop(&mut self) {
        self.release();
    }
}
