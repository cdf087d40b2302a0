//! Motionforge Core (host-agnostic)
//!
//! One animation config, three consumers: a live preview binder that drives a CSS
//! animation on a host element, and two code generators (React, CSS) whose output
//! reproduces that preview. The export coordinator ties the three together for an
//! export panel.

pub mod binding;
pub mod codegen;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
mod format;
pub mod loader;
pub mod resolve;
pub mod stylesheet;

// Re-exports for consumers (adapters)
pub use binding::{class_token, custom_properties, BindingState, PreviewBinder, PreviewTarget};
pub use codegen::{generate, generate_css, generate_react, generate_with, Backend};
pub use config::Settings;
pub use data::{AnimationConfig, AnimationKind, Axis, Easing, Range};
pub use error::{ConfigError, EngineError};
pub use export::{CopyRequest, CopyStatus, ExportCoordinator};
pub use loader::parse_animation_config_json;
pub use resolve::{resolve, ResolvedAnimation, DEFAULT_DISTANCE_PX};
pub use stylesheet::preview_stylesheet;
