//! Code generation backends.
//!
//! Both backends are pure: they render the keyframes of the resolved animation, so the
//! same config always yields byte-identical text and matches the live preview.

mod css;
mod react;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::data::{AnimationConfig, AnimationKind};
use crate::error::{ConfigError, EngineError};
use crate::resolve::resolve;

pub use css::generate_css;
pub use react::{component_name, generate_react, generate_react_named};

/// Export target shown in the export panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    React,
    Css,
}

impl Backend {
    pub const ALL: [Backend; 2] = [Backend::React, Backend::Css];

    pub fn name(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Css => "css",
        }
    }

    /// Suggested file name for a download of the generated source.
    pub fn file_name(self, kind: &AnimationKind) -> String {
        match self {
            Self::React => format!("{}.jsx", component_name(kind)),
            Self::Css if kind.is_supported() => format!("{}.css", kind.name()),
            Self::Css => "animation.css".to_string(),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "react" => Ok(Self::React),
            "css" => Ok(Self::Css),
            _ => Err(ConfigError::UnknownBackend {
                name: s.to_string(),
            }),
        }
    }
}

/// Generate source for `backend` with default settings.
pub fn generate(backend: Backend, config: &AnimationConfig) -> Result<String, EngineError> {
    generate_with(backend, config, &Settings::default())
}

/// Generate source for `backend`, honouring host settings.
pub fn generate_with(
    backend: Backend,
    config: &AnimationConfig,
    settings: &Settings,
) -> Result<String, EngineError> {
    let anim = resolve(config)?;
    Ok(match backend {
        Backend::React => react::render(&anim, settings.component_name.as_deref()),
        Backend::Css => css::render(&anim),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_names_parse() {
        for backend in Backend::ALL {
            assert_eq!(backend.name().parse::<Backend>().unwrap(), backend);
        }
        assert_eq!("CSS".parse::<Backend>().unwrap(), Backend::Css);
        assert!("svelte".parse::<Backend>().is_err());
    }

    #[test]
    fn file_names() {
        assert_eq!(Backend::React.file_name(&AnimationKind::Fade), "FadeAnimation.jsx");
        assert_eq!(Backend::Css.file_name(&AnimationKind::Bounce), "bounce.css");
    }

    #[test]
    fn unsupported_type_yields_error_not_source() {
        let cfg = AnimationConfig::new(AnimationKind::Unsupported("spin".into()), 1.0);
        for backend in Backend::ALL {
            assert!(matches!(
                generate(backend, &cfg),
                Err(EngineError::UnsupportedType { .. })
            ));
        }
    }
}
