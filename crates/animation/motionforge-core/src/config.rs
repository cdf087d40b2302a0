//! Host-facing settings for motionforge-core.

use serde::{Deserialize, Serialize};

use crate::codegen::Backend;

/// Export/preview settings. Every field has a default, so partial JSON is accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend shown when the export panel opens.
    pub default_backend: Backend,
    /// How long a copy success/failure flag stays visible (milliseconds).
    pub copy_feedback_ms: f64,
    /// Overrides the generated React component name (`FadeAnimation`, ...).
    /// Ignored unless it is a PascalCase identifier.
    pub component_name: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_backend: Backend::React,
            copy_feedback_ms: 2000.0,
            component_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"default_backend":"css"}"#).unwrap();
        assert_eq!(settings.default_backend, Backend::Css);
        assert_eq!(settings.copy_feedback_ms, 2000.0);
        assert_eq!(settings.component_name, None);
    }
}
