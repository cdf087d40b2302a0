//! Export/preview coordinator.
//!
//! Holds the config currently being previewed, the preview binder, the active export
//! backend and the text generated for it. `generated` is only ever produced by the
//! code generators from `(config, active_backend)`.
//!
//! Copying is asynchronous on every host, so it is split in two: `begin_copy` hands
//! the host a [`CopyRequest`], and the host reports back through `finish_copy`. Only
//! the newest request may change the copy status; completions of superseded requests
//! are dropped.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::binding::{BindingState, PreviewBinder, PreviewTarget};
use crate::codegen::{generate_with, Backend};
use crate::config::Settings;
use crate::data::AnimationConfig;
use crate::error::EngineError;

/// Text the host must place on the clipboard, tagged for `finish_copy`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyRequest {
    pub id: u64,
    pub text: String,
}

/// Copy feedback visible to the user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed {
        message: String,
    },
}

#[derive(Debug, Default)]
struct CopyTracker {
    next_id: u64,
    pending: Option<u64>,
    last: Option<(CopyStatus, f64)>,
}

#[derive(Debug)]
pub struct ExportCoordinator<T: PreviewTarget> {
    settings: Settings,
    config: AnimationConfig,
    active_backend: Backend,
    generated: Result<String, EngineError>,
    preview: PreviewBinder<T>,
    copy: CopyTracker,
}

impl<T: PreviewTarget> ExportCoordinator<T> {
    pub fn new(settings: Settings, config: AnimationConfig) -> Self {
        let active_backend = settings.default_backend;
        let generated = generate_with(active_backend, &config, &settings);
        Self {
            settings,
            config,
            active_backend,
            generated,
            preview: PreviewBinder::new(),
            copy: CopyTracker::default(),
        }
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    #[inline]
    pub fn active_backend(&self) -> Backend {
        self.active_backend
    }

    /// Generated source, or the reason none could be produced.
    pub fn generated(&self) -> Result<&str, &EngineError> {
        self.generated.as_deref()
    }

    pub fn generated_text(&self) -> Option<&str> {
        self.generated.as_deref().ok()
    }

    pub fn preview(&self) -> &PreviewBinder<T> {
        &self.preview
    }

    /// Replay/pause/resume controls.
    pub fn preview_mut(&mut self) -> &mut PreviewBinder<T> {
        &mut self.preview
    }

    /// Replace the config and target together.
    pub fn bind(&mut self, config: AnimationConfig, target: Option<T>) -> BindingState {
        self.config = config;
        self.regenerate();
        self.preview.bind(&self.config, target)
    }

    /// Replace the config; the newest config always wins for preview and export.
    pub fn set_config(&mut self, config: AnimationConfig) -> BindingState {
        self.config = config;
        self.regenerate();
        self.preview.rebind(&self.config)
    }

    pub fn attach(&mut self, target: T) -> BindingState {
        self.preview.bind(&self.config, Some(target))
    }

    pub fn detach(&mut self) -> Option<T> {
        self.preview.unbind()
    }

    /// Switch backends. Leaves the config untouched.
    pub fn set_backend(&mut self, backend: Backend) {
        if backend == self.active_backend {
            return;
        }
        self.active_backend = backend;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.generated = generate_with(self.active_backend, &self.config, &self.settings);
        match &self.generated {
            Ok(text) => debug!(
                "regenerated {} export for '{}' ({} bytes)",
                self.active_backend,
                self.config.kind,
                text.len()
            ),
            Err(err) => warn!("no {} export: {err}", self.active_backend),
        }
    }

    /// Start a copy of the current text. `None` when there is nothing to copy.
    pub fn begin_copy(&mut self) -> Option<CopyRequest> {
        let text = self.generated_text()?.to_string();
        let id = self.copy.next_id;
        self.copy.next_id = self.copy.next_id.wrapping_add(1);
        self.copy.pending = Some(id);
        Some(CopyRequest { id, text })
    }

    /// Report the outcome of a copy started with `begin_copy`.
    ///
    /// Returns false when the request was superseded and the outcome dropped.
    pub fn finish_copy(&mut self, id: u64, outcome: Result<(), String>, now_ms: f64) -> bool {
        if self.copy.pending != Some(id) {
            debug!("dropping stale copy result {id}");
            return false;
        }
        self.copy.pending = None;
        let status = match outcome {
            Ok(()) => CopyStatus::Copied,
            Err(message) => {
                warn!("copy to clipboard failed: {message}");
                CopyStatus::Failed { message }
            }
        };
        self.copy.last = Some((status, now_ms));
        true
    }

    /// Copy feedback as of `now_ms`; clears itself after `copy_feedback_ms`.
    pub fn copy_status(&self, now_ms: f64) -> CopyStatus {
        match &self.copy.last {
            Some((status, at)) if now_ms - at < self.settings.copy_feedback_ms => status.clone(),
            _ => CopyStatus::Idle,
        }
    }

    #[inline]
    pub fn copy_pending(&self) -> bool {
        self.copy.pending.is_some()
    }

    /// Hide a copy failure before its window runs out.
    pub fn dismiss_copy_error(&mut self) {
        if matches!(self.copy.last, Some((CopyStatus::Failed { .. }, _))) {
            self.copy.last = None;
        }
    }
}
