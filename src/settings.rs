//! Editor settings persisted as JSON.
//!
//! Every field has a default so partial files load cleanly.

use crate::constants::{
    DEFAULT_BACKEND_ENDPOINT, DEFAULT_BACKEND_TIMEOUT_MS, DEFAULT_RECT_POSITION,
    DEFAULT_RECT_SIZE, DELETE_BUTTON_SIZE, HANDLE_HIT_RADIUS, MIN_SIZE,
};
use crate::types::Geometry;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Minimum width and height enforced by resize
    pub min_size: f32,
    /// Geometry of a newly added rectangle
    pub default_rect: Geometry,
    /// Grab radius of the built-in handle hit tester
    pub handle_hit_radius: f32,
    /// Side of the delete affordance for the built-in hit tester
    pub delete_button_size: f32,
    pub backend: BackendSettings,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            min_size: MIN_SIZE,
            default_rect: Geometry::new(
                DEFAULT_RECT_POSITION.0,
                DEFAULT_RECT_POSITION.1,
                DEFAULT_RECT_SIZE.0,
                DEFAULT_RECT_SIZE.1,
            ),
            handle_hit_radius: HANDLE_HIT_RADIUS,
            delete_button_size: DELETE_BUTTON_SIZE,
            backend: BackendSettings::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Full URL of the detection endpoint
    pub endpoint: String,
    pub timeout_ms: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_BACKEND_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_BACKEND_TIMEOUT_MS,
        }
    }
}

impl BackendSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl EditorSettings {
    /// Read and parse a settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings in {}", path.display()))?;
        info!(path = %path.display(), "Loaded editor settings");
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// unusable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Using default settings: {:#}", e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        Ok(())
    }
}
