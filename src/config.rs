// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Startup settings.
//!
//! Read once from a YAML file at `$BUILD_EDITOR_CONFIG`, or from
//! `build-editor/config.yaml` under the platform config directory. Every
//! field is optional; a missing file means defaults.

use crate::state::EditorMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "BUILD_EDITOR_CONFIG";

const DEFAULT_WINDOW: [f32; 2] = [1280.0, 720.0];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: Option<f32>,
    pub window_height: Option<f32>,
    pub start_mode: Option<EditorMode>,
}

impl AppConfig {
    /// Returns the config file path, if one can be determined.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|d| d.join("build-editor").join("config.yaml"))
    }

    /// Load the config file. A missing file is not an error.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let yaml = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_yaml(&yaml)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn window_size(&self) -> [f32; 2] {
        [
            self.window_width.unwrap_or(DEFAULT_WINDOW[0]),
            self.window_height.unwrap_or(DEFAULT_WINDOW[1]),
        ]
    }

    pub fn mode(&self) -> EditorMode {
        self.start_mode.unwrap_or_default()
    }
}
