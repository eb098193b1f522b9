// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Bump when a field changes meaning. Older files are migrated on load.
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub schema_version: u32,
    /// Treat input as OCR output unless told otherwise.
    #[serde(default)]
    pub ocr_by_default: bool,
    #[serde(default)]
    pub json_output: bool,
    #[serde(default = "default_true")]
    pub show_badges: bool,
    /// Alternate partner table with the same layout as the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_path: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            ocr_by_default: false,
            json_output: false,
            show_badges: true,
            registry_path: None,
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("org", "pointpath", "pointpath")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .unwrap_or_else(|| PathBuf::from("settings.json"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Missing file gives defaults. Outdated files are migrated and written back.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("[Settings] No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        let mut settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings in {:?}", path))?;

        if settings.schema_version < CURRENT_SCHEMA_VERSION {
            log::info!(
                "[Settings] Migrating {:?} from schema v{} to v{}",
                path,
                settings.schema_version,
                CURRENT_SCHEMA_VERSION
            );
            // v1→v2: badges became opt-out; v1 files stored `false` for everyone.
            if settings.schema_version <= 1 {
                settings.show_badges = true;
            }
            settings.schema_version = CURRENT_SCHEMA_VERSION;
            if let Err(e) = settings.save_to(path) {
                log::warn!("[Settings] Could not write migrated settings: {}", e);
            }
        }

        log::debug!("[Settings] Loaded {:?}", settings);
        Ok(settings)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;
        log::debug!("[Settings] Saved to {:?}", path);
        Ok(())
    }
}
