// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::types::{Operation, UnitSystem};

/// File name of the persisted configuration inside the data directory.
pub const CONFIG_FILE: &str = "config.json";

/// Upper bound of the blur radius slider.
pub const MAX_BLUR_RADIUS: u8 = 10;

/// Persistent application settings. These only seed widget defaults; tool
/// inputs and results are never written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Unit system selected when the BMI page opens.
    pub default_unit_system: UnitSystem,
    /// Operation selected when the calculator page opens.
    pub default_operation: Operation,
    /// Initial blur radius for the image filter page (0..=10).
    pub default_blur_radius: u8,
    /// Decimal places used for displayed results.
    pub result_decimals: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_unit_system: UnitSystem::Metric,
            default_operation: Operation::Add,
            default_blur_radius: 2,
            result_decimals: 2,
        }
    }
}

impl AppConfig {
    /// Load the config from `dir/config.json`.
    ///
    /// A missing or malformed file yields the defaults; out-of-range values
    /// are clamped.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "no config file, using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str::<Self>(&text) {
            Ok(config) => config.sanitized(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "malformed config file, using defaults");
                Self::default()
            }
        }
    }

    /// Write the config to `dir/config.json` as pretty-printed JSON.
    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(dir.join(CONFIG_FILE), json)?;
        Ok(())
    }

    fn sanitized(mut self) -> Self {
        self.default_blur_radius = self.default_blur_radius.min(MAX_BLUR_RADIUS);
        self.result_decimals = self.result_decimals.min(6);
        self
    }
}
