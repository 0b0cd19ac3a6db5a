// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — resolves the data directory, loads the config, and
// provides the methods the Dioxus pages call to read and persist it.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use desktools_core::AppConfig;
use desktools_core::error::Result;
use tracing::info;

use super::data_dir;

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// Cheaply cloneable (Arc-wrapped) so it can move into event handlers.
#[derive(Clone)]
pub struct AppServices {
    data_dir: PathBuf,
    config: Arc<Mutex<AppConfig>>,
}

impl AppServices {
    /// Initialise services in the platform data directory. Call once at app
    /// startup.
    pub fn init() -> Self {
        Self::with_data_dir(data_dir::data_dir())
    }

    /// Initialise services rooted at `dir`. A missing or malformed config
    /// file yields the defaults.
    pub fn with_data_dir(dir: PathBuf) -> Self {
        let config = AppConfig::load(&dir);
        info!(path = %dir.display(), ?config, "app services initialised");
        Self {
            data_dir: dir,
            config: Arc::new(Mutex::new(config)),
        }
    }

    // -- Config --------------------------------------------------------------

    /// Get a clone of the current config.
    pub fn config(&self) -> AppConfig {
        self.lock_config().clone()
    }

    /// Update and persist the config.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        *self.lock_config() = config.clone();
        config.save(&self.data_dir)
    }

    /// Path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn lock_config(&self) -> MutexGuard<'_, AppConfig> {
        self.config.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desktools_core::{Operation, UnitSystem};

    #[test]
    fn fresh_dir_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let svc = AppServices::with_data_dir(dir.path().to_path_buf());
        assert_eq!(svc.config(), AppConfig::default());
        assert_eq!(svc.data_dir(), dir.path());
    }

    #[test]
    fn saved_config_is_visible_to_clones_and_next_start() {
        let dir = tempfile::tempdir().unwrap();
        let svc = AppServices::with_data_dir(dir.path().to_path_buf());
        let other = svc.clone();

        let config = AppConfig {
            default_unit_system: UnitSystem::Imperial,
            default_operation: Operation::Multiply,
            ..AppConfig::default()
        };
        svc.save_config(&config).unwrap();

        assert_eq!(other.config(), config);
        let restarted = AppServices::with_data_dir(dir.path().to_path_buf());
        assert_eq!(restarted.config(), config);
    }
}
