// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware data directory resolution.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "desktools";

/// Return the application data directory, creating it if needed.
pub fn data_dir() -> PathBuf {
    let dir = app_dir_under(&base_dir(
        std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    ));
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!(path = %dir.display(), error = %e, "could not create data directory");
    }
    dir
}

fn app_dir_under(base: &Path) -> PathBuf {
    base.join(APP_DIR)
}

fn base_dir(xdg_data_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    // Try XDG data dir, then fallback to home
    if let Some(xdg) = xdg_data_home.filter(|p| !p.as_os_str().is_empty()) {
        return xdg;
    }
    if let Some(home) = home {
        return home.join(".local").join("share");
    }
    // Last resort
    std::env::temp_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xdg_wins_over_home() {
        let base = base_dir(Some("/xdg".into()), Some("/home/me".into()));
        assert_eq!(app_dir_under(&base), PathBuf::from("/xdg/desktools"));
    }

    #[test]
    fn home_fallback() {
        let base = base_dir(None, Some("/home/me".into()));
        assert_eq!(base, PathBuf::from("/home/me/.local/share"));
    }

    #[test]
    fn empty_xdg_is_ignored() {
        let base = base_dir(Some(PathBuf::new()), Some("/home/me".into()));
        assert_eq!(base, PathBuf::from("/home/me/.local/share"));
    }

    #[test]
    fn temp_dir_last_resort() {
        assert_eq!(base_dir(None, None), std::env::temp_dir());
    }
}
