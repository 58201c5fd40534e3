use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::CurationFlags;

const FAVORITES_FILE: &str = "favorites.json";
const HIDDEN_FILE: &str = "hidden.json";

/// Durable local favorite/hidden id sets (persisted as two JSON arrays).
///
/// Only consulted for correctness in fallback mode; in full-API mode the
/// server's embedded flags win and this may hold stale state from an earlier
/// offline session.
pub struct CurationOverlay {
    dir: PathBuf,
    favorites: HashSet<String>,
    hidden: HashSet<String>,
}

impl CurationOverlay {
    /// Load from the data directory. Missing or unparseable files read as
    /// empty sets - a corrupt overlay must never fail the session.
    pub fn load(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            favorites: Self::load_set(&dir.join(FAVORITES_FILE)),
            hidden: Self::load_set(&dir.join(HIDDEN_FILE)),
        }
    }

    fn load_set(path: &Path) -> HashSet<String> {
        let Ok(contents) = fs::read_to_string(path) else {
            return HashSet::new();
        };
        match serde_json::from_str::<Vec<String>>(&contents) {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                tracing::warn!("ignoring corrupt overlay file {}: {}", path.display(), e);
                HashSet::new()
            }
        }
    }

    /// Write both sets out whole. Write-through: called on every
    /// fallback-mode toggle so a crash loses at most the in-flight one.
    fn save(&self) {
        Self::save_set(&self.dir.join(FAVORITES_FILE), &self.favorites);
        Self::save_set(&self.dir.join(HIDDEN_FILE), &self.hidden);
    }

    fn save_set(path: &Path, set: &HashSet<String>) {
        let mut ids: Vec<&String> = set.iter().collect();
        ids.sort();
        match serde_json::to_string_pretty(&ids) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    tracing::warn!("failed to persist overlay {}: {}", path.display(), e);
                }
            }
            Err(e) => tracing::warn!("failed to encode overlay: {}", e),
        }
    }

    pub fn flags_for(&self, id: &str) -> CurationFlags {
        CurationFlags {
            is_favorite: self.favorites.contains(id),
            is_hidden: self.hidden.contains(id),
        }
        .normalized()
    }

    /// Record the flags for one id and persist immediately.
    pub fn set(&mut self, id: &str, flags: CurationFlags) {
        let flags = flags.normalized();
        if flags.is_favorite {
            self.favorites.insert(id.to_string());
        } else {
            self.favorites.remove(id);
        }
        if flags.is_hidden {
            self.hidden.insert(id.to_string());
        } else {
            self.hidden.remove(id);
        }
        self.save();
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty() && self.hidden.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_first_run_is_empty() {
        let dir = tempdir().unwrap();
        let overlay = CurationOverlay::load(dir.path());
        assert!(overlay.is_empty());
        assert_eq!(overlay.flags_for("1"), CurationFlags::default());
    }

    #[test]
    fn test_roundtrip() {
        let dir = tempdir().unwrap();
        let mut overlay = CurationOverlay::load(dir.path());
        overlay.set(
            "1",
            CurationFlags {
                is_favorite: true,
                is_hidden: false,
            },
        );
        overlay.set(
            "2",
            CurationFlags {
                is_favorite: false,
                is_hidden: true,
            },
        );

        let reloaded = CurationOverlay::load(dir.path());
        assert!(reloaded.flags_for("1").is_favorite);
        assert!(reloaded.flags_for("2").is_hidden);
        assert_eq!(reloaded.flags_for("3"), CurationFlags::default());
    }

    #[test]
    fn test_corrupt_files_read_as_empty() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(FAVORITES_FILE), "{not json").unwrap();
        std::fs::write(dir.path().join(HIDDEN_FILE), "42").unwrap();

        let overlay = CurationOverlay::load(dir.path());
        assert!(overlay.is_empty());
    }

    #[test]
    fn test_hidden_entry_never_reports_favorite() {
        let dir = tempdir().unwrap();
        // Hand-write contradictory files: the same id in both sets.
        std::fs::write(dir.path().join(FAVORITES_FILE), r#"["9"]"#).unwrap();
        std::fs::write(dir.path().join(HIDDEN_FILE), r#"["9"]"#).unwrap();

        let overlay = CurationOverlay::load(dir.path());
        let flags = overlay.flags_for("9");
        assert!(flags.is_hidden);
        assert!(!flags.is_favorite);
    }

    #[test]
    fn test_unset_removes_from_disk() {
        let dir = tempdir().unwrap();
        let mut overlay = CurationOverlay::load(dir.path());
        overlay.set(
            "1",
            CurationFlags {
                is_favorite: true,
                is_hidden: false,
            },
        );
        overlay.set("1", CurationFlags::default());

        let reloaded = CurationOverlay::load(dir.path());
        assert!(reloaded.is_empty());
    }
}
