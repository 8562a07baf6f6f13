//! Save directory discovery and map file access.
//!
//! Zomboid keeps saves under `<base>/Zomboid/Saves/<mode>/<save>/`,
//! with one `map_<x>_<y>.bin` file per explored area.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Map file naming convention enforced before names reach the matcher.
static MAP_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^map_\d+_\d+\.bin$").expect("valid map file pattern"));

/// Outcome of a map file read attempt.
///
/// An unreadable file is an expected condition (the game may hold a
/// lock, or a save may be mid-write), so the reason travels as data and
/// the scan goes on without it.
#[derive(Debug)]
pub enum MapFileRead {
    Contents(Vec<u8>),
    Unreadable { reason: io::ErrorKind },
}

/// Read a map file whole, tagging failure instead of propagating it.
pub fn read_map_file(path: &Path) -> MapFileRead {
    match fs::read(path) {
        Ok(bytes) => MapFileRead::Contents(bytes),
        Err(e) => {
            debug!("Map file not readable: {} ({})", path.display(), e.kind());
            MapFileRead::Unreadable { reason: e.kind() }
        }
    }
}

/// Locates saves and map files under a Zomboid `Saves` root.
#[derive(Debug, Clone)]
pub struct SaveLocator {
    saves_root: PathBuf,
}

impl SaveLocator {
    /// Use an explicit `Saves` directory.
    pub fn new<P: AsRef<Path>>(saves_root: P) -> Self {
        Self {
            saves_root: saves_root.as_ref().to_path_buf(),
        }
    }

    /// Use the standard `Zomboid/Saves` layout under a base directory
    /// (typically the user's home).
    pub fn from_base<P: AsRef<Path>>(base: P) -> Self {
        Self::new(base.as_ref().join("Zomboid").join("Saves"))
    }

    /// The configured saves root.
    pub fn saves_root(&self) -> &Path {
        &self.saves_root
    }

    /// Save directories under the given mode whose name contains the
    /// filter, case-insensitively. Sorted; a missing mode directory
    /// yields an empty list.
    pub fn save_directories(&self, name_filter: &str, mode: &str) -> Vec<String> {
        let mode_path = self.saves_root.join(mode);
        let Ok(entries) = fs::read_dir(&mode_path) else {
            debug!("Mode directory not readable: {}", mode_path.display());
            return Vec::new();
        };

        let filter_lower = name_filter.to_lowercase();
        let mut dirs: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.to_lowercase().contains(&filter_lower))
            .collect();
        dirs.sort();
        dirs
    }

    /// Full path to a save directory.
    pub fn save_path(&self, mode: &str, save_dir: &str) -> PathBuf {
        self.saves_root.join(mode).join(save_dir)
    }

    /// Map file names in a save directory, sorted. A missing directory
    /// yields an empty list.
    pub fn map_files(&self, save_dir: &Path) -> Vec<String> {
        let Ok(entries) = fs::read_dir(save_dir) else {
            debug!("Save directory not readable: {}", save_dir.display());
            return Vec::new();
        };

        let mut files: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| !entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| MAP_FILE.is_match(name))
            .collect();
        files.sort();
        files
    }
}
