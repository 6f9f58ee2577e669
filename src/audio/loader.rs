//! Directory-based clip discovery
//!
//! Clip sets live on disk as `<root>/<profile>/<category>/*`. Discovery is
//! behind the `ClipSource` trait so the engine core never performs I/O
//! itself and tests can substitute canned sources.

use std::fs;
use std::path::{Path, PathBuf};

use ahash::AHashMap;
use thiserror::Error;
use tracing::debug;

use crate::audio::library::{ClipLibrary, NamedClip};

/// Errors that can occur while discovering clips
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Configured sounds root is not a directory
    #[error("clip root does not exist: {0}")]
    MissingRoot(PathBuf),
    /// A category name outside the library's configured set
    #[error("unknown clip category: {0}")]
    UnknownCategory(String),
}

/// Enumerates the clips available for a voice profile and category
pub trait ClipSource {
    fn clips_for(&mut self, profile: &str, category: &str) -> Result<Vec<NamedClip>, LoadError>;
}

/// Scans a sounds directory for clips, reusing handles already seen.
///
/// A clip that appears more than once (or is requested again) resolves to
/// the same handle instead of being registered twice.
#[derive(Debug)]
pub struct DirectoryClipSource {
    root: PathBuf,
    cache: AHashMap<String, NamedClip>,
}

impl DirectoryClipSource {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(LoadError::MissingRoot(root));
        }
        Ok(Self {
            root,
            cache: AHashMap::new(),
        })
    }

    fn clip_for_path(&mut self, path: &Path) -> NamedClip {
        let uid = path.to_string_lossy().to_string();
        if let Some(existing) = self.cache.get(&uid) {
            return existing.clone();
        }
        let label = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| uid.clone());
        let clip = NamedClip::new(uid.clone(), label);
        self.cache.insert(uid, clip.clone());
        clip
    }
}

impl ClipSource for DirectoryClipSource {
    fn clips_for(&mut self, profile: &str, category: &str) -> Result<Vec<NamedClip>, LoadError> {
        let dir = self.root.join(profile).join(category);
        if !dir.is_dir() {
            debug!(category, ?dir, "no clip directory, category stays empty");
            return Ok(Vec::new());
        }
        let mut paths: Vec<PathBuf> = fs::read_dir(&dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        paths.sort();
        Ok(paths.iter().map(|path| self.clip_for_path(path)).collect())
    }
}

/// Build a clip library for `profile` from the configured category names
pub fn load_library(
    source: &mut dyn ClipSource,
    profile: &str,
    categories: &[String],
) -> Result<ClipLibrary, LoadError> {
    let mut library = ClipLibrary::new(categories.iter().cloned());
    for name in categories {
        let clips = source.clips_for(profile, name)?;
        debug!(category = %name, count = clips.len(), "loaded clips");
        for clip in clips {
            library
                .push(name, clip)
                .map_err(|_| LoadError::UnknownCategory(name.clone()))?;
        }
    }
    Ok(library)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    fn sounds_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let throat = dir.path().join("Test Profile").join("Throat");
        fs::create_dir_all(&throat).unwrap();
        touch(&throat.join("b.wav"));
        touch(&throat.join("a.wav"));
        dir
    }

    #[test]
    fn test_missing_root_fails() {
        let err = DirectoryClipSource::new("/definitely/not/here").unwrap_err();
        assert!(matches!(err, LoadError::MissingRoot(_)));
    }

    #[test]
    fn test_scans_sorted_files() {
        let dir = sounds_dir();
        let mut source = DirectoryClipSource::new(dir.path()).unwrap();
        let clips = source.clips_for("Test Profile", "Throat").unwrap();
        let labels: Vec<_> = clips.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["a", "b"]);
    }

    #[test]
    fn test_missing_category_dir_is_empty() {
        let dir = sounds_dir();
        let mut source = DirectoryClipSource::new(dir.path()).unwrap();
        assert!(source.clips_for("Test Profile", "Slurp").unwrap().is_empty());
    }

    #[test]
    fn test_rescan_reuses_handles() {
        let dir = sounds_dir();
        let mut source = DirectoryClipSource::new(dir.path()).unwrap();
        let first = source.clips_for("Test Profile", "Throat").unwrap();
        let second = source.clips_for("Test Profile", "Throat").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_load_library_populates_configured_categories() {
        let dir = sounds_dir();
        let mut source = DirectoryClipSource::new(dir.path()).unwrap();
        let categories = vec!["Throat".to_string(), "Slurp".to_string()];
        let library = load_library(&mut source, "Test Profile", &categories).unwrap();
        assert_eq!(library.category("Throat").unwrap().len(), 2);
        assert!(library.category("Slurp").unwrap().is_empty());
    }
}
