//! Named clip categories with uniform random selection

use ahash::AHashMap;
use rand::Rng;
use thiserror::Error;

/// Opaque clip handle plus a display label.
///
/// The underlying audio data is owned by the host's asset subsystem; the
/// library only carries the handle it hands back to the playback sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedClip {
    /// Stable handle understood by the playback sink (normalized path or uid)
    pub uid: String,
    /// Human-readable label for logs
    pub label: String,
}

impl NamedClip {
    pub fn new(uid: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            label: label.into(),
        }
    }
}

/// Errors from clip selection
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    /// Category name was never configured
    #[error("unknown clip category: {0}")]
    UnknownCategory(String),
    /// Category exists but holds no clips
    #[error("no clips available in category: {0}")]
    NoClips(String),
}

/// A named, ordered collection of interchangeable clips.
///
/// Membership is append-only during setup and read-only during operation.
#[derive(Debug, Clone, Default)]
pub struct ClipCategory {
    name: String,
    clips: Vec<NamedClip>,
}

impl ClipCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clips: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn push(&mut self, clip: NamedClip) {
        self.clips.push(clip);
    }

    pub fn clips(&self) -> &[NamedClip] {
        &self.clips
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

/// Named collections of audio clips, with the category set fixed at
/// construction. Selection never mutates the collection.
#[derive(Debug, Clone, Default)]
pub struct ClipLibrary {
    categories: AHashMap<String, ClipCategory>,
}

impl ClipLibrary {
    /// Create a library with the given category names, all initially empty
    pub fn new<I, S>(category_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories = category_names
            .into_iter()
            .map(|name| {
                let name = name.into();
                let category = ClipCategory::new(name.clone());
                (name, category)
            })
            .collect();
        Self { categories }
    }

    pub fn category(&self, name: &str) -> Option<&ClipCategory> {
        self.categories.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// Append a clip to an existing category
    pub fn push(&mut self, category: &str, clip: NamedClip) -> Result<(), SelectError> {
        self.categories
            .get_mut(category)
            .ok_or_else(|| SelectError::UnknownCategory(category.to_string()))?
            .push(clip);
        Ok(())
    }

    /// Pick a clip uniformly at random from the named category.
    ///
    /// Empty categories are guarded rather than indexed; selection is a
    /// pure function of the RNG state and the category contents.
    pub fn select_random<R: Rng>(&self, name: &str, rng: &mut R) -> Result<&NamedClip, SelectError> {
        let category = self
            .categories
            .get(name)
            .ok_or_else(|| SelectError::UnknownCategory(name.to_string()))?;
        if category.clips.is_empty() {
            return Err(SelectError::NoClips(name.to_string()));
        }
        let index = rng.gen_range(0..category.clips.len());
        Ok(&category.clips[index])
    }
}
