//! Clip library, asset discovery, and the playback boundary

pub mod library;
pub mod loader;
pub mod sink;

pub use library::{ClipCategory, ClipLibrary, NamedClip, SelectError};
pub use loader::{load_library, ClipSource, DirectoryClipSource, LoadError};
pub use sink::{NullSink, PlaybackSink};
