//! Playback boundary

use tracing::debug;

use crate::audio::library::NamedClip;

/// Host playback transport.
///
/// Both primitives are fire-and-forget and idempotent; the engine never
/// waits on them or inspects a result.
pub trait PlaybackSink {
    fn stop(&mut self);
    fn play_now(&mut self, clip: &NamedClip);
}

/// Sink that drops every request, for setups without an audio device
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl PlaybackSink for NullSink {
    fn stop(&mut self) {}

    fn play_now(&mut self, clip: &NamedClip) {
        debug!(clip = %clip.label, "playback dropped (null sink)");
    }
}
