//! Trigger orchestrator - the timing-to-stamina state machine
//!
//! Receives discrete Start/End events for the three contact channels,
//! converts elapsed spans into stamina adjustments through the per-event
//! rate table, and dispatches category clips through the playback sink.
//!
//! Every entry point runs the same shape: record its own edge in the
//! timing ledger, compute the elapsed span by the most-recent-neighbor
//! rule, apply the scaled stamina delta, then optionally dispatch a clip.
//! Lip End additionally samples the critical flag and overrides playback
//! with a deep breath when stamina is depleted.

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::{info, warn};

use crate::audio::library::ClipLibrary;
use crate::audio::loader::{load_library, ClipSource, LoadError};
use crate::audio::sink::PlaybackSink;
use crate::clock::Clock;
use crate::core::config::{
    AudioConfig, RateTable, CATEGORY_DEEP_BREATH, CATEGORY_MOUTH, CATEGORY_SLURP, CATEGORY_THROAT,
    DISPATCH_CATEGORIES,
};
use crate::core::types::{TriggerChannel, TriggerEdge};
use crate::stamina::Stamina;
use crate::timing::TimingLedger;

/// Host capabilities probed before construction.
///
/// Mirrors the host-side object graph: an audio source plus one collision
/// trigger per channel must exist or the feature stays disabled.
pub trait HostCapabilities {
    /// True if the host exposes the audio source the engine plays through
    fn has_audio_source(&self) -> bool;
    /// True if the host exposes the collision trigger for `channel`
    fn has_channel(&self, channel: TriggerChannel) -> bool;
}

/// Errors that abort orchestrator setup.
///
/// Setup is fail-fast: any of these means no event bindings were
/// registered and the instance does not operate partially.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("host does not provide the required audio source")]
    MissingAudioSource,

    #[error("host does not provide the required trigger: {0}")]
    MissingChannel(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("clip loading failed: {0}")]
    Load(#[from] LoadError),

    #[error("dispatch category is not configured: {0}")]
    UnknownCategory(String),

    #[error("dispatch category has no clips: {0}")]
    EmptyCategory(String),
}

/// Drives stamina and clip dispatch from contact sensor events.
///
/// One orchestrator per host object. All entry points are invoked
/// synchronously on the host's event dispatch, one at a time; the host
/// guarantees Start-before-End-before-next-Start per channel.
pub struct TriggerOrchestrator<C: Clock, S: PlaybackSink> {
    ledger: TimingLedger,
    stamina: Stamina,
    library: ClipLibrary,
    rates: RateTable,
    clock: C,
    sink: S,
    rng: ChaCha8Rng,
}

impl<C: Clock, S: PlaybackSink> TriggerOrchestrator<C, S> {
    /// Validate the host and configuration, load the voice profile's clip
    /// set, and construct the orchestrator. Any failure leaves nothing
    /// bound.
    pub fn bind(
        host: &impl HostCapabilities,
        config: &AudioConfig,
        source: &mut dyn ClipSource,
        clock: C,
        sink: S,
        seed: u64,
    ) -> Result<Self, SetupError> {
        if !host.has_audio_source() {
            return Err(SetupError::MissingAudioSource);
        }
        for channel in TriggerChannel::ALL {
            if !host.has_channel(channel) {
                return Err(SetupError::MissingChannel(channel.trigger_id()));
            }
        }
        config.validate().map_err(SetupError::InvalidConfig)?;
        let library = load_library(source, &config.voice_profile, &config.categories)?;
        Self::with_library(config, library, clock, sink, seed)
    }

    /// Construct from an already-populated library, for hosts that load
    /// assets themselves.
    pub fn with_library(
        config: &AudioConfig,
        library: ClipLibrary,
        clock: C,
        sink: S,
        seed: u64,
    ) -> Result<Self, SetupError> {
        config.validate().map_err(SetupError::InvalidConfig)?;

        // Every category the dispatch table can reach must be selectable
        for name in DISPATCH_CATEGORIES {
            let category = library
                .category(name)
                .ok_or_else(|| SetupError::UnknownCategory(name.to_string()))?;
            if category.is_empty() {
                return Err(SetupError::EmptyCategory(name.to_string()));
            }
        }

        let startup = clock.now();
        Ok(Self {
            ledger: TimingLedger::new(startup),
            stamina: Stamina::new(&config.stamina),
            library,
            rates: config.rates.clone(),
            clock,
            sink,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    pub fn stamina(&self) -> &Stamina {
        &self.stamina
    }

    pub fn library(&self) -> &ClipLibrary {
        &self.library
    }

    /// Entry point for all six sensor edges
    pub fn handle_event(&mut self, channel: TriggerChannel, edge: TriggerEdge) {
        let now = self.clock.now();
        match (channel, edge) {
            (TriggerChannel::Lip, TriggerEdge::Start) => self.lip_start(now),
            (TriggerChannel::Lip, TriggerEdge::End) => self.lip_end(now),
            (TriggerChannel::Mouth, TriggerEdge::Start) => self.mouth_start(now),
            (TriggerChannel::Mouth, TriggerEdge::End) => self.mouth_end(now),
            (TriggerChannel::Throat, TriggerEdge::Start) => self.throat_start(now),
            (TriggerChannel::Throat, TriggerEdge::End) => self.throat_end(now),
        }
        info!(
            ?channel,
            ?edge,
            stamina = self.stamina.current(),
            critical = self.stamina.critical(),
            "trigger event"
        );
    }

    fn lip_start(&mut self, now: Instant) {
        self.ledger.record_start(TriggerChannel::Lip, now);
        let reference = self.ledger.last_end(TriggerChannel::Lip);
        self.stamina.add(scaled_delta(now, reference, self.rates.lip_start));
    }

    fn lip_end(&mut self, now: Instant) {
        self.ledger.record_end(TriggerChannel::Lip, now);
        let reference = self
            .ledger
            .last_start(TriggerChannel::Lip)
            .max(self.ledger.last_end(TriggerChannel::Mouth));
        self.stamina.add(scaled_delta(now, reference, self.rates.lip_end));

        // Critical is sampled here only, after the adjustment
        if self.stamina.critical() {
            self.stop_then_play(CATEGORY_DEEP_BREATH);
        }
    }

    fn mouth_start(&mut self, now: Instant) {
        self.ledger.record_start(TriggerChannel::Mouth, now);
        let reference = self
            .ledger
            .last_start(TriggerChannel::Lip)
            .max(self.ledger.last_end(TriggerChannel::Mouth));
        self.stamina.add(scaled_delta(now, reference, self.rates.mouth_start));
        self.stop_then_play(CATEGORY_MOUTH);
    }

    fn mouth_end(&mut self, now: Instant) {
        self.ledger.record_end(TriggerChannel::Mouth, now);
        let reference = self
            .ledger
            .last_start(TriggerChannel::Mouth)
            .max(self.ledger.last_end(TriggerChannel::Throat));
        self.stamina.add(scaled_delta(now, reference, self.rates.mouth_end));
        self.stop_then_play(CATEGORY_SLURP);
    }

    fn throat_start(&mut self, now: Instant) {
        self.ledger.record_start(TriggerChannel::Throat, now);
        let reference = self
            .ledger
            .last_start(TriggerChannel::Mouth)
            .max(self.ledger.last_end(TriggerChannel::Throat));
        self.stamina.add(scaled_delta(now, reference, self.rates.throat_start));
        self.stamina.subtract(self.rates.throat_start_penalty);
        self.stop_then_play(CATEGORY_THROAT);
    }

    fn throat_end(&mut self, now: Instant) {
        self.ledger.record_end(TriggerChannel::Throat, now);
        let reference = self.ledger.last_start(TriggerChannel::Throat);
        self.stamina.subtract(scaled_delta(now, reference, self.rates.throat_end));
    }

    fn stop_then_play(&mut self, category: &str) {
        match self.library.select_random(category, &mut self.rng) {
            Ok(clip) => {
                info!(category, clip = %clip.label, "play");
                self.sink.stop();
                self.sink.play_now(clip);
            }
            Err(err) => warn!(category, %err, "skipping playback"),
        }
    }
}

/// Most-recent-neighbor rule: the span since the later of the two reference
/// instants, scaled by the event's rate. `elapsed_ms * rate / 1000`,
/// truncated toward zero. The contribution is proportional to the shorter
/// candidate span so overlap between adjacent channels is not counted
/// twice.
fn scaled_delta(now: Instant, reference: Instant, rate: i64) -> i32 {
    let elapsed_ms = now.saturating_duration_since(reference).as_millis() as i64;
    i32::try_from(elapsed_ms * rate / 1000).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_scaled_delta_truncates_toward_zero() {
        let reference = Instant::now();
        let now = reference + Duration::from_millis(1999);
        // 1999 * 10 / 1000 = 19.99 -> 19
        assert_eq!(scaled_delta(now, reference, 10), 19);
    }

    #[test]
    fn test_scaled_delta_concrete_example() {
        let reference = Instant::now();
        let now = reference + Duration::from_millis(3000);
        assert_eq!(scaled_delta(now, reference, 70), 210);
    }

    #[test]
    fn test_scaled_delta_is_total_for_reversed_instants() {
        let now = Instant::now();
        let reference = now + Duration::from_millis(500);
        assert_eq!(scaled_delta(now, reference, 150), 0);
    }
}
