//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// One of the three independent contact sensors.
///
/// Channels are adjacent in the order Lip - Mouth - Throat; Lip and Throat
/// are not directly coupled. The enum doubles as a fixed-size array index so
/// per-channel state never goes through a runtime name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerChannel {
    Lip,
    Mouth,
    Throat,
}

impl TriggerChannel {
    pub const ALL: [TriggerChannel; 3] = [Self::Lip, Self::Mouth, Self::Throat];

    /// Stable index into per-channel storage
    pub fn index(self) -> usize {
        match self {
            Self::Lip => 0,
            Self::Mouth => 1,
            Self::Throat => 2,
        }
    }

    /// Host-facing collision trigger identifier
    pub fn trigger_id(self) -> &'static str {
        match self {
            Self::Lip => "LipTrigger",
            Self::Mouth => "MouthTrigger",
            Self::Throat => "ThroatTrigger",
        }
    }
}

/// Start or End transition of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerEdge {
    Start,
    End,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_indices_are_distinct() {
        let mut seen = [false; 3];
        for channel in TriggerChannel::ALL {
            assert!(!seen[channel.index()]);
            seen[channel.index()] = true;
        }
    }

    #[test]
    fn test_trigger_ids() {
        assert_eq!(TriggerChannel::Lip.trigger_id(), "LipTrigger");
        assert_eq!(TriggerChannel::Mouth.trigger_id(), "MouthTrigger");
        assert_eq!(TriggerChannel::Throat.trigger_id(), "ThroatTrigger");
    }
}
