//! Timing ledger - most recent start/end instant per trigger channel

use std::time::Instant;

use crate::core::types::TriggerChannel;

/// Records the most recent Start and End instant for each channel.
///
/// Instants are overwritten when the matching edge arrives and are never
/// reset; both edges of every channel begin at the ledger's creation
/// instant. All operations are total.
#[derive(Debug, Clone)]
pub struct TimingLedger {
    starts: [Instant; 3],
    ends: [Instant; 3],
}

impl TimingLedger {
    /// Create a ledger with every edge set to `startup`
    pub fn new(startup: Instant) -> Self {
        Self {
            starts: [startup; 3],
            ends: [startup; 3],
        }
    }

    pub fn record_start(&mut self, channel: TriggerChannel, instant: Instant) {
        self.starts[channel.index()] = instant;
    }

    pub fn record_end(&mut self, channel: TriggerChannel, instant: Instant) {
        self.ends[channel.index()] = instant;
    }

    pub fn last_start(&self, channel: TriggerChannel) -> Instant {
        self.starts[channel.index()]
    }

    pub fn last_end(&self, channel: TriggerChannel) -> Instant {
        self.ends[channel.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_initialized_to_startup_instant() {
        let startup = Instant::now();
        let ledger = TimingLedger::new(startup);
        for channel in TriggerChannel::ALL {
            assert_eq!(ledger.last_start(channel), startup);
            assert_eq!(ledger.last_end(channel), startup);
        }
    }

    #[test]
    fn test_record_overwrites_only_own_edge() {
        let startup = Instant::now();
        let mut ledger = TimingLedger::new(startup);
        let later = startup + Duration::from_millis(250);

        ledger.record_start(TriggerChannel::Mouth, later);

        assert_eq!(ledger.last_start(TriggerChannel::Mouth), later);
        assert_eq!(ledger.last_end(TriggerChannel::Mouth), startup);
        assert_eq!(ledger.last_start(TriggerChannel::Lip), startup);
        assert_eq!(ledger.last_start(TriggerChannel::Throat), startup);
    }

    #[test]
    fn test_repeated_records_keep_most_recent() {
        let startup = Instant::now();
        let mut ledger = TimingLedger::new(startup);
        let first = startup + Duration::from_millis(100);
        let second = startup + Duration::from_millis(300);

        ledger.record_end(TriggerChannel::Throat, first);
        ledger.record_end(TriggerChannel::Throat, second);

        assert_eq!(ledger.last_end(TriggerChannel::Throat), second);
    }
}
