//! Saturating stamina counter

use crate::core::config::StaminaConfig;

/// Exertion counter saturating at fixed `[min, max]` bounds.
///
/// `add` and `subtract` are total over any `i32` amount: saturating
/// arithmetic plus a clamp to the configured range, so overflow can never
/// leave the counter outside its bounds. The critical flag is recomputed
/// after every mutation and holds `current <= critical_threshold`.
#[derive(Debug, Clone)]
pub struct Stamina {
    current: i32,
    min: i32,
    max: i32,
    critical_threshold: i32,
    critical: bool,
}

impl Stamina {
    pub fn new(config: &StaminaConfig) -> Self {
        let mut stamina = Self {
            current: config.initial,
            min: config.min,
            max: config.max,
            critical_threshold: config.critical_threshold,
            critical: false,
        };
        stamina.update_critical();
        stamina
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    /// True while `current <= critical_threshold`
    pub fn critical(&self) -> bool {
        self.critical
    }

    /// Add `amount`, saturating at the upper bound
    pub fn add(&mut self, amount: i32) {
        self.current = self.current.saturating_add(amount).clamp(self.min, self.max);
        self.update_critical();
    }

    /// Subtract `amount`, saturating at the lower bound
    pub fn subtract(&mut self, amount: i32) {
        self.current = self.current.saturating_sub(amount).clamp(self.min, self.max);
        self.update_critical();
    }

    fn update_critical(&mut self) {
        self.critical = self.current <= self.critical_threshold;
    }
}
