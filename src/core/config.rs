//! Engine configuration with documented constants
//!
//! All tuning values are collected here. Everything is fixed at
//! construction and immutable afterwards.

use serde::{Deserialize, Serialize};

/// Clip category dispatched on Mouth Start.
pub const CATEGORY_MOUTH: &str = "Mouth";
/// Clip category dispatched on Mouth End.
pub const CATEGORY_SLURP: &str = "Slurp";
/// Clip category dispatched on Throat Start.
pub const CATEGORY_THROAT: &str = "Throat";
/// Clip category dispatched on Lip End while stamina is critical.
pub const CATEGORY_DEEP_BREATH: &str = "BreatheOutsideDeep";

/// Categories the orchestrator selects from at runtime. Setup fails if any
/// of these is missing or empty.
pub const DISPATCH_CATEGORIES: [&str; 4] = [
    CATEGORY_MOUTH,
    CATEGORY_SLURP,
    CATEGORY_THROAT,
    CATEGORY_DEEP_BREATH,
];

/// Stamina counter bounds and thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StaminaConfig {
    /// Lower saturation bound
    pub min: i32,
    /// Upper saturation bound
    pub max: i32,
    /// Value the counter starts at
    pub initial: i32,
    /// At or below this value the counter reports critical
    pub critical_threshold: i32,
}

impl Default for StaminaConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 1000,
            initial: 1000,
            critical_threshold: 600,
        }
    }
}

/// Per-event stamina rates
///
/// Each event scales its elapsed span: the stamina delta is
/// `elapsed_ms * rate / 1000`, truncated toward zero. All events add
/// except Throat End, which subtracts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RateTable {
    /// Lip Start, measured since Lip's own last End
    pub lip_start: i64,
    /// Lip End, measured since the later of Lip's last Start and Mouth's last End
    pub lip_end: i64,
    /// Mouth Start, measured since the later of Lip's last Start and Mouth's own last End
    pub mouth_start: i64,
    /// Mouth End, measured since the later of Mouth's own last Start and Throat's last End
    pub mouth_end: i64,
    /// Throat Start, measured since the later of Mouth's last Start and Throat's own last End
    pub throat_start: i64,
    /// Throat End (subtracted), measured since Throat's own last Start
    pub throat_end: i64,
    /// Flat cost charged on every Throat Start, after the timing addition
    pub throat_start_penalty: i32,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            lip_start: 100,
            lip_end: 70,
            mouth_start: 70,
            mouth_end: 10,
            throat_start: 10,
            throat_end: 150,
            throat_start_penalty: 20,
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub stamina: StaminaConfig,
    pub rates: RateTable,
    /// Voice profile selecting which on-disk clip set to load
    pub voice_profile: String,
    /// Category names the clip library is built with
    pub categories: Vec<String>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            stamina: StaminaConfig::default(),
            rates: RateTable::default(),
            voice_profile: "Katrina Jade".to_string(),
            categories: [
                "Throat",
                "Mouth",
                "Slurp",
                "LipSmack",
                "BreatheMouth",
                "BreatheOutside",
                "BreatheOutsideDeep",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl AudioConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.stamina.min >= self.stamina.max {
            return Err(format!(
                "stamina.min ({}) must be < stamina.max ({})",
                self.stamina.min, self.stamina.max
            ));
        }

        if self.stamina.initial < self.stamina.min || self.stamina.initial > self.stamina.max {
            return Err(format!(
                "stamina.initial ({}) must be within [{}, {}]",
                self.stamina.initial, self.stamina.min, self.stamina.max
            ));
        }

        if self.stamina.critical_threshold >= self.stamina.max {
            return Err(format!(
                "stamina.critical_threshold ({}) must be < stamina.max ({})",
                self.stamina.critical_threshold, self.stamina.max
            ));
        }

        for name in DISPATCH_CATEGORIES {
            if !self.categories.iter().any(|c| c == name) {
                return Err(format!("dispatch category missing from category list: {name}"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AudioConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let mut config = AudioConfig::default();
        config.stamina.min = 1000;
        config.stamina.max = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_critical_threshold_at_max_rejected() {
        let mut config = AudioConfig::default();
        config.stamina.critical_threshold = config.stamina.max;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_initial_out_of_range_rejected() {
        let mut config = AudioConfig::default();
        config.stamina.initial = config.stamina.max + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_dispatch_category_rejected() {
        let mut config = AudioConfig::default();
        config.categories.retain(|c| c != CATEGORY_SLURP);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml_str_partial() {
        let config = AudioConfig::from_toml_str(
            r#"
            voice_profile = "Test Profile"

            [stamina]
            initial = 800
            "#,
        )
        .unwrap();
        assert_eq!(config.voice_profile, "Test Profile");
        assert_eq!(config.stamina.initial, 800);
        // Untouched fields keep their defaults
        assert_eq!(config.stamina.max, 1000);
        assert_eq!(config.rates.lip_start, 100);
    }
}
