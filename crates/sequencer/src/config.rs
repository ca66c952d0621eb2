use serde::{Deserialize, Serialize};

use crate::region::{EffectSpec, Region};

pub const CONFIG_VERSION: &str = "1.0";

/// Static startup configuration for the sequencer.
///
/// Loaded once; regions and effects are not reconfigurable at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SequencerConfig {
    #[serde(default = "default_version")]
    pub version: String,
    /// Visible fraction of a region required to count as in view.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Height of fixed navigation chrome, subtracted from the viewport top.
    #[serde(default)]
    pub top_inset: f64,
    /// Scroll offset past which the nav condenses.
    #[serde(default = "default_nav_condense_at")]
    pub nav_condense_at: f64,
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
    pub regions: Vec<RegionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionConfig {
    pub id: String,
    #[serde(default)]
    pub effects: Vec<EffectConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EffectConfig {
    pub id: String,
    #[serde(default)]
    pub delay_ms: u64,
    #[serde(default)]
    pub repeat: bool,
    #[serde(default)]
    pub replay_upward: bool,
}

fn default_version() -> String {
    CONFIG_VERSION.to_string()
}

fn default_threshold() -> f64 {
    crate::observer::DEFAULT_THRESHOLD
}

fn default_nav_condense_at() -> f64 {
    crate::nav::DEFAULT_CONDENSE_AT
}

fn default_resize_debounce_ms() -> u64 {
    250
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    UnsupportedVersion(String),
    DuplicateRegion(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "config parse error: {msg}"),
            ConfigError::UnsupportedVersion(v) => write!(f, "unsupported config version: {v}"),
            ConfigError::DuplicateRegion(id) => write!(f, "duplicate region id: {id}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl SequencerConfig {
    pub fn new(regions: Vec<RegionConfig>) -> Self {
        Self {
            version: default_version(),
            threshold: default_threshold(),
            top_inset: 0.0,
            nav_condense_at: default_nav_condense_at(),
            resize_debounce_ms: default_resize_debounce_ms(),
            regions,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SequencerConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(self.version.clone()));
        }
        for (i, region) in self.regions.iter().enumerate() {
            if self.regions[..i].iter().any(|r| r.id == region.id) {
                return Err(ConfigError::DuplicateRegion(region.id.clone()));
            }
        }
        Ok(())
    }
}

impl RegionConfig {
    pub fn new(id: impl Into<String>, effects: Vec<EffectConfig>) -> Self {
        Self {
            id: id.into(),
            effects,
        }
    }

    pub fn to_region(&self) -> Region {
        let effects = self
            .effects
            .iter()
            .map(|e| {
                let mut spec = EffectSpec::new(e.id.clone(), e.delay_ms);
                if e.repeat {
                    spec = spec.repeatable();
                }
                if e.replay_upward {
                    spec = spec.replay_upward();
                }
                spec
            })
            .collect();
        Region::new(self.id.clone(), effects)
    }
}

impl EffectConfig {
    pub fn new(id: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            id: id.into(),
            delay_ms,
            repeat: false,
            replay_upward: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SequencerConfig};
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_applied() {
        let config = SequencerConfig::from_json(
            r#"{
                "regions": [
                    { "id": "colonies", "effects": [ { "id": "init-colony-chart" } ] }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.version, "1.0");
        assert_eq!(config.threshold, 0.12);
        assert_eq!(config.top_inset, 0.0);
        assert_eq!(config.resize_debounce_ms, 250);
        let effect = &config.regions[0].effects[0];
        assert_eq!(effect.delay_ms, 0);
        assert!(!effect.repeat);
        assert!(!effect.replay_upward);
    }

    #[test]
    fn round_trips_through_json() {
        let config = SequencerConfig::from_json(
            r#"{
                "threshold": 0.15,
                "top_inset": 64.0,
                "regions": [
                    {
                        "id": "production",
                        "effects": [
                            { "id": "init-honey-chart" },
                            { "id": "init-hexagon-grid", "delay_ms": 500 }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let reparsed = SequencerConfig::from_json(&json).unwrap();
        assert_eq!(config, reparsed);
    }

    #[test]
    fn rejects_unknown_versions() {
        let err = SequencerConfig::from_json(r#"{ "version": "9.9", "regions": [] }"#).unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedVersion("9.9".to_string()));
    }

    #[test]
    fn rejects_duplicate_region_ids() {
        let err = SequencerConfig::from_json(
            r#"{ "regions": [ { "id": "hero" }, { "id": "hero" } ] }"#,
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateRegion("hero".to_string()));
    }

    #[test]
    fn to_region_carries_flags() {
        let config = SequencerConfig::from_json(
            r#"{
                "regions": [
                    {
                        "id": "overview",
                        "effects": [
                            { "id": "pulse", "repeat": true, "replay_upward": true }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        let region = config.regions[0].to_region();
        assert_eq!(region.id.as_str(), "overview");
        assert!(region.effects[0].repeat);
        assert!(region.effects[0].replay_upward);
    }
}
