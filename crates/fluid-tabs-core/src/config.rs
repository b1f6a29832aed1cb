use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabsConfig {
    /// Minimum ratio distance from the active tab before a scroll-driven switch (0.0-1.0]
    #[serde(default = "default_switch_threshold")]
    pub switch_threshold: f64,
    /// Scroll axis of the panel surface
    #[serde(default)]
    pub axis: Axis,
    /// Animated seek settings (tab click scroll)
    #[serde(default)]
    pub seek: SeekConfig,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            switch_threshold: default_switch_threshold(),
            axis: Axis::default(),
            seek: SeekConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeekConfig {
    /// Lower bound for the seek animation duration
    #[serde(default = "default_min_duration")]
    pub min_duration_ms: u64,
    /// Upper bound for the seek animation duration
    #[serde(default = "default_max_duration")]
    pub max_duration_ms: u64,
    /// Milliseconds spent per 1000 units of travel before clamping
    #[serde(default = "default_speed")]
    pub speed_ms_per_1000px: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Write the exact target offset again after snapping is restored
    #[serde(default = "default_true")]
    pub reassert_offset: bool,
    /// Treat user interaction with the surface as an interruption
    #[serde(default = "default_true")]
    pub cancel_on_user_action: bool,
}

impl Default for SeekConfig {
    fn default() -> Self {
        Self {
            min_duration_ms: default_min_duration(),
            max_duration_ms: default_max_duration(),
            speed_ms_per_1000px: default_speed(),
            easing: EasingType::default(),
            reassert_offset: default_true(),
            cancel_on_user_action: default_true(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump to the end on the last frame
    None,
    Linear,
    /// Cubic ease-out
    Cubic,
    /// Quintic ease-out
    Quintic,
    /// Exponential ease-out
    EaseOut,
    #[default]
    EaseInOutCubic,
}

fn default_switch_threshold() -> f64 {
    0.5
}

fn default_min_duration() -> u64 {
    500
}

fn default_max_duration() -> u64 {
    800
}

fn default_speed() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

impl TabsConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file; a missing file is an error
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn validate(&self) -> crate::Result<()> {
        if !(self.switch_threshold > 0.0 && self.switch_threshold <= 1.0) {
            return Err(crate::Error::Config(format!(
                "switch_threshold must be in (0, 1], got {}",
                self.switch_threshold
            )));
        }
        if self.seek.min_duration_ms > self.seek.max_duration_ms {
            return Err(crate::Error::Config(format!(
                "seek.min_duration_ms ({}) exceeds seek.max_duration_ms ({})",
                self.seek.min_duration_ms, self.seek.max_duration_ms
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TabsConfig::default();
        assert_eq!(config.switch_threshold, 0.5);
        assert_eq!(config.axis, Axis::Horizontal);
        assert_eq!(config.seek.min_duration_ms, 500);
        assert_eq!(config.seek.max_duration_ms, 800);
        assert_eq!(config.seek.easing, EasingType::EaseInOutCubic);
        assert!(config.seek.reassert_offset);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = TabsConfig::from_toml_str(
            r#"
            switch_threshold = 0.7
            axis = "vertical"

            [seek]
            easing = "linear"
            "#,
        )
        .unwrap();

        assert_eq!(config.switch_threshold, 0.7);
        assert_eq!(config.axis, Axis::Vertical);
        assert_eq!(config.seek.easing, EasingType::Linear);
        assert_eq!(config.seek.min_duration_ms, 500);
        assert!(config.seek.cancel_on_user_action);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = TabsConfig::default();
        config.seek.reassert_offset = false;
        let text = config.to_toml_string().unwrap();
        assert_eq!(TabsConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_threshold() {
        assert!(TabsConfig::from_toml_str("switch_threshold = 0.0").is_err());
        assert!(TabsConfig::from_toml_str("switch_threshold = 1.5").is_err());
        assert!(TabsConfig::from_toml_str("switch_threshold = 1.0").is_ok());
    }

    #[test]
    fn test_rejects_inverted_durations() {
        let result = TabsConfig::from_toml_str(
            r#"
            [seek]
            min_duration_ms = 900
            max_duration_ms = 100
            "#,
        );
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = TabsConfig::load(Path::new("/nonexistent/fluid-tabs.toml"));
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
