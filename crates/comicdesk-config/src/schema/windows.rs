//! Window manager sizing configuration.

use serde::{Deserialize, Serialize};

/// Size limits and defaults applied by the window store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowsConfig {
    /// Smallest width any window may have, in pixels (valid range: 100-4000).
    pub min_width: f64,
    /// Smallest height any window may have, in pixels (valid range: 100-4000).
    pub min_height: f64,
    /// Width used when a window does not specify one.
    pub default_width: f64,
    /// Height used when a window does not specify one.
    pub default_height: f64,
    /// Container widths below this are treated as a mobile viewport.
    pub mobile_breakpoint: f64,
}

impl Default for WindowsConfig {
    fn default() -> Self {
        Self {
            min_width: 320.0,
            min_height: 220.0,
            default_width: 720.0,
            default_height: 480.0,
            mobile_breakpoint: 768.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_config_defaults() {
        let config = WindowsConfig::default();
        assert!((config.min_width - 320.0).abs() < f64::EPSILON);
        assert!((config.min_height - 220.0).abs() < f64::EPSILON);
        assert!((config.default_width - 720.0).abs() < f64::EPSILON);
        assert!((config.default_height - 480.0).abs() < f64::EPSILON);
        assert!((config.mobile_breakpoint - 768.0).abs() < f64::EPSILON);
    }

    #[test]
    fn windows_config_partial_toml() {
        let toml_str = r#"
min_height = 180
mobile_breakpoint = 600.5
"#;
        let config: WindowsConfig = toml::from_str(toml_str).unwrap();
        assert!((config.min_height - 180.0).abs() < f64::EPSILON);
        assert!((config.mobile_breakpoint - 600.5).abs() < f64::EPSILON);
        // Defaults preserved
        assert!((config.min_width - 320.0).abs() < f64::EPSILON);
    }
}
