use serde::{Deserialize, Serialize};

/// Coarse viewport class used by responsive window definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Mobile,
    #[default]
    Desktop,
}

impl ViewportClass {
    /// Containers narrower than `breakpoint` are mobile. An unmeasured
    /// (zero-width) container counts as desktop.
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width > 0.0 && width < breakpoint {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }
}
