use serde::{Deserialize, Serialize};

/// Scroll thresholds for the navigation bar and back-to-top control.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavigationOptions {
    /// Scroll offset (px) at and beyond which the back-to-top button shows.
    pub back_to_top_offset: f64,
    /// Scroll offset (px) beyond which the navbar switches to its solid
    /// style.
    pub solid_nav_offset: f64,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            back_to_top_offset: 300.0,
            solid_nav_offset: 50.0,
        }
    }
}
