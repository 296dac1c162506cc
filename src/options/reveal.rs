use serde::{Deserialize, Serialize};

/// Intersection settings for the section reveal animations.
///
/// The observer root is always the viewport.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealOptions {
    /// Fraction of a section's area that must be inside the viewport for it
    /// to count as visible.
    pub threshold: f64,
    /// Root margin in pixels, applied on all four sides.
    pub root_margin_px: i32,
}

impl RevealOptions {
    /// CSS `rootMargin` string for the configured margin.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("{}px", self.root_margin_px)
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin_px: 0,
        }
    }
}
