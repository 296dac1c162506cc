//! Centralized page and scene tunables with TOML support.
//!
//! Every table uses `#[serde(default)]` so a partial file (e.g. only
//! overriding `[scene]`) works.

mod navigation;
mod reveal;
mod scene;

use std::path::Path;

pub use navigation::NavigationOptions;
pub use reveal::RevealOptions;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};

use crate::error::VitaeError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Header decoration parameters.
    pub scene: SceneOptions,
    /// Section reveal observer parameters.
    pub reveal: RevealOptions,
    /// Navbar and back-to-top scroll thresholds.
    pub navigation: NavigationOptions,
}

impl Options {
    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`VitaeError::OptionsParse`] if the document is not valid
    /// TOML or a field has the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self, VitaeError> {
        toml::from_str(content)
            .map_err(|e| VitaeError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`VitaeError::Io`] if the file cannot be read, or
    /// [`VitaeError::OptionsParse`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, VitaeError> {
        let content = std::fs::read_to_string(path).map_err(VitaeError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`VitaeError::OptionsParse`] on serialization failure or
    /// [`VitaeError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), VitaeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VitaeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VitaeError::Io)?;
        }
        std::fs::write(path, content).map_err(VitaeError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[scene]
opacity = 0.5
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.scene.opacity, 0.5);
        // Everything else should be default
        assert_eq!(opts.scene.radius, 2.0);
        assert_eq!(opts.reveal.threshold, 0.1);
        assert_eq!(opts.navigation.back_to_top_offset, 300.0);
    }

    #[test]
    fn defaults_tumble_faster_around_y() {
        let scene = SceneOptions::default();
        assert!(scene.rotation_y_per_frame > scene.rotation_x_per_frame);
        assert_eq!(scene.height_fraction, 0.4);
    }

    #[test]
    fn root_margin_is_css_pixels() {
        assert_eq!(RevealOptions::default().root_margin(), "0px");
    }

    #[test]
    fn wrong_type_is_a_parse_error() {
        let err = Options::from_toml_str("[scene]\nradius = \"big\"\n")
            .unwrap_err();
        assert!(matches!(err, VitaeError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!(
            "vitae-options-test-{}",
            std::process::id()
        ));
        let path = dir.join("preview.toml");
        let mut opts = Options::default();
        opts.scene.rotation_y_per_frame = 0.01;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(opts, loaded);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
