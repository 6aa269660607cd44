//! Viewer options with TOML preset support.
//!
//! Interaction tuning and display settings are consolidated here. Options
//! serialize to/from TOML so a preset file can be passed to the viewer.

mod display;
mod interaction;

use std::path::Path;

pub use display::{responsive_scale, DisplayOptions};
pub use interaction::{CaptureRegion, InteractionOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GyreError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[interaction]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// How input turns into motion.
    pub interaction: InteractionOptions,
    /// Scene appearance and frame pacing.
    pub display: DisplayOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// The JSON Schema as a pretty-printed string, for options panels.
    ///
    /// # Errors
    ///
    /// Returns [`GyreError::OptionsParse`] if serialization fails.
    pub fn json_schema_string() -> Result<String, GyreError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| GyreError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GyreError::Io`] if the file cannot be read, or
    /// [`GyreError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, GyreError> {
        let content = std::fs::read_to_string(path).map_err(GyreError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GyreError::OptionsParse`] on invalid TOML.
    pub fn from_toml(content: &str) -> Result<Self, GyreError> {
        toml::from_str(content)
            .map_err(|e| GyreError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`GyreError::Io`] on write failure.
    pub fn save(&self, path: &Path) -> Result<(), GyreError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GyreError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GyreError::Io)?;
        }
        std::fs::write(path, content).map_err(GyreError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::EaseMode;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[interaction]
spin_speed = 1.5
ease_mode = "time_normalized"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.interaction.spin_speed, 1.5);
        assert_eq!(opts.interaction.ease_mode, EaseMode::TimeNormalized);
        // Everything else should be default
        assert_eq!(opts.interaction.scroll_sensitivity, 0.015);
        assert_eq!(opts.display, DisplayOptions::default());
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[interaction\nspin_speed = ").unwrap_err();
        assert!(matches!(err, GyreError::OptionsParse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err =
            Options::load(Path::new("/nonexistent/gyre/options.toml"))
                .unwrap_err();
        assert!(matches!(err, GyreError::Io(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("gyre-options-{}", std::process::id()));
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.display.camera_distance = 42.0;
        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("interaction"));
        assert!(props.contains_key("display"));

        let interaction = &props["interaction"]["properties"];
        assert!(interaction.get("spin_speed").is_some());
        assert!(interaction.get("ease_mode").is_some());
        assert!(interaction.get("initial_spin_ease").is_none());

        let display = &props["display"]["properties"];
        assert!(display.get("fovy").is_some());
        assert!(display.get("background").is_none());
    }

    #[test]
    fn schema_string_is_valid_json() {
        let text = Options::json_schema_string().unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["title"], "Options");
    }
}
