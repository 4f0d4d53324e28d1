//! Tolerant decoding of persisted settings
//!
//! Stored settings may come from older versions or hand-edited files. Each
//! field is checked on its own and replaced by the default when it is missing
//! or has the wrong shape, so a single bad field never discards the rest.

use super::{Mode, OutputTab, Settings, Toggles};
use serde_json::Value;
use tracing::debug;

/// Build valid [`Settings`] from arbitrary JSON.
///
/// Fallbacks come from [`Settings::default`], including the toggles: an
/// invalid toggle takes the default-mode value, not the stored mode's value.
pub fn sanitize_settings(raw: Option<&Value>) -> Settings {
    let defaults = Settings::default();
    let Some(Value::Object(map)) = raw else {
        if raw.is_some() {
            debug!("Stored settings are not an object, using defaults");
        }
        return defaults;
    };

    let mode = map
        .get("mode")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<Mode>().ok())
        .unwrap_or(defaults.mode);

    let output_tab = map
        .get("outputTab")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<OutputTab>().ok())
        .unwrap_or(defaults.output_tab);

    let toggles = map.get("toggles");
    let flag = |name: &str, fallback: bool| {
        toggles
            .and_then(|t| t.get(name))
            .and_then(Value::as_bool)
            .unwrap_or(fallback)
    };

    Settings {
        mode,
        output_tab,
        toggles: Toggles {
            assumptions: flag("assumptions", defaults.toggles.assumptions),
            questions: flag("questions", defaults.toggles.questions),
            acceptance: flag("acceptance", defaults.toggles.acceptance),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_settings_use_defaults() {
        assert_eq!(sanitize_settings(None), Settings::default());
        assert_eq!(sanitize_settings(Some(&json!(null))), Settings::default());
        assert_eq!(sanitize_settings(Some(&json!([1, 2]))), Settings::default());
    }

    #[test]
    fn test_valid_settings_round_trip() {
        let settings = Settings::for_mode(Mode::Hard);
        let value = serde_json::to_value(settings).unwrap();
        assert_eq!(sanitize_settings(Some(&value)), settings);
    }

    #[test]
    fn test_invalid_fields_fall_back_individually() {
        let value = json!({
            "mode": "turbo",
            "outputTab": "pack",
            "toggles": { "assumptions": "yes", "questions": true }
        });
        let settings = sanitize_settings(Some(&value));
        assert_eq!(settings.mode, Mode::Easy);
        assert_eq!(settings.output_tab, OutputTab::Pack);
        assert!(!settings.toggles.assumptions);
        assert!(settings.toggles.questions);
        assert!(!settings.toggles.acceptance);
    }
}
