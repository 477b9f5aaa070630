#![forbid(unsafe_code)]

//! The `portfolio_customization` profile field.
//!
//! Layout settings are stored on the profile as a JSON *string*:
//!
//! ```text
//! {"gridColumns":3,"gridGap":4.0,"gridRadius":0.0,"layoutMode":"masonry",
//!  "gridAspectRatio":"4x5","theme":"default"}
//! ```
//!
//! Decoding is lenient: missing keys take their defaults, unknown keys are
//! ignored, and an unrecognized mode or aspect tag falls back to the default.
//! Decoded settings are validated before they are returned.

use std::fmt;

use serde::{Deserialize, Serialize};
use webstar_layout::{AspectTag, LayoutMode, LayoutSettings, SettingsError};

/// Profile field holding the serialized settings.
pub const PROFILE_FIELD: &str = "portfolio_customization";

/// Failure to read or write the customization blob.
#[derive(Debug)]
pub enum CustomizationError {
    Json(serde_json::Error),
    Invalid(SettingsError),
}

impl fmt::Display for CustomizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "customization is not valid JSON: {err}"),
            Self::Invalid(err) => write!(f, "customization rejected: {err}"),
        }
    }
}

impl std::error::Error for CustomizationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for CustomizationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<SettingsError> for CustomizationError {
    fn from(err: SettingsError) -> Self {
        Self::Invalid(err)
    }
}

/// Wire shape of the blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomizationJson {
    pub grid_columns: u16,
    pub grid_gap: f64,
    pub grid_radius: f64,
    pub layout_mode: String,
    pub grid_aspect_ratio: String,
    pub theme: String,
}

impl Default for CustomizationJson {
    fn default() -> Self {
        Self::from(&LayoutSettings::default())
    }
}

impl From<&LayoutSettings> for CustomizationJson {
    fn from(settings: &LayoutSettings) -> Self {
        Self {
            grid_columns: settings.columns,
            grid_gap: settings.gap_px,
            grid_radius: settings.radius_px,
            layout_mode: settings.mode.as_str().to_string(),
            grid_aspect_ratio: settings.global_aspect.as_str().to_string(),
            theme: settings.theme.clone(),
        }
    }
}

impl From<CustomizationJson> for LayoutSettings {
    fn from(json: CustomizationJson) -> Self {
        let mode = LayoutMode::parse(&json.layout_mode).unwrap_or_else(|| {
            tracing::debug!(value = %json.layout_mode, "unknown layout mode; using default");
            LayoutMode::default()
        });
        let aspect = AspectTag::parse(&json.grid_aspect_ratio).unwrap_or_else(|| {
            tracing::debug!(value = %json.grid_aspect_ratio, "unknown aspect tag; using default");
            AspectTag::default()
        });
        LayoutSettings {
            columns: json.grid_columns,
            gap_px: json.grid_gap,
            radius_px: json.grid_radius,
            mode,
            global_aspect: aspect,
            theme: json.theme,
        }
    }
}

/// Serialize settings into the profile field's string value.
pub fn to_json(settings: &LayoutSettings) -> Result<String, CustomizationError> {
    Ok(serde_json::to_string(&CustomizationJson::from(settings))?)
}

/// Parse and validate the profile field's string value.
pub fn from_json(s: &str) -> Result<LayoutSettings, CustomizationError> {
    let json: CustomizationJson = serde_json::from_str(s)?;
    let settings = LayoutSettings::from(json);
    settings.validate()?;
    Ok(settings)
}

/// Settings for a profile whose field may be unset or blank.
pub fn from_profile_field(value: Option<&str>) -> Result<LayoutSettings, CustomizationError> {
    match value.map(str::trim) {
        None | Some("") => Ok(LayoutSettings::default()),
        Some(s) => from_json(s),
    }
}

/// Body of the profile update that stores the settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomizationUpdate {
    pub portfolio_customization: String,
}

impl CustomizationUpdate {
    pub fn new(settings: &LayoutSettings) -> Result<Self, CustomizationError> {
        Ok(Self {
            portfolio_customization: to_json(settings)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encodes_camel_case_keys() {
        let json = to_json(&LayoutSettings::default()).unwrap();
        assert_eq!(
            json,
            r#"{"gridColumns":3,"gridGap":4.0,"gridRadius":0.0,"layoutMode":"masonry","gridAspectRatio":"4x5","theme":"default"}"#
        );
    }

    #[test]
    fn missing_keys_take_defaults() {
        let settings = from_json(r#"{"gridColumns":2}"#).unwrap();
        assert_eq!(settings, LayoutSettings::default().columns(2));
        assert_eq!(from_json("{}").unwrap(), LayoutSettings::default());
    }

    #[test]
    fn unknown_keys_and_values_are_tolerated() {
        let settings =
            from_json(r##"{"layoutMode":"carousel","gridAspectRatio":"7x3","accent":"#fff"}"##)
                .unwrap();
        assert_eq!(settings.mode, LayoutMode::Masonry);
        assert_eq!(settings.global_aspect, AspectTag::Portrait4x5);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = from_json(r#"{"gridColumns":0}"#).unwrap_err();
        assert!(matches!(err, CustomizationError::Invalid(SettingsError::ZeroColumns)));
        let err = from_json("not json").unwrap_err();
        assert!(matches!(err, CustomizationError::Json(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn blank_profile_field_is_default() {
        assert_eq!(from_profile_field(None).unwrap(), LayoutSettings::default());
        assert_eq!(from_profile_field(Some("  ")).unwrap(), LayoutSettings::default());
    }

    #[test]
    fn update_body_wraps_string() {
        let body = CustomizationUpdate::new(&LayoutSettings::new().columns(4)).unwrap();
        let value = serde_json::to_value(&body).unwrap();
        let inner = value[PROFILE_FIELD].as_str().unwrap();
        assert_eq!(from_json(inner).unwrap().columns, 4);
    }
}
