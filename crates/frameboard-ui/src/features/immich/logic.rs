//! Settings field mapping and value parsing.

use frameboard_api_models::{ImmichConfigUpdate, ImmichSettings, WakeupIntervalUpdate};
use thiserror::Error;

/// One editable setting input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingField {
    /// Device wakeup interval.
    WakeupInterval,
    /// Image rotation.
    Rotation,
    /// Colour enhancement.
    Enhanced,
    /// Contrast.
    Contrast,
}

impl SettingField {
    /// Every field in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::WakeupInterval,
            Self::Rotation,
            Self::Enhanced,
            Self::Contrast,
        ]
    }

    /// DOM id of the input element.
    #[must_use]
    pub const fn input_id(self) -> &'static str {
        match self {
            Self::WakeupInterval => "wakeup-interval-input",
            Self::Rotation => "rotation-input",
            Self::Enhanced => "enhanced-input",
            Self::Contrast => "contrast-input",
        }
    }

    /// Label next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WakeupInterval => "Wakeup Interval (minutes)",
            Self::Rotation => "Rotation",
            Self::Enhanced => "Enhanced",
            Self::Contrast => "Contrast",
        }
    }

    /// Input step attribute.
    #[must_use]
    pub const fn step(self) -> &'static str {
        match self {
            Self::WakeupInterval | Self::Rotation => "1",
            Self::Enhanced | Self::Contrast => "0.1",
        }
    }

    /// Current value of this field.
    #[must_use]
    pub const fn value_in(self, settings: &ImmichSettings) -> Option<f64> {
        match self {
            Self::WakeupInterval => settings.wakeup_interval,
            Self::Rotation => settings.rotation,
            Self::Enhanced => settings.enhanced,
            Self::Contrast => settings.contrast,
        }
    }
}

/// Input text that is not a usable number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingValueError {
    /// Nothing entered.
    #[error("{field} is empty")]
    Empty {
        /// Input id.
        field: &'static str,
    },
    /// Not a finite number.
    #[error("{field} must be a number, got {value:?}")]
    NotANumber {
        /// Input id.
        field: &'static str,
        /// Raw input.
        value: String,
    },
}

/// Parse a settings input as a float.
///
/// # Errors
///
/// Returns [`SettingValueError`] for blank or non-numeric input.
pub fn parse_setting_value(field: SettingField, raw: &str) -> Result<f64, SettingValueError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SettingValueError::Empty {
            field: field.input_id(),
        });
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| SettingValueError::NotANumber {
            field: field.input_id(),
            value: raw.to_string(),
        })
}

/// Request produced by a settings change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SettingUpdate {
    /// `PUT /config/wakeup-interval`.
    WakeupInterval(WakeupIntervalUpdate),
    /// `PUT /config/immich`.
    Immich(ImmichConfigUpdate),
}

impl SettingUpdate {
    /// Route a parsed value to its endpoint body.
    #[must_use]
    pub fn for_field(field: SettingField, value: f64) -> Self {
        match field {
            SettingField::WakeupInterval => Self::WakeupInterval(WakeupIntervalUpdate {
                wakeup_interval: value,
            }),
            SettingField::Rotation => Self::Immich(ImmichConfigUpdate {
                rotation: Some(value),
                ..ImmichConfigUpdate::default()
            }),
            SettingField::Enhanced => Self::Immich(ImmichConfigUpdate {
                enhanced: Some(value),
                ..ImmichConfigUpdate::default()
            }),
            SettingField::Contrast => Self::Immich(ImmichConfigUpdate {
                contrast: Some(value),
                ..ImmichConfigUpdate::default()
            }),
        }
    }
}

/// Text shown in a settings input.
#[must_use]
pub fn format_setting(value: Option<f64>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}
