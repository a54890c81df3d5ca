use std::fmt;

use serde::{Deserialize, Serialize};

use super::key::{ParameterKey, ParameterKind};
use crate::domain::AppError;

/// A single parameter value, typed by [`ParameterKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Text(String),
    Number(f64),
    Switch(bool),
}

impl ParameterValue {
    /// Parse a raw string according to the key's kind. Text is stored verbatim.
    pub fn parse(key: ParameterKey, raw: &str) -> Result<ParameterValue, AppError> {
        let invalid = |reason: &str| AppError::InvalidParameterValue {
            key: key.id().to_string(),
            value: raw.to_string(),
            reason: reason.to_string(),
        };

        match key.kind() {
            ParameterKind::Text => Ok(ParameterValue::Text(raw.to_string())),
            ParameterKind::Number => {
                let number: f64 = raw.trim().parse().map_err(|_| invalid("expected a number"))?;
                if !number.is_finite() {
                    return Err(invalid("expected a finite number"));
                }
                Ok(ParameterValue::Number(number))
            }
            ParameterKind::Switch => match raw.trim().to_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(ParameterValue::Switch(true)),
                "false" | "no" | "off" | "0" => Ok(ParameterValue::Switch(false)),
                _ => Err(invalid("expected true or false")),
            },
        }
    }

    pub fn kind(&self) -> ParameterKind {
        match self {
            ParameterValue::Text(_) => ParameterKind::Text,
            ParameterValue::Number(_) => ParameterKind::Number,
            ParameterValue::Switch(_) => ParameterKind::Switch,
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Text(text) => write!(f, "{}", text),
            ParameterValue::Number(number) => write!(f, "{}", number),
            ParameterValue::Switch(on) => write!(f, "{}", on),
        }
    }
}

/// Current parameter values. `None` means the parameter is unset and its flag
/// is omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ParameterValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stylize: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chaos: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weird: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<f64>,
}

impl ParameterValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter used by callers assembling a snapshot in code.
    pub fn with(mut self, key: ParameterKey, value: ParameterValue) -> Result<Self, AppError> {
        self.set_value(key, value)?;
        Ok(self)
    }

    pub fn get(&self, key: ParameterKey) -> Option<ParameterValue> {
        match key {
            ParameterKey::Version => self.version.clone().map(ParameterValue::Text),
            ParameterKey::AspectRatio => self.aspect_ratio.clone().map(ParameterValue::Text),
            ParameterKey::Stylize => self.stylize.map(ParameterValue::Number),
            ParameterKey::Chaos => self.chaos.map(ParameterValue::Number),
            ParameterKey::Quality => self.quality.clone().map(ParameterValue::Text),
            ParameterKey::Weird => self.weird.map(ParameterValue::Number),
            ParameterKey::ImageWeight => self.image_weight.map(ParameterValue::Number),
            ParameterKey::StyleWeight => self.style_weight.map(ParameterValue::Number),
            ParameterKey::StyleRef => self.style_ref.clone().map(ParameterValue::Text),
            ParameterKey::CharacterRef => self.character_ref.clone().map(ParameterValue::Text),
            ParameterKey::No => self.no.clone().map(ParameterValue::Text),
            ParameterKey::Tile => self.tile.map(ParameterValue::Switch),
            ParameterKey::Style => self.style.clone().map(ParameterValue::Text),
            ParameterKey::Seed => self.seed.map(ParameterValue::Number),
            ParameterKey::Stop => self.stop.map(ParameterValue::Number),
        }
    }

    /// Store a typed value. The value's kind must match the key's kind.
    pub fn set_value(&mut self, key: ParameterKey, value: ParameterValue) -> Result<(), AppError> {
        match (key, value) {
            (ParameterKey::Version, ParameterValue::Text(v)) => self.version = Some(v),
            (ParameterKey::AspectRatio, ParameterValue::Text(v)) => self.aspect_ratio = Some(v),
            (ParameterKey::Quality, ParameterValue::Text(v)) => self.quality = Some(v),
            (ParameterKey::StyleRef, ParameterValue::Text(v)) => self.style_ref = Some(v),
            (ParameterKey::CharacterRef, ParameterValue::Text(v)) => self.character_ref = Some(v),
            (ParameterKey::No, ParameterValue::Text(v)) => self.no = Some(v),
            (ParameterKey::Style, ParameterValue::Text(v)) => self.style = Some(v),
            (ParameterKey::Stylize, ParameterValue::Number(v)) => self.stylize = Some(v),
            (ParameterKey::Chaos, ParameterValue::Number(v)) => self.chaos = Some(v),
            (ParameterKey::Weird, ParameterValue::Number(v)) => self.weird = Some(v),
            (ParameterKey::ImageWeight, ParameterValue::Number(v)) => self.image_weight = Some(v),
            (ParameterKey::StyleWeight, ParameterValue::Number(v)) => self.style_weight = Some(v),
            (ParameterKey::Seed, ParameterValue::Number(v)) => self.seed = Some(v),
            (ParameterKey::Stop, ParameterValue::Number(v)) => self.stop = Some(v),
            (ParameterKey::Tile, ParameterValue::Switch(v)) => self.tile = Some(v),
            (key, value) => {
                return Err(AppError::InvalidParameterValue {
                    key: key.id().to_string(),
                    value: value.to_string(),
                    reason: format!("expected a {} value", key.kind().name()),
                });
            }
        }
        Ok(())
    }

    /// Parse `raw` for `key` and store it.
    pub fn set(&mut self, key: ParameterKey, raw: &str) -> Result<(), AppError> {
        let value = ParameterValue::parse(key, raw)?;
        self.set_value(key, value)
    }

    pub fn unset(&mut self, key: ParameterKey) {
        match key {
            ParameterKey::Version => self.version = None,
            ParameterKey::AspectRatio => self.aspect_ratio = None,
            ParameterKey::Stylize => self.stylize = None,
            ParameterKey::Chaos => self.chaos = None,
            ParameterKey::Quality => self.quality = None,
            ParameterKey::Weird => self.weird = None,
            ParameterKey::ImageWeight => self.image_weight = None,
            ParameterKey::StyleWeight => self.style_weight = None,
            ParameterKey::StyleRef => self.style_ref = None,
            ParameterKey::CharacterRef => self.character_ref = None,
            ParameterKey::No => self.no = None,
            ParameterKey::Tile => self.tile = None,
            ParameterKey::Style => self.style = None,
            ParameterKey::Seed => self.seed = None,
            ParameterKey::Stop => self.stop = None,
        }
    }

    /// Overlay `other` onto `self`; values set in `other` win.
    pub fn merge(&mut self, other: &ParameterValues) {
        for key in ParameterKey::ALL {
            if let Some(value) = other.get(key) {
                // Kinds always match when copying between snapshots.
                let _ = self.set_value(key, value);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        ParameterKey::ALL.iter().all(|key| self.get(*key).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_follows_key_kind() {
        assert_eq!(
            ParameterValue::parse(ParameterKey::Stylize, " 250 ").unwrap(),
            ParameterValue::Number(250.0)
        );
        assert_eq!(
            ParameterValue::parse(ParameterKey::Style, "  raw  ").unwrap(),
            ParameterValue::Text("  raw  ".to_string())
        );
        assert_eq!(
            ParameterValue::parse(ParameterKey::Tile, "on").unwrap(),
            ParameterValue::Switch(true)
        );
    }

    #[test]
    fn parse_rejects_bad_numbers_and_switches() {
        assert!(ParameterValue::parse(ParameterKey::Chaos, "lots").is_err());
        assert!(ParameterValue::parse(ParameterKey::Chaos, "inf").is_err());
        assert!(ParameterValue::parse(ParameterKey::Tile, "maybe").is_err());
    }

    #[test]
    fn numbers_display_in_shortest_form() {
        assert_eq!(ParameterValue::Number(250.0).to_string(), "250");
        assert_eq!(ParameterValue::Number(0.5).to_string(), "0.5");
    }

    #[test]
    fn set_value_rejects_kind_mismatch() {
        let mut values = ParameterValues::new();
        let err = values
            .set_value(ParameterKey::Stylize, ParameterValue::Text("high".into()))
            .unwrap_err();
        assert!(err.to_string().contains("expected a number value"));
        assert!(values.is_empty());
    }

    #[test]
    fn set_get_unset_cover_every_key() {
        let mut values = ParameterValues::new();
        for key in ParameterKey::ALL {
            let raw = match key.kind() {
                ParameterKind::Text => "x",
                ParameterKind::Number => "7",
                ParameterKind::Switch => "true",
            };
            values.set(key, raw).unwrap();
            assert!(values.get(key).is_some(), "{} should be set", key);
            values.unset(key);
            assert!(values.get(key).is_none(), "{} should be unset", key);
        }
    }

    #[test]
    fn merge_prefers_other() {
        let mut base =
            ParameterValues { stylize: Some(100.0), chaos: Some(5.0), ..Default::default() };
        let overlay = ParameterValues { chaos: Some(20.0), tile: Some(true), ..Default::default() };
        base.merge(&overlay);
        assert_eq!(base.stylize, Some(100.0));
        assert_eq!(base.chaos, Some(20.0));
        assert_eq!(base.tile, Some(true));
    }

    #[test]
    fn deserializes_camel_case_snapshot() {
        let values: ParameterValues =
            serde_json::from_str(r#"{"aspectRatio":"16:9","stylize":250,"tile":true}"#).unwrap();
        assert_eq!(values.aspect_ratio.as_deref(), Some("16:9"));
        assert_eq!(values.stylize, Some(250.0));
        assert_eq!(values.tile, Some(true));
    }
}
