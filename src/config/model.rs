use std::path::Path;

use anyhow::Context as _;

use crate::{
    controls::params::Param,
    foundation::error::{ForgeError, ForgeResult},
};

/// Longest label the plate accepts, in characters.
pub const LABEL_MAX_CHARS: usize = 18;

/// The full parameter set a barrel illustration is derived from.
///
/// Values are stored as given; [`BarrelConfig::validate`] rejects data the
/// resolver cannot use and [`BarrelConfig::sanitized`] snaps everything into the
/// ranges the control surface offers.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct BarrelConfig {
    /// Number of staves (vertical planks), normally 6..=24.
    pub staves: u32,
    /// Normalized vertical scale, 0..=1.
    pub height: f64,
    /// Lateral convexity, 0..=1.
    pub bulge: f64,
    /// Number of metal bands, normally 1..=6.
    pub band_count: u32,
    /// Wood hue in degrees.
    pub wood_hue: f64,
    /// Wood saturation in percent.
    pub wood_saturation: f64,
    /// Wood lightness in percent.
    pub wood_lightness: f64,
    /// Toast/char intensity, 0..=1.
    pub char_level: f64,
    /// Varnish intensity, 0..=1.
    pub gloss: f64,
    /// Free text printed on the label plate.
    pub label: String,
}

impl Default for BarrelConfig {
    fn default() -> Self {
        Self {
            staves: 14,
            height: 0.5,
            bulge: 0.43,
            band_count: 3,
            wood_hue: 28.0,
            wood_saturation: 63.0,
            wood_lightness: 43.0,
            char_level: 0.32,
            gloss: 0.38,
            label: "СЕЛЬСКАЯ КАЗНА".to_string(),
        }
    }
}

impl BarrelConfig {
    /// Parse a JSON document. Missing fields fall back to [`BarrelConfig::default`].
    pub fn from_json_str(s: &str) -> ForgeResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> ForgeResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read barrel config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Reject non-finite numbers, counts above their slider maximum and overlong labels.
    pub fn validate(&self) -> ForgeResult<()> {
        for (param, count) in [
            (Param::Staves, self.staves),
            (Param::BandCount, self.band_count),
        ] {
            let spec = param.spec();
            if f64::from(count) > spec.max {
                return Err(ForgeError::validation(format!(
                    "{} must be at most {}, got {count}",
                    spec.key, spec.max
                )));
            }
        }

        let numeric = [
            ("height", self.height),
            ("bulge", self.bulge),
            ("woodHue", self.wood_hue),
            ("woodSaturation", self.wood_saturation),
            ("woodLightness", self.wood_lightness),
            ("charLevel", self.char_level),
            ("gloss", self.gloss),
        ];
        for (name, v) in numeric {
            if !v.is_finite() {
                return Err(ForgeError::validation(format!(
                    "{name} must be a finite number, got {v}"
                )));
            }
        }

        let label_len = self.label.chars().count();
        if label_len > LABEL_MAX_CHARS {
            return Err(ForgeError::validation(format!(
                "label must be at most {LABEL_MAX_CHARS} characters, got {label_len}"
            )));
        }
        Ok(())
    }

    /// Label length in characters, the unit label sizing works in.
    pub fn label_len(&self) -> usize {
        self.label.chars().count()
    }
}

/// Keep at most [`LABEL_MAX_CHARS`] characters of `text`.
pub(crate) fn truncate_label(text: &str) -> String {
    text.chars().take(LABEL_MAX_CHARS).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
