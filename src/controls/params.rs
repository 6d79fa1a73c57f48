use std::str::FromStr;

use crate::{
    config::model::{BarrelConfig, truncate_label},
    foundation::{
        error::ForgeError,
        math::{fmt_trimmed, round_half_up},
    },
};

/// One slider on the control surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Param {
    /// [`BarrelConfig::staves`].
    Staves,
    /// [`BarrelConfig::height`].
    Height,
    /// [`BarrelConfig::bulge`].
    Bulge,
    /// [`BarrelConfig::band_count`].
    BandCount,
    /// [`BarrelConfig::wood_hue`].
    WoodHue,
    /// [`BarrelConfig::wood_saturation`].
    WoodSaturation,
    /// [`BarrelConfig::wood_lightness`].
    WoodLightness,
    /// [`BarrelConfig::char_level`].
    CharLevel,
    /// [`BarrelConfig::gloss`].
    Gloss,
}

/// Range and presentation of a [`Param`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamSpec {
    /// Config key (camelCase, as in JSON).
    pub key: &'static str,
    /// Human-readable caption.
    pub label: &'static str,
    /// Smallest slider value.
    pub min: f64,
    /// Largest slider value.
    pub max: f64,
    /// Slider increment.
    pub step: f64,
}

impl Param {
    /// Every parameter, in control-surface order.
    pub const ALL: [Self; 9] = [
        Self::Staves,
        Self::Height,
        Self::Bulge,
        Self::BandCount,
        Self::WoodHue,
        Self::WoodSaturation,
        Self::WoodLightness,
        Self::CharLevel,
        Self::Gloss,
    ];

    /// Slider range, step and caption.
    pub fn spec(self) -> ParamSpec {
        let (key, label, min, max, step) = match self {
            Self::Staves => ("staves", "Количество клепок", 6.0, 24.0, 1.0),
            Self::Height => ("height", "Высота", 0.0, 1.0, 0.01),
            Self::Bulge => ("bulge", "Выпуклость", 0.0, 1.0, 0.01),
            Self::BandCount => ("bandCount", "Количество обручей", 1.0, 6.0, 1.0),
            Self::WoodHue => ("woodHue", "Тон древесины", 0.0, 360.0, 1.0),
            Self::WoodSaturation => ("woodSaturation", "Насыщенность", 20.0, 90.0, 1.0),
            Self::WoodLightness => ("woodLightness", "Светлота", 15.0, 75.0, 1.0),
            Self::CharLevel => ("charLevel", "Обжиг", 0.0, 1.0, 0.01),
            Self::Gloss => ("gloss", "Лак / глянец", 0.0, 1.0, 0.01),
        };
        ParamSpec {
            key,
            label,
            min,
            max,
            step,
        }
    }

    /// Whether the parameter only takes whole values.
    pub fn is_integer(self) -> bool {
        matches!(self, Self::Staves | Self::BandCount)
    }

    /// Value readout shown next to the slider.
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Staves | Self::BandCount => fmt_trimmed(value, 2),
            Self::Height => format!("{}%", round_half_up((0.6 + value * 0.8) * 100.0)),
            Self::Bulge | Self::CharLevel | Self::Gloss => {
                format!("{}%", round_half_up(value * 100.0))
            }
            Self::WoodHue => format!("{}°", fmt_trimmed(value, 2)),
            Self::WoodSaturation | Self::WoodLightness => format!("{}%", fmt_trimmed(value, 2)),
        }
    }

    /// Clamp into the slider range, rounding integer parameters.
    pub fn clamp(self, value: f64) -> f64 {
        let spec = self.spec();
        let v = value.clamp(spec.min, spec.max);
        if self.is_integer() { v.round() } else { v }
    }
}

impl FromStr for Param {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        let normalized = wanted.replace(['_', '-'], "").to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.spec().key.to_ascii_lowercase() == normalized)
            .ok_or_else(|| ForgeError::validation(format!("unknown parameter '{wanted}'")))
    }
}

/// A single `key=value` assignment coming from outside the config file.
#[derive(Clone, Debug, PartialEq)]
pub enum Override {
    /// Numeric slider assignment.
    Param(Param, f64),
    /// Label text assignment.
    Label(String),
}

impl FromStr for Override {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((key, value)) = s.split_once('=') else {
            return Err(ForgeError::validation(format!(
                "override '{s}' must look like key=value"
            )));
        };

        if key.trim() == "label" {
            return Ok(Self::Label(value.to_string()));
        }

        let param: Param = key.parse()?;
        let v: f64 = value.trim().parse().map_err(|_| {
            ForgeError::validation(format!("override '{s}' has a non-numeric value"))
        })?;
        if !v.is_finite() {
            return Err(ForgeError::validation(format!("override '{s}' must be finite")));
        }
        Ok(Self::Param(param, v))
    }
}

impl BarrelConfig {
    /// Current value of a numeric parameter.
    pub fn get(&self, param: Param) -> f64 {
        match param {
            Param::Staves => f64::from(self.staves),
            Param::Height => self.height,
            Param::Bulge => self.bulge,
            Param::BandCount => f64::from(self.band_count),
            Param::WoodHue => self.wood_hue,
            Param::WoodSaturation => self.wood_saturation,
            Param::WoodLightness => self.wood_lightness,
            Param::CharLevel => self.char_level,
            Param::Gloss => self.gloss,
        }
    }

    /// A new config with one parameter replaced. Integer parameters round and
    /// saturate at zero; nothing else is clamped.
    pub fn with_param(&self, param: Param, value: f64) -> Self {
        let mut next = self.clone();
        match param {
            Param::Staves => next.staves = to_count(value),
            Param::Height => next.height = value,
            Param::Bulge => next.bulge = value,
            Param::BandCount => next.band_count = to_count(value),
            Param::WoodHue => next.wood_hue = value,
            Param::WoodSaturation => next.wood_saturation = value,
            Param::WoodLightness => next.wood_lightness = value,
            Param::CharLevel => next.char_level = value,
            Param::Gloss => next.gloss = value,
        }
        next
    }

    /// A new config with the label replaced, truncated to the plate limit.
    pub fn with_label(&self, text: &str) -> Self {
        Self {
            label: truncate_label(text),
            ..self.clone()
        }
    }

    /// Apply one [`Override`].
    pub fn with_override(&self, ov: &Override) -> Self {
        match ov {
            Override::Param(p, v) => self.with_param(*p, *v),
            Override::Label(text) => self.with_label(text),
        }
    }

    /// Parameters whose current value lies outside the slider range, with that value.
    pub fn out_of_range(&self) -> Vec<(Param, f64)> {
        Param::ALL
            .into_iter()
            .map(|p| (p, self.get(p)))
            .filter(|&(p, v)| {
                let spec = p.spec();
                !(spec.min..=spec.max).contains(&v)
            })
            .collect()
    }

    /// Snap every field into the range the control surface allows.
    ///
    /// Each value that has to move is reported with `tracing::warn!`.
    pub fn sanitized(&self) -> Self {
        for (param, value) in self.out_of_range() {
            let spec = param.spec();
            tracing::warn!(
                param = spec.key,
                value,
                clamped = param.clamp(value),
                "value outside {}..={}, clamping",
                spec.min,
                spec.max
            );
        }
        let mut next = Param::ALL.into_iter().fold(self.clone(), |cfg, p| {
            let v = cfg.get(p);
            cfg.with_param(p, p.clamp(v))
        });
        next.label = truncate_label(&next.label);
        next
    }
}

fn to_count(value: f64) -> u32 {
    // `as` saturates: negatives and NaN land on 0.
    value.round() as u32
}

#[cfg(test)]
#[path = "../../tests/unit/controls/params.rs"]
mod tests;
