use std::f64::consts::PI;

use kurbo::{CubicBez, Point};

use crate::{
    color::hsl::Hsl,
    config::model::BarrelConfig,
    foundation::{
        core::{BASE_HEIGHT, CENTER_X, TOP_Y},
        error::ForgeResult,
    },
};

/// Outer body dimensions in canvas space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Silhouette {
    /// Horizontal center line.
    pub cx: f64,
    /// Top rim y.
    pub top_y: f64,
    /// Bottom rim y.
    pub bottom_y: f64,
    /// `bottom_y - top_y`.
    pub computed_height: f64,
    /// Width at the top rim.
    pub top_width: f64,
    /// Width at the belly.
    pub mid_width: f64,
    /// Width at the bottom rim.
    pub bottom_width: f64,
}

impl Silhouette {
    /// Y of a point `frac` of the way down the body.
    pub fn y_at(&self, frac: f64) -> f64 {
        self.top_y + self.computed_height * frac
    }
}

/// Divider between two adjacent staves, running rim to rim.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StaveLine {
    /// X where the line meets the top rim.
    pub x1: f64,
    /// X where the line meets the bottom rim.
    pub x2: f64,
    /// The full curve, control points pulled out by the bulge.
    pub curve: CubicBez,
}

/// Base wood color plus the two derived shading tones.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct WoodTones {
    /// Config color, untouched.
    pub base: Hsl,
    /// Darkened tone; darker the more the wood is charred.
    pub shadow: Hsl,
    /// Lightened tone; dims slightly with char.
    pub highlight: Hsl,
}

/// Varnish highlight streak.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GlossStreak {
    /// Streak opacity.
    pub opacity: f64,
    /// Horizontal offset of the streak from the center line.
    pub width: f64,
}

/// Text on the label plate.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelPlate {
    /// Uppercased label text; empty means no plate.
    pub text: String,
    /// Font size, shrinking with length down to [`MIN_LABEL_FONT_SIZE`].
    pub font_size: f64,
}

/// Everything a renderer needs to paint one barrel.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarrelGeometry {
    /// Body outline.
    pub silhouette: Silhouette,
    /// `staves - 1` interior stave dividers, left to right in index order.
    pub stave_lines: Vec<StaveLine>,
    /// Band y coordinates, top to bottom.
    pub band_positions: Vec<f64>,
    /// Wood shading.
    pub tones: WoodTones,
    /// Varnish streak.
    pub gloss: GlossStreak,
    /// Label plate contents.
    pub label: LabelPlate,
    /// Bulge the curves were built with.
    pub bulge: f64,
    /// Opacity of the top rim ellipse.
    pub rim_opacity: f64,
}

/// Smallest label font size.
pub const MIN_LABEL_FONT_SIZE: f64 = 16.0;

/// Stave control points sit at these fractions of the body height.
pub(crate) const CONTROL_FRAC: f64 = 0.28;

/// Derive the barrel drawing from a config.
///
/// Total over finite input. `staves` and `band_count` are treated as at least 1;
/// counts beyond what [`BarrelConfig::validate`] allows are still computed, so
/// untrusted input should go through [`resolve_checked`].
#[tracing::instrument(level = "debug", skip(config), fields(staves = config.staves, bands = config.band_count))]
pub fn resolve(config: &BarrelConfig) -> BarrelGeometry {
    let silhouette = silhouette(config.height, config.bulge);
    let stave_lines = stave_lines(&silhouette, config.staves, config.bulge);
    let band_positions = band_positions(&silhouette, config.band_count);
    let tones = wood_tones(config);

    tracing::debug!(
        computed_height = silhouette.computed_height,
        stave_lines = stave_lines.len(),
        band_positions = band_positions.len(),
        "resolved barrel geometry"
    );

    BarrelGeometry {
        silhouette,
        stave_lines,
        band_positions,
        tones,
        gloss: GlossStreak {
            opacity: 0.12 + config.gloss * 0.2,
            width: 40.0 + config.gloss * 40.0,
        },
        label: LabelPlate {
            text: config.label.to_uppercase(),
            font_size: label_font_size(config.label_len()),
        },
        bulge: config.bulge,
        rim_opacity: 0.55 + config.char_level * 0.1,
    }
}

/// [`resolve`] after [`BarrelConfig::validate`].
pub fn resolve_checked(config: &BarrelConfig) -> ForgeResult<BarrelGeometry> {
    config.validate()?;
    Ok(resolve(config))
}

/// Font size for a label of `len` characters.
pub fn label_font_size(len: usize) -> f64 {
    (24.0 - len as f64 * 0.4).max(MIN_LABEL_FONT_SIZE)
}

fn silhouette(height: f64, bulge: f64) -> Silhouette {
    let computed_height = BASE_HEIGHT * (0.6 + height * 0.8);
    let top_width = 160.0 - bulge * 35.0;
    Silhouette {
        cx: CENTER_X,
        top_y: TOP_Y,
        bottom_y: TOP_Y + computed_height,
        computed_height,
        top_width,
        mid_width: top_width + bulge * 120.0,
        bottom_width: top_width - bulge * 25.0,
    }
}

fn stave_lines(s: &Silhouette, staves: u32, bulge: f64) -> Vec<StaveLine> {
    let staves = staves.max(1);
    let n = f64::from(staves);
    let curvature = bulge * 80.0;
    let pull = bulge * 60.0;
    let c1_y = s.y_at(CONTROL_FRAC);
    let c2_y = s.bottom_y - s.computed_height * CONTROL_FRAC;

    (0..staves - 1)
        .map(|idx| {
            let k = f64::from(idx + 1);
            let t = k / n;
            let offset_top = (s.top_width / 2.0) * (t - 0.5) * 2.0;
            // Neighbouring staves lean in opposite directions.
            let sign = if idx % 2 == 0 { 1.0 } else { -1.0 };
            let offset_bottom = offset_top + curvature * (PI * k / n).sin() * sign * 0.2;

            let x1 = s.cx - offset_top;
            let x2 = s.cx - offset_bottom;
            StaveLine {
                x1,
                x2,
                curve: CubicBez::new(
                    Point::new(x1, s.top_y),
                    Point::new(x1 - pull, c1_y),
                    Point::new(x2 - pull, c2_y),
                    Point::new(x2, s.bottom_y),
                ),
            }
        })
        .collect()
}

fn band_positions(s: &Silhouette, band_count: u32) -> Vec<f64> {
    let count = band_count.max(1);
    let gap = s.computed_height / (f64::from(count) + 1.0);
    (1..=count).map(|k| s.top_y + gap * f64::from(k)).collect()
}

fn wood_tones(config: &BarrelConfig) -> WoodTones {
    let base = Hsl::new(
        config.wood_hue,
        config.wood_saturation,
        config.wood_lightness,
    );
    let char_shift = config.char_level * 25.0;
    WoodTones {
        base,
        shadow: base.shift_lightness(-18.0 - char_shift),
        highlight: base.shift_lightness(14.0 - config.char_level * 5.0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/resolver.rs"]
mod tests;
