use std::fmt;

use crate::foundation::math::{clamp_percent, fmt_trimmed};

/// A color in hue/saturation/lightness form.
///
/// `h` is in degrees, `s` and `l` are percentages. Only lightness is ever
/// derived; hue and saturation pass through every transform unchanged.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation in percent.
    pub s: f64,
    /// Lightness in percent.
    pub l: f64,
}

impl Hsl {
    /// Build a color from its three components, stored as given.
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Shift lightness by a signed delta, clamping the result to `[0, 100]`.
    pub fn shift_lightness(self, delta: f64) -> Self {
        Self {
            l: clamp_percent(self.l + delta),
            ..self
        }
    }

    /// CSS functional notation, e.g. `hsl(28, 63%, 43%)`.
    pub fn to_display_color(self) -> String {
        self.to_string()
    }

    /// Convert to 8-bit sRGB. Hue wraps; saturation and lightness are clamped.
    pub fn to_rgb8(self) -> [u8; 3] {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = clamp_percent(self.s) / 100.0;
        let l = clamp_percent(self.l) / 100.0;

        if s == 0.0 {
            let v = channel(l);
            return [v, v, v];
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        [
            channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            channel(hue_to_rgb(p, q, h)),
            channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        ]
    }

    /// `#rrggbb` form of [`Hsl::to_rgb8`].
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            fmt_trimmed(self.h, 2),
            fmt_trimmed(self.s, 2),
            fmt_trimmed(self.l, 2)
        )
    }
}

/// Free-function form of [`Hsl::shift_lightness`].
pub fn shift_lightness(color: Hsl, delta: f64) -> Hsl {
    color.shift_lightness(delta)
}

/// Free-function form of [`Hsl::to_display_color`].
pub fn to_display_color(color: Hsl) -> String {
    color.to_display_color()
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/color/hsl.rs"]
mod tests;
