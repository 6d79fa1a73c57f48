use kurbo::{BezPath, Ellipse, Point};

use crate::{
    color::hsl::Hsl,
    foundation::core::Canvas,
    geometry::resolver::{BarrelGeometry, CONTROL_FRAC},
};

/// Straight-alpha sRGB color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Rgba {
    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
            a: 1.0,
        }
    }

    /// Color with explicit alpha.
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// A color a shape can be painted with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// A wood tone.
    Wood(Hsl),
    /// A fixed color (metal, label paper, ink).
    Fixed(Rgba),
}

impl Color {
    /// CSS color text plus straight alpha. Wood tones keep their HSL form so
    /// fractional lightness survives; fixed colors are written as `#rrggbb`.
    pub fn css_and_alpha(self) -> (String, f64) {
        match self {
            Self::Wood(hsl) => (hsl.to_display_color(), 1.0),
            Self::Fixed(c) => (format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b), c.a),
        }
    }
}

/// Named gradients shared by the shapes of one barrel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GradientId {
    /// Horizontal shading across the body.
    Body,
    /// Shading along each stave divider.
    Stave,
    /// Brushed metal of the bands.
    Metal,
}

impl GradientId {
    /// Identifier used for cross references in the output document.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Body => "barrel-body",
            Self::Stave => "barrel-stave",
            Self::Metal => "metal-band",
        }
    }
}

/// Horizontal linear gradient (left edge to right edge of the shape's bounds).
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    /// Reference name.
    pub id: GradientId,
    /// `(offset in [0, 1], color)` pairs in increasing offset order.
    pub stops: Vec<(f64, Color)>,
}

/// What fills or strokes a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// Single color.
    Solid(Color),
    /// Reference to a gradient in [`Scene::gradients`].
    Gradient(GradientId),
}

/// Outline parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Stroke paint.
    pub paint: Paint,
    /// Line width in user units.
    pub width: f64,
    /// Round line caps instead of butt caps.
    pub round_cap: bool,
}

/// One painted primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Filled ellipse.
    Ellipse {
        /// Geometry.
        ellipse: Ellipse,
        /// Fill paint.
        fill: Paint,
        /// Whole-shape opacity.
        opacity: f64,
    },
    /// Path with optional fill and optional stroke.
    Path {
        /// Geometry.
        path: BezPath,
        /// Fill paint; `None` leaves the interior empty.
        fill: Option<Paint>,
        /// Outline; `None` draws no outline.
        stroke: Option<Stroke>,
        /// Whole-shape opacity.
        opacity: f64,
    },
    /// Single line of horizontally centered text.
    Text {
        /// Content.
        text: String,
        /// Baseline center.
        anchor: Point,
        /// Font size in user units.
        font_size: f64,
        /// CSS font weight.
        font_weight: u16,
        /// Extra spacing between glyphs.
        letter_spacing: f64,
        /// Text color.
        fill: Color,
    },
}

/// A barrel laid out as ordered draw operations, back to front.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Drawing area.
    pub canvas: Canvas,
    /// Gradients referenced by [`Paint::Gradient`].
    pub gradients: Vec<Gradient>,
    /// Draw operations in paint order.
    pub ops: Vec<DrawOp>,
}

const WHITE: Rgba = Rgba::hex(0xffffff);
const BAND_SHINE: Rgba = Rgba::new(255, 255, 255, 0.12);
const LABEL_PAPER: Rgba = Rgba::new(255, 243, 220, 0.8);
const LABEL_EDGE: Rgba = Rgba::new(90, 70, 40, 0.6);
const LABEL_INK: Rgba = Rgba::new(60, 35, 20, 0.85);

/// Lay out the shapes for a resolved barrel.
#[tracing::instrument(level = "debug", skip(g), fields(staves = g.stave_lines.len() + 1))]
pub fn build_scene(g: &BarrelGeometry) -> Scene {
    let mut ops = Vec::with_capacity(g.stave_lines.len() + g.band_positions.len() * 2 + 6);

    push_top_rim(&mut ops, g);
    push_body(&mut ops, g);
    push_staves(&mut ops, g);
    push_bands(&mut ops, g);
    push_bottom_rim(&mut ops, g);
    push_gloss(&mut ops, g);
    push_label(&mut ops, g);

    tracing::debug!(ops = ops.len(), "built barrel scene");

    Scene {
        canvas: Canvas::BARREL,
        gradients: gradients(g),
        ops,
    }
}

fn gradients(g: &BarrelGeometry) -> Vec<Gradient> {
    let t = g.tones;
    vec![
        Gradient {
            id: GradientId::Body,
            stops: vec![
                (0.0, Color::Wood(t.shadow)),
                (0.4, Color::Wood(t.base)),
                (0.6, Color::Wood(t.highlight)),
                (1.0, Color::Wood(t.shadow)),
            ],
        },
        Gradient {
            id: GradientId::Stave,
            stops: vec![
                (0.0, Color::Wood(t.shadow.shift_lightness(-2.0))),
                (0.3, Color::Wood(t.base)),
                (0.7, Color::Wood(t.highlight)),
                (1.0, Color::Wood(t.shadow.shift_lightness(5.0))),
            ],
        },
        Gradient {
            id: GradientId::Metal,
            stops: vec![
                (0.0, Color::Fixed(Rgba::hex(0x2d2d2f))),
                (0.4, Color::Fixed(Rgba::hex(0x5b5d60))),
                (0.6, Color::Fixed(Rgba::hex(0xa6a7ac))),
                (1.0, Color::Fixed(Rgba::hex(0x1e1f21))),
            ],
        },
    ]
}

fn push_top_rim(ops: &mut Vec<DrawOp>, g: &BarrelGeometry) {
    let s = g.silhouette;
    let rx = s.top_width / 1.9;
    ops.push(DrawOp::Ellipse {
        ellipse: Ellipse::new((s.cx, s.top_y - 1.0), (rx, rx * 0.3), 0.0),
        fill: Paint::Solid(Color::Wood(g.tones.shadow.shift_lightness(-8.0))),
        opacity: g.rim_opacity,
    });
}

fn push_body(ops: &mut Vec<DrawOp>, g: &BarrelGeometry) {
    let s = g.silhouette;
    let (half_top, half_mid, half_bottom) =
        (s.top_width / 2.0, s.mid_width / 2.0, s.bottom_width / 2.0);
    let upper = s.y_at(CONTROL_FRAC);
    let lower = s.bottom_y - s.computed_height * CONTROL_FRAC;

    let mut path = BezPath::new();
    path.move_to((s.cx - half_top, s.top_y));
    path.curve_to(
        (s.cx - half_mid, upper),
        (s.cx - half_mid, lower),
        (s.cx - half_bottom, s.bottom_y),
    );
    path.line_to((s.cx + half_bottom, s.bottom_y));
    path.curve_to(
        (s.cx + half_mid, lower),
        (s.cx + half_mid, upper),
        (s.cx + half_top, s.top_y),
    );
    path.close_path();

    ops.push(DrawOp::Path {
        path,
        fill: Some(Paint::Gradient(GradientId::Body)),
        stroke: Some(Stroke {
            paint: Paint::Solid(Color::Wood(g.tones.shadow.shift_lightness(-12.0))),
            width: 3.0,
            round_cap: false,
        }),
        opacity: 1.0,
    });
}

fn push_staves(ops: &mut Vec<DrawOp>, g: &BarrelGeometry) {
    for line in &g.stave_lines {
        let c = line.curve;
        let mut path = BezPath::new();
        path.move_to(c.p0);
        path.curve_to(c.p1, c.p2, c.p3);
        ops.push(DrawOp::Path {
            path,
            fill: None,
            stroke: Some(Stroke {
                paint: Paint::Gradient(GradientId::Stave),
                width: 2.0,
                round_cap: false,
            }),
            opacity: 0.6,
        });
    }
}

fn push_bands(ops: &mut Vec<DrawOp>, g: &BarrelGeometry) {
    let s = g.silhouette;
    let half_mid = s.mid_width / 2.0;
    for &y in &g.band_positions {
        for (overhang, lift, paint, width) in [
            (12.0, 10.0, Paint::Gradient(GradientId::Metal), 18.0),
            (11.0, 8.0, Paint::Solid(Color::Fixed(BAND_SHINE)), 6.0),
        ] {
            let mut path = BezPath::new();
            path.move_to((s.cx - half_mid - overhang, y));
            path.quad_to((s.cx, y - lift), (s.cx + half_mid + overhang, y));
            ops.push(DrawOp::Path {
                path,
                fill: None,
                stroke: Some(Stroke {
                    paint,
                    width,
                    round_cap: true,
                }),
                opacity: 1.0,
            });
        }
    }
}

fn push_bottom_rim(ops: &mut Vec<DrawOp>, g: &BarrelGeometry) {
    let s = g.silhouette;
    let rx = s.bottom_width / 2.0;
    ops.push(DrawOp::Ellipse {
        ellipse: Ellipse::new((s.cx, s.bottom_y + 4.0), (rx, rx * 0.28), 0.0),
        fill: Paint::Solid(Color::Wood(g.tones.shadow.shift_lightness(-15.0))),
        opacity: 0.75,
    });
}

fn push_gloss(ops: &mut Vec<DrawOp>, g: &BarrelGeometry) {
    let s = g.silhouette;
    let w = g.gloss.width;
    let mut path = BezPath::new();
    path.move_to((s.cx - w, s.y_at(0.12)));
    path.curve_to(
        (s.cx - w * 0.8, s.y_at(0.32)),
        (s.cx - w * 0.8, s.bottom_y - s.computed_height * 0.38),
        (s.cx - w * 0.6, s.bottom_y - s.computed_height * 0.18),
    );
    ops.push(DrawOp::Path {
        path,
        fill: None,
        stroke: Some(Stroke {
            paint: Paint::Solid(Color::Fixed(WHITE)),
            width: 14.0,
            round_cap: true,
        }),
        opacity: g.gloss.opacity,
    });
}

fn push_label(ops: &mut Vec<DrawOp>, g: &BarrelGeometry) {
    if g.label.text.is_empty() {
        return;
    }
    let s = g.silhouette;
    let (outer, inner) = (s.mid_width * 0.45, s.mid_width * 0.39);

    let mut plate = BezPath::new();
    plate.move_to((s.cx - outer, s.y_at(0.48)));
    plate.quad_to((s.cx, s.y_at(0.42)), (s.cx + outer, s.y_at(0.48)));
    plate.line_to((s.cx + inner, s.y_at(0.64)));
    plate.quad_to((s.cx, s.y_at(0.6)), (s.cx - inner, s.y_at(0.64)));
    plate.close_path();

    ops.push(DrawOp::Path {
        path: plate,
        fill: Some(Paint::Solid(Color::Fixed(LABEL_PAPER))),
        stroke: Some(Stroke {
            paint: Paint::Solid(Color::Fixed(LABEL_EDGE)),
            width: 2.0,
            round_cap: false,
        }),
        opacity: 1.0,
    });
    ops.push(DrawOp::Text {
        text: g.label.text.clone(),
        anchor: Point::new(s.cx, s.y_at(0.58)),
        font_size: g.label.font_size,
        font_weight: 600,
        letter_spacing: 1.5,
        fill: Color::Fixed(LABEL_INK),
    });
}

#[cfg(test)]
#[path = "../../tests/unit/scene/build.rs"]
mod tests;
