pub use kurbo::{BezPath, Point, Vec2};

/// Drawing surface size in user units (the SVG `viewBox`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in user units.
    pub width: u32,
    /// Height in user units.
    pub height: u32,
}

impl Canvas {
    /// The fixed canvas every barrel is laid out on.
    pub const BARREL: Self = Self {
        width: 400,
        height: 420,
    };
}

/// Horizontal center line of the barrel in canvas space.
pub const CENTER_X: f64 = 200.0;

/// Y coordinate of the top rim.
pub const TOP_Y: f64 = 60.0;

/// Body height at `height = 0.5`, before the height factor is applied.
pub const BASE_HEIGHT: f64 = 220.0;
