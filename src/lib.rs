//! barrel-forge turns a handful of barrel parameters into a vector illustration.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: a [`BarrelConfig`] is loaded from JSON or built from defaults, then
//!    updated one [`Param`] at a time. Every update returns a new config.
//! 2. **Resolve**: [`resolve`] maps the config to a [`BarrelGeometry`] (silhouette, stave
//!    curves, band positions, wood tones, gloss and label sizing).
//! 3. **Build**: [`build_scene`] lays the geometry out as ordered [`DrawOp`]s.
//! 4. **Render**: [`render_svg`] serializes the scene; [`render_png`] rasterizes it.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: resolving and building are pure; identical configs give identical
//!   output down to the serialized bytes.
//! - **IO at the edges only**: config loading and PNG writing are the only functions that
//!   touch the filesystem.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod config;
mod controls;
mod flavor;
mod foundation;
mod geometry;
mod render;
mod scene;

pub use color::hsl::{Hsl, shift_lightness, to_display_color};
pub use config::model::{BarrelConfig, LABEL_MAX_CHARS};
pub use controls::params::{Override, Param, ParamSpec};
pub use flavor::notes::{ToastProfile, flavor_notes};
pub use foundation::core::{BASE_HEIGHT, BezPath, CENTER_X, Canvas, Point, TOP_Y, Vec2};
pub use foundation::error::{ForgeError, ForgeResult};
pub use geometry::resolver::{
    BarrelGeometry, GlossStreak, LabelPlate, MIN_LABEL_FONT_SIZE, Silhouette, StaveLine,
    WoodTones, label_font_size, resolve, resolve_checked,
};
pub use render::raster::{
    MAX_RASTER_DIM, RasterImage, encode_png, rasterize_svg, render_png, write_png,
};
pub use render::svg::render_svg;
pub use scene::build::{
    Color, DrawOp, Gradient, GradientId, Paint, Rgba, Scene, Stroke, build_scene,
};
