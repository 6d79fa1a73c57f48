use std::{io::Cursor, path::Path, sync::Arc};

use anyhow::Context as _;

use crate::{
    foundation::error::{ForgeError, ForgeResult},
    render::svg::render_svg,
    scene::build::Scene,
};

/// Largest raster edge we are willing to allocate.
pub const MAX_RASTER_DIM: u32 = 16_384;

/// Decoded PNG-ready pixels, straight (non-premultiplied) RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8.
    pub rgba8: Vec<u8>,
}

/// Rasterize an SVG document at `scale` times its intrinsic size.
#[tracing::instrument(level = "debug", skip(svg))]
pub fn rasterize_svg(svg: &str, scale: f32) -> ForgeResult<RasterImage> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ForgeError::render(format!(
            "scale must be a positive finite number, got {scale}"
        )));
    }

    let opts = usvg::Options {
        fontdb: system_fontdb(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts).context("parse svg tree")?;

    let size = tree.size();
    let width = to_px(size.width() * scale)?;
    let height = to_px(size.height() * scale)?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ForgeError::render("failed to allocate pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let mut rgba8 = Vec::with_capacity(pixmap.pixels().len() * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba8.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    tracing::debug!(width, height, "rasterized barrel");
    Ok(RasterImage {
        width,
        height,
        rgba8,
    })
}

/// Encode as PNG bytes.
pub fn encode_png(image: &RasterImage) -> ForgeResult<Vec<u8>> {
    let buf = image::RgbaImage::from_raw(image.width, image.height, image.rgba8.clone())
        .ok_or_else(|| ForgeError::render("pixel buffer does not match dimensions"))?;
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(buf)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(bytes)
}

/// Render a scene straight to PNG bytes.
pub fn render_png(scene: &Scene, scale: f32) -> ForgeResult<Vec<u8>> {
    let image = rasterize_svg(&render_svg(scene)?, scale)?;
    encode_png(&image)
}

/// Render a scene and write the PNG to `path`, creating parent directories.
pub fn write_png(scene: &Scene, scale: f32, path: &Path) -> ForgeResult<()> {
    let bytes = render_png(scene, scale)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn to_px(v: f32) -> ForgeResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(ForgeError::render("raster has invalid width/height"));
    }
    let px = (v.ceil() as u32).max(1);
    if px > MAX_RASTER_DIM {
        return Err(ForgeError::render(format!(
            "raster size too large: {px} (max {MAX_RASTER_DIM})"
        )));
    }
    Ok(px)
}

fn system_fontdb() -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    Arc::new(db)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
