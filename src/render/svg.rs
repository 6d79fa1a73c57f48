use std::fmt::{self, Write as _};

use crate::{
    foundation::{
        error::{ForgeError, ForgeResult},
        math::fmt_trimmed,
    },
    scene::build::{Color, DrawOp, Gradient, Paint, Scene, Stroke},
};

/// Serialize a scene as a standalone SVG document.
#[tracing::instrument(level = "debug", skip(scene), fields(ops = scene.ops.len()))]
pub fn render_svg(scene: &Scene) -> ForgeResult<String> {
    let mut out = String::with_capacity(4096 + scene.ops.len() * 160);
    write_document(&mut out, scene)
        .map_err(|err| ForgeError::render(format!("write svg document: {err}")))?;
    Ok(out)
}

fn write_document(out: &mut String, scene: &Scene) -> fmt::Result {
    let (w, h) = (scene.canvas.width, scene.canvas.height);
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    )?;

    writeln!(out, "  <defs>")?;
    for gradient in &scene.gradients {
        write_gradient(out, gradient)?;
    }
    writeln!(out, "  </defs>")?;

    for op in &scene.ops {
        write_op(out, op)?;
    }

    writeln!(out, "</svg>")
}

fn write_gradient(out: &mut String, gradient: &Gradient) -> fmt::Result {
    writeln!(
        out,
        r#"    <linearGradient id="{}" x1="0%" x2="100%" y1="0%" y2="0%">"#,
        gradient.id.as_str()
    )?;
    for (offset, color) in &gradient.stops {
        let (css, alpha) = color.css_and_alpha();
        write!(
            out,
            r#"      <stop offset="{}%" stop-color="{css}""#,
            num(offset * 100.0)
        )?;
        if alpha < 1.0 {
            write!(out, r#" stop-opacity="{}""#, num(alpha))?;
        }
        writeln!(out, "/>")?;
    }
    writeln!(out, "    </linearGradient>")
}

fn write_op(out: &mut String, op: &DrawOp) -> fmt::Result {
    match op {
        DrawOp::Ellipse {
            ellipse,
            fill,
            opacity,
        } => {
            let c = ellipse.center();
            let r = ellipse.radii();
            write!(
                out,
                r#"  <ellipse cx="{}" cy="{}" rx="{}" ry="{}""#,
                num(c.x),
                num(c.y),
                num(r.x),
                num(r.y)
            )?;
            write_paint(out, "fill", *fill)?;
            write_opacity(out, *opacity)?;
            writeln!(out, "/>")
        }
        DrawOp::Path {
            path,
            fill,
            stroke,
            opacity,
        } => {
            write!(out, r#"  <path d="{}""#, path.to_svg())?;
            match fill {
                Some(paint) => write_paint(out, "fill", *paint)?,
                None => write!(out, r#" fill="none""#)?,
            }
            if let Some(stroke) = stroke {
                write_stroke(out, stroke)?;
            }
            write_opacity(out, *opacity)?;
            writeln!(out, "/>")
        }
        DrawOp::Text {
            text,
            anchor,
            font_size,
            font_weight,
            letter_spacing,
            fill,
        } => {
            write!(
                out,
                r#"  <text x="{}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="{}" font-weight="{font_weight}" letter-spacing="{}""#,
                num(anchor.x),
                num(anchor.y),
                num(*font_size),
                num(*letter_spacing)
            )?;
            write_color(out, "fill", *fill)?;
            writeln!(out, ">{}</text>", escape_xml(text))
        }
    }
}

fn write_stroke(out: &mut String, stroke: &Stroke) -> fmt::Result {
    write_paint(out, "stroke", stroke.paint)?;
    write!(out, r#" stroke-width="{}""#, num(stroke.width))?;
    if stroke.round_cap {
        write!(out, r#" stroke-linecap="round""#)?;
    }
    Ok(())
}

fn write_paint(out: &mut String, attr: &str, paint: Paint) -> fmt::Result {
    match paint {
        Paint::Solid(color) => write_color(out, attr, color),
        Paint::Gradient(id) => write!(out, r#" {attr}="url(#{})""#, id.as_str()),
    }
}

fn write_color(out: &mut String, attr: &str, color: Color) -> fmt::Result {
    let (css, alpha) = color.css_and_alpha();
    write!(out, r#" {attr}="{css}""#)?;
    if alpha < 1.0 {
        write!(out, r#" {attr}-opacity="{}""#, num(alpha))?;
    }
    Ok(())
}

fn write_opacity(out: &mut String, opacity: f64) -> fmt::Result {
    if opacity < 1.0 {
        write!(out, r#" opacity="{}""#, num(opacity))?;
    }
    Ok(())
}

fn num(v: f64) -> String {
    fmt_trimmed(v, 3)
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
