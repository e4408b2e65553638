// Copyright 2025 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A `DrawContext` that writes SVG, for `ringchart_demo`.

use std::fmt::Write as _;

use kurbo::{Arc, Point, Rect, Shape, Vec2};
use peniko::Color;
use ringchart::{DrawContext, EffectFrame, TextStyle};

#[derive(Debug)]
pub(crate) struct SvgCanvas {
    view_box: Rect,
    background: Color,
    body: String,
}

impl SvgCanvas {
    pub(crate) fn new(view_box: Rect, background: Color) -> Self {
        Self {
            view_box,
            background,
            body: String::new(),
        }
    }

    /// Wraps everything drawn so far in a group carrying the transition effect.
    pub(crate) fn to_svg_string(&self, effect: EffectFrame) -> String {
        let vb = self.view_box;
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
            vb.x0,
            vb.y0,
            vb.width(),
            vb.height(),
            vb.width(),
            vb.height()
        );
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            vb.x0,
            vb.y0,
            vb.width(),
            vb.height()
        );
        write_paint_attr(&mut out, "fill", self.background);
        out.push_str("/>\n");

        if effect.is_identity() {
            out.push_str(&self.body);
        } else {
            let c = vb.center();
            let _ = writeln!(
                out,
                r#"<g transform="rotate({} {} {})" opacity="{}">"#,
                effect.rotation.to_degrees(),
                c.x,
                c.y,
                effect.opacity
            );
            out.push_str(&self.body);
            out.push_str("</g>\n");
        }
        out.push_str("</svg>\n");
        out
    }
}

impl DrawContext for SvgCanvas {
    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        line_width: f64,
        color: Color,
    ) {
        let arc = Arc::new(
            center,
            Vec2::new(radius, radius),
            start_angle,
            end_angle - start_angle,
            0.0,
        );
        let d = arc.to_path(0.1).to_svg();
        let _ = write!(self.body, r#"<path d="{d}" fill="none""#);
        write_paint_attr(&mut self.body, "stroke", color);
        let _ = writeln!(self.body, r#" stroke-width="{line_width}"/>"#);
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        let c = rect.center();
        let _ = write!(
            self.body,
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}""#,
            c.x,
            c.y,
            rect.width() * 0.5,
            rect.height() * 0.5
        );
        write_paint_attr(&mut self.body, "fill", color);
        self.body.push_str("/>\n");
    }

    fn draw_text(&mut self, text: &str, rect: Rect, style: &TextStyle, color: Color) {
        // A nested viewport clips the text to its box.
        let _ = write!(
            self.body,
            r#"<svg x="{}" y="{}" width="{}" height="{}" overflow="hidden"><text x="0" y="0" font-size="{}" font-family="{}" font-weight="{}" dominant-baseline="hanging""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            style.font_size,
            escape_xml(style.family.as_css_family()),
            style.weight.0,
        );
        write_paint_attr(&mut self.body, "fill", color);
        let _ = writeln!(self.body, ">{}</text></svg>", escape_xml(text));
    }
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    let _ = write!(
        out,
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    );
    if rgba.a != 255 {
        let _ = write!(out, r#" {name}-opacity="{}""#, f64::from(rgba.a) / 255.0);
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
