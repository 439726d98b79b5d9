//! CPU rasterizer for render frames.
//!
//! Exists so the look can be checked pixel by pixel and fingerprinted.
//! Coverage is binary (pixel centers only): no anti-aliasing, no font
//! shaping. Text is drawn as one solid block per character cell.

use std::io::{self, Write};

use crate::decorator::{CHAR_WIDTH_EM, LINE_HEIGHT_EM};
use crate::layout::Rect;
use crate::render::{Frame, Glyph, RenderCommand};
use crate::style::Color;

/// One 8-bit RGBA pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8 {
    /// Creates a pixel.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Quantizes a color.
    #[must_use]
    pub fn from_color(color: Color) -> Self {
        let [r, g, b, a] = color.to_array().map(to_channel);
        Self { r, g, b, a }
    }

    /// Returns true if every channel is within `tolerance` of `other`.
    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: u8) -> bool {
        self.r.abs_diff(other.r) <= tolerance
            && self.g.abs_diff(other.g) <= tolerance
            && self.b.abs_diff(other.b) <= tolerance
            && self.a.abs_diff(other.a) <= tolerance
    }
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Uniform scale plus translation: `p * scale + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Transform {
    scale: f32,
    offset: (f32, f32),
}

impl Transform {
    const IDENTITY: Self = Self {
        scale: 1.0,
        offset: (0.0, 0.0),
    };

    /// This transform applied after a scale by `factor` about `origin`.
    fn then_scale(self, factor: f32, origin: (f32, f32)) -> Self {
        Self {
            scale: self.scale * factor,
            offset: (
                self.scale * origin.0 * (1.0 - factor) + self.offset.0,
                self.scale * origin.1 * (1.0 - factor) + self.offset.1,
            ),
        }
    }

    fn rect(self, rect: Rect) -> Rect {
        Rect::new(
            rect.x * self.scale + self.offset.0,
            rect.y * self.scale + self.offset.1,
            rect.width * self.scale,
            rect.height * self.scale,
        )
    }

    fn length(self, length: f32) -> f32 {
        length * self.scale
    }
}

/// Signed distance from `(px, py)` to a rounded rectangle; negative inside.
fn rounded_rect_distance(rect: Rect, radius: f32, px: f32, py: f32) -> f32 {
    let half_w = rect.width * 0.5;
    let half_h = rect.height * 0.5;
    let radius = radius.clamp(0.0, half_w.min(half_h));
    let (cx, cy) = rect.center();

    let qx = (px - cx).abs() - (half_w - radius);
    let qy = (py - cy).abs() - (half_h - radius);
    let outside = qx.max(0.0).hypot(qy.max(0.0));
    let inside = qx.max(qy).min(0.0);
    outside + inside - radius
}

/// Distance from `(px, py)` to the segment `a`-`b`.
fn segment_distance(a: (f32, f32), b: (f32, f32), px: f32, py: f32) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq > 0.0 {
        (((px - a.0) * dx + (py - a.1) * dy) / length_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (px - (a.0 + t * dx)).hypot(py - (a.1 + t * dy))
}

/// Glyph outlines as polylines in unit coordinates.
fn glyph_strokes(glyph: Glyph) -> &'static [&'static [(f32, f32)]] {
    match glyph {
        Glyph::Checkmark => &[&[(0.15, 0.55), (0.4, 0.8), (0.85, 0.25)]],
        Glyph::Minus => &[&[(0.2, 0.5), (0.8, 0.5)]],
        Glyph::Xmark => &[&[(0.2, 0.2), (0.8, 0.8)], &[(0.8, 0.2), (0.2, 0.8)]],
        Glyph::Magnifier => &[&[(0.62, 0.62), (0.88, 0.88)]],
        Glyph::ArrowRight => &[&[(0.15, 0.5), (0.85, 0.5)], &[(0.55, 0.2), (0.85, 0.5), (0.55, 0.8)]],
        Glyph::Atlas(_) => &[],
    }
}

/// An RGBA pixel buffer that frames are painted into.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl Canvas {
    /// Creates a canvas cleared to `background`.
    #[must_use]
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba8::from_color(background); width as usize * height as usize],
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the canvas.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        (x < self.width && y < self.height).then(|| self.pixels[(y * self.width + x) as usize])
    }

    /// Raw RGBA bytes, row-major.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// CRC32 of the pixel bytes. Equal frames give equal fingerprints.
    #[must_use]
    pub fn fingerprint(&self) -> u32 {
        crc32fast::hash(self.as_bytes())
    }

    /// Paints every command of `frame`, in order.
    pub fn draw(&mut self, frame: &Frame) {
        let mut stack = vec![Transform::IDENTITY];

        for command in &frame.commands {
            let transform = stack.last().copied().unwrap_or(Transform::IDENTITY);
            match command {
                RenderCommand::Shadow {
                    bounds,
                    color,
                    corner_radius,
                    offset,
                } => {
                    let shape = transform.rect(bounds.translate(offset.0, offset.1));
                    self.fill_rounded(shape, transform.length(*corner_radius), *color);
                }
                RenderCommand::Fill {
                    bounds,
                    color,
                    corner_radius,
                } => {
                    self.fill_rounded(transform.rect(*bounds), transform.length(*corner_radius), *color);
                }
                RenderCommand::Stroke {
                    bounds,
                    color,
                    width,
                    corner_radius,
                } => {
                    self.stroke_rounded(
                        transform.rect(*bounds),
                        transform.length(*corner_radius),
                        transform.length(*width),
                        *color,
                    );
                }
                RenderCommand::Text {
                    text,
                    origin,
                    color,
                    font_size,
                    bold,
                } => self.text(transform, text, *origin, *font_size, *bold, *color),
                RenderCommand::Icon { bounds, glyph, tint } => {
                    self.icon(transform.rect(*bounds), *glyph, *tint);
                }
                RenderCommand::PushScale { factor, origin } => {
                    stack.push(transform.then_scale(*factor, *origin));
                }
                RenderCommand::PopScale => {
                    if stack.len() > 1 {
                        stack.pop();
                    }
                }
            }
        }
    }

    /// Writes the canvas as a binary PPM (alpha dropped).
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        let rgb: Vec<u8> = self
            .pixels
            .iter()
            .flat_map(|pixel| [pixel.r, pixel.g, pixel.b])
            .collect();
        out.write_all(&rgb)
    }

    fn fill_rounded(&mut self, rect: Rect, radius: f32, color: Color) {
        self.cover(rect, color, |px, py| rounded_rect_distance(rect, radius, px, py) <= 0.0);
    }

    fn stroke_rounded(&mut self, rect: Rect, radius: f32, width: f32, color: Color) {
        if width <= 0.0 {
            return;
        }
        let half = width * 0.5;
        let area = Rect::new(rect.x - half, rect.y - half, rect.width + width, rect.height + width);
        self.cover(area, color, |px, py| {
            rounded_rect_distance(rect, radius, px, py).abs() <= half
        });
    }

    fn text(&mut self, transform: Transform, text: &str, origin: (f32, f32), font_size: f32, bold: bool, color: Color) {
        let cell = font_size * CHAR_WIDTH_EM;
        let inset = if bold { 0.05 } else { 0.1 };
        let top = origin.1 + font_size * (LINE_HEIGHT_EM - 1.0) * 0.5 + font_size * 0.15;

        for (index, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let x = origin.0 + index as f32 * cell + cell * inset;
            let block = transform.rect(Rect::new(x, top, cell * (1.0 - inset * 2.0), font_size * 0.7));
            self.cover(block, color, |_, _| true);
        }
    }

    fn icon(&mut self, bounds: Rect, glyph: Glyph, tint: Color) {
        let edge = bounds.width.min(bounds.height);
        let half = (edge * 0.12).max(1.0) * 0.5;
        let point = |(u, v): (f32, f32)| (bounds.x + u * bounds.width, bounds.y + v * bounds.height);

        match glyph {
            Glyph::Atlas(_) => {
                let inner = Rect::new(
                    bounds.x + bounds.width * 0.15,
                    bounds.y + bounds.height * 0.15,
                    bounds.width * 0.7,
                    bounds.height * 0.7,
                );
                self.cover(inner, tint, |_, _| true);
            }
            Glyph::Magnifier => {
                let (cx, cy) = point((0.42, 0.42));
                let radius = edge * 0.28;
                self.cover(bounds, tint, |px, py| {
                    ((px - cx).hypot(py - cy) - radius).abs() <= half
                        || glyph_strokes(glyph)
                            .iter()
                            .any(|line| polyline_hit(line, &point, half, px, py))
                });
            }
            _ => {
                self.cover(bounds, tint, |px, py| {
                    glyph_strokes(glyph)
                        .iter()
                        .any(|line| polyline_hit(line, &point, half, px, py))
                });
            }
        }
    }

    /// Blends `color` into every pixel of `area` whose center passes `inside`.
    fn cover(&mut self, area: Rect, color: Color, inside: impl Fn(f32, f32) -> bool) {
        if color.a <= 0.0 || area.width <= 0.0 || area.height <= 0.0 {
            return;
        }
        let x0 = area.x.floor().max(0.0) as u32;
        let y0 = area.y.floor().max(0.0) as u32;
        let x1 = (area.right().ceil().max(0.0) as u32).min(self.width);
        let y1 = (area.bottom().ceil().max(0.0) as u32).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
                if inside(px, py) {
                    let index = (y * self.width + x) as usize;
                    self.pixels[index] = blend(self.pixels[index], color);
                }
            }
        }
    }
}

fn polyline_hit(
    line: &[(f32, f32)],
    point: &impl Fn((f32, f32)) -> (f32, f32),
    half: f32,
    px: f32,
    py: f32,
) -> bool {
    line.windows(2)
        .any(|pair| segment_distance(point(pair[0]), point(pair[1]), px, py) <= half)
}

/// Source-over blend of a straight-alpha color onto a pixel.
fn blend(dst: Rgba8, src: Color) -> Rgba8 {
    let sa = src.a.clamp(0.0, 1.0);
    let da = f32::from(dst.a) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba8::default();
    }
    let channel = |s: f32, d: u8| {
        let d = f32::from(d) / 255.0;
        (s * sa + d * da * (1.0 - sa)) / out_a
    };
    Rgba8::from_color(Color::rgba(
        channel(src.r, dst.r),
        channel(src.g, dst.g),
        channel(src.b, dst.b),
        out_a,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Renderer;

    const WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);
    const BLACK: Rgba8 = Rgba8::new(0, 0, 0, 255);

    fn paint(commands: Vec<RenderCommand>) -> Canvas {
        let mut canvas = Canvas::new(64, 64, Color::WHITE);
        canvas.draw(&Frame { commands });
        canvas
    }

    #[test]
    fn test_fill_covers_exact_pixels() {
        let canvas = paint(vec![RenderCommand::Fill {
            bounds: Rect::new(10.0, 10.0, 4.0, 4.0),
            color: Color::BLACK,
            corner_radius: 0.0,
        }]);

        assert_eq!(canvas.pixel(10, 10), Some(BLACK));
        assert_eq!(canvas.pixel(13, 13), Some(BLACK));
        assert_eq!(canvas.pixel(14, 13), Some(WHITE));
        assert_eq!(canvas.pixel(9, 10), Some(WHITE));
    }

    #[test]
    fn test_stroke_is_centered_on_edge() {
        let canvas = paint(vec![RenderCommand::Stroke {
            bounds: Rect::new(10.0, 10.0, 40.0, 40.0),
            color: Color::BLACK,
            width: 2.0,
            corner_radius: 0.0,
        }]);

        assert_eq!(canvas.pixel(8, 30), Some(WHITE));
        assert_eq!(canvas.pixel(9, 30), Some(BLACK));
        assert_eq!(canvas.pixel(10, 30), Some(BLACK));
        assert_eq!(canvas.pixel(11, 30), Some(WHITE));
    }

    #[test]
    fn test_blend_over_white() {
        let shaded = blend(WHITE, Color::BLACK.opacity(0.8));
        assert!(shaded.approx_eq(Rgba8::new(51, 51, 51, 255), 1));
    }

    #[test]
    fn test_scale_shrinks_about_origin() {
        let mut renderer = Renderer::new();
        renderer.push_scale(0.5, (32.0, 32.0));
        renderer.push(RenderCommand::Fill {
            bounds: Rect::new(0.0, 0.0, 64.0, 64.0),
            color: Color::BLACK,
            corner_radius: 0.0,
        });
        let frame = renderer.end_frame();
        let mut canvas = Canvas::new(64, 64, Color::WHITE);
        canvas.draw(&frame);

        assert_eq!(canvas.pixel(15, 32), Some(WHITE));
        assert_eq!(canvas.pixel(16, 32), Some(BLACK));
        assert_eq!(canvas.pixel(47, 32), Some(BLACK));
        assert_eq!(canvas.pixel(48, 32), Some(WHITE));
    }

    #[test]
    fn test_minus_glyph_is_tinted_bar() {
        let canvas = paint(vec![RenderCommand::Icon {
            bounds: Rect::new(0.0, 0.0, 20.0, 20.0),
            glyph: Glyph::Minus,
            tint: Color::BLUE,
        }]);

        assert_eq!(canvas.pixel(10, 10), Some(Rgba8::from_color(Color::BLUE)));
        assert_eq!(canvas.pixel(10, 3), Some(WHITE));
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let blank = Canvas::new(8, 8, Color::WHITE);
        let same = Canvas::new(8, 8, Color::WHITE);
        let dark = Canvas::new(8, 8, Color::BLACK);

        assert_eq!(blank.fingerprint(), same.fingerprint());
        assert_ne!(blank.fingerprint(), dark.fingerprint());
        assert_eq!(blank.as_bytes().len(), 8 * 8 * 4);
    }

    #[test]
    fn test_write_ppm_header() {
        let canvas = Canvas::new(2, 1, Color::BLACK);
        let mut out = Vec::new();
        canvas.write_ppm(&mut out).unwrap();

        assert!(out.starts_with(b"P6\n2 1\n255\n"));
        assert_eq!(out.len(), b"P6\n2 1\n255\n".len() + 6);
    }
}
