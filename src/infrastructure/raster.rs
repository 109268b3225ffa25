//! Software rasterizer for the card view.
//!
//! Paints a [`CardView`] into an RGBA bitmap at a given scale and encodes it
//! as PNG. Layout is expressed in logical pixels and multiplied by the scale
//! factor when painting. Text uses the system sans-serif face; on a system
//! without fonts each glyph is painted as a block. Image avatars are painted
//! as a tinted disc since nothing is fetched over the network.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Transform};
use ttf_parser::Face;

use super::font::{self, FontData};
use crate::application::renderer::{Avatar, CardView};
use crate::domain::{AppError, Color, Result};

/// Scale used when no device pixel ratio is available.
pub const DEFAULT_SCALE: f32 = 2.0;

/// Largest width or height the surface may have, in physical pixels.
pub const MAX_DIMENSION: u32 = 16_384;

/// Largest total pixel count of the surface (256 MiB of RGBA).
pub const MAX_PIXELS: u64 = 64 * 1024 * 1024;

const FRAME_PADDING: f32 = 24.0;
const CARD_WIDTH: f32 = 360.0;
const CARD_PADDING: f32 = 24.0;
const CARD_RADIUS: f32 = 16.0;
const AVATAR_SIZE: f32 = 56.0;
const HEADER_GAP: f32 = 16.0;
const SECTION_GAP: f32 = 16.0;
const NAME_SIZE: f32 = 20.0;
const TITLE_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 14.0;
const BODY_LINE_HEIGHT: f32 = 20.0;
const LINK_ROW_HEIGHT: f32 = 28.0;
const LINK_ROW_GAP: f32 = 8.0;
const INITIAL_SIZE: f32 = 22.0;
const GLYPH_ADVANCE: f32 = 0.6;

/// Pick the scale factor: the device pixel ratio when it is usable, else
/// [`DEFAULT_SCALE`].
#[must_use]
pub fn effective_scale(pixel_ratio: Option<f32>) -> f32 {
    match pixel_ratio {
        Some(ratio) if ratio.is_finite() && ratio > 0.0 => ratio,
        _ => DEFAULT_SCALE,
    }
}

/// Logical geometry of a card, computed before painting.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub width: f32,
    pub height: f32,
    bio_lines: Vec<String>,
    bio_top: f32,
    links_top: f32,
}

impl CardLayout {
    /// Measure a view.
    #[must_use]
    pub fn measure(view: &CardView) -> Self {
        let content_width = CARD_WIDTH - 2.0 * CARD_PADDING;
        let card_top = FRAME_PADDING;

        let bio_top = card_top + CARD_PADDING + AVATAR_SIZE + HEADER_GAP;
        let bio_lines = wrap(&view.bio, chars_per_line(content_width, BODY_SIZE));
        let bio_height = BODY_LINE_HEIGHT * bio_lines.len() as f32;

        let links_top = bio_top + bio_height + SECTION_GAP;
        let links_height = view.links.as_ref().map_or(0.0, |links| {
            let n = links.len() as f32;
            n * LINK_ROW_HEIGHT + (n - 1.0).max(0.0) * LINK_ROW_GAP + SECTION_GAP
        });

        let card_bottom = bio_top + bio_height + links_height + CARD_PADDING;

        Self {
            width: CARD_WIDTH + 2.0 * FRAME_PADDING,
            height: card_bottom + FRAME_PADDING,
            bio_lines,
            bio_top,
            links_top,
        }
    }

    /// Physical size of the surface at `scale`.
    #[must_use]
    pub fn pixel_size(&self, scale: f32) -> (u32, u32) {
        (to_pixels(self.width * scale), to_pixels(self.height * scale))
    }
}

/// Paint a view with the system font. Transparent regions take `background`.
///
/// # Errors
/// Returns error if the surface would exceed [`MAX_DIMENSION`] on a side or
/// [`MAX_PIXELS`] in total.
pub fn paint_card(view: &CardView, scale: f32, background: Color) -> Result<RgbaImage> {
    let face = font::system_sans().and_then(FontData::face);
    paint_card_with(view, scale, background, face)
}

/// Paint a view with an explicit face; `None` paints block glyphs.
///
/// # Errors
/// Returns error if the surface is empty or too large.
pub fn paint_card_with(
    view: &CardView,
    scale: f32,
    background: Color,
    face: Option<Face<'_>>,
) -> Result<RgbaImage> {
    let layout = CardLayout::measure(view);
    let (width, height) = layout.pixel_size(scale);
    check_surface(width, height)?;

    let mut canvas = Canvas::new(width, height, scale, face)?;
    canvas.fill(background);
    let tokens = &view.tokens;

    // Card surface with a one pixel subtle border.
    let card_x = FRAME_PADDING;
    let card_y = FRAME_PADDING;
    let card_h = layout.height - 2.0 * FRAME_PADDING;
    canvas.fill_rounded_rect(card_x, card_y, CARD_WIDTH, card_h, CARD_RADIUS, tokens.subtle);
    canvas.fill_rounded_rect(
        card_x + 1.0,
        card_y + 1.0,
        CARD_WIDTH - 2.0,
        card_h - 2.0,
        CARD_RADIUS - 1.0,
        tokens.surface,
    );

    // Header: avatar and identity.
    let left = card_x + CARD_PADDING;
    let top = card_y + CARD_PADDING;
    let radius = AVATAR_SIZE / 2.0;
    match &view.avatar {
        Avatar::Initial(letter) => {
            canvas.fill_circle(left + radius, top + radius, radius, tokens.subtle);
            let letter_w = canvas.text_width(INITIAL_SIZE, letter);
            canvas.draw_text(
                left + radius - letter_w / 2.0,
                top + radius - INITIAL_SIZE / 2.0,
                INITIAL_SIZE,
                letter,
                tokens.primary,
                AVATAR_SIZE,
            );
        }
        Avatar::Image { .. } => {
            canvas.fill_circle(left + radius, top + radius, radius, tokens.secondary);
            canvas.fill_circle(left + radius, top + radius, radius * 0.4, tokens.surface);
        }
    }

    let identity_x = left + AVATAR_SIZE + HEADER_GAP;
    let identity_w = CARD_WIDTH - CARD_PADDING - (identity_x - card_x);
    canvas.draw_text(identity_x, top + 6.0, NAME_SIZE, &view.name, tokens.text, identity_w);
    canvas.draw_text(identity_x, top + 34.0, TITLE_SIZE, &view.title, tokens.primary, identity_w);

    // Bio.
    let content_w = CARD_WIDTH - 2.0 * CARD_PADDING;
    for (i, line) in layout.bio_lines.iter().enumerate() {
        let y = layout.bio_top + i as f32 * BODY_LINE_HEIGHT + (BODY_LINE_HEIGHT - BODY_SIZE) / 2.0;
        canvas.draw_text(left, y, BODY_SIZE, line, tokens.text, content_w);
    }

    // Links, when present.
    if let Some(links) = &view.links {
        for (i, link) in links.iter().enumerate() {
            let y = layout.links_top + i as f32 * (LINK_ROW_HEIGHT + LINK_ROW_GAP);
            canvas.fill_rounded_rect(left, y, content_w, LINK_ROW_HEIGHT, 8.0, tokens.subtle);
            canvas.draw_text(
                left + 12.0,
                y + (LINK_ROW_HEIGHT - BODY_SIZE) / 2.0,
                BODY_SIZE,
                &link.text,
                tokens.primary,
                content_w - 24.0,
            );
        }
    }

    canvas.into_image()
}

/// Encode a bitmap as PNG.
///
/// # Errors
/// Returns error if the encoder fails.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| AppError::raster_from("PNG encoding failed", e))?;
    Ok(bytes)
}

fn check_surface(width: u32, height: u32) -> Result<()> {
    let area = u64::from(width) * u64::from(height);
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION || area > MAX_PIXELS {
        return Err(AppError::raster(format!(
            "surface of {width}x{height} pixels is outside the supported range"
        )));
    }
    Ok(())
}

/// A scaled `tiny_skia` surface. Drawing calls take logical coordinates.
struct Canvas<'f> {
    pixmap: Pixmap,
    transform: Transform,
    face: Option<Face<'f>>,
}

impl<'f> Canvas<'f> {
    fn new(width: u32, height: u32, scale: f32, face: Option<Face<'f>>) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| AppError::raster(format!("cannot allocate a {width}x{height} surface")))?;
        Ok(Self {
            pixmap,
            transform: Transform::from_scale(scale, scale),
            face,
        })
    }

    /// Fill the whole surface with an opaque color.
    fn fill(&mut self, color: Color) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, 255));
    }

    /// The painted surface. Every pixel is opaque, so the premultiplied
    /// bytes are also the straight RGBA bytes.
    fn into_image(self) -> Result<RgbaImage> {
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        RgbaImage::from_raw(width, height, self.pixmap.take())
            .ok_or_else(|| AppError::raster("surface buffer has the wrong size"))
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        self.pixmap
            .fill_path(path, &paint(color), FillRule::Winding, self.transform, None);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        if let Some(rect) = Rect::from_xywh(x, y, w, h) {
            self.pixmap.fill_rect(rect, &paint(color), self.transform, None);
        }
    }

    fn fill_rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
        if let Some(path) = rounded_rect_path(x, y, w, h, r) {
            self.fill_path(&path, color);
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
        if let Some(path) = PathBuilder::from_circle(cx, cy, r) {
            self.fill_path(&path, color);
        }
    }

    /// Advance width of a single line of text.
    fn text_width(&self, size: f32, text: &str) -> f32 {
        match &self.face {
            Some(face) => font::layout_line(face, text, size, 0.0, 0.0, f32::MAX).width,
            None => GLYPH_ADVANCE * size * text.chars().count() as f32,
        }
    }

    /// Paint a single line of text whose line box starts at `top`, clipped
    /// to `max_width`.
    fn draw_text(&mut self, x: f32, top: f32, size: f32, text: &str, color: Color, max_width: f32) {
        let run = self.face.as_ref().map(|face| {
            let baseline = top + font::ascent(face, size);
            font::layout_line(face, text, size, x, baseline, max_width)
        });
        if let Some(run) = run {
            if let Some(path) = run.path {
                self.fill_path(&path, color);
            }
            return;
        }

        let advance = GLYPH_ADVANCE * size;
        for (i, ch) in text.chars().enumerate() {
            let gx = x + i as f32 * advance;
            if gx + advance > x + max_width {
                break;
            }
            if ch.is_whitespace() {
                continue;
            }
            // Block height follows the character so different text paints differently.
            let h = size * (0.4 + 0.05 * (u32::from(ch) % 8) as f32);
            self.fill_rect(gx + advance * 0.1, top + size * 0.85 - h, advance * 0.8, h, color);
        }
    }
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

/// Rounded rectangle built from cubic corner arcs.
fn rounded_rect_path(x: f32, y: f32, w: f32, h: f32, r: f32) -> Option<Path> {
    // 4/3 * tan(pi/8), the cubic approximation of a quarter circle.
    const KAPPA: f32 = 0.552_284_8;

    let r = r.min(w / 2.0).min(h / 2.0).max(0.0);
    let k = r * KAPPA;
    let (right, bottom) = (x + w, y + h);

    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(right - r, y);
    pb.cubic_to(right - r + k, y, right, y + r - k, right, y + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
    pb.line_to(x + r, bottom);
    pb.cubic_to(x + r - k, bottom, x, bottom - r + k, x, bottom - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
    pb.close();
    pb.finish()
}

fn chars_per_line(width: f32, size: f32) -> usize {
    ((width / (GLYPH_ADVANCE * size)).floor() as usize).max(1)
}

/// Greedy word wrap by character count; over-long words are split.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_len = 0;
        for word in paragraph.split_whitespace() {
            let mut chars: Vec<char> = word.chars().collect();
            while chars.len() > max_chars {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = chars.split_off(max_chars);
                lines.push(chars.into_iter().collect());
                chars = rest;
            }
            let word_len = chars.len();
            if line_len > 0 && line_len + 1 + word_len > max_chars {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(chars);
            line_len += word_len;
        }
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn to_pixels(value: f32) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.ceil().min(u32::MAX as f32) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::renderer::render;
    use crate::domain::{Link, Profile, ThemeId};

    fn view(links: usize) -> CardView {
        let profile = Profile {
            name: "Jane Doe".into(),
            links: (0..links).map(|i| Link::new(format!("L{i}"), "")).collect(),
            ..Default::default()
        };
        render(&profile, &ThemeId::SoftMono.theme().tokens)
    }

    #[test]
    fn test_effective_scale_fallback() {
        assert_eq!(effective_scale(None), 2.0);
        assert_eq!(effective_scale(Some(0.0)), 2.0);
        assert_eq!(effective_scale(Some(-1.0)), 2.0);
        assert_eq!(effective_scale(Some(f32::NAN)), 2.0);
        assert_eq!(effective_scale(Some(1.5)), 1.5);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("", 10), vec![String::new()]);
        assert_eq!(wrap("a\nb", 10), vec!["a", "b"]);
    }

    #[test]
    fn test_links_add_height() {
        let none = CardLayout::measure(&view(0));
        let two = CardLayout::measure(&view(2));
        assert!(two.height > none.height);
        assert_eq!(none.width, two.width);
    }

    #[test]
    fn test_paint_scales_surface() {
        let layout = CardLayout::measure(&view(1));
        let image = paint_card(&view(1), 2.0, Color::rgb(1, 2, 3)).unwrap();
        assert_eq!(image.dimensions(), layout.pixel_size(2.0));
        assert_eq!(image.width(), ((360.0 + 48.0) * 2.0) as u32);
    }

    #[test]
    fn test_transparent_frame_takes_background() {
        let bg = Color::rgb(10, 20, 30);
        let image = paint_card(&view(0), 1.0, bg).unwrap();
        assert_eq!(image.get_pixel(0, 0).0, [10, 20, 30, 255]);
        assert!(image.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn test_card_surface_is_painted() {
        let image = paint_card(&view(0), 1.0, Color::rgb(0, 0, 0)).unwrap();
        // Inside the card padding, away from avatar and text.
        let surface = ThemeId::SoftMono.theme().tokens.surface;
        assert_eq!(image.get_pixel(200, 170).0, surface.to_rgba());
    }

    #[test]
    fn test_oversized_surface_fails() {
        let err = paint_card(&view(0), 1000.0, Color::rgb(0, 0, 0)).unwrap_err();
        assert!(err.is_raster());
    }

    #[test]
    fn test_surface_area_is_bounded() {
        // Each side stays under MAX_DIMENSION, the total does not.
        let (width, height) = CardLayout::measure(&view(0)).pixel_size(40.0);
        assert!(width <= MAX_DIMENSION && height <= MAX_DIMENSION);
        assert!(u64::from(width) * u64::from(height) > MAX_PIXELS);

        let err = paint_card(&view(0), 40.0, Color::rgb(0, 0, 0)).unwrap_err();
        assert!(err.is_raster());
    }

    #[test]
    fn test_encode_png_signature() {
        let image = paint_card(&view(2), 1.0, Color::rgb(255, 255, 255)).unwrap();
        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    fn named(name: &str) -> CardView {
        let profile = Profile {
            name: name.into(),
            ..Default::default()
        };
        render(&profile, &ThemeId::SoftMono.theme().tokens)
    }

    #[test]
    fn test_distinct_text_paints_distinct_images() {
        let bg = Color::rgb(255, 255, 255);
        let alice = paint_card(&named("Alice Smith"), 1.0, bg).unwrap();
        let brian = paint_card(&named("Brian Jones"), 1.0, bg).unwrap();
        assert_eq!(alice.dimensions(), brian.dimensions());
        assert_ne!(encode_png(&alice).unwrap(), encode_png(&brian).unwrap());
    }

    #[test]
    fn test_block_glyphs_follow_text() {
        let bg = Color::rgb(255, 255, 255);
        let alice = paint_card_with(&named("Alice Smith"), 1.0, bg, None).unwrap();
        let brian = paint_card_with(&named("Brian Jones"), 1.0, bg, None).unwrap();
        assert_ne!(alice.as_raw(), brian.as_raw());
    }

    #[test]
    fn test_name_is_painted_in_text_color() {
        let view = named("MMMM");
        let image = paint_card_with(&view, 1.0, Color::rgb(255, 255, 255), None).unwrap();
        let text = view.tokens.text.to_rgba();
        // The name line sits right of the avatar in the header.
        let painted = (120..200)
            .flat_map(|x| (54..74).map(move |y| (x, y)))
            .any(|(x, y)| image.get_pixel(x, y).0 == text);
        assert!(painted);
    }
}
