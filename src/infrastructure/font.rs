//! System font lookup for card text.
//!
//! The first usable sans-serif face on the system is loaded once and kept
//! for the life of the process. When nothing usable is installed the
//! rasterizer paints block glyphs instead.

use std::sync::OnceLock;

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use tiny_skia::{Path, PathBuilder};
use ttf_parser::{Face, GlyphId};

/// Families tried in order when looking for a face.
const FAMILIES: &[Family<'static>] = &[
    Family::SansSerif,
    Family::Name("DejaVu Sans"),
    Family::Name("Liberation Sans"),
    Family::Name("Noto Sans"),
    Family::Name("Helvetica"),
];

/// Raw bytes of a font file plus the face index inside it.
#[derive(Debug)]
pub struct FontData {
    family: String,
    data: Vec<u8>,
    index: u32,
}

impl FontData {
    /// Parse the face. Loading already checked that this succeeds.
    #[must_use]
    pub fn face(&self) -> Option<Face<'_>> {
        Face::parse(&self.data, self.index).ok()
    }

    #[must_use]
    pub fn family(&self) -> &str {
        &self.family
    }
}

/// The process-wide sans-serif face, if the system has one.
pub fn system_sans() -> Option<&'static FontData> {
    static FONT: OnceLock<Option<FontData>> = OnceLock::new();
    FONT.get_or_init(load_system_sans).as_ref()
}

fn load_system_sans() -> Option<FontData> {
    let mut db = Database::new();
    db.load_system_fonts();

    let query = Query {
        families: FAMILIES,
        weight: Weight::NORMAL,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };
    // Fall back to whatever face is installed when no listed family matches.
    let Some(id) = db.query(&query).or_else(|| db.faces().next().map(|f| f.id)) else {
        tracing::warn!("No system fonts found, card text will be drawn as blocks");
        return None;
    };

    let family = db
        .face(id)
        .and_then(|info| info.families.first().map(|(name, _)| name.clone()))
        .unwrap_or_default();
    let font = db.with_face_data(id, |data, index| FontData {
        family,
        data: data.to_vec(),
        index,
    })?;

    if font.face().is_none() {
        tracing::warn!(family = %font.family, "Failed to parse system font");
        return None;
    }

    tracing::debug!(family = %font.family, "Loaded system font");
    Some(font)
}

/// A glyph run laid out on one line, in logical pixels.
pub struct TextRun {
    pub path: Option<Path>,
    pub width: f32,
}

/// Shape `text` left to right starting at `(x, baseline)`, stopping before
/// the first glyph that would cross `x + max_width`.
#[must_use]
pub fn layout_line(face: &Face<'_>, text: &str, size: f32, x: f32, baseline: f32, max_width: f32) -> TextRun {
    let scale = size / f32::from(face.units_per_em());
    let mut builder = GlyphOutlineBuilder::new(scale, x, baseline);

    let mut pen = 0.0;
    for ch in text.chars() {
        let glyph = face.glyph_index(ch).unwrap_or(GlyphId(0));
        let advance = f32::from(face.glyph_hor_advance(glyph).unwrap_or(0)) * scale;
        if pen + advance > max_width {
            break;
        }
        builder.x_offset = x + pen;
        face.outline_glyph(glyph, &mut builder);
        pen += advance;
    }

    TextRun {
        path: builder.finish(),
        width: pen,
    }
}

/// Distance from the top of a line box of height `size` to its baseline.
#[must_use]
pub fn ascent(face: &Face<'_>, size: f32) -> f32 {
    let ascender = f32::from(face.ascender());
    let height = ascender - f32::from(face.descender());
    if height <= 0.0 {
        return size * 0.8;
    }
    size * ascender / height
}

/// Converts font units into a `tiny_skia` path, flipping the y axis.
struct GlyphOutlineBuilder {
    builder: PathBuilder,
    scale: f32,
    x_offset: f32,
    y_offset: f32,
}

impl GlyphOutlineBuilder {
    fn new(scale: f32, x_offset: f32, y_offset: f32) -> Self {
        Self {
            builder: PathBuilder::new(),
            scale,
            x_offset,
            y_offset,
        }
    }

    #[inline]
    fn tx(&self, x: f32) -> f32 {
        x * self.scale + self.x_offset
    }

    #[inline]
    fn ty(&self, y: f32) -> f32 {
        self.y_offset - y * self.scale
    }

    fn finish(self) -> Option<Path> {
        self.builder.finish()
    }
}

impl ttf_parser::OutlineBuilder for GlyphOutlineBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.tx(x), self.ty(y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.tx(x), self.ty(y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder
            .quad_to(self.tx(x1), self.ty(y1), self.tx(x), self.ty(y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.tx(x1),
            self.ty(y1),
            self.tx(x2),
            self.ty(y2),
            self.tx(x),
            self.ty(y),
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
