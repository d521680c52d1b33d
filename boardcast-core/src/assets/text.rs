//! Text rasterization for the status line.
//!
//! Strings are shaped with Parley against the font configured in the script
//! and rendered to pixels once, when the `text` command executes; the engine
//! then composites the resulting image like any other.

use std::path::Path;

use anyhow::Context;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{BoardcastError, BoardcastResult};
use crate::render::composite::ImageRgba;

/// Font size used for the status text.
pub const STATUS_TEXT_SIZE_PX: f32 = 24.0;

/// RGBA8 brush color carried through Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrush(pub Rgba8);

/// Turns a string into pixels. The core treats this as an opaque capability;
/// tests substitute their own implementation.
pub trait RasterizeText {
    /// Rasterize `text` into a straight-RGBA8 image.
    fn rasterize(&mut self, text: &str) -> BoardcastResult<ImageRgba>;
}

/// Stand-in rasterizer for scripts with no `:font` configured. Any use of
/// the `text` command fails with a resource error pointing at the missing
/// configuration key.
#[derive(Clone, Copy, Debug, Default)]
pub struct MissingFont;

impl RasterizeText for MissingFont {
    fn rasterize(&mut self, _text: &str) -> BoardcastResult<ImageRgba> {
        Err(BoardcastError::resource(
            "the 'text' command requires a :font entry in the configuration",
        ))
    }
}

/// The production rasterizer: Parley shaping plus vello_cpu glyph rendering
/// of a single font loaded from the script configuration.
pub struct TextRasterizer {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    family_name: String,
    font: vello_cpu::peniko::FontData,
    color: Rgba8,
}

impl TextRasterizer {
    /// Build a rasterizer from raw TTF/OTF bytes. The status text renders in
    /// black.
    pub fn from_font_bytes(font_bytes: Vec<u8>) -> BoardcastResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            BoardcastError::resource("no font families registered from font bytes")
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| BoardcastError::resource("registered font family has no name"))?
            .to_string();

        let font =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font,
            color: Rgba8::BLACK,
        })
    }

    /// Build a rasterizer from a font file.
    pub fn from_font_path(path: &Path) -> BoardcastResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read font '{}'", path.display()))?;
        Self::from_font_bytes(bytes)
    }

    fn layout(&mut self, text: &str) -> parley::Layout<TextBrush> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(STATUS_TEXT_SIZE_PX));
        builder.push_default(parley::style::StyleProperty::Brush(TextBrush(self.color)));
        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

impl RasterizeText for TextRasterizer {
    fn rasterize(&mut self, text: &str) -> BoardcastResult<ImageRgba> {
        let layout = self.layout(text);
        let width = (layout.width().ceil() as u32).max(1);
        let height = (layout.height().ceil() as u32).max(1);
        let w: u16 = width
            .try_into()
            .map_err(|_| BoardcastError::resource("text raster width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| BoardcastError::resource("text raster height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush.0;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        let mut data = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        ImageRgba::from_raw(width, height, data)
    }
}

impl std::fmt::Debug for TextRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRasterizer")
            .field("family_name", &self.family_name)
            .field("color", &self.color)
            .finish()
    }
}

// The compositor works in straight alpha; vello_cpu produces premultiplied
// pixels.
fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        for c in 0..3 {
            px[c] = ((u16::from(px[c]) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}
