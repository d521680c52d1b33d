//! CPU compositing primitives.
//!
//! All pixel data is straight (non-premultiplied) RGBA8, matching the
//! compositing contract of the sprite/background images the scripts supply.

use std::sync::Arc;

use crate::foundation::core::Coord;
use crate::foundation::error::{BoardcastError, BoardcastResult};

/// Immutable straight-RGBA8 image, cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRgba {
    width: u32,
    height: u32,
    data: Arc<Vec<u8>>,
}

impl ImageRgba {
    /// Wrap raw row-major RGBA8 bytes. Fails if the byte length does not
    /// match `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> BoardcastResult<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(BoardcastError::resource(format!(
                "image byte length {} does not match {}x{} rgba8",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data: Arc::new(data),
        })
    }

    /// A solid-color image, mostly useful in tests.
    pub fn solid(width: u32, height: u32, color: crate::foundation::core::Rgba8) -> Self {
        let px = [color.r, color.g, color.b, color.a];
        let data = px
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self {
            width,
            height,
            data: Arc::new(data),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Mutable frame buffer the engine draws into, reused across frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameCanvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameCanvas {
    /// A transparent-black canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Overwrite the whole canvas with `image`. The image must match the
    /// canvas size exactly.
    pub fn fill(&mut self, image: &ImageRgba) -> BoardcastResult<()> {
        if image.width() != self.width || image.height() != self.height {
            return Err(BoardcastError::resource(format!(
                "cannot fill {}x{} canvas with {}x{} image",
                self.width,
                self.height,
                image.width(),
                image.height()
            )));
        }
        self.data.copy_from_slice(image.data());
        Ok(())
    }
}

/// Alpha-blend `image` onto `canvas`, centered at `center`, with an extra
/// opacity multiplier in `[0, 1]`. Pixels falling outside the canvas are
/// clipped.
pub fn draw_centered(canvas: &mut FrameCanvas, image: &ImageRgba, center: Coord, opacity: f32) {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 {
        return;
    }
    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;

    let iw = image.width() as i64;
    let ih = image.height() as i64;
    let cw = canvas.width as i64;
    let ch = canvas.height as i64;

    let top = i64::from(center.y) - ih / 2;
    let left = i64::from(center.x) - iw / 2;

    let y0 = top.max(0);
    let y1 = (top + ih).min(ch);
    let x0 = left.max(0);
    let x1 = (left + iw).min(cw);
    if y0 >= y1 || x0 >= x1 {
        return;
    }

    let src = image.data();
    for y in y0..y1 {
        let sy = (y - top) as usize;
        let dst_row = (y as usize * canvas.width as usize + x0 as usize) * 4;
        let src_row = (sy * iw as usize + (x0 - left) as usize) * 4;
        let n = (x1 - x0) as usize * 4;
        let dst = &mut canvas.data[dst_row..dst_row + n];
        let src = &src[src_row..src_row + n];
        for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
            let sa = mul_div255(u16::from(s[3]), op);
            if sa == 0 {
                continue;
            }
            let inv = 255u16 - u16::from(sa);
            for i in 0..4 {
                d[i] = mul_div255(u16::from(s[i]), u16::from(sa))
                    .saturating_add(mul_div255(u16::from(d[i]), inv));
            }
        }
    }
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
