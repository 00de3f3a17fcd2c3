//! Glyph rasterization
//!
//! `GlyphRenderer` abstracts the bitmap font so the pipeline can be driven by
//! any font backend. `MonoFontRenderer` is the stock implementation on top of
//! the embedded-graphics X11 7x13 font.

use std::convert::Infallible;

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_7X13},
    pixelcolor::Rgb888,
    prelude::*,
    text::{Baseline, Text},
};
use image::{Rgba, RgbaImage};

use crate::config::CellGeometry;

/// Draws single characters of a fixed-width font onto an RGBA canvas
pub trait GlyphRenderer {
    /// Size of one character cell
    fn cell(&self) -> CellGeometry;

    /// Draw `glyph` with its baseline-left origin at `origin`
    ///
    /// Only foreground pixels are written; pixels outside the canvas are clipped.
    fn draw_glyph(&self, canvas: &mut RgbaImage, glyph: char, origin: (i32, i32), color: Rgba<u8>);
}

/// Renders glyphs from an embedded-graphics monospaced bitmap font
#[derive(Debug, Clone, Copy)]
pub struct MonoFontRenderer {
    font: &'static MonoFont<'static>,
}

impl MonoFontRenderer {
    pub fn new(font: &'static MonoFont<'static>) -> Self {
        Self { font }
    }
}

impl Default for MonoFontRenderer {
    fn default() -> Self {
        Self::new(&FONT_7X13)
    }
}

impl GlyphRenderer for MonoFontRenderer {
    fn cell(&self) -> CellGeometry {
        let size = self.font.character_size;
        CellGeometry {
            width: size.width + self.font.character_spacing,
            height: size.height,
        }
    }

    fn draw_glyph(&self, canvas: &mut RgbaImage, glyph: char, origin: (i32, i32), color: Rgba<u8>) {
        let mut buf = [0u8; 4];
        let text = glyph.encode_utf8(&mut buf);

        let style = MonoTextStyle::new(self.font, Rgb888::new(color[0], color[1], color[2]));
        let position = Point::new(origin.0, origin.1);

        let mut target = CanvasTarget { image: canvas };
        // Drawing into an RgbaImage cannot fail
        let Ok(_) = Text::with_baseline(text, position, style, Baseline::Alphabetic).draw(&mut target);
    }
}

/// Adapter exposing an `RgbaImage` as an embedded-graphics draw target
struct CanvasTarget<'a> {
    image: &'a mut RgbaImage,
}

impl OriginDimensions for CanvasTarget<'_> {
    fn size(&self) -> Size {
        let (width, height) = self.image.dimensions();
        Size::new(width, height)
    }
}

impl DrawTarget for CanvasTarget<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = self.image.dimensions();

        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x >= width || y >= height {
                continue;
            }
            self.image
                .put_pixel(x, y, Rgba([color.r(), color.g(), color.b(), 255]));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_pixels(img: &RgbaImage) -> usize {
        img.pixels()
            .filter(|p| p[0] != 0 || p[1] != 0 || p[2] != 0)
            .count()
    }

    #[test]
    fn test_cell_is_7x13() {
        let renderer = MonoFontRenderer::default();
        assert_eq!(renderer.cell(), CellGeometry::FONT_7X13);
    }

    #[test]
    fn test_draw_glyph_writes_color() {
        let renderer = MonoFontRenderer::default();
        let mut canvas = RgbaImage::from_pixel(7, 13, Rgba([0, 0, 0, 255]));
        renderer.draw_glyph(&mut canvas, '#', (0, 13), Rgba([200, 100, 50, 255]));

        assert!(lit_pixels(&canvas) > 0);
        for pixel in canvas.pixels().filter(|p| p[0] != 0) {
            assert_eq!(*pixel, Rgba([200, 100, 50, 255]));
        }
    }

    #[test]
    fn test_draw_glyph_forces_opaque_alpha() {
        let renderer = MonoFontRenderer::default();
        let mut canvas = RgbaImage::new(7, 13);
        renderer.draw_glyph(&mut canvas, '@', (0, 13), Rgba([255, 255, 255, 10]));

        for pixel in canvas.pixels().filter(|p| p[0] == 255) {
            assert_eq!(pixel[3], 255);
        }
    }

    #[test]
    fn test_draw_glyph_clips_outside_canvas() {
        let renderer = MonoFontRenderer::default();
        let mut canvas = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        renderer.draw_glyph(&mut canvas, '#', (-3, 2), Rgba([255, 255, 255, 255]));
        renderer.draw_glyph(&mut canvas, '#', (100, 100), Rgba([255, 255, 255, 255]));
        assert_eq!(canvas.dimensions(), (4, 4));
    }

    #[test]
    fn test_glyph_stays_near_its_cell() {
        let renderer = MonoFontRenderer::default();
        let mut canvas = RgbaImage::from_pixel(21, 39, Rgba([0, 0, 0, 255]));
        // Middle cell of a 3x3 grid
        renderer.draw_glyph(&mut canvas, 'M', (7, 26), Rgba([255, 255, 255, 255]));

        for (x, y, pixel) in canvas.enumerate_pixels() {
            if pixel[0] != 0 {
                assert!((7..14).contains(&x), "x {} outside cell column", x);
                assert!(y >= 13, "y {} above cell row", y);
            }
        }
    }
}
