use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use log::{debug, info};
use rayon::prelude::*;

use crate::charset::Charset;
use crate::codec::{OutputFormat, load_image, output_path, save_image};
use crate::config::AsciiConfig;
use crate::downsample::downsample_to_cells;
use crate::error::AsciiError;
use crate::glyph::GlyphRenderer;

/// Character and color chosen for one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGlyph {
    pub glyph: char,
    pub color: Rgba<u8>,
}

/// Select a character and opaque color for every cell of a downsampled grid
///
/// # Returns
/// Row-major vec, one entry per grid pixel
pub fn select_cell_glyphs(grid: &RgbaImage, charset: &Charset) -> Vec<CellGlyph> {
    let (columns, rows) = grid.dimensions();
    let num_cells = (columns * rows) as usize;

    // Cells are independent, only the drawing pass needs the canvas
    (0..num_cells)
        .into_par_iter()
        .map(|cell_idx| {
            let x = (cell_idx as u32) % columns;
            let y = (cell_idx as u32) / columns;
            let pixel = grid.get_pixel(x, y);
            let rgb = [pixel[0], pixel[1], pixel[2]];

            CellGlyph {
                glyph: charset.select(rgb),
                color: Rgba([rgb[0], rgb[1], rgb[2], 255]),
            }
        })
        .collect()
}

/// Draw selected glyphs onto the canvas, one per cell
///
/// Cell `(x, y)` is drawn with its baseline origin at
/// `(x * cell.width, (y + 1) * cell.height)`.
pub fn rasterize_cells<R: GlyphRenderer + ?Sized>(
    canvas: &mut RgbaImage,
    cells: &[CellGlyph],
    columns: u32,
    renderer: &R,
) {
    if columns == 0 {
        return;
    }
    let cell = renderer.cell();

    for (cell_idx, cell_glyph) in cells.iter().enumerate() {
        let x = (cell_idx as u32) % columns;
        let y = (cell_idx as u32) / columns;
        let origin = ((x * cell.width) as i32, ((y + 1) * cell.height) as i32);
        renderer.draw_glyph(canvas, cell_glyph.glyph, origin, cell_glyph.color);
    }
}

/// Converts an image into colored ASCII art
///
/// 1. Downsample to one pixel per character cell (bilinear)
/// 2. Map each cell's brightness to a charset character
/// 3. Draw each character, tinted with the cell's color, on a blank canvas
///
/// # Arguments
/// * `input` - The source RGBA image
/// * `renderer` - Font backend; its cell size drives the grid
/// * `config` - Configuration parameters
///
/// # Returns
/// A canvas with the same dimensions as `input`
pub fn process_image<R: GlyphRenderer + ?Sized>(
    input: &RgbaImage,
    renderer: &R,
    config: &AsciiConfig,
) -> RgbaImage {
    let (width, height) = input.dimensions();
    let cell = renderer.cell();
    let charset = Charset::standard();

    // Step 1: Downsample to the character grid
    let grid = downsample_to_cells(input, cell);
    let (columns, rows) = grid.dimensions();
    debug!(
        "image {}x{} -> grid {}x{} ({}x{} cells)",
        width, height, columns, rows, cell.width, cell.height
    );

    // Step 2: Pick a glyph per cell
    let cells = select_cell_glyphs(&grid, &charset);

    // Step 3: Draw on a canvas of the original size
    let [r, g, b] = config.bg_color;
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]));
    rasterize_cells(&mut canvas, &cells, columns, renderer);

    canvas
}

/// Converts an image file and writes `<stem>_processed<ext>` beside it
///
/// The output format is resolved before decoding, so an unsupported
/// extension fails without creating any file.
///
/// # Returns
/// Path of the written file
pub fn convert_file<R: GlyphRenderer + ?Sized>(
    input: &Path,
    renderer: &R,
    config: &AsciiConfig,
) -> Result<PathBuf, AsciiError> {
    config.validate()?;

    let format = OutputFormat::from_path(input)?;
    let output = output_path(input)?;

    let source = load_image(input)?;
    let canvas = process_image(&source, renderer, config);
    save_image(&canvas, &output, format, config)?;

    info!("wrote {} as {:?}", output.display(), format);
    Ok(output)
}
