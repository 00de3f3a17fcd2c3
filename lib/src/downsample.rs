use crate::config::CellGeometry;
use image::{Rgba, RgbaImage, imageops};

/// Composite an image over black by scaling each color channel by its alpha
///
/// Alpha is kept. Fully transparent pixels become black whatever color they hide.
pub fn premultiply_alpha(input: &RgbaImage) -> RgbaImage {
    let mut output = input.clone();

    for pixel in output.pixels_mut() {
        let a = pixel[3] as u32;
        let scale = |c: u8| ((c as u32 * a + 127) / 255) as u8;
        *pixel = Rgba([scale(pixel[0]), scale(pixel[1]), scale(pixel[2]), pixel[3]]);
    }

    output
}

/// Downsample an image to one pixel per character cell
///
/// The target size is the number of whole cells that fit in the source
/// (floor division). The source is premultiplied by alpha first, so hidden
/// color under transparent pixels does not bleed into the samples. Resampling
/// uses a bilinear (triangle) filter.
///
/// # Arguments
/// * `input` - The source RGBA image
/// * `cell` - Character cell size in pixels
///
/// # Returns
/// An RGBA buffer of `(width / cell.width) x (height / cell.height)` pixels.
/// A source smaller than one cell yields an empty buffer.
pub fn downsample_to_cells(input: &RgbaImage, cell: CellGeometry) -> RgbaImage {
    let (width, height) = input.dimensions();
    let (columns, rows) = cell.grid_size(width, height);

    if columns == 0 || rows == 0 {
        return RgbaImage::new(columns, rows);
    }

    let premultiplied = premultiply_alpha(input);
    imageops::resize(&premultiplied, columns, rows, imageops::FilterType::Triangle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downsample_dimensions() {
        let img = RgbaImage::new(100, 100);
        let grid = downsample_to_cells(&img, CellGeometry::FONT_7X13);
        assert_eq!(grid.dimensions(), (14, 7));
    }

    #[test]
    fn test_downsample_exact_multiple() {
        let img = RgbaImage::new(70, 130);
        let grid = downsample_to_cells(&img, CellGeometry::FONT_7X13);
        assert_eq!(grid.dimensions(), (10, 10));
    }

    #[test]
    fn test_downsample_various_sizes() {
        let cell = CellGeometry { width: 7, height: 14 };
        for (w, h) in [(1, 1), (7, 14), (13, 27), (640, 480), (33, 200)] {
            let img = RgbaImage::new(w, h);
            let grid = downsample_to_cells(&img, cell);
            assert_eq!(grid.dimensions(), (w / 7, h / 14), "source {}x{}", w, h);
        }
    }

    #[test]
    fn test_downsample_smaller_than_cell() {
        let img = RgbaImage::from_pixel(5, 5, Rgba([255, 0, 0, 255]));
        let grid = downsample_to_cells(&img, CellGeometry::FONT_7X13);
        assert_eq!(grid.dimensions(), (0, 0));
        assert_eq!(grid.pixels().count(), 0);
    }

    #[test]
    fn test_downsample_one_dimension_too_small() {
        let img = RgbaImage::new(100, 10);
        let grid = downsample_to_cells(&img, CellGeometry::FONT_7X13);
        assert_eq!(grid.dimensions(), (14, 0));
    }

    #[test]
    fn test_downsample_preserves_uniform_color() {
        let img = RgbaImage::from_pixel(70, 130, Rgba([40, 120, 200, 255]));
        let grid = downsample_to_cells(&img, CellGeometry::FONT_7X13);
        for pixel in grid.pixels() {
            assert!((pixel[0] as i32 - 40).abs() <= 1);
            assert!((pixel[1] as i32 - 120).abs() <= 1);
            assert!((pixel[2] as i32 - 200).abs() <= 1);
        }
    }

    #[test]
    fn test_premultiply_alpha() {
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 0]));
        img.put_pixel(1, 0, Rgba([200, 100, 50, 255]));
        img.put_pixel(2, 0, Rgba([200, 100, 50, 128]));

        let out = premultiply_alpha(&img);

        assert_eq!(*out.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*out.get_pixel(1, 0), Rgba([200, 100, 50, 255]));
        assert_eq!(*out.get_pixel(2, 0), Rgba([100, 50, 25, 128]));
    }

    #[test]
    fn test_downsample_transparent_is_black() {
        let img = RgbaImage::from_pixel(70, 130, Rgba([255, 255, 255, 0]));
        let grid = downsample_to_cells(&img, CellGeometry::FONT_7X13);
        assert_eq!(grid.dimensions(), (10, 10));
        for pixel in grid.pixels() {
            assert_eq!((pixel[0], pixel[1], pixel[2]), (0, 0, 0));
        }
    }
}
