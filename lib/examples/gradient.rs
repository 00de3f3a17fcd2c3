/// Gradient example: render a synthetic image as ASCII art
///
/// Draws a red/green gradient with a bright circle and converts it
use imgascii::{AsciiConfig, GlyphRenderer, MonoFontRenderer, process_image};
use image::{Rgba, RgbaImage};

fn main() {
    println!("imgascii - Gradient Example");
    println!("===========================\n");

    let width = 350;
    let height = 260;

    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 80.0;

    let img = RgbaImage::from_fn(width, height, |x, y| {
        let dx = x as f32 - center_x;
        let dy = y as f32 - center_y;
        if (dx * dx + dy * dy).sqrt() < radius {
            Rgba([255, 255, 255, 255])
        } else {
            let r = (x * 255 / width) as u8;
            let g = (y * 255 / height) as u8;
            Rgba([r, g, 0, 255])
        }
    });

    let renderer = MonoFontRenderer::default();
    let cell = renderer.cell();
    println!("Created test image: {}x{}", width, height);
    println!(
        "Grid: {}x{} cells of {}x{} pixels\n",
        width / cell.width,
        height / cell.height,
        cell.width,
        cell.height
    );

    let output = process_image(&img, &renderer, &AsciiConfig::default());

    img.save("gradient_input.png").expect("Failed to save input");
    output
        .save("gradient_output.png")
        .expect("Failed to save output");

    println!("Saved input to:  gradient_input.png");
    println!("Saved output to: gradient_output.png");
}
