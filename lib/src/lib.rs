//! imgascii - raster image to colored ASCII art converter
//!
//! Downsamples an image to a grid of 7x13 character cells, picks a character
//! for each cell from its brightness, and draws that character in the cell's
//! color onto a black canvas of the original size.
//!
//! # Example
//! ```no_run
//! use imgascii::{AsciiConfig, MonoFontRenderer, process_image};
//!
//! let input = image::open("photo.jpg").unwrap().to_rgba8();
//! let output = process_image(&input, &MonoFontRenderer::default(), &AsciiConfig::default());
//! output.save("photo_ascii.png").unwrap();
//! ```

pub mod charset;
pub mod codec;
pub mod config;
pub mod downsample;
pub mod error;
pub mod glyph;
pub mod processor;

// Re-export main types for convenience
pub use charset::Charset;
pub use codec::OutputFormat;
pub use config::{AsciiConfig, CellGeometry};
pub use error::AsciiError;
pub use glyph::{GlyphRenderer, MonoFontRenderer};
pub use processor::{convert_file, process_image};
