//! Image file I/O
//!
//! Decoding detects the input format from file content. Encoding follows the
//! input's extension, so the output is always written in the same format.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use image::buffer::ConvertBuffer;
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageError, ImageReader, RgbImage, RgbaImage};
use log::debug;

use crate::config::AsciiConfig;
use crate::error::AsciiError;

/// Encodings the converted image can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Gif,
}

impl OutputFormat {
    /// Resolve the format from a file extension, case-insensitively
    ///
    /// # Errors
    /// `AsciiError::UnsupportedFormat` for anything but png, jpg, jpeg and gif,
    /// including paths without an extension.
    pub fn from_path(path: &Path) -> Result<Self, AsciiError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "gif" => Ok(OutputFormat::Gif),
            _ => Err(AsciiError::UnsupportedFormat {
                extension: path
                    .extension()
                    .map(|ext| format!(".{}", ext.to_string_lossy()))
                    .unwrap_or_default(),
            }),
        }
    }
}

/// Path of the converted image: `<stem>_processed<ext>` in the input's directory
///
/// The extension is kept as written in the input path.
pub fn output_path(input: &Path) -> Result<PathBuf, AsciiError> {
    let (Some(stem), Some(extension)) = (input.file_stem(), input.extension()) else {
        return Err(AsciiError::UnsupportedFormat {
            extension: String::new(),
        });
    };

    let file_name = format!(
        "{}_processed.{}",
        stem.to_string_lossy(),
        extension.to_string_lossy()
    );
    Ok(input.with_file_name(file_name))
}

/// Open and decode an image, detecting its format from content
pub fn load_image(path: &Path) -> Result<RgbaImage, AsciiError> {
    let file = File::open(path).map_err(|source| AsciiError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|source| AsciiError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("decoding {} as {:?}", path.display(), reader.format());

    let image = reader.decode().map_err(|source| AsciiError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(image.to_rgba8())
}

/// Encode `canvas` to `path` in the given format
///
/// A failure after the file was created may leave a partial file behind.
pub fn save_image(
    canvas: &RgbaImage,
    path: &Path,
    format: OutputFormat,
    config: &AsciiConfig,
) -> Result<(), AsciiError> {
    let encode_err = |source: ImageError| AsciiError::Encode {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|e| encode_err(ImageError::IoError(e)))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Png => {
            canvas
                .write_with_encoder(PngEncoder::new(&mut writer))
                .map_err(encode_err)?;
        }
        OutputFormat::Jpeg => {
            // JPEG has no alpha channel
            let rgb: RgbImage = canvas.convert();
            rgb.write_with_encoder(JpegEncoder::new_with_quality(
                &mut writer,
                config.jpeg_quality,
            ))
            .map_err(encode_err)?;
        }
        OutputFormat::Gif => {
            // The GIF trailer is written when the encoder drops
            let mut encoder = GifEncoder::new(&mut writer);
            encoder
                .encode(
                    canvas.as_raw(),
                    canvas.width(),
                    canvas.height(),
                    ExtendedColorType::Rgba8,
                )
                .map_err(encode_err)?;
        }
    }

    writer
        .flush()
        .map_err(|e| encode_err(ImageError::IoError(e)))
}
