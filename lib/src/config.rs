use crate::error::AsciiError;

/// Size of one character cell in pixels
///
/// Drives both the downsampling target and the glyph placement stride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGeometry {
    pub width: u32,
    pub height: u32,
}

impl CellGeometry {
    /// Cell of the X11 7x13 fixed font
    pub const FONT_7X13: CellGeometry = CellGeometry {
        width: 7,
        height: 13,
    };

    /// Number of whole cells that fit in an image of the given size
    ///
    /// Sources smaller than one cell yield a zero dimension. A cell with a
    /// zero dimension yields an empty `(0, 0)` grid.
    pub fn grid_size(&self, image_width: u32, image_height: u32) -> (u32, u32) {
        if self.width == 0 || self.height == 0 {
            return (0, 0);
        }
        (image_width / self.width, image_height / self.height)
    }
}

impl Default for CellGeometry {
    fn default() -> Self {
        Self::FONT_7X13
    }
}

/// Configuration for ASCII art conversion
#[derive(Debug, Clone)]
pub struct AsciiConfig {
    /// Canvas fill behind the glyphs
    pub bg_color: [u8; 3], // RGB, default black [0, 0, 0]

    /// Quality used when the output is JPEG
    pub jpeg_quality: u8, // 1-100, default 75
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            bg_color: [0, 0, 0],
            jpeg_quality: 75,
        }
    }
}

impl AsciiConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), AsciiError> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(AsciiError::InvalidConfig(format!(
                "jpeg_quality must be between 1 and 100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AsciiConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_jpeg_quality() {
        let mut config = AsciiConfig::default();
        config.jpeg_quality = 0;
        assert!(config.validate().is_err());

        config.jpeg_quality = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_grid_size_floors() {
        let cell = CellGeometry::FONT_7X13;
        assert_eq!(cell.grid_size(100, 100), (14, 7));
        assert_eq!(cell.grid_size(7, 13), (1, 1));
    }

    #[test]
    fn test_grid_size_smaller_than_cell() {
        let cell = CellGeometry::FONT_7X13;
        assert_eq!(cell.grid_size(6, 12), (0, 0));
        assert_eq!(cell.grid_size(50, 12), (7, 0));
    }

    #[test]
    fn test_grid_size_zero_cell() {
        assert_eq!(CellGeometry { width: 0, height: 13 }.grid_size(100, 100), (0, 0));
        assert_eq!(CellGeometry { width: 7, height: 0 }.grid_size(100, 100), (0, 0));
    }
}
