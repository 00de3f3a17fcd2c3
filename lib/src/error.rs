use std::path::PathBuf;

/// Errors produced while loading, converting or saving an image
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    #[error("failed to open {path:?}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("unsupported output format: {extension:?}")]
    UnsupportedFormat { extension: String },

    #[error("failed to encode {path:?}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("charset must contain at least one character")]
    EmptyCharset,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
