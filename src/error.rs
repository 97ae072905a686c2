use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tiler operations
#[derive(Error, Diagnostic, Debug)]
pub enum TilerError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tiler::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to decode {path}: {message}")]
    #[diagnostic(code(tiler::decode))]
    Decode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to encode {path}: {message}")]
    #[diagnostic(code(tiler::encode))]
    Encode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Unsupported image format '{extension}' for {path}")]
    #[diagnostic(
        code(tiler::unsupported_format),
        help("Supported extensions are .jpg, .jpeg, .png and .gif")
    )]
    UnsupportedFormat {
        path: std::path::PathBuf,
        extension: String,
    },
}

pub type Result<T> = std::result::Result<T, TilerError>;
