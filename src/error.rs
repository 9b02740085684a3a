use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while configuring or rendering a styled QR code.
#[derive(Error, Debug)]
pub enum Error {
    /// A setter received a value outside its accepted range.
    #[error("invalid value: {0}")]
    Validation(String),

    /// The symbol encoder rejected the content.
    #[error("cannot encode content: {0}")]
    Encoding(String),

    #[error("font not found: {}", .0.display())]
    FontNotFound(PathBuf),

    #[error("cannot parse font: {}", .0.display())]
    InvalidFont(PathBuf),

    /// A canvas could not be allocated or drawn.
    #[error("render failed: {0}")]
    RenderFailure(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl Error {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
