use std::{io, path::Path};

use thiserror::Error;

use crate::{Bitmap, BmpError};

/// Errors from [Bitmap::from_path].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read bitmap file")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Decode(#[from] BmpError),
}

impl Bitmap {
    /// Read and parse a BMP file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let data = std::fs::read(path)?;
        Ok(Self::parse(&data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_io_error() {
        let err = Bitmap::from_path("/nonexistent/segment-text/logo.bmp").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
