use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode icon container {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode {}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("icon container {} has no frames", .0.display())]
    EmptyContainer(PathBuf),
    #[error("frame {}x{} in {} has a malformed pixel buffer", width, height, path.display())]
    InvalidFrame {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}

impl IconError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        IconError::Io { path: path.to_path_buf(), source }
    }

    pub fn decode(path: &Path, source: io::Error) -> Self {
        IconError::Decode { path: path.to_path_buf(), source }
    }

    pub fn image(path: &Path, source: image::ImageError) -> Self {
        IconError::Image { path: path.to_path_buf(), source }
    }

    /// True when the underlying cause is a missing file.
    pub fn is_not_found(&self) -> bool {
        match self {
            IconError::Io { source, .. } | IconError::Decode { source, .. } => {
                source.kind() == io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}
