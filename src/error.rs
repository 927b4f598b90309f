use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    #[error("This script is for Windows only")]
    UnsupportedPlatform,
    #[error("ImageMagick installation not found")]
    NotFound,
    #[error("not a usable ImageMagick installation: {}", .0.display())]
    Invalid(PathBuf),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}
