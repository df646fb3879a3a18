use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create export directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode recordings as json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to render plot: {0}")]
    Plot(String),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for ExportError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        ExportError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for ExportError {
    fn from(value: image::ImageError) -> Self {
        ExportError::Plot(value.to_string())
    }
}
