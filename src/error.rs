use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("{} not found", .0.display())]
    IconNotFound(PathBuf),

    #[error("Failed to decode icon {}: {source}", path.display())]
    IconDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("No suitable font found (tried {})", format_candidates(candidates))]
    NoFont { candidates: Vec<PathBuf> },

    #[error("Font load error for {}: {reason}", path.display())]
    FontLoad { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encode error: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Layout has no elements to draw")]
    EmptyLayout,
}

fn format_candidates(candidates: &[PathBuf]) -> String {
    if candidates.is_empty() {
        return "no candidates".to_string();
    }
    candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
