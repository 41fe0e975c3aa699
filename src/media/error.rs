//! Media resolution errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Media file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read media file {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Media reference escapes the media directory: {reference}")]
    OutsideRoot { reference: String },

    #[error("Remote media is not fetched: {url}")]
    Remote { url: String },
}

impl MediaError {
    /// Short message suitable for the story panel.
    pub fn display_message(&self) -> String {
        match self {
            MediaError::NotFound { path } => match path.file_name() {
                Some(name) => format!("{} not found", name.to_string_lossy()),
                None => "file not found".to_string(),
            },
            MediaError::Io { source, .. } => format!("read failed ({})", source.kind()),
            MediaError::OutsideRoot { .. } => "path outside media directory".to_string(),
            MediaError::Remote { .. } => "Remote image not downloaded".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = MediaError::NotFound {
            path: PathBuf::from("/srv/media/panda.jpg"),
        };
        assert_eq!(err.display_message(), "panda.jpg not found");

        let err = MediaError::Remote {
            url: "https://example.org/a.jpg".into(),
        };
        assert_eq!(err.display_message(), "Remote image not downloaded");
        assert_eq!(
            err.to_string(),
            "Remote media is not fetched: https://example.org/a.jpg"
        );
    }
}
