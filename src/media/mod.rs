//! # Media
//!
//! Resolution of a record's media reference to image bytes.
//!
//! The story core never depends on an image being present: a failed
//! resolution becomes [`MediaStatus::Unavailable`] and the panel shows a
//! placeholder instead.

mod error;

pub use error::MediaError;

use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// A media reference, split by where it points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaRef<'a> {
    Local(&'a Path),
    Remote(&'a str),
}

impl<'a> MediaRef<'a> {
    pub fn parse(reference: &'a str) -> Self {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            MediaRef::Remote(reference)
        } else {
            MediaRef::Local(Path::new(reference))
        }
    }
}

/// Resolves media references to raw image bytes.
pub trait MediaResolver {
    fn resolve(&self, reference: &str) -> Result<Vec<u8>, MediaError>;
}

/// Reads local references from below a media directory.
///
/// Remote URLs are reported as unavailable; nothing is fetched over the
/// network.
#[derive(Debug, Clone)]
pub struct FsMediaResolver {
    root: PathBuf,
}

impl FsMediaResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn locate(&self, reference: &str, path: &Path) -> Result<PathBuf, MediaError> {
        let escapes = path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
        if escapes {
            return Err(MediaError::OutsideRoot {
                reference: reference.to_string(),
            });
        }
        Ok(self.root.join(path))
    }
}

impl MediaResolver for FsMediaResolver {
    fn resolve(&self, reference: &str) -> Result<Vec<u8>, MediaError> {
        match MediaRef::parse(reference) {
            MediaRef::Remote(url) => Err(MediaError::Remote {
                url: url.to_string(),
            }),
            MediaRef::Local(path) => {
                let full = self.locate(reference, path)?;
                std::fs::read(&full).map_err(|e| {
                    if e.kind() == std::io::ErrorKind::NotFound {
                        MediaError::NotFound { path: full }
                    } else {
                        MediaError::Io {
                            path: full,
                            source: e,
                        }
                    }
                })
            }
        }
    }
}

/// Image container format, sniffed from the leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Webp,
    Unknown,
}

impl ImageFormat {
    pub fn sniff(bytes: &[u8]) -> Self {
        match bytes {
            [0xFF, 0xD8, 0xFF, ..] => ImageFormat::Jpeg,
            [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => ImageFormat::Png,
            [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => ImageFormat::Gif,
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => ImageFormat::Webp,
            _ => ImageFormat::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Png => "PNG",
            ImageFormat::Gif => "GIF",
            ImageFormat::Webp => "WebP",
            ImageFormat::Unknown => "unknown format",
        }
    }
}

/// Availability of a record's image, as shown to the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MediaStatus {
    Available { format: ImageFormat, bytes: usize },
    Unavailable { reason: String },
}

impl MediaStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, MediaStatus::Available { .. })
    }

    pub fn display_message(&self) -> String {
        match self {
            MediaStatus::Available { format, bytes } => {
                format!("{}, {}", format.label(), format_size(*bytes))
            }
            MediaStatus::Unavailable { reason } => format!("Image unavailable: {}", reason),
        }
    }
}

/// Resolve `reference` and summarize the result. Failures are logged and
/// never propagated.
pub fn probe(resolver: &dyn MediaResolver, reference: &str) -> MediaStatus {
    match resolver.resolve(reference) {
        Ok(bytes) => MediaStatus::Available {
            format: ImageFormat::sniff(&bytes),
            bytes: bytes.len(),
        },
        Err(e) => {
            tracing::warn!(reference, error = %e, "Media unavailable");
            MediaStatus::Unavailable {
                reason: e.display_message(),
            }
        }
    }
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1_000_000 {
        format!("{:.1} MB", bytes as f64 / 1_000_000.0)
    } else if bytes >= 1_000 {
        format!("{:.1} KB", bytes as f64 / 1_000.0)
    } else {
        format!("{} B", bytes)
    }
}
