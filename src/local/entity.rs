//! Descriptor for a resolved local entity.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tokio::fs::File;

/// A readable local resource resolved under a context root.
///
/// Created per lookup; descriptors are not cached across requests.
#[derive(Debug, Clone)]
pub struct LocalEntity {
    relative_path: String,
    absolute_path: PathBuf,
    media_type: String,
    size: u64,
    modified: Option<SystemTime>,
}

impl LocalEntity {
    pub(crate) fn new(
        relative_path: String,
        absolute_path: PathBuf,
        media_type: String,
        size: u64,
        modified: Option<SystemTime>,
    ) -> Self {
        Self {
            relative_path,
            absolute_path,
            media_type,
            size,
            modified,
        }
    }

    /// The decoded request path this entity was resolved from.
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// Absolute location under the context root.
    pub fn path(&self) -> &Path {
        &self.absolute_path
    }

    /// Inferred media type.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Size in bytes at resolution time.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Last modification time, when the filesystem reports one.
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// Open the entity for reading.
    pub async fn open(&self) -> io::Result<File> {
        File::open(&self.absolute_path).await
    }
}
