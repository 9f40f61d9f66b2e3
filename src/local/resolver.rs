//! Context-relative entity resolution.
//!
//! # Responsibilities
//! - Resolve a decoded relative path into a readable entity under the
//!   context root
//! - Report misses as an explicit absence, never a failure
//!
//! # Design Decisions
//! - Paths that would escape the context root resolve to nothing
//! - Only regular files qualify; directory content lookup is someone
//!   else's job

use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::local::entity::LocalEntity;
use crate::local::metadata::MediaTypeRegistry;

/// Resolves decoded paths against a deployment context root.
#[derive(Debug, Clone)]
pub struct LocalEntityResolver {
    root: PathBuf,
    media_types: MediaTypeRegistry,
}

impl LocalEntityResolver {
    /// Resolver over the given context root, with the default media types.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            media_types: MediaTypeRegistry::new(),
        }
    }

    /// Replace the media type registry.
    pub fn with_media_types(mut self, media_types: MediaTypeRegistry) -> Self {
        self.media_types = media_types;
        self
    }

    /// The context root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a decoded path to a local entity.
    ///
    /// `None` covers every miss: nothing at the path, not a regular file,
    /// a path escaping the context root, or metadata the filesystem refuses
    /// to give. None of these are failures.
    pub async fn resolve(&self, decoded_path: &str) -> Option<LocalEntity> {
        let relative = decoded_path.trim_start_matches('/');
        if Path::new(relative)
            .components()
            .any(|component| matches!(component, Component::ParentDir))
        {
            warn!(path = decoded_path, "refusing path that escapes the context root");
            return None;
        }

        let absolute = self.root.join(relative);
        let metadata = match tokio::fs::metadata(&absolute).await {
            Ok(metadata) => metadata,
            Err(error) => {
                debug!(path = decoded_path, %error, "no local entity at path");
                return None;
            }
        };
        if !metadata.is_file() {
            debug!(path = decoded_path, "local entity is not a regular file");
            return None;
        }

        let media_type = self.media_types.media_type_of(decoded_path).to_string();
        Some(LocalEntity::new(
            decoded_path.to_string(),
            absolute,
            media_type,
            metadata.len(),
            metadata.modified().ok(),
        ))
    }
}
