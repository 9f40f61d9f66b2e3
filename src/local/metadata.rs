//! Media type inference for local entities.
//!
//! # Responsibilities
//! - Map file extensions to media types
//! - Fall back to `application/octet-stream` for anything unknown
//!
//! # Design Decisions
//! - Extensions compare case-insensitively; media types are stored verbatim
//! - The table is per-registry so deployments can override entries without
//!   process-wide state

use std::collections::HashMap;

/// Media type served when no mapping matches.
pub const DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

const DEFAULT_MAPPINGS: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("js", "text/javascript"),
    ("json", "application/json"),
    ("txt", "text/plain"),
    ("xml", "application/xml"),
    ("svg", "image/svg+xml"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("ico", "image/x-icon"),
    ("webp", "image/webp"),
    ("pdf", "application/pdf"),
    ("zip", "application/zip"),
    ("gz", "application/gzip"),
    ("wasm", "application/wasm"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
];

/// Extension → media type registry.
#[derive(Debug, Clone)]
pub struct MediaTypeRegistry {
    mappings: HashMap<String, String>,
}

impl MediaTypeRegistry {
    /// Registry preloaded with the common web types.
    pub fn new() -> Self {
        let mut registry = Self {
            mappings: HashMap::new(),
        };
        for (extension, media_type) in DEFAULT_MAPPINGS {
            registry.register(extension, media_type);
        }
        registry
    }

    /// Register or override a mapping.
    pub fn register(&mut self, extension: &str, media_type: &str) {
        self.mappings
            .insert(extension.to_ascii_lowercase(), media_type.to_string());
    }

    /// Media type for an extension, if mapped.
    pub fn lookup(&self, extension: &str) -> Option<&str> {
        self.mappings
            .get(&extension.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Media type for a path, judged by its final segment's extension.
    pub fn media_type_of(&self, path: &str) -> &str {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        file_name
            .rsplit_once('.')
            .and_then(|(_, extension)| self.lookup(extension))
            .unwrap_or(DEFAULT_MEDIA_TYPE)
    }
}

impl Default for MediaTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_extensions_resolve() {
        let registry = MediaTypeRegistry::new();
        assert_eq!(registry.media_type_of("/docs/index.html"), "text/html");
        assert_eq!(registry.media_type_of("style.CSS"), "text/css");
        assert_eq!(registry.media_type_of("/a/b/data.json"), "application/json");
    }

    #[test]
    fn unknown_extension_falls_back() {
        let registry = MediaTypeRegistry::new();
        assert_eq!(registry.media_type_of("blob.xyz"), DEFAULT_MEDIA_TYPE);
        assert_eq!(registry.media_type_of("no_extension"), DEFAULT_MEDIA_TYPE);
    }

    #[test]
    fn dots_in_directories_do_not_confuse_lookup() {
        let registry = MediaTypeRegistry::new();
        assert_eq!(registry.media_type_of("/v1.2/readme"), DEFAULT_MEDIA_TYPE);
        assert_eq!(registry.media_type_of("/v1.2/readme.txt"), "text/plain");
    }

    #[test]
    fn overrides_replace_defaults() {
        let mut registry = MediaTypeRegistry::new();
        registry.register("js", "application/javascript");
        assert_eq!(registry.media_type_of("app.js"), "application/javascript");
    }
}
