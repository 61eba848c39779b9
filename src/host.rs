//! Boundary to the application that embeds the editor.
//!
//! The host owns the documents and the stored image files. The editor only
//! sees them through these traits, which are handed to
//! [`SessionController::new`](crate::session::SessionController::new).

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

use crate::error::HostError;

/// The document currently focused in the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub path: String,
    pub extension: String,
}

impl DocumentRef {
    /// Build a reference, taking the extension from the path
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let extension = std::path::Path::new(&path)
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, extension }
    }
}

/// Identity of a stored binary resource; saving overwrites exactly this one
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub String);

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A reference that resolved to a stored file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub resource: ResourceId,
    /// File extension of the stored resource, without the dot
    pub extension: String,
    /// Location the image bytes can be fetched from
    pub url: String,
}

/// Read and write access to the host's storage.
pub trait Vault: Send + Sync {
    /// The document the user is looking at, if any
    fn active_document(&self) -> Option<DocumentRef>;

    fn read_document<'a>(&'a self, document: &'a DocumentRef) -> BoxFuture<'a, Result<String, HostError>>;

    /// Resolve a link target to a stored file. `None` when nothing is stored there.
    fn resolve(&self, reference: &str) -> Option<ResolvedImage>;

    /// Bytes behind a URL returned by [`Vault::resolve`]
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Vec<u8>, HostError>>;

    /// Replace the full contents of a stored resource
    fn overwrite<'a>(&'a self, resource: &'a ResourceId, bytes: Vec<u8>) -> BoxFuture<'a, Result<(), HostError>>;
}

/// Finds the embedded image a document points to.
pub trait ImageLocator: Send + Sync {
    /// The first embedded image link target in `content`
    fn find_image_reference(&self, content: &str) -> Option<String>;
}

impl<F> ImageLocator for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn find_image_reference(&self, content: &str) -> Option<String> {
        self(content)
    }
}
