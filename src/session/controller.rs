use std::sync::Arc;

use super::{Session, SessionRegistry};
use crate::config::{ConfigError, EditorConfig};
use crate::error::{EditorError, EditorResult};
use crate::host::{ImageLocator, ResourceId, Vault};
use crate::loader::SurfaceLoader;
use crate::tools::StrokeEngine;

/// What a successful save wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub resource: ResourceId,
    pub bytes_written: usize,
}

impl SaveReport {
    pub fn notice(&self) -> &'static str {
        "Image saved successfully."
    }
}

/// Opens, saves and cancels drawing sessions against the host's storage.
pub struct SessionController<V, L> {
    vault: Arc<V>,
    locator: Arc<L>,
    config: EditorConfig,
    registry: SessionRegistry,
}

impl<V: Vault, L: ImageLocator> SessionController<V, L> {
    /// Fails if `config` does not validate, so sessions are never opened on
    /// an empty canvas or with a zero-sized brush.
    pub fn new(vault: Arc<V>, locator: Arc<L>, config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            vault,
            locator,
            config,
            registry: SessionRegistry::new(),
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// Open a session on the image embedded in the active document.
    ///
    /// Each check fails fast with its own error; nothing is loaded until the
    /// image reference resolves to a supported file that no other session
    /// holds.
    pub async fn open(&self) -> EditorResult<Session> {
        let document = self.vault.active_document().ok_or_else(|| {
            log::warn!("No active document to draw on");
            EditorError::NoActiveDocument
        })?;

        if !self.config.is_supported_document(&document.extension) {
            log::warn!("Active document {} is not a {} file", document.path, self.config.document_extension);
            return Err(EditorError::UnsupportedDocumentType {
                path: document.path.clone(),
                extension: document.extension.clone(),
            });
        }

        let content = self.vault.read_document(&document).await.map_err(|source| {
            log::error!("Error reading active file {}: {}", document.path, source);
            EditorError::DocumentRead {
                path: document.path.clone(),
                source,
            }
        })?;

        let reference = self
            .locator
            .find_image_reference(&content)
            .filter(|reference| !reference.is_empty())
            .ok_or_else(|| EditorError::NoEmbeddedImageFound {
                path: document.path.clone(),
            })?;

        let resolved = self
            .vault
            .resolve(&reference)
            .filter(|resolved| self.config.is_supported_image(&resolved.extension))
            .ok_or_else(|| {
                log::warn!("Image reference {:?} is not a supported stored image", reference);
                EditorError::UnresolvableOrUnsupportedImageType {
                    reference: reference.clone(),
                }
            })?;

        let lease = self.registry.try_acquire(&resolved.resource).ok_or_else(|| {
            log::warn!("Image {} already has an open session", resolved.resource);
            EditorError::ResourceBusy(resolved.resource.to_string())
        })?;

        // A failed load drops the lease with everything else.
        let loader = SurfaceLoader::new(
            self.config.canvas_width,
            self.config.canvas_height,
            self.config.resample_filter,
        );
        let surface = loader.load(self.vault.as_ref(), &resolved.url).await?;

        let engine = StrokeEngine::new(self.config.brush_size, self.config.interpolate_strokes);
        let session = Session::new(document, surface, engine, lease);
        log::info!(
            "Opened session {} on {} from {}",
            session.id(),
            session.resource(),
            session.document().path
        );
        Ok(session)
    }

    /// Encode the surface and overwrite the resource with it.
    ///
    /// The session ends here whatever the outcome. Nothing is written unless
    /// encoding succeeded, and a failed write is not retried.
    pub async fn save(&self, session: Session) -> EditorResult<SaveReport> {
        let resource = session.resource().clone();

        let bytes = session.encode().map_err(|err| {
            log::error!("Error encoding session {}: {}", session.id(), err);
            EditorError::PersistenceFailure {
                resource: resource.to_string(),
                reason: err.to_string(),
            }
        })?;
        let bytes_written = bytes.len();

        let outcome = self.vault.overwrite(&resource, bytes).await;
        log::debug!("Closing session {}", session.id());
        drop(session);

        match outcome {
            Ok(()) => {
                log::info!("Image saved successfully: {} ({} bytes)", resource, bytes_written);
                Ok(SaveReport { resource, bytes_written })
            }
            Err(err) => {
                log::error!("Error saving image {}: {}", resource, err);
                Err(EditorError::PersistenceFailure {
                    resource: resource.to_string(),
                    reason: err.to_string(),
                })
            }
        }
    }

    /// Discard the session without touching the stored image
    pub fn cancel(&self, session: Session) {
        log::info!("Cancelled session {} on {}", session.id(), session.resource());
    }
}
