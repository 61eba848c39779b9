use thiserror::Error;

/// Failure reported by a host collaborator (vault read, fetch or overwrite)
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct HostError(pub String);

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors from turning bytes into pixels and back
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Errors that end an editing session (or prevent one from opening)
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("No active document")]
    NoActiveDocument,

    #[error("Document {path} has unsupported type {extension:?}")]
    UnsupportedDocumentType { path: String, extension: String },

    #[error("Failed to read document {path}: {source}")]
    DocumentRead {
        path: String,
        #[source]
        source: HostError,
    },

    #[error("No embedded image found in {path}")]
    NoEmbeddedImageFound { path: String },

    #[error("Image reference {reference:?} is unresolvable or not a supported image")]
    UnresolvableOrUnsupportedImageType { reference: String },

    #[error("Image resource {0} is already being edited")]
    ResourceBusy(String),

    #[error("Image failed to load: {0}")]
    ImageDecodeFailure(String),

    #[error("Failed to persist image {resource}: {reason}")]
    PersistenceFailure { resource: String, reason: String },
}

impl EditorError {
    /// The notice shown to the user when this error ends the operation
    pub fn notice(&self) -> &'static str {
        match self {
            Self::NoActiveDocument => "No active file found.",
            Self::UnsupportedDocumentType { .. } => "Active file is not a markdown file.",
            Self::DocumentRead { .. } => "Failed to read active file.",
            Self::NoEmbeddedImageFound { .. } => "No image found in the active file.",
            Self::UnresolvableOrUnsupportedImageType { .. } => "No valid image found in the active file.",
            Self::ResourceBusy(_) => "This image is already open for drawing.",
            Self::ImageDecodeFailure(_) => "Image failed to load.",
            Self::PersistenceFailure { .. } => "Failed to save image.",
        }
    }
}

pub type EditorResult<T> = Result<T, EditorError>;
