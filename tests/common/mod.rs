#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

use draw_over_image::error::HostError;
use draw_over_image::{DocumentRef, EditorConfig, ResolvedImage, ResourceId, SessionController, Vault};
use futures::FutureExt;
use futures::future::BoxFuture;
use image::{ImageFormat, Rgba, RgbaImage};
use parking_lot::Mutex;

const URL_PREFIX: &str = "mem://";

/// Vault backed by in-memory maps
#[derive(Default)]
pub struct MemoryVault {
    pub active: Mutex<Option<DocumentRef>>,
    pub documents: Mutex<HashMap<String, String>>,
    pub files: Mutex<HashMap<String, Vec<u8>>>,
    pub fail_writes: Mutex<bool>,
    pub writes: Mutex<usize>,
}

impl MemoryVault {
    pub fn with_note(path: &str, content: &str) -> Self {
        let vault = Self::default();
        vault.documents.lock().insert(path.to_owned(), content.to_owned());
        *vault.active.lock() = Some(DocumentRef::from_path(path));
        vault
    }

    pub fn add_file(&self, path: &str, bytes: Vec<u8>) {
        self.files.lock().insert(path.to_owned(), bytes);
    }

    pub fn file(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().get(path).cloned()
    }
}

impl Vault for MemoryVault {
    fn active_document(&self) -> Option<DocumentRef> {
        self.active.lock().clone()
    }

    fn read_document<'a>(&'a self, document: &'a DocumentRef) -> BoxFuture<'a, Result<String, HostError>> {
        async move {
            self.documents
                .lock()
                .get(&document.path)
                .cloned()
                .ok_or_else(|| HostError::new(format!("{} does not exist", document.path)))
        }
        .boxed()
    }

    fn resolve(&self, reference: &str) -> Option<ResolvedImage> {
        if !self.files.lock().contains_key(reference) {
            return None;
        }
        Some(ResolvedImage {
            resource: ResourceId(reference.to_owned()),
            extension: DocumentRef::from_path(reference).extension,
            url: format!("{URL_PREFIX}{reference}"),
        })
    }

    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Vec<u8>, HostError>> {
        async move {
            let path = url
                .strip_prefix(URL_PREFIX)
                .ok_or_else(|| HostError::new(format!("bad url {url}")))?;
            self.file(path).ok_or_else(|| HostError::new(format!("{path} not found")))
        }
        .boxed()
    }

    fn overwrite<'a>(&'a self, resource: &'a ResourceId, bytes: Vec<u8>) -> BoxFuture<'a, Result<(), HostError>> {
        async move {
            if *self.fail_writes.lock() {
                return Err(HostError::new("disk full"));
            }
            *self.writes.lock() += 1;
            self.files.lock().insert(resource.0.clone(), bytes);
            Ok(())
        }
        .boxed()
    }
}

/// First `![alt](target)` or `![[target]]` in the note
pub fn find_embed(content: &str) -> Option<String> {
    let start = content.find("![")?;
    let rest = &content[start + 2..];
    if let Some(inner) = rest.strip_prefix('[') {
        let end = inner.find("]]")?;
        return Some(inner[..end].to_owned());
    }
    let close = rest.find("](")?;
    let target = &rest[close + 2..];
    let end = target.find(')')?;
    Some(target[..end].to_owned())
}

pub type Controller = SessionController<MemoryVault, fn(&str) -> Option<String>>;

pub fn controller(vault: Arc<MemoryVault>, config: EditorConfig) -> Controller {
    let locator: fn(&str) -> Option<String> = find_embed;
    SessionController::new(vault, Arc::new(locator), config).unwrap()
}

pub fn png(image: &RgbaImage) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

pub fn white_png(width: u32, height: u32) -> Vec<u8> {
    png(&RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255])))
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
