use crate::domain::{Document, DocumentStore, Revision};
use crate::error::{Result, SiteError};
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Site pages read from and written to a local working copy.
///
/// The revision of a page is the SHA-256 of its bytes, so a write only lands
/// when the file still holds what the caller last read.
#[derive(Clone)]
pub struct CheckoutStore {
    root: PathBuf,
    // Held from the revision check until the new content is on disk.
    write_lock: Arc<Mutex<()>>,
}

impl CheckoutStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_)));
        if escapes || path.is_empty() {
            return Err(SiteError::NotFound(path.to_string()));
        }
        Ok(self.root.join(relative))
    }

    async fn read(&self, path: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.resolve(path)?).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

pub fn content_revision(content: &str) -> Revision {
    let digest = Sha256::digest(content.as_bytes());
    Revision::new(digest.iter().map(|b| format!("{:02x}", b)).collect::<String>())
}

#[async_trait]
impl DocumentStore for CheckoutStore {
    async fn fetch_document(&self, path: &str) -> Result<Document> {
        let content = self
            .read(path)
            .await?
            .ok_or_else(|| SiteError::NotFound(path.to_string()))?;
        debug!("Read {} ({} bytes) from checkout", path, content.len());

        Ok(Document {
            path: path.to_string(),
            revision: content_revision(&content),
            content,
        })
    }

    async fn write_document(
        &self,
        path: &str,
        content: &str,
        expected: &Revision,
        message: &str,
    ) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let current = self
            .read(path)
            .await?
            .ok_or_else(|| SiteError::NotFound(path.to_string()))?;

        if content_revision(&current) != *expected {
            return Err(SiteError::Conflict(format!(
                "{} changed since revision {}",
                path, expected
            )));
        }

        fs::write(self.resolve(path)?, content).await?;
        info!("{}: {}", path, message);
        Ok(())
    }
}
