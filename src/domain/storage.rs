use super::SiteData;
use crate::error::Result;
use async_trait::async_trait;
use std::fmt;

/// Opaque token identifying the stored revision of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision(String);

impl Revision {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    pub path: String,
    pub content: String,
    pub revision: Revision,
}

/// Where the site's HTML pages are persisted.
///
/// Writes are conditional: `expected` must still be the stored revision,
/// otherwise the store answers with `SiteError::Conflict` and nothing is
/// written. Callers surface conflicts, they do not retry.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn fetch_document(&self, path: &str) -> Result<Document>;
    async fn write_document(
        &self,
        path: &str,
        content: &str,
        expected: &Revision,
        message: &str,
    ) -> Result<()>;
}

/// Local copy of the admin data, read through on load and written through
/// before every push.
pub trait DataCache: Send + Sync {
    fn load(&self) -> Result<Option<SiteData>>;
    fn save(&self, data: &SiteData) -> Result<()>;
}
