use crate::error::Result;
use uuid::Uuid;

/// Abstract interface for raw document I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while ArticleStore handles the "what" (serialization, not-found rules).
pub trait StorageBackend {
    /// Read the raw JSON document for an article.
    /// Returns Ok(None) if the document does not exist.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_document(&self, id: &Uuid) -> Result<Option<String>>;

    /// Write a document, replacing any previous version.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_document(&self, id: &Uuid, document: &str) -> Result<()>;

    /// Delete a document. Returns false if there was nothing to delete.
    fn delete_document(&self, id: &Uuid) -> Result<bool>;

    /// List all document IDs found in storage.
    fn list_document_ids(&self) -> Result<Vec<Uuid>>;
}
