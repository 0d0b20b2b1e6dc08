use super::backend::StorageBackend;
use crate::error::{NewsError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const DOCUMENT_PREFIX: &str = "article-";
const DOCUMENT_EXT: &str = ".json";

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    /// Creates a backend storing documents directly under `root`.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, id: &Uuid) -> PathBuf {
        self.root
            .join(format!("{}{}{}", DOCUMENT_PREFIX, id, DOCUMENT_EXT))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NewsError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_document(&self, id: &Uuid) -> Result<Option<String>> {
        match fs::read_to_string(self.document_path(id)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(NewsError::Io(err)),
        }
    }

    fn write_document(&self, id: &Uuid, document: &str) -> Result<()> {
        self.ensure_dir()?;

        let target_path = self.document_path(id);

        // Atomic Write
        let tmp_path = self.root.join(format!(".article-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, document).map_err(NewsError::Io)?;
        fs::rename(&tmp_path, target_path).map_err(NewsError::Io)?;

        Ok(())
    }

    fn delete_document(&self, id: &Uuid) -> Result<bool> {
        match fs::remove_file(self.document_path(id)) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(NewsError::Io(err)),
        }
    }

    fn list_document_ids(&self) -> Result<Vec<Uuid>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        let entries = fs::read_dir(&self.root).map_err(NewsError::Io)?;

        for entry in entries {
            let entry = entry.map_err(NewsError::Io)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            let uuid_part = name
                .strip_prefix(DOCUMENT_PREFIX)
                .and_then(|rest| rest.strip_suffix(DOCUMENT_EXT));
            if let Some(id) = uuid_part.and_then(|s| Uuid::parse_str(s).ok()) {
                ids.push(id);
            }
        }
        Ok(ids)
    }
}
