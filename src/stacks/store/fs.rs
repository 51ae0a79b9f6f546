use super::{DataStore, Document};
use crate::error::{Result, StacksError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_DATA_DIR: &str = "data";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn document_path(&self, doc: Document) -> PathBuf {
        self.root.join(doc.file_name())
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            debug!(path = %path.display(), "creating data directory");
            fs::create_dir_all(path).map_err(StacksError::Io)?;
        }
        Ok(())
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl DataStore for FileStore {
    fn prepare(&mut self) -> Result<()> {
        self.ensure_dir(&self.root)
    }

    fn read_document(&self, doc: Document) -> Result<Option<String>> {
        let path = self.document_path(doc);
        if !path.exists() {
            debug!(path = %path.display(), "document not found");
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(StacksError::Io)?;
        debug!(path = %path.display(), bytes = content.len(), "read document");
        Ok(Some(content))
    }

    fn write_document(&mut self, doc: Document, content: &str) -> Result<()> {
        let path = self.document_path(doc);
        // Write beside the target and rename so a crash never leaves a truncated file.
        let tmp_path = self
            .root
            .join(format!(".{}-{}.tmp", doc.noun(), Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(StacksError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StacksError::Io(e));
        }
        debug!(path = %path.display(), bytes = content.len(), "wrote document");
        Ok(())
    }
}
