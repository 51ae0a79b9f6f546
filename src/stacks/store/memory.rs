use super::{DataStore, Document};
use crate::error::{Result, StacksError};
use std::collections::{HashMap, HashSet};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    documents: HashMap<Document, String>,
    failing_writes: HashSet<Document>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document with raw content, valid or not.
    pub fn with_document(mut self, doc: Document, content: &str) -> Self {
        self.documents.insert(doc, content.to_string());
        self
    }
}

#[cfg(test)]
impl InMemoryStore {
    /// Make every write to `doc` fail, to exercise partial saves.
    pub fn fail_writes_to(mut self, doc: Document) -> Self {
        self.failing_writes.insert(doc);
        self
    }

    pub fn document(&self, doc: Document) -> Option<&str> {
        self.documents.get(&doc).map(String::as_str)
    }
}

impl DataStore for InMemoryStore {
    fn prepare(&mut self) -> Result<()> {
        Ok(())
    }

    fn read_document(&self, doc: Document) -> Result<Option<String>> {
        Ok(self.documents.get(&doc).cloned())
    }

    fn write_document(&mut self, doc: Document, content: &str) -> Result<()> {
        if self.failing_writes.contains(&doc) {
            return Err(StacksError::Store(format!("write to {} rejected", doc)));
        }
        self.documents.insert(doc, content.to_string());
        Ok(())
    }
}
