//! # Storage Layer
//!
//! The [`DataStore`] trait moves whole documents in and out of persistent storage.
//! It knows nothing about books: serialization lives in `commands::load` and
//! `commands::save`, so every backend stores plain text.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON file per [`Document`] inside a data directory
//! - [`memory::InMemoryStore`]: a map of documents, for tests
//!
//! ## Storage Format
//!
//! ```text
//! data/
//! ├── books.json      # JSON array of book records
//! ├── members.json    # JSON array, opaque
//! ├── loans.json      # JSON array, opaque
//! └── config.json     # LibraryConfig (optional)
//! ```

use crate::error::Result;
use std::fmt;

pub mod fs;
pub mod memory;

/// The persisted documents, in the order they are loaded and saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    Books,
    Members,
    Loans,
}

impl Document {
    pub const ALL: [Document; 3] = [Document::Books, Document::Members, Document::Loans];

    pub fn file_name(&self) -> &'static str {
        match self {
            Document::Books => "books.json",
            Document::Members => "members.json",
            Document::Loans => "loans.json",
        }
    }

    /// Plural noun used in user-facing messages.
    pub fn noun(&self) -> &'static str {
        match self {
            Document::Books => "books",
            Document::Members => "members",
            Document::Loans => "loans",
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Abstract interface for document storage.
pub trait DataStore {
    /// Make sure documents can be written (e.g. create the data directory).
    fn prepare(&mut self) -> Result<()>;

    /// Read a document. `Ok(None)` means it does not exist yet.
    fn read_document(&self, doc: Document) -> Result<Option<String>>;

    /// Replace a document's contents entirely.
    fn write_document(&mut self, doc: Document, content: &str) -> Result<()>;
}
