//! # API Facade
//!
//! [`LibraryApi`] is the single owner of program state: the storage backend and the
//! in-memory [`Catalog`]. UI clients hold one `LibraryApi` and call its methods; the
//! commands do the actual work.
//!
//! The facade never prints. Every method returns `Result<CmdResult>` and leaves
//! presentation to the caller.
//!
//! `LibraryApi<S: DataStore>` is generic over the storage backend:
//! - Production: `LibraryApi<FileStore>`
//! - Testing: `LibraryApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{Book, Catalog};
use crate::store::DataStore;

pub struct LibraryApi<S: DataStore> {
    store: S,
    catalog: Catalog,
}

impl<S: DataStore> LibraryApi<S> {
    /// Start with an empty catalog. Call [`LibraryApi::load`] to read persisted state.
    pub fn new(store: S) -> Self {
        Self {
            store,
            catalog: Catalog::new(),
        }
    }

    pub fn load(&mut self) -> Result<commands::CmdResult> {
        commands::load::run(&self.store, &mut self.catalog)
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, &self.catalog)
    }

    pub fn add_book(&mut self, title: &str, author: &str, year: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.catalog, title, author, year)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn update_book(
        &mut self,
        id: u64,
        update: &commands::BookUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.catalog, id, update)
    }

    pub fn delete_book(
        &mut self,
        id: u64,
        confirmation: commands::Confirmation,
    ) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.catalog, id, confirmation)
    }

    pub fn find_book(&self, id: u64) -> Option<&Book> {
        commands::helpers::find_by_id(&self.catalog.books, id)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

pub use commands::helpers::parse_book_id;
pub use commands::{BookRow, BookUpdate, CmdMessage, CmdResult, Confirmation, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs::FileStore;
    use crate::store::memory::InMemoryStore;
    use crate::store::Document;
    use tempfile::TempDir;

    #[test]
    fn add_then_save_writes_books_document() {
        let dir = TempDir::new().unwrap();
        let mut api = LibraryApi::new(FileStore::new(dir.path()));
        api.add_book("Dune", "Herbert", "1965").unwrap();
        api.save().unwrap();

        let saved = std::fs::read_to_string(dir.path().join("books.json")).unwrap();
        assert!(saved.contains("\"title\": \"Dune\""));
    }

    #[test]
    fn load_replaces_catalog() {
        let books = r#"[{"id": 5, "title": "Emma", "author": "Austen", "year": "1815", "status": "available"}]"#;
        let mut api = LibraryApi::new(InMemoryStore::new().with_document(Document::Books, books));
        api.load().unwrap();

        assert_eq!(api.catalog().books.len(), 1);
        assert_eq!(api.find_book(5).unwrap().title, "Emma");

        api.add_book("Persuasion", "Austen", "1817").unwrap();
        assert!(api.find_book(6).is_some());
    }

    #[test]
    fn dispatches_crud_operations() {
        let mut api = LibraryApi::new(InMemoryStore::new());
        for title in ["A", "B", "C"] {
            api.add_book(title, "Author", "2000").unwrap();
        }

        api.update_book(1, &BookUpdate::new().year("1999")).unwrap();
        assert_eq!(api.find_book(1).unwrap().year, "1999");

        api.delete_book(2, Confirmation::Confirmed).unwrap();
        let listed = api.list_books().unwrap().listed_books;
        let ids: Vec<_> = listed.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
