//! Load every document into the catalog.
//!
//! Each document is handled on its own: a missing file empties its collection, a
//! file that cannot be read or parsed leaves the collection exactly as it was, and
//! neither outcome stops the remaining documents from loading. Problems are
//! reported as messages, never as an `Err`.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StacksError};
use crate::model::Catalog;
use crate::store::{DataStore, Document};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub fn run<S: DataStore>(store: &S, catalog: &mut Catalog) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for doc in Document::ALL {
        match doc {
            Document::Books => load_into(store, doc, &mut catalog.books, &mut result),
            Document::Members => load_into(store, doc, &mut catalog.members, &mut result),
            Document::Loans => load_into(store, doc, &mut catalog.loans, &mut result),
        }
    }
    Ok(result)
}

fn load_into<S: DataStore, T: DeserializeOwned>(
    store: &S,
    doc: Document,
    target: &mut Vec<T>,
    result: &mut CmdResult,
) {
    match read_collection(store, doc) {
        Ok(Some(items)) => {
            debug!(document = %doc, count = items.len(), "loaded collection");
            result.add_message(CmdMessage::success(format!(
                "Loaded {} {}",
                items.len(),
                doc.noun()
            )));
            *target = items;
        }
        Ok(None) => {
            target.clear();
            result.add_message(CmdMessage::warning(format!(
                "No {} found, starting with empty list",
                doc
            )));
        }
        Err(e) => {
            warn!(document = %doc, error = %e, "failed to load collection");
            result.add_message(CmdMessage::error(format!("Error loading {}: {}", doc, e)));
        }
    }
}

fn read_collection<S: DataStore, T: DeserializeOwned>(
    store: &S,
    doc: Document,
) -> Result<Option<Vec<T>>> {
    let content = match store.read_document(doc)? {
        Some(content) => content,
        None => return Ok(None),
    };
    let items = serde_json::from_str(&content).map_err(StacksError::Serialization)?;
    Ok(Some(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Book;
    use crate::store::memory::InMemoryStore;

    const BOOKS: &str = r#"[
  {"id": 1, "title": "Dune", "author": "Herbert", "year": "1965", "status": "available"},
  {"id": 2, "title": "Emma", "author": "Austen", "year": "1815", "status": "available"}
]"#;

    #[test]
    fn missing_documents_start_empty() {
        let store = InMemoryStore::new();
        let mut catalog = Catalog::with_books(vec![Book::new(
            9,
            "Stale".into(),
            "X".into(),
            "1".into(),
        )]);

        let result = run(&store, &mut catalog).unwrap();

        assert_eq!(catalog, Catalog::new());
        assert_eq!(result.messages.len(), 3);
        assert!(result
            .messages
            .iter()
            .all(|m| m.level == MessageLevel::Warning));
        assert_eq!(
            result.messages[0].content,
            "No books.json found, starting with empty list"
        );
    }

    #[test]
    fn loads_books_in_document_order() {
        let store = InMemoryStore::new().with_document(Document::Books, BOOKS);
        let mut catalog = Catalog::new();

        let result = run(&store, &mut catalog).unwrap();

        let ids: Vec<_> = catalog.books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Loaded 2 books");
    }

    #[test]
    fn corrupt_document_keeps_prior_collection_and_loads_others() {
        let store = InMemoryStore::new()
            .with_document(Document::Books, "{ not json")
            .with_document(Document::Loans, r#"[{"book_id": 1}]"#);
        let prior = vec![Book::new(7, "Prior".into(), "A".into(), "1".into())];
        let mut catalog = Catalog::with_books(prior.clone());

        let result = run(&store, &mut catalog).unwrap();

        assert_eq!(catalog.books, prior);
        assert_eq!(catalog.loans.len(), 1);
        assert!(result.has_errors());
        assert!(result.messages[0]
            .content
            .starts_with("Error loading books.json:"));
        assert_eq!(result.messages[2].content, "Loaded 1 loans");
    }

    #[test]
    fn members_and_loans_are_kept_opaque() {
        let members = r#"[{"id": 1, "name": "Ada", "joined": "2024-01-01"}]"#;
        let store = InMemoryStore::new().with_document(Document::Members, members);
        let mut catalog = Catalog::new();

        run(&store, &mut catalog).unwrap();

        assert_eq!(catalog.members[0]["name"], "Ada");
        assert_eq!(catalog.members[0]["joined"], "2024-01-01");
    }
}
