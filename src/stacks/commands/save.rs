use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StacksError};
use crate::model::Catalog;
use crate::store::{DataStore, Document};
use serde::Serialize;
use tracing::{debug, warn};

/// Write all three documents. The first failure stops the remaining writes;
/// documents already written stay written.
pub fn run<S: DataStore>(store: &mut S, catalog: &Catalog) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match write_all(store, catalog) {
        Ok(()) => {
            debug!(books = catalog.books.len(), "catalog saved");
            result.add_message(CmdMessage::info("💾 Data saved successfully!"));
        }
        Err(e) => {
            warn!(error = %e, "failed to save catalog");
            result.add_message(CmdMessage::error(format!("Error saving data: {}", e)));
        }
    }
    Ok(result)
}

fn write_all<S: DataStore>(store: &mut S, catalog: &Catalog) -> Result<()> {
    store.prepare()?;
    write_collection(store, Document::Books, &catalog.books)?;
    write_collection(store, Document::Members, &catalog.members)?;
    write_collection(store, Document::Loans, &catalog.loans)?;
    Ok(())
}

fn write_collection<S: DataStore, T: Serialize>(
    store: &mut S,
    doc: Document,
    items: &[T],
) -> Result<()> {
    let content = serde_json::to_string_pretty(items).map_err(StacksError::Serialization)?;
    store.write_document(doc, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::load;
    use crate::model::Book;
    use crate::store::memory::InMemoryStore;

    fn sample() -> Catalog {
        Catalog::with_books(vec![
            Book::new(3, "Cien años de soledad".into(), "García Márquez".into(), "1967".into()),
            Book::new(1, "Dune".into(), "Herbert".into(), "1965".into()),
        ])
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let mut store = InMemoryStore::new();
        let catalog = sample();
        run(&mut store, &catalog).unwrap();

        let mut reloaded = Catalog::new();
        load::run(&store, &mut reloaded).unwrap();
        assert_eq!(reloaded, catalog);
    }

    #[test]
    fn documents_are_indented_and_keep_unicode() {
        let mut store = InMemoryStore::new();
        run(&mut store, &sample()).unwrap();

        let books = store.document(Document::Books).unwrap();
        assert!(books.starts_with("[\n  {\n    \"id\": 3,"));
        assert!(books.contains("García Márquez"));
        assert_eq!(store.document(Document::Members), Some("[]"));
        assert_eq!(store.document(Document::Loans), Some("[]"));
    }

    #[test]
    fn failure_is_reported_and_earlier_writes_remain() {
        let mut store = InMemoryStore::new().fail_writes_to(Document::Members);
        let result = run(&mut store, &sample()).unwrap();

        assert!(result.has_errors());
        assert!(result.messages[0].content.starts_with("Error saving data:"));
        assert!(store.document(Document::Books).is_some());
        assert!(store.document(Document::Loans).is_none());
    }

    #[test]
    fn success_message_is_reported() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, &Catalog::new()).unwrap();
        assert!(!result.has_errors());
        assert_eq!(result.messages[0].content, "💾 Data saved successfully!");
    }
}
