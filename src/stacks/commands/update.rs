use crate::commands::{BookUpdate, CmdMessage, CmdResult};
use crate::error::{Result, StacksError};
use crate::model::Catalog;
use tracing::info;

use super::helpers::{find_by_id_mut, replacement};

pub fn run(catalog: &mut Catalog, id: u64, update: &BookUpdate) -> Result<CmdResult> {
    let book = find_by_id_mut(&mut catalog.books, id).ok_or(StacksError::BookNotFound(id))?;

    if let Some(title) = replacement(update.title.as_deref()) {
        book.title = title;
    }
    if let Some(author) = replacement(update.author.as_deref()) {
        book.author = author;
    }
    if let Some(year) = replacement(update.year.as_deref()) {
        book.year = year;
    }
    info!(id, "book updated");

    let mut result = CmdResult::default().with_affected_books(vec![book.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Book ID {} updated successfully!",
        id
    )));
    Ok(result)
}
