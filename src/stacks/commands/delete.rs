use crate::commands::{CmdMessage, CmdResult, Confirmation};
use crate::error::{Result, StacksError};
use crate::model::Catalog;
use tracing::info;

pub fn run(catalog: &mut Catalog, id: u64, confirmation: Confirmation) -> Result<CmdResult> {
    let position = catalog
        .books
        .iter()
        .position(|b| b.id == id)
        .ok_or(StacksError::BookNotFound(id))?;

    let mut result = CmdResult::default();
    if !confirmation.is_confirmed() {
        result.add_message(CmdMessage::warning("Deletion cancelled."));
        return Ok(result);
    }

    let removed = catalog.books.remove(position);
    info!(id, title = %removed.title, "book deleted");
    result.add_message(CmdMessage::success(format!("Book ID {} deleted!", id)));
    Ok(result.with_affected_books(vec![removed]))
}
