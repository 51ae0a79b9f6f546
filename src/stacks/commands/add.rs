use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, Catalog};
use tracing::info;

use super::helpers::{next_id, required_field};

pub fn run(catalog: &mut Catalog, title: &str, author: &str, year: &str) -> Result<CmdResult> {
    let title = required_field("Title", title)?;
    let author = required_field("Author", author)?;
    let year = required_field("Year", year)?;

    let id = next_id(&catalog.books)?;
    let book = Book::new(id, title, author, year);
    info!(id, title = %book.title, "book added");
    catalog.books.push(book.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added successfully! ID: {}",
        id
    )));
    result.add_message(CmdMessage::info(format!("   Title: {}", book.title)));
    result.add_message(CmdMessage::info(format!("   Author: {}", book.author)));
    result.add_message(CmdMessage::info(format!("   Year: {}", book.year)));
    Ok(result.with_affected_books(vec![book]))
}
