use crate::commands::{BookRow, CmdResult};
use crate::error::Result;
use crate::model::{Book, Catalog};

pub const TITLE_MAX_CHARS: usize = 33;
pub const AUTHOR_MAX_CHARS: usize = 23;
const ELLIPSIS: &str = "...";

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let rows = catalog.books.iter().map(to_row).collect();
    Ok(CmdResult::default().with_listed_books(rows))
}

fn to_row(book: &Book) -> BookRow {
    BookRow {
        id: book.id,
        title: shorten(&book.title, TITLE_MAX_CHARS),
        author: shorten(&book.author, AUTHOR_MAX_CHARS),
        year: book.year.clone(),
        status: book.status.clone(),
    }
}

/// Values longer than `max` characters keep their first `max - 3` characters plus "...".
fn shorten(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let keep = max - ELLIPSIS.len();
    let mut out: String = value.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}
