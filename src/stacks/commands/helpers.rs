use crate::error::{Result, StacksError};
use crate::model::Book;

/// Next id to assign: one past the largest id present, or 1 for an empty collection.
/// Fails when a hand-edited document already holds the largest representable id.
pub fn next_id(books: &[Book]) -> Result<u64> {
    match books.iter().map(|b| b.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or_else(|| {
            StacksError::Validation(format!(
                "Cannot assign a new book ID: ID {} is already the largest possible.",
                max
            ))
        }),
    }
}

/// First book carrying `id`. Duplicate ids (from hand-edited files) resolve to the earliest.
pub fn find_by_id(books: &[Book], id: u64) -> Option<&Book> {
    books.iter().find(|b| b.id == id)
}

pub fn find_by_id_mut(books: &mut [Book], id: u64) -> Option<&mut Book> {
    books.iter_mut().find(|b| b.id == id)
}

/// Parse a user-typed book id.
pub fn parse_book_id(input: &str) -> Result<u64> {
    let input = input.trim();
    if input.is_empty() {
        return Err(StacksError::Validation("Book ID cannot be empty!".into()));
    }
    input
        .parse()
        .map_err(|_| StacksError::Validation("Book ID must be a number!".into()))
}

/// Trimmed value of a required field, or a validation error naming it.
pub fn required_field(label: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(StacksError::Validation(format!("{} cannot be empty!", label)));
    }
    Ok(value.to_string())
}

/// Trimmed replacement value, or `None` when absent or blank.
pub fn replacement(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books_with_ids(ids: &[u64]) -> Vec<Book> {
        ids.iter()
            .map(|&id| Book::new(id, format!("Book {}", id), "Author".into(), "2000".into()))
            .collect()
    }

    #[test]
    fn next_id_is_one_for_empty_collection() {
        assert_eq!(next_id(&[]).unwrap(), 1);
    }

    #[test]
    fn next_id_follows_maximum_not_count() {
        assert_eq!(next_id(&books_with_ids(&[1, 2, 5])).unwrap(), 6);
        assert_eq!(next_id(&books_with_ids(&[9, 3])).unwrap(), 10);
    }

    #[test]
    fn next_id_fails_instead_of_overflowing() {
        let err = next_id(&books_with_ids(&[3, u64::MAX])).unwrap_err();
        assert!(matches!(err, StacksError::Validation(_)));
    }

    #[test]
    fn find_by_id_returns_first_match() {
        let mut books = books_with_ids(&[1, 2, 2]);
        books[2].title = "Duplicate".into();
        let found = find_by_id(&books, 2).unwrap();
        assert_eq!(found.title, "Book 2");
    }

    #[test]
    fn find_by_id_returns_none_when_absent() {
        assert!(find_by_id(&books_with_ids(&[1, 2]), 7).is_none());
    }

    #[test]
    fn parse_book_id_rejects_blank_and_non_numeric() {
        let blank = parse_book_id("   ").unwrap_err();
        assert_eq!(blank.to_string(), "Book ID cannot be empty!");

        let text = parse_book_id("abc").unwrap_err();
        assert_eq!(text.to_string(), "Book ID must be a number!");

        assert!(parse_book_id("-1").is_err());
    }

    #[test]
    fn parse_book_id_trims_whitespace() {
        assert_eq!(parse_book_id(" 42 ").unwrap(), 42);
    }

    #[test]
    fn replacement_ignores_blank_values() {
        assert_eq!(replacement(None), None);
        assert_eq!(replacement(Some("  ")), None);
        assert_eq!(replacement(Some(" New ")), Some("New".to_string()));
    }
}
