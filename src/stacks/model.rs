//! Core data types: [`Book`] records and the [`Catalog`] that owns every collection.
//!
//! Members and loans have no behaviour yet. They are carried as opaque JSON values
//! so that whatever is on disk survives a load/save cycle untouched.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_STATUS: &str = "available";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    /// Free text. Hand-edited documents may hold a number here, which is kept as text.
    #[serde(deserialize_with = "year_as_text")]
    pub year: String,
    #[serde(default = "default_status")]
    pub status: String,
}

impl Book {
    pub fn new(id: u64, title: String, author: String, year: String) -> Self {
        Self {
            id,
            title,
            author,
            year,
            status: DEFAULT_STATUS.to_string(),
        }
    }
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearRepr {
    Text(String),
    Number(serde_json::Number),
}

fn year_as_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match YearRepr::deserialize(deserializer)? {
        YearRepr::Text(s) => s,
        YearRepr::Number(n) => n.to_string(),
    })
}

/// All in-memory state for one run of the program.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub books: Vec<Book>,
    pub members: Vec<Value>,
    pub loans: Vec<Value>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books,
            ..Self::default()
        }
    }
}
