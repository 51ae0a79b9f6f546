//! Terminal formatting: status markers, menus and the book table.
//!
//! Everything writes to a caller-supplied `Write` so the shell can be driven
//! against a buffer in tests. Coloring goes through `colored`, which the CLI
//! switches off for pipes and `--no-color`.

use colored::Colorize;
use stacks::api::{BookRow, CmdMessage, MessageLevel};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

pub const RULE_WIDTH: usize = 50;
pub const TABLE_WIDTH: usize = 90;
pub const EMPTY_LIBRARY: &str = "📚 No books in the library.";

// (heading, column width)
const COLUMNS: [(&str, usize); 5] = [
    ("ID", 5),
    ("Title", 35),
    ("Author", 25),
    ("Year", 6),
    ("Status", 12),
];

fn marker(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => "",
        MessageLevel::Success => "✅ ",
        MessageLevel::Warning => "⚠️ ",
        MessageLevel::Error => "❌ ",
    }
}

/// Message text with its status marker, uncolored.
pub fn format_message(message: &CmdMessage) -> String {
    format!("{}{}", marker(message.level), message.content)
}

pub fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let text = format_message(message);
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", text)?,
            MessageLevel::Success => writeln!(out, "{}", text.green())?,
            MessageLevel::Warning => writeln!(out, "{}", text.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", text.red())?,
        }
    }
    Ok(())
}

pub fn write_menu<W: Write>(out: &mut W, title: &str, entries: &[(String, &str)]) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", format!("{:^width$}", title, width = RULE_WIDTH).trim_end().bold())?;
    writeln!(out, "{}", rule)?;
    for (key, label) in entries {
        writeln!(out, "{}. {}", key, label)?;
    }
    writeln!(out, "{}", rule)?;
    Ok(())
}

pub fn write_book_table<W: Write>(out: &mut W, rows: &[BookRow]) -> io::Result<()> {
    if rows.is_empty() {
        writeln!(out, "{}", EMPTY_LIBRARY)?;
        return Ok(());
    }

    writeln!(out, "Total books: {}", rows.len())?;
    writeln!(out)?;
    let header: Vec<String> = COLUMNS
        .iter()
        .map(|(name, width)| pad_to_width(name, *width))
        .collect();
    writeln!(out, "{}", header.join(" ").trim_end().bold())?;
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;

    for row in rows {
        let id = row.id.to_string();
        let cells = [
            id.as_str(),
            row.title.as_str(),
            row.author.as_str(),
            row.year.as_str(),
            row.status.as_str(),
        ];
        let line: Vec<String> = cells
            .iter()
            .zip(COLUMNS.iter())
            .map(|(cell, (_, width))| pad_to_width(cell, *width))
            .collect();
        writeln!(out, "{}", line.join(" ").trim_end())?;
    }
    writeln!(out)?;
    Ok(())
}

/// Left-align `s` in a column `width` terminal cells wide. Wider values are not cut.
fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_table(rows: &[BookRow]) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_book_table(&mut out, rows).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn row(id: u64, title: &str) -> BookRow {
        BookRow {
            id,
            title: title.into(),
            author: "Herbert".into(),
            year: "1965".into(),
            status: "available".into(),
        }
    }

    #[test]
    fn markers_match_levels() {
        assert_eq!(format_message(&CmdMessage::success("Done")), "✅ Done");
        assert_eq!(format_message(&CmdMessage::warning("Hmm")), "⚠️ Hmm");
        assert_eq!(format_message(&CmdMessage::error("Bad")), "❌ Bad");
        assert_eq!(format_message(&CmdMessage::info("Plain")), "Plain");
    }

    #[test]
    fn empty_table_shows_placeholder() {
        assert_eq!(render_table(&[]), format!("{}\n", EMPTY_LIBRARY));
    }

    #[test]
    fn table_has_header_rule_and_aligned_rows() {
        let output = render_table(&[row(1, "Dune"), row(12, "Emma")]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Total books: 2");
        assert!(lines[2].starts_with("ID    Title"));
        assert_eq!(lines[3], "-".repeat(TABLE_WIDTH));
        assert!(lines[4].starts_with("1     Dune"));
        assert!(lines[5].starts_with("12    Emma"));
        assert_eq!(lines[4].find("Herbert"), Some(42));
    }

    #[test]
    fn wide_characters_are_padded_by_display_width() {
        let output = render_table(&[row(1, "三体"), row(2, "ab")]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[4].width(), lines[5].width());
    }
}
