//! The interactive menu loop.
//!
//! `Shell` owns the [`LibraryApi`] for the whole session and mediates between
//! prompts and API calls. Operation failures are printed and the loop continues;
//! only terminal I/O errors end the session early.
//!
//! Closing stdin is treated as a request to leave: the books menu returns to the
//! main menu, and the main menu saves and exits.
//!
//! Add checks each field as soon as it is typed, and update/delete look the id up
//! before asking for anything else, so a bad value ends the dialog at once. The
//! commands behind the API repeat those checks because they are also called
//! without the shell.

use super::menu::{BookAction, MainChoice};
use super::render::{write_book_table, write_menu, write_messages, EMPTY_LIBRARY};
use stacks::api::{parse_book_id, BookUpdate, CmdMessage, CmdResult, Confirmation, LibraryApi};
use stacks::commands::helpers::required_field;
use stacks::error::Result;
use stacks::features::{Feature, FeatureHandler, Submenu};
use stacks::store::DataStore;
use std::io::{BufRead, Write};
use tracing::debug;

const MAIN_TITLE: &str = "Stacks Library Catalog";

#[derive(Debug, Clone)]
pub struct ShellOptions {
    pub pause_after_action: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            pause_after_action: true,
        }
    }
}

pub struct Shell<S: DataStore, R: BufRead, W: Write> {
    api: LibraryApi<S>,
    input: R,
    output: W,
    options: ShellOptions,
    input_closed: bool,
}

impl<S: DataStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(api: LibraryApi<S>, input: R, output: W, options: ShellOptions) -> Self {
        Self {
            api,
            input,
            output,
            options,
            input_closed: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "🚀 Starting {}...", MAIN_TITLE)?;
        let loaded = self.api.load();
        self.report(loaded)?;

        loop {
            self.show_main_menu()?;
            let input = self.prompt("Enter choice: ")?;
            let choice = if self.input_closed {
                MainChoice::Exit
            } else {
                MainChoice::parse(&input)
            };
            debug!(?choice, "main menu");

            match choice {
                MainChoice::Exit => {
                    self.save()?;
                    writeln!(self.output)?;
                    writeln!(self.output, "👋 Goodbye! Thank you for using {}.", MAIN_TITLE)?;
                    return Ok(());
                }
                MainChoice::Open(feature) => self.open_feature(feature)?,
                MainChoice::Invalid => {
                    self.print(CmdMessage::error("Invalid option. Please choose 0-4."))?
                }
            }

            self.save()?;
        }
    }

    pub fn print_messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        write_messages(&mut self.output, messages)?;
        Ok(())
    }

    fn open_feature(&mut self, feature: Feature) -> Result<()> {
        match feature.handler() {
            FeatureHandler::Implemented(Submenu::Books) => self.books_menu(),
            FeatureHandler::NotYetAvailable => self.unavailable(feature),
        }
    }

    fn unavailable(&mut self, feature: Feature) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- {} ---", feature.heading())?;
        self.print(CmdMessage::warning("This feature is not yet available."))?;
        self.pause()
    }

    fn books_menu(&mut self) -> Result<()> {
        loop {
            let entries: Vec<(String, &str)> = BookAction::MENU
                .iter()
                .map(|(key, label)| (key.to_string(), *label))
                .collect();
            write_menu(
                &mut self.output,
                &Feature::Books.heading().to_uppercase(),
                &entries,
            )?;

            let input = self.prompt("Enter choice: ")?;
            if self.input_closed {
                return Ok(());
            }

            match BookAction::parse(&input) {
                BookAction::Back => return Ok(()),
                BookAction::Add => self.add_book()?,
                BookAction::List => self.list_books()?,
                BookAction::Update => self.update_book()?,
                BookAction::Delete => self.delete_book()?,
                BookAction::Invalid => self.print(CmdMessage::error("Invalid choice. Choose 0-4."))?,
            }

            self.pause()?;
        }
    }

    fn add_book(&mut self) -> Result<()> {
        self.section("Add New Book")?;

        let title = self.prompt("Enter book title: ")?;
        if let Err(e) = required_field("Title", &title) {
            return self.print(CmdMessage::error(e.to_string()));
        }
        let author = self.prompt("Enter author name: ")?;
        if let Err(e) = required_field("Author", &author) {
            return self.print(CmdMessage::error(e.to_string()));
        }
        let year = self.prompt("Enter publication year: ")?;
        if let Err(e) = required_field("Year", &year) {
            return self.print(CmdMessage::error(e.to_string()));
        }

        let added = self.api.add_book(&title, &author, &year);
        self.report(added)
    }

    fn list_books(&mut self) -> Result<()> {
        self.section("Book List")?;
        match self.api.list_books() {
            Ok(result) => {
                write_book_table(&mut self.output, &result.listed_books)?;
                Ok(())
            }
            Err(e) => self.print(CmdMessage::error(e.to_string())),
        }
    }

    fn update_book(&mut self) -> Result<()> {
        self.section("Update Book")?;
        let id = match self.select_book("Enter book ID to update: ")? {
            Some(id) => id,
            None => return Ok(()),
        };
        let book = match self.api.find_book(id) {
            Some(book) => book.clone(),
            None => return self.print(CmdMessage::error(format!("Book ID {} not found!", id))),
        };

        writeln!(self.output)?;
        writeln!(self.output, "Current information:")?;
        writeln!(self.output, "  Title: {}", book.title)?;
        writeln!(self.output, "  Author: {}", book.author)?;
        writeln!(self.output, "  Year: {}", book.year)?;
        writeln!(self.output)?;
        writeln!(self.output, "Enter new information (press Enter to keep current):")?;

        let update = BookUpdate {
            title: Some(self.prompt(&format!("New title [{}]: ", book.title))?),
            author: Some(self.prompt(&format!("New author [{}]: ", book.author))?),
            year: Some(self.prompt(&format!("New year [{}]: ", book.year))?),
        };

        writeln!(self.output)?;
        let updated = self.api.update_book(id, &update);
        self.report(updated)
    }

    fn delete_book(&mut self) -> Result<()> {
        self.section("Delete Book")?;
        let id = match self.select_book("Enter book ID to delete: ")? {
            Some(id) => id,
            None => return Ok(()),
        };
        let book = match self.api.find_book(id) {
            Some(book) => book.clone(),
            None => return self.print(CmdMessage::error(format!("Book ID {} not found!", id))),
        };

        writeln!(self.output)?;
        writeln!(self.output, "Book to delete:")?;
        writeln!(self.output, "  ID: {}", book.id)?;
        writeln!(self.output, "  Title: {}", book.title)?;
        writeln!(self.output, "  Author: {}", book.author)?;
        writeln!(self.output)?;

        let answer = self.prompt("Are you sure? (yes/no): ")?;
        let deleted = self.api.delete_book(id, Confirmation::from_input(&answer));
        self.report(deleted)
    }

    /// Prompt for a book id. `None` when the library is empty or the input is not a valid id.
    fn select_book(&mut self, label: &str) -> Result<Option<u64>> {
        if self.api.catalog().books.is_empty() {
            writeln!(self.output, "{}", EMPTY_LIBRARY)?;
            return Ok(None);
        }
        let input = self.prompt(label)?;
        match parse_book_id(&input) {
            Ok(id) => Ok(Some(id)),
            Err(e) => {
                self.print(CmdMessage::error(e.to_string()))?;
                Ok(None)
            }
        }
    }

    fn save(&mut self) -> Result<()> {
        let saved = self.api.save();
        self.report(saved)
    }

    fn section(&mut self, title: &str) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- {} ---", title)?;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        if !self.options.pause_after_action || self.input_closed {
            return Ok(());
        }
        writeln!(self.output)?;
        self.prompt("Press Enter to continue...")?;
        Ok(())
    }

    fn print(&mut self, message: CmdMessage) -> Result<()> {
        self.print_messages(&[message])
    }

    fn report(&mut self, result: Result<CmdResult>) -> Result<()> {
        match result {
            Ok(result) => self.print_messages(&result.messages),
            Err(e) => self.print(CmdMessage::error(e.to_string())),
        }
    }

    /// Show `label`, read one line and return it trimmed. Empty once input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.input_closed = true;
            writeln!(self.output)?;
            return Ok(String::new());
        }
        Ok(line.trim().to_string())
    }

    fn show_main_menu(&mut self) -> Result<()> {
        let mut entries: Vec<(String, &str)> = Feature::ALL
            .iter()
            .map(|f| (f.menu_number().to_string(), f.menu_label()))
            .collect();
        entries.push(("0".to_string(), "Exit"));
        write_menu(&mut self.output, MAIN_TITLE, &entries)?;
        Ok(())
    }

    #[cfg(test)]
    fn into_parts(self) -> (LibraryApi<S>, W) {
        (self.api, self.output)
    }
}
