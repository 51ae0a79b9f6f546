use stacks::features::Feature;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Open(Feature),
    Exit,
    Invalid,
}

impl MainChoice {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input == "0" {
            return MainChoice::Exit;
        }
        // Only the plain digits shown in the menu count, not "01" or "+1".
        if input.starts_with(&['0', '+'][..]) {
            return MainChoice::Invalid;
        }
        input
            .parse()
            .ok()
            .and_then(Feature::from_menu_number)
            .map_or(MainChoice::Invalid, MainChoice::Open)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookAction {
    Add,
    List,
    Update,
    Delete,
    Back,
    Invalid,
}

impl BookAction {
    pub const MENU: [(&'static str, &'static str); 5] = [
        ("1", "Add Book"),
        ("2", "List Books"),
        ("3", "Update Book"),
        ("4", "Delete Book"),
        ("0", "Back to Main Menu"),
    ];

    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "0" => BookAction::Back,
            "1" => BookAction::Add,
            "2" => BookAction::List,
            "3" => BookAction::Update,
            "4" => BookAction::Delete,
            _ => BookAction::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_choices() {
        assert_eq!(MainChoice::parse("0"), MainChoice::Exit);
        assert_eq!(MainChoice::parse(" 1 "), MainChoice::Open(Feature::Books));
        assert_eq!(MainChoice::parse("4"), MainChoice::Open(Feature::OverdueReport));
        for bad in ["", "5", "01", "+1", "00", "books", "-1"] {
            assert_eq!(MainChoice::parse(bad), MainChoice::Invalid, "input {:?}", bad);
        }
    }

    #[test]
    fn book_actions() {
        assert_eq!(BookAction::parse("0"), BookAction::Back);
        assert_eq!(BookAction::parse("3"), BookAction::Update);
        assert_eq!(BookAction::parse("9"), BookAction::Invalid);
        assert_eq!(BookAction::parse(""), BookAction::Invalid);
    }
}
