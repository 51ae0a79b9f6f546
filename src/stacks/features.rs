//! Main-menu features and how each one is handled.
//!
//! Every entry of the main menu is a [`Feature`]. Its [`FeatureHandler`] says
//! whether it opens a working submenu or is not available yet, so the shell can
//! dispatch all entries the same way.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Books,
    Members,
    Loans,
    OverdueReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submenu {
    Books,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureHandler {
    Implemented(Submenu),
    NotYetAvailable,
}

impl Feature {
    /// Menu order, matching the numbers shown to the user.
    pub const ALL: [Feature; 4] = [
        Feature::Books,
        Feature::Members,
        Feature::Loans,
        Feature::OverdueReport,
    ];

    pub fn menu_label(&self) -> &'static str {
        match self {
            Feature::Books => "Books",
            Feature::Members => "Members",
            Feature::Loans => "Loans",
            Feature::OverdueReport => "Overdue Report",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Feature::Books => "Books Management",
            Feature::Members => "Members Management",
            Feature::Loans => "Loans Management",
            Feature::OverdueReport => "Overdue Report",
        }
    }

    pub fn handler(&self) -> FeatureHandler {
        match self {
            Feature::Books => FeatureHandler::Implemented(Submenu::Books),
            Feature::Members | Feature::Loans | Feature::OverdueReport => {
                FeatureHandler::NotYetAvailable
            }
        }
    }

    /// The 1-based number shown in the main menu.
    pub fn menu_number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|f| f == self)
            .map_or(0, |i| i + 1)
    }

    pub fn from_menu_number(n: usize) -> Option<Feature> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}
