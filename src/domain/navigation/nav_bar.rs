//! Persistent navigation bar shown beneath every screen.

use super::Screen;

/// One tab of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub screen: Screen,
    pub label: &'static str,
}

/// The bottom navigation affordance.
pub struct NavBar;

impl NavBar {
    pub const ITEMS: [NavItem; 5] = [
        NavItem { screen: Screen::Dashboard, label: "Home" },
        NavItem { screen: Screen::MedicalAnalyzer, label: "Reports" },
        NavItem { screen: Screen::MentalHealth, label: "Wellness" },
        NavItem { screen: Screen::Education, label: "Learn" },
        NavItem { screen: Screen::Community, label: "Community" },
    ];

    pub fn items() -> &'static [NavItem] {
        &Self::ITEMS
    }

    /// Returns the tab highlighted for the current screen, if any.
    pub fn active_item(current: Screen) -> Option<&'static NavItem> {
        Self::items().iter().find(|item| item.screen == current)
    }

    pub fn is_active(item: &NavItem, current: Screen) -> bool {
        item.screen == current
    }
}
