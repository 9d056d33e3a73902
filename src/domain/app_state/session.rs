//! Session state: where the user is and who they are.

use serde::{Deserialize, Serialize};

use crate::domain::navigation::{Screen, UserTrack};

/// Navigation and authentication state for the running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub current_screen: Screen,
    pub user_track: Option<UserTrack>,
    pub is_authenticated: bool,
}

impl SessionState {
    /// Fresh session starting on the given screen.
    pub fn starting_at(screen: Screen) -> Self {
        Self {
            current_screen: screen,
            user_track: None,
            is_authenticated: false,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::starting_at(Screen::Landing)
    }
}
