//! Navigation configuration

use serde::Deserialize;

use crate::domain::navigation::{RouterVariant, ScreenRouter};

/// Navigation configuration
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct NavigationConfig {
    /// Router flavour: `gated` (landing + auth) or `ungated` (straight to dashboard)
    #[serde(default)]
    pub variant: RouterVariant,
}

impl NavigationConfig {
    pub fn router(&self) -> ScreenRouter {
        ScreenRouter::new(self.variant)
    }
}
