//! Navigation module - screens, tracks, and the screen router.

mod nav_bar;
mod router;
mod screen;
mod track;

pub use nav_bar::{NavBar, NavItem};
pub use router::{RouterVariant, ScreenRouter, View};
pub use screen::Screen;
pub use track::UserTrack;
