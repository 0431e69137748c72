//! Reusable UI components

mod card;
mod icon_button;
mod nav_bar;
mod section;

pub use card::{ImageCard, TextCard};
pub use icon_button::{IconButton, IconButtonVariant};
pub use nav_bar::NavBar;
pub use section::Section;
