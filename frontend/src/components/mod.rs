// Reusable components live here.

pub mod header;
pub mod icons;
pub mod language_button;
pub mod theme_button;
