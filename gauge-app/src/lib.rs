//! Gauge App - State behind the converter screens
//!
//! Holds what a renderer needs and nothing it draws: the per-screen input
//! text and unit picks, the selected category and the tab bar metadata.

mod navigation;
mod screen;

pub use navigation::{App, CategoryStyle, Color, Tab, APP_TITLE};
pub use screen::ConverterScreen;
