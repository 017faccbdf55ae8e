//! Navigation between the four converter screens

use std::fmt;
use serde::{Serialize, Serializer};
use tracing::debug;
use gauge_units::{Category, ConversionResult, LengthUnit, TemperatureUnit, TimeUnit, VolumeUnit};
use crate::ConverterScreen;

/// Title shown in the navigation bar
pub const APP_TITLE: &str = "Conversion App";

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Tint of unselected tabs
    pub const GRAY: Color = Color::rgb(0x80, 0x80, 0x80);

    /// Background of the tab bar
    pub const TAB_BAR: Color = Color::rgb(0x28, 0x26, 0x2b);

    /// Lowercase hex without the leading '#', e.g. "d7dace"
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Presentation metadata attached to each category
pub trait CategoryStyle {
    /// System symbol name for the tab icon
    fn symbol_name(&self) -> &'static str;

    /// Screen background while the category is selected
    fn background_color(&self) -> Color;
}

impl CategoryStyle for Category {
    fn symbol_name(&self) -> &'static str {
        match self {
            Category::Temperature => "thermometer",
            Category::Length => "ruler",
            Category::Time => "clock",
            Category::Volume => "drop.triangle.fill",
        }
    }

    fn background_color(&self) -> Color {
        match self {
            Category::Temperature => Color::rgb(0xd7, 0xda, 0xce),
            Category::Length => Color::rgb(0xff, 0xe9, 0xb3),
            Category::Time => Color::rgb(0xff, 0xdc, 0x74),
            Category::Volume => Color::rgb(0xff, 0xc1, 0x76),
        }
    }
}

/// One entry of the bottom tab bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tab {
    pub category: Category,
    pub label: &'static str,
    pub symbol_name: &'static str,
    pub tint: Color,
    pub selected: bool,
}

/// Whole-application state: the selected category and one screen per category
///
/// Each screen keeps its own input and unit picks while another is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    selected: Category,
    pub temperature: ConverterScreen<TemperatureUnit>,
    pub length: ConverterScreen<LengthUnit>,
    pub time: ConverterScreen<TimeUnit>,
    pub volume: ConverterScreen<VolumeUnit>,
}

impl App {
    pub fn new() -> Self {
        App {
            selected: Category::Temperature,
            temperature: ConverterScreen::default(),
            length: ConverterScreen::default(),
            time: ConverterScreen::default(),
            volume: ConverterScreen::default(),
        }
    }

    pub fn selected(&self) -> Category {
        self.selected
    }

    pub fn select(&mut self, category: Category) {
        debug!(from = %self.selected, to = %category, "select category");
        self.selected = category;
    }

    /// Background of the visible screen
    pub fn background_color(&self) -> Color {
        self.selected.background_color()
    }

    /// Tab bar entries in navigation order; the selected tab takes the
    /// selected category's color, the others are gray
    pub fn tabs(&self) -> Vec<Tab> {
        let accent = self.background_color();
        Category::ALL
            .into_iter()
            .map(|category| {
                let selected = category == self.selected;
                Tab {
                    category,
                    label: category.name(),
                    symbol_name: category.symbol_name(),
                    tint: if selected { accent } else { Color::GRAY },
                    selected,
                }
            })
            .collect()
    }

    /// Replace the input text of the visible screen
    pub fn set_input(&mut self, text: impl Into<String>) {
        match self.selected {
            Category::Temperature => self.temperature.set_input(text),
            Category::Length => self.length.set_input(text),
            Category::Time => self.time.set_input(text),
            Category::Volume => self.volume.set_input(text),
        }
    }

    pub fn input(&self) -> &str {
        match self.selected {
            Category::Temperature => self.temperature.input(),
            Category::Length => self.length.input(),
            Category::Time => self.time.input(),
            Category::Volume => self.volume.input(),
        }
    }

    pub fn placeholder(&self) -> String {
        match self.selected {
            Category::Temperature => self.temperature.placeholder(),
            Category::Length => self.length.placeholder(),
            Category::Time => self.time.placeholder(),
            Category::Volume => self.volume.placeholder(),
        }
    }

    /// Result of the visible screen
    pub fn current_result(&self) -> ConversionResult {
        match self.selected {
            Category::Temperature => self.temperature.result(),
            Category::Length => self.length.result(),
            Category::Time => self.time.result(),
            Category::Volume => self.volume.result(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
