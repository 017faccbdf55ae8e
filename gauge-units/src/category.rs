//! Conversion categories

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use gauge_core::GaugeError;
use crate::unit::Unit;
use crate::units::{LENGTH_UNITS, TEMPERATURE_UNITS, TIME_UNITS, VOLUME_UNITS};
use crate::{LengthUnit, TemperatureUnit, TimeUnit, VolumeUnit};

/// One of the four independent conversion domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Temperature,
    Length,
    Time,
    Volume,
}

impl Category {
    /// All categories, in navigation order
    pub const ALL: [Category; 4] = [
        Category::Temperature,
        Category::Length,
        Category::Time,
        Category::Volume,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Temperature => "temperature",
            Category::Length => "length",
            Category::Time => "time",
            Category::Volume => "volume",
        }
    }

    /// Reference unit every other unit in the category is defined against
    pub fn base_unit(&self) -> Unit {
        match self {
            Category::Temperature => Unit::Temperature(TemperatureUnit::Celsius),
            Category::Length => Unit::Length(LengthUnit::Meters),
            Category::Time => Unit::Time(TimeUnit::Seconds),
            Category::Volume => Unit::Volume(VolumeUnit::Liters),
        }
    }

    /// Units of this category in picker order
    pub fn units(&self) -> &'static [Unit] {
        match self {
            Category::Temperature => TEMPERATURE_UNITS,
            Category::Length => LENGTH_UNITS,
            Category::Time => TIME_UNITS,
            Category::Volume => VOLUME_UNITS,
        }
    }

    pub fn contains(&self, unit: Unit) -> bool {
        unit.category() == *self
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = GaugeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| GaugeError::UnknownCategory(s.to_string()))
    }
}
