//! Unit catalog - the fixed unit tables of every category
//!
//! Base units: Celsius, meters, seconds, liters. Factors follow the
//! SI / US customary definitions.

use serde::{Deserialize, Serialize};
use crate::{Affine, Category, Unit, UnitSet};

pub(crate) const TEMPERATURE_UNITS: &[Unit] = &[
    Unit::Temperature(TemperatureUnit::Celsius),
    Unit::Temperature(TemperatureUnit::Fahrenheit),
    Unit::Temperature(TemperatureUnit::Kelvin),
];

pub(crate) const LENGTH_UNITS: &[Unit] = &[
    Unit::Length(LengthUnit::Meters),
    Unit::Length(LengthUnit::Kilometers),
    Unit::Length(LengthUnit::Feet),
    Unit::Length(LengthUnit::Yards),
    Unit::Length(LengthUnit::Miles),
];

pub(crate) const TIME_UNITS: &[Unit] = &[
    Unit::Time(TimeUnit::Seconds),
    Unit::Time(TimeUnit::Minutes),
    Unit::Time(TimeUnit::Hours),
];

pub(crate) const VOLUME_UNITS: &[Unit] = &[
    Unit::Volume(VolumeUnit::Milliliters),
    Unit::Volume(VolumeUnit::Liters),
    Unit::Volume(VolumeUnit::Cups),
    Unit::Volume(VolumeUnit::Pints),
    Unit::Volume(VolumeUnit::Gallons),
];

/// Every unit in the catalog, grouped by category
pub fn all_units() -> impl Iterator<Item = Unit> {
    Category::ALL
        .into_iter()
        .flat_map(|category| category.units().iter().copied())
}

// ============ temperature ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl UnitSet for TemperatureUnit {
    const CATEGORY: Category = Category::Temperature;
    const ALL: &'static [Self] = &[
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    fn affine(self) -> Affine {
        match self {
            TemperatureUnit::Celsius => Affine::IDENTITY,
            // (F - 32) * 5/9
            TemperatureUnit::Fahrenheit => Affine::ratio(5.0, 9.0).shifted(-32.0),
            TemperatureUnit::Kelvin => Affine::IDENTITY.shifted(-273.15),
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }

    fn into_unit(self) -> Unit {
        Unit::Temperature(self)
    }

    fn from_unit(unit: Unit) -> Option<Self> {
        match unit {
            Unit::Temperature(u) => Some(u),
            _ => None,
        }
    }
}

// ============ length ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Meters,
    Kilometers,
    Feet,
    Yards,
    Miles,
}

impl UnitSet for LengthUnit {
    const CATEGORY: Category = Category::Length;
    const ALL: &'static [Self] = &[
        LengthUnit::Meters,
        LengthUnit::Kilometers,
        LengthUnit::Feet,
        LengthUnit::Yards,
        LengthUnit::Miles,
    ];

    fn affine(self) -> Affine {
        match self {
            LengthUnit::Meters => Affine::IDENTITY,
            LengthUnit::Kilometers => Affine::scaled(1000.0),
            LengthUnit::Feet => Affine::scaled(0.3048),
            LengthUnit::Yards => Affine::scaled(0.9144),
            LengthUnit::Miles => Affine::scaled(1609.344),
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meters => "m",
            LengthUnit::Kilometers => "km",
            LengthUnit::Feet => "ft",
            LengthUnit::Yards => "yd",
            LengthUnit::Miles => "mi",
        }
    }

    fn name(self) -> &'static str {
        match self {
            LengthUnit::Meters => "meters",
            LengthUnit::Kilometers => "kilometers",
            LengthUnit::Feet => "feet",
            LengthUnit::Yards => "yards",
            LengthUnit::Miles => "miles",
        }
    }

    fn into_unit(self) -> Unit {
        Unit::Length(self)
    }

    fn from_unit(unit: Unit) -> Option<Self> {
        match unit {
            Unit::Length(u) => Some(u),
            _ => None,
        }
    }
}

// ============ time ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
}

impl UnitSet for TimeUnit {
    const CATEGORY: Category = Category::Time;
    const ALL: &'static [Self] = &[TimeUnit::Seconds, TimeUnit::Minutes, TimeUnit::Hours];

    fn affine(self) -> Affine {
        match self {
            TimeUnit::Seconds => Affine::IDENTITY,
            TimeUnit::Minutes => Affine::scaled(60.0),
            TimeUnit::Hours => Affine::scaled(3600.0),
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "sec",
            TimeUnit::Minutes => "min",
            TimeUnit::Hours => "hr",
        }
    }

    fn name(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
        }
    }

    fn into_unit(self) -> Unit {
        Unit::Time(self)
    }

    fn from_unit(unit: Unit) -> Option<Self> {
        match unit {
            Unit::Time(u) => Some(u),
            _ => None,
        }
    }
}

// ============ volume ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeUnit {
    Milliliters,
    Liters,
    Cups,
    Pints,
    Gallons,
}

impl UnitSet for VolumeUnit {
    const CATEGORY: Category = Category::Volume;
    const ALL: &'static [Self] = &[
        VolumeUnit::Milliliters,
        VolumeUnit::Liters,
        VolumeUnit::Cups,
        VolumeUnit::Pints,
        VolumeUnit::Gallons,
    ];

    fn affine(self) -> Affine {
        // US customary cup, pint and gallon
        match self {
            VolumeUnit::Milliliters => Affine::ratio(1.0, 1000.0),
            VolumeUnit::Liters => Affine::IDENTITY,
            VolumeUnit::Cups => Affine::scaled(0.2365882365),
            VolumeUnit::Pints => Affine::scaled(0.473176473),
            VolumeUnit::Gallons => Affine::scaled(3.785411784),
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::Milliliters => "mL",
            VolumeUnit::Liters => "L",
            VolumeUnit::Cups => "cups",
            VolumeUnit::Pints => "pints",
            VolumeUnit::Gallons => "gallons",
        }
    }

    fn name(self) -> &'static str {
        match self {
            VolumeUnit::Milliliters => "milliliters",
            VolumeUnit::Liters => "liters",
            VolumeUnit::Cups => "cups",
            VolumeUnit::Pints => "pints",
            VolumeUnit::Gallons => "gallons",
        }
    }

    fn into_unit(self) -> Unit {
        Unit::Volume(self)
    }

    fn from_unit(unit: Unit) -> Option<Self> {
        match unit {
            Unit::Volume(u) => Some(u),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_typed_matches_dynamic<U: UnitSet>() {
        let dynamic = U::CATEGORY.units();
        assert_eq!(dynamic.len(), U::ALL.len(), "{} unit count", U::CATEGORY);
        for (typed, unit) in U::ALL.iter().zip(dynamic) {
            assert_eq!(typed.into_unit(), *unit);
            assert_eq!(U::from_unit(*unit), Some(*typed));
        }
    }

    #[test]
    fn test_tables_agree() {
        assert_typed_matches_dynamic::<TemperatureUnit>();
        assert_typed_matches_dynamic::<LengthUnit>();
        assert_typed_matches_dynamic::<TimeUnit>();
        assert_typed_matches_dynamic::<VolumeUnit>();
        assert_eq!(all_units().count(), 16);
    }

    #[test]
    fn test_unique_names_and_symbols() {
        let units: Vec<Unit> = all_units().collect();
        for (i, a) in units.iter().enumerate() {
            for b in &units[i + 1..] {
                assert_ne!(a.name(), b.name());
                assert_ne!(a.symbol(), b.symbol());
            }
        }
    }

    #[test]
    fn test_catalog_values() {
        let f = TemperatureUnit::Fahrenheit.affine();
        assert!((f.scale() - 5.0 / 9.0).abs() < 1e-15);
        assert!((f.offset() + 160.0 / 9.0).abs() < 1e-12);

        let k = TemperatureUnit::Kelvin.affine();
        assert_eq!(k.scale(), 1.0);
        assert_eq!(k.offset(), -273.15);

        assert_eq!(LengthUnit::Miles.affine().scale(), 1609.344);
        assert_eq!(TimeUnit::Hours.affine().scale(), 3600.0);
        assert_eq!(VolumeUnit::Milliliters.affine().scale(), 0.001);
        assert_eq!(VolumeUnit::Gallons.affine().scale(), 3.785411784);
    }

    #[test]
    fn test_only_temperature_has_offsets() {
        for unit in all_units() {
            let proportional = unit.affine().is_proportional();
            match unit.category() {
                Category::Temperature => {}
                _ => assert!(proportional, "{} should be proportional", unit.name()),
            }
        }
    }
}
