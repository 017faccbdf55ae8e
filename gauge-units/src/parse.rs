//! Unit lookup by symbol, name or alias
//!
//! Only the fixed tables below are recognised: no prefixes, no compound
//! units.

use gauge_core::GaugeError;
use crate::{all_units, Category, LengthUnit, TemperatureUnit, TimeUnit, Unit, VolumeUnit};

/// Extra spellings, lowercase, on top of each unit's symbol and name
const ALIASES: &[(&str, Unit)] = &[
    ("c", Unit::Temperature(TemperatureUnit::Celsius)),
    ("degc", Unit::Temperature(TemperatureUnit::Celsius)),
    ("centigrade", Unit::Temperature(TemperatureUnit::Celsius)),
    ("f", Unit::Temperature(TemperatureUnit::Fahrenheit)),
    ("degf", Unit::Temperature(TemperatureUnit::Fahrenheit)),
    ("kelvins", Unit::Temperature(TemperatureUnit::Kelvin)),
    ("meter", Unit::Length(LengthUnit::Meters)),
    ("metre", Unit::Length(LengthUnit::Meters)),
    ("metres", Unit::Length(LengthUnit::Meters)),
    ("kilometer", Unit::Length(LengthUnit::Kilometers)),
    ("kilometre", Unit::Length(LengthUnit::Kilometers)),
    ("kilometres", Unit::Length(LengthUnit::Kilometers)),
    ("foot", Unit::Length(LengthUnit::Feet)),
    ("yard", Unit::Length(LengthUnit::Yards)),
    ("mile", Unit::Length(LengthUnit::Miles)),
    ("s", Unit::Time(TimeUnit::Seconds)),
    ("secs", Unit::Time(TimeUnit::Seconds)),
    ("second", Unit::Time(TimeUnit::Seconds)),
    ("mins", Unit::Time(TimeUnit::Minutes)),
    ("minute", Unit::Time(TimeUnit::Minutes)),
    ("h", Unit::Time(TimeUnit::Hours)),
    ("hrs", Unit::Time(TimeUnit::Hours)),
    ("hour", Unit::Time(TimeUnit::Hours)),
    ("milliliter", Unit::Volume(VolumeUnit::Milliliters)),
    ("millilitre", Unit::Volume(VolumeUnit::Milliliters)),
    ("millilitres", Unit::Volume(VolumeUnit::Milliliters)),
    ("liter", Unit::Volume(VolumeUnit::Liters)),
    ("litre", Unit::Volume(VolumeUnit::Liters)),
    ("litres", Unit::Volume(VolumeUnit::Liters)),
    ("cup", Unit::Volume(VolumeUnit::Cups)),
    ("pt", Unit::Volume(VolumeUnit::Pints)),
    ("pint", Unit::Volume(VolumeUnit::Pints)),
    ("gal", Unit::Volume(VolumeUnit::Gallons)),
    ("gallon", Unit::Volume(VolumeUnit::Gallons)),
];

/// Resolve a unit from its symbol, name or a known alias
///
/// Exact symbols win ("mL", "K"); otherwise matching is case-insensitive.
pub fn parse_unit(s: &str) -> Result<Unit, GaugeError> {
    let s = s.trim();

    if let Some(unit) = all_units().find(|u| u.symbol() == s) {
        return Ok(unit);
    }

    let lower = s.to_lowercase();
    all_units()
        .find(|u| u.symbol().to_lowercase() == lower || u.name() == lower)
        .or_else(|| {
            ALIASES
                .iter()
                .find(|(alias, _)| *alias == lower)
                .map(|(_, unit)| *unit)
        })
        .ok_or_else(|| GaugeError::UnknownUnit(s.to_string()))
}

/// Resolve a unit and check it belongs to `category`
pub fn parse_unit_in(category: Category, s: &str) -> Result<Unit, GaugeError> {
    let unit = parse_unit(s)?;
    if !category.contains(unit) {
        return Err(GaugeError::category_mismatch(
            unit.name(),
            category.name(),
            unit.category().name(),
        ));
    }
    Ok(unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(parse_unit("°C").unwrap(), Unit::Temperature(TemperatureUnit::Celsius));
        assert_eq!(parse_unit("K").unwrap(), Unit::Temperature(TemperatureUnit::Kelvin));
        assert_eq!(parse_unit("mi").unwrap(), Unit::Length(LengthUnit::Miles));
        assert_eq!(parse_unit("sec").unwrap(), Unit::Time(TimeUnit::Seconds));
        assert_eq!(parse_unit("mL").unwrap(), Unit::Volume(VolumeUnit::Milliliters));
        assert_eq!(parse_unit(" L ").unwrap(), Unit::Volume(VolumeUnit::Liters));
    }

    #[test]
    fn test_names_case_insensitive() {
        assert_eq!(parse_unit("Fahrenheit").unwrap(), Unit::Temperature(TemperatureUnit::Fahrenheit));
        assert_eq!(parse_unit("KILOMETERS").unwrap(), Unit::Length(LengthUnit::Kilometers));
        assert_eq!(parse_unit("ml").unwrap(), Unit::Volume(VolumeUnit::Milliliters));
        assert_eq!(parse_unit("°f").unwrap(), Unit::Temperature(TemperatureUnit::Fahrenheit));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(parse_unit("C").unwrap(), Unit::Temperature(TemperatureUnit::Celsius));
        assert_eq!(parse_unit("metre").unwrap(), Unit::Length(LengthUnit::Meters));
        assert_eq!(parse_unit("feet").unwrap(), Unit::Length(LengthUnit::Feet));
        assert_eq!(parse_unit("foot").unwrap(), Unit::Length(LengthUnit::Feet));
        assert_eq!(parse_unit("h").unwrap(), Unit::Time(TimeUnit::Hours));
        assert_eq!(parse_unit("gal").unwrap(), Unit::Volume(VolumeUnit::Gallons));
    }

    #[test]
    fn test_every_unit_resolves_from_symbol_and_name() {
        for unit in all_units() {
            assert_eq!(parse_unit(unit.symbol()).unwrap(), unit);
            assert_eq!(parse_unit(unit.name()).unwrap(), unit);
        }
    }

    #[test]
    fn test_aliases_do_not_shadow_symbols() {
        for (alias, unit) in ALIASES {
            assert_eq!(parse_unit(alias).unwrap(), *unit, "alias {}", alias);
        }
    }

    #[test]
    fn test_unknown() {
        assert_eq!(parse_unit("furlong"), Err(GaugeError::UnknownUnit("furlong".to_string())));
        assert!(parse_unit("km/h").is_err());
        assert!(parse_unit("").is_err());
    }

    #[test]
    fn test_parse_unit_in() {
        assert!(parse_unit_in(Category::Time, "min").is_ok());
        let err = parse_unit_in(Category::Time, "m").unwrap_err();
        assert_eq!(err, GaugeError::category_mismatch("meters", "time", "length"));
    }
}
