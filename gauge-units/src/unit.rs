//! Unit representation with affine conversion to the category base unit

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize, Serializer};
use gauge_core::GaugeError;
use crate::Category;
use crate::{LengthUnit, TemperatureUnit, TimeUnit, VolumeUnit};

/// Affine relation between a unit and its category base unit
///
/// Stored as `base = (value + shift) * numerator / denominator` rather than
/// the equivalent `value * scale + offset`: keeping the ratio unreduced and
/// applying the shift in the unit's own terms makes the usual reference
/// points (100 °C = 212 °F, 0 °C = 273.15 K) come out exact in `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    numerator: f64,
    denominator: f64,
    shift: f64,
}

impl Affine {
    /// The base unit itself
    pub const IDENTITY: Affine = Affine::scaled(1.0);

    /// Proportional unit: `base = value * factor`
    pub const fn scaled(factor: f64) -> Self {
        Affine { numerator: factor, denominator: 1.0, shift: 0.0 }
    }

    /// Proportional unit with a rational factor: `base = value * numerator / denominator`
    pub const fn ratio(numerator: f64, denominator: f64) -> Self {
        Affine { numerator, denominator, shift: 0.0 }
    }

    /// Shift the zero point: `base = (value + shift) * factor`
    pub const fn shifted(self, shift: f64) -> Self {
        Affine { shift, ..self }
    }

    /// Multiplicative part of `base = value * scale + offset`
    pub fn scale(&self) -> f64 {
        self.numerator / self.denominator
    }

    /// Additive part of `base = value * scale + offset`
    pub fn offset(&self) -> f64 {
        self.shift * self.numerator / self.denominator
    }

    /// Check if the conversion is a pure scale (no offset)
    pub fn is_proportional(&self) -> bool {
        self.shift == 0.0
    }

    /// Convert a value in this unit to the base unit
    pub fn to_base(&self, value: f64) -> f64 {
        (value + self.shift) * self.numerator / self.denominator
    }

    /// Convert a base-unit value to this unit
    pub fn from_base(&self, base: f64) -> f64 {
        base * self.denominator / self.numerator - self.shift
    }
}

/// A closed set of units belonging to one category
///
/// Implemented by the per-category enums. Conversions through the typed
/// API can only pair units of the same set, so a category mismatch is a
/// compile error rather than a runtime one.
pub trait UnitSet: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    const CATEGORY: Category;

    /// Every unit of the set, in picker order
    const ALL: &'static [Self];

    fn affine(self) -> Affine;

    /// Display symbol, e.g. "°C" or "mi"
    fn symbol(self) -> &'static str;

    /// Canonical lowercase name, e.g. "celsius" or "miles"
    fn name(self) -> &'static str;

    fn into_unit(self) -> Unit;

    fn from_unit(unit: Unit) -> Option<Self>;
}

/// A unit of any category
///
/// The category is carried by the variant, so it is always recoverable
/// from the unit alone. Serializes as the unit name; deserializes from
/// anything `parse_unit` accepts (name, symbol or alias).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Unit {
    Temperature(TemperatureUnit),
    Length(LengthUnit),
    Time(TimeUnit),
    Volume(VolumeUnit),
}

impl Unit {
    pub fn category(&self) -> Category {
        match self {
            Unit::Temperature(_) => Category::Temperature,
            Unit::Length(_) => Category::Length,
            Unit::Time(_) => Category::Time,
            Unit::Volume(_) => Category::Volume,
        }
    }

    pub fn affine(&self) -> Affine {
        match *self {
            Unit::Temperature(u) => u.affine(),
            Unit::Length(u) => u.affine(),
            Unit::Time(u) => u.affine(),
            Unit::Volume(u) => u.affine(),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match *self {
            Unit::Temperature(u) => u.symbol(),
            Unit::Length(u) => u.symbol(),
            Unit::Time(u) => u.symbol(),
            Unit::Volume(u) => u.symbol(),
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            Unit::Temperature(u) => u.name(),
            Unit::Length(u) => u.name(),
            Unit::Time(u) => u.name(),
            Unit::Volume(u) => u.name(),
        }
    }

    /// Check if this is the base unit of its category
    pub fn is_base(&self) -> bool {
        self.category().base_unit() == *self
    }

    /// Recover the typed unit, if it belongs to `U`'s category
    pub fn as_typed<U: UnitSet>(self) -> Option<U> {
        U::from_unit(self)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = GaugeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_unit(s)
    }
}

impl TryFrom<String> for Unit {
    type Error = GaugeError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled() {
        let km = Affine::scaled(1000.0);
        assert!(km.is_proportional());
        assert_eq!(km.to_base(5.0), 5000.0);
        assert_eq!(km.from_base(5000.0), 5.0);
        assert_eq!(km.scale(), 1000.0);
        assert_eq!(km.offset(), 0.0);
    }

    #[test]
    fn test_shifted_ratio() {
        // Fahrenheit: base = (F - 32) * 5/9
        let f = Affine::ratio(5.0, 9.0).shifted(-32.0);
        assert!(!f.is_proportional());
        assert_eq!(f.to_base(212.0), 100.0);
        assert_eq!(f.from_base(100.0), 212.0);
        assert_eq!(f.to_base(-40.0), -40.0);
        assert!((f.offset() - (-160.0 / 9.0)).abs() < 1e-12);
        assert!((f.scale() - 5.0 / 9.0).abs() < 1e-15);
    }

    #[test]
    fn test_unit_category() {
        let unit = Unit::Length(LengthUnit::Miles);
        assert_eq!(unit.category(), Category::Length);
        assert_eq!(unit.symbol(), "mi");
        assert_eq!(unit.name(), "miles");
        assert_eq!(format!("{}", unit), "mi");
    }

    #[test]
    fn test_is_base() {
        assert!(Unit::Volume(VolumeUnit::Liters).is_base());
        assert!(!Unit::Volume(VolumeUnit::Cups).is_base());
    }

    #[test]
    fn test_as_typed() {
        let unit = Unit::Time(TimeUnit::Hours);
        assert_eq!(unit.as_typed::<TimeUnit>(), Some(TimeUnit::Hours));
        assert_eq!(unit.as_typed::<LengthUnit>(), None);
    }

    #[test]
    fn test_serde_name() {
        let unit = Unit::Temperature(TemperatureUnit::Kelvin);
        let json = serde_json::to_string(&unit).unwrap();
        assert_eq!(json, "\"kelvin\"");

        let back: Unit = serde_json::from_str("\"gallons\"").unwrap();
        assert_eq!(back, Unit::Volume(VolumeUnit::Gallons));
    }

    #[test]
    fn test_deserialize_symbols_and_aliases() {
        let unit: Unit = serde_json::from_str("\"°F\"").unwrap();
        assert_eq!(unit, Unit::Temperature(TemperatureUnit::Fahrenheit));
        let unit: Unit = serde_json::from_str("\"mi\"").unwrap();
        assert_eq!(unit, Unit::Length(LengthUnit::Miles));
        let unit: Unit = serde_json::from_str("\"mL\"").unwrap();
        assert_eq!(unit, Unit::Volume(VolumeUnit::Milliliters));

        let err = serde_json::from_str::<Unit>("\"furlong\"").unwrap_err();
        assert!(err.to_string().contains("furlong"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("hr".parse::<Unit>(), Ok(Unit::Time(TimeUnit::Hours)));
        assert!("parsec".parse::<Unit>().is_err());
    }
}
