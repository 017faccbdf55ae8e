//! Gauge Units - Unit catalog and conversion engine
//!
//! Converts values between units of four fixed categories. Each unit is
//! an affine map to its category base unit:
//! - Temperature (°C, °F, K), base Celsius
//! - Length (m, km, ft, yd, mi), base meters
//! - Time (sec, min, hr), base seconds
//! - Volume (mL, L, cups, pints, gallons), base liters
//!
//! The typed API (`convert` over a `UnitSet`) rules out cross-category
//! conversions at compile time; the dynamic API (`convert_in` over
//! `Unit`) reports them as `GaugeError::CategoryMismatch`.

mod category;
mod convert;
mod parse;
mod request;
mod unit;
mod units;

pub use category::Category;
pub use convert::{convert, convert_in, from_base, lookup, to_base};
pub use parse::{parse_unit, parse_unit_in};
pub use request::{ConversionRequest, ConversionResult};
pub use unit::{Affine, Unit, UnitSet};
pub use units::{all_units, LengthUnit, TemperatureUnit, TimeUnit, VolumeUnit};

pub use gauge_core::{parse_input, GaugeError};
