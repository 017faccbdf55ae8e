//! Conversion engine
//!
//! Every conversion goes through the category base unit:
//! `base = from.to_base(value)`, `result = to.from_base(base)`.

use tracing::trace;
use gauge_core::GaugeError;
use crate::{Affine, Category, Unit, UnitSet};

/// Convert a value between two units of the same category
///
/// The unit type fixes the category, so mixing categories does not
/// compile. Converting a unit to itself returns `value` unchanged.
/// NaN and infinities propagate.
pub fn convert<U: UnitSet>(value: f64, from: U, to: U) -> f64 {
    if from == to {
        return value;
    }
    let result = to.affine().from_base(from.affine().to_base(value));
    trace!(category = %U::CATEGORY, from = from.symbol(), to = to.symbol(), value, result, "convert");
    result
}

/// Convert a value between two units chosen at runtime
///
/// Fails only if either unit lies outside `category`.
pub fn convert_in(value: f64, category: Category, from: Unit, to: Unit) -> Result<f64, GaugeError> {
    let from_affine = lookup(category, from)?;
    let to_affine = lookup(category, to)?;
    if from == to {
        return Ok(value);
    }
    let result = to_affine.from_base(from_affine.to_base(value));
    trace!(%category, from = from.symbol(), to = to.symbol(), value, result, "convert_in");
    Ok(result)
}

/// Look up the affine relation of `unit` to the base unit of `category`
pub fn lookup(category: Category, unit: Unit) -> Result<Affine, GaugeError> {
    if !category.contains(unit) {
        return Err(GaugeError::category_mismatch(
            unit.name(),
            category.name(),
            unit.category().name(),
        ));
    }
    Ok(unit.affine())
}

/// Express a value given in `unit` in its category base unit
pub fn to_base(value: f64, unit: Unit) -> f64 {
    unit.affine().to_base(value)
}

/// Express a base-unit value in `unit`
pub fn from_base(value: f64, unit: Unit) -> f64 {
    unit.affine().from_base(value)
}
