//! Per-category converter screen state

use tracing::debug;
use gauge_core::{parse_input, InputValue};
use gauge_units::{
    convert, ConversionRequest, ConversionResult, LengthUnit, TemperatureUnit, TimeUnit, UnitSet,
    VolumeUnit,
};

/// State behind one converter screen: the input text and two unit pickers
///
/// The result is derived from these three fields on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterScreen<U: UnitSet> {
    input: String,
    input_unit: U,
    output_unit: U,
}

impl<U: UnitSet> ConverterScreen<U> {
    pub fn new(input_unit: U, output_unit: U) -> Self {
        ConverterScreen {
            input: String::new(),
            input_unit,
            output_unit,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_unit(&self) -> U {
        self.input_unit
    }

    pub fn output_unit(&self) -> U {
        self.output_unit
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        debug!(category = %U::CATEGORY, input = %self.input, "input changed");
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn set_input_unit(&mut self, unit: U) {
        debug!(category = %U::CATEGORY, unit = unit.symbol(), "input unit changed");
        self.input_unit = unit;
    }

    pub fn set_output_unit(&mut self, unit: U) {
        debug!(category = %U::CATEGORY, unit = unit.symbol(), "output unit changed");
        self.output_unit = unit;
    }

    /// Exchange the input and output units, keeping the typed text
    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.input_unit, &mut self.output_unit);
    }

    /// How the current input text reads
    pub fn input_value(&self) -> InputValue {
        InputValue::classify(&self.input)
    }

    /// The converted number, treating unparseable input as zero
    pub fn converted_value(&self) -> f64 {
        convert(parse_input(&self.input), self.input_unit, self.output_unit)
    }

    pub fn result(&self) -> ConversionResult {
        ConversionResult::new(self.converted_value(), self.output_unit.into_unit())
    }

    /// Hint shown in the empty input field
    pub fn placeholder(&self) -> String {
        format!("Enter value: {}", self.input_unit.symbol())
    }

    /// The screen state as a category-tagged request
    pub fn request(&self) -> ConversionRequest {
        ConversionRequest::new(
            U::CATEGORY,
            self.input_unit.into_unit(),
            self.output_unit.into_unit(),
            self.input.clone(),
        )
    }
}

impl Default for ConverterScreen<TemperatureUnit> {
    fn default() -> Self {
        Self::new(TemperatureUnit::Celsius, TemperatureUnit::Kelvin)
    }
}

impl Default for ConverterScreen<LengthUnit> {
    fn default() -> Self {
        Self::new(LengthUnit::Meters, LengthUnit::Miles)
    }
}

impl Default for ConverterScreen<TimeUnit> {
    fn default() -> Self {
        Self::new(TimeUnit::Seconds, TimeUnit::Minutes)
    }
}

impl Default for ConverterScreen<VolumeUnit> {
    fn default() -> Self {
        Self::new(VolumeUnit::Milliliters, VolumeUnit::Liters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let t = ConverterScreen::<TemperatureUnit>::default();
        assert_eq!((t.input_unit(), t.output_unit()), (TemperatureUnit::Celsius, TemperatureUnit::Kelvin));
        let l = ConverterScreen::<LengthUnit>::default();
        assert_eq!((l.input_unit(), l.output_unit()), (LengthUnit::Meters, LengthUnit::Miles));
        let s = ConverterScreen::<TimeUnit>::default();
        assert_eq!((s.input_unit(), s.output_unit()), (TimeUnit::Seconds, TimeUnit::Minutes));
        let v = ConverterScreen::<VolumeUnit>::default();
        assert_eq!((v.input_unit(), v.output_unit()), (VolumeUnit::Milliliters, VolumeUnit::Liters));
    }

    #[test]
    fn test_empty_input_converts_zero() {
        let screen = ConverterScreen::<TemperatureUnit>::default();
        assert_eq!(screen.input_value(), InputValue::Empty);
        assert_eq!(screen.converted_value(), 273.15);
        assert_eq!(screen.result().to_string(), "273.15 K");
    }

    #[test]
    fn test_typing_updates_result() {
        let mut screen = ConverterScreen::<TimeUnit>::default();
        screen.set_input("-");
        assert_eq!(screen.input_value(), InputValue::Partial);
        assert_eq!(screen.converted_value(), 0.0);

        screen.set_input("-90");
        assert_eq!(screen.converted_value(), -1.5);
        assert_eq!(screen.result().to_string(), "-1.5 min");
    }

    #[test]
    fn test_unit_changes() {
        let mut screen = ConverterScreen::<LengthUnit>::default();
        screen.set_input("1");
        screen.set_input_unit(LengthUnit::Miles);
        screen.set_output_unit(LengthUnit::Feet);
        assert!((screen.converted_value() - 5280.0).abs() < 1e-9);

        screen.swap_units();
        assert_eq!(screen.input_unit(), LengthUnit::Feet);
        assert_eq!(screen.input(), "1");
        assert!((screen.converted_value() - 1.0 / 5280.0).abs() < 1e-12);
    }

    #[test]
    fn test_placeholder() {
        let mut screen = ConverterScreen::<VolumeUnit>::default();
        assert_eq!(screen.placeholder(), "Enter value: mL");
        screen.set_input_unit(VolumeUnit::Gallons);
        assert_eq!(screen.placeholder(), "Enter value: gallons");
    }

    #[test]
    fn test_request_matches_screen() {
        let mut screen = ConverterScreen::<VolumeUnit>::default();
        screen.set_input("500");
        let result = screen.request().evaluate().unwrap();
        assert_eq!(result, screen.result());
        assert_eq!(result.value, 0.5);

        screen.clear_input();
        assert_eq!(screen.input(), "");
    }
}
