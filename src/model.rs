// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Conversion requests captured from the form.
//!
//! A request is built from the raw amount text and the two selected units
//! each time the user triggers a conversion, and is dropped as soon as the
//! result has been produced.

use measureui::units::{ConversionError, US_VOLUME, VolumeUnit};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ConversionRequest {
    pub(crate) amount: f64,
    pub(crate) from: VolumeUnit,
    pub(crate) to: VolumeUnit,
}

impl ConversionRequest {
    /// Validates the amount text and captures the selected units.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::NotANumber`] if the text is not a finite
    /// number, or [`ConversionError::NegativeAmount`] if it is below zero.
    pub(crate) fn parse(
        text: &str,
        from: VolumeUnit,
        to: VolumeUnit,
    ) -> Result<Self, ConversionError> {
        let amount = parse_amount(text)?;
        Ok(Self { amount, from, to })
    }

    pub(crate) fn execute(&self) -> Result<f64, ConversionError> {
        US_VOLUME.convert(self.amount, self.from, self.to)
    }
}

/// Parses a user-entered amount.
///
/// Surrounding whitespace is ignored. Infinities and NaN are treated as
/// non-numeric, and negative zero is folded into zero.
pub(crate) fn parse_amount(text: &str) -> Result<f64, ConversionError> {
    let amount = text
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ConversionError::NotANumber(text.to_string()))?;

    if amount < 0.0 {
        return Err(ConversionError::NegativeAmount(amount));
    }

    Ok(if amount == 0.0 { 0.0 } else { amount })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0", 0.0)]
    #[case("3", 3.0)]
    #[case(" 2.5 ", 2.5)]
    #[case("1e2", 100.0)]
    #[case(".5", 0.5)]
    fn test_parse_amount_accepts_numbers(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(parse_amount(text), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("1,5")]
    #[case("NaN")]
    #[case("inf")]
    #[case("-infinity")]
    fn test_parse_amount_rejects_non_numbers(#[case] text: &str) {
        assert_eq!(
            parse_amount(text),
            Err(ConversionError::NotANumber(text.to_string()))
        );
    }

    #[test]
    fn test_parse_amount_rejects_negative() {
        assert_eq!(parse_amount("-1"), Err(ConversionError::NegativeAmount(-1.0)));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let amount = parse_amount("-0").unwrap();
        assert!(amount.is_sign_positive());
    }

    #[test]
    fn test_request_executes_conversion() {
        let request = ConversionRequest::parse("1", VolumeUnit::Gallon, VolumeUnit::Quart).unwrap();
        assert_eq!(request.execute(), Ok(4.0));
    }

    #[test]
    fn test_request_rejects_before_conversion() {
        let request = ConversionRequest::parse("-3", VolumeUnit::Cup, VolumeUnit::Pint);
        assert_eq!(request, Err(ConversionError::NegativeAmount(-3.0)));
    }
}
