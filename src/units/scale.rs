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

//! The ordered unit table and chained-ratio conversion.
//!
//! Ratios are only stored between neighbouring units, larger to smaller.
//! Converting across several steps multiplies through each intervening
//! ratio, or its reciprocal when moving to a larger unit.

use tracing::trace;

use super::{ConversionError, VolumeUnit};

/// The US customary volume units, teaspoon through gallon.
pub static US_VOLUME: UnitScale = UnitScale {
    units: [
        VolumeUnit::Teaspoon,
        VolumeUnit::Tablespoon,
        VolumeUnit::Ounce,
        VolumeUnit::Cup,
        VolumeUnit::Pint,
        VolumeUnit::Quart,
        VolumeUnit::Gallon,
    ],
    // ratios[i] is how many of units[i] make one units[i + 1]
    ratios: [
        3.0, // tablespoon -> teaspoon
        2.0, // ounce -> tablespoon
        8.0, // cup -> ounce
        2.0, // pint -> cup
        2.0, // quart -> pint
        4.0, // gallon -> quart
    ],
};

/// An ordered sequence of units with a ratio between each adjacent pair.
#[derive(Debug)]
pub struct UnitScale {
    units: [VolumeUnit; 7],
    ratios: [f64; 6],
}

impl UnitScale {
    /// The units in order, smallest first.
    pub fn units(&self) -> &[VolumeUnit] {
        &self.units
    }

    /// The factor converting one `units[index + 1]` into `units[index]`.
    pub fn adjacent_ratio(&self, index: usize) -> Option<f64> {
        self.ratios.get(index).copied()
    }

    /// Position of `unit` within the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidUnit`] if the unit is not part of
    /// this scale.
    pub fn position(&self, unit: VolumeUnit) -> Result<usize, ConversionError> {
        self.units
            .iter()
            .position(|u| *u == unit)
            .ok_or_else(|| ConversionError::InvalidUnit(unit.label().to_string()))
    }

    /// Resolves a unit name against this scale.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidUnit`] if the name is not recognised
    /// or names a unit outside this scale.
    pub fn lookup(&self, name: &str) -> Result<VolumeUnit, ConversionError> {
        let unit = name.parse::<VolumeUnit>()?;
        self.position(unit)?;
        Ok(unit)
    }

    /// Converts `amount` of `from` into `to`, rounded to two decimal places.
    ///
    /// Intermediate products keep full precision; rounding is applied once
    /// to the final value.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidUnit`] if either unit is not part of
    /// this scale.
    pub fn convert(
        &self,
        amount: f64,
        from: VolumeUnit,
        to: VolumeUnit,
    ) -> Result<f64, ConversionError> {
        let start = self.position(from)?;
        let target = self.position(to)?;

        let mut result = amount;

        if start < target {
            for ratio in &self.ratios[start..target] {
                result *= ratio.recip();
            }
        } else if start > target {
            for ratio in self.ratios[target..start].iter().rev() {
                result *= ratio;
            }
        }

        trace!(amount, %from, %to, result, "Converted before rounding");

        Ok(round_to_hundredths(result))
    }

    /// Converts between two units given by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidUnit`] naming whichever of the two
    /// names could not be resolved, checking `source` first.
    pub fn convert_named(
        &self,
        amount: f64,
        source: &str,
        target: &str,
    ) -> Result<f64, ConversionError> {
        let from = self.lookup(source)?;
        let to = self.lookup(target)?;
        self.convert(amount, from, to)
    }
}

/// Converts `amount` of the `source` unit into the `target` unit on the US
/// volume scale.
///
/// Both names accept the selector labels (`"Cup(s)"`) as well as plain names
/// and abbreviations (`"cups"`, `"tbsp"`).
///
/// # Examples
///
/// ```
/// use measureui::units::convert;
///
/// assert_eq!(convert(1.0, "Gallon(s)", "Quart(s)"), Ok(4.0));
/// assert_eq!(convert(1.0, "Cup(s)", "Teaspoon(s)"), Ok(48.0));
/// ```
///
/// # Errors
///
/// Returns [`ConversionError::InvalidUnit`] for an unrecognised name.
pub fn convert(amount: f64, source: &str, target: &str) -> Result<f64, ConversionError> {
    US_VOLUME.convert_named(amount, source, target)
}

/// Magnitude from which an `f64` no longer has room for a hundredths digit.
const MAX_HUNDREDTHS: f64 = (1_u64 << 52) as f64 / 100.0;

/// Rounds half away from zero to two decimal places.
///
/// Ties are judged on the shortest decimal form of `value`, the digits a
/// user typed, so `1.005` becomes `1.01` even though the nearest binary
/// value lies just below it. Values too large to carry hundredths, and
/// non-finite values, are returned unchanged.
pub fn round_to_hundredths(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= MAX_HUNDREDTHS {
        return value;
    }

    let magnitude = value.abs();
    let text = magnitude.to_string();
    let fraction = text.split_once('.').map_or("", |(_, digits)| digits);
    let digit = |index: usize| {
        fraction
            .as_bytes()
            .get(index)
            .map_or(0.0, |b| f64::from(b - b'0'))
    };

    // exact: the whole part times 100 stays below 2^52
    let mut hundredths = magnitude.trunc() * 100.0 + digit(0) * 10.0 + digit(1);
    if digit(2) >= 5.0 {
        hundredths += 1.0;
    }

    (hundredths / 100.0).copysign(value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    /// Teaspoons in one of each unit, derived from the ratio table.
    fn teaspoons_in(unit: VolumeUnit) -> f64 {
        let position = US_VOLUME.position(unit).unwrap();
        US_VOLUME.ratios[..position].iter().product()
    }

    #[rstest]
    #[case(1.0, "Gallon(s)", "Quart(s)", 4.0)]
    #[case(3.0, "Teaspoon(s)", "Tablespoon(s)", 1.0)]
    #[case(8.0, "Ounce(s)", "Cup(s)", 1.0)]
    #[case(1.0, "Cup(s)", "Teaspoon(s)", 48.0)]
    #[case(1.0, "Gallon(s)", "Teaspoon(s)", 768.0)]
    #[case(768.0, "Teaspoon(s)", "Gallon(s)", 1.0)]
    #[case(2.5, "Pint(s)", "Ounce(s)", 40.0)]
    #[case(1.0, "Teaspoon(s)", "Cup(s)", 0.02)]
    #[case(1.0, "Tablespoon(s)", "Gallon(s)", 0.0)]
    fn test_convert_known_values(
        #[case] amount: f64,
        #[case] source: &str,
        #[case] target: &str,
        #[case] expected: f64,
    ) {
        assert_eq!(convert(amount, source, target), Ok(expected));
    }

    #[test]
    fn test_adjacent_pairs_yield_their_ratio() {
        let units = US_VOLUME.units();
        for (index, pair) in units.windows(2).enumerate() {
            let (smaller, larger) = (pair[0], pair[1]);
            let ratio = US_VOLUME.adjacent_ratio(index).unwrap();
            assert_eq!(US_VOLUME.convert(1.0, larger, smaller), Ok(ratio));
        }
    }

    #[test]
    fn test_adjacent_ratio_out_of_range() {
        assert_eq!(US_VOLUME.adjacent_ratio(6), None);
    }

    #[rstest]
    fn test_identity_rounds_only(
        #[values(0.0, 1.0, 2.345, 10.004, 99.999)] amount: f64,
    ) {
        for unit in US_VOLUME.units() {
            assert_eq!(
                US_VOLUME.convert(amount, *unit, *unit),
                Ok(round_to_hundredths(amount))
            );
        }
    }

    #[test]
    fn test_round_trip_between_all_pairs() {
        // Whole gallons are whole numbers in every unit, so nothing is lost
        // to rounding in either direction.
        for from in US_VOLUME.units() {
            for to in US_VOLUME.units() {
                let amount = 3.0 * teaspoons_in(VolumeUnit::Gallon) / teaspoons_in(*from);
                let there = US_VOLUME.convert(amount, *from, *to).unwrap();
                let back = US_VOLUME.convert(there, *to, *from).unwrap();
                assert!(
                    (back - amount).abs() < 0.005,
                    "{from} -> {to} -> {from}: {amount} became {back}"
                );
            }
        }
    }

    #[rstest]
    fn test_round_trip_through_smaller_unit(#[values(0.25, 1.5, 3.75, 12.1)] amount: f64) {
        for (index, from) in US_VOLUME.units().iter().enumerate() {
            for to in &US_VOLUME.units()[..index] {
                let there = US_VOLUME.convert(amount, *from, *to).unwrap();
                let back = US_VOLUME.convert(there, *to, *from).unwrap();
                assert!(
                    (back - amount).abs() <= 0.01,
                    "{from} -> {to} -> {from}: {amount} became {back}"
                );
            }
        }
    }

    #[test]
    fn test_rounds_half_up_at_final_step() {
        assert_eq!(convert(0.125, "Cup(s)", "Ounce(s)"), Ok(1.0));
        assert_eq!(round_to_hundredths(0.125), 0.13);
        assert_eq!(round_to_hundredths(2.0 / 3.0), 0.67);
    }

    #[rstest]
    #[case(1.005, 1.01)]
    #[case(1.015, 1.02)]
    #[case(2.675, 2.68)]
    #[case(0.995, 1.0)]
    #[case(99.995, 100.0)]
    #[case(0.0049, 0.0)]
    #[case(1e-7, 0.0)]
    #[case(-1.005, -1.01)]
    fn test_ties_follow_decimal_digits(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(round_to_hundredths(value), expected);
    }

    #[test]
    fn test_typed_tie_rounds_up_through_identity() {
        assert_eq!(convert(1.005, "Cup(s)", "Cup(s)"), Ok(1.01));
        assert_eq!(convert(1.015, "Pint(s)", "Pint(s)"), Ok(1.02));
    }

    #[rstest]
    #[case(1e307)]
    #[case(1e20)]
    #[case(f64::MAX)]
    fn test_huge_amounts_stay_finite(#[case] amount: f64) {
        assert_eq!(round_to_hundredths(amount), amount);
        assert_eq!(convert(amount, "Cup(s)", "Cup(s)"), Ok(amount));
    }

    #[test]
    fn test_non_finite_values_pass_through() {
        assert_eq!(round_to_hundredths(f64::INFINITY), f64::INFINITY);
        assert!(round_to_hundredths(f64::NAN).is_nan());
    }

    #[rstest]
    #[case("Litre(s)", "Cup(s)", "Litre(s)")]
    #[case("Cup(s)", "Barrel(s)", "Barrel(s)")]
    #[case("", "", "")]
    fn test_unknown_unit_fails_explicitly(
        #[case] source: &str,
        #[case] target: &str,
        #[case] reported: &str,
    ) {
        assert_eq!(
            convert(1.0, source, target),
            Err(ConversionError::InvalidUnit(reported.to_string()))
        );
    }

    #[test]
    fn test_lookup_accepts_aliases() {
        assert_eq!(US_VOLUME.lookup("tbsp"), Ok(VolumeUnit::Tablespoon));
        assert_eq!(convert(4.0, "qt", "gal"), Ok(1.0));
    }
}
