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

//! US volume units and their conversion.
//!
//! This module owns the fixed, ordered sequence of supported units along
//! with the adjacent ratios between them.
//!
//! # Organization
//!
//! * [`scale`]: The ordered unit table and the chained-ratio conversion.
//! * [`error`]: Failures raised while resolving names or validating amounts.

mod error;
mod scale;

pub use error::ConversionError;
pub use scale::{US_VOLUME, UnitScale, convert, round_to_hundredths};

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A supported US volume unit, ordered smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeUnit {
    Teaspoon,
    Tablespoon,
    Ounce,
    Cup,
    Pint,
    Quart,
    Gallon,
}

impl VolumeUnit {
    /// The label shown in the unit selectors.
    pub const fn label(&self) -> &'static str {
        match self {
            VolumeUnit::Teaspoon => "Teaspoon(s)",
            VolumeUnit::Tablespoon => "Tablespoon(s)",
            VolumeUnit::Ounce => "Ounce(s)",
            VolumeUnit::Cup => "Cup(s)",
            VolumeUnit::Pint => "Pint(s)",
            VolumeUnit::Quart => "Quart(s)",
            VolumeUnit::Gallon => "Gallon(s)",
        }
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VolumeUnit {
    type Err = ConversionError;

    /// Resolves a display label, a singular or plural name, or a common
    /// abbreviation. Matching ignores case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();

        match lower.as_str() {
            "teaspoon(s)" | "teaspoon" | "teaspoons" | "tsp" => Ok(VolumeUnit::Teaspoon),
            "tablespoon(s)" | "tablespoon" | "tablespoons" | "tbsp" => Ok(VolumeUnit::Tablespoon),
            "ounce(s)" | "ounce" | "ounces" | "oz" | "fl oz" | "floz" => Ok(VolumeUnit::Ounce),
            "cup(s)" | "cup" | "cups" | "c" => Ok(VolumeUnit::Cup),
            "pint(s)" | "pint" | "pints" | "pt" => Ok(VolumeUnit::Pint),
            "quart(s)" | "quart" | "quarts" | "qt" => Ok(VolumeUnit::Quart),
            "gallon(s)" | "gallon" | "gallons" | "gal" => Ok(VolumeUnit::Gallon),
            _ => Err(ConversionError::InvalidUnit(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Teaspoon(s)", VolumeUnit::Teaspoon)]
    #[case("Tablespoon(s)", VolumeUnit::Tablespoon)]
    #[case("Ounce(s)", VolumeUnit::Ounce)]
    #[case("Cup(s)", VolumeUnit::Cup)]
    #[case("Pint(s)", VolumeUnit::Pint)]
    #[case("Quart(s)", VolumeUnit::Quart)]
    #[case("Gallon(s)", VolumeUnit::Gallon)]
    fn test_labels_resolve_to_their_unit(#[case] label: &str, #[case] unit: VolumeUnit) {
        assert_eq!(label.parse::<VolumeUnit>(), Ok(unit));
        assert_eq!(unit.label(), label);
    }

    #[rstest]
    #[case("tsp", VolumeUnit::Teaspoon)]
    #[case("  TBSP ", VolumeUnit::Tablespoon)]
    #[case("fl oz", VolumeUnit::Ounce)]
    #[case("cups", VolumeUnit::Cup)]
    #[case("Pint", VolumeUnit::Pint)]
    #[case("qt", VolumeUnit::Quart)]
    #[case("gallons", VolumeUnit::Gallon)]
    fn test_aliases_resolve(#[case] name: &str, #[case] unit: VolumeUnit) {
        assert_eq!(name.parse::<VolumeUnit>(), Ok(unit));
    }

    #[rstest]
    #[case("")]
    #[case("liter")]
    #[case("Cups(s)")]
    #[case("barrel")]
    fn test_unknown_names_are_rejected(#[case] name: &str) {
        assert_eq!(
            name.parse::<VolumeUnit>(),
            Err(ConversionError::InvalidUnit(name.to_string()))
        );
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(VolumeUnit::Quart.to_string(), "Quart(s)");
    }
}
