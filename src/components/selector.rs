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

//! Unit choice box state.
//!
//! Holds the selected position within the US volume sequence and steps
//! through it, wrapping at either end.

use measureui::units::{US_VOLUME, VolumeUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UnitSelector {
    index: usize,
}

impl UnitSelector {
    pub(crate) fn new(unit: VolumeUnit) -> Self {
        let mut selector = Self { index: 0 };
        selector.select(unit);
        selector
    }

    pub(crate) fn selected(&self) -> VolumeUnit {
        US_VOLUME.units()[self.index]
    }

    pub(crate) fn select(&mut self, unit: VolumeUnit) {
        self.index = US_VOLUME.position(unit).unwrap_or(0);
    }

    pub(crate) fn next(&mut self) {
        let len = US_VOLUME.units().len();
        self.index = if self.index >= len - 1 { 0 } else { self.index + 1 };
    }

    pub(crate) fn previous(&mut self) {
        let len = US_VOLUME.units().len();
        self.index = if self.index == 0 { len - 1 } else { self.index - 1 };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_next_wraps_to_smallest() {
        let mut selector = UnitSelector::new(VolumeUnit::Quart);
        selector.next();
        assert_eq!(selector.selected(), VolumeUnit::Gallon);
        selector.next();
        assert_eq!(selector.selected(), VolumeUnit::Teaspoon);
    }

    #[test]
    fn test_previous_wraps_to_largest() {
        let mut selector = UnitSelector::new(VolumeUnit::Teaspoon);
        selector.previous();
        assert_eq!(selector.selected(), VolumeUnit::Gallon);
        selector.previous();
        assert_eq!(selector.selected(), VolumeUnit::Quart);
    }

    #[test]
    fn test_select_moves_to_unit() {
        let mut selector = UnitSelector::new(VolumeUnit::Teaspoon);
        selector.select(VolumeUnit::Cup);
        assert_eq!(selector.selected(), VolumeUnit::Cup);
    }
}
