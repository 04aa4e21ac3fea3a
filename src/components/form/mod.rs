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

//! The conversion form.
//!
//! This module holds the state of the single screen of the application: the
//! two unit selectors, the amount being converted, the currently focused
//! field and the last result.

mod event;
mod render;

use measureui::units::{ConversionError, VolumeUnit};
use tui_input::Input;

use crate::{components::UnitSelector, model::ConversionRequest, util::format::format_amount};

const INITIAL_AMOUNT: &str = "0";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum FormField {
    #[default]
    From,
    Amount,
    To,
    Convert,
}

impl FormField {
    pub(crate) fn next(self) -> Self {
        match self {
            FormField::From => FormField::Amount,
            FormField::Amount => FormField::To,
            FormField::To => FormField::Convert,
            FormField::Convert => FormField::From,
        }
    }

    pub(crate) fn previous(self) -> Self {
        match self {
            FormField::From => FormField::Convert,
            FormField::Amount => FormField::From,
            FormField::To => FormField::Amount,
            FormField::Convert => FormField::To,
        }
    }
}

pub(crate) struct ConversionForm {
    pub(crate) focus: FormField,
    pub(crate) from: UnitSelector,
    pub(crate) to: UnitSelector,
    pub(crate) amount: Input,
    pub(crate) result: Option<String>,
}

impl ConversionForm {
    pub(crate) fn new(from: VolumeUnit, to: VolumeUnit) -> Self {
        Self {
            focus: FormField::default(),
            from: UnitSelector::new(from),
            to: UnitSelector::new(to),
            amount: Input::new(INITIAL_AMOUNT.to_string()),
            result: None,
        }
    }

    /// Builds a request from the current field values.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount text is not a non-negative number.
    pub(crate) fn request(&self) -> Result<ConversionRequest, ConversionError> {
        ConversionRequest::parse(
            self.amount.value(),
            self.from.selected(),
            self.to.selected(),
        )
    }

    pub(crate) fn set_result(&mut self, value: f64) {
        self.result = Some(format_amount(value));
    }

    pub(crate) fn clear_result(&mut self) {
        self.result = None;
    }

    pub(crate) fn swap_units(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
        self.clear_result();
    }
}
