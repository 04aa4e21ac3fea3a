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

//! Conversion failures.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// The name does not match any entry in the unit sequence.
    #[error("unknown unit \"{0}\"")]
    InvalidUnit(String),

    #[error("invalid unit amount \"{0}\", given amount must be a number")]
    NotANumber(String),

    #[error("invalid unit amount {0}, given amount must be non-negative")]
    NegativeAmount(f64),
}
