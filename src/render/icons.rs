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

//! Unicode symbols for the TUI.
//!
//! Chosen for compatibility with most modern terminal emulators and fonts.

// Drop-down marker drawn after the selected unit
pub(crate) const ICON_DROPDOWN: &str = "\u{25BE}";

// Key hints
pub(crate) const ICON_UP_DOWN: &str = "\u{2191}\u{2193}";
pub(crate) const ICON_ENTER: &str = "\u{23CE}";
