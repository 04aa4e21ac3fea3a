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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every handled key to redraw the whole frame.

mod help;
mod icons;
mod notice;

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
};

pub(crate) use icons::ICON_DROPDOWN;

use crate::{
    App,
    render::{help::draw_help, notice::draw_notice},
    theme::Theme,
};

const FORM_WIDTH: u16 = 72;
const FORM_HEIGHT: u16 = 12;

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The form is centred in the available space with the key hints on the
/// last line. A pending notice is drawn over everything else.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let [main, footer] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let [row] = Layout::vertical([Constraint::Length(FORM_HEIGHT)])
        .flex(Flex::Center)
        .areas(main);
    let [form_area] = Layout::horizontal([Constraint::Length(FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(row);

    app.form.draw(f, form_area, &app.theme);

    draw_help(f, footer, app);

    if let Some(message) = &app.notice {
        draw_notice(f, area, app, message);
    }
}
