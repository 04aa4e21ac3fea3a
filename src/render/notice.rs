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

//! Render the modal notice shown when the amount is rejected.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{App, render::icons::ICON_ENTER};

const NOTICE_WIDTH: u16 = 44;

pub(crate) fn draw_notice(f: &mut Frame, area: Rect, app: &App, message: &str) {
    let mut lines: Vec<Line> = message.lines().map(Line::from).collect();
    lines.push(Line::default());
    lines.push(
        Line::styled(
            format!("[ OK {ICON_ENTER} ]"),
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center),
    );

    // Borders and vertical padding
    let height = lines.len() as u16 + 4;
    let popup = centered(area, NOTICE_WIDTH, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.notice_colour))
        .title(" Unit Conversion ")
        .title_style(Style::default().fg(app.theme.notice_colour).add_modifier(Modifier::BOLD))
        .padding(Padding::uniform(1))
        .style(Style::default().bg(app.theme.background_colour));

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(app.theme.value_fg))
            .wrap(Wrap { trim: true })
            .block(block),
        popup,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
