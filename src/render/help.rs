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

//! Render the key hints shown beneath the form.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    App,
    render::icons::{ICON_ENTER, ICON_UP_DOWN},
};

pub(crate) fn draw_help(f: &mut Frame, area: Rect, app: &App) {
    let key = Style::default()
        .fg(app.theme.accent_colour)
        .add_modifier(Modifier::BOLD);
    let text = Style::default().fg(app.theme.label_fg);

    let hints = [
        ("Tab", "next field"),
        (ICON_UP_DOWN, "change unit"),
        (ICON_ENTER, "convert"),
        ("s", "swap units"),
        ("q", "quit"),
    ];

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(k, action)| {
            [
                Span::styled(format!(" {k} "), key),
                Span::styled(format!("{action} "), text),
            ]
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_draws_every_key_hint() {
        let app = App::new(AppConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                draw_help(f, area, &app);
            })
            .unwrap();

        let line: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(line.contains("Tab next field"));
        assert!(line.contains(&format!("{ICON_UP_DOWN} change unit")));
        assert!(line.contains(&format!("{ICON_ENTER} convert")));
        assert!(line.contains("s swap units"));
        assert!(line.contains("q quit"));
    }
}
