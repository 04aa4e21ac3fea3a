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

//! Render the conversion form.
//!
//! The layout follows a single sentence, "Convert [amount] [unit] to
//! [unit]", with the trigger underneath and the read-only result below it.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    components::{ConversionForm, FormField, UnitSelector},
    render::{ICON_DROPDOWN, Render},
    theme::Theme,
};

impl Render for ConversionForm {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .title(" Unit Conversion ")
            .title_style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        let sentence = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(9),
                Constraint::Length(12),
                Constraint::Min(17),
                Constraint::Length(4),
                Constraint::Min(17),
            ])
            .horizontal_margin(1)
            .split(rows[0]);

        draw_label(f, sentence[0], "Convert", theme);
        self.draw_amount(f, sentence[1], theme);
        draw_selector(f, sentence[2], &self.from, self.focus == FormField::From, theme);
        draw_label(f, sentence[3], " to", theme);
        draw_selector(f, sentence[4], &self.to, self.focus == FormField::To, theme);

        let button_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(13),
                Constraint::Min(0),
            ])
            .split(rows[1]);

        let focused = self.focus == FormField::Convert;
        let mut button_style = Style::default().fg(theme.label_fg).add_modifier(Modifier::BOLD);
        if focused {
            button_style = button_style.fg(theme.background_colour).bg(theme.accent_colour);
        }
        f.render_widget(
            Paragraph::new("Convert")
                .alignment(Alignment::Center)
                .style(button_style)
                .block(field_block(focused, theme)),
            button_row[1],
        );

        let result_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(8),
                Constraint::Length(18),
                Constraint::Min(0),
            ])
            .split(rows[2]);

        draw_label(f, result_row[1], "Result:", theme);
        f.render_widget(
            Paragraph::new(self.result.as_deref().unwrap_or_default())
                .style(Style::default().fg(theme.result_fg).add_modifier(Modifier::BOLD))
                .block(field_block(false, theme)),
            result_row[2],
        );
    }
}

impl ConversionForm {
    fn draw_amount(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let focused = self.focus == FormField::Amount;
        let block = field_block(focused, theme);
        let inner = block.inner(area);

        // Keep the cursor inside the box by scrolling long values
        let width = inner.width.max(1) as usize;
        let scroll = self.amount.visual_scroll(width);

        f.render_widget(
            Paragraph::new(self.amount.value())
                .style(Style::default().fg(theme.value_fg).bg(theme.input_bg))
                .scroll((0, scroll as u16))
                .block(block),
            area,
        );

        if focused {
            let offset = self.amount.visual_cursor().saturating_sub(scroll);
            f.set_cursor_position((inner.x + offset as u16, inner.y));
        }
    }
}

fn draw_selector(f: &mut Frame, area: Rect, selector: &UnitSelector, focused: bool, theme: &Theme) {
    let text = format!("{} {}", selector.selected().label(), ICON_DROPDOWN);
    f.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(theme.value_fg))
            .block(field_block(focused, theme)),
        area,
    );
}

fn draw_label(f: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    // Labels sit on the middle line of their bordered neighbours
    let line = Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    };
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(theme.label_fg).add_modifier(Modifier::BOLD)),
        line,
    );
}

fn field_block(focused: bool, theme: &Theme) -> Block<'static> {
    let colour = if focused {
        theme.accent_colour
    } else {
        theme.border_colour
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colour))
}

#[cfg(test)]
mod tests {
    use measureui::units::VolumeUnit;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn render(form: &mut ConversionForm) -> Vec<String> {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(72, 12)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                form.draw(f, area, &theme);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    #[test]
    fn test_draws_fields_and_labels() {
        let mut form = ConversionForm::new(VolumeUnit::Teaspoon, VolumeUnit::Tablespoon);
        let screen = render(&mut form).join("\n");

        assert!(screen.contains("Unit Conversion"));
        assert!(screen.contains("Convert"));
        assert!(screen.contains("Teaspoon(s)"));
        assert!(screen.contains("Tablespoon(s)"));
        assert!(screen.contains(" to"));
        assert!(screen.contains("Result:"));
    }

    #[test]
    fn test_draws_result_when_present() {
        let mut form = ConversionForm::new(VolumeUnit::Gallon, VolumeUnit::Quart);
        form.set_result(4.0);
        let screen = render(&mut form).join("\n");

        assert!(screen.contains("Gallon(s)"));
        assert!(screen.contains("Quart(s)"));
        assert!(screen.contains("4.00"));
    }
}
