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

//! Event routing for the conversion form.
//!
//! Keys are interpreted according to the focused field. Anything the form
//! does not use is reported as unhandled so the global key bindings can
//! act on it.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{ConversionForm, FormField},
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for ConversionForm {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key) = event else {
            return Ok(false);
        };

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Ok(true);
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return Ok(true);
            }
            KeyCode::Enter => {
                event_tx.send(AppEvent::ConvertRequested)?;
                return Ok(true);
            }
            _ => {}
        }

        match self.focus {
            FormField::Amount => {
                if key.code == KeyCode::Esc {
                    return Ok(false);
                }

                let before = self.amount.value().to_string();
                self.amount.handle_event(&event);
                if self.amount.value() != before {
                    self.clear_result();
                }

                // Everything else typed here belongs to the input
                Ok(true)
            }

            FormField::From | FormField::To => {
                if key.code == KeyCode::Char('s') {
                    self.swap_units();
                    return Ok(true);
                }

                let selector = if self.focus == FormField::From {
                    &mut self.from
                } else {
                    &mut self.to
                };

                match key.code {
                    KeyCode::Down | KeyCode::Char('j') => selector.next(),
                    KeyCode::Up | KeyCode::Char('k') => selector.previous(),
                    _ => return Ok(false),
                }

                self.clear_result();
                Ok(true)
            }

            FormField::Convert => match key.code {
                KeyCode::Char(' ') => {
                    event_tx.send(AppEvent::ConvertRequested)?;
                    Ok(true)
                }
                KeyCode::Char('s') => {
                    self.swap_units();
                    Ok(true)
                }
                _ => Ok(false),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};
    use measureui::units::VolumeUnit;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[fixture]
    fn form() -> ConversionForm {
        ConversionForm::new(VolumeUnit::Teaspoon, VolumeUnit::Tablespoon)
    }

    #[rstest]
    fn test_tab_moves_focus(mut form: ConversionForm) {
        let (tx, _rx) = mpsc::channel();
        assert!(form.process_event(key(KeyCode::Tab), &tx).unwrap());
        assert_eq!(form.focus, FormField::Amount);
        assert!(form.process_event(key(KeyCode::BackTab), &tx).unwrap());
        assert_eq!(form.focus, FormField::From);
    }

    #[rstest]
    fn test_arrows_change_focused_selector(mut form: ConversionForm) {
        let (tx, _rx) = mpsc::channel();
        form.process_event(key(KeyCode::Down), &tx).unwrap();
        assert_eq!(form.from.selected(), VolumeUnit::Tablespoon);
        assert_eq!(form.to.selected(), VolumeUnit::Tablespoon);

        form.focus = FormField::To;
        form.process_event(key(KeyCode::Up), &tx).unwrap();
        assert_eq!(form.to.selected(), VolumeUnit::Teaspoon);
    }

    #[rstest]
    fn test_typing_edits_amount(mut form: ConversionForm) {
        let (tx, _rx) = mpsc::channel();
        form.focus = FormField::Amount;
        form.set_result(1.0);

        form.process_event(key(KeyCode::Backspace), &tx).unwrap();
        for c in "12.5".chars() {
            assert!(form.process_event(key(KeyCode::Char(c)), &tx).unwrap());
        }

        assert_eq!(form.amount.value(), "12.5");
        assert_eq!(form.result, None);
    }

    #[rstest]
    fn test_quit_key_is_swallowed_while_editing(mut form: ConversionForm) {
        let (tx, _rx) = mpsc::channel();
        form.focus = FormField::Amount;
        assert!(form.process_event(key(KeyCode::Char('q')), &tx).unwrap());

        form.focus = FormField::From;
        assert!(!form.process_event(key(KeyCode::Char('q')), &tx).unwrap());
    }

    #[rstest]
    fn test_escape_is_not_handled_in_amount(mut form: ConversionForm) {
        let (tx, _rx) = mpsc::channel();
        form.focus = FormField::Amount;
        assert!(!form.process_event(key(KeyCode::Esc), &tx).unwrap());
    }

    #[rstest]
    #[case(FormField::From, KeyCode::Enter)]
    #[case(FormField::Amount, KeyCode::Enter)]
    #[case(FormField::Convert, KeyCode::Enter)]
    #[case(FormField::Convert, KeyCode::Char(' '))]
    fn test_trigger_requests_conversion(
        mut form: ConversionForm,
        #[case] focus: FormField,
        #[case] code: KeyCode,
    ) {
        let (tx, rx) = mpsc::channel();
        form.focus = focus;
        assert!(form.process_event(key(code), &tx).unwrap());
        assert!(matches!(rx.try_recv(), Ok(AppEvent::ConvertRequested)));
    }

    #[rstest]
    fn test_swap_outside_amount(mut form: ConversionForm) {
        let (tx, _rx) = mpsc::channel();
        form.focus = FormField::Convert;
        form.process_event(key(KeyCode::Char('s')), &tx).unwrap();
        assert_eq!(form.from.selected(), VolumeUnit::Tablespoon);
        assert_eq!(form.to.selected(), VolumeUnit::Teaspoon);
    }
}
