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

//! Keyboard routing.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::{
    App,
    events::{AppEvent, AppEventProcessor},
};

/// Maps keyboard input to application actions.
///
/// Keys are offered in order of precedence:
///
/// * **Interrupt**: Ctrl-C always exits.
/// * **Notice**: While a notice is showing it is modal; Enter or Esc
///   dismisses it and every other key is ignored.
/// * **Form**: The focused field consumes the keys it understands.
/// * **Global**: Whatever is left may quit the application.
///
/// # Errors
///
/// Returns an error if an event cannot be queued.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    if app.notice.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.event_tx.send(AppEvent::DismissNotice)?;
        }
        return Ok(());
    }

    if app.form.process_event(Event::Key(key), &app.event_tx)? {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.event_tx.send(AppEvent::ExitApplication)?,
        _ => {}
    }

    Ok(())
}
