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

//! Application logic, event handling, and dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. It organizes how key presses are translated into internal
//! state changes.
//!
//! # Organization
//!
//! * [`key_handlers`]: Routes key presses to the notice, the form, then the
//!   global bindings.
//! * [`handlers`]: Applies each [`AppEvent`] to the application state.
//!
//! Everything runs on the main thread. Components queue [`AppEvent`]s on the
//! application channel and the queue is drained after every key press.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::sync::mpsc::Sender;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::debug;

use crate::{App, render::draw, util::term::Tui};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    ConvertRequested,

    ShowNotice(String),
    DismissNotice,

    ExitApplication,
}

pub(crate) trait AppEventProcessor {
    /// Offers `event` to the component, returning whether it was consumed.
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<bool>;
}

/// Runs the main application loop, reading terminal input and rendering the
/// UI after each event.
///
/// This function loops until an [`AppEvent::ExitApplication`] is dispatched.
///
/// # Errors
///
/// Returns an error if reading input, drawing, or handling an event fails.
pub(crate) fn process_events(terminal: &mut Tui, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    loop {
        match event::read().context("Failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.event_tx.send(AppEvent::Key(key))?;
            }
            // Anything else, including resizes, just redraws
            _ => {}
        }

        if !dispatch_pending(app)? {
            break;
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Handles every queued event, including any queued while handling them.
///
/// Returns `false` once the application has been asked to exit.
pub(crate) fn dispatch_pending(app: &mut App) -> Result<bool> {
    while let Ok(event) = app.event_rx.try_recv() {
        debug!(?event, "Dispatching");

        match event {
            AppEvent::ExitApplication => return Ok(false),
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::ConvertRequested => handle_convert_requested(app)?,
            AppEvent::ShowNotice(message) => handle_show_notice(app, message),
            AppEvent::DismissNotice => handle_dismiss_notice(app),
        }
    }

    Ok(true)
}
