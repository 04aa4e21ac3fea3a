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

//! # Unit Conversion TUI.
//!
//! A terminal form for converting between US volume units, teaspoons
//! through gallons.
//!
//! This application draws the form with `ratatui` and feeds it key presses
//! read through `crossterm`. The conversion itself lives in the library's
//! [`measureui::units`] module.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Components talk
//! to the event loop over a `std::sync::mpsc` channel, all on the main
//! thread.

mod components;
mod config;
mod events;
mod logging;
mod model;
mod render;
mod theme;
mod util;

use std::{
    panic,
    sync::mpsc::{self, Receiver, Sender},
};

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::{
    components::ConversionForm,
    config::AppConfig,
    events::{AppEvent, process_events},
    theme::Theme,
    util::term,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub form: ConversionForm,
    pub notice: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let form = ConversionForm::new(config.default_from, config.default_to);

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            form,
            notice: None,
        }
    }
}

/// The entry point of the application.
///
/// Initialises logging and configuration, manages the terminal lifecycle,
/// and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let log_path = logging::initialize_logging().context("Failed to initialise logging")?;
    info!(version = env!("CARGO_PKG_VERSION"), log = %log_path.display(), "Starting");

    let config = config::load_config();
    let mut app = App::new(config);
    info!(
        from = %app.config.default_from,
        to = %app.config.default_to,
        "Initial units"
    );

    install_panic_hook();

    let mut terminal = term::setup_terminal(app.theme.background_colour)?;
    let res = process_events(&mut terminal, &mut app);
    term::restore_terminal();

    match &res {
        Ok(()) => info!("Exiting"),
        Err(e) => error!(error = %e, "Application error"),
    }

    res.context("Application error occurred")
}

/// Restores the terminal before the default panic output is printed, so the
/// message is not lost in the alternate screen.
fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        term::restore_terminal();
        error!(%info, "Panicked");
        default_hook(info);
    }));
}
