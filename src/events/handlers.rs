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

//! Event handlers.
//!
//! One function per [`AppEvent`](super::AppEvent) variant, applying it to
//! the application state.

use anyhow::Result;
use measureui::units::ConversionError;
use tracing::{debug, warn};

use crate::{App, events::AppEvent};

/// Validates the form and either shows the result or queues a notice.
pub(super) fn handle_convert_requested(app: &mut App) -> Result<()> {
    let request = match app.form.request() {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Rejected conversion input");
            app.form.clear_result();
            app.event_tx.send(AppEvent::ShowNotice(notice_message(&e)))?;
            return Ok(());
        }
    };

    let result = request.execute()?;
    debug!(
        amount = request.amount,
        from = %request.from,
        to = %request.to,
        result,
        "Converted"
    );

    app.form.set_result(result);
    Ok(())
}

pub(super) fn handle_show_notice(app: &mut App, message: String) {
    app.notice = Some(message);
}

pub(super) fn handle_dismiss_notice(app: &mut App) {
    app.notice = None;
}

fn notice_message(error: &ConversionError) -> String {
    match error {
        ConversionError::NotANumber(_) => {
            "Invalid unit amount.\nGiven amount must be a number.".to_string()
        }
        ConversionError::NegativeAmount(_) => {
            "Invalid unit amount.\nGiven amount must be non-negative.".to_string()
        }
        ConversionError::InvalidUnit(name) => format!("Unknown unit \"{name}\"."),
    }
}
