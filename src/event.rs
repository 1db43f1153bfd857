use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use crate::app::{App, AppEvent};

/// Polls for crossterm events and maps them to `AppEvent`s.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        return Ok(match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Some(AppEvent::KeyPress(key.code))
            }
            // Resizes only need a redraw, which the next loop pass does.
            _ => None,
        });
    }
    Ok(Some(AppEvent::Tick))
}

/// Runs the editor until the user quits. Events are applied one at a time,
/// in arrival order.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    info!(
        colors = app.draft().len(),
        max_colors = app.draft().max_colors(),
        "palette editor started"
    );

    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if let Some(event) = poll(tick_rate)? {
            app.update(event);
        }
    }
    info!(saved = app.library.len(), "palette editor closed");
    Ok(())
}
