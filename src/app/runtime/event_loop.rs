use std::time::Instant;

use ratatui::Terminal;
use tokio::select;

use crate::events::{EventContext, handle_event};
use crate::logic::finish_submission;
use crate::state::AppState;
use crate::ui::ui;

use super::background::Channels;

/// What: Process one iteration of channel message handling.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
/// - `ctx`: Collaborators the event handlers need
///
/// Output: `true` if the event loop should exit, `false` to continue
///
/// Details:
/// - Waits for a single message from any channel and applies it
async fn process_channel_messages(
    app: &mut AppState,
    channels: &mut Channels,
    ctx: &EventContext,
) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => handle_event(ev, app, ctx),
        Some(outcome) = channels.outcome_rx.recv() => {
            tracing::debug!(?outcome, "[Runtime] submission finished");
            finish_submission(app, outcome);
            false
        }
        Some(()) = channels.tick_rx.recv() => {
            if app.expire_notification(Instant::now()) {
                tracing::trace!("[Runtime] notification expired");
            }
            false
        }
        else => false
    }
}

/// What: Run the main event loop, rendering a frame before each message.
///
/// Inputs:
/// - `terminal`: Optional terminal for rendering (`None` in headless mode)
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
/// - `ctx`: Collaborators the event handlers need
///
/// Output: None (runs until an event handler asks to exit)
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
    ctx: &EventContext,
) {
    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(err) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %err, "[Runtime] frame draw failed");
        }

        if process_channel_messages(app, channels, ctx).await {
            break;
        }
    }
}
