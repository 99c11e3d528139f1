use ratatui::{Terminal, backend::CrosstermBackend};

use crate::events::EventContext;
use crate::i18n::{self, Language};
use crate::logic::init_view_state;
use crate::theme;

use super::terminal::{restore_terminal, setup_terminal};

pub mod background;
mod event_loop;
mod init;

use background::{Channels, spawn_event_thread, spawn_tick};
use event_loop::run_event_loop;
use init::{apply_settings_to_app_state, build_delivery, load_delivery_config, resolve_language};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the folio TUI end-to-end: read settings and the ambient color
/// preference, set up the terminal, spawn the background workers, drive the
/// event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `language_flag`: Language from `--lang`, overriding `settings.conf`
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors
///
/// Details:
/// - Locale bundles are parsed before raw mode, so a defective one fails cleanly
/// - The color preference is read once, before the alternate screen is entered
/// - EmailJS identifiers are read once; a missing set only disables sending
/// - `FOLIO_TEST_HEADLESS=1` skips the terminal, the color query, and the input thread
pub async fn run(language_flag: Option<Language>) -> Result<()> {
    let headless = std::env::var("FOLIO_TEST_HEADLESS").ok().as_deref() == Some("1");
    i18n::preload()?;

    let settings = theme::settings();
    let dark = if headless {
        true
    } else {
        theme::detect_dark_preference()
    };
    let language = resolve_language(language_flag, settings.language.as_deref());
    let mut app = init_view_state(dark, language);
    apply_settings_to_app_state(&mut app, &settings);
    tracing::info!(dark, language = %language, headless, "[Runtime] starting");

    let mut channels = Channels::new(build_delivery(&settings), settings.delivery_timeout);
    spawn_tick(channels.tick_tx.clone());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );
    let ctx = EventContext {
        delivery: load_delivery_config(),
        submit_tx: channels.submit_tx.clone(),
        cv_path: settings.cv_path.clone(),
        download_dir: settings.download_dir.clone(),
    };

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    run_event_loop(&mut terminal, &mut app, &mut channels, &ctx).await;

    // Signal the event reading thread to exit.
    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);
    if let Some(mut t) = terminal {
        let _ = t.show_cursor();
        restore_terminal()?;
    }
    tracing::info!("[Runtime] exited");
    Ok(())
}
