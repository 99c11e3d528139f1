//! folio binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use folio::{app, args, theme};

/// Log line timestamps in local time, `YYYY-MM-DD-T HH:MM:SS`.
struct FolioTimer;

impl tracing_subscriber::fmt::time::FormatTime for FolioTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

/// Keeps the non-blocking log writer flushing until exit.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter directive when `RUST_LOG` is unset
///
/// Details:
/// - Writes to `~/.config/folio/logs/folio.log`; falls back to stderr if the file cannot be opened
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = theme::logs_dir().join("folio.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(FolioTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Stderr output lands under the TUI, but startup must not block on logging.
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(FolioTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args));

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "folio starting");
    if let Err(err) = app::run(args.lang).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("folio: {err}");
        std::process::exit(1);
    }
    tracing::info!("folio exited");
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes the expected timestamp shape
    ///
    /// - Input: Tracing writer buffer
    /// - Output: `YYYY-MM-DD-T HH:MM:SS`
    #[test]
    fn folio_timer_formats_time() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        super::FolioTimer
            .format_time(&mut writer)
            .expect("timer writes");
        assert_eq!(buf.len(), "2025-01-31-T 12:00:00".len());
        assert_eq!(&buf[10..13], "-T ");
    }
}
