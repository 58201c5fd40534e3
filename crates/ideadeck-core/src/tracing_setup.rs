use std::fs::OpenOptions;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Set up tracing output. The terminal owns stdout, so logs only go to a
/// file, and only when `IDEADECK_LOG_FILE` names one. Without it tracing
/// stays uninitialized and all events are no-ops.
pub fn init_tracing() {
    let Ok(log_path) = std::env::var("IDEADECK_LOG_FILE") else {
        return;
    };

    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_path, e);
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG);

    tracing_subscriber::registry().with(file_layer).init();
}
