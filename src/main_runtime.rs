use cylon::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

pub fn init_logging(logging: &LoggingConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},cylon=debug", logging.level)));

    // File logging is opt-in via CYLON_LOG_DIR.
    //
    // `tracing_appender::rolling::daily` panics if it can't create the
    // initial log file, so preflight writability first.
    let file_layer = std::env::var("CYLON_LOG_DIR").ok().and_then(|log_dir| {
        if let Err(e) = std::fs::create_dir_all(&log_dir) {
            eprintln!(
                "Warning: Could not create log directory {} ({}), file logging disabled",
                log_dir, e
            );
            return None;
        }

        let test_path = std::path::Path::new(&log_dir).join(".cylon_write_test");
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&test_path)
        {
            Ok(_) => {
                let _ = std::fs::remove_file(&test_path);

                let file_appender = tracing_appender::rolling::daily(&log_dir, "cylon.log");
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                // The agent logs until exit; keep the flush guard alive for good
                Box::leak(Box::new(guard));

                eprintln!("Logging to: {}/cylon.log", log_dir);
                Some(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false)
                        .with_target(true),
                )
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not write to log directory {} ({}), file logging disabled",
                    log_dir, e
                );
                None
            }
        }
    });

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .init();
    }
}

pub fn init_logging_simple() {
    // Minimal logging for one-shot commands that failed before config loaded
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .try_init();
}
