use anyhow::{Context, Result};
use std::{
    fs,
    path::Path,
    time::{Duration, SystemTime},
};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_PREFIX: &str = "n2yo";
const MAX_LOG_AGE: Duration = Duration::from_secs(60 * 60 * 24 * 3);

/// Keeps the file writer flushing until dropped
pub struct LoggerGuard {
    _guard: Option<WorkerGuard>,
}

fn default_directive(level: &str) -> Directive {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => {
            level.parse().unwrap_or_else(|_| LevelFilter::WARN.into())
        }
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'warn'", level);
            LevelFilter::WARN.into()
        }
    }
}

/// Log to stderr, and to a daily rolling file when `log_dir` is set.
/// `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: &str, log_dir: Option<&Path>) -> Result<LoggerGuard> {
    let builder = EnvFilter::builder().with_default_directive(default_directive(level));
    let rust_log = std::env::var("RUST_LOG").unwrap_or_default();

    let (file_layer, guard) = match log_dir {
        Some(log_dir) => {
            fs::create_dir_all(log_dir)
                .context(format!("Failed to create log directory: {:?}", log_dir))?;

            if let Err(e) = cleanup_old_logs(log_dir, LOG_PREFIX, MAX_LOG_AGE) {
                eprintln!("Failed to delete old log files: {}", e);
            }

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_PREFIX)
                .filename_suffix("log")
                .build(log_dir)
                .context("Failed to create file appender")?;
            let (non_blocking, guard) = NonBlocking::new(file_appender);

            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(builder.clone().parse_lossy(&rust_log));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_filter(builder.parse_lossy(&rust_log));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(LoggerGuard { _guard: guard })
}

fn cleanup_old_logs(log_dir: &Path, prefix: &str, max_age: Duration) -> std::io::Result<usize> {
    let now = SystemTime::now();
    let mut deleted = 0;

    for entry in fs::read_dir(log_dir)? {
        let path = entry?.path();

        if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
            if file_name.starts_with(prefix) && file_name.ends_with(".log") {
                let modified = fs::metadata(&path)?.modified()?;
                if now.duration_since(modified).unwrap_or_default() > max_age {
                    fs::remove_file(&path)?;
                    deleted += 1;
                }
            }
        }
    }
    Ok(deleted)
}
