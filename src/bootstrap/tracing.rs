//! Tracing configuration for NewsApp
//!
//! - **Development**: debug level
//! - **Production**: info level
//! - `RUST_LOG` overrides the defaults
//! - stdout plus a daily rolling file under `<data_dir>/logs`
//! - Sentry layer only when `SENTRY_DSN` is set
//! - `log` records (r2d2, diesel) are bridged into tracing

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static SENTRY_GUARD: OnceLock<sentry::ClientInitGuard> = OnceLock::new();

const LOG_FILE_PREFIX: &str = "newsapp.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives, used when `RUST_LOG` is unset.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("na_app={level}"),
        format!("na_infra={level}"),
        "diesel=warn".to_string(),
        "r2d2=warn".to_string(),
    ]
}

/// Initialize the global tracing subscriber.
///
/// Call once from `main` after the data directory is known. File logging
/// failures fall back to stdout only.
///
/// ## Errors
///
/// Returns `Err` if a global subscriber or `log` logger is already installed.
pub fn init_tracing_subscriber(logs_dir: &Path) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let sentry_layer = std::env::var("SENTRY_DSN").ok().map(|dsn| {
        let guard = sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                traces_sample_rate: 1.0,
                ..Default::default()
            },
        ));
        if SENTRY_GUARD.set(guard).is_err() {
            eprintln!("Sentry guard already initialized");
        }
        sentry_tracing::layer()
    });

    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stdout));

    let file_layer = match build_file_writer(logs_dir) {
        Ok(writer) => Some(
            fmt::layer()
                .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer),
        ),
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stdout: {err}");
            None
        }
    };

    let subscriber = registry()
        .with(env_filter)
        .with(sentry_layer)
        .with(stdout_layer)
        .with(file_layer);

    tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init()?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
