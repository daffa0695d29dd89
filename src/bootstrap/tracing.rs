//! Tracing configuration for vscch
//!
//! ## Architecture / 架构
//!
//! - **stderr layer**: stdout is reserved for the wizard's own output
//! - **file layer**: non-blocking writer into the configured log directory
//! - **Sentry layer**: only when `SENTRY_DSN` is set
//! - **Environment-aware**: `RUST_LOG` overrides the built-in directives

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static SENTRY_GUARD: OnceLock<sentry::ClientInitGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "vscch.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **Development**: debug for the workspace crates, store writes included
/// - **Production**: warn globally, info for the use cases
/// - **`level` given** (`-v`/`-q`): that level everywhere
fn build_filter_directives(is_dev: bool, level: Option<&str>) -> Vec<String> {
    if let Some(level) = level {
        return vec![level.to_string()];
    }
    vec![
        if is_dev { "info" } else { "warn" }.to_string(),
        if is_dev { "vc_core=debug" } else { "vc_core=warn" }.to_string(),
        if is_dev { "vc_app=debug" } else { "vc_app=info" }.to_string(),
        if is_dev {
            "vscch_lib=debug"
        } else {
            "vscch_lib=info"
        }
        .to_string(),
    ]
}

/// Initialize the tracing subscriber
///
/// Call once in `run_app`, after the configuration is loaded (it names the
/// log directory) and before any use case runs.
///
/// 必须在配置加载之后、任何用例执行之前调用一次。
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered. A log
/// directory that cannot be created only disables the file layer.
pub fn init_tracing_subscriber(
    log_dir: Option<&Path>,
    level: Option<&str>,
) -> anyhow::Result<()> {
    let is_dev = is_development();

    // Step 1: Build environment filter
    let filter_directives = build_filter_directives(is_dev, level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    // Step 2: Initialize Sentry
    // - Only if SENTRY_DSN is set
    // - Guard must be kept alive
    let sentry_layer = match std::env::var("SENTRY_DSN") {
        Ok(dsn) => {
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

            Some(sentry_tracing::layer())
        }
        Err(_) => None,
    };

    // Step 3: Create writers
    let stderr_writer = BoxMakeWriter::new(io::stderr);
    let file_writer = match log_dir.map(build_file_writer).transpose() {
        Ok(writer) => writer,
        Err(err) => {
            eprintln!("Failed to initialize file logging, continuing without it: {err}");
            None
        }
    };

    // Step 4: Create fmt layers
    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    // Step 5: Register the global subscriber
    registry()
        .with(env_filter)
        .with(sentry_layer)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
