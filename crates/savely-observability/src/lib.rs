//! Savely Observability
//!
//! Logging bootstrap for the API process. Request-level logging lives with the
//! HTTP pipeline; this crate only installs the global subscriber.
//!
//! # Examples
//!
//! ```no_run
//! use savely_config::LogConfig;
//! use savely_observability::init_tracing;
//!
//! init_tracing(&LogConfig::from_env()).expect("logging");
//! ```

use anyhow::Context;
use savely_config::{LogConfig, LogFormat};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// - **Filter**: `RUST_LOG` when set, otherwise `savely=<level>` with noisy
///   dependencies held at warn
/// - **Console**: compact or JSON according to `LOG_FORMAT`
/// - **File**: daily-rotated JSON file under `LOG_DIR`, when set
pub fn init_tracing(config: &LogConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "savely={level},savely_core={level},tower_http=warn,hyper=warn,axum::rejection=trace",
            level = config.level
        ))
    });

    let console_layer = match config.format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
    };

    let file_layer = match &config.dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {dir}"))?;
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, "savely.json");

            Some(
                fmt::layer()
                    .json()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_current_span(true)
                    .with_span_list(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}
