use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "COMPILE_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default so nothing mixes with compiler output.
/// Set `COMPILE_LOG` to a file path to enable it; `RUST_LOG` picks the
/// filter (default `info`).
///
/// The file is named `{path}.{timestamp}.{pid}` so concurrent runs do not
/// clobber each other.
pub fn init_tracing() -> Result<()> {
    let Some(log_path) = std::env::var_os(LOG_ENV) else {
        return Ok(());
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path.to_string_lossy(), timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = std::fs::File::create(&unique_path)
        .with_context(|| format!("failed to create log file {unique_path}"))?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(())
}
