use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install color-eyre with the workspace configuration.
///
/// Call this early in `main()`, before any fallible operation, so that a
/// failing startup prints a colored report. Safe to call multiple times;
/// later calls are ignored.
///
/// Configuration:
/// - Shows the file:line where the error was created
/// - Hides the environment section (it mostly repeats `RUST_LOG` noise)
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize tracing with environment-aware formatting and span capture.
///
/// The subscriber is a `tracing-subscriber` registry with three layers:
/// 1. a `fmt` layer whose format depends on `environment`
/// 2. `tracing_error::ErrorLayer`, so eyre reports carry the active span trace
/// 3. an `EnvFilter`
///
/// - **Production** (`APP_ENV=production`):
///   - JSON lines with event fields flattened, for log aggregation
///   - Module targets hidden
///   - Default filter `info`
///
/// - **Development** (default):
///   - Pretty multi-line output
///   - Module targets shown
///   - Default filter `debug,tower_http=debug`, so every request span from
///     the HTTP trace layer is visible
///
/// Environment variables:
/// - `APP_ENV`: `production` selects JSON output (default: development)
/// - `RUST_LOG`: replaces the default filter, e.g. `domain_items=trace`
///
/// # Multiple Calls
///
/// Only the first call installs a subscriber. Later calls (common in tests)
/// log at debug level and return.
///
/// # Example
///
/// ```ignore
/// use core_config::{tracing::init_tracing, Environment};
///
/// init_tracing(&Environment::from_env());
/// tracing::info!("ready");
/// ```
pub fn init_tracing(environment: &Environment) {
    let is_production = environment.is_production();

    // RUST_LOG wins over the per-environment default
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if is_production {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("debug,tower_http=debug")
        }
    });

    let result = if is_production {
        // Production: JSON for log aggregation
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default()) // Span traces for eyre reports
            .with(filter)
            .try_init()
    } else {
        // Development: pretty format for readability
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => info!(?environment, "Tracing initialized"),
        Err(_) => debug!("Tracing already initialized, skipping re-initialization"),
    }
}
