//! Global subscriber setup.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::ObservabilityError;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,harvest_commerce=debug";

fn env_filter(default_filter: Option<&str>) -> Result<EnvFilter, ObservabilityError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_filter.unwrap_or(DEFAULT_FILTER))
            .map_err(|e| ObservabilityError::SubscriberInit(e.to_string())),
    }
}

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter` (or [`DEFAULT_FILTER`]).
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(default_filter: Option<&str>) -> Result<(), ObservabilityError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter)?)
        .with_target(true)
        .try_init()
        .map_err(|e| ObservabilityError::SubscriberInit(e.to_string()))
}

/// A fmt subscriber writing plain lines (no timestamps, no ANSI colours) to
/// `writer`. Suits sinks without a clock or a terminal, such as the browser
/// console.
pub fn plain_subscriber<W>(
    default_filter: Option<&str>,
    writer: W,
) -> Result<impl Subscriber + Send + Sync + 'static, ObservabilityError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    Ok(tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter)?)
        .with_writer(writer)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .finish())
}

/// Install [`plain_subscriber`] globally.
pub fn init_tracing_with_writer<W>(
    default_filter: Option<&str>,
    writer: W,
) -> Result<(), ObservabilityError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    plain_subscriber(default_filter, writer)?
        .try_init()
        .map_err(|e| ObservabilityError::SubscriberInit(e.to_string()))
}
