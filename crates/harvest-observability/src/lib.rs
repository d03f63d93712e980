//! Observability for the Harvest Hub storefront.
//!
//! This crate provides:
//! - `SessionId` - Identifier for one browser session, used to correlate logs
//! - `StructuredLogger` - Structured logging with session context, emitted through `tracing`
//! - `init_tracing` / `init_tracing_with_writer` - fmt subscribers with an env filter, for a
//!   terminal or any other sink such as the browser console (feature `subscriber`)

mod error;
mod logging;
mod session;
#[cfg(feature = "subscriber")]
mod subscriber;

pub use error::ObservabilityError;
pub use logging::*;
pub use session::SessionId;
#[cfg(feature = "subscriber")]
pub use subscriber::{init_tracing, init_tracing_with_writer, plain_subscriber, DEFAULT_FILTER};
