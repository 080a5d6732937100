//! Logging bootstrap and timing helpers.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the host, which may call [`init_tracing`] or [`init_json_tracing`].

mod subscriber;
mod timer;

pub use subscriber::{init_json_tracing, init_tracing};
pub use timer::SpanTimer;
