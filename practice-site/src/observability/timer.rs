use std::time::Instant;

use tracing::debug;

/// Measures a named unit of work and logs its duration when finished.
#[derive(Debug)]
pub struct SpanTimer {
    start: Instant,
    name: &'static str,
}

impl SpanTimer {
    /// Starts timing `name`.
    #[must_use]
    pub fn start(name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            name,
        }
    }

    /// Elapsed time in milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// The name given at start.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Stops the timer, logs the duration and returns it.
    pub fn finish(self) -> f64 {
        let duration_ms = self.elapsed_ms();
        debug!(span_name = self.name, duration_ms, "Finished");
        duration_ms
    }
}
