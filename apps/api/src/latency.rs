//! Simulated latency: the stand-in for a network round trip.
//!
//! `SimulatedLatency::defer` sleeps on the tokio clock and only then runs the
//! producer, so a paused test clock controls exactly when a result appears.

use std::time::Duration;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Waits out the delay, then produces the value.
    pub async fn defer<T, F>(&self, produce: F) -> T
    where
        F: FnOnce() -> T,
    {
        if !self.delay.is_zero() {
            debug!("Simulating {}ms of latency", self.delay.as_millis());
            tokio::time::sleep(self.delay).await;
        }
        produce()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_defer_waits_for_full_delay() {
        let latency = SimulatedLatency::new(Duration::from_millis(2000));
        let start = Instant::now();

        let value = latency.defer(|| 42).await;

        assert_eq!(value, 42);
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_completes_immediately() {
        let latency = SimulatedLatency::new(Duration::ZERO);
        let start = Instant::now();

        latency.defer(|| ()).await;

        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_producer_runs_after_delay() {
        let latency = SimulatedLatency::new(Duration::from_millis(500));
        let start = Instant::now();

        let produced_at = latency.defer(|| start.elapsed()).await;

        assert!(produced_at >= Duration::from_millis(500));
    }
}
