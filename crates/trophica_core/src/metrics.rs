//! Run metrics and structured logging.

use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Counters for one simulation run.
#[derive(Debug)]
pub struct Metrics {
    tick_count: u64,
    births: u64,
    deaths: u64,
    organism_count: usize,
    last_tick: Duration,
    log_interval: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Metrics {
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            tick_count: 0,
            births: 0,
            deaths: 0,
            organism_count: 0,
            last_tick: Duration::ZERO,
            log_interval: log_interval.max(1),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&mut self, tick: u64, duration: Duration, organisms: usize) {
        self.tick_count += 1;
        self.organism_count = organisms;
        self.last_tick = duration;

        if tick % self.log_interval == 0 {
            tracing::debug!(
                tick = tick,
                organisms = organisms,
                births = self.births,
                deaths = self.deaths,
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    pub fn record_birth(&mut self) {
        self.births += 1;
    }

    pub fn record_deaths(&mut self, n: usize) {
        self.deaths += n as u64;
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn births(&self) -> u64 {
        self.births
    }

    #[must_use]
    pub fn deaths(&self) -> u64 {
        self.deaths
    }

    #[must_use]
    pub fn organism_count(&self) -> usize {
        self.organism_count
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs the totals for the run so far.
    pub fn log_summary(&self) {
        tracing::info!(
            ticks = self.tick_count,
            organisms = self.organism_count,
            births = self.births,
            deaths = self.deaths,
            elapsed_ms = self.elapsed().as_millis() as u64,
            "Simulation finished"
        );
    }
}

/// Initialize tracing subscriber for logging. `RUST_LOG` overrides the `info` default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
