use std::time::{Duration, Instant};

pub const BYTES_PER_MB: f64 = 1_048_576.0;

/// Cumulative counters read from the OS during one sampling cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IoCounters {
    pub disk_read_bytes: u64,
    pub disk_written_bytes: u64,
    pub net_sent_bytes: u64,
    pub net_received_bytes: u64,
}

/// Per-second throughput derived from two counter readings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IoRates {
    pub disk_read_bytes_s: f64,
    pub disk_write_bytes_s: f64,
    pub net_sent_bytes_s: f64,
    pub net_recv_bytes_s: f64,
}

/// Previous counters and sample instant, owned by the sampler and advanced
/// once per cycle. Never visible to the render side.
#[derive(Debug)]
pub struct RateState {
    prev: IoCounters,
    sampled_at: Instant,
}

impl RateState {
    pub fn new(initial: IoCounters) -> Self {
        RateState {
            prev: initial,
            sampled_at: Instant::now(),
        }
    }

    pub fn advance(&mut self, current: IoCounters) -> IoRates {
        self.advance_at(current, Instant::now())
    }

    pub fn advance_at(&mut self, current: IoCounters, now: Instant) -> IoRates {
        let elapsed = elapsed_secs_or_nominal(now.saturating_duration_since(self.sampled_at));
        let rates = IoRates {
            disk_read_bytes_s: rate_per_sec(self.prev.disk_read_bytes, current.disk_read_bytes, elapsed),
            disk_write_bytes_s: rate_per_sec(
                self.prev.disk_written_bytes,
                current.disk_written_bytes,
                elapsed,
            ),
            net_sent_bytes_s: rate_per_sec(self.prev.net_sent_bytes, current.net_sent_bytes, elapsed),
            net_recv_bytes_s: rate_per_sec(
                self.prev.net_received_bytes,
                current.net_received_bytes,
                elapsed,
            ),
        };
        self.prev = current;
        self.sampled_at = now;
        rates
    }
}

/// Counter delta over elapsed seconds. Deliberately unclamped: a counter
/// reset between samples yields one negative reading, which the next cycle
/// corrects on its own.
pub fn rate_per_sec(prev: u64, curr: u64, elapsed_secs: f64) -> f64 {
    (curr as f64 - prev as f64) / elapsed_secs
}

/// Zero or unmeasurable elapsed time falls back to a nominal one-second
/// interval so rate computation never divides by zero.
pub fn elapsed_secs_or_nominal(elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 { secs } else { 1.0 }
}
