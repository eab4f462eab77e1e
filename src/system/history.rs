use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 60;

/// Fixed-length rolling window of chart points. Oldest point drops as the
/// newest is appended; this is the only history the dashboard keeps.
#[derive(Debug, Clone)]
pub struct MetricSeries {
    points: VecDeque<f64>,
    capacity: usize,
}

impl MetricSeries {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        MetricSeries {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: f64) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(value);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<f64> {
        self.points.back().copied()
    }

    pub fn max(&self) -> f64 {
        self.points.iter().copied().fold(0.0, f64::max)
    }

    /// `(index, value)` pairs for a ratatui `Chart` dataset.
    pub fn as_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect()
    }

    /// Non-negative integer bars for a `Sparkline`; negative transients
    /// (counter resets) clamp to zero for display.
    pub fn as_bars(&self) -> Vec<u64> {
        self.points.iter().map(|&v| v.max(0.0) as u64).collect()
    }
}

impl Default for MetricSeries {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// One rolling window per charted metric, owned by the render side.
#[derive(Debug, Clone)]
pub struct ChartHistory {
    pub cpu: MetricSeries,
    pub memory: MetricSeries,
    pub gpu: MetricSeries,
    pub disk_read: MetricSeries,
    pub disk_write: MetricSeries,
    pub net_up: MetricSeries,
    pub net_down: MetricSeries,
}

impl ChartHistory {
    pub fn new(capacity: usize) -> Self {
        ChartHistory {
            cpu: MetricSeries::new(capacity),
            memory: MetricSeries::new(capacity),
            gpu: MetricSeries::new(capacity),
            disk_read: MetricSeries::new(capacity),
            disk_write: MetricSeries::new(capacity),
            net_up: MetricSeries::new(capacity),
            net_down: MetricSeries::new(capacity),
        }
    }
}

impl Default for ChartHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
