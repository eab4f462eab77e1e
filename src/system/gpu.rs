use nvml_wrapper::Nvml;
use nvml_wrapper::enum_wrappers::device::TemperatureSensor;
use tracing::debug;

use super::rates::BYTES_PER_MB;
use super::snapshot::GpuStats;

/// Optional NVML handle, initialized once. A missing driver, init failure,
/// or zero devices all mean "no GPU" and are never treated as errors.
pub struct GpuProbe {
    nvml: Option<Nvml>,
}

impl GpuProbe {
    pub fn new() -> Self {
        let nvml = Nvml::init()
            .ok()
            .filter(|nvml| matches!(nvml.device_count(), Ok(count) if count > 0));
        if nvml.is_none() {
            debug!("NVML unavailable, GPU panel will report not found");
        }
        GpuProbe { nvml }
    }

    /// Probe that never reports a device; used where GPU readings are
    /// irrelevant (tests, headless fallbacks).
    pub fn disabled() -> Self {
        GpuProbe { nvml: None }
    }

    /// Stats for the first device. Any failure along the way degrades to
    /// the zeroed not-found state without aborting the sampling cycle.
    pub fn sample(&self) -> GpuStats {
        let Some(nvml) = &self.nvml else {
            return GpuStats::default();
        };
        let Ok(device) = nvml.device_by_index(0) else {
            return GpuStats::default();
        };

        let load_percent = device
            .utilization_rates()
            .map(|util| f64::from(util.gpu))
            .unwrap_or(0.0);
        let (memory_used_mb, memory_total_mb) = device
            .memory_info()
            .map(|memory| {
                (
                    memory.used as f64 / BYTES_PER_MB,
                    memory.total as f64 / BYTES_PER_MB,
                )
            })
            .unwrap_or((0.0, 0.0));
        let temperature_c = device
            .temperature(TemperatureSensor::Gpu)
            .map(f64::from)
            .unwrap_or(0.0);

        GpuStats {
            found: true,
            load_percent,
            memory_used_mb,
            memory_total_mb,
            temperature_c,
        }
    }
}

impl Default for GpuProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_probe_reports_not_found() {
        let stats = GpuProbe::disabled().sample();
        assert!(!stats.found);
        assert_eq!(stats.load_percent, 0.0);
        assert_eq!(stats.memory_used_mb, 0.0);
        assert_eq!(stats.memory_total_mb, 0.0);
        assert_eq!(stats.temperature_c, 0.0);
    }
}
