use crate::format::format_size;

use super::process::ProcessSample;

/// One complete set of metric values captured at a single point in time.
/// Built from scratch every sampling cycle and replaced wholesale in the
/// [`SnapshotStore`](super::store::SnapshotStore).
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub cpu_percent: f32,
    pub memory: MemoryStats,
    pub gpu: GpuStats,
    pub disk_space_summary: String,
    pub disk_io_rate: DiskIoRate,
    pub network_io_rate: NetworkIoRate,
    pub top_processes: Vec<ProcessSample>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemoryStats {
    pub percent: f32,
    pub used_bytes: u64,
    pub total_bytes: u64,
}

/// `found == false` means no usable NVML device; the remaining fields stay
/// zeroed and the UI shows an explicit not-found state instead of an error.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GpuStats {
    pub found: bool,
    pub load_percent: f64,
    pub memory_used_mb: f64,
    pub memory_total_mb: f64,
    pub temperature_c: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DiskIoRate {
    pub read_mb_s: f64,
    pub write_mb_s: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NetworkIoRate {
    pub sent_bytes_s: f64,
    pub recv_bytes_s: f64,
    pub up_mb_s: f64,
    pub down_mb_s: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartitionUsage {
    pub device: String,
    pub mount_point: String,
    pub used_bytes: u64,
    pub total_bytes: u64,
}

impl PartitionUsage {
    pub fn used_percent(&self) -> f64 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        self.used_bytes as f64 / self.total_bytes as f64 * 100.0
    }
}

/// One human-readable line per partition. Partitions whose usage could not
/// be read never make it into the slice, so the summary simply omits them.
pub fn disk_space_summary(partitions: &[PartitionUsage]) -> String {
    let mut summary = String::new();
    for partition in partitions {
        summary.push_str(&format!(
            "{} ({}): {:.1}% Used of {}\n",
            partition.device,
            partition.mount_point,
            partition.used_percent(),
            format_size(partition.total_bytes as f64),
        ));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partition(device: &str, mount: &str, used: u64, total: u64) -> PartitionUsage {
        PartitionUsage {
            device: device.to_string(),
            mount_point: mount.to_string(),
            used_bytes: used,
            total_bytes: total,
        }
    }

    #[test]
    fn summary_formats_one_line_per_partition() {
        let partitions = vec![
            partition("/dev/sda1", "/", 536_870_912, 1_073_741_824),
            partition("/dev/sdb1", "/data", 107_374_182, 1_073_741_824),
        ];
        let summary = disk_space_summary(&partitions);
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "/dev/sda1 (/): 50.0% Used of 1.00GB");
        assert_eq!(lines[1], "/dev/sdb1 (/data): 10.0% Used of 1.00GB");
    }

    #[test]
    fn unreadable_partitions_are_simply_absent() {
        // The collector drops partitions it cannot size before building the
        // summary; the remaining lines are unaffected.
        let readable = vec![partition("/dev/sda1", "/", 1024, 2048)];
        let summary = disk_space_summary(&readable);
        assert!(summary.contains("/dev/sda1"));
        assert!(!summary.contains("/dev/bad"));
        assert_eq!(summary.lines().count(), 1);
    }

    #[test]
    fn empty_partition_list_gives_empty_summary() {
        assert_eq!(disk_space_summary(&[]), "");
    }

    #[test]
    fn used_percent_guards_zero_total() {
        assert_eq!(partition("x", "/x", 10, 0).used_percent(), 0.0);
    }

    #[test]
    fn default_snapshot_reports_no_gpu() {
        let snapshot = Snapshot::default();
        assert!(!snapshot.gpu.found);
        assert_eq!(snapshot.gpu.load_percent, 0.0);
        assert!(snapshot.top_processes.is_empty());
    }
}
