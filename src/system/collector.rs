use sysinfo::{Disks, Networks, ProcessRefreshKind, ProcessesToUpdate, System};

use super::gpu::GpuProbe;
use super::process::{ProcessSample, rank_top_processes};
use super::rates::{BYTES_PER_MB, IoCounters, RateState};
use super::snapshot::{
    DiskIoRate, MemoryStats, NetworkIoRate, PartitionUsage, Snapshot, disk_space_summary,
};

/// Queries every metric source once per cycle and assembles a [`Snapshot`].
/// Each sub-measurement is independently fault tolerant: a partition that
/// cannot be sized is skipped, a missing GPU reads as not found, a process
/// that exits mid-enumeration simply drops out of the list.
pub struct Collector {
    sys: System,
    disks: Disks,
    networks: Networks,
    gpu: GpuProbe,
    rates: RateState,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_all();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_cpu(),
        );
        let disks = Disks::new_with_refreshed_list();
        let networks = Networks::new_with_refreshed_list();
        // Prime the rate state so the first real sample has a baseline and
        // does not report bytes-since-boot as a one-second burst.
        let rates = RateState::new(read_io_counters(&disks, &networks));

        Collector {
            sys,
            disks,
            networks,
            gpu: GpuProbe::new(),
            rates,
        }
    }

    pub fn sample(&mut self) -> Snapshot {
        self.sys.refresh_memory();
        self.sys.refresh_cpu_all();
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_cpu(),
        );
        self.disks.refresh(true);
        self.networks.refresh(true);

        let memory = self.memory_stats();
        let gpu = self.gpu.sample();
        let partitions = self.partitions();
        let io = self.rates.advance(read_io_counters(&self.disks, &self.networks));
        let top_processes = rank_top_processes(self.process_samples(), self.sys.cpus().len());

        Snapshot {
            cpu_percent: self.sys.global_cpu_usage(),
            memory,
            gpu,
            disk_space_summary: disk_space_summary(&partitions),
            disk_io_rate: DiskIoRate {
                read_mb_s: io.disk_read_bytes_s / BYTES_PER_MB,
                write_mb_s: io.disk_write_bytes_s / BYTES_PER_MB,
            },
            network_io_rate: NetworkIoRate {
                sent_bytes_s: io.net_sent_bytes_s,
                recv_bytes_s: io.net_recv_bytes_s,
                up_mb_s: io.net_sent_bytes_s / BYTES_PER_MB,
                down_mb_s: io.net_recv_bytes_s / BYTES_PER_MB,
            },
            top_processes,
        }
    }

    fn memory_stats(&self) -> MemoryStats {
        let total = self.sys.total_memory();
        let used = self.sys.used_memory();
        let percent = if total > 0 {
            used as f32 / total as f32 * 100.0
        } else {
            0.0
        };
        MemoryStats {
            percent,
            used_bytes: used,
            total_bytes: total,
        }
    }

    fn partitions(&self) -> Vec<PartitionUsage> {
        self.disks
            .iter()
            .filter_map(|disk| {
                let total = disk.total_space();
                // Pseudo filesystems and mounts we cannot size report zero.
                if total == 0 {
                    return None;
                }
                Some(PartitionUsage {
                    device: disk.name().to_string_lossy().into_owned(),
                    mount_point: disk.mount_point().display().to_string(),
                    used_bytes: total.saturating_sub(disk.available_space()),
                    total_bytes: total,
                })
            })
            .collect()
    }

    fn process_samples(&self) -> Vec<ProcessSample> {
        self.sys
            .processes()
            .iter()
            .map(|(pid, process)| ProcessSample {
                pid: pid.as_u32(),
                name: process.name().to_string_lossy().into_owned(),
                cpu_percent: process.cpu_usage(),
            })
            .collect()
    }
}

fn read_io_counters(disks: &Disks, networks: &Networks) -> IoCounters {
    let mut counters = IoCounters::default();
    for disk in disks.iter() {
        let usage = disk.usage();
        counters.disk_read_bytes += usage.total_read_bytes;
        counters.disk_written_bytes += usage.total_written_bytes;
    }
    for (_name, data) in networks.iter() {
        counters.net_sent_bytes += data.total_transmitted();
        counters.net_received_bytes += data.total_received();
    }
    counters
}
