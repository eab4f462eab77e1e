/// Number of processes retained in a snapshot's ranking.
pub const TOP_PROCESS_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSample {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f32,
}

/// Rank processes by raw CPU percent descending, keep the top
/// [`TOP_PROCESS_LIMIT`], then rescale each survivor to percent-of-machine
/// by dividing by the logical core count. Raw values from the OS are
/// percent-of-one-core and can exceed 100 on multi-threaded processes; the
/// rescaled values line up with the aggregate CPU gauge.
pub fn rank_top_processes(mut processes: Vec<ProcessSample>, cpu_count: usize) -> Vec<ProcessSample> {
    processes.sort_by(|a, b| {
        b.cpu_percent
            .partial_cmp(&a.cpu_percent)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    processes.truncate(TOP_PROCESS_LIMIT);

    let cores = cpu_count.max(1) as f32;
    for process in &mut processes {
        process.cpu_percent /= cores;
    }
    processes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(pid: u32, cpu: f32) -> ProcessSample {
        ProcessSample {
            pid,
            name: format!("proc-{pid}"),
            cpu_percent: cpu,
        }
    }

    #[test]
    fn keeps_ten_highest_in_descending_order() {
        let cpus = [
            5.0, 90.0, 0.0, 40.0, 12.0, 73.0, 1.0, 55.0, 33.0, 8.0, 61.0, 2.0, 27.0, 99.0, 15.0,
        ];
        let processes: Vec<ProcessSample> = cpus
            .iter()
            .enumerate()
            .map(|(i, &cpu)| sample(i as u32 + 1, cpu))
            .collect();

        let top = rank_top_processes(processes, 1);
        assert_eq!(top.len(), TOP_PROCESS_LIMIT);

        let got: Vec<f32> = top.iter().map(|p| p.cpu_percent).collect();
        let expected = vec![99.0, 90.0, 73.0, 61.0, 55.0, 40.0, 33.0, 27.0, 15.0, 12.0];
        assert_eq!(got, expected);
    }

    #[test]
    fn normalizes_by_logical_core_count() {
        let top = rank_top_processes(vec![sample(1, 400.0)], 8);
        assert_eq!(top[0].cpu_percent, 50.0);
    }

    #[test]
    fn tied_values_all_survive_the_cut() {
        let mut processes = vec![sample(99, 80.0)];
        for pid in 1..=10 {
            processes.push(sample(pid, 20.0));
        }
        // Eleven entries, ten tied at 20.0 plus one at 80.0; exactly one
        // tied entry is dropped and the rest keep their value.
        let top = rank_top_processes(processes, 1);
        assert_eq!(top.len(), TOP_PROCESS_LIMIT);
        assert_eq!(top[0].cpu_percent, 80.0);
        assert!(top[1..].iter().all(|p| p.cpu_percent == 20.0));
    }

    #[test]
    fn zero_core_count_is_treated_as_one() {
        let top = rank_top_processes(vec![sample(1, 42.0)], 0);
        assert_eq!(top[0].cpu_percent, 42.0);
    }

    #[test]
    fn short_lists_pass_through_sorted() {
        let top = rank_top_processes(vec![sample(1, 5.0), sample(2, 9.0)], 1);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].pid, 2);
        assert_eq!(top[1].pid, 1);
    }
}
