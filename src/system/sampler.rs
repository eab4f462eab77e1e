use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use color_eyre::Result;
use tracing::{debug, warn};

use super::collector::Collector;
use super::store::SnapshotStore;

/// Handle to the background sampling thread. The thread is detached and
/// does not hold up process exit; `stop` asks it to wind down at the next
/// cycle boundary.
pub struct SamplerHandle {
    stop: Arc<AtomicBool>,
}

impl SamplerHandle {
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

/// Spawn the sampler: one snapshot published to `store` per `interval`,
/// forever. A failed cycle is logged and retried after the same interval;
/// the previous snapshot stays in the store until a cycle succeeds.
pub fn spawn(store: SnapshotStore, interval: Duration) -> Result<SamplerHandle> {
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);

    thread::Builder::new()
        .name("sysdash-sampler".into())
        .spawn(move || run_loop(store, interval, stop_flag))?;

    Ok(SamplerHandle { stop })
}

fn run_loop(store: SnapshotStore, interval: Duration, stop: Arc<AtomicBool>) {
    debug!(interval_ms = interval.as_millis() as u64, "sampler started");
    let mut collector = Collector::new();

    while !stop.load(Ordering::Relaxed) {
        match panic::catch_unwind(AssertUnwindSafe(|| collector.sample())) {
            Ok(snapshot) => store.publish(snapshot),
            Err(_) => warn!("sampling cycle panicked, keeping previous snapshot"),
        }
        thread::sleep(interval);
    }
    debug!("sampler stopped");
}
