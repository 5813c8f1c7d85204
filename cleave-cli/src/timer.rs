//! Wall-clock and CPU timing for a run

use cpu_time::ThreadTime;
use std::time::{Duration, Instant};

/// Measures how long a run took
pub struct Timer {
    start_real: Instant,
    start_cpu: Option<ThreadTime>,
}

/// Elapsed times for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Wall-clock time
    pub real: Duration,
    /// CPU time of the current thread, if the platform reports it
    pub cpu: Option<Duration>,
}

impl Timer {
    /// Start timing now
    pub fn start() -> Self {
        Self {
            start_cpu: ThreadTime::try_now().ok(),
            start_real: Instant::now(),
        }
    }

    /// Wall-clock time elapsed since start
    pub fn elapsed(&self) -> Duration {
        self.start_real.elapsed()
    }

    /// Wall-clock and CPU time elapsed since start
    pub fn timing(&self) -> Timing {
        let real = self.elapsed();
        let cpu = self
            .start_cpu
            .as_ref()
            .and_then(|start| start.try_elapsed().ok());
        Timing { real, cpu }
    }

    /// Log the elapsed times
    pub fn report(&self) {
        let timing = self.timing();
        match timing.cpu {
            Some(cpu) => log::info!(
                "{} ns real, {} ns CPU",
                timing.real.as_nanos(),
                cpu.as_nanos()
            ),
            None => log::info!("{} ns real", timing.real.as_nanos()),
        }
    }
}
