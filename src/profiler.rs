// profiler.rs
// Wall-time accounting for the sections of a frame (command handling, the
// integrator pass, the whole step). Timers only record with the `profiling`
// feature; reports go out through `tracing` alongside the diagnostics line.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Accumulated time for one named section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionStats {
    pub calls: u32,
    pub total: Duration,
}

impl SectionStats {
    pub fn mean(&self) -> Duration {
        if self.calls == 0 {
            Duration::ZERO
        } else {
            self.total / self.calls
        }
    }
}

/// Section timings collected since the last report.
#[derive(Debug, Default)]
pub struct Profiler {
    sections: HashMap<&'static str, SectionStats>,
    frames: u32,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &'static str, elapsed: Duration) {
        let stats = self.sections.entry(name).or_default();
        stats.calls += 1;
        stats.total += elapsed;
    }

    /// Mark the end of a driven frame.
    pub fn end_frame(&mut self) {
        self.frames += 1;
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn section(&self, name: &str) -> Option<SectionStats> {
        self.sections.get(name).copied()
    }

    /// Sections by total time, longest first; ties by name.
    pub fn report(&self) -> Vec<(&'static str, SectionStats)> {
        let mut v: Vec<_> = self.sections.iter().map(|(n, s)| (*n, *s)).collect();
        v.sort_by(|a, b| b.1.total.cmp(&a.1.total).then(a.0.cmp(b.0)));
        v
    }

    /// Log every section, then start a fresh window.
    pub fn log_report(&mut self) {
        for (name, stats) in self.report() {
            tracing::info!(
                target: "profiler",
                section = name,
                frames = self.frames,
                calls = stats.calls,
                total_us = stats.total.as_micros() as u64,
                mean_us = stats.mean().as_micros() as u64,
                "section timing"
            );
        }
        self.reset();
    }

    pub fn reset(&mut self) {
        self.sections.clear();
        self.frames = 0;
    }
}

/// Times a scope; records into the global profiler on drop.
pub struct ScopeTimer {
    name: &'static str,
    start: Instant,
}

impl ScopeTimer {
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

pub fn start(name: &'static str) -> ScopeTimer {
    ScopeTimer { name, start: Instant::now() }
}

#[cfg(feature = "profiling")]
impl Drop for ScopeTimer {
    fn drop(&mut self) {
        crate::PROFILER.lock().record(self.name, self.start.elapsed());
    }
}

/// Time the rest of the enclosing scope when `profiling` is enabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::profiler::start($name);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_count_calls_and_sort_by_total() {
        let mut p = Profiler::new();
        p.record("force", Duration::from_millis(3));
        p.record("sample", Duration::from_millis(1));
        p.record("force", Duration::from_millis(5));
        let report = p.report();
        assert_eq!(report[0].0, "force");
        assert_eq!(report[0].1.calls, 2);
        assert_eq!(report[0].1.total, Duration::from_millis(8));
        assert_eq!(report[0].1.mean(), Duration::from_millis(4));
        assert_eq!(report[1].0, "sample");
    }

    #[test]
    fn report_resets_the_window() {
        let mut p = Profiler::new();
        p.record("step", Duration::from_micros(250));
        p.end_frame();
        p.end_frame();
        assert_eq!(p.frames(), 2);
        p.log_report();
        assert_eq!(p.frames(), 0);
        assert!(p.section("step").is_none());
        assert!(p.report().is_empty());
    }

    #[test]
    fn unused_section_has_zero_mean() {
        assert_eq!(SectionStats::default().mean(), Duration::ZERO);
    }

    #[test]
    fn timer_measures_elapsed_time() {
        let timer = start("scope");
        std::thread::sleep(Duration::from_millis(2));
        assert!(timer.elapsed() >= Duration::from_millis(2));
    }
}
