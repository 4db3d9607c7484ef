use serde::Serialize;
use std::time::Instant;

/// Wall-clock time spent in one step of a run (load, analyze, write, ...).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTiming {
    pub step: &'static str,
    pub elapsed_ms: f64,
}

/// Ordered timings of every step executed by [`crate::pipeline::run`].
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub steps: Vec<StepTiming>,
}

impl TimingBreakdown {
    /// Record `step` as having started at `since`; returns a fresh instant for
    /// chaining into the next step.
    pub fn record(&mut self, step: &'static str, since: Instant) -> Instant {
        let elapsed_ms = elapsed_ms(since);
        self.total_ms += elapsed_ms;
        self.steps.push(StepTiming { step, elapsed_ms });
        Instant::now()
    }
}

#[inline]
fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}
