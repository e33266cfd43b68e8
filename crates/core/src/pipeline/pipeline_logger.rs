use std::collections::HashMap;
use std::time::Instant;

use crate::pipeline::pipeline_stage::PipelineStage;

/// Cross-cutting logger for pipeline orchestration events.
///
/// Decouples the use case from specific output mechanisms so callers can
/// observe a run without changing the orchestration code.
pub trait PipelineLogger: Send {
    /// The run entered `stage`.
    fn stage(&mut self, stage: PipelineStage);

    /// Record how long a stage took.
    fn timing(&mut self, stage: PipelineStage, duration_ms: f64);

    /// A recovered problem: the run continues.
    fn warn(&mut self, message: &str);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn stage(&mut self, _stage: PipelineStage) {}
    fn timing(&mut self, _stage: PipelineStage, _duration_ms: f64) {}
    fn warn(&mut self, _message: &str) {}
    fn info(&mut self, _message: &str) {}
}

/// Forwards events to the `log` crate and keeps per-stage timings for a
/// summary at the end of the run.
pub struct LogPipelineLogger {
    timings: HashMap<PipelineStage, f64>,
    stages: Vec<PipelineStage>,
    warnings: usize,
    start_time: Instant,
}

impl LogPipelineLogger {
    pub fn new() -> Self {
        Self {
            timings: HashMap::new(),
            stages: Vec::new(),
            warnings: 0,
            start_time: Instant::now(),
        }
    }

    /// Returns the formatted summary string, or `None` if nothing was timed.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = vec![format!("Pipeline summary ({:.1}ms total):", elapsed_ms)];

        for stage in &self.stages {
            if let Some(ms) = self.timings.get(stage) {
                lines.push(format!("  {:16}: {ms:8.1}ms", stage.name()));
            }
        }
        if self.warnings > 0 {
            lines.push(format!("  warnings: {}", self.warnings));
        }
        Some(lines.join("\n"))
    }

    pub fn timing_for(&self, stage: PipelineStage) -> Option<f64> {
        self.timings.get(&stage).copied()
    }

    pub fn stages(&self) -> &[PipelineStage] {
        &self.stages
    }

    pub fn warnings(&self) -> usize {
        self.warnings
    }
}

impl Default for LogPipelineLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineLogger for LogPipelineLogger {
    fn stage(&mut self, stage: PipelineStage) {
        self.stages.push(stage);
        log::debug!("Stage: {stage}");
    }

    fn timing(&mut self, stage: PipelineStage, duration_ms: f64) {
        *self.timings.entry(stage).or_default() += duration_ms;
    }

    fn warn(&mut self, message: &str) {
        self.warnings += 1;
        log::warn!("{message}");
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}
