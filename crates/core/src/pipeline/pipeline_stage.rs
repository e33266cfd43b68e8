use std::fmt;

/// Stages of one seam-blend run, in execution order.
///
/// The run only moves forward; `Failed` is reachable from every stage
/// before `Done`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    Validate,
    Segment,
    PersistSegments,
    Blur,
    Compose,
    PersistResult,
    Done,
    Failed,
}

impl PipelineStage {
    pub fn name(self) -> &'static str {
        match self {
            PipelineStage::Validate => "validate",
            PipelineStage::Segment => "segment",
            PipelineStage::PersistSegments => "persist_segments",
            PipelineStage::Blur => "blur",
            PipelineStage::Compose => "compose",
            PipelineStage::PersistResult => "persist_result",
            PipelineStage::Done => "done",
            PipelineStage::Failed => "failed",
        }
    }

    pub fn next(self) -> Option<PipelineStage> {
        match self {
            PipelineStage::Validate => Some(PipelineStage::Segment),
            PipelineStage::Segment => Some(PipelineStage::PersistSegments),
            PipelineStage::PersistSegments => Some(PipelineStage::Blur),
            PipelineStage::Blur => Some(PipelineStage::Compose),
            PipelineStage::Compose => Some(PipelineStage::PersistResult),
            PipelineStage::PersistResult => Some(PipelineStage::Done),
            PipelineStage::Done | PipelineStage::Failed => None,
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
