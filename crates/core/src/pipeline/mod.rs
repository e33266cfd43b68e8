pub mod infrastructure;
pub mod pipeline_logger;
pub mod pipeline_stage;
pub mod seam_blend_use_case;
