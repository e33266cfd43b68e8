pub mod seam_blurrer;
pub mod strip_blurrer;
