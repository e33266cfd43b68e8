pub mod blurrer_factory;
mod gaussian;
pub mod gaussian_strip_blurrer;
pub mod imageops_strip_blurrer;
