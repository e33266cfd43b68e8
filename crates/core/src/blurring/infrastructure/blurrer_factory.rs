use serde::{Deserialize, Serialize};

use crate::blurring::domain::strip_blurrer::StripBlurrer;

use super::gaussian_strip_blurrer::GaussianStripBlurrer;
use super::imageops_strip_blurrer::ImageOpsStripBlurrer;

/// Which implementation blurs the seam strips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlurBackend {
    #[default]
    Gaussian,
    ImageOps,
}

impl std::str::FromStr for BlurBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gaussian" => Ok(BlurBackend::Gaussian),
            "imageops" => Ok(BlurBackend::ImageOps),
            other => Err(format!(
                "blur backend must be 'gaussian' or 'imageops', got '{other}'"
            )),
        }
    }
}

pub fn create_blurrer(backend: BlurBackend, radius: u32) -> Box<dyn StripBlurrer> {
    log::debug!("Using {:?} strip blur (radius={})", backend, radius);
    match backend {
        BlurBackend::Gaussian => Box::new(GaussianStripBlurrer::new(radius)),
        BlurBackend::ImageOps => Box::new(ImageOpsStripBlurrer::new(radius)),
    }
}
