use image::{ImageError, RgbImage};

/// Share of green-dominant pixels above which a leaf counts as healthy.
pub const HEALTHY_GREEN_RATIO: f64 = 0.35;

pub const HEALTHY_MESSAGE: &str = "Leaf appears mostly green — likely healthy. Check for small brown spots and treat with neem spray if needed.";
pub const DEFICIENCY_MESSAGE: &str = "Leaf has low green coverage — may indicate nutrient deficiency or pest damage. Consider soil test and local remedies.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    LikelyHealthy,
    PossibleDeficiency,
}

impl Verdict {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > HEALTHY_GREEN_RATIO {
            Verdict::LikelyHealthy
        } else {
            Verdict::PossibleDeficiency
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Verdict::LikelyHealthy => HEALTHY_MESSAGE,
            Verdict::PossibleDeficiency => DEFICIENCY_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeafReport {
    pub width: u32,
    pub height: u32,
    pub green_ratio: f64,
    pub verdict: Verdict,
}

/// Fraction of pixels whose green channel is strictly above both red and blue.
/// An image without pixels has a ratio of 0.
pub fn green_ratio(img: &RgbImage) -> f64 {
    let total = img.width() as usize * img.height() as usize;
    if total == 0 {
        return 0.0;
    }
    let greens = img
        .pixels()
        .filter(|p| {
            let [r, g, b] = p.0;
            g > r && g > b
        })
        .count();
    greens as f64 / total as f64
}

/// Decodes a PNG or JPEG upload and measures its green coverage.
pub fn inspect(bytes: &[u8]) -> Result<LeafReport, ImageError> {
    let img = image::load_from_memory(bytes)?.to_rgb8();
    let ratio = green_ratio(&img);
    Ok(LeafReport {
        width: img.width(),
        height: img.height(),
        green_ratio: ratio,
        verdict: Verdict::from_ratio(ratio),
    })
}

/// Canned diagnostic for an upload. Decode failures become a message too.
pub fn analyze(bytes: &[u8]) -> String {
    match inspect(bytes) {
        Ok(report) => report.verdict.message().to_string(),
        Err(e) => failure_message(&e),
    }
}

pub fn failure_message(err: &ImageError) -> String {
    format!("Could not analyze image: {err}")
}
