use serde::{Serialize, Deserialize};

mod controller;
mod hover;

pub use controller::CarouselController;
pub use hover::{DecayTimer, HoverReveal, DEFAULT_REVEAL_DECAY};

/// One entry of the carousel's ordered image sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub url: String,
    pub title: String,
}

impl Slide {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Logical navigation directions the carousel understands
///
/// Key-binding schemes are resolved to these before they reach the
/// controller, so every scheme produces identical navigation effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavDirection {
    Previous,
    Next,
}
