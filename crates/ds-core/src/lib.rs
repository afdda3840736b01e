//! Core functionality for the directory site viewer
//!
//! This crate provides the rendering-agnostic building blocks: the carousel
//! state machine, the directory record model, the content source trait, the
//! static route table and the identity seam used by the navigation chrome.

pub mod carousel;
pub mod content;
pub mod directory;
pub mod identity;
pub mod routes;
pub mod state;

// Re-export commonly used types
pub use carousel::{CarouselController, DecayTimer, HoverReveal, NavDirection, Slide};
pub use content::ContentSource;
pub use directory::{CapitalProfile, Category, Organization, Photo, Sector};
pub use identity::{IdentityProvider, LocalIdentity};
pub use routes::{PageSpec, Route, RouteTable};
pub use state::{AppSettings, AppState};
