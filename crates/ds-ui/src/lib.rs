//! User interface components for the directory site
//!
//! This crate provides the reusable egui chrome and widgets: the photo
//! carousel, the navbar, organization card rows and the light theme.

pub mod cards;
pub mod carousel;
pub mod navbar;
pub mod theme;
pub mod widget_utils;

// Re-export commonly used types
pub use cards::{organization_card, CardResponse};
pub use carousel::{
    map_nav_key, Carousel, CarouselResponse, CarouselStyle, KeyboardScope, NAV_KEYS,
};
pub use navbar::{navbar, NavTarget, NavbarResponse};
pub use theme::{accent_color, apply_theme, error_color, muted_text_color, Theme};
pub use widget_utils::{widget_id, ScrollAreaExt, WidgetId};
