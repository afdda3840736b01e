//! Application state management

use serde::{Serialize, Deserialize};

/// Application-wide state
pub struct AppState {
    pub settings: AppSettings,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            settings: AppSettings::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub dark_mode: bool,
    pub show_category_sidebar: bool,
    /// Display height applied uniformly to every carousel slide, in points
    pub carousel_height: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            show_category_sidebar: true,
            carousel_height: 320.0,
        }
    }
}
