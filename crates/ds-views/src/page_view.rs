//! Page view abstraction - base trait for all routable pages

use egui::Ui;

use crate::SiteContext;

/// Base trait for all page views
pub trait PageView: Send {
    /// The route path this view was built for
    fn route_path(&self) -> &str;

    /// Page title shown in the window chrome
    fn title(&self) -> &str;

    /// Draw the UI
    fn ui(&mut self, ctx: &SiteContext, ui: &mut Ui);
}
