//! About page

use egui::{RichText, Ui};

use crate::{PageView, SiteContext};

/// Static about page
pub struct AboutView {
    route_path: String,
}

impl AboutView {
    pub fn new(route_path: impl Into<String>) -> Self {
        Self {
            route_path: route_path.into(),
        }
    }
}

impl PageView for AboutView {
    fn route_path(&self) -> &str {
        &self.route_path
    }

    fn title(&self) -> &str {
        "About"
    }

    fn ui(&mut self, ctx: &SiteContext, ui: &mut Ui) {
        ui.heading("About this directory");
        ui.add_space(8.0);
        ui.label(
            "A community-maintained directory of the organizations and \
             capital providers working on climate. Records live in a shared \
             content base; this viewer renders them as browsable pages.",
        );
        ui.add_space(8.0);
        ui.label(
            RichText::new("Browse by sector, filter by tag or location, and \
             open any organization for its full profile.")
                .color(ds_ui::muted_text_color()),
        );
        ui.add_space(12.0);
        if ui.link("Browse all organizations").clicked() {
            ctx.request_navigation("/organizations");
        }
    }
}
