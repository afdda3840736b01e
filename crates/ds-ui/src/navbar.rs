//! Top navigation chrome

use egui::{Context, RichText, TopBottomPanel};

use ds_core::identity::IdentityProvider;

use crate::theme;

/// A navigation request raised from the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Organizations,
    Capital,
    About,
}

impl NavTarget {
    pub fn path(self) -> &'static str {
        match self {
            NavTarget::Organizations => "/organizations",
            NavTarget::Capital => "/capital",
            NavTarget::About => "/about",
        }
    }

    fn label(self) -> &'static str {
        match self {
            NavTarget::Organizations => "Organizations",
            NavTarget::Capital => "Capital",
            NavTarget::About => "About",
        }
    }
}

/// What the navbar reported back this frame
#[derive(Default)]
pub struct NavbarResponse {
    pub navigate: Option<NavTarget>,
    /// The search box content changed
    pub search_changed: bool,
}

/// Render the top navigation bar: brand, search, page links and the
/// sign-in control
pub fn navbar(
    ctx: &Context,
    identity: &dyn IdentityProvider,
    search: &mut String,
) -> NavbarResponse {
    let mut response = NavbarResponse::default();

    TopBottomPanel::top("navbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Orgscape")
                    .heading()
                    .color(theme::accent_color())
                    .strong(),
            );

            ui.separator();

            let search_edit = ui.add(
                egui::TextEdit::singleline(search)
                    .hint_text("Search organizations…")
                    .desired_width(220.0),
            );
            response.search_changed = search_edit.changed();

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if identity.is_authenticated() {
                    if ui.button("Sign out").clicked() {
                        identity.logout();
                    }
                } else if ui.button("Sign in").clicked() {
                    identity.login_with_redirect();
                }

                ui.separator();

                // Right-to-left layout: later entries land further left
                for target in [NavTarget::About, NavTarget::Capital, NavTarget::Organizations] {
                    if ui.link(target.label()).clicked() {
                        response.navigate = Some(target);
                    }
                }
            });
        });
    });

    response
}
