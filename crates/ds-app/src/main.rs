//! Main application entry point

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use eframe::egui::{self, Context};
use parking_lot::RwLock;
use tracing::{error, info, warn};

use ds_content::{CsvContentSource, OrganizationFilter};
use ds_core::content::ContentSource;
use ds_core::identity::LocalIdentity;
use ds_core::routes::RouteTable;
use ds_core::state::AppState;
use ds_ui::{apply_theme, navbar, Theme};
use ds_views::{PageView, SiteContext};

mod demo;
mod view_builder;

/// Route shown after a content source loads
const START_PATH: &str = "/organizations";

/// Main application state
struct DirectoryApp {
    /// Context shared between all page views
    site_context: SiteContext,

    /// Application state
    app_state: AppState,

    /// View for the current route
    current_view: Option<Box<dyn PageView>>,

    /// Path of the current route
    current_path: String,

    /// Error from the last content load attempt, shown on the welcome screen
    load_error: Option<String>,

    /// Tokio runtime
    runtime: tokio::runtime::Runtime,
}

impl DirectoryApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        apply_theme(&cc.egui_ctx, &Theme::default());
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let runtime = tokio::runtime::Runtime::new().expect("failed to start tokio runtime");

        let site_context = SiteContext {
            content: Arc::new(RwLock::new(None)),
            routes: Arc::new(RwLock::new(RouteTable::default())),
            filter: Arc::new(RwLock::new(OrganizationFilter::default())),
            identity: Arc::new(LocalIdentity::new()),
            pending_navigation: Arc::new(RwLock::new(None)),
            runtime_handle: runtime.handle().clone(),
        };

        Self {
            site_context,
            app_state: AppState::new(),
            current_view: None,
            current_path: START_PATH.to_string(),
            load_error: None,
            runtime,
        }
    }

    /// Load the bundled demo directory
    fn init_demo_mode(&mut self) {
        self.install_source(Arc::new(demo::demo_content_source()));
    }

    /// Load a directory of CSV exports picked by the user
    fn open_content_directory(&mut self, dir: PathBuf) {
        match self.runtime.block_on(CsvContentSource::new(dir.clone())) {
            Ok(source) => self.install_source(Arc::new(source)),
            Err(err) => {
                error!(dir = %dir.display(), "failed to open content directory: {err}");
                self.load_error = Some(err.to_string());
            }
        }
    }

    /// Swap in a content source and rebuild the route table from it
    fn install_source(&mut self, source: Arc<dyn ContentSource>) {
        let loaded = self.runtime.block_on(async {
            let sectors = source.sectors().await?;
            let organizations = source.organizations().await?;
            anyhow::Ok((sectors, organizations))
        });

        match loaded {
            Ok((sectors, organizations)) => {
                let routes = RouteTable::build(&sectors, &organizations);
                info!(
                    source = source.source_name(),
                    routes = routes.len(),
                    "content source installed"
                );
                *self.site_context.routes.write() = routes;
                *self.site_context.content.write() = Some(source);
                self.site_context.filter.write().clear();
                self.load_error = None;
                self.navigate_to(START_PATH.to_string());
            }
            Err(err) => {
                error!("failed to load content source: {err:#}");
                self.load_error = Some(err.to_string());
            }
        }
    }

    /// Replace the current view with the one at `path`
    fn navigate_to(&mut self, path: String) {
        let route = self.site_context.routes.read().resolve(&path).cloned();
        match route {
            Some(route) => {
                info!(%path, "navigate");
                self.current_view =
                    Some(view_builder::build_view(&route, &self.app_state.settings));
                self.current_path = path;
            }
            None => {
                warn!(%path, "no route for path");
            }
        }
    }

    fn show_welcome_screen(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);

            ui.heading("Orgscape Directory");
            ui.add_space(8.0);
            ui.label("Browse organizations, sectors and capital providers");
            ui.add_space(32.0);

            ui.horizontal(|ui| {
                // Center the two buttons by padding the row
                let button_row_width = 320.0;
                ui.add_space((ui.available_width() - button_row_width).max(0.0) / 2.0);

                if ui
                    .button("Demo directory")
                    .on_hover_text("Explore with bundled sample records")
                    .clicked()
                {
                    self.init_demo_mode();
                }

                if ui
                    .button("Open content folder…")
                    .on_hover_text("A folder with organizations.csv, sectors.csv, categories.csv")
                    .clicked()
                {
                    if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                        self.open_content_directory(dir);
                    }
                }
            });

            if let Some(message) = &self.load_error {
                ui.add_space(16.0);
                ui.colored_label(ds_ui::error_color(), message);
            }
        });
    }
}

impl eframe::App for DirectoryApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Navbar chrome
        let mut search = self.site_context.filter.read().keyword.clone();
        let nav = navbar(ctx, self.site_context.identity.as_ref(), &mut search);
        if nav.search_changed {
            self.site_context.filter.write().keyword = search;
        }
        if let Some(target) = nav.navigate {
            self.navigate_to(target.path().to_string());
        }

        // Navigation requested by a view during the previous frame
        if let Some(path) = self.site_context.take_navigation() {
            self.navigate_to(path);
        }

        let has_content = self.site_context.content.read().is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            if !has_content {
                self.show_welcome_screen(ui);
            } else if let Some(view) = &mut self.current_view {
                view.ui(&self.site_context, ui);
            }
        });
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("starting directory viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Orgscape Directory",
        options,
        Box::new(|cc| Box::new(DirectoryApp::new(cc))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run app: {err}"))
}
