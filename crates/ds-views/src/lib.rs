//! Page views for the directory site
//!
//! One view per page template: the organization index (all organizations or
//! one sector), the organization profile and the capital index. Views load
//! records through the shared [`SiteContext`] and request navigation through
//! it.

mod about;
mod capital_index;
mod organization_index;
mod organization_profile;
mod page_view;

pub use about::AboutView;
pub use capital_index::CapitalIndexView;
pub use organization_index::OrganizationIndexView;
pub use organization_profile::OrganizationProfileView;
pub use page_view::PageView;

use std::sync::Arc;

use parking_lot::RwLock;

use ds_content::OrganizationFilter;
use ds_core::content::ContentSource;
use ds_core::directory::{Category, Organization, Sector};
use ds_core::identity::IdentityProvider;
use ds_core::routes::RouteTable;

/// Context passed to views during rendering
#[derive(Clone)]
pub struct SiteContext {
    /// Current content source
    pub content: Arc<RwLock<Option<Arc<dyn ContentSource>>>>,

    /// Static routes built from the content base
    pub routes: Arc<RwLock<RouteTable>>,

    /// Active organization filter, shared between the navbar and the pages
    pub filter: Arc<RwLock<OrganizationFilter>>,

    /// Identity provider behind the navbar
    pub identity: Arc<dyn IdentityProvider>,

    /// Path navigation requested by a view this frame
    pub pending_navigation: Arc<RwLock<Option<String>>>,

    /// Tokio runtime handle
    pub runtime_handle: tokio::runtime::Handle,
}

impl SiteContext {
    /// Ask the shell to show the page at `path` on the next frame
    pub fn request_navigation(&self, path: impl Into<String>) {
        *self.pending_navigation.write() = Some(path.into());
    }

    /// Drain the pending navigation request, if any
    pub fn take_navigation(&self) -> Option<String> {
        self.pending_navigation.write().take()
    }

    /// Snapshot of the current content source
    pub fn content_source(&self) -> Option<Arc<dyn ContentSource>> {
        self.content.read().clone()
    }

    /// Load the organization table through the current source.
    ///
    /// Blocks the UI thread for the duration of the query; sources answer
    /// from memory after their first load.
    pub fn load_organizations(&self) -> anyhow::Result<Vec<Organization>> {
        match self.content_source() {
            Some(source) => self.runtime_handle.block_on(source.organizations()),
            None => Ok(Vec::new()),
        }
    }

    pub fn load_sectors(&self) -> anyhow::Result<Vec<Sector>> {
        match self.content_source() {
            Some(source) => self.runtime_handle.block_on(source.sectors()),
            None => Ok(Vec::new()),
        }
    }

    pub fn load_categories(&self) -> anyhow::Result<Vec<Category>> {
        match self.content_source() {
            Some(source) => self.runtime_handle.block_on(source.categories()),
            None => Ok(Vec::new()),
        }
    }
}
