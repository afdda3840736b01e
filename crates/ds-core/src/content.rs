//! Content source abstraction
//!
//! The viewer never talks to a concrete content base directly; pages load
//! records through this trait and stay ignorant of how the tables are
//! stored.

use async_trait::async_trait;

use crate::directory::{Category, Organization, Sector};

/// Trait for directory content sources
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// All organization records, in content-base order
    async fn organizations(&self) -> anyhow::Result<Vec<Organization>>;

    /// Sector records the site builds filtered index pages for
    async fn sectors(&self) -> anyhow::Result<Vec<Sector>>;

    /// Category records, including parent links
    async fn categories(&self) -> anyhow::Result<Vec<Category>>;

    /// Name or path of the backing content base
    fn source_name(&self) -> &str;
}
