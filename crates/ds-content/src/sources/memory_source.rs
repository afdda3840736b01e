//! In-memory content source

use async_trait::async_trait;
use ds_core::content::ContentSource;
use ds_core::directory::{Category, Organization, Sector};

/// Content source over caller-built records.
///
/// Used by demo mode and tests; serves clones of the records it was
/// constructed with.
pub struct MemoryContentSource {
    name: String,
    organizations: Vec<Organization>,
    sectors: Vec<Sector>,
    categories: Vec<Category>,
}

impl MemoryContentSource {
    pub fn new(
        name: impl Into<String>,
        organizations: Vec<Organization>,
        sectors: Vec<Sector>,
        categories: Vec<Category>,
    ) -> Self {
        Self {
            name: name.into(),
            organizations,
            sectors,
            categories,
        }
    }
}

#[async_trait]
impl ContentSource for MemoryContentSource {
    async fn organizations(&self) -> anyhow::Result<Vec<Organization>> {
        Ok(self.organizations.clone())
    }

    async fn sectors(&self) -> anyhow::Result<Vec<Sector>> {
        Ok(self.sectors.clone())
    }

    async fn categories(&self) -> anyhow::Result<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}
