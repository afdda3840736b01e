//! CSV content source for loading the directory tables from disk
//!
//! A content directory holds up to three files: `organizations.csv`
//! (required), `sectors.csv` and `categories.csv` (optional). Multi-valued
//! cells (tags, roles, categories, photos) use `;` between entries; a photo
//! entry is `url|title`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ahash::AHashMap;
use async_trait::async_trait;
use csv::ReaderBuilder;
use parking_lot::RwLock;
use tracing::info;

use ds_core::content::ContentSource;
use ds_core::directory::{
    slugify, CapitalProfile, Category, Organization, Photo, Sector, SourceAttribution,
};

use crate::ContentError;

const ORGANIZATIONS_FILE: &str = "organizations.csv";
const SECTORS_FILE: &str = "sectors.csv";
const CATEGORIES_FILE: &str = "categories.csv";

/// Separator for multi-valued cells
const LIST_SEPARATOR: char = ';';
/// Separator between a photo URL and its title
const PHOTO_TITLE_SEPARATOR: char = '|';

/// Content source backed by a directory of CSV exports.
///
/// The tables are parsed once on first access and served from memory after
/// that; the files are small enough that chunked loading would buy nothing.
pub struct CsvContentSource {
    dir: PathBuf,
    name: String,
    tables: Arc<RwLock<Option<Arc<Tables>>>>,
}

#[derive(Debug, Default)]
struct Tables {
    organizations: Vec<Organization>,
    sectors: Vec<Sector>,
    categories: Vec<Category>,
}

impl CsvContentSource {
    /// Create a new CSV source over a content directory
    pub async fn new(dir: PathBuf) -> Result<Self, ContentError> {
        if !dir.is_dir() || !dir.join(ORGANIZATIONS_FILE).is_file() {
            return Err(ContentError::DirectoryNotFound(
                dir.display().to_string(),
            ));
        }
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string());
        Ok(Self {
            dir,
            name,
            tables: Arc::new(RwLock::new(None)),
        })
    }

    /// Parse the tables, or return the cached parse
    async fn load(&self) -> Result<Arc<Tables>, ContentError> {
        if let Some(tables) = self.tables.read().clone() {
            return Ok(tables);
        }

        let dir = self.dir.clone();
        let tables = tokio::task::spawn_blocking(move || parse_directory(&dir)).await??;

        info!(
            source = %self.name,
            organizations = tables.organizations.len(),
            sectors = tables.sectors.len(),
            categories = tables.categories.len(),
            "loaded content tables"
        );

        let tables = Arc::new(tables);
        *self.tables.write() = Some(tables.clone());
        Ok(tables)
    }
}

#[async_trait]
impl ContentSource for CsvContentSource {
    async fn organizations(&self) -> anyhow::Result<Vec<Organization>> {
        Ok(self.load().await?.organizations.clone())
    }

    async fn sectors(&self) -> anyhow::Result<Vec<Sector>> {
        Ok(self.load().await?.sectors.clone())
    }

    async fn categories(&self) -> anyhow::Result<Vec<Category>> {
        Ok(self.load().await?.categories.clone())
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

fn parse_directory(dir: &Path) -> Result<Tables, ContentError> {
    let organizations_file = File::open(dir.join(ORGANIZATIONS_FILE))?;
    let mut organizations = parse_organizations(BufReader::new(organizations_file))?;

    let sectors = match File::open(dir.join(SECTORS_FILE)) {
        Ok(file) => parse_sectors(BufReader::new(file))?,
        Err(_) => Vec::new(),
    };
    let categories = match File::open(dir.join(CATEGORIES_FILE)) {
        Ok(file) => parse_categories(BufReader::new(file))?,
        Err(_) => Vec::new(),
    };

    resolve_category_parents(&mut organizations, &categories);

    Ok(Tables {
        organizations,
        sectors,
        categories,
    })
}

/// Column lookup by header name
struct HeaderMap {
    index: AHashMap<String, usize>,
}

impl HeaderMap {
    fn new(headers: &csv::StringRecord) -> Self {
        let index = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.trim().to_string(), idx))
            .collect();
        Self { index }
    }

    /// The trimmed cell under `column`, if present and non-empty
    fn get<'r>(&self, record: &'r csv::StringRecord, column: &str) -> Option<&'r str> {
        let value = self.index.get(column).and_then(|&idx| record.get(idx))?;
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    fn get_string(&self, record: &csv::StringRecord, column: &str) -> Option<String> {
        self.get(record, column).map(str::to_string)
    }

    fn require(&self, column: &str) -> Result<(), ContentError> {
        if self.index.contains_key(column) {
            Ok(())
        } else {
            Err(ContentError::MissingColumn(column.to_string()))
        }
    }
}

fn parse_organizations<R: Read>(reader: R) -> Result<Vec<Organization>, ContentError> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = HeaderMap::new(csv_reader.headers()?);
    headers.require("Name")?;

    let mut organizations = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let Some(name) = headers.get_string(&record, "Name") else {
            continue;
        };
        let slug = headers
            .get_string(&record, "Slug")
            .unwrap_or_else(|| slugify(&name));

        let capital_profile = parse_capital_profile(&headers, &record);
        let source = match (
            headers.get_string(&record, "Source_Name"),
            headers.get_string(&record, "Source_URL"),
        ) {
            (Some(name), Some(url)) => Some(SourceAttribution { name, url }),
            _ => None,
        };

        organizations.push(Organization {
            name,
            slug,
            tagline: headers.get_string(&record, "Tagline"),
            about: headers.get_string(&record, "About"),
            homepage: headers.get_string(&record, "Homepage"),
            linkedin: headers.get_string(&record, "LinkedIn"),
            twitter: headers.get_string(&record, "Twitter"),
            facebook: headers.get_string(&record, "Facebook"),
            crunchbase: headers.get_string(&record, "Crunchbase"),
            hq_location: headers.get_string(&record, "HQ_Location"),
            headcount: headers.get_string(&record, "Headcount"),
            organization_type: headers.get_string(&record, "Organization_Type"),
            roles: split_list(headers.get(&record, "Role")),
            tags: split_list(headers.get(&record, "Tags")),
            categories: split_list(headers.get(&record, "Categories"))
                .into_iter()
                .map(Category::new)
                .collect(),
            logo: headers.get_string(&record, "Logo"),
            linkedin_logo: headers.get_string(&record, "LinkedIn_Logo"),
            crunchbase_logo: headers.get_string(&record, "Crunchbase_Logo"),
            photos: parse_photos(headers.get(&record, "Photos")),
            capital_profile,
            source,
        });
    }
    Ok(organizations)
}

fn parse_sectors<R: Read>(reader: R) -> Result<Vec<Sector>, ContentError> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = HeaderMap::new(csv_reader.headers()?);
    headers.require("Name")?;

    let mut sectors = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let Some(name) = headers.get_string(&record, "Name") else {
            continue;
        };
        let slug = headers
            .get_string(&record, "Slug")
            .unwrap_or_else(|| slugify(&name));
        sectors.push(Sector { name, slug });
    }
    Ok(sectors)
}

fn parse_categories<R: Read>(reader: R) -> Result<Vec<Category>, ContentError> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = HeaderMap::new(csv_reader.headers()?);
    headers.require("Name")?;

    let mut categories = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let Some(name) = headers.get_string(&record, "Name") else {
            continue;
        };
        categories.push(Category {
            name,
            parent: headers.get_string(&record, "Parent"),
        });
    }
    Ok(categories)
}

fn parse_capital_profile(headers: &HeaderMap, record: &csv::StringRecord) -> Option<CapitalProfile> {
    let capital_type = split_list(headers.get(record, "Capital_Type"));
    let stage = split_list(headers.get(record, "Capital_Stage"));
    let check_size = split_list(headers.get(record, "Check_Size"));
    let strategic = parse_flag(headers.get(record, "Strategic"));
    let impact_specific = parse_flag(headers.get(record, "Impact_Specific"));

    if capital_type.is_empty() && stage.is_empty() && check_size.is_empty() {
        return None;
    }
    Some(CapitalProfile {
        capital_type,
        stage,
        check_size,
        strategic,
        impact_specific,
    })
}

/// Split a multi-valued cell on the list separator, dropping empties
fn split_list(cell: Option<&str>) -> Vec<String> {
    cell.map(|value| {
        value
            .split(LIST_SEPARATOR)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Parse a `url|title` photo list
fn parse_photos(cell: Option<&str>) -> Vec<Photo> {
    split_list(cell)
        .into_iter()
        .map(|entry| match entry.split_once(PHOTO_TITLE_SEPARATOR) {
            Some((url, title)) => Photo {
                url: url.trim().to_string(),
                title: title.trim().to_string(),
            },
            None => Photo {
                url: entry,
                title: String::new(),
            },
        })
        .collect()
}

fn parse_flag(cell: Option<&str>) -> bool {
    matches!(
        cell.map(str::to_ascii_lowercase).as_deref(),
        Some("true") | Some("yes") | Some("1") | Some("checked")
    )
}

/// Attach parent links to the category names organizations reference
fn resolve_category_parents(organizations: &mut [Organization], categories: &[Category]) {
    let parents: AHashMap<&str, &Option<String>> = categories
        .iter()
        .map(|category| (category.name.as_str(), &category.parent))
        .collect();

    for org in organizations {
        for category in &mut org.categories {
            if let Some(parent) = parents.get(category.name.as_str()) {
                category.parent = (*parent).clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORGANIZATIONS_CSV: &str = "\
Name,Slug,Tagline,Role,Tags,Categories,Logo,Photos,Capital_Type,Check_Size,Strategic
Acme Solar,acme-solar,Solar for all,Organization,solar;hardware,Solar Power,https://img.example/acme.png,https://img.example/1.jpg|Factory;https://img.example/2.jpg|Roof,,,
Green Fund,,Backing climate founders,Capital,,Finance,,,VC;Grant,$100k-$1M,yes
";

    const CATEGORIES_CSV: &str = "\
Name,Parent
Solar Power,Renewable Energy
Renewable Energy,
Finance,
";

    const SECTORS_CSV: &str = "\
Name,Slug
Renewable Energy,
Carbon Removal,carbon-removal
";

    #[test]
    fn test_parse_organizations() {
        let orgs = parse_organizations(ORGANIZATIONS_CSV.as_bytes()).unwrap();
        assert_eq!(orgs.len(), 2);

        let acme = &orgs[0];
        assert_eq!(acme.name, "Acme Solar");
        assert_eq!(acme.slug, "acme-solar");
        assert_eq!(acme.tags, vec!["solar", "hardware"]);
        assert_eq!(acme.photos.len(), 2);
        assert_eq!(acme.photos[0].url, "https://img.example/1.jpg");
        assert_eq!(acme.photos[0].title, "Factory");
        assert!(acme.capital_profile.is_none());
    }

    #[test]
    fn test_missing_slug_is_derived_from_name() {
        let orgs = parse_organizations(ORGANIZATIONS_CSV.as_bytes()).unwrap();
        assert_eq!(orgs[1].slug, "green-fund");
    }

    #[test]
    fn test_capital_profile_parsing() {
        let orgs = parse_organizations(ORGANIZATIONS_CSV.as_bytes()).unwrap();
        let profile = orgs[1].capital_profile.as_ref().unwrap();
        assert_eq!(profile.capital_type, vec!["VC", "Grant"]);
        assert_eq!(profile.check_size, vec!["$100k-$1M"]);
        assert!(profile.strategic);
        assert!(!profile.impact_specific);
        assert!(orgs[1].is_capital());
    }

    #[test]
    fn test_missing_name_column_is_rejected() {
        let result = parse_organizations("Slug,Tagline\nacme,Solar\n".as_bytes());
        assert!(matches!(result, Err(ContentError::MissingColumn(_))));
    }

    #[test]
    fn test_parse_sectors_derives_missing_slug() {
        let sectors = parse_sectors(SECTORS_CSV.as_bytes()).unwrap();
        assert_eq!(sectors[0].slug, "renewable-energy");
        assert_eq!(sectors[1].slug, "carbon-removal");
    }

    #[test]
    fn test_category_parent_resolution() {
        let mut orgs = parse_organizations(ORGANIZATIONS_CSV.as_bytes()).unwrap();
        let categories = parse_categories(CATEGORIES_CSV.as_bytes()).unwrap();
        resolve_category_parents(&mut orgs, &categories);

        assert_eq!(
            orgs[0].categories[0].parent.as_deref(),
            Some("Renewable Energy")
        );
        assert_eq!(orgs[1].categories[0].parent, None);
    }

    #[test]
    fn test_split_list_drops_empty_entries() {
        assert_eq!(split_list(Some("a; ;b;")), vec!["a", "b"]);
        assert!(split_list(None).is_empty());
    }
}
