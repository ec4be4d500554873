//! Store catalog and name filtering
//!
//! The catalog is immutable for the process lifetime. It ships with a
//! built-in seed corpus and can instead be loaded from a JSON file so a
//! collaborator can supply real data; the only contract is a sequence of
//! records with unique, stable ids.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// One store listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub comments: Vec<String>,
    pub link: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate store id {0} in catalog")]
    DuplicateId(i64),
}

/// Immutable collection of store records
#[derive(Debug, Clone, Default)]
pub struct StoreCatalog {
    records: Vec<StoreRecord>,
}

impl StoreCatalog {
    pub fn new(records: Vec<StoreRecord>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
        }
        Ok(Self { records })
    }

    /// Load a collaborator-supplied corpus from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let display = path.as_ref().display().to_string();
        let content = std::fs::read_to_string(&path).map_err(|source| CatalogError::Io {
            path: display.clone(),
            source,
        })?;
        let records: Vec<StoreRecord> =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: display,
                source,
            })?;
        Self::new(records)
    }

    /// The built-in seed corpus
    pub fn seed() -> Self {
        let records = vec![
            StoreRecord {
                id: 1,
                name: "Tech World".to_string(),
                description: "All about gadgets and electronics, offering the latest in tech, from smartphones to laptops, accessories, and more.".to_string(),
                comments: vec![
                    "Great selection of tech gadgets!".to_string(),
                    "Staff is very knowledgeable.".to_string(),
                    "Affordable prices and excellent quality!".to_string(),
                    "Highly recommend for tech lovers.".to_string(),
                ],
                link: "https://www.techworld.com".to_string(),
            },
            StoreRecord {
                id: 2,
                name: "Fashion Fiesta".to_string(),
                description: "Trendy clothes and accessories for all ages. Latest trends at affordable prices, including seasonal collections.".to_string(),
                comments: vec![
                    "Love the fashion variety!".to_string(),
                    "Affordable and stylish!".to_string(),
                    "Great quality clothes!".to_string(),
                    "Fantastic customer service!".to_string(),
                ],
                link: "https://www.fashionfiesta.com".to_string(),
            },
            StoreRecord {
                id: 3,
                name: "Book Haven".to_string(),
                description: "A cozy corner for readers of every genre, stocking bestsellers, rare finds and everything in between.".to_string(),
                comments: vec![
                    "Huge collection of novels!".to_string(),
                    "The staff always has a recommendation.".to_string(),
                    "Perfect place to spend an afternoon.".to_string(),
                ],
                link: "https://www.bookhaven.com".to_string(),
            },
            StoreRecord {
                id: 4,
                name: "Home Essentials".to_string(),
                description: "Everything for the modern household, from kitchenware and storage to decor and small appliances.".to_string(),
                comments: vec![
                    "Found everything I needed for my new flat.".to_string(),
                    "Good prices on kitchenware.".to_string(),
                    "Delivery was quick and careful.".to_string(),
                ],
                link: "https://www.homeessentials.com".to_string(),
            },
            StoreRecord {
                id: 5,
                name: "Grocery Galaxy".to_string(),
                description: "Fresh produce, pantry staples and international foods, all under one roof with daily deals.".to_string(),
                comments: vec![
                    "Always fresh vegetables!".to_string(),
                    "The international aisle is fantastic.".to_string(),
                ],
                link: "https://www.grocerygalaxy.com".to_string(),
            },
            StoreRecord {
                id: 6,
                name: "Pet Palace".to_string(),
                description: "Food, toys and grooming supplies for pets of all shapes and sizes, with advice from animal lovers.".to_string(),
                comments: vec![
                    "My dog loves their treats.".to_string(),
                    "Knowledgeable staff, great grooming section.".to_string(),
                    "Best pet store in town.".to_string(),
                ],
                link: "https://www.petpalace.com".to_string(),
            },
        ];

        // Seed ids are assigned by hand above and are unique
        Self { records }
    }

    pub fn records(&self) -> &[StoreRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Case-insensitive substring match against each record's name.
///
/// An empty query yields an empty result, never the full corpus. Corpus
/// order is preserved.
pub fn filter_by_name(query: &str, records: &[StoreRecord]) -> Vec<StoreRecord> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
