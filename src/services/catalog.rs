use crate::models::Deal;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading the deal catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate deal id: {0}")]
    DuplicateId(i64),
}

/// Immutable, in-memory deal catalog
///
/// Loaded once at startup and shared read-only between request handlers.
/// Entry order is the order of the source file and is used to break ties
/// when ranking.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    deals: Vec<Deal>,
}

impl Catalog {
    /// Build a catalog from already-parsed deals, rejecting duplicate ids
    pub fn from_deals(deals: Vec<Deal>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(deals.len());
        for deal in &deals {
            if !seen.insert(deal.id) {
                return Err(CatalogError::DuplicateId(deal.id));
            }
        }

        Ok(Self { deals })
    }

    /// Parse a catalog from a JSON array of deals
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let deals: Vec<Deal> = serde_json::from_str(json)?;
        Self::from_deals(deals)
    }

    /// Load a catalog from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;

        tracing::info!("Loaded {} deals from {}", catalog.len(), path.display());

        Ok(catalog)
    }

    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    pub fn len(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Deal> {
        self.deals.iter().find(|deal| deal.id == id)
    }
}
