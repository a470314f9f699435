//! Signature catalog: category → technology → substring patterns.
//!
//! The catalog is a declarative, ordered JSON document. Declaration order is
//! the lookup order, and lookup is first-match-wins, so reordering entries
//! changes which technology a source string is attributed to.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use crate::config::{HSTS_TECHNOLOGY, SECURITY_CATEGORY};
use crate::error_handling::CatalogError;

/// Catalog compiled into the binary.
const BUILTIN_SIGNATURES: &str = include_str!("signatures.json");

static BUILTIN_CATALOG: LazyLock<Arc<SignatureCatalog>> = LazyLock::new(|| {
    let catalog = SignatureCatalog::from_json_str(BUILTIN_SIGNATURES).unwrap_or_else(|e| {
        panic!("Built-in signature catalog is invalid: {e}. This is a programming error.")
    });
    Arc::new(catalog)
});

/// A technology and the substrings that identify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologySignature {
    /// Display name (e.g. "jQuery")
    pub name: String,
    /// Case-insensitive substrings, tested in order
    pub patterns: Vec<String>,
}

/// A category and its technologies, in lookup order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySignatures {
    /// Category name (e.g. "JavaScript Libraries")
    pub category: String,
    /// Technologies in lookup order
    pub technologies: Vec<TechnologySignature>,
}

/// Immutable, validated signature catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureCatalog {
    categories: Vec<CategorySignatures>,
}

impl SignatureCatalog {
    /// Builds a catalog, validating it and lower-casing every pattern.
    ///
    /// # Errors
    ///
    /// - `CatalogError::DuplicateTechnology` if a technology name is declared twice
    /// - `CatalogError::EmptyPattern` if a pattern is empty
    /// - `CatalogError::ReservedTechnology` if `HSTS` is declared outside `Security`
    pub fn new(mut categories: Vec<CategorySignatures>) -> Result<Self, CatalogError> {
        let mut owners: HashMap<String, String> = HashMap::new();
        for category in &mut categories {
            for technology in &mut category.technologies {
                if let Some(first) = owners.get(&technology.name) {
                    return Err(CatalogError::DuplicateTechnology {
                        technology: technology.name.clone(),
                        first: first.clone(),
                        second: category.category.clone(),
                    });
                }
                if technology.name == HSTS_TECHNOLOGY && category.category != SECURITY_CATEGORY {
                    return Err(CatalogError::ReservedTechnology {
                        technology: technology.name.clone(),
                        expected: SECURITY_CATEGORY.to_string(),
                        category: category.category.clone(),
                    });
                }
                owners.insert(technology.name.clone(), category.category.clone());

                for pattern in &mut technology.patterns {
                    if pattern.is_empty() {
                        return Err(CatalogError::EmptyPattern {
                            category: category.category.clone(),
                            technology: technology.name.clone(),
                        });
                    }
                    *pattern = pattern.to_lowercase();
                }
            }
        }
        Ok(Self { categories })
    }

    /// Parses and validates a catalog from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let categories: Vec<CategorySignatures> = serde_json::from_str(json)?;
        Self::new(categories)
    }

    /// Reads, parses and validates a catalog file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The catalog compiled into the binary (parsed once).
    pub fn builtin() -> Arc<SignatureCatalog> {
        Arc::clone(&BUILTIN_CATALOG)
    }

    /// Categories in lookup order.
    pub fn categories(&self) -> &[CategorySignatures] {
        &self.categories
    }

    /// Total number of technologies across all categories.
    pub fn technology_count(&self) -> usize {
        self.categories.iter().map(|c| c.technologies.len()).sum()
    }

    /// Category a technology is declared in.
    pub fn category_of(&self, technology: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.technologies.iter().any(|t| t.name == technology))
            .map(|c| c.category.as_str())
    }

    /// Attributes a source string to the first matching technology.
    ///
    /// Returns `(category, technology)`. The comparison is case-insensitive.
    pub fn identify(&self, candidate: &str) -> Option<(&str, &str)> {
        self.first_match(&candidate.to_lowercase())
    }

    /// Same as [`identify`](Self::identify) for an already lower-cased candidate.
    pub(crate) fn first_match(&self, lowered: &str) -> Option<(&str, &str)> {
        for category in &self.categories {
            for technology in &category.technologies {
                if technology
                    .patterns
                    .iter()
                    .any(|pattern| lowered.contains(pattern.as_str()))
                {
                    return Some((category.category.as_str(), technology.name.as_str()));
                }
            }
        }
        None
    }
}

/// Returns the catalog to scan with: the file at `path` if given, otherwise the
/// built-in one.
pub fn init_catalog(path: Option<&Path>) -> Result<Arc<SignatureCatalog>, CatalogError> {
    match path {
        Some(path) => {
            let catalog = SignatureCatalog::from_path(path)?;
            log::info!(
                "Loaded signature catalog from {} ({} technologies)",
                path.display(),
                catalog.technology_count()
            );
            Ok(Arc::new(catalog))
        }
        None => Ok(SignatureCatalog::builtin()),
    }
}
