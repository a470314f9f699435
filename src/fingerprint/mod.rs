//! Technology fingerprinting.
//!
//! This module provides:
//! - The signature catalog (declarative, ordered, compiled in)
//! - The matcher that scans script/link sources and HSTS meta tags
//! - Match results and their deduplicated, sorted aggregation

mod catalog;
mod matcher;
mod models;

// Re-export public API
pub use catalog::{init_catalog, CategorySignatures, SignatureCatalog, TechnologySignature};
pub use matcher::match_document;
pub use models::{CategoryMatches, DetectedCategory, MatchResult};
