//! Match results and their aggregated form.
//!
//! - `MatchResult`: raw `(category, technology)` records from one scan,
//!   duplicates included
//! - `DetectedCategory`: one category with its deduplicated, sorted technologies

use std::collections::BTreeSet;

/// Technologies recorded for one category, in recording order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMatches {
    /// Category name
    pub category: String,
    /// Technology names, one entry per matching source string
    pub technologies: Vec<String>,
}

/// Raw output of the matcher.
///
/// Categories keep the order in which they were first recorded. A technology is
/// listed once per source string that matched it; use [`aggregate`](Self::aggregate)
/// for the presentation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    categories: Vec<CategoryMatches>,
}

impl MatchResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one `(category, technology)` match.
    pub fn record(&mut self, category: &str, technology: &str) {
        match self.categories.iter_mut().find(|c| c.category == category) {
            Some(entry) => entry.technologies.push(technology.to_string()),
            None => self.categories.push(CategoryMatches {
                category: category.to_string(),
                technologies: vec![technology.to_string()],
            }),
        }
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Recorded categories, in first-recorded order.
    pub fn categories(&self) -> &[CategoryMatches] {
        &self.categories
    }

    /// Raw technology entries for a category (duplicates included).
    pub fn technologies(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.technologies.as_slice())
    }

    /// Whether `(category, technology)` was recorded at least once.
    pub fn contains(&self, category: &str, technology: &str) -> bool {
        self.technologies(category)
            .is_some_and(|techs| techs.iter().any(|t| t == technology))
    }

    /// Total number of raw records.
    pub fn total_records(&self) -> usize {
        self.categories.iter().map(|c| c.technologies.len()).sum()
    }

    /// Deduplicates and alphabetically sorts each category's technologies.
    ///
    /// Category order is preserved.
    pub fn aggregate(&self) -> Vec<DetectedCategory> {
        self.categories
            .iter()
            .map(|c| DetectedCategory {
                category: c.category.clone(),
                technologies: c
                    .technologies
                    .iter()
                    .cloned()
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .collect(),
            })
            .collect()
    }
}

/// One category with its distinct technologies, sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedCategory {
    /// Category name
    pub category: String,
    /// Distinct technology names, alphabetically sorted
    pub technologies: Vec<String>,
}
