// 🏷️ Category Model - Closed set of spending categories
// CategoryId is the stable identifier the classifier works with;
// Category carries display metadata only (names, icon, color).

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

// ============================================================================
// CATEGORY ID
// ============================================================================

/// Opaque category identifier (e.g. "dining", "transport", "miscellaneous")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        CategoryId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        CategoryId(id.to_string())
    }
}

impl From<String> for CategoryId {
    fn from(id: String) -> Self {
        CategoryId(id)
    }
}

// ============================================================================
// CATEGORY METADATA
// ============================================================================

/// Display metadata for one spending category.
///
/// The classifier itself only ever consumes ids; names, icons and colors
/// exist for the UI layer that renders suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    /// English display name (e.g. "Dining")
    pub name: String,

    /// Localized display name (the built-in set ships Korean labels)
    pub korean_name: Option<String>,

    /// Icon identifier for UI (e.g. "restaurant", "airplane")
    pub icon: Option<String>,

    /// Display color for UI (e.g. "#FF6B6B")
    pub color: Option<String>,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Category {
            id: id.into(),
            name: name.into(),
            korean_name: None,
            icon: None,
            color: None,
        }
    }

    /// Create category with full display metadata
    pub fn with_display(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        korean_name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Category {
            id: id.into(),
            name: name.into(),
            korean_name: Some(korean_name.into()),
            icon: Some(icon.into()),
            color: Some(color.into()),
        }
    }
}

// ============================================================================
// CATEGORY SET
// ============================================================================

/// The closed enumeration of categories a classifier may return.
///
/// Invariants (checked at construction):
/// - ids are unique
/// - the designated fallback id is a member
///
/// Order is preserved as given; lookups that miss resolve to the fallback
/// category's metadata so callers always have something to display.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySet {
    categories: Vec<Category>,
    fallback: CategoryId,
}

/// On-disk shape of a category set (validated into `CategorySet` on load)
#[derive(Deserialize)]
struct CategorySetDoc {
    fallback: CategoryId,
    categories: Vec<Category>,
}

impl CategorySet {
    pub fn new(categories: Vec<Category>, fallback: impl Into<CategoryId>) -> Result<Self> {
        let fallback = fallback.into();

        let mut seen: HashSet<&str> = HashSet::new();
        for category in &categories {
            if !seen.insert(category.id.as_str()) {
                bail!("duplicate category id: {}", category.id);
            }
        }

        if !categories.iter().any(|c| c.id == fallback) {
            bail!("fallback category '{}' is not a member of the set", fallback);
        }

        Ok(CategorySet { categories, fallback })
    }

    /// Load a category set from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read category set file: {:?}", path.as_ref()))?;

        let doc: CategorySetDoc =
            serde_json::from_str(&content).context("Failed to parse category set JSON")?;

        CategorySet::new(doc.categories, doc.fallback)
    }

    /// Save the category set as JSON
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write category set file: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn fallback(&self) -> &CategoryId {
        &self.fallback
    }

    /// Metadata of the fallback category
    pub fn fallback_category(&self) -> &Category {
        // Membership is a construction invariant
        self.categories
            .iter()
            .find(|c| c.id == self.fallback)
            .unwrap_or(&self.categories[0])
    }

    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == *id)
    }

    pub fn contains(&self, id: &CategoryId) -> bool {
        self.get(id).is_some()
    }

    /// Display name for an id; unknown ids resolve to the fallback's name
    pub fn display_name(&self, id: &CategoryId, korean: bool) -> &str {
        let category = self.get(id).unwrap_or_else(|| self.fallback_category());
        if korean {
            category.korean_name.as_deref().unwrap_or(&category.name)
        } else {
            &category.name
        }
    }

    /// Display color for an id; unknown ids resolve to the fallback's color
    pub fn color(&self, id: &CategoryId) -> Option<&str> {
        let category = self.get(id).unwrap_or_else(|| self.fallback_category());
        category.color.as_deref()
    }

    pub fn ids(&self) -> impl Iterator<Item = &CategoryId> {
        self.categories.iter().map(|c| &c.id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> CategorySet {
        CategorySet::new(
            vec![
                Category::with_display("dining", "Dining", "식비", "restaurant", "#FF6B6B"),
                Category::new("transport", "Transport"),
                Category::new("miscellaneous", "Miscellaneous"),
            ],
            "miscellaneous",
        )
        .unwrap()
    }

    #[test]
    fn test_membership_and_order() {
        let set = sample_set();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&CategoryId::from("dining")));
        assert!(!set.contains(&CategoryId::from("travel")));

        let ids: Vec<&str> = set.ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["dining", "transport", "miscellaneous"]);
    }

    #[test]
    fn test_fallback_must_be_member() {
        let result = CategorySet::new(vec![Category::new("dining", "Dining")], "miscellaneous");
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = CategorySet::new(
            vec![
                Category::new("dining", "Dining"),
                Category::new("dining", "Dining again"),
            ],
            "dining",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_display_name_resolution() {
        let set = sample_set();
        assert_eq!(set.display_name(&CategoryId::from("dining"), false), "Dining");
        assert_eq!(set.display_name(&CategoryId::from("dining"), true), "식비");
        // Korean label missing falls back to the English name
        assert_eq!(set.display_name(&CategoryId::from("transport"), true), "Transport");
        // Unknown id resolves to the fallback category
        assert_eq!(
            set.display_name(&CategoryId::from("no-such"), false),
            "Miscellaneous"
        );
    }

    #[test]
    fn test_fallback_category_metadata() {
        let set = sample_set();
        assert_eq!(set.fallback().as_str(), "miscellaneous");
        assert_eq!(set.fallback_category().name, "Miscellaneous");
    }
}
