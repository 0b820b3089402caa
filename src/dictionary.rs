// 📚 Keyword Dictionary - Ordered category → keyword mapping
// Entry order is semantic: classification ties resolve to the first entry,
// so entries live in a Vec and are never reordered.
//
// Learning is copy-on-write: `with_keyword` returns a NEW snapshot with a
// bumped version, and `DictionaryStore` swaps snapshots behind a lock so
// concurrent readers never see a keyword list mid-append.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::category::{CategoryId, CategorySet};

// ============================================================================
// DICTIONARY ENTRY
// ============================================================================

/// Keywords that vote for one category. Keywords are stored case-folded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub category: CategoryId,
    pub keywords: Vec<String>,
}

// ============================================================================
// KEYWORD DICTIONARY
// ============================================================================

/// Immutable dictionary snapshot.
///
/// Invariants:
/// - no duplicate category entries
/// - keywords are lowercase, non-empty, unique within their entry
/// - the fallback category always has an entry (possibly empty)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordDictionary {
    entries: Vec<DictionaryEntry>,
    fallback: CategoryId,

    /// Snapshot version, bumped by every effective `with_keyword` append
    #[serde(default = "initial_version")]
    version: i64,

    /// When this snapshot was produced
    #[serde(default = "Utc::now")]
    system_time: DateTime<Utc>,
}

fn initial_version() -> i64 {
    1
}

impl KeywordDictionary {
    /// Start building a dictionary with the given fallback category
    pub fn builder(fallback: impl Into<CategoryId>) -> DictionaryBuilder {
        DictionaryBuilder {
            fallback: fallback.into(),
            entries: Vec::new(),
        }
    }

    /// Load a dictionary from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read dictionary file: {:?}", path.as_ref()))?;

        let dictionary = Self::from_json(&content)?;
        info!(
            "Loaded keyword dictionary v{} ({} categories, {} keywords) from {:?}",
            dictionary.version,
            dictionary.entries.len(),
            dictionary.keyword_count(),
            path.as_ref()
        );
        Ok(dictionary)
    }

    /// Parse a dictionary from a JSON document and re-establish invariants
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: KeywordDictionary =
            serde_json::from_str(content).context("Failed to parse dictionary JSON")?;

        let mut builder = Self::builder(raw.fallback);
        for entry in raw.entries {
            builder = builder.entry(entry.category, entry.keywords);
        }
        let mut dictionary = builder.build()?;
        dictionary.version = raw.version;
        dictionary.system_time = raw.system_time;
        Ok(dictionary)
    }

    /// Save the dictionary as JSON
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_json()?;
        fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write dictionary file: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every entry's category belongs to the given closed set
    pub fn validate_against(&self, categories: &CategorySet) -> Result<()> {
        for entry in &self.entries {
            if !categories.contains(&entry.category) {
                bail!(
                    "dictionary references category '{}' which is not in the category set",
                    entry.category
                );
            }
        }
        if self.fallback != *categories.fallback() {
            bail!(
                "dictionary fallback '{}' differs from category set fallback '{}'",
                self.fallback,
                categories.fallback()
            );
        }
        Ok(())
    }

    /// Learning hook: a new snapshot with `keyword` appended to `category`.
    ///
    /// Append-only; the keyword is trimmed and case-folded first. Appending
    /// a keyword the category already has returns an unchanged clone (same
    /// version). Unknown categories are an error: learning must not widen
    /// the category enumeration.
    pub fn with_keyword(&self, category: &CategoryId, keyword: &str) -> Result<Self> {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            bail!("cannot learn an empty keyword");
        }

        let Some(index) = self.entries.iter().position(|e| e.category == *category) else {
            bail!("unknown category '{}': cannot learn keyword '{}'", category, keyword);
        };

        if self.entries[index].keywords.iter().any(|k| *k == keyword) {
            debug!("keyword '{}' already present in '{}', nothing to learn", keyword, category);
            return Ok(self.clone());
        }

        let mut next = self.clone();
        next.entries[index].keywords.push(keyword.clone());
        next.version += 1;
        next.system_time = Utc::now();
        info!("Learned keyword '{}' for category '{}' (dictionary v{})", keyword, category, next.version);
        Ok(next)
    }

    /// Keywords registered for a category, in dictionary order
    pub fn keywords(&self, category: &CategoryId) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.category == *category)
            .map(|e| e.keywords.as_slice())
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// Categories in dictionary iteration order (the tie-break order)
    pub fn categories(&self) -> impl Iterator<Item = &CategoryId> {
        self.entries.iter().map(|e| &e.category)
    }

    pub fn contains_category(&self, category: &CategoryId) -> bool {
        self.entries.iter().any(|e| e.category == *category)
    }

    pub fn fallback(&self) -> &CategoryId {
        &self.fallback
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    pub fn system_time(&self) -> DateTime<Utc> {
        self.system_time
    }

    /// Total number of keywords across all categories
    pub fn keyword_count(&self) -> usize {
        self.entries.iter().map(|e| e.keywords.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builds a `KeywordDictionary`, establishing its invariants.
pub struct DictionaryBuilder {
    fallback: CategoryId,
    entries: Vec<DictionaryEntry>,
}

impl DictionaryBuilder {
    /// Add a category with its keywords. Keywords are trimmed, case-folded
    /// and deduplicated. Keywords that are empty after trimming are
    /// silently dropped: bulk configuration data tolerates blanks, unlike
    /// `with_keyword`, where an empty keyword is an error.
    pub fn entry<I, S>(mut self, category: impl Into<CategoryId>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut folded: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword: String = keyword.into();
            let keyword = keyword.trim().to_lowercase();
            if !keyword.is_empty() && !folded.contains(&keyword) {
                folded.push(keyword);
            }
        }
        self.entries.push(DictionaryEntry {
            category: category.into(),
            keywords: folded,
        });
        self
    }

    pub fn build(self) -> Result<KeywordDictionary> {
        let DictionaryBuilder { fallback, mut entries } = self;

        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.category == entry.category) {
                bail!("duplicate dictionary entry for category '{}'", entry.category);
            }
        }

        // The fallback must always resolve, even with an empty keyword list
        if !entries.iter().any(|e| e.category == fallback) {
            entries.push(DictionaryEntry {
                category: fallback.clone(),
                keywords: Vec::new(),
            });
        }

        Ok(KeywordDictionary {
            entries,
            fallback,
            version: initial_version(),
            system_time: Utc::now(),
        })
    }
}

// ============================================================================
// DICTIONARY STORE
// ============================================================================

/// Shared handle to the "current" dictionary.
///
/// Readers take `Arc` snapshots via `current()`; `learn` builds the next
/// snapshot and swaps it in under a write lock. A snapshot already handed
/// out is never mutated.
#[derive(Clone)]
pub struct DictionaryStore {
    current: Arc<RwLock<Arc<KeywordDictionary>>>,
}

impl DictionaryStore {
    pub fn new(dictionary: KeywordDictionary) -> Self {
        DictionaryStore {
            current: Arc::new(RwLock::new(Arc::new(dictionary))),
        }
    }

    /// The current dictionary snapshot
    pub fn current(&self) -> Arc<KeywordDictionary> {
        self.current.read().unwrap().clone()
    }

    /// Append a learned keyword, publishing a new snapshot.
    /// Returns the snapshot now current.
    pub fn learn(&self, category: &CategoryId, keyword: &str) -> Result<Arc<KeywordDictionary>> {
        let mut current = self.current.write().unwrap();
        let next = Arc::new(current.with_keyword(category, keyword)?);
        *current = next.clone();
        Ok(next)
    }

    pub fn version(&self) -> i64 {
        self.current.read().unwrap().version()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dictionary() -> KeywordDictionary {
        KeywordDictionary::builder("miscellaneous")
            .entry("dining", ["커피", "Coffee", "lunch"])
            .entry("transport", ["지하철", "bus"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_folds_and_dedupes() {
        let dictionary = KeywordDictionary::builder("misc")
            .entry("dining", ["Coffee", " coffee ", "LUNCH", ""])
            .build()
            .unwrap();

        let keywords = dictionary.keywords(&CategoryId::from("dining")).unwrap();
        assert_eq!(keywords, ["coffee", "lunch"]);
    }

    #[test]
    fn test_blank_keyword_policy() {
        // Builder drops blanks from bulk data; learning a blank is an error
        let dictionary = KeywordDictionary::builder("misc")
            .entry("dining", ["coffee", "", "   "])
            .build()
            .unwrap();
        assert_eq!(dictionary.keywords(&CategoryId::from("dining")).unwrap(), ["coffee"]);
        assert!(dictionary.with_keyword(&CategoryId::from("dining"), "").is_err());
    }

    #[test]
    fn test_fallback_entry_always_present() {
        let dictionary = sample_dictionary();
        assert!(dictionary.contains_category(&CategoryId::from("miscellaneous")));
        assert_eq!(
            dictionary.keywords(&CategoryId::from("miscellaneous")).unwrap(),
            &[] as &[String]
        );
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let result = KeywordDictionary::builder("misc")
            .entry("dining", ["coffee"])
            .entry("dining", ["lunch"])
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_order_preserved() {
        let dictionary = sample_dictionary();
        let order: Vec<&str> = dictionary.categories().map(|c| c.as_str()).collect();
        assert_eq!(order, vec!["dining", "transport", "miscellaneous"]);
    }

    #[test]
    fn test_with_keyword_is_copy_on_write() {
        let original = sample_dictionary();
        let learned = original
            .with_keyword(&CategoryId::from("transport"), " KTX ")
            .unwrap();

        // New snapshot carries the folded keyword and a bumped version
        assert!(learned
            .keywords(&CategoryId::from("transport"))
            .unwrap()
            .contains(&"ktx".to_string()));
        assert_eq!(learned.version(), original.version() + 1);

        // Original snapshot untouched
        assert!(!original
            .keywords(&CategoryId::from("transport"))
            .unwrap()
            .contains(&"ktx".to_string()));
    }

    #[test]
    fn test_with_keyword_duplicate_is_noop() {
        let original = sample_dictionary();
        let unchanged = original
            .with_keyword(&CategoryId::from("dining"), "COFFEE")
            .unwrap();

        assert_eq!(unchanged.version(), original.version());
        assert_eq!(
            unchanged.keywords(&CategoryId::from("dining")).unwrap().len(),
            original.keywords(&CategoryId::from("dining")).unwrap().len()
        );
    }

    #[test]
    fn test_with_keyword_unknown_category() {
        let dictionary = sample_dictionary();
        assert!(dictionary
            .with_keyword(&CategoryId::from("no-such"), "keyword")
            .is_err());
        assert!(dictionary
            .with_keyword(&CategoryId::from("dining"), "   ")
            .is_err());
    }

    #[test]
    fn test_validate_against_category_set() {
        use crate::category::{Category, CategorySet};

        let dictionary = sample_dictionary();

        let matching = CategorySet::new(
            vec![
                Category::new("dining", "Dining"),
                Category::new("transport", "Transport"),
                Category::new("miscellaneous", "Miscellaneous"),
            ],
            "miscellaneous",
        )
        .unwrap();
        assert!(dictionary.validate_against(&matching).is_ok());

        let missing = CategorySet::new(
            vec![
                Category::new("dining", "Dining"),
                Category::new("miscellaneous", "Miscellaneous"),
            ],
            "miscellaneous",
        )
        .unwrap();
        assert!(dictionary.validate_against(&missing).is_err());
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let dictionary = sample_dictionary();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.json");
        dictionary.to_file(&path).unwrap();

        let loaded = KeywordDictionary::from_file(&path).unwrap();
        assert_eq!(loaded.version(), dictionary.version());
        assert_eq!(loaded.fallback().as_str(), "miscellaneous");
        assert_eq!(
            loaded.keywords(&CategoryId::from("dining")).unwrap(),
            dictionary.keywords(&CategoryId::from("dining")).unwrap()
        );
    }

    #[test]
    fn test_store_snapshot_isolation() {
        let store = DictionaryStore::new(sample_dictionary());

        let before = store.current();
        store.learn(&CategoryId::from("transport"), "택시비").unwrap();
        let after = store.current();

        // The snapshot taken before learning is unchanged
        assert!(!before
            .keywords(&CategoryId::from("transport"))
            .unwrap()
            .contains(&"택시비".to_string()));
        assert!(after
            .keywords(&CategoryId::from("transport"))
            .unwrap()
            .contains(&"택시비".to_string()));
        assert_eq!(after.version(), before.version() + 1);

        // Clones share state
        let clone = store.clone();
        assert_eq!(clone.version(), store.version());
    }
}
