// 🎯 Category Classifier - Keyword scoring over transaction memos
// Pure function of (memo, dictionary snapshot, config): no I/O, no state,
// safe to call concurrently. Malformed input degrades to the fallback
// category, never to an error.

use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::category::CategoryId;
use crate::dictionary::KeywordDictionary;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Scoring weights and the minimum winning score.
///
/// Two tunings are in active use (10/5 with threshold 5, 20/2 with
/// threshold 1), so all three values are configuration rather than
/// constants. Defaults are the lenient variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Points per keyword found as a whitespace-delimited token
    #[serde(default = "default_word_match_weight")]
    pub word_match_weight: u32,

    /// Points per keyword found only as a plain substring
    #[serde(default = "default_substring_weight")]
    pub substring_weight: u32,

    /// Winning scores below this return the fallback category
    #[serde(default = "default_min_score")]
    pub min_score: u32,
}

fn default_word_match_weight() -> u32 {
    20
}

fn default_substring_weight() -> u32 {
    2
}

fn default_min_score() -> u32 {
    1
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            word_match_weight: default_word_match_weight(),
            substring_weight: default_substring_weight(),
            min_score: default_min_score(),
        }
    }
}

impl ClassifierConfig {
    /// Stricter preset: a single substring hit is not enough to beat the
    /// fallback, a word-boundary hit is
    pub fn strict() -> Self {
        ClassifierConfig {
            min_score: 5,
            ..Default::default()
        }
    }
}

// ============================================================================
// SCORES
// ============================================================================

/// One category's score for a memo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryScore {
    pub category: CategoryId,
    pub score: u32,
}

/// Per-category scores in dictionary iteration order.
///
/// `best()` is the selection rule `suggest_category` applies before its
/// threshold check: the FIRST entry holding the maximum score.
#[derive(Debug, Clone)]
pub struct CategoryScores {
    scores: Vec<CategoryScore>,
}

impl CategoryScores {
    pub fn get(&self, category: &CategoryId) -> Option<u32> {
        self.scores
            .iter()
            .find(|s| s.category == *category)
            .map(|s| s.score)
    }

    /// First entry (in dictionary order) with the maximum score
    pub fn best(&self) -> Option<&CategoryScore> {
        let mut best: Option<&CategoryScore> = None;
        for score in &self.scores {
            match best {
                Some(current) if score.score <= current.score => {}
                _ => best = Some(score),
            }
        }
        best
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryScore> {
        self.scores.iter()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl IntoIterator for CategoryScores {
    type Item = CategoryScore;
    type IntoIter = std::vec::IntoIter<CategoryScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.into_iter()
    }
}

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Maps a free-text memo to the most likely spending category.
///
/// The dictionary is injected at construction and treated as an immutable
/// snapshot; callers that learn keywords build a new classifier from the
/// new snapshot (see `DictionaryStore`).
pub struct Classifier {
    dictionary: Arc<KeywordDictionary>,
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(dictionary: Arc<KeywordDictionary>, config: ClassifierConfig) -> Self {
        Classifier { dictionary, config }
    }

    /// Built-in Korean/English dictionary with the lenient default config
    pub fn with_defaults() -> Self {
        Classifier::new(
            Arc::new(crate::defaults::default_dictionary()),
            ClassifierConfig::default(),
        )
    }

    pub fn dictionary(&self) -> &KeywordDictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Suggest the best-matching category for a memo.
    ///
    /// Total function: empty or all-whitespace memos, and memos matching
    /// nothing strongly enough, return the fallback category.
    pub fn suggest_category(&self, memo: &str) -> CategoryId {
        // Unusable memos skip scoring and selection entirely; the
        // threshold never applies to them
        if normalize(memo).is_empty() {
            debug!("suggest_category({:?}) -> {} (empty memo)", memo, self.dictionary.fallback());
            return self.dictionary.fallback().clone();
        }

        let scores = self.score_categories(memo);

        let suggestion = match scores.best() {
            Some(best) if best.score >= self.config.min_score => best.category.clone(),
            _ => self.dictionary.fallback().clone(),
        };
        debug!("suggest_category({:?}) -> {}", memo, suggestion);
        suggestion
    }

    /// `suggest_category` for possibly-absent input; `None` maps to the
    /// fallback category
    pub fn suggest_category_opt(&self, memo: Option<&str>) -> CategoryId {
        match memo {
            Some(memo) => self.suggest_category(memo),
            None => self.dictionary.fallback().clone(),
        }
    }

    /// Score every category for a memo, in dictionary order.
    ///
    /// Per keyword: a word-boundary hit scores `word_match_weight`, else a
    /// substring hit scores `substring_weight`, else nothing; distinct
    /// keywords accumulate additively.
    pub fn score_categories(&self, memo: &str) -> CategoryScores {
        let normalized = normalize(memo);

        let scores = self
            .dictionary
            .entries()
            .iter()
            .map(|entry| {
                let mut score = 0u32;
                if !normalized.is_empty() {
                    for keyword in &entry.keywords {
                        if has_word_boundary_match(&normalized, keyword) {
                            score += self.config.word_match_weight;
                        } else if normalized.contains(keyword.as_str()) {
                            score += self.config.substring_weight;
                        }
                    }
                }
                CategoryScore {
                    category: entry.category.clone(),
                    score,
                }
            })
            .collect();

        CategoryScores { scores }
    }

    /// Keywords of `category` present anywhere in the normalized memo
    /// (substring, not word-boundary restricted), in dictionary order.
    /// For explainability, not scoring.
    pub fn matched_keywords(&self, memo: &str, category: &CategoryId) -> Vec<String> {
        let normalized = normalize(memo);
        if normalized.is_empty() {
            return Vec::new();
        }

        let Some(keywords) = self.dictionary.keywords(category) else {
            return Vec::new();
        };

        keywords
            .iter()
            .filter(|keyword| normalized.contains(keyword.as_str()))
            .cloned()
            .collect()
    }
}

// ============================================================================
// MATCHING
// ============================================================================

/// Trim and case-fold; deliberately nothing else (no stemming, punctuation
/// stripping or Unicode normalization)
fn normalize(memo: &str) -> String {
    memo.trim().to_lowercase()
}

/// True if `keyword` occurs in `text` delimited by whitespace or the string
/// ends on both sides.
///
/// This is a whitespace-token test, not linguistic tokenization: for
/// unspaced scripts it is a known approximation, kept on purpose so that
/// mixed Korean/English memos match the shipped keyword tables predictably.
fn has_word_boundary_match(text: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }

    for (start, _) in text.match_indices(keyword) {
        let before_ok = text[..start]
            .chars()
            .next_back()
            .map_or(true, char::is_whitespace);
        let after_ok = text[start + keyword.len()..]
            .chars()
            .next()
            .map_or(true, char::is_whitespace);
        if before_ok && after_ok {
            return true;
        }
    }
    false
}

// ============================================================================
// TESTS
// ============================================================================
