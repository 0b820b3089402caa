// 💸 spendtag - Memo-based spending category auto-classifier
// Keyword-scoring text classifier for personal finance trackers: a
// free-text transaction memo goes in, a category id comes out. Pure,
// synchronous, total - unusable input degrades to the fallback category.

pub mod category;
pub mod classifier;
pub mod defaults;
pub mod dictionary;

// Re-export commonly used types
pub use category::{Category, CategoryId, CategorySet};
pub use classifier::{CategoryScore, CategoryScores, Classifier, ClassifierConfig};
pub use defaults::{default_category_set, default_dictionary, FALLBACK_CATEGORY};
pub use dictionary::{DictionaryBuilder, DictionaryEntry, DictionaryStore, KeywordDictionary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
