//! The morphology adapter.
//!
//! Lemmatization and inflection are oracles: the adapter does not know how
//! they work, only that they may not know a word. Whatever the oracles say,
//! [`Morphology`] always hands back a usable, non-empty word.

use std::fmt;
use std::sync::Arc;

use crate::english::{EnglishInflector, EnglishLemmatizer};

/// Reduces a word to its dictionary base form.
pub trait Lemmatizer: Send + Sync {
    /// Returns `None` when the word is unknown to the lemmatizer.
    fn lemmatize(&self, word: &str) -> Option<String>;
}

/// Converts nouns between singular and plural.
pub trait Inflector: Send + Sync {
    /// The plural of a singular noun, or `None` if it cannot be formed.
    fn pluralize(&self, word: &str) -> Option<String>;

    /// The singular of a plural noun, or `None` when the word is not a
    /// plural the inflector recognizes.
    fn singularize(&self, word: &str) -> Option<String>;
}

/// Normalizes, pluralizes and singularizes words through injected oracles.
#[derive(Clone)]
pub struct Morphology {
    lemmatizer: Arc<dyn Lemmatizer>,
    inflector: Arc<dyn Inflector>,
}

impl Morphology {
    pub fn new(
        lemmatizer: impl Lemmatizer + 'static,
        inflector: impl Inflector + 'static,
    ) -> Self {
        Self {
            lemmatizer: Arc::new(lemmatizer),
            inflector: Arc::new(inflector),
        }
    }

    /// Morphology backed by the bundled rule-based English oracles.
    pub fn english() -> Self {
        Self::new(EnglishLemmatizer, EnglishInflector)
    }

    /// The base form of `word`, or `word` itself if the lemmatizer gives up.
    pub fn normalize(&self, word: &str) -> String {
        non_empty(self.lemmatizer.lemmatize(word)).unwrap_or_else(|| word.to_string())
    }

    /// The plural of `word`, or `word` itself if the inflector gives up.
    pub fn pluralize(&self, word: &str) -> String {
        non_empty(self.inflector.pluralize(word)).unwrap_or_else(|| word.to_string())
    }

    /// The singular of `word`, if the inflector recognizes it as a plural.
    pub fn singularize(&self, word: &str) -> Option<String> {
        non_empty(self.inflector.singularize(word))
    }
}

impl Default for Morphology {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Debug for Morphology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Morphology").finish_non_exhaustive()
    }
}

fn non_empty(word: Option<String>) -> Option<String> {
    word.filter(|w| !w.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Clueless;

    impl Lemmatizer for Clueless {
        fn lemmatize(&self, _word: &str) -> Option<String> {
            None
        }
    }

    impl Inflector for Clueless {
        fn pluralize(&self, _word: &str) -> Option<String> {
            Some(String::new())
        }

        fn singularize(&self, _word: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn oracle_failures_return_the_input() {
        let morphology = Morphology::new(Clueless, Clueless);
        assert_eq!(morphology.normalize("cats"), "cats");
        assert_eq!(morphology.pluralize("cat"), "cat");
        assert_eq!(morphology.singularize("cats"), None);
    }

    #[test]
    fn english_morphology_round_trips_regular_nouns() {
        let morphology = Morphology::english();
        assert_eq!(morphology.normalize("cats"), "cat");
        assert_eq!(morphology.pluralize("hat"), "hats");
        assert_eq!(morphology.singularize("stairs").as_deref(), Some("stair"));
    }
}
