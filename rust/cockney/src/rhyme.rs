//! Rhyme sources.
//!
//! A [`RhymeSource`] answers one question: which words and phrases rhyme with
//! this base form? Candidates come back in the source's own relevance order
//! and are never re-sorted here. A source that cannot answer fails with
//! [`CockneyError::SourceUnavailable`], which aborts the whole run.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::CockneyError;

/// A word or space-separated phrase that rhymes with a noun.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RhymeCandidate(String);

impl RhymeCandidate {
    pub fn new(text: impl Into<String>) -> Self {
        RhymeCandidate(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the candidate is a multi-word phrase such as `fred astaire`.
    pub fn is_phrase(&self) -> bool {
        self.0.trim().contains(' ')
    }

    /// Split a phrase into `(modifier, head)` at its last space. The head is
    /// the final, rhyming word.
    pub fn split_head(&self) -> Option<(&str, &str)> {
        self.0
            .trim()
            .rsplit_once(' ')
            .map(|(modifier, head)| (modifier.trim_end(), head))
    }
}

impl fmt::Display for RhymeCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RhymeCandidate {
    fn from(value: &str) -> Self {
        RhymeCandidate::new(value)
    }
}

impl From<String> for RhymeCandidate {
    fn from(value: String) -> Self {
        RhymeCandidate(value)
    }
}

/// Something that can list the rhymes of a word.
#[async_trait]
pub trait RhymeSource: Send + Sync {
    /// Rhymes for `base_form`, in the source's relevance order.
    async fn fetch_rhymes(&self, base_form: &str) -> Result<Vec<RhymeCandidate>, CockneyError>;
}

#[async_trait]
impl<T> RhymeSource for Box<T>
where
    T: RhymeSource + ?Sized,
{
    async fn fetch_rhymes(&self, base_form: &str) -> Result<Vec<RhymeCandidate>, CockneyError> {
        (**self).fetch_rhymes(base_form).await
    }
}

#[async_trait]
impl<T> RhymeSource for Arc<T>
where
    T: RhymeSource + ?Sized,
{
    async fn fetch_rhymes(&self, base_form: &str) -> Result<Vec<RhymeCandidate>, CockneyError> {
        (**self).fetch_rhymes(base_form).await
    }
}

/// The shortest word that can stand in front of a noun to form a compound
/// such as `foot|ball`.
const MIN_COMPOUND_PREFIX: usize = 3;

/// Drop candidates that merely repeat the noun: the noun itself (`ball` for
/// `ball`) or a compound built on it (`football`, `snow ball`). Such pairs are
/// trivial self-rhymes, not slang.
///
/// Each word of a candidate is checked. A word is a self-rhyme when it equals
/// the noun, or when one of the two ends with the other behind at least
/// three letters. Shorter prefixes are just spelling, so
/// `Astaire` stays a rhyme for `stair`.
///
/// The comparison ignores case; the surviving candidates keep their order.
pub fn exclude_self_rhymes(
    candidates: Vec<RhymeCandidate>,
    base_form: &str,
) -> Vec<RhymeCandidate> {
    let noun = base_form.to_lowercase();

    candidates
        .into_iter()
        .filter(|candidate| {
            let rhyme = candidate.as_str().to_lowercase();
            let trivial = rhyme
                .split_whitespace()
                .any(|word| is_self_rhyme(word, &noun));
            if trivial {
                debug!(rhyme = %candidate, noun = %base_form, "Excluding self-rhyme");
            }
            !trivial
        })
        .collect()
}

fn is_self_rhyme(word: &str, noun: &str) -> bool {
    word == noun || is_compound_of(word, noun) || is_compound_of(noun, word)
}

/// Whether `word` is `stem` with a word of its own in front.
fn is_compound_of(word: &str, stem: &str) -> bool {
    !stem.is_empty()
        && word
            .strip_suffix(stem)
            .is_some_and(|prefix| prefix.chars().count() >= MIN_COMPOUND_PREFIX)
}

/// An offline rhyme source backed by a fixed word → rhymes table.
///
/// Lookups ignore case. Words missing from the table have no rhymes.
#[derive(Debug, Clone, Default)]
pub struct StaticRhymeSource {
    rhymes: HashMap<String, Vec<RhymeCandidate>>,
}

impl StaticRhymeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the rhymes for `word`.
    pub fn with<I, R>(mut self, word: &str, rhymes: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RhymeCandidate>,
    {
        self.rhymes.insert(
            word.to_lowercase(),
            rhymes.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Load a table from a JSON object mapping words to arrays of rhymes:
    ///
    /// ```json
    /// { "stair": ["fred astaire", "pear", "chair"] }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CockneyError> {
        let table: HashMap<String, Vec<String>> = serde_json::from_str(json)?;

        Ok(table
            .into_iter()
            .fold(Self::new(), |source, (word, rhymes)| {
                source.with(&word, rhymes)
            }))
    }

    pub fn len(&self) -> usize {
        self.rhymes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rhymes.is_empty()
    }
}

#[async_trait]
impl RhymeSource for StaticRhymeSource {
    async fn fetch_rhymes(&self, base_form: &str) -> Result<Vec<RhymeCandidate>, CockneyError> {
        Ok(self
            .rhymes
            .get(&base_form.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }
}

/// Remembers the answers of another source for the rest of the run.
///
/// Nouns that share a base form are then looked up once. Failures are not
/// remembered.
pub struct Memoized<S> {
    inner: S,
    cache: Mutex<HashMap<String, Vec<RhymeCandidate>>>,
}

impl<S> Memoized<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[async_trait]
impl<S> RhymeSource for Memoized<S>
where
    S: RhymeSource,
{
    async fn fetch_rhymes(&self, base_form: &str) -> Result<Vec<RhymeCandidate>, CockneyError> {
        let key = base_form.to_lowercase();

        if let Some(rhymes) = self.cache.lock().await.get(&key) {
            debug!(word = %base_form, "Using remembered rhymes");
            return Ok(rhymes.clone());
        }

        let rhymes = self.inner.fetch_rhymes(base_form).await?;
        self.cache.lock().await.insert(key, rhymes.clone());
        Ok(rhymes)
    }
}
