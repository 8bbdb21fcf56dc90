use std::fmt;
use std::sync::Arc;

use cockney_nlp::{Noun, NounExtractor};
use tracing::{debug, info, warn};

use crate::{
    BigramTable, CockneyError, Collocation, ReplacementStyle, RhymeSource, SelectionPolicy,
    Selector, Substituter, Substitution, apply_all, exclude_self_rhymes, fallback_phrases,
};

/// Options for a [`Rhymer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RhymerOptions {
    pub policy: SelectionPolicy,
    pub style: ReplacementStyle,
    /// Seed for [`SelectionPolicy::Random`]; unseeded runs differ each time.
    pub seed: Option<u64>,
}

impl RhymerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_style(mut self, style: ReplacementStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Why a noun was left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoCandidate {
    /// The rhyme source had nothing once self-rhymes were removed.
    NoRhymes,
    /// No rhyme was the head of a corpus collocation, and none was a phrase.
    NoCollocation,
}

impl fmt::Display for NoCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoCandidate::NoRhymes => write!(f, "no rhymes"),
            NoCandidate::NoCollocation => write!(f, "no collocation"),
        }
    }
}

/// What happened to one noun occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NounOutcome {
    Replaced {
        noun: Noun,
        collocation: Collocation,
        replacement: String,
    },
    Kept {
        noun: Noun,
        reason: NoCandidate,
    },
}

impl NounOutcome {
    pub fn noun(&self) -> &Noun {
        match self {
            NounOutcome::Replaced { noun, .. } | NounOutcome::Kept { noun, .. } => noun,
        }
    }

    pub fn is_replaced(&self) -> bool {
        matches!(self, NounOutcome::Replaced { .. })
    }
}

impl fmt::Display for NounOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NounOutcome::Replaced {
                noun,
                collocation,
                replacement,
            } => write!(
                f,
                "{} -> {} (from \"{}\", freq {})",
                noun.surface,
                replacement,
                collocation.phrase(),
                collocation.frequency
            ),
            NounOutcome::Kept { noun, reason } => write!(f, "{} kept: {}", noun.surface, reason),
        }
    }
}

/// The rewritten text along with a record of every noun that was considered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformation {
    pub text: String,
    pub outcomes: Vec<NounOutcome>,
}

impl Transformation {
    pub fn replaced(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_replaced()).count()
    }

    pub fn kept(&self) -> usize {
        self.outcomes.len() - self.replaced()
    }
}

/// Rewrites text as rhyming slang.
///
/// Nouns are handled one at a time in text order: each lookup is awaited
/// before the next noun starts. The first [`CockneyError`] aborts the whole
/// transformation and no text is produced.
pub struct Rhymer<S> {
    source: S,
    corpus: Arc<BigramTable>,
    extractor: NounExtractor,
    selector: Selector,
    substituter: Substituter,
}

impl<S> Rhymer<S>
where
    S: RhymeSource,
{
    /// A rhymer using the bundled English extractor.
    pub fn new(source: S, corpus: Arc<BigramTable>, options: RhymerOptions) -> Self {
        Self::with_extractor(source, corpus, NounExtractor::english(), options)
    }

    /// A rhymer with a custom noun extractor. Replacements are inflected with
    /// the extractor's morphology.
    pub fn with_extractor(
        source: S,
        corpus: Arc<BigramTable>,
        extractor: NounExtractor,
        options: RhymerOptions,
    ) -> Self {
        let selector = match options.seed {
            Some(seed) => Selector::seeded(options.policy, seed),
            None => Selector::new(options.policy),
        };
        let substituter = Substituter::new(extractor.morphology().clone(), options.style);

        Self {
            source,
            corpus,
            extractor,
            selector,
            substituter,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn corpus(&self) -> &BigramTable {
        &self.corpus
    }

    /// Rank the replacement collocations for one noun, most idiomatic first.
    ///
    /// Corpus collocations win; multi-word rhymes are used only when the
    /// corpus has none.
    pub async fn candidates(&self, noun: &Noun) -> Result<Vec<Collocation>, NounLookup> {
        let rhymes = self
            .source
            .fetch_rhymes(&noun.base_form)
            .await
            .map_err(NounLookup::Failed)?;
        let rhymes = exclude_self_rhymes(rhymes, &noun.base_form);

        if rhymes.is_empty() {
            return Err(NounLookup::Empty(NoCandidate::NoRhymes));
        }

        let ranked = self.corpus.score(&rhymes, &noun.base_form);
        if !ranked.is_empty() {
            return Ok(ranked);
        }

        let fallback = fallback_phrases(&rhymes);
        if fallback.is_empty() {
            return Err(NounLookup::Empty(NoCandidate::NoCollocation));
        }

        debug!(noun = %noun.base_form, count = fallback.len(), "Using rhyming phrases outside the corpus");
        Ok(fallback)
    }

    /// Decide what happens to one noun.
    pub async fn rhyme(&mut self, noun: Noun) -> Result<NounOutcome, CockneyError> {
        let ranked = match self.candidates(&noun).await {
            Ok(ranked) => ranked,
            Err(NounLookup::Failed(error)) => return Err(error),
            Err(NounLookup::Empty(reason)) => {
                warn!(noun = %noun.surface, %reason, "Leaving noun unchanged");
                return Ok(NounOutcome::Kept { noun, reason });
            }
        };

        let Some(collocation) = self.selector.select(&ranked).cloned() else {
            return Ok(NounOutcome::Kept {
                noun,
                reason: NoCandidate::NoCollocation,
            });
        };

        let replacement = self.substituter.replacement(&noun, &collocation);
        info!(
            noun = %noun.surface,
            replacement = %replacement,
            phrase = %collocation.phrase(),
            "Substituting"
        );

        Ok(NounOutcome::Replaced {
            noun,
            collocation,
            replacement,
        })
    }

    /// Rewrite every noun of `text` that has a rhyming replacement.
    pub async fn transform(&mut self, text: &str) -> Result<Transformation, CockneyError> {
        let nouns = self.extractor.extract(text);
        debug!(count = nouns.len(), "Extracted nouns");

        let mut outcomes = Vec::with_capacity(nouns.len());
        for noun in nouns {
            outcomes.push(self.rhyme(noun).await?);
        }

        let substitutions = outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                NounOutcome::Replaced {
                    noun, replacement, ..
                } => Some(Substitution {
                    span: noun.span.clone(),
                    replacement: replacement.clone(),
                }),
                NounOutcome::Kept { .. } => None,
            })
            .collect();

        Ok(Transformation {
            text: apply_all(text, substitutions),
            outcomes,
        })
    }
}

impl<S> fmt::Debug for Rhymer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rhymer")
            .field("corpus", &self.corpus.len())
            .field("extractor", &self.extractor)
            .field("selector", &self.selector.policy())
            .field("style", &self.substituter.style())
            .finish_non_exhaustive()
    }
}

/// Why [`Rhymer::candidates`] has nothing to offer.
#[derive(Debug)]
pub enum NounLookup {
    /// The noun has no usable rhymes.
    Empty(NoCandidate),
    /// The rhyme source failed.
    Failed(CockneyError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticRhymeSource;
    use cockney_nlp::Number;
    use pretty_assertions::assert_eq;

    fn corpus() -> Arc<BigramTable> {
        Arc::new(BigramTable::from_entries([
            Collocation::new("hat", "top", 88),
            Collocation::new("mat", "door", 61),
        ]))
    }

    fn noun(base_form: &str) -> Noun {
        Noun {
            base_form: base_form.into(),
            number: Number::Singular,
            surface: base_form.into(),
            span: 0..base_form.len(),
        }
    }

    #[tokio::test]
    async fn corpus_matches_come_before_phrases() -> anyhow::Result<()> {
        let source = StaticRhymeSource::new().with("cat", ["tit for tat", "mat", "hat"]);
        let rhymer = Rhymer::new(source, corpus(), RhymerOptions::new());

        let ranked = rhymer.candidates(&noun("cat")).await;
        let ranked = match ranked {
            Ok(ranked) => ranked,
            Err(other) => anyhow::bail!("expected candidates, got {other:?}"),
        };
        assert_eq!(ranked[0], Collocation::new("hat", "top", 88));
        assert_eq!(ranked.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn phrases_are_the_last_resort() -> anyhow::Result<()> {
        let source = StaticRhymeSource::new().with("cat", ["tit for tat", "splat"]);
        let mut rhymer = Rhymer::new(source, corpus(), RhymerOptions::new());

        let outcome = rhymer.rhyme(noun("cat")).await?;
        assert_eq!(
            outcome,
            NounOutcome::Replaced {
                noun: noun("cat"),
                collocation: Collocation::new("tat", "tit for", 0),
                replacement: "tat".into(),
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn nouns_without_rhymes_are_kept() -> anyhow::Result<()> {
        let source = StaticRhymeSource::new().with("ball", ["football"]);
        let mut rhymer = Rhymer::new(source, corpus(), RhymerOptions::new());

        assert_eq!(
            rhymer.rhyme(noun("ball")).await?,
            NounOutcome::Kept {
                noun: noun("ball"),
                reason: NoCandidate::NoRhymes,
            }
        );
        assert_eq!(
            rhymer.rhyme(noun("orange")).await?,
            NounOutcome::Kept {
                noun: noun("orange"),
                reason: NoCandidate::NoRhymes,
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn single_word_rhymes_outside_the_corpus_are_kept() -> anyhow::Result<()> {
        let source = StaticRhymeSource::new().with("cat", ["splat", "sprat"]);
        let mut rhymer = Rhymer::new(source, corpus(), RhymerOptions::new());

        assert_eq!(
            rhymer.rhyme(noun("cat")).await?,
            NounOutcome::Kept {
                noun: noun("cat"),
                reason: NoCandidate::NoCollocation,
            }
        );
        Ok(())
    }

    #[test]
    fn options_build_up() {
        let options = RhymerOptions::new()
            .with_policy(SelectionPolicy::Random)
            .with_style(ReplacementStyle::Phrase)
            .with_seed(9);

        assert_eq!(options.policy, SelectionPolicy::Random);
        assert_eq!(options.style, ReplacementStyle::Phrase);
        assert_eq!(options.seed, Some(9));
    }
}
