//! Noun extraction.
//!
//! The extractor walks the tagger's output and turns every noun token into a
//! [`Noun`]: the base form used to look up rhymes, the grammatical number
//! used to re-inflect the replacement, and the span of the original surface
//! word so it can be replaced in place.
//!
//! Plural nouns take one of two routes. A plural the inflector can reduce to a
//! different singular (`stairs` → `stair`) is [`Number::Plural`] and is looked
//! up by its lemma. A plural with no distinct singular (`sheep`, `trousers`)
//! is [`Number::IrregularPlural`] and is looked up by its surface form.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use tracing::trace;

use crate::morphology::Morphology;
use crate::tagger::{HeuristicTagger, Tagger};

/// The grammatical number of an extracted noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Number {
    #[default]
    Singular,
    /// A regular plural with a distinct singular form.
    Plural,
    /// A plural with no singular form the inflector could find.
    IrregularPlural,
}

impl Number {
    /// Whether a replacement for this noun must be pluralized.
    pub fn is_plural(self) -> bool {
        !matches!(self, Number::Singular)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Number::Singular => "singular",
            Number::Plural => "plural",
            Number::IrregularPlural => "irregular plural",
        })
    }
}

/// A noun occurrence found in the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Noun {
    /// The lemmatized root used as the rhyme lookup key. Never empty.
    pub base_form: String,
    /// Whether the occurrence was singular or plural.
    pub number: Number,
    /// The word exactly as it appeared in the text.
    pub surface: String,
    /// Byte range of `surface` within the text it was extracted from.
    pub span: Range<usize>,
}

impl fmt::Display for Noun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} ({}, base {:?})",
            self.surface, self.number, self.base_form
        )
    }
}

/// Finds the nouns of a text with an injected tagger and morphology.
#[derive(Clone)]
pub struct NounExtractor {
    tagger: Arc<dyn Tagger>,
    morphology: Morphology,
}

impl NounExtractor {
    pub fn new(tagger: impl Tagger + 'static, morphology: Morphology) -> Self {
        Self {
            tagger: Arc::new(tagger),
            morphology,
        }
    }

    /// An extractor using the bundled heuristic tagger and English oracles.
    pub fn english() -> Self {
        Self::new(HeuristicTagger::new(), Morphology::english())
    }

    pub fn morphology(&self) -> &Morphology {
        &self.morphology
    }

    /// Extract every noun occurrence in `text`, in text order.
    ///
    /// Duplicates are kept: each occurrence is substituted independently.
    pub fn extract(&self, text: &str) -> Vec<Noun> {
        let mut nouns = Vec::new();

        for tagged in self.tagger.tag(text) {
            if !tagged.tag.is_noun() {
                continue;
            }

            let surface = tagged.token.original;
            let span = tagged.token.span;

            let (base_form, number) = if tagged.tag.is_plural_noun() {
                match self.morphology.singularize(&surface) {
                    Some(singular) if singular != surface => {
                        (self.morphology.normalize(&singular), Number::Plural)
                    }
                    _ => (surface.clone(), Number::IrregularPlural),
                }
            } else {
                (self.morphology.normalize(&surface), Number::Singular)
            };

            if base_form.trim().is_empty() {
                continue;
            }

            let noun = Noun {
                base_form,
                number,
                surface,
                span,
            };
            trace!(%noun, tag = %tagged.tag, "Extracted noun");
            nouns.push(noun);
        }

        nouns
    }
}

impl Default for NounExtractor {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Debug for NounExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NounExtractor")
            .field("morphology", &self.morphology)
            .finish_non_exhaustive()
    }
}
