//! Number-aware substitution of replacements into text.
//!
//! Every replacement is applied at the byte span the noun was found at in the
//! original text. A batch is written into a fresh string built from the
//! original, so a replacement can never be matched or rewritten by a later
//! one.

use std::ops::Range;

use cockney_nlp::{Morphology, Noun};
use tracing::debug;

use crate::Collocation;

/// What part of a collocation is written in place of the noun.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReplacementStyle {
    /// Only the rhyming head word: `stairs` → `Astaires`.
    #[default]
    Head,
    /// The whole two-word phrase: `stairs` → `Fred Astaires`.
    Phrase,
}

/// One planned replacement of a span of the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub span: Range<usize>,
    pub replacement: String,
}

/// Turns chosen collocations into inflected replacement text.
#[derive(Debug, Clone, Default)]
pub struct Substituter {
    morphology: Morphology,
    style: ReplacementStyle,
}

impl Substituter {
    pub fn new(morphology: Morphology, style: ReplacementStyle) -> Self {
        Self { morphology, style }
    }

    pub fn style(&self) -> ReplacementStyle {
        self.style
    }

    /// The text that should stand in for `noun`.
    ///
    /// The head is pluralized when the noun was plural; with
    /// [`ReplacementStyle::Phrase`] the modifier is kept in front of it. A
    /// noun written with a leading capital gets one on its replacement too.
    pub fn replacement(&self, noun: &Noun, collocation: &Collocation) -> String {
        let head = if noun.number.is_plural() {
            self.morphology.pluralize(&collocation.head)
        } else {
            collocation.head.clone()
        };

        let replacement = match self.style {
            ReplacementStyle::Phrase if !collocation.modifier.is_empty() => {
                format!("{} {}", collocation.modifier, head)
            }
            _ => head,
        };

        if starts_uppercase(&noun.surface) {
            capitalize(&replacement)
        } else {
            replacement
        }
    }

    /// Plan the replacement of `noun` by `collocation`.
    pub fn substitution(&self, noun: &Noun, collocation: &Collocation) -> Substitution {
        Substitution {
            span: noun.span.clone(),
            replacement: self.replacement(noun, collocation),
        }
    }

    /// Replace the single occurrence of `noun` in `text`.
    ///
    /// `text` must be the text `noun` was extracted from.
    pub fn apply(&self, text: &str, noun: &Noun, collocation: &Collocation) -> String {
        apply_all(text, vec![self.substitution(noun, collocation)])
    }
}

/// Apply a batch of substitutions to the text their spans were taken from.
///
/// Substitutions are applied in span order. One that overlaps an earlier
/// substitution, or whose span is not a valid range of `text`, is skipped.
pub fn apply_all(text: &str, mut substitutions: Vec<Substitution>) -> String {
    substitutions.sort_by_key(|substitution| substitution.span.start);

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;

    for Substitution { span, replacement } in substitutions {
        if span.start < cursor || text.get(span.clone()).is_none() {
            debug!(?span, "Skipping substitution that does not fit the text");
            continue;
        }

        output.push_str(&text[cursor..span.start]);
        output.push_str(&replacement);
        cursor = span.end;
    }

    output.push_str(&text[cursor..]);
    output
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => first.to_uppercase().chain(chars).collect(),
        _ => word.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cockney_nlp::Number;
    use pretty_assertions::assert_eq;

    fn noun(text: &str, surface: &str, base_form: &str, number: Number) -> Noun {
        let start = text.find(surface).unwrap_or_default();
        Noun {
            base_form: base_form.into(),
            number,
            surface: surface.into(),
            span: start..start + surface.len(),
        }
    }

    #[test]
    fn plural_nouns_get_plural_replacements() {
        let text = "the cats sat";
        let cats = noun(text, "cats", "cat", Number::Plural);

        let output = Substituter::default().apply(text, &cats, &Collocation::new("hat", "top", 88));
        assert_eq!(output, "the hats sat");
    }

    #[test]
    fn singular_nouns_keep_the_head_as_is() {
        let text = "a cat sat";
        let cat = noun(text, "cat", "cat", Number::Singular);

        let output = Substituter::default().apply(text, &cat, &Collocation::new("hat", "top", 88));
        assert_eq!(output, "a hat sat");
    }

    #[test]
    fn irregular_plurals_are_replaced_by_surface() {
        let text = "count the sheep";
        let sheep = noun(text, "sheep", "sheep", Number::IrregularPlural);

        let output =
            Substituter::default().apply(text, &sheep, &Collocation::new("jeep", "army", 3));
        assert_eq!(output, "count the jeeps");
    }

    #[test]
    fn phrase_style_keeps_the_modifier() {
        let text = "mind the stairs";
        let stairs = noun(text, "stairs", "stair", Number::Plural);
        let substituter = Substituter::new(Morphology::english(), ReplacementStyle::Phrase);

        let output = substituter.apply(text, &stairs, &Collocation::new("Astaire", "Fred", 37));
        assert_eq!(output, "mind the Fred Astaires");
    }

    #[test]
    fn capitals_carry_over_to_the_replacement() {
        let text = "Cats are fine";
        let cats = noun(text, "Cats", "cat", Number::Plural);

        let output = Substituter::default().apply(text, &cats, &Collocation::new("hat", "top", 88));
        assert_eq!(output, "Hats are fine");
    }

    #[test]
    fn only_the_recorded_occurrence_is_replaced() {
        let text = "cat and cat";
        let second = Noun {
            base_form: "cat".into(),
            number: Number::Singular,
            surface: "cat".into(),
            span: 8..11,
        };

        let output =
            Substituter::default().apply(text, &second, &Collocation::new("hat", "top", 88));
        assert_eq!(output, "cat and hat");
    }

    #[test]
    fn later_replacements_never_see_earlier_ones() {
        // The first replacement introduces "bear", the second noun's surface.
        let text = "pear bear";
        let output = apply_all(
            text,
            vec![
                Substitution {
                    span: 5..9,
                    replacement: "chair".into(),
                },
                Substitution {
                    span: 0..4,
                    replacement: "bear".into(),
                },
            ],
        );
        assert_eq!(output, "bear chair");
    }

    #[test]
    fn overlapping_and_invalid_spans_are_skipped() {
        let text = "one two";
        let output = apply_all(
            text,
            vec![
                Substitution {
                    span: 0..3,
                    replacement: "won".into(),
                },
                Substitution {
                    span: 2..5,
                    replacement: "x".into(),
                },
                Substitution {
                    span: 4..40,
                    replacement: "y".into(),
                },
            ],
        );
        assert_eq!(output, "won two");
    }
}
