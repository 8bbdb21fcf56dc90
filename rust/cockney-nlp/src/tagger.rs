//! Part-of-speech tagging.
//!
//! The rhymer treats tagging as an oracle behind the [`Tagger`] trait. The
//! bundled [`HeuristicTagger`] is a small rule-based tagger that is good
//! enough to find the nouns in conversational English; callers with a real
//! statistical tagger can implement the trait and map its Penn Treebank tags
//! through [`PosTag::from_str`].

use std::fmt;
use std::str::FromStr;

use crate::token::{Token, TokenKind, tokenize};

/// A coarse part-of-speech tag, named after the Penn Treebank tag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// `NN`: common noun, singular or mass.
    Noun,
    /// `NNS`: common noun, plural.
    PluralNoun,
    /// `NNP`: proper noun, singular.
    ProperNoun,
    /// `NNPS`: proper noun, plural.
    ProperPluralNoun,
    /// `DT`, `PDT`, `PRP$`, `WDT`
    Determiner,
    /// `PRP`, `WP`, `EX`
    Pronoun,
    /// `IN`, `TO`
    Preposition,
    /// `CC`
    Conjunction,
    /// `VB*`, `MD`
    Verb,
    /// `JJ*`
    Adjective,
    /// `RB*`
    Adverb,
    /// `CD`
    Number,
    /// Any punctuation tag.
    Punctuation,
    /// Anything else (`UH`, `FW`, `SYM`, ...).
    Other,
}

impl PosTag {
    /// Whether the tag is any of the four noun categories.
    pub fn is_noun(self) -> bool {
        matches!(
            self,
            PosTag::Noun | PosTag::PluralNoun | PosTag::ProperNoun | PosTag::ProperPluralNoun
        )
    }

    /// Whether the tag is a plural noun category.
    pub fn is_plural_noun(self) -> bool {
        matches!(self, PosTag::PluralNoun | PosTag::ProperPluralNoun)
    }

    /// The Penn Treebank spelling of this tag.
    pub fn as_penn(self) -> &'static str {
        match self {
            PosTag::Noun => "NN",
            PosTag::PluralNoun => "NNS",
            PosTag::ProperNoun => "NNP",
            PosTag::ProperPluralNoun => "NNPS",
            PosTag::Determiner => "DT",
            PosTag::Pronoun => "PRP",
            PosTag::Preposition => "IN",
            PosTag::Conjunction => "CC",
            PosTag::Verb => "VB",
            PosTag::Adjective => "JJ",
            PosTag::Adverb => "RB",
            PosTag::Number => "CD",
            PosTag::Punctuation => ".",
            PosTag::Other => "FW",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_penn())
    }
}

impl FromStr for PosTag {
    type Err = std::convert::Infallible;

    /// Map a Penn Treebank tag onto a [`PosTag`]. Unknown tags become
    /// [`PosTag::Other`] rather than failing.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Ok(match tag {
            "NN" => PosTag::Noun,
            "NNS" => PosTag::PluralNoun,
            "NNP" => PosTag::ProperNoun,
            "NNPS" => PosTag::ProperPluralNoun,
            "DT" | "PDT" | "PRP$" | "WDT" | "WP$" => PosTag::Determiner,
            "PRP" | "WP" | "EX" => PosTag::Pronoun,
            "IN" | "TO" => PosTag::Preposition,
            "CC" => PosTag::Conjunction,
            "MD" | "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" => PosTag::Verb,
            "JJ" | "JJR" | "JJS" => PosTag::Adjective,
            "RB" | "RBR" | "RBS" | "WRB" | "RP" => PosTag::Adverb,
            "CD" => PosTag::Number,
            "." | "," | ":" | "``" | "''" | "(" | ")" | "#" | "$" => PosTag::Punctuation,
            _ => PosTag::Other,
        })
    }
}

/// A token together with the tag the tagger assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub token: Token,
    pub tag: PosTag,
}

/// Assigns part-of-speech tags to the tokens of a text.
///
/// Implementations must return tokens in text order, with spans that index
/// into the text they were given.
pub trait Tagger: Send + Sync {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its",
    "our", "their", "some", "any", "no", "every", "each", "all", "both", "few", "many",
    "several", "much", "more", "most", "another", "such", "what", "which", "whose", "either",
    "neither", "yer", "me",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "him", "us", "them", "myself", "yourself",
    "himself", "herself", "itself", "ourselves", "themselves", "who", "whom", "someone",
    "somebody", "something", "anyone", "anybody", "anything", "everyone", "everybody",
    "everything", "nobody", "nothing", "there", "mine", "yours", "hers", "ours", "theirs",
];

const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "he", "she", "it", "we", "they", "who"];

const PREPOSITIONS: &[&str] = &[
    "at", "in", "on", "of", "to", "for", "with", "from", "by", "about", "into", "onto", "over",
    "under", "up", "down", "out", "off", "through", "between", "after", "before", "around",
    "across", "along", "near", "behind", "above", "below", "without", "within", "upon", "like",
    "than", "as", "against", "during", "towards", "toward", "past", "round", "till", "until",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "if", "because", "while", "when", "although",
    "though", "unless", "since", "whether", "where", "then", "how", "why",
];

const VERBS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "done", "will", "would", "shall", "should", "can", "could", "may",
    "might", "must", "go", "goes", "going", "went", "gone", "get", "gets", "got", "getting",
    "make", "makes", "made", "take", "takes", "took", "taken", "see", "saw", "seen", "know",
    "knew", "known", "think", "thought", "say", "says", "said", "come", "came", "give",
    "gave", "given", "want", "wants", "wanted", "tell", "told", "put", "let", "keep", "kept",
    "find", "found", "leave", "left", "feel", "felt", "bring", "brought", "begin", "began",
    "seem", "seems", "seemed", "pop", "nip", "fancy", "reckon", "ain't",
];

const MODALS: &[&str] = &[
    "will", "would", "shall", "should", "can", "could", "may", "might", "must", "to", "do",
    "does", "did", "don't", "didn't", "can't", "won't",
];

const ADVERBS: &[&str] = &[
    "not", "very", "too", "also", "just", "now", "here", "never", "always", "often",
    "again", "already", "still", "really", "quite", "only", "even", "back", "away", "soon",
    "today", "tonight", "yesterday", "tomorrow", "ever", "once", "almost", "perhaps", "maybe",
    "well", "yes", "no", "please", "right",
];

const ADJECTIVES: &[&str] = &[
    "good", "bad", "big", "small", "old", "new", "young", "little", "long", "short", "great",
    "high", "low", "wrong", "nice", "happy", "sad", "red", "blue", "green", "black", "white",
    "own", "other", "same", "last", "next", "first", "best", "worst", "lovely", "proper",
    "real", "whole", "dear", "cold", "hot", "fine", "poor", "rich", "early", "late", "free",
    "full", "empty", "true", "cheap", "posh", "daft",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ish", "ical"];

fn contains(list: &[&str], word: &str) -> bool {
    list.contains(&word)
}

/// The tag a word gets from the lexicon alone, before looking at its
/// neighbours. `None` means the word is open-class (a noun candidate).
fn lexical_tag(token: &Token) -> Option<PosTag> {
    let word = token.value.as_str();

    match token.kind {
        TokenKind::Number => return Some(PosTag::Number),
        TokenKind::Punctuation => return Some(PosTag::Punctuation),
        TokenKind::Word => {}
    }

    if token.is_contraction() {
        return Some(PosTag::Other);
    }
    if contains(DETERMINERS, word) {
        return Some(PosTag::Determiner);
    }
    if contains(PRONOUNS, word) {
        return Some(PosTag::Pronoun);
    }
    if contains(PREPOSITIONS, word) {
        return Some(PosTag::Preposition);
    }
    if contains(CONJUNCTIONS, word) {
        return Some(PosTag::Conjunction);
    }
    if contains(VERBS, word) {
        return Some(PosTag::Verb);
    }
    if contains(ADVERBS, word) || (word.len() > 4 && word.ends_with("ly")) {
        return Some(PosTag::Adverb);
    }
    let adjective_suffix = ADJECTIVE_SUFFIXES
        .iter()
        .any(|s| word.len() > s.len() + 2 && word.ends_with(s));
    if contains(ADJECTIVES, word) || adjective_suffix {
        return Some(PosTag::Adjective);
    }

    None
}

/// Whether a lowercase common noun looks plural from its spelling alone.
fn looks_plural(word: &str) -> bool {
    if crate::english::is_irregular_plural(word) {
        return true;
    }
    word.len() > 3
        && word.ends_with('s')
        && !["ss", "us", "is", "ous"].iter().any(|s| word.ends_with(s))
}

/// A rule-based English tagger.
///
/// Tagging happens in two passes. The first assigns closed-class tags from a
/// small lexicon and suffix rules. The second resolves the remaining
/// open-class words from context: a capitalized word that does not open a
/// sentence is a proper noun; a word following a subject pronoun, a modal,
/// or `to` is a verb; in a run of open-class words the last one is the head
/// noun and the ones before it are modifiers.
#[derive(Debug, Clone, Default)]
pub struct HeuristicTagger;

impl HeuristicTagger {
    pub fn new() -> Self {
        HeuristicTagger
    }

    fn tag_tokens(&self, tokens: Vec<Token>) -> Vec<TaggedToken> {
        let lexical: Vec<Option<PosTag>> = tokens.iter().map(lexical_tag).collect();
        let mut tags: Vec<PosTag> = Vec::with_capacity(tokens.len());

        for (index, token) in tokens.iter().enumerate() {
            if let Some(tag) = lexical[index] {
                tags.push(tag);
                continue;
            }

            let previous = index.checked_sub(1).map(|i| &tokens[i]);
            let sentence_start = previous.map(Token::ends_sentence).unwrap_or(true);

            if token.is_capitalized() && !sentence_start {
                let after_determiner = index
                    .checked_sub(1)
                    .map(|i| tags[i] == PosTag::Determiner)
                    .unwrap_or(false);
                let tag = if after_determiner && looks_plural(&token.value) {
                    PosTag::ProperPluralNoun
                } else {
                    PosTag::ProperNoun
                };
                tags.push(tag);
                continue;
            }

            let follows_subject_or_modal = previous
                .map(|p| contains(SUBJECT_PRONOUNS, &p.value) || contains(MODALS, &p.value))
                .unwrap_or(false);
            if follows_subject_or_modal {
                tags.push(PosTag::Verb);
                continue;
            }

            let next_is_open = tokens
                .get(index + 1)
                .map(|next| lexical[index + 1].is_none() && !next.is_capitalized())
                .unwrap_or(false);
            if next_is_open {
                tags.push(PosTag::Adjective);
                continue;
            }

            tags.push(if looks_plural(&token.value) {
                PosTag::PluralNoun
            } else {
                PosTag::Noun
            });
        }

        tokens
            .into_iter()
            .zip(tags)
            .map(|(token, tag)| TaggedToken { token, tag })
            .collect()
    }
}

impl Tagger for HeuristicTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        self.tag_tokens(tokenize(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tags_of(text: &str) -> Vec<(String, PosTag)> {
        HeuristicTagger::new()
            .tag(text)
            .into_iter()
            .map(|tagged| (tagged.token.original, tagged.tag))
            .collect()
    }

    fn nouns_of(text: &str) -> Vec<(String, PosTag)> {
        tags_of(text)
            .into_iter()
            .filter(|(_, tag)| tag.is_noun())
            .collect()
    }

    #[test]
    fn finds_nouns_after_determiners() {
        assert_eq!(
            nouns_of("Let's have a look at the stairs"),
            vec![
                ("look".to_string(), PosTag::Noun),
                ("stairs".to_string(), PosTag::PluralNoun),
            ]
        );
    }

    #[test]
    fn contractions_are_never_nouns() {
        let tags = tags_of("Let's go");
        assert_eq!(tags[0].1, PosTag::Other);
    }

    #[test]
    fn last_word_of_a_run_is_the_head() {
        assert_eq!(
            nouns_of("the garden gate"),
            vec![("gate".to_string(), PosTag::Noun)]
        );
        assert_eq!(tags_of("the garden gate")[1].1, PosTag::Adjective);
    }

    #[test]
    fn capitalized_words_inside_a_sentence_are_proper() {
        assert_eq!(
            nouns_of("I went to London with the Beatles"),
            vec![
                ("London".to_string(), PosTag::ProperNoun),
                ("Beatles".to_string(), PosTag::ProperPluralNoun),
            ]
        );
    }

    #[test]
    fn words_after_subject_pronouns_are_verbs() {
        let tags = tags_of("they drink tea");
        assert_eq!(tags[1].1, PosTag::Verb);
        assert_eq!(tags[2].1, PosTag::Noun);
    }

    #[test]
    fn irregular_plurals_are_plural_nouns() {
        assert_eq!(
            nouns_of("the children saw the geese"),
            vec![
                ("children".to_string(), PosTag::PluralNoun),
                ("geese".to_string(), PosTag::PluralNoun),
            ]
        );
    }

    #[test]
    fn penn_tags_round_trip() {
        for tag in [
            PosTag::Noun,
            PosTag::PluralNoun,
            PosTag::ProperNoun,
            PosTag::ProperPluralNoun,
        ] {
            assert_eq!(tag.as_penn().parse::<PosTag>().unwrap(), tag);
        }
        assert_eq!("VBZ".parse::<PosTag>().unwrap(), PosTag::Verb);
        assert_eq!("XYZ".parse::<PosTag>().unwrap(), PosTag::Other);
    }
}
