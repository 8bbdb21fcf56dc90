//! Rule-based English noun inflection and lemmatization.
//!
//! These are lightweight transformations, not a full morphology engine. They
//! cover regular plurals, the common irregular and invariant nouns, and keep
//! the capitalization of the word they were given.

use crate::morphology::{Inflector, Lemmatizer};

/// Nouns whose plural is spelled like the singular.
const INVARIANT: &[&str] = &[
    "sheep", "fish", "deer", "moose", "series", "species", "news", "aircraft", "offspring",
    "swine", "bison", "salmon", "trout", "cod", "squid", "cattle", "police", "scissors",
    "trousers", "jeans", "pants", "clothes", "pliers", "shorts", "tongs", "headquarters",
    "means", "barracks", "information", "equipment", "furniture", "luggage", "advice", "rice",
    "money", "music", "homework", "knowledge", "mathematics", "physics", "athletics",
];

/// `(singular, plural)` pairs that do not follow the suffix rules.
const IRREGULAR: &[(&str, &str)] = &[
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("person", "people"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("ox", "oxen"),
    ("die", "dice"),
    ("cactus", "cacti"),
    ("fungus", "fungi"),
    ("nucleus", "nuclei"),
    ("radius", "radii"),
    ("crisis", "crises"),
    ("thesis", "theses"),
    ("analysis", "analyses"),
    ("phenomenon", "phenomena"),
    ("criterion", "criteria"),
    ("knife", "knives"),
    ("wife", "wives"),
    ("life", "lives"),
    ("leaf", "leaves"),
    ("half", "halves"),
    ("wolf", "wolves"),
    ("calf", "calves"),
    ("shelf", "shelves"),
    ("loaf", "loaves"),
    ("thief", "thieves"),
    ("potato", "potatoes"),
    ("tomato", "tomatoes"),
    ("hero", "heroes"),
    ("echo", "echoes"),
];

fn is_invariant(lower: &str) -> bool {
    INVARIANT.contains(&lower)
}

/// Whether `word` (lowercase) is the plural half of an irregular pair.
pub(crate) fn is_irregular_plural(word: &str) -> bool {
    IRREGULAR.iter().any(|(_, plural)| *plural == word)
}

fn ends_with_any(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| word.ends_with(s))
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().map(char::is_uppercase).unwrap_or(false)
}

/// Spell `replacement` with the capitalization pattern of `original`.
fn match_case(original: &str, replacement: &str) -> String {
    let letters = original.chars().filter(|c| c.is_alphabetic()).count();
    if letters > 1 && original.chars().all(|c| !c.is_lowercase()) {
        return replacement.to_uppercase();
    }
    if starts_uppercase(original) {
        let mut chars = replacement.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
    }
    replacement.to_string()
}

/// Split off the last word of a phrase, which is the word that inflects.
fn split_head(word: &str) -> Option<(&str, &str)> {
    word.rsplit_once(' ').filter(|(_, last)| !last.is_empty())
}

/// English noun inflection by rule, with tables for the exceptions.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishInflector;

impl Inflector for EnglishInflector {
    fn pluralize(&self, word: &str) -> Option<String> {
        if word.is_empty() {
            return None;
        }
        if let Some((modifier, head)) = split_head(word) {
            return self
                .pluralize(head)
                .map(|plural| format!("{modifier} {plural}"));
        }

        let lower = word.to_lowercase();
        if is_invariant(&lower) {
            return Some(word.to_string());
        }
        if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
            return Some(match_case(word, plural));
        }

        // ASCII lowercasing keeps byte offsets aligned with `word`.
        let ascii = word.to_ascii_lowercase();
        let plural = if ends_with_any(&ascii, &["s", "x", "z", "ch", "sh"]) {
            format!("{word}es")
        } else if ascii.ends_with('y')
            && !starts_uppercase(word)
            && !ascii[..ascii.len() - 1].ends_with(is_vowel)
        {
            format!("{}ies", &word[..word.len() - 1])
        } else {
            format!("{word}s")
        };

        Some(plural)
    }

    fn singularize(&self, word: &str) -> Option<String> {
        if word.is_empty() {
            return None;
        }
        if let Some((modifier, head)) = split_head(word) {
            return self
                .singularize(head)
                .map(|singular| format!("{modifier} {singular}"));
        }

        let lower = word.to_lowercase();
        if is_invariant(&lower) {
            return Some(word.to_string());
        }
        if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == lower) {
            return Some(match_case(word, singular));
        }
        if IRREGULAR.iter().any(|(singular, _)| *singular == lower) {
            return None;
        }

        let ascii = word.to_ascii_lowercase();
        let length = word.len();
        let singular = if ascii.ends_with("ies") && length > 4 {
            format!("{}y", &word[..length - 3])
        } else if ends_with_any(&ascii, &["sses", "xes", "zzes", "ches", "shes"]) {
            word[..length - 2].to_string()
        } else if ascii.ends_with('s') && length > 2 && !ends_with_any(&ascii, &["ss", "us", "is"])
        {
            word[..length - 1].to_string()
        } else {
            return None;
        };

        Some(singular)
    }
}

/// A noun lemmatizer built on [`EnglishInflector`].
///
/// Lowercase plurals are reduced to their singular; everything else is
/// already a lemma. Capitalized words are names and keep their spelling.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLemmatizer;

impl Lemmatizer for EnglishLemmatizer {
    fn lemmatize(&self, word: &str) -> Option<String> {
        if word.is_empty() {
            return None;
        }
        if starts_uppercase(word) || is_invariant(word) {
            return Some(word.to_string());
        }

        let looks_plural = is_irregular_plural(word)
            || (word.len() > 3
                && word.ends_with('s')
                && !ends_with_any(word, &["ss", "us", "is"]));

        if looks_plural {
            if let Some(singular) = EnglishInflector.singularize(word) {
                return Some(singular);
            }
        }

        Some(word.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralizes_by_rule() {
        let cases = [
            ("hat", "hats"),
            ("box", "boxes"),
            ("church", "churches"),
            ("bus", "buses"),
            ("lady", "ladies"),
            ("boy", "boys"),
            ("Astaire", "Astaires"),
            ("Kennedy", "Kennedys"),
        ];
        for (singular, plural) in cases {
            assert_eq!(
                EnglishInflector.pluralize(singular).as_deref(),
                Some(plural),
                "pluralizing {singular}"
            );
        }
    }

    #[test]
    fn pluralizes_exceptions() {
        assert_eq!(EnglishInflector.pluralize("goose").as_deref(), Some("geese"));
        assert_eq!(EnglishInflector.pluralize("Child").as_deref(), Some("Children"));
        assert_eq!(EnglishInflector.pluralize("sheep").as_deref(), Some("sheep"));
        assert_eq!(EnglishInflector.pluralize("knife").as_deref(), Some("knives"));
    }

    #[test]
    fn pluralizes_the_last_word_of_a_phrase() {
        assert_eq!(
            EnglishInflector.pluralize("Fred Astaire").as_deref(),
            Some("Fred Astaires")
        );
        assert_eq!(
            EnglishInflector.pluralize("apple pie").as_deref(),
            Some("apple pies")
        );
    }

    #[test]
    fn singularizes_plurals() {
        let cases = [
            ("stairs", "stair"),
            ("cats", "cat"),
            ("pies", "pie"),
            ("ladies", "lady"),
            ("boxes", "box"),
            ("classes", "class"),
            ("houses", "house"),
            ("geese", "goose"),
            ("Astaires", "Astaire"),
        ];
        for (plural, singular) in cases {
            assert_eq!(
                EnglishInflector.singularize(plural).as_deref(),
                Some(singular),
                "singularizing {plural}"
            );
        }
    }

    #[test]
    fn singular_words_have_no_singular() {
        assert_eq!(EnglishInflector.singularize("cat"), None);
        assert_eq!(EnglishInflector.singularize("glass"), None);
        assert_eq!(EnglishInflector.singularize("child"), None);
    }

    #[test]
    fn invariant_nouns_singularize_to_themselves() {
        assert_eq!(EnglishInflector.singularize("sheep").as_deref(), Some("sheep"));
    }

    #[test]
    fn lemmatizes_common_nouns_only() {
        assert_eq!(EnglishLemmatizer.lemmatize("cats").as_deref(), Some("cat"));
        assert_eq!(EnglishLemmatizer.lemmatize("teeth").as_deref(), Some("tooth"));
        assert_eq!(EnglishLemmatizer.lemmatize("glass").as_deref(), Some("glass"));
        assert_eq!(EnglishLemmatizer.lemmatize("look").as_deref(), Some("look"));
        assert_eq!(EnglishLemmatizer.lemmatize("James").as_deref(), Some("James"));
        assert_eq!(EnglishLemmatizer.lemmatize(""), None);
    }
}
