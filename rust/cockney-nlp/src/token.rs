//! Tokenization layer: splitting input text into positioned tokens.
//!
//! Every token remembers the byte span it was cut from, so later stages can
//! rewrite the original text in place without searching for the word again.

use std::ops::Range;

/// A single token extracted from input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token's text value, lowercased for matching.
    pub value: String,
    /// The original text before normalization.
    pub original: String,
    /// Zero-based position in the token sequence.
    pub position: usize,
    /// Byte range of `original` within the tokenized text.
    pub span: Range<usize>,
    /// What kind of token this is.
    pub kind: TokenKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A word token (alphabetic, possibly with inner apostrophes or hyphens).
    Word,
    /// A numeric token.
    Number,
    /// A single punctuation or symbol character.
    Punctuation,
}

impl Token {
    /// Whether the original text starts with an uppercase letter.
    pub fn is_capitalized(&self) -> bool {
        self.original
            .chars()
            .next()
            .map(char::is_uppercase)
            .unwrap_or(false)
    }

    /// Whether this token is a contraction or possessive such as `let's`.
    pub fn is_contraction(&self) -> bool {
        self.original.contains(is_apostrophe)
    }

    /// Whether this token closes a sentence.
    pub fn ends_sentence(&self) -> bool {
        self.kind == TokenKind::Punctuation && matches!(self.original.as_str(), "." | "!" | "?")
    }
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// Characters that may join two alphanumeric runs into one word.
fn is_joiner(c: char) -> bool {
    is_apostrophe(c) || c == '-'
}

/// Tokenize input text into a sequence of tokens.
///
/// Words are maximal alphanumeric runs; an apostrophe or hyphen between two
/// alphanumeric characters stays inside the word (`let's`, `mother-in-law`).
/// Every other non-whitespace character becomes its own punctuation token.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if ch.is_whitespace() {
            continue;
        }

        let mut end = start + ch.len_utf8();

        if ch.is_alphanumeric() {
            while let Some(&(index, next)) = chars.peek() {
                if next.is_alphanumeric() {
                    end = index + next.len_utf8();
                    chars.next();
                    continue;
                }

                if is_joiner(next) {
                    let mut lookahead = chars.clone();
                    lookahead.next();
                    if let Some(&(_, after)) = lookahead.peek() {
                        if after.is_alphanumeric() {
                            chars.next();
                            continue;
                        }
                    }
                }

                break;
            }
        }

        let original = &text[start..end];
        let kind = if original.chars().all(char::is_numeric) {
            TokenKind::Number
        } else if ch.is_alphanumeric() {
            TokenKind::Word
        } else {
            TokenKind::Punctuation
        };

        tokens.push(Token {
            value: original.to_lowercase(),
            original: original.to_string(),
            position: tokens.len(),
            span: start..end,
            kind,
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_simple_sentence() {
        let tokens = tokenize("have a look at the stairs");
        let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["have", "a", "look", "at", "the", "stairs"]);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Word));
    }

    #[test]
    fn values_are_lowercased_but_originals_kept() {
        let tokens = tokenize("Apples and Pears");
        assert_eq!(tokens[2].value, "pears");
        assert_eq!(tokens[2].original, "Pears");
        assert!(tokens[2].is_capitalized());
        assert!(!tokens[1].is_capitalized());
    }

    #[test]
    fn spans_point_back_into_the_text() {
        let text = "Let's have a look, mate!";
        for token in tokenize(text) {
            assert_eq!(&text[token.span.clone()], token.original);
        }
    }

    #[test]
    fn contractions_and_hyphens_stay_whole() {
        let tokens = tokenize("Let's meet my mother-in-law's dog");
        assert_eq!(tokens[0].original, "Let's");
        assert!(tokens[0].is_contraction());
        assert_eq!(tokens[3].original, "mother-in-law's");
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn trailing_apostrophe_is_punctuation() {
        let tokens = tokenize("the dogs' dinner");
        assert_eq!(tokens[1].original, "dogs");
        assert_eq!(tokens[2].kind, TokenKind::Punctuation);
        assert_eq!(tokens[2].original, "'");
    }

    #[test]
    fn numbers_and_punctuation_are_classified() {
        let tokens = tokenize("3 pies, please.");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[2].kind, TokenKind::Punctuation);
        assert!(tokens[4].ends_sentence());
        assert_eq!(tokens[4].position, 4);
    }

    #[test]
    fn spans_are_byte_offsets_for_multibyte_text() {
        let text = "café ’n’ crêpes";
        let tokens = tokenize(text);
        assert_eq!(tokens[0].original, "café");
        assert_eq!(&text[tokens.last().unwrap().span.clone()], "crêpes");
    }
}
