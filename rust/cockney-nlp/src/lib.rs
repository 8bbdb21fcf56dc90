//! # Cockney NLP
//!
//! The language-facing half of the Cockney rhymer: finding the nouns in a
//! piece of text and moving them between singular and plural.
//!
//! ## Pipeline
//!
//! ```text
//! Text → tokenize (spans) → Tagger (POS tags) → NounExtractor
//!   → Noun { base_form, number, surface, span }
//! ```
//!
//! Tagging, lemmatization and inflection are oracles hidden behind the
//! [`Tagger`], [`Lemmatizer`] and [`Inflector`] traits. The crate ships
//! rule-based English implementations of all three so the rhymer works out
//! of the box; anything smarter can be injected through
//! [`NounExtractor::new`] and [`Morphology::new`].
//!
//! ```
//! use cockney_nlp::{Number, NounExtractor};
//!
//! let nouns = NounExtractor::english().extract("I fell down the stairs");
//! assert_eq!(nouns[0].base_form, "stair");
//! assert_eq!(nouns[0].number, Number::Plural);
//! ```

mod english;
pub use english::*;

mod morphology;
pub use morphology::*;

mod noun;
pub use noun::*;

mod tagger;
pub use tagger::*;

mod token;
pub use token::*;
