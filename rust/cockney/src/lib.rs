//! # Cockney
//!
//! Rewrites text as rhyming slang. Each noun is swapped for a word that
//! rhymes with it, preferring rhymes that appear as the head of a common
//! two-word phrase in a reference corpus: `stairs` becomes `Astaires`, by way
//! of *Fred Astaire*.
//!
//! ## Pipeline
//!
//! ```text
//! Text → NounExtractor → for each Noun, in order:
//!   RhymeSource::fetch_rhymes → exclude_self_rhymes
//!   → BigramTable::score (or fallback_phrases) → Selector
//!   → Substituter → span-based rewrite of the original text
//! ```
//!
//! A [`Rhymer`] ties these together. Rhymes come from any [`RhymeSource`]:
//! the [`DatamuseRhymeSource`] HTTP client, or an offline
//! [`StaticRhymeSource`]. A failing source is fatal and is reported as
//! [`CockneyError::SourceUnavailable`]; a noun with nothing to rhyme with is
//! simply left alone.
//!
//! ```
//! use std::sync::Arc;
//! use cockney::{BigramTable, Collocation, Rhymer, RhymerOptions, StaticRhymeSource};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let runtime = tokio::runtime::Builder::new_current_thread().build()?;
//! # runtime.block_on(async {
//! let source = StaticRhymeSource::new().with("stair", ["Astaire", "pear"]);
//! let corpus = Arc::new(BigramTable::from_entries([Collocation::new("Astaire", "Fred", 37)]));
//!
//! let mut rhymer = Rhymer::new(source, corpus, RhymerOptions::default());
//! let result = rhymer.transform("Let's have a look at the stairs").await?;
//!
//! assert_eq!(result.text, "Let's have a look at the Astaires");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! # })
//! # }
//! ```

mod corpus;
pub use corpus::*;

mod datamuse;
pub use datamuse::*;

mod error;
pub use error::*;

mod rhyme;
pub use rhyme::*;

mod rhymer;
pub use rhymer::*;

mod score;
pub use score::*;

mod select;
pub use select::*;

mod substitute;
pub use substitute::*;
