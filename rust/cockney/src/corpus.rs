//! The reference bigram corpus.
//!
//! A [`BigramTable`] holds two-word noun phrases with the number of times
//! each was observed in a reference corpus. Each row is stored as
//! `(head, modifier, frequency)`, where the head is the second, rhyming word
//! of the phrase (`Fred Astaire` is stored as `Astaire`, `Fred`).
//!
//! The on-disk format is tab separated with `#` comments:
//!
//! ```text
//! # head	modifier	frequency
//! Astaire	Fred	37
//! pie	apple	212
//! ```
//!
//! The table is loaded once and only read afterwards; share it with an
//! [`Arc`](std::sync::Arc).

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use csv_async::{AsyncReaderBuilder, Trim};
use futures_util::StreamExt;
use tokio::io::AsyncRead;

use crate::CockneyError;

/// The corpus bundled with the crate, a selection of noun-noun bigrams.
pub const BUNDLED_BIGRAMS: &str = include_str!("../data/bigrams.tsv");

/// A two-word noun phrase `modifier head` with its corpus frequency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Collocation {
    /// The rhyming word the phrase is keyed by.
    pub head: String,
    /// The word in front of the head.
    pub modifier: String,
    /// How often the phrase was observed; higher is more idiomatic.
    pub frequency: u64,
}

impl Collocation {
    pub fn new(head: impl Into<String>, modifier: impl Into<String>, frequency: u64) -> Self {
        Self {
            head: head.into(),
            modifier: modifier.into(),
            frequency,
        }
    }

    /// The phrase as it would be written: `modifier head`.
    pub fn phrase(&self) -> String {
        if self.modifier.is_empty() {
            self.head.clone()
        } else {
            format!("{} {}", self.modifier, self.head)
        }
    }
}

impl fmt::Display for Collocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.phrase(), self.frequency)
    }
}

type Row = (String, String, u64);

/// An immutable table of collocations indexed by head word.
#[derive(Debug, Clone, Default)]
pub struct BigramTable {
    entries: Vec<Collocation>,
    by_head: HashMap<String, Vec<usize>>,
}

impl BigramTable {
    /// Build a table from collocations, keeping their order.
    pub fn from_entries(entries: impl IntoIterator<Item = Collocation>) -> Self {
        let entries: Vec<Collocation> = entries.into_iter().collect();
        let mut by_head: HashMap<String, Vec<usize>> = HashMap::new();

        for (index, entry) in entries.iter().enumerate() {
            by_head.entry(entry.head.clone()).or_default().push(index);
        }

        Self { entries, by_head }
    }

    /// Read a tab-separated table from any async reader.
    pub async fn load<R>(reader: R) -> Result<Self, CockneyError>
    where
        R: AsyncRead + Unpin + Send,
    {
        let mut deserializer = AsyncReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .comment(Some(b'#'))
            .trim(Trim::All)
            .create_deserializer(reader);

        let mut rows = deserializer.deserialize::<Row>();
        let mut entries = Vec::new();

        while let Some(row) = rows.next().await {
            let (head, modifier, frequency) = row?;
            if head.is_empty() {
                return Err(CockneyError::Corpus(format!(
                    "row {} has an empty head word",
                    entries.len() + 1
                )));
            }
            entries.push(Collocation {
                head,
                modifier,
                frequency,
            });
        }

        Ok(Self::from_entries(entries))
    }

    /// Read a tab-separated table from a file.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, CockneyError> {
        let path = path.as_ref();
        let file = tokio::fs::File::open(path)
            .await
            .map_err(|e| CockneyError::Corpus(format!("{}: {}", path.display(), e)))?;

        Self::load(file).await
    }

    /// The table bundled with the crate.
    pub async fn bundled() -> Result<Self, CockneyError> {
        Self::load(BUNDLED_BIGRAMS.as_bytes()).await
    }

    /// Every collocation whose head is exactly `head`, in table order.
    pub fn lookup<'a>(&'a self, head: &str) -> impl Iterator<Item = &'a Collocation> + 'a {
        self.by_head
            .get(head)
            .into_iter()
            .flatten()
            .map(|&index| &self.entries[index])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collocation> {
        self.entries.iter()
    }
}
