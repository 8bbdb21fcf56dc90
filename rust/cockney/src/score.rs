use tracing::debug;

use crate::{BigramTable, Collocation, RhymeCandidate};

impl BigramTable {
    /// Find the corpus collocations whose head is one of `candidates`, most
    /// frequent first.
    ///
    /// Heads are matched by exact string equality. Candidates are visited in
    /// the rhyme source's order and collocations in table order; the sort is
    /// stable, so ties keep that order.
    pub fn score(&self, candidates: &[RhymeCandidate], base_form: &str) -> Vec<Collocation> {
        let mut collocations: Vec<Collocation> = candidates
            .iter()
            .flat_map(|candidate| self.lookup(candidate.as_str()))
            .inspect(|collocation| {
                debug!(
                    "{} rhymes with {} {} (freq {})",
                    base_form, collocation.modifier, collocation.head, collocation.frequency
                )
            })
            .cloned()
            .collect();

        collocations.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        collocations
    }
}

/// Treat every multi-word candidate as a collocation with frequency 0.
///
/// The last word becomes the head and the words before it the modifier.
/// Single words are skipped. Candidate order is kept.
pub fn fallback_phrases(candidates: &[RhymeCandidate]) -> Vec<Collocation> {
    candidates
        .iter()
        .filter_map(RhymeCandidate::split_head)
        .filter(|(modifier, head)| !modifier.is_empty() && !head.is_empty())
        .map(|(modifier, head)| Collocation::new(head, modifier, 0))
        .collect()
}
