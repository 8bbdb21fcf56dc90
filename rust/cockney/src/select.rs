use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::Collocation;

/// How one collocation is picked from a ranked list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// The highest-frequency collocation.
    #[default]
    Best,
    /// Any collocation, uniformly at random.
    Random,
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPolicy::Best => write!(f, "best"),
            SelectionPolicy::Random => write!(f, "random"),
        }
    }
}

impl FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "best" => Ok(SelectionPolicy::Best),
            "random" => Ok(SelectionPolicy::Random),
            other => Err(format!("unknown selection policy '{other}'")),
        }
    }
}

/// Pick one collocation from a list ranked most frequent first.
///
/// Returns `None` for an empty list.
pub fn select<'a, R>(
    collocations: &'a [Collocation],
    policy: SelectionPolicy,
    rng: &mut R,
) -> Option<&'a Collocation>
where
    R: Rng + ?Sized,
{
    match policy {
        SelectionPolicy::Best => collocations.first(),
        SelectionPolicy::Random => collocations.choose(rng),
    }
}

/// A [`SelectionPolicy`] together with the random number generator it draws
/// from.
#[derive(Debug, Clone)]
pub struct Selector {
    policy: SelectionPolicy,
    rng: ChaCha8Rng,
}

impl Selector {
    /// A selector seeded from the thread-local generator.
    pub fn new(policy: SelectionPolicy) -> Self {
        Self::seeded(policy, rand::random())
    }

    /// A selector whose random choices repeat for the same seed.
    pub fn seeded(policy: SelectionPolicy, seed: u64) -> Self {
        Self {
            policy,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn select<'a>(&mut self, collocations: &'a [Collocation]) -> Option<&'a Collocation> {
        select(collocations, self.policy, &mut self.rng)
    }
}
