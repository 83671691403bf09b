use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::values::{Price, SlotSeries};

/// One full price series a shape can produce, tagged with that shape's name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidateSequence {
    shape: String,
    prices: SlotSeries<Price>,
}

impl CandidateSequence {
    pub fn new(shape: impl Into<String>, prices: SlotSeries<Price>) -> Self {
        Self {
            shape: shape.into(),
            prices,
        }
    }

    pub fn shape(&self) -> &str {
        &self.shape
    }

    pub fn prices(&self) -> &SlotSeries<Price> {
        &self.prices
    }

    pub fn price(&self, slot: usize) -> Price {
        self.prices[slot]
    }

    /// Best price this candidate ever reaches
    pub fn peak(&self) -> Price {
        self.prices.iter().copied().max().unwrap_or(0)
    }
}

/// Candidate sequences grouped by the shape that produced them
///
/// Each group is a set: the same series produced twice by one shape counts once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSet {
    groups: BTreeMap<String, BTreeSet<CandidateSequence>>,
    /// Set when the candidates were produced with the base price ignored
    base_relaxed: bool,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an empty group for each shape name
    pub fn with_shapes<I, S>(shapes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            groups: shapes
                .into_iter()
                .map(|name| (name.into(), BTreeSet::new()))
                .collect(),
            base_relaxed: false,
        }
    }

    /// Insert into the group named by the candidate's shape.
    ///
    /// Returns false if the group already held an identical series.
    pub fn insert(&mut self, candidate: CandidateSequence) -> bool {
        self.groups
            .entry(candidate.shape.clone())
            .or_default()
            .insert(candidate)
    }

    pub fn group(&self, shape: &str) -> Option<&BTreeSet<CandidateSequence>> {
        self.groups.get(shape)
    }

    /// Number of candidates a shape produced (0 for unknown shapes)
    pub fn group_len(&self, shape: &str) -> usize {
        self.groups.get(shape).map_or(0, BTreeSet::len)
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &BTreeSet<CandidateSequence>)> {
        self.groups.iter().map(|(name, set)| (name.as_str(), set))
    }

    pub fn shape_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// All candidates of all shapes, flattened
    pub fn iter(&self) -> impl Iterator<Item = &CandidateSequence> {
        self.groups.values().flat_map(|set| set.iter())
    }

    /// Total candidates across every group
    pub fn len(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn base_relaxed(&self) -> bool {
        self.base_relaxed
    }

    pub fn mark_base_relaxed(&mut self) {
        self.base_relaxed = true;
    }
}
