//! Randomized-order greedy assignment.
//!
//! # Algorithm
//!
//! 1. Create `group_count` empty groups
//! 2. For each individual in the given order (skipping ones already placed):
//!    a. Score every group with [`AffinityWeights::combine`]
//!    b. Keep the strictly greatest score; earlier groups win ties
//!    c. Place the individual there, never to be reconsidered
//!
//! The ordering is the only source of variation. Callers shuffle it.

use std::collections::HashSet;

use super::weights::AffinityWeights;
use crate::model::{AffinityModel, Individual, Partition};

/// Places every individual of an ordering into one of a fixed number of
/// groups, favouring groups that already hold their nominations.
///
/// # Examples
///
/// ```
/// use u_grouping::assign::GreedyAssigner;
/// use u_grouping::model::AffinityModel;
///
/// let model = AffinityModel::builder()
///     .with_individual("a", &["b"])
///     .with_individual("b", &["a"])
///     .with_individual("c", &[])
///     .build();
///
/// let partition = GreedyAssigner::default().assign(model.population(), &model, 2);
/// assert_eq!(partition.group_of("a"), partition.group_of("b"));
/// assert_eq!(partition.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAssigner {
    weights: AffinityWeights,
}

impl GreedyAssigner {
    pub fn new(weights: AffinityWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> AffinityWeights {
        self.weights
    }

    /// Score of placing `individual` into group `group` of `partition`.
    ///
    /// Each nomination already present in the group counts once per
    /// occurrence in the preference list.
    ///
    /// # Panics
    /// Panics if `group` is out of range.
    pub fn score(
        &self,
        individual: &str,
        partition: &Partition,
        group: usize,
        model: &AffinityModel,
    ) -> i64 {
        let members = &partition.groups()[group];
        let nominated_in_group = model
            .preferences_of(individual)
            .iter()
            .filter(|p| members.contains(p))
            .count();
        self.weights.combine(nominated_in_group, members.len())
    }

    /// Builds one partition from `order`.
    ///
    /// Deterministic for a fixed ordering. Every distinct individual of
    /// `order` ends up in exactly one group; repeated entries are placed
    /// once.
    ///
    /// # Panics
    /// Panics if `group_count` is zero.
    pub fn assign(
        &self,
        order: &[Individual],
        model: &AffinityModel,
        group_count: usize,
    ) -> Partition {
        assert!(group_count > 0, "group_count must be at least 1");

        let mut partition = Partition::new(group_count);
        let mut placed: HashSet<&str> = HashSet::with_capacity(order.len());

        for individual in order {
            if !placed.insert(individual.as_str()) {
                continue;
            }
            let target = self.best_group(individual, &partition, model);
            partition.push(target, individual.clone());
        }

        partition
    }

    /// First group with the strictly greatest score.
    fn best_group(&self, individual: &str, partition: &Partition, model: &AffinityModel) -> usize {
        let mut best_group = 0;
        let mut best_score = i64::MIN;

        for group in 0..partition.group_count() {
            let score = self.score(individual, partition, group, model);
            if score > best_score {
                best_score = score;
                best_group = group;
            }
        }

        best_group
    }
}
