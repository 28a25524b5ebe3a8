//! Greedy group assignment.
//!
//! Produces one candidate [`Partition`](crate::model::Partition) per
//! ordering of the population. Each individual goes to the group with the
//! best [`AffinityWeights`] score at the moment it is processed; nothing is
//! revisited.

mod greedy;
mod weights;

pub use greedy::GreedyAssigner;
pub use weights::AffinityWeights;
