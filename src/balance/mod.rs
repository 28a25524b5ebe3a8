//! Post-assignment size balancing.
//!
//! Greedy assignment lets affinity dominate group size, so a candidate
//! partition can be badly skewed. The [`Balancer`] moves individuals one
//! at a time from the first overfull group to the first underfull group
//! until no such pair remains.

mod balancer;

pub use balancer::{BalancePolicy, BalanceStats, Balancer};
