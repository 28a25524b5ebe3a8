//! Affinity-aware group partitioning.
//!
//! Splits a population into a fixed number of roughly equal groups so that
//! as many individuals as possible share a group with at least one of the
//! co-members they nominated. The problem is solved heuristically:
//!
//! - **Greedy assignment** ([`assign`]): place individuals one by one in a
//!   randomized order, scoring each group by nominations present minus
//!   current size.
//! - **Balancing** ([`balance`]): move members from overfull to underfull
//!   groups, without regard to affinity.
//! - **Evaluation** ([`evaluate`]): share of individuals co-located with at
//!   least one nomination.
//! - **Multi-restart search** ([`search`]): repeat the above with fresh
//!   orderings and keep the first best-scoring partition.
//! - **Reporting** ([`report`]): per-individual outcome rows for export
//!   layers.
//!
//! # Example
//!
//! ```
//! use u_grouping::model::AffinityModel;
//! use u_grouping::search::{SearchConfig, SearchRunner};
//!
//! let model = AffinityModel::builder()
//!     .with_individual("ana", &["ben"])
//!     .with_individual("ben", &["ana", "cleo"])
//!     .with_individual("cleo", &["dan"])
//!     .with_individual("dan", &[])
//!     .build();
//!
//! let config = SearchConfig::default().with_group_count(2).with_seed(42);
//! let result = SearchRunner::run(&model, &config)?;
//!
//! assert_eq!(result.best.len(), 4);
//! println!("{}", result.best_evaluation);
//! # Ok::<(), u_grouping::GroupingError>(())
//! ```
//!
//! Loading preference data and writing results are left to callers.

pub mod assign;
pub mod balance;
mod error;
pub mod evaluate;
pub mod model;
pub mod report;
pub mod search;

pub use error::{GroupingError, Result};
