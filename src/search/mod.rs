//! Multi-restart search.
//!
//! Repeats {shuffle → assign → balance → evaluate} for a configured number
//! of trials and keeps the first trial with the highest success
//! percentage.
//!
//! # Key Types
//!
//! - [`SearchConfig`]: group count, trial count, weights, balancing, seed
//! - [`SearchRunner`]: executes the trials
//! - [`SearchResult`]: best partition with run statistics
//! - [`TrialOutcome`]: one trial's partition and evaluation

mod config;
mod runner;

pub use config::SearchConfig;
pub use runner::{SearchResult, SearchRunner, TrialOutcome};
