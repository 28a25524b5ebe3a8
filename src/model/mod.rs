//! Data model: the affinity input and the partition output.
//!
//! - [`AffinityModel`]: population plus declared preferences, read-only
//! - [`Partition`]: labelled groups, mutated only while a trial assigns
//!   and balances

mod affinity;
mod partition;

pub use affinity::{AffinityModel, AffinityModelBuilder, Individual};
pub use partition::{Group, Partition};
