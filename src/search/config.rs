//! Search configuration.

use crate::assign::AffinityWeights;
use crate::balance::BalancePolicy;
use crate::error::{GroupingError, Result};

/// Configuration for the multi-restart search.
///
/// # Defaults
///
/// ```
/// use u_grouping::search::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.group_count, 9);
/// assert_eq!(config.trials, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_grouping::balance::BalancePolicy;
/// use u_grouping::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_group_count(4)
///     .with_trials(200)
///     .with_balance_policy(BalancePolicy::UnmatchedFirst)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Number of groups to form. Must be at least 1.
    pub group_count: usize,

    /// Number of randomized trials. Must be at least 1.
    pub trials: usize,

    /// Greedy placement weights.
    pub weights: AffinityWeights,

    /// Which member leaves an overfull group while balancing.
    pub balance_policy: BalancePolicy,

    /// Balance until every group holds `target` or `target + 1` members
    /// instead of stopping at the first overfull/underfull shortage.
    pub strict_balance: bool,

    /// Run trials on the rayon pool. Ignored without the `parallel`
    /// feature. The chosen result does not depend on this flag.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            group_count: 9,
            trials: 50,
            weights: AffinityWeights::default(),
            balance_policy: BalancePolicy::default(),
            strict_balance: false,
            parallel: false,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_group_count(mut self, n: usize) -> Self {
        self.group_count = n;
        self
    }

    pub fn with_trials(mut self, n: usize) -> Self {
        self.trials = n;
        self
    }

    pub fn with_weights(mut self, weights: AffinityWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_balance_policy(mut self, policy: BalancePolicy) -> Self {
        self.balance_policy = policy;
        self
    }

    pub fn with_strict_balance(mut self, strict: bool) -> Self {
        self.strict_balance = strict;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for a longer search: 500 trials, parallel when available.
    pub fn thorough() -> Self {
        Self {
            trials: 500,
            parallel: true,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.group_count == 0 {
            return Err(GroupingError::invalid_config(
                "group_count",
                "must be at least 1",
            ));
        }
        if self.trials == 0 {
            return Err(GroupingError::invalid_config("trials", "must be at least 1"));
        }
        Ok(())
    }
}
