//! Multi-restart search loop.
//!
//! # Algorithm
//!
//! 1. Validate the configuration
//! 2. Draw one seed per trial from the master RNG, in trial order
//! 3. For each trial:
//!    a. Shuffle the population with the trial's own RNG
//!    b. Assign greedily
//!    c. Balance to `placed / group_count` members per group
//!    d. Evaluate
//! 4. Keep the first trial with the strictly highest percentage
//!
//! Pre-drawn seeds make every trial independent of execution order, so the
//! parallel path chooses the same result as the sequential one.

use super::config::SearchConfig;
use crate::assign::GreedyAssigner;
use crate::balance::Balancer;
use crate::error::Result;
use crate::evaluate::{Evaluation, Evaluator};
use crate::model::{AffinityModel, Partition};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome of one trial. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialOutcome {
    /// Zero-based trial index.
    pub trial: usize,

    /// Seed of the trial's RNG. Replaying it with
    /// [`SearchRunner::run_trial`] reproduces the partition.
    pub seed: u64,

    /// The balanced partition.
    pub partition: Partition,

    /// Its evaluation.
    pub evaluation: Evaluation,

    /// Number of balancing moves applied.
    pub balance_moves: usize,
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best partition found.
    ///
    /// Empty groups if no trial ran (cancelled before the first trial).
    pub best: Partition,

    /// Evaluation of the best partition.
    pub best_evaluation: Evaluation,

    /// Index of the trial that produced the best partition.
    pub best_trial: Option<usize>,

    /// Seed of that trial.
    pub best_seed: Option<u64>,

    /// Number of trials executed.
    pub trials_run: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Percentage of each trial, in trial order.
    pub trial_percentages: Vec<f64>,

    /// Best percentage so far after each trial. Non-decreasing.
    pub percentage_history: Vec<f64>,
}

/// Executes the multi-restart search.
///
/// # Usage
///
/// ```
/// use u_grouping::model::AffinityModel;
/// use u_grouping::search::{SearchConfig, SearchRunner};
///
/// let model = AffinityModel::builder()
///     .with_individual("a", &["b"])
///     .with_individual("b", &["a"])
///     .with_individual("c", &["d"])
///     .with_individual("d", &["c"])
///     .build();
/// let config = SearchConfig::default()
///     .with_group_count(2)
///     .with_trials(20)
///     .with_seed(42);
///
/// let result = SearchRunner::run(&model, &config).unwrap();
/// assert_eq!(result.best.len(), 4);
/// assert_eq!(result.best_evaluation.successes, 4);
/// ```
pub struct SearchRunner;

impl SearchRunner {
    /// Runs the search.
    ///
    /// # Errors
    /// Returns [`GroupingError::InvalidConfig`](crate::GroupingError::InvalidConfig)
    /// if the configuration is invalid.
    pub fn run(model: &AffinityModel, config: &SearchConfig) -> Result<SearchResult> {
        Self::run_with_cancel(model, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// If `cancel` is set, the search stops before the next trial (or
    /// before the parallel batch) and returns the best outcome so far.
    pub fn run_with_cancel(
        model: &AffinityModel,
        config: &SearchConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let seeds: Vec<u64> = (0..config.trials).map(|_| rng.random()).collect();

        let mut tracker = BestSoFar::with_capacity(config.trials);
        let cancelled = execute(&seeds, model, config, cancel.as_deref(), &mut tracker);

        Ok(tracker.finish(config, cancelled))
    }

    /// Runs a single trial: shuffle, assign, balance, evaluate.
    ///
    /// Deterministic for a given `seed`.
    pub fn run_trial(
        trial: usize,
        seed: u64,
        model: &AffinityModel,
        config: &SearchConfig,
    ) -> TrialOutcome {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut order = model.population().to_vec();
        order.shuffle(&mut rng);

        let mut partition =
            GreedyAssigner::new(config.weights).assign(&order, model, config.group_count);

        let target = partition.len() / config.group_count;
        let stats = Balancer::new(config.balance_policy)
            .with_strict_bounds(config.strict_balance)
            .balance(&mut partition, target, model);

        let evaluation = Evaluator::evaluate(&partition, model);

        debug!(
            trial,
            seed,
            percentage = evaluation.percentage,
            successes = evaluation.successes,
            total = evaluation.total,
            balance_moves = stats.moves,
            "trial evaluated"
        );

        TrialOutcome {
            trial,
            seed,
            partition,
            evaluation,
            balance_moves: stats.moves,
        }
    }
}

#[cfg(feature = "parallel")]
fn execute(
    seeds: &[u64],
    model: &AffinityModel,
    config: &SearchConfig,
    cancel: Option<&AtomicBool>,
    tracker: &mut BestSoFar,
) -> bool {
    if config.parallel {
        run_parallel(seeds, model, config, cancel, tracker)
    } else {
        run_sequential(seeds, model, config, cancel, tracker)
    }
}

#[cfg(not(feature = "parallel"))]
fn execute(
    seeds: &[u64],
    model: &AffinityModel,
    config: &SearchConfig,
    cancel: Option<&AtomicBool>,
    tracker: &mut BestSoFar,
) -> bool {
    run_sequential(seeds, model, config, cancel, tracker)
}

/// Returns `true` if cancelled.
fn run_sequential(
    seeds: &[u64],
    model: &AffinityModel,
    config: &SearchConfig,
    cancel: Option<&AtomicBool>,
    tracker: &mut BestSoFar,
) -> bool {
    for (trial, &seed) in seeds.iter().enumerate() {
        if is_cancelled(cancel) {
            return true;
        }
        tracker.offer(SearchRunner::run_trial(trial, seed, model, config));
    }
    false
}

/// Returns `true` if cancelled.
#[cfg(feature = "parallel")]
fn run_parallel(
    seeds: &[u64],
    model: &AffinityModel,
    config: &SearchConfig,
    cancel: Option<&AtomicBool>,
    tracker: &mut BestSoFar,
) -> bool {
    if is_cancelled(cancel) {
        return true;
    }

    let outcomes: Vec<TrialOutcome> = seeds
        .par_iter()
        .enumerate()
        .map(|(trial, &seed)| SearchRunner::run_trial(trial, seed, model, config))
        .collect();

    // Fold in trial order so ties resolve as in the sequential path.
    for outcome in outcomes {
        tracker.offer(outcome);
    }
    false
}

fn is_cancelled(cancel: Option<&AtomicBool>) -> bool {
    cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
}

/// Best-so-far holder. Replaced whole, never patched.
struct BestSoFar {
    best: Option<TrialOutcome>,
    trial_percentages: Vec<f64>,
    percentage_history: Vec<f64>,
}

impl BestSoFar {
    fn with_capacity(trials: usize) -> Self {
        Self {
            best: None,
            trial_percentages: Vec::with_capacity(trials),
            percentage_history: Vec::with_capacity(trials),
        }
    }

    fn offer(&mut self, outcome: TrialOutcome) {
        self.trial_percentages.push(outcome.evaluation.percentage);

        let replace = match &self.best {
            None => true,
            Some(best) => outcome.evaluation.improves_on(&best.evaluation),
        };
        if replace {
            debug!(
                trial = outcome.trial,
                percentage = outcome.evaluation.percentage,
                "new best"
            );
            self.best = Some(outcome);
        }

        let best_percentage = self
            .best
            .as_ref()
            .map_or(0.0, |b| b.evaluation.percentage);
        self.percentage_history.push(best_percentage);
    }

    fn finish(self, config: &SearchConfig, cancelled: bool) -> SearchResult {
        let trials_run = self.trial_percentages.len();

        let result = match self.best {
            Some(best) => SearchResult {
                best: best.partition,
                best_evaluation: best.evaluation,
                best_trial: Some(best.trial),
                best_seed: Some(best.seed),
                trials_run,
                cancelled,
                trial_percentages: self.trial_percentages,
                percentage_history: self.percentage_history,
            },
            None => SearchResult {
                best: Partition::new(config.group_count),
                best_evaluation: Evaluation::default(),
                best_trial: None,
                best_seed: None,
                trials_run,
                cancelled,
                trial_percentages: self.trial_percentages,
                percentage_history: self.percentage_history,
            },
        };

        info!(
            trials_run,
            cancelled,
            best_trial = ?result.best_trial,
            successes = result.best_evaluation.successes,
            total = result.best_evaluation.total,
            percentage = result.best_evaluation.percentage,
            "search finished"
        );

        result
    }
}

// ============================================================================
// Tests
// ============================================================================
