//! Partition scoring.
//!
//! An individual *succeeds* when at least one of their nominations sits in
//! the same group. The [`Evaluator`] reports the share of successes among
//! every individual that has a preference entry and appears in the
//! partition.

use std::fmt;

use crate::model::{AffinityModel, Partition};

/// Success metrics of one partition.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// `100 * successes / total`, or `0.0` when `total` is zero.
    pub percentage: f64,

    /// Individuals co-located with at least one nomination.
    pub successes: usize,

    /// Individuals evaluated.
    pub total: usize,
}

impl Evaluation {
    pub fn new(successes: usize, total: usize) -> Self {
        let percentage = if total > 0 {
            successes as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Self {
            percentage,
            successes,
            total,
        }
    }

    /// Strictly better than `other`. Equal percentages do not count.
    pub fn improves_on(&self, other: &Evaluation) -> bool {
        self.percentage > other.percentage
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({:.2}%)",
            self.successes, self.total, self.percentage
        )
    }
}

/// Stateless partition scorer.
///
/// # Examples
///
/// ```
/// use u_grouping::evaluate::Evaluator;
/// use u_grouping::model::{AffinityModel, Partition};
///
/// let model = AffinityModel::builder()
///     .with_individual("a", &["b"])
///     .with_individual("b", &["a"])
///     .with_individual("c", &["a"])
///     .build();
/// let partition = Partition::from_members(vec![vec!["a", "b"], vec!["c"]]);
///
/// let eval = Evaluator::evaluate(&partition, &model);
/// assert_eq!((eval.successes, eval.total), (2, 3));
/// ```
pub struct Evaluator;

impl Evaluator {
    /// Scores `partition` against the preferences in `model`.
    ///
    /// Individuals with an entry in `model` but missing from the partition
    /// are left out of both counts. An empty nomination list counts toward
    /// `total` and never succeeds.
    pub fn evaluate(partition: &Partition, model: &AffinityModel) -> Evaluation {
        let index = partition.member_index();

        let mut successes = 0;
        let mut total = 0;

        for (individual, nominated) in model.preferences() {
            let Some(&group) = index.get(individual.as_str()) else {
                continue;
            };

            if nominated
                .iter()
                .any(|p| index.get(p.as_str()) == Some(&group))
            {
                successes += 1;
            }
            total += 1;
        }

        Evaluation::new(successes, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (AffinityModel, Partition) {
        let model = AffinityModel::builder()
            .with_individual("A", &["B"])
            .with_individual("B", &["A"])
            .with_individual("C", &["D"])
            .with_individual("D", &[])
            .build();
        let partition = Partition::from_members(vec![vec!["A", "B"], vec!["C", "D"]]);
        (model, partition)
    }

    #[test]
    fn test_four_person_fixture() {
        let (model, partition) = fixture();
        let eval = Evaluator::evaluate(&partition, &model);

        assert_eq!(eval.successes, 3);
        assert_eq!(eval.total, 4);
        assert!((eval.percentage - 75.0).abs() < 1e-10);
        assert_eq!(eval.to_string(), "3/4 (75.00%)");
    }

    #[test]
    fn test_idempotent() {
        let (model, partition) = fixture();
        let first = Evaluator::evaluate(&partition, &model);
        let second = Evaluator::evaluate(&partition, &model);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_partition_is_zero() {
        let model = AffinityModel::default();
        let eval = Evaluator::evaluate(&Partition::new(3), &model);
        assert_eq!(eval, Evaluation::new(0, 0));
        assert_eq!(eval.percentage, 0.0);
    }

    #[test]
    fn test_absent_individuals_excluded() {
        let model = AffinityModel::builder()
            .with_individual("a", &["b"])
            .with_individual("b", &["a"])
            .with_detached_preferences("outsider", &["a"])
            .build();
        let partition = Partition::from_members(vec![vec!["a", "b"]]);

        let eval = Evaluator::evaluate(&partition, &model);
        assert_eq!((eval.successes, eval.total), (2, 2));
    }

    #[test]
    fn test_unknown_nomination_never_matches() {
        let model = AffinityModel::builder()
            .with_individual("a", &["ghost"])
            .build();
        let partition = Partition::from_members(vec![vec!["a"]]);

        let eval = Evaluator::evaluate(&partition, &model);
        assert_eq!((eval.successes, eval.total), (0, 1));
    }

    #[test]
    fn test_one_of_two_nominations_suffices() {
        let model = AffinityModel::builder()
            .with_individual("a", &["b", "c"])
            .with_individual("b", &[])
            .with_individual("c", &[])
            .build();
        let partition = Partition::from_members(vec![vec!["a", "c"], vec!["b"]]);

        let eval = Evaluator::evaluate(&partition, &model);
        assert_eq!(eval.successes, 1);
    }

    #[test]
    fn test_improves_on_is_strict() {
        let a = Evaluation::new(1, 2);
        let b = Evaluation::new(2, 4);
        assert!(!a.improves_on(&b));
        assert!(Evaluation::new(3, 4).improves_on(&b));
    }
}
