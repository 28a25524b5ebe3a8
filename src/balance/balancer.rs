//! Overfull-to-underfull move loop.

use tracing::warn;

use crate::model::{AffinityModel, Partition};

/// Which member leaves an overfull group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BalancePolicy {
    /// Move the most recently added member, ignoring affinity.
    #[default]
    LastMember,

    /// Move the most recently added member that has none of its
    /// nominations in the overfull group. Falls back to
    /// [`LastMember`](BalancePolicy::LastMember) when every member is
    /// matched.
    UnmatchedFirst,
}

/// What a balancing pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BalanceStats {
    /// Number of individuals moved.
    pub moves: usize,

    /// Whether the pass stopped at its iteration cap rather than
    /// reaching the balance condition.
    pub capped: bool,
}

/// Reduces size skew between groups.
///
/// A group is *overfull* with more than `target + 1` members and
/// *underfull* with fewer than `target`. While both kinds exist, one
/// member moves from the first overfull group to the first underfull
/// group. Each move lowers the total absolute deviation from `target` by
/// two, so the loop terminates; it is also capped at twice the number of
/// placed individuals.
///
/// Moves may break an affinity match. That trade-off is accepted.
///
/// # Examples
///
/// ```
/// use u_grouping::balance::Balancer;
/// use u_grouping::model::{AffinityModel, Partition};
///
/// let mut partition = Partition::from_members(vec![vec!["a", "b", "c", "d"], vec![]]);
/// let stats = Balancer::default().balance(&mut partition, 2, &AffinityModel::default());
///
/// assert_eq!(partition.sizes(), vec![3, 1]);
/// assert_eq!(stats.moves, 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Balancer {
    policy: BalancePolicy,
    strict: bool,
}

impl Balancer {
    pub fn new(policy: BalancePolicy) -> Self {
        Self {
            policy,
            strict: false,
        }
    }

    /// Keeps moving until every group holds `target` or `target + 1`
    /// members.
    ///
    /// The plain loop stops as soon as overfull or underfull groups run
    /// out, which can leave e.g. sizes `[4, 3, 3, 2]` for a target of 3.
    /// In strict mode, once no overfull/underfull pair is left, a group
    /// above `target + 1` also donates to any group at `target`, and a
    /// group at `target + 1` also donates to an underfull group.
    pub fn with_strict_bounds(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn policy(&self) -> BalancePolicy {
        self.policy
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Balances `partition` in place around `target` members per group.
    pub fn balance(
        &self,
        partition: &mut Partition,
        target: usize,
        model: &AffinityModel,
    ) -> BalanceStats {
        // Every move lowers the summed excess above target + 1 plus the
        // summed deficit below target, which starts at most 2 * len.
        let cap = partition.len() * 2;
        let mut stats = BalanceStats::default();

        while let Some((donor, receiver)) = self.next_move(&partition.sizes(), target) {
            if stats.moves >= cap {
                warn!(
                    moves = stats.moves,
                    target, "balancing stopped at iteration cap"
                );
                stats.capped = true;
                break;
            }

            let position = self.pick_member(partition, donor, model);
            let individual = partition.remove(donor, position);
            partition.push(receiver, individual);
            stats.moves += 1;
        }

        stats
    }

    /// Donor and receiver group of the next move, if any.
    fn next_move(&self, sizes: &[usize], target: usize) -> Option<(usize, usize)> {
        let overfull = first_group(sizes, |s| s > target + 1);
        let underfull = first_group(sizes, |s| s < target);

        if let (Some(d), Some(r)) = (overfull, underfull) {
            return Some((d, r));
        }
        if !self.strict {
            return None;
        }

        match (overfull, underfull) {
            (Some(d), None) => first_group(sizes, |s| s <= target).map(|r| (d, r)),
            (None, Some(r)) => first_group(sizes, |s| s > target).map(|d| (d, r)),
            _ => None,
        }
    }

    /// Position within `group` of the member to move.
    fn pick_member(&self, partition: &Partition, group: usize, model: &AffinityModel) -> usize {
        let members = partition.groups()[group].members();
        let last = members.len() - 1;

        match self.policy {
            BalancePolicy::LastMember => last,
            BalancePolicy::UnmatchedFirst => {
                let donor = &partition.groups()[group];
                members
                    .iter()
                    .rposition(|m| {
                        !model
                            .preferences_of(m)
                            .iter()
                            .any(|p| donor.contains(p))
                    })
                    .unwrap_or(last)
            }
        }
    }
}

fn first_group(sizes: &[usize], pred: impl Fn(usize) -> bool) -> Option<usize> {
    sizes.iter().position(|&s| pred(s))
}
