//! Per-individual outcome rows.
//!
//! Re-derives, from a final partition and the preference data, which
//! nominations of each individual landed in their group. This is the data
//! an export or display layer needs; no I/O happens here.

use crate::model::{AffinityModel, Individual, Partition};

/// One row per placed individual.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberOutcome {
    /// Label of the individual's group.
    pub group: String,

    pub member: Individual,

    /// Every nomination, in declaration order.
    pub preferences: Vec<Individual>,

    /// The nominations that share the member's group.
    pub preferences_in_group: Vec<Individual>,

    /// `true` if at least one nomination shares the group.
    pub success: bool,
}

/// Builds outcome rows ordered by group, then by member name.
///
/// # Examples
///
/// ```
/// use u_grouping::model::{AffinityModel, Partition};
/// use u_grouping::report::member_outcomes;
///
/// let model = AffinityModel::builder()
///     .with_individual("a", &["b", "c"])
///     .with_individual("b", &[])
///     .with_individual("c", &[])
///     .build();
/// let partition = Partition::from_members(vec![vec!["c", "a"], vec!["b"]]);
///
/// let rows = member_outcomes(&partition, &model);
/// assert_eq!(rows[0].member, "a");
/// assert_eq!(rows[0].preferences_in_group, ["c"]);
/// assert!(rows[0].success);
/// assert!(!rows[2].success);
/// ```
pub fn member_outcomes(partition: &Partition, model: &AffinityModel) -> Vec<MemberOutcome> {
    let mut rows = Vec::with_capacity(partition.len());

    for group in partition.groups() {
        let mut members: Vec<&Individual> = group.members().iter().collect();
        members.sort();

        for member in members {
            let preferences = model.preferences_of(member).to_vec();
            let preferences_in_group: Vec<Individual> = preferences
                .iter()
                .filter(|p| group.contains(p))
                .cloned()
                .collect();

            rows.push(MemberOutcome {
                group: group.label().to_string(),
                member: member.clone(),
                success: !preferences_in_group.is_empty(),
                preferences,
                preferences_in_group,
            });
        }
    }

    rows
}
