//! Fixed, labelled groups and their members.

use std::collections::HashMap;

use super::affinity::Individual;

/// One labelled group of a [`Partition`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    label: String,
    members: Vec<Individual>,
}

impl Group {
    fn new(label: String) -> Self {
        Self {
            label,
            members: Vec::new(),
        }
    }

    /// Stable label, `"Group1"` through `"GroupN"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Members in insertion order. Order carries no meaning.
    pub fn members(&self) -> &[Individual] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, individual: &str) -> bool {
        self.members.iter().any(|m| m == individual)
    }
}

/// Assignment of individuals to a fixed number of groups.
///
/// Group indices are `0..group_count()` and map one-to-one onto the
/// labels `"Group1".."GroupN"`. Only the assigner and the balancer mutate
/// a partition; everything downstream treats it as frozen.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    groups: Vec<Group>,
}

impl Partition {
    /// Creates `group_count` empty groups.
    pub fn new(group_count: usize) -> Self {
        Self {
            groups: (0..group_count).map(|i| Group::new(group_label(i))).collect(),
        }
    }

    /// Builds a partition from explicit member lists, one per group.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_grouping::model::Partition;
    ///
    /// let partition = Partition::from_members(vec![vec!["a", "b"], vec!["c"]]);
    /// assert_eq!(partition.group_count(), 2);
    /// assert_eq!(partition.groups()[1].label(), "Group2");
    /// assert_eq!(partition.group_of("c"), Some(1));
    /// ```
    pub fn from_members<S: Into<Individual>>(groups: Vec<Vec<S>>) -> Self {
        let mut partition = Self::new(groups.len());
        for (index, members) in groups.into_iter().enumerate() {
            for member in members {
                partition.push(index, member.into());
            }
        }
        partition
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of placed individuals across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Returns `true` if no individual has been placed.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Group::is_empty)
    }

    /// Current size of every group, in group order.
    pub fn sizes(&self) -> Vec<usize> {
        self.groups.iter().map(Group::len).collect()
    }

    /// Index of the group holding `individual`, if placed.
    pub fn group_of(&self, individual: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.contains(individual))
    }

    pub fn contains(&self, individual: &str) -> bool {
        self.group_of(individual).is_some()
    }

    /// Lookup table from individual to group index.
    pub fn member_index(&self) -> HashMap<&str, usize> {
        self.groups
            .iter()
            .enumerate()
            .flat_map(|(index, group)| group.members.iter().map(move |m| (m.as_str(), index)))
            .collect()
    }

    pub(crate) fn push(&mut self, index: usize, individual: Individual) {
        self.groups[index].members.push(individual);
    }

    pub(crate) fn remove(&mut self, index: usize, position: usize) -> Individual {
        self.groups[index].members.remove(position)
    }
}

fn group_label(index: usize) -> String {
    format!("Group{}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_one_based() {
        let partition = Partition::new(3);
        let labels: Vec<&str> = partition.groups().iter().map(Group::label).collect();
        assert_eq!(labels, ["Group1", "Group2", "Group3"]);
        assert!(partition.is_empty());
    }

    #[test]
    fn test_sizes_and_len() {
        let partition = Partition::from_members(vec![vec!["a", "b", "c"], vec![], vec!["d"]]);
        assert_eq!(partition.sizes(), vec![3, 0, 1]);
        assert_eq!(partition.len(), 4);
        assert!(!partition.is_empty());
    }

    #[test]
    fn test_member_index() {
        let partition = Partition::from_members(vec![vec!["a"], vec!["b", "c"]]);
        let index = partition.member_index();
        assert_eq!(index.get("a"), Some(&0));
        assert_eq!(index.get("c"), Some(&1));
        assert_eq!(index.get("z"), None);
        assert!(!partition.contains("z"));
    }

    #[test]
    fn test_remove_and_push() {
        let mut partition = Partition::from_members(vec![vec!["a", "b"], vec![]]);
        let moved = partition.remove(0, 1);
        partition.push(1, moved);
        assert_eq!(partition.group_of("b"), Some(1));
        assert_eq!(partition.sizes(), vec![1, 1]);
    }
}
