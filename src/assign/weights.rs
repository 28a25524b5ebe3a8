//! Candidate-group scoring weights.

/// Weights of the greedy placement score:
///
/// `score = preference_bonus * nominated_in_group - size_penalty * group_size`
///
/// With the defaults (10 and 1) a single shared preference outweighs a
/// ten-member size disadvantage, so affinity dominates balance during
/// assignment. Size skew is repaired afterwards by the balancer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffinityWeights {
    /// Reward per nominated co-member already in the candidate group.
    pub preference_bonus: i64,

    /// Penalty per member already in the candidate group.
    pub size_penalty: i64,
}

impl Default for AffinityWeights {
    fn default() -> Self {
        Self {
            preference_bonus: 10,
            size_penalty: 1,
        }
    }
}

impl AffinityWeights {
    pub fn with_preference_bonus(mut self, bonus: i64) -> Self {
        self.preference_bonus = bonus;
        self
    }

    pub fn with_size_penalty(mut self, penalty: i64) -> Self {
        self.size_penalty = penalty;
        self
    }

    /// Combines a nominated-member count and a group size into a score.
    pub fn combine(&self, nominated_in_group: usize, group_size: usize) -> i64 {
        self.preference_bonus * nominated_in_group as i64 - self.size_penalty * group_size as i64
    }
}
