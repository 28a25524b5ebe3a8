//! Individuals and their declared preferences.

use std::collections::HashMap;

/// Opaque identifier of a member of the population.
pub type Individual = String;

/// Read-only input to the grouping engine: the population and, for each
/// individual, the ordered list of co-members they nominated.
///
/// Construction normalizes the preference data:
///
/// - blank nominations (empty or whitespace-only) are omitted,
/// - self-nominations are dropped,
/// - every population member gets an entry, empty if nothing was declared.
///
/// Nominations of individuals outside the population are kept. They never
/// contribute to a score and never complete a match.
///
/// # Examples
///
/// ```
/// use u_grouping::model::AffinityModel;
///
/// let model = AffinityModel::builder()
///     .with_individual("ana", &["ben"])
///     .with_individual("ben", &["ana", "cleo"])
///     .with_individual("cleo", &[])
///     .build();
///
/// assert_eq!(model.len(), 3);
/// assert_eq!(model.preferences_of("ben"), ["ana", "cleo"]);
/// assert!(model.preferences_of("cleo").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AffinityModel {
    population: Vec<Individual>,
    preferences: HashMap<Individual, Vec<Individual>>,
}

impl AffinityModel {
    /// Builds a model from a population and a preference map.
    ///
    /// Preference keys that are not part of the population are retained;
    /// they are ignored by evaluation because they never appear in a
    /// partition.
    pub fn new(
        population: Vec<Individual>,
        preferences: HashMap<Individual, Vec<Individual>>,
    ) -> Self {
        let mut normalized: HashMap<Individual, Vec<Individual>> = preferences
            .into_iter()
            .map(|(who, nominated)| {
                let cleaned = clean_preferences(&who, nominated);
                (who, cleaned)
            })
            .collect();

        for who in &population {
            normalized.entry(who.clone()).or_default();
        }

        Self {
            population,
            preferences: normalized,
        }
    }

    /// Starts an incremental builder.
    pub fn builder() -> AffinityModelBuilder {
        AffinityModelBuilder::default()
    }

    /// The population in load order. Duplicates are tolerated.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Number of population entries (including duplicates).
    pub fn len(&self) -> usize {
        self.population.len()
    }

    /// Returns `true` if the population is empty.
    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    /// Nominations of `individual`, or an empty slice if unknown.
    pub fn preferences_of(&self, individual: &str) -> &[Individual] {
        self.preferences
            .get(individual)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `individual` has a preference entry (possibly empty).
    pub fn has_entry(&self, individual: &str) -> bool {
        self.preferences.contains_key(individual)
    }

    /// Iterates over every preference entry. Order is unspecified.
    pub fn preferences(&self) -> impl Iterator<Item = (&Individual, &[Individual])> {
        self.preferences
            .iter()
            .map(|(who, nominated)| (who, nominated.as_slice()))
    }
}

/// Incremental builder for [`AffinityModel`].
///
/// Individuals are appended to the population in call order. Adding the
/// same name twice appends a duplicate population entry and replaces the
/// earlier preference list.
#[derive(Debug, Clone, Default)]
pub struct AffinityModelBuilder {
    population: Vec<Individual>,
    preferences: HashMap<Individual, Vec<Individual>>,
}

impl AffinityModelBuilder {
    /// Adds an individual with its nominations.
    pub fn with_individual(mut self, name: &str, preferences: &[&str]) -> Self {
        self.population.push(name.to_string());
        self.preferences.insert(
            name.to_string(),
            preferences.iter().map(|p| p.to_string()).collect(),
        );
        self
    }

    /// Adds a preference entry without adding the individual to the
    /// population.
    pub fn with_detached_preferences(mut self, name: &str, preferences: &[&str]) -> Self {
        self.preferences.insert(
            name.to_string(),
            preferences.iter().map(|p| p.to_string()).collect(),
        );
        self
    }

    pub fn build(self) -> AffinityModel {
        AffinityModel::new(self.population, self.preferences)
    }
}

fn clean_preferences(who: &str, nominated: Vec<Individual>) -> Vec<Individual> {
    nominated
        .into_iter()
        .filter(|p| !p.trim().is_empty() && p != who)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entries_default_to_empty() {
        let model = AffinityModel::new(
            vec!["a".into(), "b".into()],
            HashMap::from([("a".to_string(), vec!["b".to_string()])]),
        );

        assert!(model.has_entry("b"));
        assert!(model.preferences_of("b").is_empty());
        assert_eq!(model.preferences_of("a"), ["b"]);
    }

    #[test]
    fn test_blank_and_self_nominations_dropped() {
        let model = AffinityModel::builder()
            .with_individual("a", &["", "  ", "a", "b"])
            .with_individual("b", &[])
            .build();

        assert_eq!(model.preferences_of("a"), ["b"]);
    }

    #[test]
    fn test_unknown_nominations_kept() {
        let model = AffinityModel::builder()
            .with_individual("a", &["ghost"])
            .build();

        assert_eq!(model.preferences_of("a"), ["ghost"]);
        assert!(!model.has_entry("ghost"));
    }

    #[test]
    fn test_unknown_individual_has_no_preferences() {
        let model = AffinityModel::default();
        assert!(model.is_empty());
        assert!(model.preferences_of("nobody").is_empty());
    }

    #[test]
    fn test_duplicates_tolerated() {
        let model = AffinityModel::builder()
            .with_individual("a", &["b"])
            .with_individual("a", &["c"])
            .build();

        assert_eq!(model.len(), 2);
        assert_eq!(model.preferences_of("a"), ["c"]);
        assert_eq!(model.preferences().count(), 1);
    }

    #[test]
    fn test_detached_preferences() {
        let model = AffinityModel::builder()
            .with_individual("a", &[])
            .with_detached_preferences("z", &["a"])
            .build();

        assert_eq!(model.len(), 1);
        assert!(model.has_entry("z"));
    }
}
