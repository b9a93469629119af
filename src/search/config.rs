//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use super::objective::Objective;

/// How candidate combinations are enumerated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnumerationPolicy {
    /// Per-character sequences, Cartesian product across characters.
    #[default]
    Independent,
    /// All distinct orderings of the global step multiset. Factorial cost;
    /// small parties only.
    Interleaved,
}

/// Cap on how many candidates a round evaluates.
///
/// Limits trade completeness for responsiveness; they never change the
/// correctness of the candidates that are evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateLimit {
    /// Evaluate everything the policy enumerates.
    #[default]
    None,
    /// Evaluate only the first `n` candidates in enumeration order.
    Cap(usize),
    /// Evaluate a deterministic uniform sample, kept in enumeration order.
    Sample { size: usize, seed: u64 },
}

/// Search driver configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Enumeration policy.
    pub policy: EnumerationPolicy,

    /// Scoring rule.
    pub objective: Objective,

    /// Candidate cap, if any.
    pub limit: CandidateLimit,

    /// Evaluate trials on the rayon pool, each against its own roster copy.
    /// The chosen winner is identical to the serial loop's.
    pub parallel: bool,

    /// Emit a progress event every this many trials (0 disables).
    /// Advisory only; never affects which candidate is chosen.
    pub progress_interval: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            policy: EnumerationPolicy::Independent,
            objective: Objective::weakest(),
            limit: CandidateLimit::None,
            parallel: false,
            progress_interval: 100_000,
        }
    }
}

impl SearchConfig {
    /// The interleaved reference setup: global orderings scored by the
    /// two-weakest sum.
    #[must_use]
    pub fn interleaved() -> Self {
        Self {
            policy: EnumerationPolicy::Interleaved,
            objective: Objective::two_weakest(),
            ..Self::default()
        }
    }

    /// Set the enumeration policy.
    #[must_use]
    pub fn with_policy(mut self, policy: EnumerationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the objective.
    #[must_use]
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Set the candidate limit.
    #[must_use]
    pub fn with_limit(mut self, limit: CandidateLimit) -> Self {
        self.limit = limit;
        self
    }

    /// Enable or disable parallel trials.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the progress interval.
    #[must_use]
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.policy, EnumerationPolicy::Independent);
        assert_eq!(config.objective, Objective::weakest());
        assert_eq!(config.limit, CandidateLimit::None);
        assert!(!config.parallel);
    }

    #[test]
    fn test_interleaved_reference_pairing() {
        let config = SearchConfig::interleaved();
        assert_eq!(config.policy, EnumerationPolicy::Interleaved);
        assert_eq!(config.objective, Objective::two_weakest());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_policy(EnumerationPolicy::Interleaved)
            .with_limit(CandidateLimit::Cap(500))
            .with_parallel(true)
            .with_progress_interval(10);

        assert_eq!(config.policy, EnumerationPolicy::Interleaved);
        assert_eq!(config.limit, CandidateLimit::Cap(500));
        assert!(config.parallel);
        assert_eq!(config.progress_interval, 10);
    }

    #[test]
    fn test_config_serialization() {
        let config = SearchConfig::default().with_limit(CandidateLimit::Sample {
            size: 100,
            seed: 7,
        });
        let json = serde_json::to_string(&config).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.limit, back.limit);
    }
}
