//! Per-iteration statistics of a finished run.
//!
//! The [`Telemetry`] trait is the read-only view the chart builders consume.
//! [`Statistics`] is an immutable snapshot implementing it, for callers that
//! do not already have their own statistics type.

use crate::{OperatorMap, OutcomeCounts};

/// Read-only access to the statistics collected during a run.
pub trait Telemetry {
    /// Objective value of the current solution at each iteration.
    fn objectives(&self) -> &[f64];

    /// Weight of each destroy operator at each iteration.
    fn destroy_weights(&self) -> &OperatorMap<Vec<f64>>;

    /// Weight of each repair operator at each iteration.
    fn repair_weights(&self) -> &OperatorMap<Vec<f64>>;

    /// Outcome counts of each destroy operator.
    fn destroy_outcome_counts(&self) -> &OperatorMap<OutcomeCounts>;

    /// Outcome counts of each repair operator.
    fn repair_outcome_counts(&self) -> &OperatorMap<OutcomeCounts>;
}

/// An immutable snapshot of a run's statistics.
///
/// Built once with the consuming `with_*` methods, then handed to a
/// [`Report`](crate::Report).
///
/// # Example
///
/// ```
/// use alns_report::{OutcomeCounts, Statistics, Telemetry};
///
/// let stats = Statistics::new()
///     .with_objectives(vec![10.0, 8.0, 9.0])
///     .with_destroy_operator("random", vec![1.0, 1.2, 1.1], OutcomeCounts::new([1, 1, 0, 1]))
///     .with_repair_operator("greedy", vec![1.0, 1.0, 1.3], OutcomeCounts::new([1, 1, 0, 1]));
///
/// assert_eq!(stats.objectives(), &[10.0, 8.0, 9.0]);
/// assert_eq!(stats.destroy_weights().names().collect::<Vec<_>>(), ["random"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Statistics {
    objectives: Vec<f64>,
    destroy_weights: OperatorMap<Vec<f64>>,
    repair_weights: OperatorMap<Vec<f64>>,
    destroy_outcome_counts: OperatorMap<OutcomeCounts>,
    repair_outcome_counts: OperatorMap<OutcomeCounts>,
}

impl Statistics {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-iteration objective values.
    #[must_use]
    pub fn with_objectives(mut self, objectives: Vec<f64>) -> Self {
        self.objectives = objectives;
        self
    }

    /// Adds (or replaces) a destroy operator's weights and outcome counts.
    #[must_use]
    pub fn with_destroy_operator(
        mut self,
        name: impl Into<String>,
        weights: Vec<f64>,
        counts: OutcomeCounts,
    ) -> Self {
        let name = name.into();
        self.destroy_weights.insert(name.clone(), weights);
        self.destroy_outcome_counts.insert(name, counts);
        self
    }

    /// Adds (or replaces) a repair operator's weights and outcome counts.
    #[must_use]
    pub fn with_repair_operator(
        mut self,
        name: impl Into<String>,
        weights: Vec<f64>,
        counts: OutcomeCounts,
    ) -> Self {
        let name = name.into();
        self.repair_weights.insert(name.clone(), weights);
        self.repair_outcome_counts.insert(name, counts);
        self
    }
}

impl Telemetry for Statistics {
    fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    fn destroy_weights(&self) -> &OperatorMap<Vec<f64>> {
        &self.destroy_weights
    }

    fn repair_weights(&self) -> &OperatorMap<Vec<f64>> {
        &self.repair_weights
    }

    fn destroy_outcome_counts(&self) -> &OperatorMap<OutcomeCounts> {
        &self.destroy_outcome_counts
    }

    fn repair_outcome_counts(&self) -> &OperatorMap<OutcomeCounts> {
        &self.repair_outcome_counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_are_kept_per_category_in_order() {
        let stats = Statistics::new()
            .with_destroy_operator("d2", vec![1.0], OutcomeCounts::default())
            .with_repair_operator("r1", vec![2.0], OutcomeCounts::new([0, 0, 0, 1]))
            .with_destroy_operator("d1", vec![3.0], OutcomeCounts::new([1, 0, 0, 0]));

        assert_eq!(stats.destroy_weights().names().collect::<Vec<_>>(), ["d2", "d1"]);
        assert_eq!(
            stats.destroy_outcome_counts().names().collect::<Vec<_>>(),
            ["d2", "d1"]
        );
        assert_eq!(stats.repair_weights().get("r1"), Some(&vec![2.0]));
        assert_eq!(
            stats.repair_outcome_counts().get("r1"),
            Some(&OutcomeCounts::new([0, 0, 0, 1]))
        );
    }

    #[test]
    fn replacing_an_operator_keeps_its_position() {
        let stats = Statistics::new()
            .with_destroy_operator("a", vec![1.0], OutcomeCounts::default())
            .with_destroy_operator("b", vec![1.0], OutcomeCounts::default())
            .with_destroy_operator("a", vec![5.0], OutcomeCounts::new([2, 0, 0, 0]));

        assert_eq!(stats.destroy_weights().names().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(stats.destroy_weights().get("a"), Some(&vec![5.0]));
    }
}
