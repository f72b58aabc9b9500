//! Objective value trajectory with its running minimum.

/// Objective values of a run alongside the best value seen so far.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrajectorySeries {
    /// Objective of the current solution at each iteration.
    pub current: Vec<f64>,

    /// Running minimum of [`current`](Self::current).
    pub running_best: Vec<f64>,
}

impl TrajectorySeries {
    /// Series labels, in drawing order: current first, best second.
    pub const LABELS: [&'static str; 2] = ["Current", "Best"];

    pub const X_LABEL: &'static str = super::ITERATION_LABEL;
    pub const Y_LABEL: &'static str = "Objective value";

    #[must_use]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}

/// Builds the trajectory series for `objectives`.
///
/// `running_best[i]` is the minimum of `objectives[..=i]`. Once a NaN is
/// seen, every later running-best entry is NaN as well. An empty input gives
/// an empty series.
#[must_use]
pub fn build(objectives: &[f64]) -> TrajectorySeries {
    let running_best = objectives
        .iter()
        .scan(None::<f64>, |best, &value| {
            let next = match *best {
                Some(b) if b.is_nan() || value.is_nan() => f64::NAN,
                Some(b) => b.min(value),
                None => value,
            };
            *best = Some(next);
            Some(next)
        })
        .collect();

    TrajectorySeries {
        current: objectives.to_vec(),
        running_best,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{TrajectoryChart, WeightPanel};

    #[test]
    fn trajectory_and_weights_share_iteration_axis() {
        let chart = TrajectoryChart::new("t", build(&[1.0]));
        let panel = WeightPanel::new("Destroy operators", Vec::new());

        assert_eq!(chart.x_label, "Iteration (#)");
        assert_eq!(chart.x_label, panel.x_label);
    }

    #[test]
    fn running_best_is_prefix_minimum() {
        let series = build(&[5.0, 3.0, 4.0, 2.0, 6.0]);

        assert_eq!(series.current, [5.0, 3.0, 4.0, 2.0, 6.0]);
        assert_eq!(series.running_best, [5.0, 3.0, 3.0, 2.0, 2.0]);
    }

    #[test]
    fn running_best_is_non_increasing_and_matches_length() {
        let objectives = [7.5, 9.0, 7.5, 1.25, 3.0, -2.0, 0.0, -2.5];
        let series = build(&objectives);

        assert_eq!(series.len(), objectives.len());
        assert_eq!(series.running_best.len(), objectives.len());
        for pair in series.running_best.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
        for (i, &best) in series.running_best.iter().enumerate() {
            let expected = objectives[..=i].iter().copied().fold(f64::INFINITY, f64::min);
            assert_eq!(best, expected);
        }
    }

    #[test]
    fn empty_objectives_give_empty_series() {
        let series = build(&[]);
        assert!(series.is_empty());
        assert!(series.running_best.is_empty());
    }

    #[test]
    fn nan_propagates_forward() {
        let series = build(&[2.0, f64::NAN, 1.0]);
        assert_eq!(series.running_best[0], 2.0);
        assert!(series.running_best[1].is_nan());
        assert!(series.running_best[2].is_nan());
    }

    #[test]
    fn labels_are_current_then_best() {
        assert_eq!(TrajectorySeries::LABELS, ["Current", "Best"]);
        assert_eq!(TrajectorySeries::X_LABEL, "Iteration (#)");
        assert_eq!(TrajectorySeries::Y_LABEL, "Objective value");
    }
}
