//! Operator weight trajectories.

use crate::OperatorMap;

/// One operator's weight at each iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeightSeries {
    /// Operator name, used as the series label.
    pub name: String,

    pub values: Vec<f64>,
}

/// Builds one series per operator, in the map's insertion order.
///
/// The builder does not care whether the operators are destroy or repair
/// operators; callers build one panel per category.
#[must_use]
pub fn build(weights: &OperatorMap<Vec<f64>>) -> Vec<WeightSeries> {
    weights
        .iter()
        .map(|(name, values)| WeightSeries {
            name: name.to_owned(),
            values: values.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_operator_order() {
        let weights: OperatorMap<Vec<f64>> =
            [("A", vec![9.0, 9.0]), ("B", vec![0.0, 1.0])].into_iter().collect();

        let series = build(&weights);
        let names: Vec<_> = series.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn order_does_not_depend_on_values_or_names() {
        let weights: OperatorMap<Vec<f64>> = [
            ("zz", vec![0.1]),
            ("aa", vec![100.0]),
            ("mm", vec![]),
        ]
        .into_iter()
        .collect();

        let series = build(&weights);

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].name, "zz");
        assert_eq!(series[1].name, "aa");
        assert_eq!(series[2].name, "mm");
        assert_eq!(series[1].values, [100.0]);
        assert!(series[2].values.is_empty());
    }

    #[test]
    fn empty_map_gives_no_series() {
        assert!(build(&OperatorMap::new()).is_empty());
    }
}
