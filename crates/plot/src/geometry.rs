//! Plot coordinates for report figures.
//!
//! Everything here is independent of egui so the placement rules can be
//! tested without opening a window.

use alns_report::chart::{
    TrajectoryChart, WeightPanel,
    outcomes::{OutcomeLayer, OutcomeLayout},
};

/// A named polyline.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Trace {
    pub(crate) name: String,
    pub(crate) points: Vec<[f64; 2]>,
}

/// One horizontal bar segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BarRect {
    /// Vertical centre of the bar.
    pub(crate) y: f64,
    pub(crate) start: f64,
    pub(crate) width: f64,
}

/// A count label centred on a bar segment.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CountLabel {
    pub(crate) position: [f64; 2],
    pub(crate) text: String,
}

/// Current and best traces, in that order, against the iteration number.
pub(crate) fn trajectory_traces(chart: &TrajectoryChart) -> [Trace; 2] {
    let [current, best] = &chart.labels;
    [
        Trace {
            name: current.clone(),
            points: by_iteration(&chart.series.current),
        },
        Trace {
            name: best.clone(),
            points: by_iteration(&chart.series.running_best),
        },
    ]
}

/// One trace per operator, named after it.
pub(crate) fn weight_traces(panel: &WeightPanel) -> Vec<Trace> {
    panel
        .series
        .iter()
        .map(|series| Trace {
            name: series.name.clone(),
            points: by_iteration(&series.values),
        })
        .collect()
}

/// Vertical position of an operator row.
///
/// Row 0 is drawn at the top, so operators read top to bottom in the order
/// the run registered them.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn row_position(row: usize, rows: usize) -> f64 {
    rows.saturating_sub(row + 1) as f64
}

/// Operator name for a y-axis grid value, if it falls exactly on a row.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn row_name(layout: &OutcomeLayout, y: f64) -> Option<&str> {
    let rows = layout.bars().len();
    if y < 0.0 || y.fract() != 0.0 || y >= rows as f64 {
        return None;
    }
    let row = rows - 1 - y as usize;
    layout.bars().get(row).map(|bar| bar.operator_name.as_str())
}

pub(crate) fn layer_rects(layer: &OutcomeLayer, rows: usize) -> Vec<BarRect> {
    layer
        .segments
        .iter()
        .map(|segment| BarRect {
            y: row_position(segment.row, rows),
            start: segment.start,
            width: segment.width,
        })
        .collect()
}

pub(crate) fn layer_labels(layer: &OutcomeLayer, rows: usize) -> Vec<CountLabel> {
    layer
        .segments
        .iter()
        .map(|segment| CountLabel {
            position: [segment.label_position(), row_position(segment.row, rows)],
            text: segment.text(),
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn by_iteration(values: &[f64]) -> Vec<[f64; 2]> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| [i as f64, value])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use alns_report::{
        OperatorMap, OutcomeCounts,
        chart::{outcomes, trajectory, weights},
    };

    fn layout() -> OutcomeLayout {
        let counts: OperatorMap<OutcomeCounts> = [
            ("top", OutcomeCounts::new([3, 1, 2, 0])),
            ("bottom", OutcomeCounts::new([0, 2, 0, 1])),
        ]
        .into_iter()
        .collect();
        outcomes::build(&counts, 4).expect("valid num_types")
    }

    #[test]
    fn trajectory_traces_follow_label_order() {
        let chart = TrajectoryChart::new("t", trajectory::build(&[4.0, 5.0, 1.0]));
        let [current, best] = trajectory_traces(&chart);

        assert_eq!(current.name, "Current");
        assert_eq!(current.points, [[0.0, 4.0], [1.0, 5.0], [2.0, 1.0]]);
        assert_eq!(best.name, "Best");
        assert_eq!(best.points, [[0.0, 4.0], [1.0, 4.0], [2.0, 1.0]]);
    }

    #[test]
    fn weight_traces_are_named_by_operator() {
        let map: OperatorMap<Vec<f64>> =
            [("B", vec![1.0]), ("A", vec![2.0, 3.0])].into_iter().collect();
        let panel = WeightPanel::new("Destroy operators", weights::build(&map));

        let traces = weight_traces(&panel);
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0].name, "B");
        assert_eq!(traces[1].name, "A");
        assert_eq!(traces[1].points, [[0.0, 2.0], [1.0, 3.0]]);
    }

    #[test]
    fn first_row_is_on_top() {
        assert_eq!(row_position(0, 3), 2.0);
        assert_eq!(row_position(2, 3), 0.0);
    }

    #[test]
    fn row_names_map_back_from_positions() {
        let layout = layout();
        assert_eq!(row_name(&layout, 1.0), Some("top"));
        assert_eq!(row_name(&layout, 0.0), Some("bottom"));
        assert_eq!(row_name(&layout, 0.5), None);
        assert_eq!(row_name(&layout, 2.0), None);
        assert_eq!(row_name(&layout, -1.0), None);
    }

    #[test]
    fn rects_use_layout_offsets() {
        let layout = layout();
        let accepted = layer_rects(&layout.layers()[2], 2);

        assert_eq!(
            accepted,
            [
                BarRect {
                    y: 1.0,
                    start: 4.0,
                    width: 2.0
                },
                BarRect {
                    y: 0.0,
                    start: 2.0,
                    width: 0.0
                },
            ]
        );
    }

    #[test]
    fn labels_sit_in_segment_centres() {
        let layout = layout();
        let best = layer_labels(&layout.layers()[0], 2);

        assert_eq!(best[0].position, [1.5, 1.0]);
        assert_eq!(best[0].text, "3");
        assert_eq!(best[1].position, [0.0, 0.0]);
        assert_eq!(best[1].text, "0");
    }
}
