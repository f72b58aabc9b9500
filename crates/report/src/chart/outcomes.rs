//! Stacked horizontal bar layout of operator outcomes.
//!
//! # Layout
//!
//! Each operator gets one horizontal bar (one row, in the operator map's
//! insertion order). The bar is split into one segment per outcome type,
//! placed end to end: the segment for type `k` starts where the segments for
//! types `0..k` end, so its start is the cumulative count minus its own count.
//!
//! Segments of the same outcome type across all operators form an
//! [`OutcomeLayer`], which lets a renderer draw one stacked pass per type and
//! give each type its own colour and legend entry. Every segment carries its
//! count as label text, centred on the segment.
//!
//! All bars share one horizontal scale, [`OutcomeLayout::x_max`], the widest
//! total stack over all operators.
//!
//! # Legend
//!
//! The number of outcome types shown is the length of the [`Legend`]. A legend
//! with fewer than four labels keeps only the leading outcome types, so a
//! two-label legend shows best and better counts and ignores the rest.


use crate::{Error, OperatorMap, Outcome, OutcomeCounts};

/// Maximum number of outcome types, and so of legend labels.
pub const MAX_TYPES: usize = 4;

/// Legend labels for the outcome types, one per type shown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Legend {
    labels: Vec<String>,
}

impl Legend {
    /// Creates a legend from caller-supplied labels.
    ///
    /// The first label describes the best count, the second the better count,
    /// and so on in [`Outcome`] order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLegend`] unless there are between one and
    /// [`MAX_TYPES`] labels.
    pub fn new<I, L>(labels: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        check_num_types(labels.len())?;
        Ok(Self { labels })
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of outcome types this legend describes.
    #[must_use]
    pub fn num_types(&self) -> usize {
        self.labels.len()
    }
}

impl Default for Legend {
    /// `["Best", "Better", "Accepted", "Rejected"]`.
    fn default() -> Self {
        Self {
            labels: Outcome::ALL
                .iter()
                .map(|outcome| outcome.label().to_owned())
                .collect(),
        }
    }
}

/// One operator's stacked bar.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OutcomeBars {
    pub operator_name: String,

    /// Width of each segment, which is the count for that outcome type.
    pub segment_widths: Vec<f64>,

    /// Left edge of each segment: the sum of all earlier widths.
    pub segment_starts: Vec<f64>,
}

impl OutcomeBars {
    /// Right edge of the whole bar.
    #[must_use]
    pub fn end(&self) -> f64 {
        match (self.segment_starts.last(), self.segment_widths.last()) {
            (Some(start), Some(width)) => start + width,
            _ => 0.0,
        }
    }
}

/// One segment within an [`OutcomeLayer`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segment {
    /// Row of the operator this segment belongs to.
    pub row: usize,

    pub start: f64,
    pub width: f64,

    /// Count shown on the segment.
    pub count: u64,
}

impl Segment {
    /// Horizontal centre of the segment, where its label is placed.
    #[must_use]
    pub fn label_position(&self) -> f64 {
        self.start + self.width / 2.0
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.count.to_string()
    }
}

/// All segments of one outcome type, one per operator row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OutcomeLayer {
    /// Index of the outcome type, in `0..num_types`.
    pub type_index: usize,

    pub segments: Vec<Segment>,
}

/// The complete stacked bar layout for one operator category.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OutcomeLayout {
    bars: Vec<OutcomeBars>,
    layers: Vec<OutcomeLayer>,
    x_max: f64,
}

impl OutcomeLayout {
    /// Bars in operator order, top row first.
    #[must_use]
    pub fn bars(&self) -> &[OutcomeBars] {
        &self.bars
    }

    /// Layers in outcome-type order.
    #[must_use]
    pub fn layers(&self) -> &[OutcomeLayer] {
        &self.layers
    }

    /// Operator names in row order.
    pub fn operator_names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.bars.iter().map(|bar| bar.operator_name.as_str())
    }

    /// Number of outcome types in the layout.
    #[must_use]
    pub fn num_types(&self) -> usize {
        self.layers.len()
    }

    /// Upper bound of the shared horizontal axis.
    ///
    /// Zero when there are no operators.
    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }
}

/// Builds the stacked layout from the first `num_types` outcome counts of
/// each operator.
///
/// # Errors
///
/// Returns [`Error::InvalidLegend`] unless `num_types` is in `1..=4`. This is
/// checked before anything is built.
///
/// # Limits
///
/// Counts are exact as long as every row total stays below 2^53, far beyond
/// any real iteration count. Above that the `f64` starts and widths round.
/// Row totals past `u64::MAX` saturate, so the starts of later segments
/// stop at `u64::MAX` and no longer equal the sum of earlier widths.
#[allow(clippy::cast_precision_loss)]
pub fn build(
    operator_counts: &OperatorMap<OutcomeCounts>,
    num_types: usize,
) -> Result<OutcomeLayout, Error> {
    check_num_types(num_types)?;

    let counts: Vec<&[u64]> = operator_counts
        .values()
        .map(|counts| &counts.as_array()[..num_types])
        .collect();

    let cumulative: Vec<Vec<u64>> = counts
        .iter()
        .map(|row| {
            row.iter()
                .scan(0_u64, |sum, &n| {
                    *sum = sum.saturating_add(n);
                    Some(*sum)
                })
                .collect()
        })
        .collect();

    let x_max = cumulative
        .iter()
        .filter_map(|row| row.last())
        .max()
        .copied()
        .unwrap_or(0);

    let mut bars: Vec<OutcomeBars> = operator_counts
        .names()
        .map(|name| OutcomeBars {
            operator_name: name.to_owned(),
            segment_widths: Vec::with_capacity(num_types),
            segment_starts: Vec::with_capacity(num_types),
        })
        .collect();

    let mut layers = Vec::with_capacity(num_types);
    for k in 0..num_types {
        let mut segments = Vec::with_capacity(bars.len());

        for (row, bar) in bars.iter_mut().enumerate() {
            let count = counts[row][k];
            let start = (cumulative[row][k] - count) as f64;
            let width = count as f64;

            bar.segment_widths.push(width);
            bar.segment_starts.push(start);
            segments.push(Segment {
                row,
                start,
                width,
                count,
            });
        }

        layers.push(OutcomeLayer {
            type_index: k,
            segments,
        });
    }

    tracing::debug!(
        operators = bars.len(),
        num_types,
        x_max,
        "built outcome layout"
    );

    Ok(OutcomeLayout {
        bars,
        layers,
        x_max: x_max as f64,
    })
}

fn check_num_types(found: usize) -> Result<(), Error> {
    if (1..=MAX_TYPES).contains(&found) {
        Ok(())
    } else {
        Err(Error::InvalidLegend { found })
    }
}
