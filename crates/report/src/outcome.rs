/// Classification of one iteration's result for the operator that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Outcome {
    /// The candidate became the new global best.
    Best,

    /// The candidate improved on the current solution.
    Better,

    /// The candidate did not improve, but was accepted anyway.
    Accepted,

    /// The candidate was rejected.
    Rejected,
}

impl Outcome {
    /// Every outcome, in count-vector order.
    pub const ALL: [Outcome; 4] = [
        Outcome::Best,
        Outcome::Better,
        Outcome::Accepted,
        Outcome::Rejected,
    ];

    /// Position of this outcome in an [`OutcomeCounts`] vector.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Outcome::Best => 0,
            Outcome::Better => 1,
            Outcome::Accepted => 2,
            Outcome::Rejected => 3,
        }
    }

    /// Default legend text for this outcome.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Best => "Best",
            Outcome::Better => "Better",
            Outcome::Accepted => "Accepted",
            Outcome::Rejected => "Rejected",
        }
    }
}

/// How often an operator produced each [`Outcome`].
///
/// Entries are ordered `[best, better, accepted, rejected]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OutcomeCounts([u64; 4]);

impl OutcomeCounts {
    #[must_use]
    pub fn new(counts: [u64; 4]) -> Self {
        Self(counts)
    }

    #[must_use]
    pub fn get(&self, outcome: Outcome) -> u64 {
        self.0[outcome.index()]
    }

    /// Counts one more occurrence of `outcome`.
    pub fn record(&mut self, outcome: Outcome) {
        let slot = &mut self.0[outcome.index()];
        *slot = slot.saturating_add(1);
    }

    #[must_use]
    pub fn as_array(&self) -> &[u64; 4] {
        &self.0
    }

    /// Number of iterations in which the operator was applied.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().fold(0_u64, |acc, &n| acc.saturating_add(n))
    }
}

impl From<[u64; 4]> for OutcomeCounts {
    fn from(counts: [u64; 4]) -> Self {
        Self(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_count_vector_order() {
        for (i, outcome) in Outcome::ALL.into_iter().enumerate() {
            assert_eq!(outcome.index(), i);
        }
    }

    #[test]
    fn record_increments_only_the_given_outcome() {
        let mut counts = OutcomeCounts::default();
        counts.record(Outcome::Accepted);
        counts.record(Outcome::Accepted);
        counts.record(Outcome::Best);

        assert_eq!(counts.as_array(), &[1, 0, 2, 0]);
        assert_eq!(counts.get(Outcome::Accepted), 2);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn record_saturates() {
        let mut counts = OutcomeCounts::new([0, 0, 0, u64::MAX]);
        counts.record(Outcome::Rejected);
        assert_eq!(counts.get(Outcome::Rejected), u64::MAX);
        assert_eq!(counts.total(), u64::MAX);
    }
}
