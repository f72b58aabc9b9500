//! Interactive view of a simulated ALNS run.
//!
//! Simulates a short run with two destroy and two repair operators, collects
//! its statistics, and opens a window with the three report charts.
//!
//! # Usage
//!
//! ```text
//! cargo run --example report
//! cargo run --example report -- 500
//! cargo run --example report -- 500 best better
//! ```
//!
//! The first argument is the number of iterations (default 250). Any further
//! arguments replace the outcome legend; passing two labels shows only the
//! best and better counts.

use std::error::Error;

use rand::{Rng, SeedableRng, rngs::StdRng};

use alns_plot::{PlotOptions, PlotSurface, ShowConfig};
use alns_report::{
    CountsConfig, FigureConfig, ObjectivesConfig, OperatorMap, Outcome, OutcomeCounts, Report,
    Statistics,
};

const DESTROY: [&str; 2] = ["random_removal", "worst_removal"];
const REPAIR: [&str; 2] = ["greedy_insert", "regret_insert"];

/// Weight update scores for best, better, accepted and rejected outcomes.
const SCORES: [f64; 4] = [25.0, 5.0, 1.0, 0.0];
const DECAY: f64 = 0.8;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let iterations = args
        .next()
        .map(|arg| arg.parse::<usize>())
        .transpose()?
        .unwrap_or(250);
    let legend: Vec<String> = args.collect();

    let report = simulate(iterations, 42);

    let mut counts = CountsConfig::new().title("Operator outcomes");
    if !legend.is_empty() {
        counts = counts.legend(legend)?;
    }

    let options = PlotOptions::new().line_width(1.5);
    let mut surface = PlotSurface::new();
    report.plot_objectives(&mut surface, &ObjectivesConfig::new(), &options)?;
    report.plot_operator_weights(
        &mut surface,
        &FigureConfig::new().title("Operator weights"),
        &options,
    )?;
    report.plot_operator_counts(&mut surface, &counts, &options)?;

    surface.show(ShowConfig::new().title("Simulated ALNS run").size(960.0, 720.0))?;

    Ok(())
}

/// Runs a toy ALNS loop that only tracks objective values and operator
/// bookkeeping; the "solution" is the best objective value itself.
fn simulate(iterations: usize, seed: u64) -> Report<f64> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut destroy = Operators::new(&DESTROY);
    let mut repair = Operators::new(&REPAIR);

    let mut current = 100.0_f64;
    let mut best = current;
    let mut objectives = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let d = destroy.select(&mut rng);
        let r = repair.select(&mut rng);

        // Operators with a higher index are slightly better on average.
        let skill = 0.2 * (d + r) as f64;
        let candidate = current + rng.random_range(-3.0..2.0) - skill;

        let outcome = if candidate < best {
            Outcome::Best
        } else if candidate < current {
            Outcome::Better
        } else if rng.random::<f64>() < 0.1 {
            Outcome::Accepted
        } else {
            Outcome::Rejected
        };

        if outcome != Outcome::Rejected {
            current = candidate;
        }
        best = best.min(current);
        objectives.push(current);

        destroy.update(d, outcome);
        repair.update(r, outcome);
    }

    let mut stats = Statistics::new().with_objectives(objectives);
    for (name, (weights, counts)) in destroy.finish() {
        stats = stats.with_destroy_operator(name, weights, counts);
    }
    for (name, (weights, counts)) in repair.finish() {
        stats = stats.with_repair_operator(name, weights, counts);
    }

    Report::new(best, Some(stats))
}

/// Roulette wheel operator selection with per-iteration weight history.
struct Operators {
    names: Vec<&'static str>,
    weights: Vec<f64>,
    history: Vec<Vec<f64>>,
    counts: Vec<OutcomeCounts>,
}

impl Operators {
    fn new(names: &[&'static str]) -> Self {
        Self {
            names: names.to_vec(),
            weights: vec![1.0; names.len()],
            history: vec![Vec::new(); names.len()],
            counts: vec![OutcomeCounts::default(); names.len()],
        }
    }

    fn select(&self, rng: &mut StdRng) -> usize {
        let total: f64 = self.weights.iter().sum();
        let mut pick = rng.random::<f64>() * total;
        for (i, weight) in self.weights.iter().enumerate() {
            if pick < *weight {
                return i;
            }
            pick -= weight;
        }
        self.weights.len() - 1
    }

    fn update(&mut self, selected: usize, outcome: Outcome) {
        let score = SCORES[outcome.index()];
        self.weights[selected] = DECAY * self.weights[selected] + (1.0 - DECAY) * score;
        self.counts[selected].record(outcome);
        for (history, weight) in self.history.iter_mut().zip(&self.weights) {
            history.push(*weight);
        }
    }

    fn finish(self) -> OperatorMap<(Vec<f64>, OutcomeCounts)> {
        self.names
            .into_iter()
            .zip(self.history.into_iter().zip(self.counts))
            .collect()
    }
}
