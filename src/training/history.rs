//! Per-round training history.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Parallel, append-only records indexed by round.
///
/// Round `0` is the bias round; round `k > 0` froze the `k`-th stump term.
/// Every vector present has one entry per completed round.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoostHistory {
    /// Candidate index frozen each round (`None` for the bias round).
    pub selected: Vec<Option<usize>>,
    /// Weights frozen each round: `[bias]` for round 0, `[left, right]` after.
    pub weights: Vec<Vec<f64>>,
    /// Mean training cost of the frozen model.
    pub train_costs: Vec<f64>,
    /// Mean validation cost of the frozen model. `None` without validation samples.
    pub valid_costs: Option<Vec<f64>>,
    /// Misclassified training samples. `None` for regression costs.
    pub train_counts: Option<Vec<usize>>,
    /// Misclassified validation samples. `None` for regression costs or
    /// without validation samples.
    pub valid_counts: Option<Vec<usize>>,
    /// Optimizer cost sequence of the frozen term, initial point included.
    pub cost_traces: Vec<Vec<f64>>,
}

/// One round's worth of history entries.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RoundRecord {
    pub selected: Option<usize>,
    pub weights: Vec<f64>,
    pub train_cost: f64,
    pub valid_cost: Option<f64>,
    pub train_count: Option<usize>,
    pub valid_count: Option<usize>,
    pub cost_trace: Vec<f64>,
}

impl BoostHistory {
    /// Empty history with the optional series enabled as requested.
    pub fn new(track_valid: bool, track_counts: bool) -> Self {
        Self {
            valid_costs: track_valid.then(Vec::new),
            train_counts: track_counts.then(Vec::new),
            valid_counts: (track_valid && track_counts).then(Vec::new),
            ..Default::default()
        }
    }

    /// Number of completed rounds, the bias round included.
    #[inline]
    pub fn n_rounds(&self) -> usize {
        self.train_costs.len()
    }

    /// Round with the lowest validation cost, if validation was tracked.
    pub fn best_valid_round(&self) -> Option<usize> {
        let costs = self.valid_costs.as_ref()?;
        costs
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_nan())
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| i)
    }

    pub(crate) fn push(&mut self, record: RoundRecord) {
        self.selected.push(record.selected);
        self.weights.push(record.weights);
        self.train_costs.push(record.train_cost);
        push_some(&mut self.valid_costs, record.valid_cost);
        push_some(&mut self.train_counts, record.train_count);
        push_some(&mut self.valid_counts, record.valid_count);
        self.cost_traces.push(record.cost_trace);
    }

    /// Render as pretty-printed JSON. NaN costs become `null`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write [`to_json`](Self::to_json) output to `path`.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), serde_json::Error> {
        let file = File::create(path).map_err(serde_json::Error::io)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
    }
}

fn push_some<T>(series: &mut Option<Vec<T>>, value: Option<T>) {
    if let (Some(series), Some(value)) = (series.as_mut(), value) {
        series.push(value);
    }
}
