//! Training progress logging.
//!
//! [`TrainingLogger`] emits `tracing` events gated by a [`Verbosity`] level.
//! Installing a subscriber is left to the application.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::repr::Stump;

/// How much the trainer reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    /// Nothing.
    #[default]
    Silent,
    /// Early termination and other anomalies.
    Warning,
    /// One line per round.
    Info,
    /// Every evaluated candidate as well.
    Debug,
}

/// Values reported after a round has been frozen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundSummary {
    pub train_cost: f64,
    pub valid_cost: Option<f64>,
    pub train_misclassified: Option<usize>,
    pub valid_misclassified: Option<usize>,
    /// Stump frozen this round; `None` for the bias round.
    pub stump: Option<Stump>,
}

/// Verbosity-gated training logger.
#[derive(Debug)]
pub struct TrainingLogger {
    verbosity: Verbosity,
    started: Option<Instant>,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            started: None,
        }
    }

    #[inline]
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    #[inline]
    fn enabled(&self, level: Verbosity) -> bool {
        self.verbosity >= level
    }

    pub fn start_training(&mut self, n_rounds: usize, n_candidates: usize, cost: &str, optimizer: &str) {
        self.started = Some(Instant::now());
        if self.enabled(Verbosity::Info) {
            info!(
                n_rounds,
                n_candidates,
                cost,
                optimizer,
                "starting stump boosting"
            );
        }
    }

    pub fn log_round(&self, round: usize, summary: &RoundSummary) {
        if !self.enabled(Verbosity::Info) {
            return;
        }
        let stump = summary
            .stump
            .map(|s| format!("x[{}] <= {:.4}", s.dim, s.threshold))
            .unwrap_or_else(|| "bias".to_string());
        info!(
            round,
            train_cost = summary.train_cost,
            valid_cost = ?summary.valid_cost,
            train_misclassified = ?summary.train_misclassified,
            valid_misclassified = ?summary.valid_misclassified,
            "[{round}] {stump}"
        );
    }

    pub fn log_candidate(&self, round: usize, index: usize, stump: &Stump, cost: f64) {
        if self.enabled(Verbosity::Debug) {
            debug!(round, index, dim = stump.dim, threshold = stump.threshold, cost, "candidate");
        }
    }

    pub fn warn_no_candidates(&self) {
        if self.enabled(Verbosity::Warning) {
            warn!("no split candidates: every dimension has constant labels; only the bias was fitted");
        }
    }

    pub fn warn_zero_max_check(&self) {
        if self.enabled(Verbosity::Warning) {
            warn!("max_check is 0: no candidate is evaluated; only the bias was fitted");
        }
    }

    pub fn warn_all_nan(&self, round: usize) {
        if self.enabled(Verbosity::Warning) {
            warn!(round, "every candidate cost is NaN; stopping early");
        }
    }

    pub fn finish_training(&self, rounds: usize) {
        if self.enabled(Verbosity::Info) {
            let elapsed_ms = self.started.map_or(0, |t| t.elapsed().as_millis() as u64);
            info!(rounds, elapsed_ms, "boosting finished");
        }
    }
}
