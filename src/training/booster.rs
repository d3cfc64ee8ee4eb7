//! Greedy stump boosting.
//!
//! Round `0` fits a constant bias. Every following round re-optimizes a
//! random subset of the candidate stumps on top of the frozen model and
//! freezes the one reaching the lowest training cost. Frozen terms are never
//! revisited.

use ndarray::Array1;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::Dataset;
use crate::model::ConfigError;
use crate::repr::{AdditiveModel, Stump, StumpTerm};
use crate::training::history::RoundRecord;
use crate::training::logger::RoundSummary;
use crate::training::objectives::InvalidLabel;
use crate::training::{
    BoostHistory, CostFn, OptimizationTrace, Optimizer, Subproblem, TrainingLogger, Verbosity,
};

// =============================================================================
// TrainError
// =============================================================================

/// Errors that stop a boosting run before it starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrainError {
    #[error("training split is empty ({n_samples} samples in total)")]
    EmptyTrainingSplit { n_samples: usize },

    #[error(transparent)]
    InvalidLabel(#[from] InvalidLabel),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

// =============================================================================
// BoostParams
// =============================================================================

/// Parameters of the boosting loop.
#[derive(Clone, Debug, PartialEq)]
pub struct BoostParams {
    /// Number of stump rounds after the bias round.
    pub n_rounds: u32,
    /// Candidates evaluated per round. `None` evaluates all of them.
    pub max_check: Option<usize>,
    /// Verbosity level for training output.
    pub verbosity: Verbosity,
}

impl Default for BoostParams {
    fn default() -> Self {
        Self {
            n_rounds: 10,
            max_check: None,
            verbosity: Verbosity::default(),
        }
    }
}

// =============================================================================
// StumpBooster
// =============================================================================

/// Greedy boosting trainer over a fixed candidate list.
#[derive(Clone, Debug)]
pub struct StumpBooster<C: CostFn, O: Optimizer> {
    cost: C,
    optimizer: O,
    params: BoostParams,
}

/// Best candidate seen so far in a round.
struct Pick {
    index: usize,
    weights: [f64; 2],
    cost: f64,
    trace: OptimizationTrace,
}

impl<C: CostFn, O: Optimizer> StumpBooster<C, O> {
    pub fn new(cost: C, optimizer: O, params: BoostParams) -> Self {
        Self {
            cost,
            optimizer,
            params,
        }
    }

    /// Run the bias round and up to `n_rounds` stump rounds.
    ///
    /// `rng` draws each round's candidate subset. Boosting stops early, with a
    /// warning, when `candidates` is empty or every candidate cost of a round
    /// is NaN; the returned history then holds fewer rounds.
    ///
    /// # Errors
    ///
    /// - [`TrainError::EmptyTrainingSplit`] if `train` has no samples
    /// - [`TrainError::InvalidLabel`] if a label does not fit the cost
    pub fn boost<R: Rng + ?Sized>(
        &self,
        train: &Dataset,
        valid: &Dataset,
        candidates: &[Stump],
        rng: &mut R,
    ) -> Result<(AdditiveModel, BoostHistory), TrainError> {
        if train.is_empty() {
            return Err(TrainError::EmptyTrainingSplit {
                n_samples: valid.n_samples(),
            });
        }
        let schema = self.cost.target_schema();
        schema.validate(self.cost.name(), train.labels())?;
        schema.validate(self.cost.name(), valid.labels())?;

        let mut history = BoostHistory::new(!valid.is_empty(), self.cost.counter().is_some());
        let mut logger = TrainingLogger::new(self.params.verbosity);
        logger.start_training(
            self.params.n_rounds as usize,
            candidates.len(),
            self.cost.name(),
            self.optimizer.name(),
        );

        // Bias round
        let zeros = Array1::zeros(train.n_samples());
        let problem = Subproblem::bias(zeros.view(), train.labels());
        let trace = self.optimizer.optimize(&self.cost, &problem, &[0.0]);
        let (w, _) = trace.best();
        let mut model = AdditiveModel::with_bias(w[0]);
        self.record_round(&mut history, &logger, &model, train, valid, None, trace);

        if candidates.is_empty() {
            logger.warn_no_candidates();
            logger.finish_training(history.n_rounds());
            return Ok((model, history));
        }
        if self.params.max_check == Some(0) {
            logger.warn_zero_max_check();
            logger.finish_training(history.n_rounds());
            return Ok((model, history));
        }

        let n_check = self
            .params
            .max_check
            .map_or(candidates.len(), |m| m.min(candidates.len()));
        let mut order: Vec<usize> = Vec::with_capacity(candidates.len());

        for round in 1..=self.params.n_rounds as usize {
            order.clear();
            order.extend(0..candidates.len());
            order.shuffle(rng);
            order.truncate(n_check);
            order.sort_unstable();

            let offsets = model.predict(train.features());
            let mut best: Option<Pick> = None;

            for &index in &order {
                let stump = &candidates[index];
                let problem =
                    Subproblem::stump(stump, train.features(), offsets.view(), train.labels());
                let trace = self.optimizer.optimize(&self.cost, &problem, &[0.0, 0.0]);
                let (w, cost) = trace.best();
                let weights = [w[0], w[1]];
                logger.log_candidate(round, index, stump, cost);

                let improves = match &best {
                    None => !cost.is_nan(),
                    Some(b) => cost < b.cost,
                };
                if improves {
                    best = Some(Pick {
                        index,
                        weights,
                        cost,
                        trace,
                    });
                }
            }

            let Some(pick) = best else {
                logger.warn_all_nan(round);
                break;
            };

            model.push(StumpTerm::new(candidates[pick.index], pick.weights));
            self.record_round(
                &mut history,
                &logger,
                &model,
                train,
                valid,
                Some((pick.index, candidates[pick.index])),
                pick.trace,
            );
        }

        logger.finish_training(history.n_rounds());
        Ok((model, history))
    }

    /// Evaluate the frozen model and append the round to `history`.
    #[allow(clippy::too_many_arguments)]
    fn record_round(
        &self,
        history: &mut BoostHistory,
        logger: &TrainingLogger,
        model: &AdditiveModel,
        train: &Dataset,
        valid: &Dataset,
        selected: Option<(usize, Stump)>,
        trace: OptimizationTrace,
    ) {
        let counter = self.cost.counter();

        let train_preds = model.predict(train.features());
        let train_cost = self.cost.mean_cost(train_preds.view(), train.labels());
        let train_count = counter.map(|c| c.count(train_preds.view(), train.labels()));

        let (valid_cost, valid_count) = if valid.is_empty() {
            (None, None)
        } else {
            let preds = model.predict(valid.features());
            (
                Some(self.cost.mean_cost(preds.view(), valid.labels())),
                counter.map(|c| c.count(preds.view(), valid.labels())),
            )
        };

        let round = history.n_rounds();
        logger.log_round(
            round,
            &RoundSummary {
                train_cost,
                valid_cost,
                train_misclassified: train_count,
                valid_misclassified: valid_count,
                stump: selected.map(|(_, s)| s),
            },
        );

        let weights = match model.terms().last() {
            Some(term) if selected.is_some() => term.weights.to_vec(),
            _ => vec![model.bias()],
        };

        history.push(RoundRecord {
            selected: selected.map(|(i, _)| i),
            weights,
            train_cost,
            valid_cost,
            train_count,
            valid_count,
            cost_trace: trace.into_costs(),
        });
    }
}
