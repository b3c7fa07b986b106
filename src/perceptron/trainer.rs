//! Training loop: owns the weight vector, the histories, and the per-epoch
//! sequencing of evaluation, update, and visualization.

use crate::common_types::{Example, Weights};
use crate::monitor::{EpochMonitor, EpochView, StepSignal};
use crate::perceptron::eval::eval_perceptron;
use crate::perceptron::update::update_weights;
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::iter::Sum;

/// Training configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig<F> {
    /// Initial weight vector; a random one is drawn when absent.
    pub w_init: Option<[F; 3]>,
    /// Known separating weight vector, used only for the per-epoch distance
    /// diagnostic. Absent means no distance tracking.
    pub w_feasible: Option<[F; 3]>,
    /// Seed for the random initialization draw.
    pub seed: u64,
    /// Optional hard stop. On non-linearly-separable data the loop never
    /// converges and otherwise runs until the monitor signals quit; this
    /// is the safeguard for unattended runs.
    pub max_epochs: Option<usize>,
}

impl<F> Default for TrainingConfig<F> {
    fn default() -> Self {
        Self {
            w_init: None,
            w_feasible: None,
            seed: 42,
            max_epochs: None,
        }
    }
}

/// The two states of the training loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainerState {
    Running,
    Stopped,
}

/// Learns the weights of a perceptron for a 2-dimensional dataset, handing
/// the state to an [`EpochMonitor`] after every full pass through the data.
/// An epoch is one corrective sweep followed by one evaluation; epoch 0 is
/// the evaluation of the initial weights before any update.
///
/// The monitor decides whether to keep stepping, so the trainer never
/// touches input or output primitives itself.
#[derive(Debug)]
pub struct PerceptronTrainer<F> {
    negatives: Vec<Example<F>>,
    positives: Vec<Example<F>>,
    weights: Weights<F>,
    feasible: Option<Weights<F>>,
    error_history: Vec<usize>,
    distance_history: Vec<F>,
    epoch: usize,
    state: TrainerState,
    max_epochs: Option<usize>,
}

impl<F> PerceptronTrainer<F>
where
    F: Float + Sum + SampleUniform,
{
    /// Builds a trainer from raw (unaugmented) 2-D points. The trailing
    /// constant-1 column is appended here, once, and the example sets are
    /// fixed for the life of the trainer.
    pub fn new(
        negatives_raw: &[[F; 2]],
        positives_raw: &[[F; 2]],
        config: TrainingConfig<F>,
    ) -> Self {
        let negatives = negatives_raw
            .iter()
            .map(|&[x1, x2]| Example::from_raw(x1, x2))
            .collect();
        let positives = positives_raw
            .iter()
            .map(|&[x1, x2]| Example::from_raw(x1, x2))
            .collect();

        let weights = match config.w_init {
            Some(components) => Weights::new(components),
            None => Self::random_weights(config.seed),
        };

        PerceptronTrainer {
            negatives,
            positives,
            weights,
            feasible: config.w_feasible.map(Weights::new),
            error_history: Vec::new(),
            distance_history: Vec::new(),
            epoch: 0,
            state: TrainerState::Running,
            max_epochs: config.max_epochs,
        }
    }

    // Uniform draw in [-1, 1) from a seeded generator. The learning rule
    // converges from any starting point on separable data; the seed only
    // keeps runs reproducible.
    fn random_weights(seed: u64) -> Weights<F> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut components = [F::zero(); 3];
        for c in components.iter_mut() {
            *c = rng.gen_range(-F::one()..F::one());
        }
        Weights::new(components)
    }

    /// Iterates until the perceptron has correctly classified all points,
    /// the monitor signals quit, or the configured `max_epochs` is reached.
    /// Returns the final weight vector in every case; the last entry of
    /// [`error_history`](Self::error_history) tells which one occurred.
    pub fn run<M: EpochMonitor<F>>(&mut self, monitor: &mut M) -> Weights<F> {
        // Epoch 0: evaluate the initial weights before any update.
        let (mut mistakes_neg, mut mistakes_pos) =
            eval_perceptron(&self.negatives, &self.positives, &self.weights);
        let mut num_errs = mistakes_neg.len() + mistakes_pos.len();
        self.error_history.push(num_errs);
        self.record_distance();

        if self.checkpoint(monitor, &mistakes_neg, &mistakes_pos) == StepSignal::Quit {
            self.state = TrainerState::Stopped;
            return self.weights;
        }

        while num_errs > 0 {
            if self.max_epochs.is_some_and(|limit| self.epoch >= limit) {
                break;
            }
            self.epoch += 1;

            self.weights = update_weights(&self.negatives, &self.positives, &self.weights);
            self.record_distance();

            let (neg, pos) = eval_perceptron(&self.negatives, &self.positives, &self.weights);
            mistakes_neg = neg;
            mistakes_pos = pos;
            num_errs = mistakes_neg.len() + mistakes_pos.len();
            self.error_history.push(num_errs);

            if self.checkpoint(monitor, &mistakes_neg, &mistakes_pos) == StepSignal::Quit {
                break;
            }
        }

        self.state = TrainerState::Stopped;
        self.weights
    }

    fn record_distance(&mut self) {
        if let Some(feasible) = &self.feasible {
            self.distance_history.push(self.weights.distance_to(feasible));
        }
    }

    fn checkpoint<M: EpochMonitor<F>>(
        &self,
        monitor: &mut M,
        mistakes_neg: &[usize],
        mistakes_pos: &[usize],
    ) -> StepSignal {
        let view = EpochView {
            epoch: self.epoch,
            negatives: &self.negatives,
            positives: &self.positives,
            mistakes_neg,
            mistakes_pos,
            error_history: &self.error_history,
            weights: &self.weights,
            distance_history: &self.distance_history,
        };
        monitor.render_and_prompt(&view)
    }

    pub fn weights(&self) -> &Weights<F> {
        &self.weights
    }

    pub fn state(&self) -> TrainerState {
        self.state
    }

    /// Number of completed update sweeps (the epoch-0 evaluation does not
    /// count).
    pub fn epochs_completed(&self) -> usize {
        self.epoch
    }

    /// Total error count per epoch, starting with the initial evaluation.
    pub fn error_history(&self) -> &[usize] {
        &self.error_history
    }

    /// Distance to the feasible vector per epoch; empty when no feasible
    /// vector was supplied. Recorded once per evaluation epoch, so the
    /// length always matches `error_history`.
    pub fn distance_history(&self) -> &[F] {
        &self.distance_history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Monitor that replays a script of signals and counts checkpoints;
    /// once the script runs out it keeps answering `Continue`.
    struct ScriptedMonitor {
        responses: Vec<StepSignal>,
        calls: usize,
    }

    impl ScriptedMonitor {
        fn always_continue() -> Self {
            ScriptedMonitor {
                responses: Vec::new(),
                calls: 0,
            }
        }

        fn with_responses(responses: Vec<StepSignal>) -> Self {
            ScriptedMonitor {
                responses,
                calls: 0,
            }
        }
    }

    impl EpochMonitor<f64> for ScriptedMonitor {
        fn render_and_prompt(&mut self, _view: &EpochView<'_, f64>) -> StepSignal {
            let signal = self
                .responses
                .get(self.calls)
                .copied()
                .unwrap_or(StepSignal::Continue);
            self.calls += 1;
            signal
        }
    }

    fn separable_config() -> TrainingConfig<f64> {
        TrainingConfig {
            w_init: Some([0.0, 0.0, 0.0]),
            ..Default::default()
        }
    }

    #[test]
    fn test_converges_on_separable_pair() {
        let mut trainer =
            PerceptronTrainer::new(&[[-1.0, -1.0]], &[[1.0, 1.0]], separable_config());
        let mut monitor = ScriptedMonitor::always_continue();

        trainer.run(&mut monitor);

        assert_eq!(trainer.error_history().last(), Some(&0));
        assert!(trainer.epochs_completed() <= 20);
        assert_eq!(trainer.state(), TrainerState::Stopped);
    }

    #[test]
    fn test_error_history_has_one_entry_per_epoch_plus_initial() {
        let mut trainer = PerceptronTrainer::new(
            &[[-1.0, -1.0], [-2.0, 0.5]],
            &[[1.0, 1.0], [2.0, -0.5]],
            separable_config(),
        );
        let mut monitor = ScriptedMonitor::always_continue();

        trainer.run(&mut monitor);

        assert_eq!(
            trainer.error_history().len(),
            trainer.epochs_completed() + 1
        );
        assert_eq!(monitor.calls, trainer.error_history().len());
    }

    #[test]
    fn test_quit_at_first_checkpoint_returns_initial_weights() {
        let config = TrainingConfig {
            w_init: Some([0.25, -0.5, 0.75]),
            ..Default::default()
        };
        let mut trainer = PerceptronTrainer::new(&[[-1.0, -1.0]], &[[1.0, 1.0]], config);
        let mut monitor = ScriptedMonitor::with_responses(vec![StepSignal::Quit]);

        let w = trainer.run(&mut monitor);

        assert_eq!(w.components, [0.25, -0.5, 0.75]);
        assert_eq!(trainer.error_history().len(), 1);
        assert_eq!(monitor.calls, 1);
        assert_eq!(trainer.state(), TrainerState::Stopped);
    }

    #[test]
    fn test_distance_history_tracks_feasible_vector() {
        let config = TrainingConfig {
            w_init: Some([0.0, 0.0, 0.0]),
            w_feasible: Some([3.0, 4.0, 0.0]),
            ..Default::default()
        };
        let mut trainer = PerceptronTrainer::new(&[[-1.0, -1.0]], &[[1.0, 1.0]], config);
        let mut monitor = ScriptedMonitor::always_continue();

        trainer.run(&mut monitor);

        assert_eq!(
            trainer.distance_history().len(),
            trainer.error_history().len()
        );
        // First entry is the initial vector's distance, before any update.
        assert_eq!(trainer.distance_history()[0], 5.0);
    }

    #[test]
    fn test_distance_history_stays_empty_without_feasible_vector() {
        let mut trainer =
            PerceptronTrainer::new(&[[-1.0, -1.0]], &[[1.0, 1.0]], separable_config());
        let mut monitor = ScriptedMonitor::always_continue();

        trainer.run(&mut monitor);

        assert!(trainer.distance_history().is_empty());
    }

    #[test]
    fn test_random_initialization_is_reproducible() {
        let config = TrainingConfig {
            seed: 7,
            ..Default::default()
        };
        let a = PerceptronTrainer::<f64>::new(&[], &[], config.clone());
        let b = PerceptronTrainer::<f64>::new(&[], &[], config);

        assert_eq!(a.weights(), b.weights());
        for &c in &a.weights().components {
            assert!((-1.0..1.0).contains(&c));
        }
    }

    #[test]
    fn test_max_epochs_caps_non_separable_run() {
        // The same point in both classes can never be separated.
        let config = TrainingConfig {
            w_init: Some([0.0, 0.0, 0.0]),
            max_epochs: Some(5),
            ..Default::default()
        };
        let mut trainer = PerceptronTrainer::new(&[[1.0, 1.0]], &[[1.0, 1.0]], config);
        let mut monitor = ScriptedMonitor::always_continue();

        trainer.run(&mut monitor);

        assert_eq!(trainer.epochs_completed(), 5);
        assert_eq!(trainer.error_history().len(), 6);
        assert_ne!(trainer.error_history().last(), Some(&0));
    }

    #[test]
    fn test_quit_mid_training_stops_the_loop() {
        let config = TrainingConfig {
            w_init: Some([0.0, 0.0, 0.0]),
            ..Default::default()
        };
        // Non-separable, so only the quit signal can end the run.
        let mut trainer = PerceptronTrainer::new(&[[1.0, 1.0]], &[[1.0, 1.0]], config);
        let mut monitor =
            ScriptedMonitor::with_responses(vec![StepSignal::Continue, StepSignal::Quit]);

        trainer.run(&mut monitor);

        assert_eq!(monitor.calls, 2);
        assert_eq!(trainer.error_history().len(), 2);
        assert_eq!(trainer.state(), TrainerState::Stopped);
    }
}
