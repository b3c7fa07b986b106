//! Interactive driver: loads a JSON dataset, trains the perceptron, and
//! steps through epochs on the console while appending to the JSONL log.

use std::env;
use std::error::Error;
use std::process;

use perceptron_learning::dataset::Dataset;
use perceptron_learning::logging;
use perceptron_learning::monitor::{ConsoleMonitor, EpochMonitor, EpochView, StepSignal};
use perceptron_learning::perceptron::{PerceptronTrainer, TrainerState, TrainingConfig};

/// Delegating monitor that records every epoch to the JSONL log before
/// rendering. Logging failures are reported but never interrupt training.
struct LoggedMonitor<M> {
    inner: M,
}

impl<M: EpochMonitor<f64>> EpochMonitor<f64> for LoggedMonitor<M> {
    fn render_and_prompt(&mut self, view: &EpochView<'_, f64>) -> StepSignal {
        if let Err(err) = logging::log_epoch(view) {
            eprintln!("warning: could not write training log: {err}");
        }
        self.inner.render_and_prompt(view)
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let path = args
        .next()
        .ok_or("usage: perceptron_learning <dataset.json> [seed]")?;
    let seed = match args.next() {
        Some(text) => text.parse::<u64>()?,
        None => 42,
    };

    let dataset = Dataset::from_path(&path)?;
    let config = TrainingConfig {
        w_init: dataset.w_init,
        w_feasible: dataset.w_feasible,
        seed,
        max_epochs: None,
    };

    let mut trainer = PerceptronTrainer::new(&dataset.negatives, &dataset.positives, config);
    let mut monitor = LoggedMonitor {
        inner: ConsoleMonitor::stdio(),
    };

    let w = trainer.run(&mut monitor);
    debug_assert_eq!(trainer.state(), TrainerState::Stopped);

    let converged = trainer.error_history().last() == Some(&0);
    println!(
        "learned weights: [{:.4}, {:.4}, {:.4}] after {} epoch(s){}",
        w.components[0],
        w.components[1],
        w.components[2],
        trainer.epochs_completed(),
        if converged { "" } else { " (not converged)" }
    );
    Ok(())
}
