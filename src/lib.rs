//! Classical perceptron learning for linearly separable 2-dimensional data.
//!
//! The algorithmic core is three pieces: [`eval_perceptron`] finds the
//! misclassified points under a weight vector, [`update_weights`] makes one
//! online corrective sweep, and [`PerceptronTrainer`] drives them epoch by
//! epoch until zero errors remain or the injected [`EpochMonitor`] signals
//! quit. Dataset loading and console rendering live at the crate edges.
//!
//! Non-convergence on non-linearly-separable data is expected behavior, not
//! a fault: the loop runs until quit unless `TrainingConfig::max_epochs`
//! caps it.

pub mod common_types;
pub mod dataset;
pub mod logging;
pub mod monitor;
pub mod perceptron;

pub use common_types::{Example, Weights, dot_product};
pub use dataset::{Dataset, DatasetError};
pub use monitor::{ConsoleMonitor, EpochMonitor, EpochView, StepSignal};
pub use perceptron::{
    PerceptronTrainer, TrainerState, TrainingConfig, eval_perceptron, update_weights,
};
