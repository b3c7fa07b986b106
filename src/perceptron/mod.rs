//! The classical mistake-driven perceptron for 2-dimensional data.

pub mod eval;
pub mod trainer;
pub mod update;

pub use eval::eval_perceptron;
pub use trainer::{PerceptronTrainer, TrainerState, TrainingConfig};
pub use update::update_weights;
