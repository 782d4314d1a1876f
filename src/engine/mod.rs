pub mod error;
pub mod estimator;
pub mod evaluator;

pub use error::RegressionError;
pub use estimator::{FitResult, fit};
pub use evaluator::{GoodnessOfFit, evaluate};
