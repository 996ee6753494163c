pub mod engine;
pub mod report;
pub mod validation;

pub use engine::{data_management, human_centric, overall, readiness, strategy};
pub use report::{Band, ScoreReport};
pub use validation::validate_survey;
