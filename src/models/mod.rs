pub mod catalog;
pub mod difficulty;
pub mod distribution;
pub mod job;
pub mod loaders;
pub mod request;
pub mod session;

pub use difficulty::Difficulty;
pub use distribution::{Distribution, QuestionCounts};
pub use job::GenerationJob;
pub use loaders::{load_job_or_default, load_toml_to_job};
pub use request::GenerationRequest;
pub use session::SessionState;
