pub mod toml_loader;

pub use toml_loader::{load_job_or_default, load_toml_to_job};
