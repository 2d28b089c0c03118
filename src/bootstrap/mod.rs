pub mod config;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_config_or_empty};
pub use runtime::{AppRuntime, UseCases};
pub use wiring::{resolve_app_paths, wire_dependencies};
