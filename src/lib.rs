pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{ollama::OllamaClient, storage::LocalStorage};
pub use core::{engine::SummaryEngine, pipeline::SummaryPipeline};
pub use utils::error::{Result, SummaryError};
