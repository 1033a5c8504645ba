pub mod engine;
pub mod linker;
pub mod notes;
pub mod pipeline;
pub mod roster;
pub mod summary;

pub use crate::domain::model::{
    Extraction, MatchOptions, ModelRequest, Roster, SummaryArtifacts, SummaryRecord,
};
pub use crate::domain::ports::{ConfigProvider, ModelClient, Pipeline, Storage};
pub use crate::utils::error::Result;
