//! otharvest: CLI harvester for Old Testament chapter text from Bible Gateway, outputting JSON.

pub mod canon;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod model;
pub mod output;

// Re-exports for CLI and consumers.
pub use fetch::{
    harvest, ChapterSource, FetchError, GatewayClient, GatewayClientBuilder, HarvestOptions,
};
pub use model::ChapterRecord;
pub use output::{write_json, OutputError};
