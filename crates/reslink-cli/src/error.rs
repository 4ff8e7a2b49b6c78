use reslink::core::io::topology_toml::TopologyIoError;
use reslink::engine::error::{EngineError, ResolveError};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read topology '{path}': {source}", path = path.display())]
    Topology {
        path: PathBuf,
        #[source]
        source: TopologyIoError,
    },

    #[error("Failed to write interactions: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
