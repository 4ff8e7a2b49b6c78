pub mod link;
pub mod resolve;

use crate::error::{CliError, Result};
use reslink::core::io::topology_toml::TomlTopology;
use reslink::core::io::traits::TopologyFormat;
use reslink::core::models::topology::Topology;
use std::path::Path;
use tracing::info;

fn load_topology(path: &Path) -> Result<Topology> {
    info!("Loading topology from {:?}", path);
    let topology = TomlTopology::read_from_path(path).map_err(|e| CliError::Topology {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(
        atoms = topology.len(),
        residues = topology.residues().len(),
        "Topology loaded."
    );
    Ok(topology)
}
