//! Provides input/output for topologies and resolved interaction lists.
//!
//! Topologies are exchanged through the [`traits::TopologyFormat`] interface; the
//! bundled implementation is a TOML document of residues and their atoms. Resolved
//! interactions are exported as CSV for inspection or downstream tooling.

pub mod interactions;
pub mod topology_toml;
pub mod traits;
