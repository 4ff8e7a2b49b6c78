use super::traits::TopologyFormat;
use crate::core::models::builder::TopologyBuilder;
use crate::core::models::topology::{Topology, TopologyError};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Read, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyIoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid topology: {0}")]
    Topology(#[from] TopologyError),
}

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TopologyDocument {
    #[serde(default, rename = "residue")]
    residues: Vec<ResidueRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ResidueRecord {
    number: isize,
    #[serde(default)]
    name: String,
    #[serde(default, rename = "atom")]
    atoms: Vec<AtomRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct AtomRecord {
    name: String,
    #[serde(default)]
    mass: f64,
    #[serde(default)]
    charge: f64,
    #[serde(default)]
    type_id: u32,
}

/// Topology stored as a TOML document with one `[[residue]]` table per residue:
///
/// ```toml
/// [[residue]]
/// number = 1
/// name = "GLY"
///
/// [[residue.atom]]
/// name = "N"
/// mass = 14.007
/// charge = -0.3
/// type-id = 1
/// ```
///
/// Residues with atoms must appear in non-decreasing number order. Residues
/// without atoms are dropped and are not checked for order.
pub struct TomlTopology;

impl TopologyFormat for TomlTopology {
    type Error = TopologyIoError;

    fn read_from(reader: &mut impl BufRead) -> Result<Topology, Self::Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        let document: TopologyDocument = toml::from_str(&content)?;

        let mut builder = TopologyBuilder::new();
        for residue in &document.residues {
            builder.start_residue(residue.number, &residue.name)?;
            for atom in &residue.atoms {
                builder.add_atom(&atom.name, atom.mass, atom.charge, atom.type_id)?;
            }
        }
        Ok(builder.build())
    }

    fn write_to(topology: &Topology, writer: &mut impl Write) -> Result<(), Self::Error> {
        let residues = topology
            .residues()
            .iter()
            .map(|residue| ResidueRecord {
                number: residue.number,
                name: residue.name.clone(),
                atoms: residue
                    .range
                    .clone()
                    .map(|index| {
                        let atom = &topology.atoms()[index];
                        AtomRecord {
                            name: topology.names()[index].clone(),
                            mass: atom.mass,
                            charge: atom.charge,
                            type_id: atom.type_id,
                        }
                    })
                    .collect(),
            })
            .collect();

        let content = toml::to_string(&TopologyDocument { residues })?;
        writer.write_all(content.as_bytes())?;
        Ok(())
    }
}
