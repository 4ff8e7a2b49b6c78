use super::atom::Atom;
use super::residue::Residue;
use super::topology::{Topology, TopologyError};

/// Builds a [`Topology`] one residue at a time.
///
/// Atoms are appended to the most recently started residue. Starting a residue with
/// the same number as the current one continues that residue; starting one with a
/// smaller number is rejected, so the built topology is always residue-ordered.
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    atoms: Vec<Atom>,
    names: Vec<String>,
    residues: Vec<Residue>,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_residue(&mut self, number: isize, name: &str) -> Result<&mut Self, TopologyError> {
        // A residue that never received atoms does not form a span and does not
        // take part in ordering.
        if self.residues.last().is_some_and(Residue::is_empty) {
            self.residues.pop();
        }

        if let Some(previous) = self.residues.last().map(|residue| residue.number) {
            if previous == number {
                return Ok(self);
            }
            if previous > number {
                return Err(TopologyError::UnorderedResidues {
                    index: self.atoms.len(),
                    previous,
                    current: number,
                });
            }
        }

        self.residues
            .push(Residue::new(number, name, self.atoms.len()));
        Ok(self)
    }

    pub fn add_atom(
        &mut self,
        name: &str,
        mass: f64,
        charge: f64,
        type_id: u32,
    ) -> Result<&mut Self, TopologyError> {
        let residue = self
            .residues
            .last_mut()
            .ok_or_else(|| TopologyError::NoCurrentResidue(name.to_string()))?;

        let mut atom = Atom::new(residue.number);
        atom.set_properties(mass, charge, type_id, residue.number);

        self.atoms.push(atom);
        self.names.push(name.to_string());
        residue.range.end = self.atoms.len();
        Ok(self)
    }

    pub fn build(mut self) -> Topology {
        if self.residues.last().is_some_and(Residue::is_empty) {
            self.residues.pop();
        }
        Topology::from_validated(self.atoms, self.names, self.residues)
    }
}
