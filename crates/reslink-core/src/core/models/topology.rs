use super::atom::Atom;
use super::residue::Residue;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("Atom and name tables differ in length ({atoms} atoms, {names} names)")]
    LengthMismatch { atoms: usize, names: usize },

    #[error(
        "Residue numbers must not decrease: atom {index} has residue {current} after residue {previous}"
    )]
    UnorderedResidues {
        index: usize,
        previous: isize,
        current: isize,
    },

    #[error("Cannot add atom '{0}' before a residue has been started")]
    NoCurrentResidue(String),
}

/// A residue-grouped sequence of atoms with a parallel table of atom names.
///
/// A `Topology` can only be obtained through [`Topology::from_parts`] or the
/// [`TopologyBuilder`](super::builder::TopologyBuilder), both of which guarantee that:
///
/// - the atom and name tables have equal length,
/// - residue numbers never decrease along the sequence,
/// - every atom belongs to exactly one non-empty [`Residue`] span.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Topology {
    atoms: Vec<Atom>,
    names: Vec<String>,
    residues: Vec<Residue>,
}

impl Topology {
    /// Creates a topology from pre-built atom and name tables.
    ///
    /// Residue spans are derived from changes in `residue_number` and receive
    /// empty residue names.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::LengthMismatch`] if the two tables differ in length and
    /// [`TopologyError::UnorderedResidues`] if a residue number decreases.
    pub fn from_parts(atoms: Vec<Atom>, names: Vec<String>) -> Result<Self, TopologyError> {
        if atoms.len() != names.len() {
            return Err(TopologyError::LengthMismatch {
                atoms: atoms.len(),
                names: names.len(),
            });
        }

        let mut residues: Vec<Residue> = Vec::new();
        for (index, atom) in atoms.iter().enumerate() {
            match residues.last().map(|residue| residue.number) {
                Some(previous) if previous == atom.residue_number => {
                    if let Some(current) = residues.last_mut() {
                        current.range.end = index + 1;
                    }
                }
                Some(previous) if previous > atom.residue_number => {
                    return Err(TopologyError::UnorderedResidues {
                        index,
                        previous,
                        current: atom.residue_number,
                    });
                }
                _ => {
                    let mut residue = Residue::new(atom.residue_number, "", index);
                    residue.range.end = index + 1;
                    residues.push(residue);
                }
            }
        }

        Ok(Self {
            atoms,
            names,
            residues,
        })
    }

    pub(crate) fn from_validated(
        atoms: Vec<Atom>,
        names: Vec<String>,
        residues: Vec<Residue>,
    ) -> Self {
        debug_assert_eq!(atoms.len(), names.len());
        Self {
            atoms,
            names,
            residues,
        }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Finds the residue span containing the atom at `index`.
    ///
    /// # Return
    ///
    /// Returns `None` if `index` is outside `[0, len)`.
    pub fn residue_of(&self, index: usize) -> Option<&Residue> {
        if index >= self.atoms.len() {
            return None;
        }
        let position = self
            .residues
            .partition_point(|residue| residue.range.end <= index);
        self.residues.get(position)
    }

    /// Residue number of the final atom, if any.
    pub fn last_residue_number(&self) -> Option<isize> {
        self.atoms.last().map(|atom| atom.residue_number)
    }
}
