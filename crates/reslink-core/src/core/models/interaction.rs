use crate::core::templates::kind::InteractionKind;

/// A bonded interaction between resolved atom indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interaction {
    pub kind: InteractionKind,
    /// Residue whose template declared the interaction.
    pub residue_number: isize,
    pub atoms: Vec<usize>,
}

impl Interaction {
    pub fn new(kind: InteractionKind, residue_number: isize, atoms: Vec<usize>) -> Self {
        Self {
            kind,
            residue_number,
            atoms,
        }
    }

    /// Orientation-independent key: an interaction and its reverse share one key.
    pub fn canonical_key(&self) -> (InteractionKind, Vec<usize>) {
        let reversed: Vec<usize> = self.atoms.iter().rev().copied().collect();
        // Improper atom order is significant.
        let atoms = match self.kind {
            InteractionKind::Improper => self.atoms.clone(),
            _ if reversed < self.atoms => reversed,
            _ => self.atoms.clone(),
        };
        (self.kind, atoms)
    }
}
