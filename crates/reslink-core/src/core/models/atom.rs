/// Represents the physical properties of an atom and the residue it belongs to.
///
/// The atom's name is deliberately not stored here: names live in a parallel
/// table owned by the [`Topology`](super::topology::Topology), so that name
/// lookups can scan a contiguous sequence of strings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Atom {
    /// Atomic mass in unified atomic mass units.
    pub mass: f64,
    /// Partial charge in elementary charge units.
    pub charge: f64,
    /// Numeric force field atom type identifier.
    pub type_id: u32,
    /// Residue sequence number this atom belongs to. Could be negative.
    pub residue_number: isize,
}

impl Atom {
    /// Creates a new `Atom` in the given residue with zero mass, charge and type.
    ///
    /// # Arguments
    ///
    /// * `residue_number` - The residue sequence number owning this atom.
    pub fn new(residue_number: isize) -> Self {
        Self {
            residue_number,
            ..Self::default()
        }
    }

    /// Overwrites mass, charge, type identifier and residue number in one call.
    ///
    /// No validation is performed; the previous values are simply replaced.
    pub fn set_properties(&mut self, mass: f64, charge: f64, type_id: u32, residue_number: isize) {
        self.mass = mass;
        self.charge = charge;
        self.type_id = type_id;
        self.residue_number = residue_number;
    }
}
