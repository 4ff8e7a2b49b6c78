use std::ops::Range;

/// A contiguous run of atoms sharing one residue number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub number: isize, // Residue sequence number from the source
    pub name: String,  // Name of the residue (e.g., "ALA", "GLY"), may be empty
    pub range: Range<usize>,
}

impl Residue {
    pub(crate) fn new(number: isize, name: &str, start: usize) -> Self {
        Self {
            number,
            name: name.to_string(),
            range: start..start,
        }
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range.contains(&index)
    }
}
