use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const PREVIOUS_RESIDUE_PREFIX: char = '-';
const NEXT_RESIDUE_PREFIX: char = '+';

/// Which residue, relative to the starting atom, a name is resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Adjacency {
    /// Scan forward from the start, bounded by the starting residue.
    #[default]
    CurrentResidue,
    /// Skip past the starting residue, then scan forward to the end of the structure.
    NextResidue,
    /// Scan backward from the atom before the start down to the first atom.
    PreviousResidue,
}

impl Adjacency {
    pub fn prefix(self) -> Option<char> {
        match self {
            Adjacency::CurrentResidue => None,
            Adjacency::NextResidue => Some(NEXT_RESIDUE_PREFIX),
            Adjacency::PreviousResidue => Some(PREVIOUS_RESIDUE_PREFIX),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Atom name token is empty")]
    Empty,
    #[error("Atom name token '{0}' has a residue prefix but no atom name")]
    EmptyName(String),
    #[error("Atom name token '{0}' contains whitespace")]
    Whitespace(String),
}

/// An atom name paired with the residue it should be looked up in.
///
/// Parsed from the conventional token notation where a leading `+` selects the next
/// residue and a leading `-` the previous one:
///
/// ```
/// use reslink::engine::resolver::token::{Adjacency, AtomRef};
///
/// let next_n: AtomRef = "+N".parse()?;
/// assert_eq!(next_n.adjacency, Adjacency::NextResidue);
/// assert_eq!(next_n.name, "N");
/// assert_eq!(next_n.to_string(), "+N");
/// # Ok::<(), reslink::engine::resolver::token::TokenError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomRef {
    pub adjacency: Adjacency,
    pub name: String,
}

impl AtomRef {
    pub fn new(adjacency: Adjacency, name: &str) -> Self {
        Self {
            adjacency,
            name: name.to_string(),
        }
    }

    pub fn current(name: &str) -> Self {
        Self::new(Adjacency::CurrentResidue, name)
    }

    pub fn next(name: &str) -> Self {
        Self::new(Adjacency::NextResidue, name)
    }

    pub fn previous(name: &str) -> Self {
        Self::new(Adjacency::PreviousResidue, name)
    }

    /// Case-insensitive comparison against an atom name from the name table.
    pub fn matches(&self, atom_name: &str) -> bool {
        self.name.eq_ignore_ascii_case(atom_name)
    }
}

impl FromStr for AtomRef {
    type Err = TokenError;

    /// Parses a token such as `"CA"`, `"+N"` or `"-C"`.
    ///
    /// Only the first character is inspected for a prefix; hyphens or plus signs
    /// elsewhere in the name are part of the name.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError`] for an empty token, a bare prefix, or a token containing
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(TokenError::Empty);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(TokenError::Whitespace(s.to_string()));
        }

        let (adjacency, name) = if let Some(rest) = s.strip_prefix(NEXT_RESIDUE_PREFIX) {
            (Adjacency::NextResidue, rest)
        } else if let Some(rest) = s.strip_prefix(PREVIOUS_RESIDUE_PREFIX) {
            (Adjacency::PreviousResidue, rest)
        } else {
            (Adjacency::CurrentResidue, s)
        };

        if name.is_empty() {
            return Err(TokenError::EmptyName(s.to_string()));
        }

        Ok(Self::new(adjacency, name))
    }
}

impl fmt::Display for AtomRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.adjacency.prefix() {
            Some(prefix) => write!(f, "{}{}", prefix, self.name),
            None => f.write_str(&self.name),
        }
    }
}
