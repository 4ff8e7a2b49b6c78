//! Residue-scoped atom name resolution.
//!
//! Given a starting atom and an [`AtomRef`], the resolver scans the topology's name
//! table in the direction and within the bounds selected by the reference's
//! [`Adjacency`]:
//!
//! | Adjacency         | Scanned indices                                           |
//! |-------------------|-----------------------------------------------------------|
//! | `CurrentResidue`  | `start ..` end of the starting residue                    |
//! | `NextResidue`     | first atom after the starting residue `..` end of topology |
//! | `PreviousResidue` | `start - 1` down to `0`, across residue boundaries         |
//!
//! Names are compared ASCII case-insensitively and the first match wins.

pub mod token;

use crate::core::models::topology::Topology;
use crate::engine::config::MissingPolicy;
use crate::engine::error::ResolveError;
use token::{Adjacency, AtomRef};
use tracing::{debug, trace, warn};

/// Context label for probe lookups. Misses under this label are never reported.
pub const CHECK_CONTEXT: &str = "check";

/// Details of a lookup that matched no atom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Miss {
    pub atom_ref: AtomRef,
    /// Residue the name was expected in.
    pub residue_number: isize,
    /// Set when the miss is explained by the ends of the structure: there is no
    /// residue before the start, or the residue after it is the final one.
    pub terminal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(usize),
    NotFound(Miss),
}

impl Lookup {
    pub fn index(&self) -> Option<usize> {
        match self {
            Lookup::Found(index) => Some(*index),
            Lookup::NotFound(_) => None,
        }
    }
}

/// Read-only name resolver over a [`Topology`].
#[derive(Debug, Clone, Copy)]
pub struct AtomResolver<'a> {
    topology: &'a Topology,
}

impl<'a> AtomResolver<'a> {
    pub fn new(topology: &'a Topology) -> Self {
        Self { topology }
    }

    pub fn topology(&self) -> &'a Topology {
        self.topology
    }

    /// Scans for `atom_ref` relative to `start` without emitting any diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::StartOutOfRange`] if `start` is not a valid atom index.
    pub fn find(&self, atom_ref: &AtomRef, start: usize) -> Result<Lookup, ResolveError> {
        let natoms = self.topology.len();
        let residue = self
            .topology
            .residue_of(start)
            .ok_or(ResolveError::StartOutOfRange { start, natoms })?;
        let names = self.topology.names();
        let matches = |index: &usize| atom_ref.matches(&names[*index]);

        let lookup = match atom_ref.adjacency {
            Adjacency::CurrentResidue => match (start..residue.range.end).find(matches) {
                Some(index) => Lookup::Found(index),
                None => Lookup::NotFound(Miss {
                    atom_ref: atom_ref.clone(),
                    residue_number: residue.number,
                    terminal: false,
                }),
            },
            Adjacency::NextResidue => {
                let next_start = residue.range.end;
                match (next_start..natoms).find(matches) {
                    Some(index) => Lookup::Found(index),
                    None => {
                        let (residue_number, terminal) = match self.topology.atom(next_start) {
                            Some(next) => (
                                next.residue_number,
                                self.topology.last_residue_number() == Some(next.residue_number),
                            ),
                            None => (residue.number, true),
                        };
                        Lookup::NotFound(Miss {
                            atom_ref: atom_ref.clone(),
                            residue_number,
                            terminal,
                        })
                    }
                }
            }
            Adjacency::PreviousResidue => match (0..start).rev().find(matches) {
                Some(index) => Lookup::Found(index),
                None => Lookup::NotFound(Miss {
                    atom_ref: atom_ref.clone(),
                    residue_number: residue.number,
                    terminal: start == 0,
                }),
            },
        };

        Ok(lookup)
    }

    /// Resolves `atom_ref` relative to `start`, reporting misses according to `policy`.
    ///
    /// # Arguments
    ///
    /// * `atom_ref` - The name to look up and the residue it is expected in.
    /// * `start` - Index of the atom the lookup is relative to.
    /// * `context` - What is being built (e.g. `"bond"`), used in diagnostics.
    ///   [`CHECK_CONTEXT`] silences them entirely.
    /// * `policy` - Whether a reportable miss is a warning or an error.
    ///
    /// # Return
    ///
    /// `Ok(Some(index))` on a match, `Ok(None)` for a silent, terminal or tolerated miss.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::AtomNotFound`] for a reportable miss under
    /// [`MissingPolicy::Reject`], and [`ResolveError::StartOutOfRange`] for a bad `start`.
    pub fn resolve(
        &self,
        atom_ref: &AtomRef,
        start: usize,
        context: &str,
        policy: MissingPolicy,
    ) -> Result<Option<usize>, ResolveError> {
        let miss = match self.find(atom_ref, start)? {
            Lookup::Found(index) => {
                trace!(token = %atom_ref, start, index, "Resolved atom.");
                return Ok(Some(index));
            }
            Lookup::NotFound(miss) => miss,
        };

        if context == CHECK_CONTEXT || miss.terminal {
            debug!(
                token = %atom_ref,
                start,
                terminal = miss.terminal,
                "Atom not found; miss is not reported."
            );
            return Ok(None);
        }

        match policy {
            MissingPolicy::Tolerate => {
                warn!(
                    "atom {} not found in residue {} while adding {}",
                    miss.atom_ref.name, miss.residue_number, context
                );
                Ok(None)
            }
            MissingPolicy::Reject => Err(ResolveError::AtomNotFound {
                name: miss.atom_ref.name,
                residue_number: miss.residue_number,
                context: context.to_string(),
            }),
        }
    }

    /// Parses `token` and resolves it; see [`AtomResolver::resolve`].
    pub fn resolve_token(
        &self,
        token: &str,
        start: usize,
        context: &str,
        policy: MissingPolicy,
    ) -> Result<Option<usize>, ResolveError> {
        let atom_ref: AtomRef = token.parse()?;
        self.resolve(&atom_ref, start, context, policy)
    }
}

/// Resolves a raw token such as `"+N"` against `topology`.
///
/// `allow_missing` selects between a logged warning and an error for a reportable miss.
pub fn resolve(
    token: &str,
    start: usize,
    topology: &Topology,
    context: &str,
    allow_missing: bool,
) -> Result<Option<usize>, ResolveError> {
    AtomResolver::new(topology).resolve_token(
        token,
        start,
        context,
        MissingPolicy::from_allow_missing(allow_missing),
    )
}
