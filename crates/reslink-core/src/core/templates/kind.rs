use phf::{Map, phf_map};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A bonded interaction type, ordered bonds first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Bond,
    Angle,
    Dihedral,
    Improper,
}

static KIND_NAMES: Map<&'static str, InteractionKind> = phf_map! {
    "bond" => InteractionKind::Bond, "bonds" => InteractionKind::Bond,
    "angle" => InteractionKind::Angle, "angles" => InteractionKind::Angle,
    "dihedral" => InteractionKind::Dihedral, "dihedrals" => InteractionKind::Dihedral,
    "improper" => InteractionKind::Improper, "impropers" => InteractionKind::Improper,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown interaction kind '{0}'. Expected one of: bond, angle, dihedral, improper.")]
pub struct ParseKindError(pub String);

impl InteractionKind {
    pub const ALL: [InteractionKind; 4] = [
        InteractionKind::Bond,
        InteractionKind::Angle,
        InteractionKind::Dihedral,
        InteractionKind::Improper,
    ];

    /// Label used as the resolver context, e.g. "while adding bond".
    pub fn label(self) -> &'static str {
        match self {
            InteractionKind::Bond => "bond",
            InteractionKind::Angle => "angle",
            InteractionKind::Dihedral => "dihedral",
            InteractionKind::Improper => "improper",
        }
    }

    pub fn atom_count(self) -> usize {
        match self {
            InteractionKind::Bond => 2,
            InteractionKind::Angle => 3,
            InteractionKind::Dihedral | InteractionKind::Improper => 4,
        }
    }
}

impl FromStr for InteractionKind {
    type Err = ParseKindError;

    /// Parses singular or plural kind names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KIND_NAMES
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
