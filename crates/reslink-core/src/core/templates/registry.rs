use super::kind::InteractionKind;
use crate::engine::resolver::token::{AtomRef, TokenError};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

const INLINE_SOURCE: &str = "<inline>";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
struct RawResidueTemplate {
    #[serde(default)]
    bonds: Vec<Vec<String>>,
    #[serde(default)]
    angles: Vec<Vec<String>>,
    #[serde(default)]
    dihedrals: Vec<Vec<String>>,
    #[serde(default)]
    impropers: Vec<Vec<String>>,
}

/// One interaction of a residue template, with its atoms still given as tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub kind: InteractionKind,
    pub atoms: Vec<AtomRef>,
}

/// The bonded interactions declared for one residue type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResidueTemplate {
    entries: Vec<TemplateEntry>,
}

impl ResidueTemplate {
    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn entries_of(&self, kind: InteractionKind) -> impl Iterator<Item = &TemplateEntry> {
        self.entries.iter().filter(move |entry| entry.kind == kind)
    }

    fn from_raw(residue_name: &str, raw: RawResidueTemplate) -> Result<Self, TemplateLoadError> {
        let mut entries = Vec::new();
        let groups = [
            (InteractionKind::Bond, raw.bonds),
            (InteractionKind::Angle, raw.angles),
            (InteractionKind::Dihedral, raw.dihedrals),
            (InteractionKind::Improper, raw.impropers),
        ];

        for (kind, group) in groups {
            for tokens in group {
                if tokens.len() != kind.atom_count() {
                    return Err(TemplateLoadError::Arity {
                        residue: residue_name.to_string(),
                        kind,
                        expected: kind.atom_count(),
                        found: tokens.len(),
                    });
                }
                let atoms = tokens
                    .iter()
                    .map(|token| {
                        token
                            .parse::<AtomRef>()
                            .map_err(|source| TemplateLoadError::InvalidToken {
                                residue: residue_name.to_string(),
                                token: token.clone(),
                                source,
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                entries.push(TemplateEntry { kind, atoms });
            }
        }

        Ok(Self { entries })
    }
}

/// Residue templates keyed by residue name.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    registry: HashMap<String, ResidueTemplate>,
    /// Upper-cased residue name to the name as written in the file.
    folded: HashMap<String, String>,
}

impl TemplateRegistry {
    pub fn load(path: &Path) -> Result<Self, TemplateLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| TemplateLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, TemplateLoadError> {
        Self::parse(content, INLINE_SOURCE)
    }

    fn parse(content: &str, source_name: &str) -> Result<Self, TemplateLoadError> {
        let raw: HashMap<String, RawResidueTemplate> =
            toml::from_str(content).map_err(|e| TemplateLoadError::Toml {
                path: source_name.to_string(),
                source: e,
            })?;

        let mut registry = HashMap::with_capacity(raw.len());
        let mut folded: HashMap<String, String> = HashMap::with_capacity(raw.len());
        for (name, template) in raw {
            if let Some(other) = folded.insert(name.to_ascii_uppercase(), name.clone()) {
                let (first, second) = if other < name {
                    (other, name)
                } else {
                    (name, other)
                };
                return Err(TemplateLoadError::AmbiguousResidue { first, second });
            }
            let template = ResidueTemplate::from_raw(&name, template)?;
            registry.insert(name, template);
        }

        Ok(Self { registry, folded })
    }

    /// Looks up a template by residue name, preferring an exact match over a
    /// case-insensitive one.
    pub fn get(&self, residue_name: &str) -> Option<&ResidueTemplate> {
        self.registry.get(residue_name).or_else(|| {
            self.folded
                .get(&residue_name.to_ascii_uppercase())
                .and_then(|name| self.registry.get(name))
        })
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum TemplateLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Template for residue {residue} has a {kind} with {found} atoms, expected {expected}")]
    Arity {
        residue: String,
        kind: InteractionKind,
        expected: usize,
        found: usize,
    },
    #[error("Residue templates '{first}' and '{second}' differ only in case")]
    AmbiguousResidue { first: String, second: String },
    #[error("Invalid atom token '{token}' in template for residue {residue}: {source}")]
    InvalidToken {
        residue: String,
        token: String,
        source: TokenError,
    },
}
