use thiserror::Error;

use super::config::ConfigError;
use super::resolver::token::TokenError;
use crate::core::templates::registry::TemplateLoadError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Start index {start} is out of range for a topology of {natoms} atoms")]
    StartOutOfRange { start: usize, natoms: usize },

    #[error("Atom {name} not found in residue {residue_number} while adding {context}")]
    AtomNotFound {
        name: String,
        residue_number: isize,
        context: String,
    },

    #[error("Invalid atom token: {0}")]
    Token(#[from] TokenError),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load interaction templates: {0}")]
    Templates(#[from] TemplateLoadError),

    #[error("No interaction template for residue {residue_name} ({residue_number})")]
    TemplateNotFound {
        residue_name: String,
        residue_number: isize,
    },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
