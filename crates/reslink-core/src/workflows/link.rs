use crate::core::models::interaction::Interaction;
use crate::core::models::topology::Topology;
use crate::core::templates::kind::InteractionKind;
use crate::core::templates::registry::{TemplateEntry, TemplateRegistry};
use crate::engine::config::{LinkConfig, MissingPolicy};
use crate::engine::error::{EngineError, ResolveError};
use crate::engine::resolver::AtomResolver;
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkResult {
    /// Resolved interactions in residue, kind, then template order.
    pub interactions: Vec<Interaction>,
    /// Template entries dropped because one of their atoms was not found.
    pub dropped: usize,
    /// Interactions already produced by an earlier residue (e.g. a peptide bond
    /// declared as both `+N` and `-C`).
    pub duplicates: usize,
    /// Residue numbers that had no template.
    pub skipped_residues: Vec<isize>,
}

impl LinkResult {
    pub fn count(&self, kind: InteractionKind) -> usize {
        self.interactions
            .iter()
            .filter(|interaction| interaction.kind == kind)
            .count()
    }
}

/// Loads the templates named by `config` and links `topology` against them.
///
/// # Errors
///
/// Returns [`EngineError::Templates`] if the template file cannot be loaded, and any
/// error of [`link_topology`].
#[instrument(skip_all, name = "link_workflow")]
pub fn run(topology: &Topology, config: &LinkConfig) -> Result<LinkResult, EngineError> {
    info!(
        path = %config.templates_path.display(),
        "Loading residue interaction templates."
    );
    let registry = TemplateRegistry::load(&config.templates_path)?;
    info!(templates = registry.len(), "Templates loaded.");

    link_topology(topology, &registry, config)
}

/// Expands the template of every residue into resolved interactions.
///
/// Tokens of each template entry are resolved relative to the first atom of the
/// residue, with the interaction kind as the resolver context.
///
/// # Errors
///
/// Returns [`EngineError::TemplateNotFound`] for a residue without a template under
/// [`MissingPolicy::Reject`], and [`EngineError::Resolve`] for a rejected atom miss.
#[instrument(skip_all, fields(residues = topology.residues().len()))]
pub fn link_topology(
    topology: &Topology,
    registry: &TemplateRegistry,
    config: &LinkConfig,
) -> Result<LinkResult, EngineError> {
    let resolver = AtomResolver::new(topology);
    let mut result = LinkResult::default();
    let mut seen = HashSet::new();

    for residue in topology.residues() {
        let Some(template) = registry.get(&residue.name) else {
            match config.missing_templates {
                MissingPolicy::Tolerate => {
                    warn!(
                        "no interaction template for residue {} ({}), skipping it",
                        residue.name, residue.number
                    );
                    result.skipped_residues.push(residue.number);
                    continue;
                }
                MissingPolicy::Reject => {
                    return Err(EngineError::TemplateNotFound {
                        residue_name: residue.name.clone(),
                        residue_number: residue.number,
                    });
                }
            }
        };

        for &kind in &config.kinds {
            for entry in template.entries_of(kind) {
                let Some(atoms) =
                    resolve_entry(&resolver, entry, residue.range.start, config.missing_atoms)?
                else {
                    result.dropped += 1;
                    continue;
                };

                let interaction = Interaction::new(kind, residue.number, atoms);
                if seen.insert(interaction.canonical_key()) {
                    result.interactions.push(interaction);
                } else {
                    debug!(?interaction, "Skipping duplicate interaction.");
                    result.duplicates += 1;
                }
            }
        }
    }

    info!(
        interactions = result.interactions.len(),
        dropped = result.dropped,
        duplicates = result.duplicates,
        skipped_residues = result.skipped_residues.len(),
        "Linking complete."
    );
    Ok(result)
}

fn resolve_entry(
    resolver: &AtomResolver<'_>,
    entry: &TemplateEntry,
    start: usize,
    policy: MissingPolicy,
) -> Result<Option<Vec<usize>>, ResolveError> {
    let mut atoms = Vec::with_capacity(entry.kind.atom_count());
    for atom_ref in &entry.atoms {
        match resolver.resolve(atom_ref, start, entry.kind.label(), policy)? {
            Some(index) => atoms.push(index),
            None => return Ok(None),
        }
    }
    Ok(Some(atoms))
}
