use crate::core::templates::kind::InteractionKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("At least one interaction kind must be enabled")]
    NoInteractionKinds,
}

/// How a lookup that finds nothing is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MissingPolicy {
    /// Log a warning and carry on without the atom.
    Tolerate,
    /// Report the miss to the caller as an error.
    #[default]
    Reject,
}

impl MissingPolicy {
    pub fn from_allow_missing(allow_missing: bool) -> Self {
        if allow_missing {
            MissingPolicy::Tolerate
        } else {
            MissingPolicy::Reject
        }
    }

    pub fn allows_missing(self) -> bool {
        matches!(self, MissingPolicy::Tolerate)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkConfig {
    pub templates_path: PathBuf,
    pub missing_atoms: MissingPolicy,
    pub missing_templates: MissingPolicy,
    pub kinds: Vec<InteractionKind>,
}

#[derive(Default)]
pub struct LinkConfigBuilder {
    templates_path: Option<PathBuf>,
    missing_atoms: Option<MissingPolicy>,
    missing_templates: Option<MissingPolicy>,
    kinds: Option<Vec<InteractionKind>>,
}

impl LinkConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn templates_path(mut self, path: PathBuf) -> Self {
        self.templates_path = Some(path);
        self
    }
    pub fn missing_atoms(mut self, policy: MissingPolicy) -> Self {
        self.missing_atoms = Some(policy);
        self
    }
    pub fn missing_templates(mut self, policy: MissingPolicy) -> Self {
        self.missing_templates = Some(policy);
        self
    }
    pub fn kinds(mut self, kinds: Vec<InteractionKind>) -> Self {
        self.kinds = Some(kinds);
        self
    }

    /// Assembles the final configuration.
    ///
    /// Policies default to [`MissingPolicy::Reject`] and all interaction kinds are
    /// enabled unless set. Kinds are deduplicated and put in their canonical order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingParameter`] without a template path and
    /// [`ConfigError::NoInteractionKinds`] if an empty kind list was given.
    pub fn build(self) -> Result<LinkConfig, ConfigError> {
        let templates_path = self
            .templates_path
            .ok_or(ConfigError::MissingParameter("templates_path"))?;

        let mut kinds = self.kinds.unwrap_or_else(|| InteractionKind::ALL.to_vec());
        if kinds.is_empty() {
            return Err(ConfigError::NoInteractionKinds);
        }
        kinds.sort();
        kinds.dedup();

        Ok(LinkConfig {
            templates_path,
            missing_atoms: self.missing_atoms.unwrap_or_default(),
            missing_templates: self.missing_templates.unwrap_or_default(),
            kinds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_defaults() {
        let config = LinkConfigBuilder::new()
            .templates_path(PathBuf::from("templates.toml"))
            .build()
            .unwrap();

        assert_eq!(config.templates_path, PathBuf::from("templates.toml"));
        assert_eq!(config.missing_atoms, MissingPolicy::Reject);
        assert_eq!(config.missing_templates, MissingPolicy::Reject);
        assert_eq!(config.kinds, InteractionKind::ALL.to_vec());
    }

    #[test]
    fn builder_requires_templates_path() {
        let result = LinkConfigBuilder::new()
            .missing_atoms(MissingPolicy::Tolerate)
            .build();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingParameter("templates_path")
        );
    }

    #[test]
    fn builder_rejects_empty_kind_list() {
        let result = LinkConfigBuilder::new()
            .templates_path(PathBuf::from("t.toml"))
            .kinds(Vec::new())
            .build();
        assert_eq!(result.unwrap_err(), ConfigError::NoInteractionKinds);
    }

    #[test]
    fn builder_normalizes_kinds() {
        let config = LinkConfigBuilder::new()
            .templates_path(PathBuf::from("t.toml"))
            .kinds(vec![
                InteractionKind::Dihedral,
                InteractionKind::Bond,
                InteractionKind::Dihedral,
            ])
            .missing_templates(MissingPolicy::Tolerate)
            .build()
            .unwrap();
        assert_eq!(
            config.kinds,
            vec![InteractionKind::Bond, InteractionKind::Dihedral]
        );
        assert_eq!(config.missing_templates, MissingPolicy::Tolerate);
    }

    #[test]
    fn missing_policy_maps_from_allow_missing_flag() {
        assert_eq!(MissingPolicy::from_allow_missing(true), MissingPolicy::Tolerate);
        assert_eq!(MissingPolicy::from_allow_missing(false), MissingPolicy::Reject);
        assert!(MissingPolicy::Tolerate.allows_missing());
        assert!(!MissingPolicy::Reject.allows_missing());
    }
}
