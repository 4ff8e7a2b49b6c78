use crate::cli::LinkArgs;
use crate::error::{CliError, Result};
use reslink::core::templates::kind::InteractionKind;
use reslink::engine::config::{LinkConfig, LinkConfigBuilder, MissingPolicy};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Link settings as written in a configuration file; every field is optional.
///
/// ```toml
/// templates = "residues.toml"
/// allow-missing-atoms = true
/// allow-missing-templates = false
/// kinds = ["bond", "angle"]
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialLinkConfig {
    pub templates: Option<PathBuf>,
    pub allow_missing_atoms: Option<bool>,
    pub allow_missing_templates: Option<bool>,
    pub kinds: Option<Vec<String>>,
}

impl PartialLinkConfig {
    /// Reads a configuration file. A relative `templates` path is taken relative to
    /// the directory of the file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading link configuration from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| {
            CliError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        if let (Some(templates), Some(base)) = (&config.templates, path.parent()) {
            if templates.is_relative() {
                config.templates = Some(base.join(templates));
            }
        }
        Ok(config)
    }

    /// Merges command-line arguments over the file values and builds the final
    /// configuration. A flag given on the command line always wins, in either
    /// direction (`--allow-missing-*` or `--no-allow-missing-*`).
    pub fn merge_with_cli(self, args: &LinkArgs) -> Result<LinkConfig> {
        let templates_path = args.templates.clone().or(self.templates).ok_or_else(|| {
            CliError::Config(
                "No residue template file given. Use --templates or set `templates` in the config file."
                    .to_string(),
            )
        })?;

        let allow_missing_atoms = pick_allow(
            args.missing_atoms.allow_missing_atoms,
            args.missing_atoms.no_allow_missing_atoms,
            self.allow_missing_atoms,
        );
        let allow_missing_templates = pick_allow(
            args.missing_templates.allow_missing_templates,
            args.missing_templates.no_allow_missing_templates,
            self.allow_missing_templates,
        );

        let mut builder = LinkConfigBuilder::new()
            .templates_path(templates_path)
            .missing_atoms(MissingPolicy::from_allow_missing(allow_missing_atoms))
            .missing_templates(MissingPolicy::from_allow_missing(allow_missing_templates));

        if !args.kinds.is_empty() {
            builder = builder.kinds(args.kinds.clone());
        } else if let Some(names) = self.kinds {
            let kinds = names
                .iter()
                .map(|name| name.parse::<InteractionKind>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| CliError::Config(e.to_string()))?;
            builder = builder.kinds(kinds);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }
}

fn pick_allow(allow: bool, deny: bool, file: Option<bool>) -> bool {
    match (allow, deny) {
        (true, false) => true,
        (false, true) => false,
        _ => file.unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{MissingAtomsFlags, MissingTemplatesFlags};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_all_fields() {
        let file = write_config(
            "templates = \"/data/residues.toml\"\nallow-missing-atoms = true\nkinds = [\"bond\"]\n",
        );
        let config = PartialLinkConfig::from_file(file.path()).unwrap();
        assert_eq!(config.templates, Some(PathBuf::from("/data/residues.toml")));
        assert_eq!(config.allow_missing_atoms, Some(true));
        assert_eq!(config.allow_missing_templates, None);
        assert_eq!(config.kinds, Some(vec!["bond".to_string()]));
    }

    #[test]
    fn relative_templates_path_is_resolved_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("link.toml");
        std::fs::write(&path, "templates = \"residues.toml\"\n").unwrap();

        let config = PartialLinkConfig::from_file(&path).unwrap();
        assert_eq!(config.templates, Some(dir.path().join("residues.toml")));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let file = write_config("templates = \"a.toml\"\nforcefield = \"x\"\n");
        let result = PartialLinkConfig::from_file(file.path());
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PartialLinkConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let args = LinkArgs {
            templates: Some(PathBuf::from("residues.toml")),
            ..Default::default()
        };
        let config = PartialLinkConfig::default().merge_with_cli(&args).unwrap();

        assert_eq!(config.templates_path, PathBuf::from("residues.toml"));
        assert_eq!(config.missing_atoms, MissingPolicy::Reject);
        assert_eq!(config.missing_templates, MissingPolicy::Reject);
        assert_eq!(config.kinds, InteractionKind::ALL.to_vec());
    }

    #[test]
    fn cli_values_override_file_values() {
        let file = PartialLinkConfig {
            templates: Some(PathBuf::from("file.toml")),
            allow_missing_atoms: Some(false),
            allow_missing_templates: Some(true),
            kinds: Some(vec!["dihedral".to_string()]),
        };
        let args = LinkArgs {
            templates: Some(PathBuf::from("cli.toml")),
            missing_atoms: MissingAtomsFlags {
                allow_missing_atoms: true,
                ..Default::default()
            },
            kinds: vec![InteractionKind::Bond],
            ..Default::default()
        };
        let config = file.merge_with_cli(&args).unwrap();

        assert_eq!(config.templates_path, PathBuf::from("cli.toml"));
        assert_eq!(config.missing_atoms, MissingPolicy::Tolerate);
        assert_eq!(config.missing_templates, MissingPolicy::Tolerate);
        assert_eq!(config.kinds, vec![InteractionKind::Bond]);
    }

    #[test]
    fn cli_can_switch_off_tolerance_enabled_in_file() {
        let file = PartialLinkConfig {
            templates: Some(PathBuf::from("file.toml")),
            allow_missing_atoms: Some(true),
            allow_missing_templates: Some(true),
            kinds: None,
        };
        let args = LinkArgs {
            missing_atoms: MissingAtomsFlags {
                no_allow_missing_atoms: true,
                ..Default::default()
            },
            missing_templates: MissingTemplatesFlags {
                no_allow_missing_templates: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let config = file.merge_with_cli(&args).unwrap();

        assert_eq!(config.missing_atoms, MissingPolicy::Reject);
        assert_eq!(config.missing_templates, MissingPolicy::Reject);
    }

    #[test]
    fn file_value_applies_without_cli_flag() {
        assert!(pick_allow(false, false, Some(true)));
        assert!(!pick_allow(false, false, Some(false)));
        assert!(!pick_allow(false, false, None));
        assert!(pick_allow(true, false, Some(false)));
        assert!(!pick_allow(false, true, Some(true)));
    }

    #[test]
    fn file_kinds_are_parsed() {
        let file = PartialLinkConfig {
            templates: Some(PathBuf::from("file.toml")),
            kinds: Some(vec!["Impropers".to_string(), "bond".to_string()]),
            ..Default::default()
        };
        let config = file.merge_with_cli(&LinkArgs::default()).unwrap();
        assert_eq!(
            config.kinds,
            vec![InteractionKind::Bond, InteractionKind::Improper]
        );
    }

    #[test]
    fn unknown_file_kind_is_a_config_error() {
        let file = PartialLinkConfig {
            templates: Some(PathBuf::from("file.toml")),
            kinds: Some(vec!["torsion".to_string()]),
            ..Default::default()
        };
        let result = file.merge_with_cli(&LinkArgs::default());
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn empty_file_kind_list_is_a_config_error() {
        let file = PartialLinkConfig {
            templates: Some(PathBuf::from("file.toml")),
            kinds: Some(Vec::new()),
            ..Default::default()
        };
        let result = file.merge_with_cli(&LinkArgs::default());
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn missing_templates_path_is_a_config_error() {
        let result = PartialLinkConfig::default().merge_with_cli(&LinkArgs::default());
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
