use clap::{Args, Parser, Subcommand};
use reslink::core::templates::kind::InteractionKind;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "reslink - resolve residue-relative atom names and expand residue templates into bonded interactions.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output, including missing-atom warnings
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a single atom token such as `CA`, `+N` or `-C` against a topology.
    Resolve(ResolveArgs),
    /// Expand residue templates into resolved bonds, angles, dihedrals and impropers.
    Link(LinkArgs),
}

/// Arguments for the `resolve` subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Path to the topology file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub topology: PathBuf,

    /// Zero-based index of an atom in the residue to search from.
    #[arg(short, long, default_value_t = 0, value_name = "INDEX")]
    pub start: usize,

    /// Label used in missing-atom messages. `check` suppresses them entirely.
    #[arg(long, default_value = "bond", value_name = "LABEL")]
    pub context: String,

    /// Log a warning instead of failing when the atom is not found.
    #[arg(long)]
    pub allow_missing: bool,

    /// Atom token to resolve. Pass `--` before tokens that start with `-`.
    #[arg(required = true, allow_hyphen_values = true, value_name = "TOKEN")]
    pub token: String,
}

/// Arguments for the `link` subcommand.
#[derive(Args, Debug, Default)]
pub struct LinkArgs {
    /// Path to the topology file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub topology: PathBuf,

    /// Path to a link configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the residue template file from the config file.
    #[arg(long, value_name = "PATH")]
    pub templates: Option<PathBuf>,

    /// Override `allow-missing-atoms` from the config file.
    #[command(flatten)]
    pub missing_atoms: MissingAtomsFlags,

    /// Override `allow-missing-templates` from the config file.
    #[command(flatten)]
    pub missing_templates: MissingTemplatesFlags,

    /// Interaction kinds to generate, comma separated (e.g. `bond,angle`).
    #[arg(short, long, value_delimiter = ',', value_name = "KIND")]
    pub kinds: Vec<InteractionKind>,

    /// Write the interactions CSV here instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// A group to handle mutually exclusive flags for tolerating missing atoms.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = false, multiple = false)]
pub struct MissingAtomsFlags {
    /// Warn and drop template entries whose atoms are missing instead of failing.
    #[arg(long)]
    pub allow_missing_atoms: bool,
    /// Fail on a missing atom even if the config file allows it.
    #[arg(long)]
    pub no_allow_missing_atoms: bool,
}

/// A group to handle mutually exclusive flags for tolerating residues without a template.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = false, multiple = false)]
pub struct MissingTemplatesFlags {
    /// Warn and skip residues without a template instead of failing.
    #[arg(long)]
    pub allow_missing_templates: bool,
    /// Fail on a residue without a template even if the config file allows it.
    #[arg(long)]
    pub no_allow_missing_templates: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn resolve_accepts_prefixed_tokens_after_separator() {
        let cli =
            Cli::try_parse_from(["reslink", "resolve", "-t", "top.toml", "-s", "4", "--", "-C"])
                .unwrap();
        match cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.token, "-C");
                assert_eq!(args.start, 4);
                assert_eq!(args.context, "bond");
                assert!(!args.allow_missing);
            }
            other => panic!("expected resolve, got {:?}", other),
        }
    }

    #[test]
    fn link_parses_kind_list() {
        let cli = Cli::try_parse_from([
            "reslink",
            "link",
            "-t",
            "top.toml",
            "--kinds",
            "bond,Angles",
            "--allow-missing-atoms",
        ])
        .unwrap();
        match cli.command {
            Commands::Link(args) => {
                assert_eq!(
                    args.kinds,
                    vec![InteractionKind::Bond, InteractionKind::Angle]
                );
                assert!(args.missing_atoms.allow_missing_atoms);
                assert!(!args.missing_atoms.no_allow_missing_atoms);
                assert!(!args.missing_templates.allow_missing_templates);
                assert!(args.output.is_none());
            }
            other => panic!("expected link, got {:?}", other),
        }
    }

    #[test]
    fn link_rejects_unknown_kind() {
        let result = Cli::try_parse_from(["reslink", "link", "-t", "top.toml", "-k", "torsion"]);
        assert!(result.is_err());
    }

    #[test]
    fn allow_and_no_allow_flags_conflict() {
        let result = Cli::try_parse_from([
            "reslink",
            "link",
            "-t",
            "top.toml",
            "--allow-missing-templates",
            "--no-allow-missing-templates",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn no_allow_flag_parses() {
        let cli = Cli::try_parse_from([
            "reslink",
            "link",
            "-t",
            "top.toml",
            "--no-allow-missing-atoms",
        ])
        .unwrap();
        match cli.command {
            Commands::Link(args) => {
                assert!(args.missing_atoms.no_allow_missing_atoms);
                assert!(!args.missing_atoms.allow_missing_atoms);
            }
            other => panic!("expected link, got {:?}", other),
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["reslink", "-q", "-v", "resolve", "-t", "x", "CA"]);
        assert!(result.is_err());
    }
}
