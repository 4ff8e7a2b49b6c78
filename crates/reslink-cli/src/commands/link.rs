use crate::cli::LinkArgs;
use crate::config::PartialLinkConfig;
use crate::error::Result;
use reslink::core::io::interactions::write_interactions_csv;
use reslink::core::templates::kind::InteractionKind;
use reslink::workflows::link::{self, LinkResult};
use std::fs::File;
use std::io::{self, BufWriter};
use tracing::{info, warn};

pub fn run(args: LinkArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialLinkConfig::from_file(path)?,
        None => PartialLinkConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    let topology = super::load_topology(&args.topology)?;

    info!("Invoking the link workflow...");
    let result = link::run(&topology, &config)?;

    if !result.skipped_residues.is_empty() {
        warn!(
            "{} residue(s) had no template: {:?}",
            result.skipped_residues.len(),
            result.skipped_residues
        );
    }

    match &args.output {
        Some(path) => {
            info!("Writing interactions to {:?}", path);
            let writer = BufWriter::new(File::create(path)?);
            write_interactions_csv(&result.interactions, &topology, writer)?;
            println!("{}", summary(&result));
            println!("Interactions written to: {}", path.display());
        }
        None => {
            write_interactions_csv(&result.interactions, &topology, io::stdout().lock())?;
            info!("{}", summary(&result));
        }
    }

    Ok(())
}

fn summary(result: &LinkResult) -> String {
    let counts = InteractionKind::ALL
        .iter()
        .map(|&kind| format!("{} {}", result.count(kind), kind))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Generated {} interaction(s) ({}); {} dropped, {} duplicate(s).",
        result.interactions.len(),
        counts,
        result.dropped,
        result.duplicates
    )
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{TEMPLATES, TRIPEPTIDE};
    use super::*;
    use crate::cli::MissingTemplatesFlags;
    use crate::error::CliError;
    use reslink::engine::error::EngineError;
    use std::path::{Path, PathBuf};

    struct Fixture {
        dir: tempfile::TempDir,
        topology: PathBuf,
        templates: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let topology = dir.path().join("top.toml");
            let templates = dir.path().join("residues.toml");
            std::fs::write(&topology, TRIPEPTIDE).unwrap();
            std::fs::write(&templates, TEMPLATES).unwrap();
            Self {
                dir,
                topology,
                templates,
            }
        }

        fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }
    }

    fn read_rows(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn writes_interactions_csv_to_output_file() {
        let fixture = Fixture::new();
        let output = fixture.path("out.csv");
        let args = LinkArgs {
            topology: fixture.topology.clone(),
            templates: Some(fixture.templates.clone()),
            kinds: vec![InteractionKind::Bond],
            output: Some(output.clone()),
            ..Default::default()
        };

        run(args).unwrap();

        let rows = read_rows(&output);
        assert_eq!(rows[0], "kind,residue,atoms,names");
        assert!(rows.contains(&"bond,2,2 4,C N".to_string()));
        assert!(rows.contains(&"bond,2,7 9,C N".to_string()));
        // 3 GLY 1 bonds + 6 ALA bonds + 3 GLY 3 bonds, plus the header.
        assert_eq!(rows.len(), 13);
    }

    #[test]
    fn templates_path_comes_from_config_file() {
        let fixture = Fixture::new();
        let config_path = fixture.path("link.toml");
        std::fs::write(&config_path, "templates = \"residues.toml\"\nkinds = [\"angle\"]\n").unwrap();
        let output = fixture.path("angles.csv");
        let args = LinkArgs {
            topology: fixture.topology.clone(),
            config: Some(config_path),
            output: Some(output.clone()),
            ..Default::default()
        };

        run(args).unwrap();

        let rows = read_rows(&output);
        assert_eq!(rows, vec!["kind,residue,atoms,names", "angle,2,4 5 6,N CA CB"]);
    }

    #[test]
    fn missing_template_fails_unless_allowed() {
        let fixture = Fixture::new();
        std::fs::write(&fixture.templates, "[GLY]\nbonds = [[\"N\", \"CA\"]]\n").unwrap();

        let strict = LinkArgs {
            topology: fixture.topology.clone(),
            templates: Some(fixture.templates.clone()),
            output: Some(fixture.path("strict.csv")),
            ..Default::default()
        };
        let err = run(strict).unwrap_err();
        assert!(matches!(
            err,
            CliError::Engine(EngineError::TemplateNotFound { residue_number: 2, .. })
        ));

        let output = fixture.path("tolerant.csv");
        let tolerant = LinkArgs {
            topology: fixture.topology.clone(),
            templates: Some(fixture.templates.clone()),
            missing_templates: MissingTemplatesFlags {
                allow_missing_templates: true,
                ..Default::default()
            },
            output: Some(output.clone()),
            ..Default::default()
        };
        run(tolerant).unwrap();
        assert_eq!(read_rows(&output).len(), 3);
    }

    #[test]
    fn summary_lists_counts_per_kind() {
        let result = LinkResult {
            dropped: 2,
            duplicates: 1,
            ..Default::default()
        };
        assert_eq!(
            summary(&result),
            "Generated 0 interaction(s) (0 bond, 0 angle, 0 dihedral, 0 improper); 2 dropped, 1 duplicate(s)."
        );
    }
}
