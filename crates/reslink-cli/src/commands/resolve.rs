use crate::cli::ResolveArgs;
use crate::error::Result;
use reslink::core::models::topology::Topology;
use reslink::engine::resolver;
use tracing::info;

pub fn run(args: ResolveArgs) -> Result<()> {
    let topology = super::load_topology(&args.topology)?;

    info!(
        "Resolving '{}' from atom {} (context '{}')",
        args.token, args.start, args.context
    );
    let index = resolver::resolve(
        &args.token,
        args.start,
        &topology,
        &args.context,
        args.allow_missing,
    )?;

    println!("{}", describe(index, &topology));
    Ok(())
}

/// One line for stdout: the zero-based index and atom name, or `not found`.
fn describe(index: Option<usize>, topology: &Topology) -> String {
    match index {
        Some(index) => format!("{}\t{}", index, topology.name(index).unwrap_or("?")),
        None => "not found".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::TRIPEPTIDE;
    use super::*;
    use crate::error::CliError;
    use reslink::engine::error::ResolveError;
    use std::path::PathBuf;

    fn args(topology: PathBuf, token: &str, start: usize, allow_missing: bool) -> ResolveArgs {
        ResolveArgs {
            topology,
            start,
            context: "bond".to_string(),
            allow_missing,
            token: token.to_string(),
        }
    }

    fn topology_file() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top.toml");
        std::fs::write(&path, TRIPEPTIDE).unwrap();
        (dir, path)
    }

    #[test]
    fn describe_formats_index_and_name() {
        let (_dir, path) = topology_file();
        let topology = super::super::load_topology(&path).unwrap();
        assert_eq!(describe(Some(4), &topology), "4\tN");
        assert_eq!(describe(None, &topology), "not found");
    }

    #[test]
    fn resolves_prefixed_token() {
        let (_dir, path) = topology_file();
        assert!(run(args(path, "+N", 5, false)).is_ok());
    }

    #[test]
    fn missing_atom_fails_unless_allowed() {
        let (_dir, path) = topology_file();

        let err = run(args(path.clone(), "CB", 0, false)).unwrap_err();
        assert!(matches!(
            err,
            CliError::Resolve(ResolveError::AtomNotFound { .. })
        ));

        assert!(run(args(path, "CB", 0, true)).is_ok());
    }

    #[test]
    fn start_out_of_range_is_an_error() {
        let (_dir, path) = topology_file();
        let err = run(args(path, "CA", 99, true)).unwrap_err();
        assert!(matches!(
            err,
            CliError::Resolve(ResolveError::StartOutOfRange { .. })
        ));
    }
}
