use crate::core::models::interaction::Interaction;
use crate::core::models::topology::Topology;
use std::io::Write;

const HEADER: [&str; 4] = ["kind", "residue", "atoms", "names"];

/// Writes interactions as CSV with one row per interaction.
///
/// Atom indices are zero-based and space-separated; the `names` column lists the
/// corresponding atom names from `topology` in the same order.
pub fn write_interactions_csv<W: Write>(
    interactions: &[Interaction],
    topology: &Topology,
    writer: W,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for interaction in interactions {
        let residue = interaction.residue_number.to_string();
        let atoms = interaction
            .atoms
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        let names = interaction
            .atoms
            .iter()
            .map(|&index| topology.name(index).unwrap_or("?"))
            .collect::<Vec<_>>()
            .join(" ");

        csv_writer.write_record([
            interaction.kind.label(),
            residue.as_str(),
            atoms.as_str(),
            names.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
