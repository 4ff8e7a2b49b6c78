use crate::core::models::topology::Topology;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing topology file formats.
///
/// Implementors only provide stream-based reading and writing; the path-based
/// helpers open and buffer the file on their behalf.
pub trait TopologyFormat {
    /// The error type for I/O and parsing failures.
    type Error: Error + From<io::Error>;

    /// Reads a topology from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails, the data violates topology invariants,
    /// or the reader fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Topology, Self::Error>;

    /// Writes a topology to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    fn write_to(topology: &Topology, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a topology from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Topology, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a topology to a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(topology: &Topology, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(topology, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
