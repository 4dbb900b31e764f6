use crate::core::models::catalogue::ProteinCatalogue;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading protein catalogues from a text format.
pub trait CatalogueFile {
    /// The error type for parsing and I/O failures.
    type Error: Error + From<io::Error>;

    /// Reads a catalogue from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    /// * `source` - A label for where the data came from, kept on the catalogue for titles.
    ///
    /// # Errors
    ///
    /// Returns an error if a line cannot be parsed or the reader fails.
    fn read_from(reader: &mut impl BufRead, source: &str)
    -> Result<ProteinCatalogue, Self::Error>;

    /// Reads a catalogue from a file path, using the path as the catalogue source.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<ProteinCatalogue, Self::Error> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, &path.display().to_string())
    }
}
