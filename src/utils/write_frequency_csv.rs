use crate::constants::CSV_HEADERS;
use crate::models::Error;
use crate::types::{NGram, NGramFrequency};
use csv::WriterBuilder;
use std::io::Write;

/// Writes a ranked result as a comma-separated table.
///
/// The output starts with the header row `N-gram,Frequency`, followed by one
/// row per entry in ranked order: the n-gram's tokens joined by single spaces
/// (fields containing a comma are quoted by the CSV layer), then the integer
/// count. No trailing metadata rows are emitted, so the file round-trips
/// through [`read_frequency_csv`](crate::read_frequency_csv) exactly.
pub fn write_frequency_csv<W: Write>(
    ranked: &[(NGram, NGramFrequency)],
    writer: W,
) -> Result<(), Error> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);

    csv_writer
        .write_record(&CSV_HEADERS)
        .map_err(|e| Error::CsvError(format!("Failed to write headers: {}", e)))?;

    for (ngram, frequency) in ranked {
        csv_writer
            .write_record(&[ngram.join(" "), frequency.to_string()])
            .map_err(|e| Error::CsvError(format!("Failed to write record: {}", e)))?;
    }

    csv_writer
        .flush()
        .map_err(|e| Error::CsvError(format!("Failed to flush output: {}", e)))?;

    Ok(())
}
