use crate::constants::CSV_HEADERS;
use crate::models::Error;
use crate::types::{NGram, NGramFrequency};
use csv::ReaderBuilder;
use std::io::Read;

/// Parses a frequency table previously written by
/// [`write_frequency_csv`](crate::write_frequency_csv).
///
/// The n-gram column is split on single spaces to recover the token
/// sequence. Tokens produced by the tokenizer never contain whitespace, so
/// this inverse is exact for exported data.
pub fn read_frequency_csv<R: Read>(reader: R) -> Result<Vec<(NGram, NGramFrequency)>, Error> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    // Extract column headers
    let headers = csv_reader
        .headers()
        .map_err(|e| Error::CsvError(format!("Failed to read headers: {}", e)))?
        .clone();

    let ngram_position = headers
        .iter()
        .position(|h| h == CSV_HEADERS[0])
        .ok_or_else(|| Error::CsvError(format!("Missing '{}' column", CSV_HEADERS[0])))?;

    let frequency_position = headers
        .iter()
        .position(|h| h == CSV_HEADERS[1])
        .ok_or_else(|| Error::CsvError(format!("Missing '{}' column", CSV_HEADERS[1])))?;

    let mut ranked: Vec<(NGram, NGramFrequency)> = Vec::new();

    for record in csv_reader.records() {
        let record = record.map_err(|e| Error::CsvError(format!("Failed to read record: {}", e)))?;

        let ngram_field = record
            .get(ngram_position)
            .ok_or_else(|| Error::CsvError(format!("Missing '{}' field", CSV_HEADERS[0])))?;

        let frequency_field = record
            .get(frequency_position)
            .ok_or_else(|| Error::CsvError(format!("Missing '{}' field", CSV_HEADERS[1])))?;

        let frequency = frequency_field.parse::<NGramFrequency>().map_err(|e| {
            Error::CsvError(format!("Invalid frequency '{}': {}", frequency_field, e))
        })?;

        let ngram: NGram = ngram_field.split(' ').map(str::to_string).collect();

        ranked.push((ngram, frequency));
    }

    Ok(ranked)
}
