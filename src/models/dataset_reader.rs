use crate::models::Dataset;
use crate::types::{Feature, FeatureMatrix, LabelValue};
use crate::Error;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use log::debug;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

/// Reads delimited datasets whose last column is the class label and whose remaining
/// columns are numeric features. A header row is expected.
pub struct DatasetReader {}

impl DatasetReader {
    pub fn read_dataset_from_string(csv: &str) -> Result<Dataset, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(Cursor::new(csv));

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        if headers.len() < 2 {
            return Err(Error::ParserError(format!(
                "Expected at least one feature column and a label column, found {} column(s)",
                headers.len()
            )));
        }

        let mut features = FeatureMatrix::new();
        let mut labels: Vec<LabelValue> = Vec::new();

        for (row_index, record) in reader.records().enumerate() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            let mut values = record
                .iter()
                .enumerate()
                .map(|(column_index, field)| {
                    field.parse::<Feature>().map_err(|e| {
                        Error::ParserError(format!(
                            "Row {}, column '{}': cannot parse '{}' as a number ({})",
                            row_index + 1,
                            headers.get(column_index).unwrap_or("?"),
                            field,
                            e
                        ))
                    })
                })
                .collect::<Result<Vec<Feature>, Error>>()?;

            // The csv reader rejects records whose length differs from the header
            let label = values.pop().unwrap_or_default();

            features.push(values);
            labels.push(label);
        }

        debug!(
            "Parsed {} rows with {} feature columns",
            labels.len(),
            headers.len() - 1
        );

        Dataset::new(features, labels)
    }

    /// Decompress and parse a gzip-compressed dataset
    pub fn extract_dataset_from_bytes(read_bytes: &[u8]) -> Result<Dataset, Error> {
        let mut decoder = GzDecoder::new(read_bytes);
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data)?;

        Self::read_dataset_from_string(&decompressed_data)
    }

    /// Reads a dataset from disk. Files with a `.gz` extension are decompressed first.
    pub fn read_dataset_from_path<P: AsRef<Path>>(path: P) -> Result<Dataset, Error> {
        let path = path.as_ref();
        let mut file = File::open(path)?;

        let is_gzip = path
            .extension()
            .map(|extension| extension.eq_ignore_ascii_case("gz"))
            .unwrap_or(false);

        if is_gzip {
            let mut compressed_data = Vec::new();
            file.read_to_end(&mut compressed_data)?;
            Self::extract_dataset_from_bytes(&compressed_data)
        } else {
            let mut contents = String::new();
            file.read_to_string(&mut contents)?;
            Self::read_dataset_from_string(&contents)
        }
    }
}
