use crate::error::{GatewayError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;

/// One row of an options export: `option,value`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct SettingRow {
    pub option: String,
    #[serde(default)]
    pub value: String,
}

/// Reads gateway options from a CSV source.
///
/// Whitespace is trimmed and rows may be short; a missing value reads as empty.
pub struct SettingsReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> SettingsReader<R> {
    /// Creates a new `SettingsReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn rows(self) -> impl Iterator<Item = Result<SettingRow>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(GatewayError::from))
    }

    /// Collects all rows; later rows win when an option repeats.
    pub fn into_options(self) -> Result<HashMap<String, String>> {
        self.rows()
            .map(|row| row.map(|r| (r.option, r.value)))
            .collect()
    }
}
