mod parser;

use super::domain::ScoreSheet;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ScoreSheetImportError {
    #[error("failed to read score sheet export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid score sheet CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Imports diligence sheets from a CSV export whose headers are the form's
/// display labels ("Market Size", "Product Uniqueness", ...).
pub struct ScoreSheetImporter;

impl ScoreSheetImporter {
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ScoreSheet>, ScoreSheetImportError> {
        Ok(parser::parse_sheets(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<ScoreSheet>, ScoreSheetImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }
}
