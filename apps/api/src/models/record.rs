use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Literal written into any column whose extractor found nothing.
pub const NOT_FOUND: &str = "Not Found";

/// One document's text plus the name it was uploaded under (extension included).
/// `raw_text` may be empty for scanned or unreadable documents.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceDocument {
    pub raw_text: String,
    pub file_name: String,
}

impl SourceDocument {
    pub fn new(raw_text: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            file_name: file_name.into(),
        }
    }
}

/// Result of a single field extractor: a value, or the explicit "not found" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCandidate {
    Found(String),
    NotFound,
}

impl FieldCandidate {
    pub fn is_found(&self) -> bool {
        matches!(self, FieldCandidate::Found(_))
    }

    pub fn into_value(self) -> String {
        match self {
            FieldCandidate::Found(value) => value,
            FieldCandidate::NotFound => NOT_FOUND.to_string(),
        }
    }
}

impl From<Option<String>> for FieldCandidate {
    fn from(value: Option<String>) -> Self {
        value.map_or(FieldCandidate::NotFound, FieldCandidate::Found)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Email,
    Phone,
    Nationality,
    Designation,
}

impl Column {
    /// Spreadsheet header text for this column.
    pub fn header(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Email => "Email",
            Column::Phone => "Phone Number",
            Column::Nationality => "Nationality",
            Column::Designation => "Designation",
        }
    }
}

/// Which column set the consumer expects. `Basic` predates designation extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordLayout {
    Basic,
    #[default]
    Full,
}

const BASIC_COLUMNS: &[Column] = &[
    Column::Name,
    Column::Email,
    Column::Phone,
    Column::Nationality,
];

const FULL_COLUMNS: &[Column] = &[
    Column::Name,
    Column::Email,
    Column::Phone,
    Column::Nationality,
    Column::Designation,
];

impl RecordLayout {
    pub fn columns(self) -> &'static [Column] {
        match self {
            RecordLayout::Basic => BASIC_COLUMNS,
            RecordLayout::Full => FULL_COLUMNS,
        }
    }

    pub fn headers(self) -> Vec<&'static str> {
        self.columns().iter().map(|c| c.header()).collect()
    }
}

impl FromStr for RecordLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "4" => Ok(RecordLayout::Basic),
            "full" | "5" => Ok(RecordLayout::Full),
            other => Err(format!(
                "unknown record layout '{other}' (expected 'basic' or 'full')"
            )),
        }
    }
}

impl fmt::Display for RecordLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordLayout::Basic => f.write_str("basic"),
            RecordLayout::Full => f.write_str("full"),
        }
    }
}

/// Final output row for one document. Every field is always a string;
/// missing data is the literal [`NOT_FOUND`], never an omission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub nationality: String,
    pub designation: String,
}

impl ExtractionRecord {
    /// A record with every column set to [`NOT_FOUND`].
    pub fn not_found() -> Self {
        Self {
            name: NOT_FOUND.to_string(),
            email: NOT_FOUND.to_string(),
            phone: NOT_FOUND.to_string(),
            nationality: NOT_FOUND.to_string(),
            designation: NOT_FOUND.to_string(),
        }
    }

    pub fn value_mut(&mut self, column: Column) -> &mut String {
        match column {
            Column::Name => &mut self.name,
            Column::Email => &mut self.email,
            Column::Phone => &mut self.phone,
            Column::Nationality => &mut self.nationality,
            Column::Designation => &mut self.designation,
        }
    }

    pub fn value(&self, column: Column) -> &str {
        match column {
            Column::Name => &self.name,
            Column::Email => &self.email,
            Column::Phone => &self.phone,
            Column::Nationality => &self.nationality,
            Column::Designation => &self.designation,
        }
    }

    /// Values in the canonical column order for `layout`.
    pub fn to_row(&self, layout: RecordLayout) -> Vec<String> {
        layout
            .columns()
            .iter()
            .map(|&c| self.value(c).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExtractionRecord {
        ExtractionRecord {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+971 50 123 4567".to_string(),
            nationality: "Indian".to_string(),
            designation: "Data Analyst".to_string(),
        }
    }

    #[test]
    fn test_full_layout_headers_in_canonical_order() {
        assert_eq!(
            RecordLayout::Full.headers(),
            vec!["Name", "Email", "Phone Number", "Nationality", "Designation"]
        );
    }

    #[test]
    fn test_basic_layout_has_no_designation_column() {
        assert_eq!(
            RecordLayout::Basic.headers(),
            vec!["Name", "Email", "Phone Number", "Nationality"]
        );
    }

    #[test]
    fn test_row_follows_layout() {
        let record = sample();
        assert_eq!(record.to_row(RecordLayout::Full).len(), 5);
        let basic = record.to_row(RecordLayout::Basic);
        assert_eq!(basic.len(), 4);
        assert_eq!(basic[0], "Jane Doe");
        assert_eq!(basic[2], "+971 50 123 4567");
    }

    #[test]
    fn test_not_found_sentinel_value() {
        assert_eq!(FieldCandidate::NotFound.into_value(), "Not Found");
        assert_eq!(
            FieldCandidate::Found("x".to_string()).into_value(),
            "x".to_string()
        );
        assert_eq!(FieldCandidate::from(None), FieldCandidate::NotFound);
    }

    #[test]
    fn test_layout_parses_from_config_strings() {
        assert_eq!("basic".parse::<RecordLayout>(), Ok(RecordLayout::Basic));
        assert_eq!(" FULL ".parse::<RecordLayout>(), Ok(RecordLayout::Full));
        assert_eq!("5".parse::<RecordLayout>(), Ok(RecordLayout::Full));
        assert!("wide".parse::<RecordLayout>().is_err());
    }

    #[test]
    fn test_source_document_deserializes_from_request_json() {
        let doc: SourceDocument =
            serde_json::from_str(r#"{"raw_text":"Jane Doe","file_name":"jane.pdf"}"#).unwrap();
        assert_eq!(doc.raw_text, "Jane Doe");
        assert_eq!(doc.file_name, "jane.pdf");
    }

    #[test]
    fn test_layout_serializes_snake_case() {
        let json = serde_json::to_string(&RecordLayout::Basic).unwrap();
        assert_eq!(json, r#""basic""#);
    }
}
