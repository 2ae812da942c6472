//! Roster file parsing
//!
//! Turns an uploaded CSV into ordered [`RosterRow`]s. Row order is kept
//! exactly as in the file; later stages derive roll numbers and batch
//! placement from it.

use crate::utils::error::{Result, RosterError};
use bytes::Bytes;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Header of the student name column
pub const STUDENT_NAME: &str = "Student Name";
/// Header of the registration number column
pub const PRN_NUMBER: &str = "PRN Number";
/// Header of the email column
pub const EMAIL: &str = "Email";

/// Columns every roster must carry
pub const REQUIRED_COLUMNS: [&str; 3] = [STUDENT_NAME, PRN_NUMBER, EMAIL];

const CSV_CONTENT_TYPES: [&str; 2] = ["text/csv", "application/csv"];
const UTF8_BOM: char = '\u{feff}';

/// An uploaded roster file
#[derive(Debug, Clone)]
pub struct RosterUpload {
    /// Client-supplied file name
    pub filename: Option<String>,
    /// Declared content type
    pub content_type: Option<String>,
    /// Raw file contents
    pub bytes: Bytes,
}

impl RosterUpload {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            filename: None,
            content_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the upload is a CSV file
    ///
    /// The file name decides when present; the content type is only
    /// consulted for nameless uploads.
    pub fn is_csv(&self) -> bool {
        match self.filename.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_ascii_lowercase().ends_with(".csv"),
            _ => self.content_type.as_deref().is_some_and(|content_type| {
                let essence = content_type
                    .split(';')
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_ascii_lowercase();
                CSV_CONTENT_TYPES.contains(&essence.as_str())
            }),
        }
    }

    fn describe(&self) -> String {
        match (&self.filename, &self.content_type) {
            (Some(name), _) if !name.trim().is_empty() => name.clone(),
            (_, Some(content_type)) => content_type.clone(),
            _ => "upload without file name or content type".to_string(),
        }
    }
}

/// One data row of a roster, keyed by header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    /// 0-based position among the file's data rows
    pub index: usize,
    headers: Arc<[String]>,
    values: Vec<String>,
}

impl RosterRow {
    pub fn new(index: usize, headers: Arc<[String]>, values: Vec<String>) -> Self {
        Self {
            index,
            headers,
            values,
        }
    }

    /// Raw cell under `column`; `None` when the column is absent or the row is short
    pub fn get(&self, column: &str) -> Option<&str> {
        self.headers
            .iter()
            .position(|header| header == column)
            .and_then(|position| self.values.get(position))
            .map(String::as_str)
    }

    /// Trimmed cell under `column`, `None` when blank
    pub fn field(&self, column: &str) -> Option<&str> {
        self.get(column)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

impl fmt::Display for RosterRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (position, header) in self.headers.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            let value = self.values.get(position).map(String::as_str).unwrap_or("");
            write!(f, "{:?}: {:?}", header, value)?;
        }
        write!(f, "}}")
    }
}

/// Parse an uploaded roster into its data rows
pub fn parse_roster(upload: &RosterUpload, max_file_size: usize) -> Result<Vec<RosterRow>> {
    if upload.len() > max_file_size {
        return Err(RosterError::FileTooLarge {
            size: upload.len(),
            limit: max_file_size,
        });
    }

    if !upload.is_csv() {
        return Err(RosterError::unsupported_format(format!(
            "{} is not a CSV file",
            upload.describe()
        )));
    }

    let text = std::str::from_utf8(&upload.bytes)
        .map_err(|e| RosterError::decode(format!("file is not valid UTF-8: {}", e)))?;
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

    if text.trim().is_empty() {
        return Err(RosterError::EmptyInput);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Arc<[String]> = reader
        .headers()
        .map_err(|e| RosterError::decode(format!("unreadable header row: {}", e)))?
        .iter()
        .map(str::to_string)
        .collect();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !headers.iter().any(|header| header == required))
        .collect();
    if !missing.is_empty() {
        return Err(RosterError::schema(missing));
    }

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            RosterError::decode(format!("unreadable data row {}: {}", index + 1, e))
        })?;
        let values = record.iter().map(str::to_string).collect();
        rows.push(RosterRow::new(index, Arc::clone(&headers), values));
    }

    if rows.is_empty() {
        return Err(RosterError::EmptyInput);
    }

    debug!("Parsed {} roster rows ({} columns)", rows.len(), headers.len());
    Ok(rows)
}
