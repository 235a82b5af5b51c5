//! Header-keyed rows read from CSV sources.

use std::io::Read;

use crate::error::ImportError;
use crate::normalize::REQUIRED_COLUMNS;

/// One input record: (column, value) pairs in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    /// Value for `column`, or `None` if the row has no such column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Streams [`Row`]s out of CSV data with a header line.
///
/// The header is read and checked for the required columns up front, so a
/// source missing one fails before any row is handed out. Records shorter
/// than the header yield empty values for the trailing columns; blank lines
/// are skipped.
pub struct RowReader<R> {
    reader: csv::Reader<R>,
    headers: Vec<String>,
    record: csv::StringRecord,
}

impl<R: Read> RowReader<R> {
    pub fn new(source: R) -> Result<Self, ImportError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if i == 0 {
                    h.trim_start_matches('\u{feff}').to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();

        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|col| !headers.iter().any(|h| h == *col))
        {
            return Err(ImportError::missing_column(*missing));
        }

        Ok(Self {
            reader,
            headers,
            record: csv::StringRecord::new(),
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<Row, ImportError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => {
                let record = &self.record;
                Some(Ok(self
                    .headers
                    .iter()
                    .enumerate()
                    .map(|(i, h)| (h.clone(), record.get(i).unwrap_or("").to_string()))
                    .collect()))
            }
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}
