use std::fmt::{Display, Formatter};

use indexmap::IndexMap;

use crate::error::MalformedRecord;

/// Key to command lookup; a later entry replaces an earlier one with the same key.
pub type CandidateTable = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEntry {
    pub key: String,
    pub command: String,
}

impl CandidateEntry {
    pub fn new(key: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            command: command.into(),
        }
    }

    /// Builds an entry from one CSV record, trimming both fields.
    ///
    /// # Errors
    ///
    /// Returns a [`MalformedRecord`] if the record does not have exactly two
    /// fields, or if either trims down to nothing.
    pub fn from_record(record: &csv::StringRecord) -> Result<Self, MalformedRecord> {
        if record.len() != 2 {
            return Err(MalformedRecord::FieldCount(record.len()));
        }

        let key = record[0].trim();
        let command = record[1].trim();
        if key.is_empty() || command.is_empty() {
            return Err(MalformedRecord::EmptyField);
        }

        Ok(Self::new(key, command))
    }
}

impl Display for CandidateEntry {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}:{}", self.key, self.command)
    }
}

pub fn build_index<I>(entries: I) -> CandidateTable
where
    I: IntoIterator<Item = CandidateEntry>,
{
    let mut table = CandidateTable::new();
    for entry in entries {
        table.insert(entry.key, entry.command);
    }

    table
}
