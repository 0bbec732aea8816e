//! Submission store: the ordered collection of accepted records

use super::drafts::EntryError;
use super::entry::SubmittedRecord;
use crate::notify::{Notifier, NotifyKind};

/// Owns the accepted records, in submission order. No validation
/// happens here; records are valid by construction (only promotion
/// creates them).
#[derive(Debug, Default)]
pub struct SubmissionStore {
    records: Vec<SubmittedRecord>,
}

impl SubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a promoted record to the end
    pub fn append(&mut self, record: SubmittedRecord) {
        self.records.push(record);
    }

    /// Remove the record at `index`
    pub fn delete(
        &mut self,
        index: usize,
        notifier: &mut dyn Notifier,
    ) -> Result<SubmittedRecord, EntryError> {
        let len = self.records.len();
        if index >= len {
            return Err(EntryError::IndexOutOfBounds { index, len });
        }
        let record = self.records.remove(index);
        tracing::info!(index, name = %record.name, "record deleted");
        notifier.notify(NotifyKind::Success, "Item deleted successfully!");
        Ok(record)
    }

    pub fn get(&self, index: usize) -> Result<&SubmittedRecord, EntryError> {
        let len = self.records.len();
        self.records
            .get(index)
            .ok_or(EntryError::IndexOutOfBounds { index, len })
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubmittedRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
