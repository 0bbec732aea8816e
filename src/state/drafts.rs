//! Draft manager: the ordered collection of in-progress entry forms

use super::entry::{DraftEntry, FieldUpdate, MissingField};
use super::store::SubmissionStore;
use crate::notify::{Notifier, NotifyKind};
use thiserror::Error;

/// Contract violation: an operation addressed an index outside the
/// current collection bounds. Callers must never clamp or retry this;
/// it indicates a stale index after a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("index {index} out of bounds for collection of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Owns the in-progress drafts, in insertion order
#[derive(Debug)]
pub struct DraftManager {
    drafts: Vec<DraftEntry>,
    date_format: String,
}

impl DraftManager {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            drafts: Vec::new(),
            date_format: date_format.into(),
        }
    }

    /// Append an empty draft; returns its index
    pub fn add(&mut self) -> usize {
        self.drafts.push(DraftEntry::new());
        tracing::debug!(count = self.drafts.len(), "draft added");
        self.drafts.len() - 1
    }

    /// Apply a field update to the draft at `index`
    pub fn update(&mut self, index: usize, update: FieldUpdate) -> Result<(), EntryError> {
        let len = self.drafts.len();
        let draft = self
            .drafts
            .get_mut(index)
            .ok_or(EntryError::IndexOutOfBounds { index, len })?;
        draft.apply(update);
        Ok(())
    }

    /// Required fields still empty on the draft at `index`, in fixed
    /// label order (Name, Gender, Hobby, Date of Birth)
    pub fn missing_fields(&self, index: usize) -> Result<Vec<MissingField>, EntryError> {
        self.get(index)
            .map(|draft| draft.missing_fields(&self.date_format))
    }

    /// Validate the draft at `index` and, if complete, promote it into
    /// `store` and remove it from the draft collection.
    ///
    /// Returns `Ok(true)` when the draft was promoted, `Ok(false)` when
    /// validation rejected it (all state untouched, error toast
    /// raised). Either way the operation is atomic.
    pub fn submit(
        &mut self,
        index: usize,
        store: &mut SubmissionStore,
        notifier: &mut dyn Notifier,
    ) -> Result<bool, EntryError> {
        let draft = self.get(index)?;

        match draft.promote(&self.date_format) {
            Some(record) => {
                tracing::info!(index, name = %record.name, "draft submitted");
                store.append(record);
                notifier.notify(NotifyKind::Success, "Data added successfully!");
                self.drafts.remove(index);
                Ok(true)
            }
            None => {
                let labels: Vec<&str> = draft
                    .missing_fields(&self.date_format)
                    .iter()
                    .map(MissingField::label)
                    .collect();
                tracing::debug!(index, ?labels, "draft rejected");
                notifier.notify(
                    NotifyKind::Error,
                    &format!("Please enter valid data: {}", labels.join(", ")),
                );
                Ok(false)
            }
        }
    }

    /// Remove the draft at `index` unconditionally; no notification
    pub fn discard(&mut self, index: usize) -> Result<DraftEntry, EntryError> {
        let len = self.drafts.len();
        if index >= len {
            return Err(EntryError::IndexOutOfBounds { index, len });
        }
        tracing::debug!(index, "draft discarded");
        Ok(self.drafts.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<&DraftEntry, EntryError> {
        let len = self.drafts.len();
        self.drafts
            .get(index)
            .ok_or(EntryError::IndexOutOfBounds { index, len })
    }

    pub fn iter(&self) -> impl Iterator<Item = &DraftEntry> {
        self.drafts.iter()
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    /// True iff no draft forms are shown (the derived empty-state flag)
    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}
