//! Entry model: drafts being edited and the records they promote into

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default parse format for the date-of-birth field
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Gender selection (mutually exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Hobby vocabulary (fixed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Hobby {
    Reading,
    Traveling,
    Cooking,
}

impl Hobby {
    pub const ALL: [Hobby; 3] = [Hobby::Reading, Hobby::Traveling, Hobby::Cooking];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Reading => "Reading",
            Self::Traveling => "Traveling",
            Self::Cooking => "Cooking",
        }
    }
}

/// A required field that validation found empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Name,
    Gender,
    Hobby,
    DateOfBirth,
}

impl MissingField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Gender => "Gender",
            Self::Hobby => "Hobby",
            Self::DateOfBirth => "Date of Birth",
        }
    }
}

/// Typed mutation event for a single draft field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Replace the name
    Name(String),
    /// Replace the gender selection
    Gender(Gender),
    /// Add the hobby if absent, remove it if present
    ToggleHobby(Hobby),
    /// Replace the raw date-of-birth input
    DateOfBirth(String),
}

/// An entry being edited; all fields start empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftEntry {
    pub name: String,
    pub gender: Option<Gender>,
    pub hobbies: BTreeSet<Hobby>,
    /// Raw text as typed; parsed on read via [`DraftEntry::date_of_birth`]
    pub date_of_birth_input: String,
}

impl DraftEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single field update in place
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(name) => self.name = name,
            FieldUpdate::Gender(gender) => self.gender = Some(gender),
            FieldUpdate::ToggleHobby(hobby) => {
                if !self.hobbies.remove(&hobby) {
                    self.hobbies.insert(hobby);
                }
            }
            FieldUpdate::DateOfBirth(input) => self.date_of_birth_input = input,
        }
    }

    /// The date of birth, if the raw input parses with `format`.
    /// Partial or garbled input counts the same as empty.
    pub fn date_of_birth(&self, format: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_of_birth_input.trim(), format).ok()
    }

    /// Required fields currently empty, in fixed label order:
    /// Name, Gender, Hobby, Date of Birth
    pub fn missing_fields(&self, date_format: &str) -> Vec<MissingField> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push(MissingField::Name);
        }
        if self.gender.is_none() {
            missing.push(MissingField::Gender);
        }
        if self.hobbies.is_empty() {
            missing.push(MissingField::Hobby);
        }
        if self.date_of_birth(date_format).is_none() {
            missing.push(MissingField::DateOfBirth);
        }
        missing
    }

    /// Freeze this draft into a record. Returns `None` unless every
    /// required field is filled (the same predicate as
    /// [`DraftEntry::missing_fields`] returning empty).
    pub fn promote(&self, date_format: &str) -> Option<SubmittedRecord> {
        if self.name.is_empty() {
            return None;
        }
        let gender = self.gender?;
        if self.hobbies.is_empty() {
            return None;
        }
        let date_of_birth = self.date_of_birth(date_format)?;
        Some(SubmittedRecord {
            name: self.name.clone(),
            gender,
            hobbies: self.hobbies.clone(),
            date_of_birth,
        })
    }
}

/// An accepted entry. Constructed only via [`DraftEntry::promote`],
/// so every record satisfied validation at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedRecord {
    pub name: String,
    pub gender: Gender,
    pub hobbies: BTreeSet<Hobby>,
    pub date_of_birth: NaiveDate,
}

impl SubmittedRecord {
    /// Hobby labels comma-joined for display
    pub fn hobbies_display(&self) -> String {
        self.hobbies
            .iter()
            .map(Hobby::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
