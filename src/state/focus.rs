//! Keyboard focus model for the two panes

/// Which pane currently receives key events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Drafts,
    Submitted,
}

/// Field rows within a draft form, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Name,
    Gender,
    Hobby,
    DateOfBirth,
    Buttons,
}

impl DraftField {
    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::Gender,
            Self::Gender => Self::Hobby,
            Self::Hobby => Self::DateOfBirth,
            Self::DateOfBirth => Self::Buttons,
            Self::Buttons => Self::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Name => Self::Buttons,
            Self::Gender => Self::Name,
            Self::Hobby => Self::Gender,
            Self::DateOfBirth => Self::Hobby,
            Self::Buttons => Self::DateOfBirth,
        }
    }
}

/// Action buttons on a draft form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftButton {
    #[default]
    Submit,
    Remove,
}

impl DraftButton {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Submit => Self::Remove,
            Self::Remove => Self::Submit,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::Remove => "Remove",
        }
    }
}

/// Full focus state: pane, draft, field row, and option cursors
#[derive(Debug, Clone, Default)]
pub struct Focus {
    pub pane: Pane,
    pub draft_index: usize,
    pub field: DraftField,
    /// Highlighted option on the gender row
    pub gender_cursor: usize,
    /// Highlighted option on the hobby row
    pub hobby_cursor: usize,
    /// Selected button on the buttons row
    pub button: DraftButton,
    pub submitted_index: usize,
}

impl Focus {
    /// Cycle to the next field row of the focused draft
    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    /// Cycle to the previous field row of the focused draft
    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }

    /// Move focus one draft / record down, crossing from the last
    /// draft into the submitted pane when records exist
    pub fn move_down(&mut self, draft_count: usize, record_count: usize) {
        match self.pane {
            Pane::Drafts => {
                if self.draft_index + 1 < draft_count {
                    self.draft_index += 1;
                    self.reset_row_cursors();
                } else if record_count > 0 {
                    self.pane = Pane::Submitted;
                    self.submitted_index = 0;
                }
            }
            Pane::Submitted => {
                if record_count > 0 && self.submitted_index < record_count - 1 {
                    self.submitted_index += 1;
                }
            }
        }
    }

    /// Move focus one draft / record up, crossing from the first
    /// record back into the drafts pane when drafts exist
    pub fn move_up(&mut self, draft_count: usize) {
        match self.pane {
            Pane::Drafts => {
                if self.draft_index > 0 {
                    self.draft_index -= 1;
                    self.reset_row_cursors();
                }
            }
            Pane::Submitted => {
                if self.submitted_index > 0 {
                    self.submitted_index -= 1;
                } else if draft_count > 0 {
                    self.pane = Pane::Drafts;
                    self.draft_index = draft_count - 1;
                    self.reset_row_cursors();
                }
            }
        }
    }

    /// Put focus on the draft at `index` (after adding one)
    pub fn focus_draft(&mut self, index: usize) {
        self.pane = Pane::Drafts;
        self.draft_index = index;
        self.reset_row_cursors();
    }

    /// Re-validate focus after a removal shifted indices
    pub fn clamp(&mut self, draft_count: usize, record_count: usize) {
        match self.pane {
            Pane::Drafts => {
                if draft_count == 0 {
                    if record_count > 0 {
                        self.pane = Pane::Submitted;
                        self.submitted_index = self.submitted_index.min(record_count - 1);
                    } else {
                        *self = Self::default();
                    }
                } else if self.draft_index >= draft_count {
                    self.draft_index = draft_count - 1;
                }
            }
            Pane::Submitted => {
                if record_count == 0 {
                    self.pane = Pane::Drafts;
                    self.draft_index = if draft_count == 0 {
                        0
                    } else {
                        self.draft_index.min(draft_count - 1)
                    };
                    self.reset_row_cursors();
                } else if self.submitted_index >= record_count {
                    self.submitted_index = record_count - 1;
                }
            }
        }
    }

    fn reset_row_cursors(&mut self) {
        self.field = DraftField::Name;
        self.gender_cursor = 0;
        self.hobby_cursor = 0;
        self.button = DraftButton::Submit;
    }

    /// Move the option cursor of the active row left
    pub fn cursor_left(&mut self) {
        match self.field {
            DraftField::Gender => {
                self.gender_cursor = self.gender_cursor.saturating_sub(1);
            }
            DraftField::Hobby => {
                self.hobby_cursor = self.hobby_cursor.saturating_sub(1);
            }
            DraftField::Buttons => self.button.toggle(),
            _ => {}
        }
    }

    /// Move the option cursor of the active row right
    pub fn cursor_right(&mut self, gender_options: usize, hobby_options: usize) {
        match self.field {
            DraftField::Gender => {
                if self.gender_cursor + 1 < gender_options {
                    self.gender_cursor += 1;
                }
            }
            DraftField::Hobby => {
                if self.hobby_cursor + 1 < hobby_options {
                    self.hobby_cursor += 1;
                }
            }
            DraftField::Buttons => self.button.toggle(),
            _ => {}
        }
    }
}
