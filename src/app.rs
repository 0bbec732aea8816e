//! Application state and key handling

use crate::config::TuiConfig;
use crate::notify::Toasts;
use crate::state::{
    DraftButton, DraftField, DraftManager, FieldUpdate, Focus, Gender, Hobby, Pane,
    SubmissionStore,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// In-progress entry forms
    pub drafts: DraftManager,
    /// Accepted records
    pub store: SubmissionStore,
    /// Toast notifications shown in the status bar
    pub toasts: Toasts,
    /// Keyboard focus
    pub focus: Focus,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            drafts: DraftManager::new(config.date_format()),
            store: SubmissionStore::new(),
            toasts: Toasts::new(config.toast_duration()),
            focus: Focus::default(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Periodic upkeep between events
    pub fn tick(&mut self) {
        self.toasts.prune();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global bindings
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.quit = true;
                    return Ok(());
                }
                KeyCode::Char('n') => {
                    self.add_draft();
                    return Ok(());
                }
                _ => {}
            }
        }

        match self.focus.pane {
            Pane::Drafts => self.handle_drafts_key(key),
            Pane::Submitted => self.handle_submitted_key(key),
        }
    }

    /// Append a fresh draft form and focus it
    pub fn add_draft(&mut self) {
        let index = self.drafts.add();
        self.focus.focus_draft(index);
    }

    fn handle_drafts_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.drafts.is_empty() {
            // Empty state: only the add binding is live
            if key.code == KeyCode::Char('a') || key.code == KeyCode::Enter {
                self.add_draft();
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab => self.focus.next_field(),
            KeyCode::BackTab => self.focus.prev_field(),
            KeyCode::Up => self.focus.move_up(self.drafts.len()),
            KeyCode::Down => self.focus.move_down(self.drafts.len(), self.store.len()),
            KeyCode::Left => self.focus.cursor_left(),
            KeyCode::Right => self
                .focus
                .cursor_right(Gender::ALL.len(), Hobby::ALL.len()),
            KeyCode::Char(' ')
                if matches!(self.focus.field, DraftField::Gender | DraftField::Hobby) =>
            {
                self.select_option()?;
            }
            KeyCode::Enter => match self.focus.field {
                DraftField::Buttons => self.activate_button()?,
                DraftField::Gender | DraftField::Hobby => self.select_option()?,
                _ => self.focus.next_field(),
            },
            KeyCode::Backspace => self.edit_text(None)?,
            KeyCode::Char(c) => {
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                    self.edit_text(Some(c))?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_submitted_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Up => self.focus.move_up(self.drafts.len()),
            KeyCode::Down => self.focus.move_down(self.drafts.len(), self.store.len()),
            KeyCode::Char('d') | KeyCode::Delete => {
                if !self.store.is_empty() {
                    self.store
                        .delete(self.focus.submitted_index, &mut self.toasts)?;
                    self.focus.clamp(self.drafts.len(), self.store.len());
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Apply the option under the cursor on a Gender/Hobby row
    fn select_option(&mut self) -> Result<()> {
        let index = self.focus.draft_index;
        match self.focus.field {
            DraftField::Gender => {
                let gender = Gender::ALL[self.focus.gender_cursor];
                self.drafts.update(index, FieldUpdate::Gender(gender))?;
            }
            DraftField::Hobby => {
                let hobby = Hobby::ALL[self.focus.hobby_cursor];
                self.drafts.update(index, FieldUpdate::ToggleHobby(hobby))?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Run the selected button on the focused draft
    fn activate_button(&mut self) -> Result<()> {
        let index = self.focus.draft_index;
        match self.focus.button {
            DraftButton::Submit => {
                self.drafts.submit(index, &mut self.store, &mut self.toasts)?;
            }
            DraftButton::Remove => {
                self.drafts.discard(index)?;
            }
        }
        self.focus.clamp(self.drafts.len(), self.store.len());
        Ok(())
    }

    /// Edit the focused text row: push a char, or pop on backspace
    fn edit_text(&mut self, push: Option<char>) -> Result<()> {
        let index = self.focus.draft_index;
        let draft = self.drafts.get(index)?;

        let update = match self.focus.field {
            DraftField::Name => {
                let mut value = draft.name.clone();
                match push {
                    Some(c) => value.push(c),
                    None => {
                        value.pop();
                    }
                }
                FieldUpdate::Name(value)
            }
            DraftField::DateOfBirth => {
                let mut value = draft.date_of_birth_input.clone();
                match push {
                    Some(c) => value.push(c),
                    None => {
                        value.pop();
                    }
                }
                FieldUpdate::DateOfBirth(value)
            }
            _ => return Ok(()),
        };
        self.drafts.update(index, update)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotifyKind;
    use crate::state::DraftEntry;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::new(&TuiConfig::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    /// Drive the focused draft to a fully valid state via key events
    fn fill_focused_draft(app: &mut App) {
        type_str(app, "Ana");
        app.handle_key(key(KeyCode::Tab)).unwrap(); // Gender row
        app.handle_key(key(KeyCode::Right)).unwrap(); // Female
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        app.handle_key(key(KeyCode::Tab)).unwrap(); // Hobby row
        app.handle_key(key(KeyCode::Char(' '))).unwrap(); // Reading
        app.handle_key(key(KeyCode::Tab)).unwrap(); // Date row
        type_str(app, "2000-01-01");
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_key(ctrl('c')).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_n_adds_and_focuses_draft() {
        let mut app = app();
        app.handle_key(ctrl('n')).unwrap();
        app.handle_key(ctrl('n')).unwrap();
        assert_eq!(app.drafts.len(), 2);
        assert_eq!(app.focus.pane, Pane::Drafts);
        assert_eq!(app.focus.draft_index, 1);
        assert_eq!(app.focus.field, DraftField::Name);
    }

    #[test]
    fn test_empty_state_add_bindings() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.drafts.len(), 1);
        // Once a form exists, 'a' types into the name field instead
        app.handle_key(key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.drafts.len(), 1);
        assert_eq!(app.drafts.get(0).unwrap().name, "a");
    }

    #[test]
    fn test_typing_and_backspace_edit_name() {
        let mut app = app();
        app.add_draft();
        type_str(&mut app, "Bob");
        app.handle_key(key(KeyCode::Backspace)).unwrap();
        assert_eq!(app.drafts.get(0).unwrap().name, "Bo");
    }

    #[test]
    fn test_space_selects_gender_exclusively() {
        let mut app = app();
        app.add_draft();
        app.handle_key(key(KeyCode::Tab)).unwrap();
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        assert_eq!(app.drafts.get(0).unwrap().gender, Some(Gender::Male));
        app.handle_key(key(KeyCode::Right)).unwrap();
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        assert_eq!(app.drafts.get(0).unwrap().gender, Some(Gender::Female));
    }

    #[test]
    fn test_space_toggles_hobby_on_and_off() {
        let mut app = app();
        app.add_draft();
        app.handle_key(key(KeyCode::Tab)).unwrap();
        app.handle_key(key(KeyCode::Tab)).unwrap(); // Hobby row
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        assert!(app.drafts.get(0).unwrap().hobbies.contains(&Hobby::Reading));
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        assert!(app.drafts.get(0).unwrap().hobbies.is_empty());
    }

    #[test]
    fn test_submit_button_promotes_valid_draft() {
        let mut app = app();
        app.add_draft();
        fill_focused_draft(&mut app);
        app.handle_key(key(KeyCode::Tab)).unwrap(); // Buttons row
        app.handle_key(key(KeyCode::Enter)).unwrap();

        assert!(app.drafts.is_empty());
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.get(0).unwrap().name, "Ana");
        let toast = app.toasts.current().unwrap();
        assert_eq!(toast.kind, NotifyKind::Success);
        assert_eq!(toast.message, "Data added successfully!");
        // Focus followed the promoted record into the submitted pane
        assert_eq!(app.focus.pane, Pane::Submitted);
    }

    #[test]
    fn test_submit_empty_draft_raises_error_toast() {
        let mut app = app();
        app.add_draft();
        app.handle_key(key(KeyCode::BackTab)).unwrap(); // wrap to Buttons
        app.handle_key(key(KeyCode::Enter)).unwrap();

        assert_eq!(app.drafts.len(), 1);
        assert_eq!(*app.drafts.get(0).unwrap(), DraftEntry::new());
        assert!(app.store.is_empty());
        let toast = app.toasts.current().unwrap();
        assert_eq!(toast.kind, NotifyKind::Error);
        assert_eq!(
            toast.message,
            "Please enter valid data: Name, Gender, Hobby, Date of Birth"
        );
    }

    #[test]
    fn test_remove_button_discards_silently() {
        let mut app = app();
        app.add_draft();
        app.handle_key(key(KeyCode::BackTab)).unwrap(); // Buttons row
        app.handle_key(key(KeyCode::Right)).unwrap(); // Remove
        app.handle_key(key(KeyCode::Enter)).unwrap();

        assert!(app.drafts.is_empty());
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn test_delete_in_submitted_pane() {
        let mut app = app();
        for _ in 0..2 {
            app.add_draft();
            fill_focused_draft(&mut app);
            app.handle_key(key(KeyCode::Tab)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
        }
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.focus.pane, Pane::Submitted);

        app.handle_key(key(KeyCode::Char('d'))).unwrap();
        assert_eq!(app.store.len(), 1);
        let toast = app.toasts.current().unwrap();
        assert_eq!(toast.message, "Item deleted successfully!");
    }

    #[test]
    fn test_arrow_navigation_between_panes() {
        let mut app = app();
        app.add_draft();
        fill_focused_draft(&mut app);
        app.handle_key(key(KeyCode::Tab)).unwrap();
        app.handle_key(key(KeyCode::Enter)).unwrap(); // one record
        app.add_draft();

        assert_eq!(app.focus.pane, Pane::Drafts);
        app.handle_key(key(KeyCode::Down)).unwrap();
        assert_eq!(app.focus.pane, Pane::Submitted);
        app.handle_key(key(KeyCode::Up)).unwrap();
        assert_eq!(app.focus.pane, Pane::Drafts);
    }

    #[test]
    fn test_tick_prunes_expired_toasts() {
        let config = TuiConfig {
            toast_duration_ms: Some(0),
            ..Default::default()
        };
        let mut app = App::new(&config);
        app.add_draft();
        app.handle_key(key(KeyCode::BackTab)).unwrap();
        app.handle_key(key(KeyCode::Enter)).unwrap(); // error toast
        assert!(!app.toasts.is_empty());
        app.tick();
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn test_custom_date_format_flows_into_validation() {
        let config = TuiConfig {
            date_format: Some("%d/%m/%Y".to_string()),
            ..Default::default()
        };
        let mut app = App::new(&config);
        app.add_draft();
        type_str(&mut app, "Ana");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        app.handle_key(key(KeyCode::Tab)).unwrap();
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_str(&mut app, "01/02/1995");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        app.handle_key(key(KeyCode::Enter)).unwrap();

        assert_eq!(app.store.len(), 1);
    }
}
