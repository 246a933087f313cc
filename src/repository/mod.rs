use std::collections::HashMap;

use chrono::Utc;

use crate::models::Note;

/// In-memory note storage keyed by the decimal form of a running counter.
#[derive(Debug, Default)]
pub struct Repository {
    notes: HashMap<String, Note>,
    next_id: u64,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn create_note(&mut self, title: String, description: String) -> (String, Note) {
        self.next_id += 1;
        let id = self.next_id.to_string();

        let note = Note {
            title,
            description,
            created_at: Utc::now(),
        };
        self.notes.insert(id.clone(), note.clone());

        (id, note)
    }

    pub fn update_note(&mut self, id: &str, title: String, description: String) -> Option<Note> {
        let note = self.notes.get_mut(id)?;

        *note = Note {
            title,
            description,
            created_at: Utc::now(),
        };

        Some(note.clone())
    }

    pub fn delete_note(&mut self, id: &str) -> bool {
        self.notes.remove(id).is_some()
    }

    pub fn get_one_note(&self, id: &str) -> Option<Note> {
        self.notes.get(id).cloned()
    }

    /// Iteration order follows the map and is not stable between calls.
    pub fn get_all_notes(&self) -> Vec<(String, Note)> {
        self.notes
            .iter()
            .map(|(id, note)| (id.clone(), note.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{thread, time::Duration};

    #[test]
    fn ids_are_increasing_and_never_reused() {
        let mut repo = Repository::new();

        let (first, _) = repo.create_note("a".into(), String::new());
        let (second, _) = repo.create_note("b".into(), String::new());
        assert_eq!(first, "1");
        assert_eq!(second, "2");

        assert!(repo.delete_note(&second));
        let (third, _) = repo.create_note("c".into(), String::new());
        assert_eq!(third, "3");
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn create_assigns_timestamp_now() {
        let mut repo = Repository::new();

        let before = Utc::now();
        let (id, note) = repo.create_note("Buy milk".into(), "2%".into());
        let after = Utc::now();

        assert!(note.created_at >= before && note.created_at <= after);
        assert_eq!(repo.get_one_note(&id), Some(note));
    }

    #[test]
    fn update_replaces_fields_and_refreshes_timestamp() {
        let mut repo = Repository::new();
        let (id, original) = repo.create_note("Buy milk".into(), "2%".into());

        thread::sleep(Duration::from_millis(5));
        let updated = repo
            .update_note(&id, "Buy oat milk".into(), String::new())
            .expect("note exists");

        assert_eq!(updated.title, "Buy oat milk");
        assert_eq!(updated.description, "");
        assert!(updated.created_at > original.created_at);
        assert_eq!(repo.get_one_note(&id), Some(updated));
    }

    #[test]
    fn update_unknown_id_leaves_store_untouched() {
        let mut repo = Repository::new();
        let (id, note) = repo.create_note("keep".into(), "me".into());

        assert!(repo.update_note("42", "x".into(), "y".into()).is_none());
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get_one_note(&id), Some(note));
    }

    #[test]
    fn delete_twice_reports_missing() {
        let mut repo = Repository::new();
        let (id, _) = repo.create_note("gone".into(), String::new());

        assert!(repo.delete_note(&id));
        assert!(!repo.delete_note(&id));
        assert!(repo.get_one_note(&id).is_none());
        assert!(repo.get_all_notes().is_empty());
    }

    #[test]
    fn get_all_returns_every_note() {
        let mut repo = Repository::new();
        for i in 0..5 {
            repo.create_note(format!("note {i}"), String::new());
        }

        let mut titles: Vec<String> = repo
            .get_all_notes()
            .into_iter()
            .map(|(_, note)| note.title)
            .collect();
        titles.sort();

        assert_eq!(
            titles,
            vec!["note 0", "note 1", "note 2", "note 3", "note 4"]
        );
    }
}
