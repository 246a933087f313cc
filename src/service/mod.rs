use crate::{
    dto::{NoteRequest, NoteResponse},
    repository::Repository,
};

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct NoteService {
    repo: Arc<tokio::sync::Mutex<Repository>>,
}

impl NoteService {
    pub const fn new(repo: Arc<tokio::sync::Mutex<Repository>>) -> Self {
        Self { repo }
    }

    /// Returns the new note's key alongside the stored note.
    pub async fn create_note(&self, request: NoteRequest) -> (String, NoteResponse) {
        let mut repo = self.repo.lock().await;
        let (id, note) = repo.create_note(request.title, request.description);

        tracing::info!("created note {id} ({} stored)", repo.len());

        (id, note.into())
    }

    pub async fn update_note(&self, id: &str, request: NoteRequest) -> Option<NoteResponse> {
        let note = self
            .repo
            .lock()
            .await
            .update_note(id, request.title, request.description)?;

        tracing::info!("replaced note {id}");

        Some(note.into())
    }

    pub async fn delete_note(&self, id: &str) -> bool {
        let deleted = self.repo.lock().await.delete_note(id);

        if deleted {
            tracing::info!("deleted note {id}");
        }

        deleted
    }

    pub async fn get_one_note(&self, id: &str) -> Option<NoteResponse> {
        self.repo.lock().await.get_one_note(id).map(Into::into)
    }

    pub async fn get_all_notes(&self) -> Vec<NoteResponse> {
        let notes = self.repo.lock().await.get_all_notes();

        notes.into_iter().map(|(_, note)| note.into()).collect()
    }

    pub async fn count(&self) -> usize {
        self.repo.lock().await.len()
    }
}

impl Default for NoteService {
    fn default() -> Self {
        Self::new(Arc::new(tokio::sync::Mutex::new(Repository::new())))
    }
}
