use super::backend::StorageBackend;
use crate::clock::{Clock, SystemClock};
use crate::id::IdGenerator;
use crate::model::{Note, NoteFields};
use std::collections::HashSet;

pub const DEFAULT_NOTES_KEY: &str = "quick-notes__v1";
pub const DEFAULT_SELECTED_KEY: &str = "quick-notes__selected";

/// Names of the two durable records owned by [`NotesStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub notes: String,
    pub selected: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            notes: DEFAULT_NOTES_KEY.to_string(),
            selected: DEFAULT_SELECTED_KEY.to_string(),
        }
    }
}

/// Owns the note collection and the current selection, and mirrors both to a
/// [`StorageBackend`] after every mutation.
///
/// Storage is best-effort: load failures start from an empty state and write
/// failures are logged, while the in-memory state stays authoritative.
pub struct NotesStore<B: StorageBackend> {
    backend: B,
    keys: StorageKeys,
    ids: IdGenerator,
    clock: Box<dyn Clock>,
    notes: Vec<Note>,
    selected_id: Option<String>,
}

impl<B: StorageBackend> NotesStore<B> {
    /// Opens a store over `backend` using the system clock and the strongest
    /// available id source, loading any persisted state.
    pub fn open(backend: B, keys: StorageKeys) -> Self {
        Self::open_with(backend, keys, IdGenerator::detect(), SystemClock)
    }

    pub fn open_with(
        backend: B,
        keys: StorageKeys,
        ids: IdGenerator,
        clock: impl Clock + 'static,
    ) -> Self {
        let mut store = Self {
            backend,
            keys,
            ids,
            clock: Box::new(clock),
            notes: Vec::new(),
            selected_id: None,
        };
        store.initialize();
        store
    }

    /// Replaces the in-memory state with whatever the backend holds.
    pub fn initialize(&mut self) {
        self.notes = self.load_notes();
        self.selected_id = self.load_selection();
        tracing::debug!(
            notes = self.notes.len(),
            selected = ?self.selected_id,
            "notes store initialized"
        );
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.selected_id.as_deref().and_then(|id| self.get(id))
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Creates an empty note, places it first and returns a copy.
    pub fn create(&mut self) -> Note {
        let mut id = self.ids.generate();
        while self.contains(&id) {
            id = self.ids.generate();
        }

        let note = Note::new(id, self.clock.now_millis());
        self.notes.insert(0, note.clone());
        self.persist_notes();
        tracing::debug!(id = %note.id, "note created");
        note
    }

    /// Merges `fields` into the note with `id`. Unknown ids are ignored and
    /// nothing is written. Returns whether a note was updated.
    pub fn update(&mut self, id: &str, fields: NoteFields) -> bool {
        let now = self.clock.now_millis();
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            tracing::debug!(id, "update ignored, no such note");
            return false;
        };
        note.apply(fields, now);
        self.persist_notes();
        true
    }

    /// Removes the note with `id`, clearing the selection if it pointed there.
    /// Returns whether a note was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(pos) = self.notes.iter().position(|n| n.id == id) else {
            tracing::debug!(id, "delete ignored, no such note");
            return false;
        };
        self.notes.remove(pos);
        self.persist_notes();

        if self.selected_id.as_deref() == Some(id) {
            self.set_selection(None);
        }
        tracing::debug!(id, "note deleted");
        true
    }

    /// Selects `id` without checking that it exists.
    /// Selects `id` and always writes the selection record, so a write that
    /// failed earlier is retried by selecting the same note again.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected_id = Some(id.into());
        self.persist_selection();
    }

    /// Keeps a selection that still points at a note; otherwise selects the
    /// most recently updated note, or nothing when the collection is empty.
    pub fn resolve_initial_selection(&mut self) {
        if let Some(current) = self.selected_id.as_deref() {
            if self.contains(current) {
                return;
            }
        }

        let mut latest: Option<&Note> = None;
        for note in &self.notes {
            match latest {
                Some(best) if best.updated_at >= note.updated_at => {}
                _ => latest = Some(note),
            }
        }
        let next = latest.map(|n| n.id.clone());
        self.set_selection(next);
    }

    /// Rewrites both records from the in-memory state.
    pub fn flush(&self) {
        self.persist_notes();
        self.persist_selection();
    }

    /// Ends the store's lifecycle, handing the backend back.
    pub fn into_backend(self) -> B {
        self.backend
    }

    fn set_selection(&mut self, next: Option<String>) {
        if self.selected_id != next {
            self.selected_id = next;
            self.persist_selection();
        }
    }

    fn load_notes(&self) -> Vec<Note> {
        let raw = match self.backend.get(&self.keys.notes) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.keys.notes, error = %e, "failed to read notes, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Note>>(&raw) {
            Ok(notes) => sanitize(notes),
            Err(e) => {
                tracing::warn!(key = %self.keys.notes, error = %e, "malformed notes record, starting empty");
                Vec::new()
            }
        }
    }

    fn load_selection(&self) -> Option<String> {
        match self.backend.get(&self.keys.selected) {
            Ok(selected) => selected.filter(|id| !id.is_empty()),
            Err(e) => {
                tracing::warn!(key = %self.keys.selected, error = %e, "failed to read selection");
                None
            }
        }
    }

    fn persist_notes(&self) {
        let serialized = match serde_json::to_string(&self.notes) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize notes");
                return;
            }
        };
        if let Err(e) = self.backend.set(&self.keys.notes, &serialized) {
            tracing::warn!(key = %self.keys.notes, error = %e, "failed to persist notes");
        }
    }

    fn persist_selection(&self) {
        let result = match &self.selected_id {
            Some(id) => self.backend.set(&self.keys.selected, id),
            None => self.backend.remove(&self.keys.selected),
        };
        if let Err(e) = result {
            tracing::warn!(key = %self.keys.selected, error = %e, "failed to persist selection");
        }
    }
}

/// Drops duplicate ids (first wins) and repairs `updated_at < created_at`.
fn sanitize(notes: Vec<Note>) -> Vec<Note> {
    let mut seen = HashSet::new();
    notes
        .into_iter()
        .filter(|n| {
            let fresh = seen.insert(n.id.clone());
            if !fresh {
                tracing::warn!(id = %n.id, "dropping note with duplicate id");
            }
            fresh
        })
        .map(|mut n| {
            n.updated_at = n.updated_at.max(n.created_at);
            n
        })
        .collect()
}
