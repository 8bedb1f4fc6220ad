//! Editing session for one note at a time.
//!
//! The session buffers the title and content the user is typing and commits
//! them to the [`NotesStore`] through a [`Debouncer`], so a burst of keystrokes
//! turns into a single `update`. A pending commit always belongs to the note
//! it was typed into: switching notes or closing the session settles it
//! against that note before anything else happens.

use crate::debounce::Debouncer;
use crate::model::{Note, NoteFields};
use crate::store::{NotesStore, StorageBackend};
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct EditorSession {
    note_id: String,
    title: String,
    content: String,
    debouncer: Debouncer<NoteFields>,
}

impl EditorSession {
    pub fn open(note: &Note, delay: Duration) -> Self {
        Self {
            note_id: note.id.clone(),
            title: note.title.clone(),
            content: note.content.clone(),
            debouncer: Debouncer::new(delay),
        }
    }

    pub fn note_id(&self) -> &str {
        &self.note_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn has_pending_edit(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn set_title(&mut self, title: impl Into<String>, now: Instant) {
        self.title = title.into();
        self.reschedule(now);
    }

    pub fn set_content(&mut self, content: impl Into<String>, now: Instant) {
        self.content = content.into();
        self.reschedule(now);
    }

    /// Commits the buffered fields if the quiet period has elapsed.
    /// Returns whether the store was updated.
    pub fn poll<B: StorageBackend>(&mut self, store: &mut NotesStore<B>, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(fields) => store.update(&self.note_id, fields),
            None => false,
        }
    }

    /// Settles any pending edit against the current note, then starts editing
    /// `note` with fresh buffers.
    pub fn switch_to<B: StorageBackend>(&mut self, note: &Note, store: &mut NotesStore<B>) {
        self.commit_pending(store);
        self.note_id = note.id.clone();
        self.title = note.title.clone();
        self.content = note.content.clone();
    }

    /// Ends the session, committing a pending edit instead of losing it.
    /// Returns whether the store was updated.
    pub fn close<B: StorageBackend>(mut self, store: &mut NotesStore<B>) -> bool {
        self.commit_pending(store)
    }

    /// Ends the session and drops any pending edit unsaved.
    /// Returns whether an edit was dropped.
    pub fn discard(mut self) -> bool {
        self.debouncer.cancel()
    }

    fn commit_pending<B: StorageBackend>(&mut self, store: &mut NotesStore<B>) -> bool {
        match self.debouncer.flush() {
            Some(fields) => store.update(&self.note_id, fields),
            None => false,
        }
    }

    fn reschedule(&mut self, now: Instant) {
        let fields = NoteFields {
            title: Some(self.title.clone()),
            content: Some(self.content.clone()),
        };
        self.debouncer.schedule(fields, now);
    }
}
