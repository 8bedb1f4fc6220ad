//! Display model for the notes list.
//!
//! Presentation layers render [`SidebarRow`]s rather than raw notes, so the
//! fallbacks for empty titles and bodies live in one place.

use crate::filter::filter_notes;
use crate::model::Note;

pub const UNTITLED: &str = "Untitled";
pub const NO_CONTENT: &str = "No content yet";
pub const PREVIEW_CHARS: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarRow {
    pub id: String,
    pub title: String,
    pub preview: String,
    pub updated_at: i64,
    pub char_count: usize,
    pub active: bool,
}

impl SidebarRow {
    pub fn from_note(note: &Note, selected_id: Option<&str>) -> Self {
        let title = if note.title.is_empty() {
            UNTITLED.to_string()
        } else {
            note.title.clone()
        };
        let preview = preview(&note.content);
        Self {
            id: note.id.clone(),
            title,
            preview: if preview.is_empty() {
                NO_CONTENT.to_string()
            } else {
                preview
            },
            updated_at: note.updated_at,
            char_count: note.content.chars().count(),
            active: selected_id == Some(note.id.as_str()),
        }
    }
}

/// Rows for the notes matching `query`, most recently updated first.
pub fn sidebar_rows(notes: &[Note], query: &str, selected_id: Option<&str>) -> Vec<SidebarRow> {
    filter_notes(notes, query)
        .into_iter()
        .map(|n| SidebarRow::from_note(n, selected_id))
        .collect()
}

/// Collapses each run of newlines into a single space and keeps the first
/// [`PREVIEW_CHARS`] characters.
pub fn preview(content: &str) -> String {
    let mut out = String::new();
    let mut in_newlines = false;
    for c in content.chars() {
        if c == '\n' {
            if !in_newlines {
                out.push(' ');
            }
            in_newlines = true;
        } else {
            out.push(c);
            in_newlines = false;
        }
    }
    out.chars().take(PREVIEW_CHARS).collect()
}
