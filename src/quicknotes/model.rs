use serde::{Deserialize, Deserializer, Serialize};

/// A single note as it lives in memory and in the persisted notes record.
///
/// Timestamps are milliseconds since the Unix epoch. Field names are
/// camelCase on the wire so records stay compatible with existing data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Older records may carry `null` for a blank title or body.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Note {
    pub fn new(id: String, now: i64) -> Self {
        Self {
            id,
            title: String::new(),
            content: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges `fields` into the note and refreshes `updated_at`.
    ///
    /// `updated_at` never drops below `created_at`, even if the clock moved
    /// backwards since creation.
    pub fn apply(&mut self, fields: NoteFields, now: i64) {
        if let Some(title) = fields.title {
            self.title = title;
        }
        if let Some(content) = fields.content {
            self.content = content;
        }
        self.updated_at = now.max(self.created_at);
    }
}

/// A partial update to a note. Only the editable fields can be expressed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFields {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
