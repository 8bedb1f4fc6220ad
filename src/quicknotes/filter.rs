use crate::model::Note;

/// Returns the notes to display for `query`, most recently updated first.
///
/// An empty query keeps every note. Otherwise a note is kept when its title or
/// content contains the query, ignoring case. The sort is stable, so notes with
/// equal `updated_at` keep their relative input order.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    let mut listed: Vec<&Note> = if query.is_empty() {
        notes.iter().collect()
    } else {
        let needle = query.to_lowercase();
        notes
            .iter()
            .filter(|n| {
                n.title.to_lowercase().contains(&needle)
                    || n.content.to_lowercase().contains(&needle)
            })
            .collect()
    };

    listed.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    listed
}
