use chrono::{DateTime, Utc};
use colored::Colorize;
use quicknotes::model::Note;
use quicknotes::view::SidebarRow;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;
const ACTIVE_MARKER: &str = "▸";

/// Two lines per note: marker, id, title and age, then the dimmed preview.
pub fn render_rows(rows: &[SidebarRow], now: DateTime<Utc>) -> String {
    if rows.is_empty() {
        return "No notes yet\n".to_string();
    }

    let mut out = String::new();
    for row in rows {
        let marker = if row.active {
            format!("{} ", ACTIVE_MARKER)
        } else {
            "  ".to_string()
        };
        let id = format!("{}  ", row.id);
        let count = format!("  {} ch", row.char_count);
        let time_ago = format_time_ago(row.updated_at, now);

        let fixed_width = marker.width() + id.width() + count.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title = truncate_to_width(&row.title, available);
        let padding = available.saturating_sub(title.width());

        let title_styled = if row.active {
            title.bold().to_string()
        } else {
            title
        };

        out.push_str(&format!(
            "{}{}{}{}{}{}\n",
            marker.yellow(),
            id.dimmed(),
            title_styled,
            " ".repeat(padding),
            count.dimmed(),
            time_ago.dimmed()
        ));
        out.push_str(&format!("    {}\n", row.preview.dimmed()));
    }
    out
}

pub fn render_note(note: &Note, now: DateTime<Utc>) -> String {
    let title = if note.title.is_empty() {
        quicknotes::view::UNTITLED
    } else {
        note.title.as_str()
    };
    format!(
        "{} {}\n{}\n{}\n{}\n",
        note.id.yellow(),
        title.bold(),
        format!(
            "Created: {}  Updated: {}",
            format_timestamp(note.created_at),
            format_time_ago(note.updated_at, now).trim_start()
        )
        .dimmed(),
        "--------------------------------",
        note.content
    )
}

fn format_timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn format_time_ago(millis: i64, now: DateTime<Utc>) -> String {
    let time_str = match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(timestamp) => {
            let duration = now.signed_duration_since(timestamp);
            Formatter::new().convert(duration.to_std().unwrap_or_default())
        }
        None => "unknown".to_string(),
    };
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
