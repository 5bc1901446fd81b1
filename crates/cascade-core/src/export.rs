//! Rendering of all notes into a single downloadable markdown document.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::types::Note;

/// Filename carried in the export's Content-Disposition header.
pub const EXPORT_FILENAME: &str = "workshop-notes.md";

/// Render the given notes (expected oldest-first) as one markdown document.
///
/// The document starts with a title line and a generation timestamp, then
/// one section per note: a heading from the title, metadata lines for
/// id/created/updated, and the body. Blank-or-whitespace content renders an
/// `(empty note)` placeholder; an empty note set renders a single
/// `No notes yet.` line instead of any sections.
pub fn render_notes_document(notes: &[Note], generated_at: DateTime<Utc>) -> String {
    let mut document = String::new();
    document.push_str("# Workshop Notes\n\n");
    document.push_str(&format!(
        "Generated: {}\n",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    ));

    if notes.is_empty() {
        document.push_str("\nNo notes yet.\n");
        return document;
    }

    for note in notes {
        document.push_str(&format!("\n## {}\n\n", note.title));
        document.push_str(&format!("- id: {}\n", note.id));
        document.push_str(&format!(
            "- created: {}\n",
            note.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        document.push_str(&format!(
            "- updated: {}\n\n",
            note.updated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));

        if note.content.trim().is_empty() {
            document.push_str("(empty note)\n");
        } else {
            document.push_str(note.content.trim_end());
            document.push('\n');
        }
    }

    document
}
