//! Plain-text rendering of excuse cards for the terminal.

use std::collections::HashSet;

use crate::excuse::Excuse;

const SAVED_MARK: &str = "★ saved";

/// One numbered card from a fresh batch.
pub fn batch_card(n: usize, excuse: &Excuse, saved: bool) -> String {
    let mark = if saved { format!("  {SAVED_MARK}") } else { String::new() };
    format!("  {n}. {}\n     id {}{mark}\n", excuse.text, excuse.id)
}

/// A whole batch, marking excuses already in the collection.
pub fn batch(excuses: &[Excuse], saved_ids: &HashSet<String>) -> String {
    let mut out = String::new();
    for (i, excuse) in excuses.iter().enumerate() {
        out.push_str(&batch_card(i + 1, excuse, saved_ids.contains(&excuse.id)));
        out.push('\n');
    }
    out
}

/// The saved collection, newest first.
pub fn saved(excuses: &[Excuse]) -> String {
    if excuses.is_empty() {
        return "  No saved excuses yet. Generate some and /save your favorites.\n".to_string();
    }
    let mut out = String::from("  Your excuse collection:\n\n");
    for (i, excuse) in excuses.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {}\n     situation: {} · {} · id {}\n\n",
            i + 1,
            excuse.text,
            excuse.situation,
            excuse.created_at.format("%Y-%m-%d %H:%M"),
            excuse.id,
        ));
    }
    out
}
