use crate::model::Roster;

/// Error type for roster operations
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("index {index} out of range ({len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no entry is being edited")]
    NoActiveEdit,
}

fn check_index(roster: &Roster, index: usize) -> Result<(), RosterError> {
    if index < roster.names.len() {
        Ok(())
    } else {
        Err(RosterError::IndexOutOfRange {
            index,
            len: roster.names.len(),
        })
    }
}

// ---------------------------------------------------------------------------
// Add / edit
// ---------------------------------------------------------------------------

/// Append a name to the end of the roster. The name is trimmed first;
/// a name that trims to nothing is rejected and the roster is unchanged.
/// Returns the index of the new entry.
pub fn add_name(roster: &mut Roster, name: &str) -> Result<usize, RosterError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RosterError::EmptyName);
    }
    roster.names.push(name.to_string());
    Ok(roster.names.len() - 1)
}

/// Open the entry at `index` for editing and return its current name.
/// The index must be valid — callers derive it from the latest render pass,
/// so a failure here means the index went stale.
pub fn begin_edit(roster: &mut Roster, index: usize) -> Result<&str, RosterError> {
    check_index(roster, index)?;
    roster.editing = Some(index);
    Ok(&roster.names[index])
}

/// Replace the name under the edit cursor and close the edit. An empty
/// trimmed name is rejected: the roster is unchanged and the cursor stays
/// where it was so the user can retry. Returns the edited index.
pub fn save_edit(roster: &mut Roster, name: &str) -> Result<usize, RosterError> {
    let index = roster.editing.ok_or(RosterError::NoActiveEdit)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(RosterError::EmptyName);
    }
    roster.names[index] = name.to_string();
    roster.editing = None;
    Ok(index)
}

/// Close the edit without saving. Idempotent.
pub fn cancel_edit(roster: &mut Roster) {
    roster.editing = None;
}

// ---------------------------------------------------------------------------
// Delete / reorder / clear
// ---------------------------------------------------------------------------

/// Remove the entry at `index`, shifting later entries down. The edit
/// cursor is adjusted atomically: deleting the edited entry closes the
/// edit, deleting an earlier entry shifts the cursor down with its target.
/// Returns the removed name.
pub fn delete_name(roster: &mut Roster, index: usize) -> Result<String, RosterError> {
    check_index(roster, index)?;
    let removed = roster.names.remove(index);

    match roster.editing {
        Some(e) if e == index => roster.editing = None,
        Some(e) if e > index => roster.editing = Some(e - 1),
        _ => {}
    }

    Ok(removed)
}

/// Swap the entries at `from` and `to`. This is deliberately a two-element
/// swap, not a move-and-insert: the entries trade places and everything
/// between them stays put. The edit cursor follows its entry across the
/// swap. Both indices must be valid.
pub fn swap_names(roster: &mut Roster, from: usize, to: usize) -> Result<(), RosterError> {
    check_index(roster, from)?;
    check_index(roster, to)?;
    roster.names.swap(from, to);

    match roster.editing {
        Some(e) if e == from => roster.editing = Some(to),
        Some(e) if e == to => roster.editing = Some(from),
        _ => {}
    }

    Ok(())
}

/// Empty the roster and close any open edit. The yes/no gate lives at the
/// UI layer; by the time this runs the user has confirmed.
pub fn clear_all(roster: &mut Roster) {
    roster.names.clear();
    roster.editing = None;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
