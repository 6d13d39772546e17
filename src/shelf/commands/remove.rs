use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::store::catalog::CatalogStore;
use crate::store::CatalogBackend;
use tracing::info;

use super::helpers::{parse_id, report_load};

/// Removes every record carrying the id, not just the first one.
pub fn run<B: CatalogBackend>(store: &mut CatalogStore<B>, id_text: &str) -> Result<CmdResult> {
    let id = parse_id(id_text)?;

    let (outcome, removed) = store.transaction(|records| {
        let (removed, kept): (Vec<_>, Vec<_>) =
            records.drain(..).partition(|record| record.id() == id);
        *records = kept;
        if removed.is_empty() {
            return Err(ShelfError::NotFound(id));
        }
        Ok(removed)
    })?;
    info!(id, count = removed.len(), "removed books");

    let mut result = CmdResult::default();
    report_load(&outcome, &mut result);
    if let Some(last) = removed.last() {
        result.add_message(CmdMessage::success(format!(
            "Book \"{}\" removed.",
            last.title()
        )));
    }
    Ok(result.with_affected_records(removed))
}
