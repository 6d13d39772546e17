use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::store::catalog::CatalogStore;
use crate::store::CatalogBackend;
use tracing::info;

use super::helpers::{parse_id, report_load};

/// Sets the status of the first record with the id.
pub fn run<B: CatalogBackend>(
    store: &mut CatalogStore<B>,
    id_text: &str,
    new_status: &str,
) -> Result<CmdResult> {
    let id = parse_id(id_text)?;

    let (outcome, record) = store.transaction(|records| {
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(ShelfError::NotFound(id))?;
        record.set_status(new_status)?;
        Ok(record.clone())
    })?;
    info!(id, status = record.status().label(), "changed status");

    let mut result = CmdResult::default();
    report_load(&outcome, &mut result);
    result.add_message(CmdMessage::success(format!(
        "Status of \"{}\" changed to \"{}\".",
        record.title(),
        record.status()
    )));
    Ok(result.with_affected_records(vec![record]))
}
