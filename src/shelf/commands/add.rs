use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Record, Status};
use crate::store::catalog::CatalogStore;
use crate::store::counter::IdSource;
use crate::store::CatalogBackend;
use tracing::{info, warn};

use super::helpers::report_load;

/// Adds a book. Fields are validated and an id drawn before the catalog is loaded.
///
/// Ids are positive. A fresh counter hands out `0` first, and an issued id may already
/// be taken (the counter file was reset or edited); in both cases ids are drawn until a
/// usable one comes up.
pub fn run<B: CatalogBackend, I: IdSource + ?Sized>(
    store: &mut CatalogStore<B>,
    ids: &mut I,
    status: Status,
    title: &str,
    author: &str,
    year: &str,
) -> Result<CmdResult> {
    let mut record = Record::new(title, author, year, status, ids)?;

    let (outcome, record) = store.transaction(|records| {
        while record.id() == 0 || records.iter().any(|r| r.id() == record.id()) {
            warn!(id = record.id(), "issued id is unusable, drawing another");
            let next = ids.next_id()?;
            record.reassign_id(next);
        }
        records.push(record.clone());
        Ok(record)
    })?;
    info!(id = record.id(), title = record.title(), "added book");

    let mut result = CmdResult::default();
    report_load(&outcome, &mut result);
    result.add_message(CmdMessage::success(format!(
        "Book \"{}\" saved.",
        record.title()
    )));
    Ok(result.with_affected_records(vec![record]))
}
