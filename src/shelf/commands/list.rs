use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::catalog::CatalogStore;
use crate::store::CatalogBackend;

use super::helpers::report_load;

pub fn run<B: CatalogBackend>(store: &mut CatalogStore<B>) -> Result<CmdResult> {
    let outcome = store.refresh()?;
    let records = store.records().to_vec();

    let mut result = CmdResult::default();
    report_load(&outcome, &mut result);
    if records.is_empty() {
        result.add_message(CmdMessage::info("The library has no books."));
        return Ok(result);
    }
    Ok(result
        .with_heading("Books in the library:")
        .with_listed_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::backend_with;
    use crate::store::memory::MemBackend;

    #[test]
    fn lists_every_record_under_a_heading() {
        let mut store = CatalogStore::new(backend_with(&[
            (1, "A", "X", "2000", "in stock"),
            (2, "B", "Y", "2001", "checked out"),
        ]));

        let result = run(&mut store).unwrap();
        assert_eq!(result.heading.as_deref(), Some("Books in the library:"));
        assert_eq!(result.listed_records.len(), 2);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_catalog_is_reported() {
        let mut store = CatalogStore::new(MemBackend::with_content("[]"));

        let result = run(&mut store).unwrap();
        assert!(result.heading.is_none());
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages[0].content, "The library has no books.");
    }

    #[test]
    fn unreadable_catalog_warns_and_lists_nothing() {
        let mut store = CatalogStore::new(MemBackend::with_content("[{"));

        let result = run(&mut store).unwrap();
        assert_eq!(result.messages.len(), 2);
        assert!(result.messages[0].content.starts_with("Nothing could be read"));
    }
}
