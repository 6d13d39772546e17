use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::catalog::CatalogStore;
use crate::store::CatalogBackend;

use super::helpers::report_load;

/// Exact, case-sensitive match against title, author or year.
pub fn run<B: CatalogBackend>(store: &mut CatalogStore<B>, query: &str) -> Result<CmdResult> {
    let outcome = store.refresh()?;
    let matches: Vec<_> = store
        .records()
        .iter()
        .filter(|record| record.matches_exactly(query))
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    report_load(&outcome, &mut result);
    if matches.is_empty() {
        result.add_message(CmdMessage::info("No books match the search query."));
    }
    Ok(result.with_listed_records(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::backend_with;

    fn store() -> CatalogStore<crate::store::memory::MemBackend> {
        CatalogStore::new(backend_with(&[
            (1, "Dune", "Frank Herbert", "2000", "in stock"),
            (2, "Solaris", "Stanislaw Lem", "1999", "in stock"),
            (3, "Roadside Picnic", "Strugatsky", "2000", "выдана"),
        ]))
    }

    #[test]
    fn matches_year_exactly() {
        let mut store = store();
        let result = run(&mut store, "2000").unwrap();
        let ids: Vec<u64> = result.listed_records.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn matches_title_and_author() {
        let mut store = store();
        assert_eq!(run(&mut store, "Solaris").unwrap().listed_records.len(), 1);
        assert_eq!(run(&mut store, "Strugatsky").unwrap().listed_records.len(), 1);
    }

    #[test]
    fn partial_and_case_variants_do_not_match() {
        let mut store = store();
        for query in ["Dun", "dune", "Herbert", "200"] {
            let result = run(&mut store, query).unwrap();
            assert!(result.listed_records.is_empty(), "{:?} matched", query);
            assert_eq!(result.messages[0].content, "No books match the search query.");
        }
    }
}
