//! Merge substring hits, fuzzy hits and launch frequency into one list.

use std::cmp::Reverse;
use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::usage::UsageRanking;

use super::bktree::ApproxIndex;

pub const DEFAULT_MAX_DISTANCE: usize = 4;

/// Outcome of a recompute. An empty query shows the catalog as is without
/// copying it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ResultList {
    #[default]
    ShowAll,
    Matches(Vec<usize>),
}

impl ResultList {
    /// Number of rows, given the catalog size for `ShowAll`.
    pub fn len(&self, catalog_len: usize) -> usize {
        match self {
            ResultList::ShowAll => catalog_len,
            ResultList::Matches(items) => items.len(),
        }
    }

    /// Catalog index of the row at `row`.
    pub fn item_at(&self, row: usize, catalog_len: usize) -> Option<usize> {
        match self {
            ResultList::ShowAll => (row < catalog_len).then_some(row),
            ResultList::Matches(items) => items.get(row).copied(),
        }
    }

    pub fn no_matches(&self) -> bool {
        matches!(self, ResultList::Matches(items) if items.is_empty())
    }

    pub fn is_show_all(&self) -> bool {
        matches!(self, ResultList::ShowAll)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FilterEngine {
    max_distance: usize,
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DISTANCE)
    }
}

impl FilterEngine {
    pub fn new(max_distance: usize) -> Self {
        Self { max_distance }
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Substring hits in catalog order, then fuzzy-only hits, then a stable
    /// sort by descending launch count when any history exists.
    pub fn recompute(
        &self,
        query: &str,
        catalog: &Catalog,
        index: &ApproxIndex,
        ranking: &UsageRanking,
    ) -> ResultList {
        if query.is_empty() {
            return ResultList::ShowAll;
        }
        let query = query.to_lowercase();

        let mut result: Vec<usize> = catalog
            .items()
            .iter()
            .enumerate()
            .filter(|(_, item)| item.name.contains(&query))
            .map(|(i, _)| i)
            .collect();

        let mut seen: HashSet<usize> = result.iter().copied().collect();
        for item in index.query(&query, self.max_distance, catalog) {
            if seen.insert(item) {
                result.push(item);
            }
        }

        if !ranking.is_empty() {
            // sort_by_key is stable: equal counts keep the order built above.
            result.sort_by_key(|&i| Reverse(ranking.count(catalog.name(i))));
        }

        tracing::debug!(query = %query, matches = result.len(), "filter recomputed");
        ResultList::Matches(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Catalog, ApproxIndex) {
        let catalog = Catalog::from_pairs([
            ("files", "nautilus"),
            ("firefox", "firefox"),
            ("terminal", "xterm"),
        ]);
        let index = ApproxIndex::build(&catalog);
        (catalog, index)
    }

    fn matches(list: ResultList) -> Vec<usize> {
        match list {
            ResultList::Matches(items) => items,
            ResultList::ShowAll => panic!("expected matches"),
        }
    }

    #[test]
    fn empty_query_shows_everything() {
        let (catalog, index) = fixture();
        let list = FilterEngine::default().recompute("", &catalog, &index, &UsageRanking::new());
        assert!(list.is_show_all());
        assert!(!list.no_matches());
        assert_eq!(list.len(catalog.len()), 3);
        assert_eq!(list.item_at(2, catalog.len()), Some(2));
        assert_eq!(list.item_at(3, catalog.len()), None);
    }

    #[test]
    fn substring_hits_come_first_in_catalog_order() {
        let (catalog, index) = fixture();
        let list = FilterEngine::default().recompute("fi", &catalog, &index, &UsageRanking::new());
        assert!(!list.no_matches());
        let items = matches(list);
        assert_eq!(&items[..2], &[0, 1]);
    }

    #[test]
    fn fuzzy_only_hit_is_found() {
        let (catalog, index) = fixture();
        let items = matches(FilterEngine::default().recompute(
            "filess",
            &catalog,
            &index,
            &UsageRanking::new(),
        ));
        assert!(items.contains(&0));
        assert!(!items.contains(&2));
    }

    #[test]
    fn query_is_case_folded() {
        let (catalog, index) = fixture();
        let items = matches(FilterEngine::default().recompute("TERM", &catalog, &index, &UsageRanking::new()));
        assert_eq!(items.first(), Some(&2));
    }

    #[test]
    fn substring_hits_precede_fuzzy_hits_without_duplicates() {
        let catalog = Catalog::from_pairs([
            ("gedit", "gedit"),
            ("edit", "edit"),
            ("text editor", "gnome-text-editor"),
            ("edge", "microsoft-edge"),
        ]);
        let index = ApproxIndex::build(&catalog);
        let items = matches(FilterEngine::default().recompute("edit", &catalog, &index, &UsageRanking::new()));

        let unique: HashSet<usize> = items.iter().copied().collect();
        assert_eq!(unique.len(), items.len());
        assert_eq!(&items[..3], &[0, 1, 2]);
        assert!(items.contains(&3));
    }

    #[test]
    fn nothing_close_is_no_matches() {
        let (catalog, index) = fixture();
        let list = FilterEngine::default().recompute(
            "zzzzzzzzzzzz",
            &catalog,
            &index,
            &UsageRanking::new(),
        );
        assert!(list.no_matches());
        assert_eq!(list.len(catalog.len()), 0);
    }

    #[test]
    fn launch_count_reorders_results() {
        let (catalog, index) = fixture();
        let mut ranking = UsageRanking::new();
        for _ in 0..3 {
            ranking.record("firefox").unwrap();
        }
        ranking.record("files").unwrap();
        let items = matches(FilterEngine::default().recompute("fi", &catalog, &index, &ranking));
        assert_eq!(&items[..2], &[1, 0]);
    }

    #[test]
    fn equal_counts_keep_match_order() {
        let (catalog, index) = fixture();
        let mut ranking = UsageRanking::new();
        ranking.record("terminal").unwrap();
        let items = matches(FilterEngine::default().recompute("fi", &catalog, &index, &ranking));
        assert_eq!(&items[..2], &[0, 1]);
    }

    #[test]
    fn smaller_radius_drops_fuzzy_hits() {
        let (catalog, index) = fixture();
        let list = FilterEngine::new(0).recompute("filess", &catalog, &index, &UsageRanking::new());
        assert!(list.no_matches());
    }
}
