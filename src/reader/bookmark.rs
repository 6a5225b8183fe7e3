//! Reading position bookmarks

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Last reading position of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub title: String,
    /// Spread index at the time of the last render
    pub last_page: usize,
}

/// Storage for bookmarks keyed by document title
pub trait BookmarkStore {
    fn last_spread(&self, title: &str) -> Option<usize>;
    fn record(&mut self, title: &str, spread_index: usize);
    /// Every stored bookmark, ordered by title
    fn snapshot(&self) -> Vec<Bookmark>;
}

/// In-memory bookmark table
#[derive(Debug, Clone, Default)]
pub struct MemoryBookmarks {
    entries: FxHashMap<String, Bookmark>,
}

impl MemoryBookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a JSON array of bookmark records
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let list: Vec<Bookmark> = serde_json::from_str(json)?;
        Ok(Self {
            entries: list.into_iter().map(|b| (b.title.clone(), b)).collect(),
        })
    }
}

impl BookmarkStore for MemoryBookmarks {
    fn last_spread(&self, title: &str) -> Option<usize> {
        self.entries.get(title).map(|b| b.last_page)
    }

    fn record(&mut self, title: &str, spread_index: usize) {
        self.entries
            .entry(title.to_string())
            .and_modify(|b| b.last_page = spread_index)
            .or_insert_with(|| Bookmark {
                title: title.to_string(),
                last_page: spread_index,
            });
    }

    fn snapshot(&self) -> Vec<Bookmark> {
        let mut list: Vec<Bookmark> = self.entries.values().cloned().collect();
        list.sort_by(|a, b| a.title.cmp(&b.title));
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_lookup() {
        let mut store = MemoryBookmarks::new();
        assert_eq!(store.last_spread("Walden"), None);
        store.record("Walden", 4);
        store.record("Walden", 6);
        assert_eq!(store.last_spread("Walden"), Some(6));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_json_round_trip() {
        let mut store = MemoryBookmarks::new();
        store.record("b", 2);
        store.record("a", 1);
        let json = serde_json::to_string(&store.snapshot()).unwrap();
        assert_eq!(json, r#"[{"title":"a","lastPage":1},{"title":"b","lastPage":2}]"#);

        let restored = MemoryBookmarks::from_json(&json).unwrap();
        assert_eq!(restored.last_spread("b"), Some(2));
        assert!(MemoryBookmarks::from_json("not json").is_err());
    }
}
