// Content store
//
// Process-wide mapping from ContentId to the markup submitted under it. Built
// once at startup and handed to every handler; clones share the same map.

mod id;

pub use id::{ContentId, ParseContentIdError};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

/// Thread-safe id → body map.
///
/// Bodies are stored as `Arc<str>` so readers get a cheap shared handle and
/// nobody outside the store can mutate an entry once it is written.
#[derive(Clone, Default)]
pub struct ContentStore {
    entries: Arc<DashMap<ContentId, Arc<str>>>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `body` under a fresh id and return that id.
    ///
    /// Never overwrites: a colliding id is discarded and regenerated while the
    /// shard lock is released.
    pub fn put(&self, body: impl Into<String>) -> ContentId {
        let body: Arc<str> = Arc::from(body.into());
        loop {
            let id = ContentId::generate();
            match self.entries.entry(id) {
                Entry::Vacant(slot) => {
                    slot.insert(body);
                    return id;
                }
                Entry::Occupied(_) => {
                    tracing::warn!(id = %id, "Content id collision, regenerating");
                }
            }
        }
    }

    pub fn get(&self, id: &ContentId) -> Option<Arc<str>> {
        self.entries.get(id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, id: &ContentId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_put_then_get_returns_same_body() {
        let store = ContentStore::new();
        let body = "<h1>hello</h1>\r\n<p>ünïcödé</p>";
        let id = store.put(body);
        assert_eq!(store.get(&id).as_deref(), Some(body));
    }

    #[test]
    fn test_empty_body_is_stored() {
        let store = ContentStore::new();
        let id = store.put("");
        assert_eq!(store.get(&id).as_deref(), Some(""));
    }

    #[test]
    fn test_equal_bodies_get_distinct_ids() {
        let store = ContentStore::new();
        let a = store.put("same");
        let b = store.put("same");
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_unknown_id_is_absent() {
        let store = ContentStore::new();
        store.put("something");
        let stranger = ContentId::generate();
        assert!(store.get(&stranger).is_none());
        assert!(!store.contains(&stranger));
    }

    #[test]
    fn test_clones_share_entries() {
        let store = ContentStore::new();
        let handle = store.clone();
        let id = handle.put("shared");
        assert_eq!(store.get(&id).as_deref(), Some("shared"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_does_not_mutate() {
        let store = ContentStore::new();
        let id = store.put("x");
        for _ in 0..10 {
            store.get(&id);
        }
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_puts_no_cross_talk() {
        const TASKS: usize = 256;
        let store = ContentStore::new();

        let mut handles = Vec::with_capacity(TASKS);
        for i in 0..TASKS {
            let s = store.clone();
            handles.push(tokio::spawn(async move {
                let body = format!("<p>payload {i}</p>");
                let id = s.put(body.clone());
                (id, body)
            }));
        }

        let mut ids = HashSet::new();
        for h in handles {
            let (id, body) = h.await.unwrap();
            assert!(ids.insert(id), "duplicate id {id}");
            assert_eq!(store.get(&id).as_deref(), Some(body.as_str()));
        }
        assert_eq!(store.len(), TASKS);
    }
}
