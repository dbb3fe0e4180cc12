// ============================
// reshelf-backend-lib/src/store.rs
// ============================
//! Generic in-memory repository over named collections of entity records.
//!
//! Rows live in a `Vec` behind an async `RwLock`, so `find_all` returns
//! records in insertion order. Every method is a single atomic
//! read-modify-write; check-then-act sequences that span calls (e.g. "email
//! unused, then insert") must be serialized by the caller.
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

/// A record that can live in a [`Collection`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Opaque unique identifier, generated by the caller before insertion.
    fn id(&self) -> &str;
    /// Refresh the record's `updated_at` timestamp.
    fn touch(&mut self, at: DateTime<Utc>);
}

/// A partial update for an entity of type `T`. Fields are explicitly named
/// and optional, so merge semantics are compiler-checked.
pub trait Patch<T> {
    /// Merge the supplied fields into `target`, leaving the rest untouched.
    fn apply(self, target: &mut T);
}

/// Named collection of entity records.
pub struct Collection<T> {
    name: &'static str,
    rows: RwLock<Vec<T>>,
}

impl<T: Entity> Collection<T> {
    /// Create an empty collection.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Collection name, used in log lines.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All records in insertion order.
    pub async fn find_all(&self) -> Vec<T> {
        self.rows.read().await.clone()
    }

    /// Record with the given id, if present.
    pub async fn find_by_id(&self, id: &str) -> Option<T> {
        self.rows.read().await.iter().find(|r| r.id() == id).cloned()
    }

    /// First record matching the predicate, in stored order.
    pub async fn find_one<F>(&self, pred: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        self.rows.read().await.iter().find(|r| pred(r)).cloned()
    }

    /// Append a record. The caller supplies a pre-generated unique id.
    pub async fn insert(&self, row: T) {
        self.rows.write().await.push(row);
    }

    /// Merge `patch` into the record with the given id and refresh its
    /// `updated_at`. Returns the updated record, or `None` (and mutates
    /// nothing) when the id is absent.
    pub async fn update_by_id<P: Patch<T>>(&self, id: &str, patch: P) -> Option<T> {
        let mut rows = self.rows.write().await;
        let row = rows.iter_mut().find(|r| r.id() == id)?;
        patch.apply(row);
        row.touch(Utc::now());
        Some(row.clone())
    }

    /// Remove and return the record with the given id.
    pub async fn delete_by_id(&self, id: &str) -> Option<T> {
        let mut rows = self.rows.write().await;
        let idx = rows.iter().position(|r| r.id() == id)?;
        Some(rows.remove(idx))
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Whether the collection holds no records.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}
