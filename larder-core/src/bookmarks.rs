//! Bookmark persistence contract.
//!
//! A bookmark is keyed by `(catalog_id, user_id)` and there is at most one per
//! key. Implementations must make [`BookmarkStore::create`] idempotent for a
//! key, returning the existing row instead of inserting a second one.

use std::sync::RwLock;

use crate::error::StoreError;
use crate::types::{Bookmark, Recipe};

/// Result of saving a bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(Bookmark),
    /// The user had already bookmarked this recipe; nothing was written.
    Existing(Bookmark),
}

impl SaveOutcome {
    pub fn bookmark(&self) -> &Bookmark {
        match self {
            SaveOutcome::Created(b) | SaveOutcome::Existing(b) => b,
        }
    }

    pub fn into_bookmark(self) -> Bookmark {
        match self {
            SaveOutcome::Created(b) | SaveOutcome::Existing(b) => b,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, SaveOutcome::Created(_))
    }
}

pub trait BookmarkStore: Send + Sync {
    fn find_existing(&self, catalog_id: i64, user_id: &str)
        -> Result<Option<Bookmark>, StoreError>;

    /// Save `recipe` for `user_id`, or return the bookmark already stored.
    fn create(&self, recipe: &Recipe, user_id: &str) -> Result<SaveOutcome, StoreError>;

    /// All of a user's bookmarks, newest first.
    fn list_by_user(&self, user_id: &str) -> Result<Vec<Bookmark>, StoreError>;

    /// Remove the user's bookmark for `catalog_id`. Returns the number of
    /// rows removed (0 or 1).
    fn delete_by_catalog_id_and_user(
        &self,
        catalog_id: i64,
        user_id: &str,
    ) -> Result<usize, StoreError>;
}

/// Bookmark store kept in process memory. Used when no database is
/// configured and in tests.
#[derive(Debug, Default)]
pub struct MemoryBookmarkStore {
    rows: RwLock<Vec<Bookmark>>,
}

impl MemoryBookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned<T>(_: T) -> StoreError {
        StoreError::Unavailable("bookmark lock poisoned".to_string())
    }
}

impl BookmarkStore for MemoryBookmarkStore {
    fn find_existing(
        &self,
        catalog_id: i64,
        user_id: &str,
    ) -> Result<Option<Bookmark>, StoreError> {
        let rows = self.rows.read().map_err(Self::poisoned)?;
        Ok(rows
            .iter()
            .find(|b| b.catalog_id == catalog_id && b.user_id == user_id)
            .cloned())
    }

    fn create(&self, recipe: &Recipe, user_id: &str) -> Result<SaveOutcome, StoreError> {
        // Check and insert under one write lock so concurrent saves of the
        // same key cannot both insert.
        let mut rows = self.rows.write().map_err(Self::poisoned)?;

        if let Some(existing) = rows
            .iter()
            .find(|b| b.catalog_id == recipe.id && b.user_id == user_id)
        {
            return Ok(SaveOutcome::Existing(existing.clone()));
        }

        let bookmark = Bookmark::new(recipe, user_id);
        rows.push(bookmark.clone());
        Ok(SaveOutcome::Created(bookmark))
    }

    fn list_by_user(&self, user_id: &str) -> Result<Vec<Bookmark>, StoreError> {
        let rows = self.rows.read().map_err(Self::poisoned)?;

        // Later inserts win ties on created_at.
        let mut bookmarks: Vec<Bookmark> = rows
            .iter()
            .rev()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        bookmarks.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(bookmarks)
    }

    fn delete_by_catalog_id_and_user(
        &self,
        catalog_id: i64,
        user_id: &str,
    ) -> Result<usize, StoreError> {
        let mut rows = self.rows.write().map_err(Self::poisoned)?;
        let before = rows.len();
        rows.retain(|b| !(b.catalog_id == catalog_id && b.user_id == user_id));
        Ok(before - rows.len())
    }
}
