//! PostgreSQL-backed bookmark store.
//!
//! Uniqueness of `(catalog_id, user_id)` is enforced by the
//! `uq_bookmarks_catalog_user` constraint, so saving is a single
//! insert-or-nothing followed, only on conflict, by a lookup of the row that
//! won.

use crate::db::DbPool;
use crate::models::{BookmarkRow, NewBookmark};
use crate::schema::bookmarks;
use diesel::pg::upsert::on_constraint;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use larder_core::{Bookmark, BookmarkStore, Recipe, SaveOutcome, StoreError};

type PgPooled = PooledConnection<ConnectionManager<PgConnection>>;

pub struct PgBookmarkStore {
    pool: DbPool,
}

impl PgBookmarkStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<PgPooled, StoreError> {
        self.pool.get().map_err(|e| {
            tracing::error!("Failed to get DB connection: {}", e);
            StoreError::Unavailable(e.to_string())
        })
    }
}

fn query_failed(e: diesel::result::Error) -> StoreError {
    tracing::error!("Bookmark query failed: {}", e);
    StoreError::Query(e.to_string())
}

impl BookmarkStore for PgBookmarkStore {
    fn find_existing(
        &self,
        catalog_id: i64,
        user_id: &str,
    ) -> Result<Option<Bookmark>, StoreError> {
        let mut conn = self.conn()?;

        let row = bookmarks::table
            .filter(bookmarks::catalog_id.eq(catalog_id))
            .filter(bookmarks::user_id.eq(user_id))
            .select(BookmarkRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(query_failed)?;

        Ok(row.map(Bookmark::from))
    }

    fn create(&self, recipe: &Recipe, user_id: &str) -> Result<SaveOutcome, StoreError> {
        let mut conn = self.conn()?;

        let inserted = diesel::insert_into(bookmarks::table)
            .values(&NewBookmark::new(recipe, user_id))
            .on_conflict(on_constraint("uq_bookmarks_catalog_user"))
            .do_nothing()
            .returning(BookmarkRow::as_returning())
            .get_result(&mut conn);

        match inserted {
            Ok(row) => Ok(SaveOutcome::Created(row.into())),
            // DO NOTHING returns no row when the key already exists
            Err(diesel::result::Error::NotFound) => {
                let existing = bookmarks::table
                    .filter(bookmarks::catalog_id.eq(recipe.id))
                    .filter(bookmarks::user_id.eq(user_id))
                    .select(BookmarkRow::as_select())
                    .first(&mut conn)
                    .map_err(query_failed)?;
                Ok(SaveOutcome::Existing(existing.into()))
            }
            Err(e) => Err(query_failed(e)),
        }
    }

    fn list_by_user(&self, user_id: &str) -> Result<Vec<Bookmark>, StoreError> {
        let mut conn = self.conn()?;

        let rows = bookmarks::table
            .filter(bookmarks::user_id.eq(user_id))
            .order(bookmarks::created_at.desc())
            .select(BookmarkRow::as_select())
            .load(&mut conn)
            .map_err(query_failed)?;

        Ok(rows.into_iter().map(Bookmark::from).collect())
    }

    fn delete_by_catalog_id_and_user(
        &self,
        catalog_id: i64,
        user_id: &str,
    ) -> Result<usize, StoreError> {
        let mut conn = self.conn()?;

        diesel::delete(
            bookmarks::table
                .filter(bookmarks::catalog_id.eq(catalog_id))
                .filter(bookmarks::user_id.eq(user_id)),
        )
        .execute(&mut conn)
        .map_err(query_failed)
    }
}
