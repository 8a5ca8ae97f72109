use chrono::{DateTime, Utc};
use diesel::prelude::*;
use larder_core::{Bookmark, Recipe};
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::bookmarks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BookmarkRow {
    pub id: Uuid,
    pub catalog_id: i64,
    pub user_id: String,
    pub title: String,
    pub image: String,
    pub ready_in_minutes: i32,
    pub servings: i32,
    pub summary: String,
    pub instructions: String,
    pub diets: Vec<String>,
    pub ingredients: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<BookmarkRow> for Bookmark {
    fn from(row: BookmarkRow) -> Self {
        Bookmark {
            id: row.id,
            catalog_id: row.catalog_id,
            user_id: row.user_id,
            title: row.title,
            image: row.image,
            ready_in_minutes: u32::try_from(row.ready_in_minutes).unwrap_or(0),
            servings: u32::try_from(row.servings).unwrap_or(0),
            summary: row.summary,
            instructions: row.instructions,
            diets: row.diets,
            ingredients: row.ingredients,
            created_at: row.created_at,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::bookmarks)]
pub struct NewBookmark<'a> {
    pub catalog_id: i64,
    pub user_id: &'a str,
    pub title: &'a str,
    pub image: &'a str,
    pub ready_in_minutes: i32,
    pub servings: i32,
    pub summary: &'a str,
    pub instructions: &'a str,
    pub diets: &'a [String],
    pub ingredients: &'a [String],
}

impl<'a> NewBookmark<'a> {
    pub fn new(recipe: &'a Recipe, user_id: &'a str) -> Self {
        Self {
            catalog_id: recipe.id,
            user_id,
            title: &recipe.title,
            image: &recipe.image,
            ready_in_minutes: i32::try_from(recipe.ready_in_minutes).unwrap_or(i32::MAX),
            servings: i32::try_from(recipe.servings).unwrap_or(i32::MAX),
            summary: &recipe.summary,
            instructions: &recipe.instructions,
            diets: &recipe.diets,
            ingredients: &recipe.ingredients,
        }
    }
}
