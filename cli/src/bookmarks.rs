//! Bookmark commands, sent to a running larder-server.

use anyhow::{Context, Result};
use clap::Args;
use larder_core::Bookmark;
use serde_json::{json, Value};

use crate::search::summary_line;

#[derive(Args, Debug)]
pub struct Target {
    /// Server URL
    #[arg(long, default_value = "http://localhost:3000")]
    pub server: String,
    /// User id sent as X-User-Id (server default when omitted)
    #[arg(long)]
    pub user: Option<String>,
}

impl Target {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.trim_end_matches('/'), path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = reqwest::Client::new().request(method, self.url(path));
        match &self.user {
            Some(user) => builder.header("X-User-Id", user),
            None => builder,
        }
    }
}

/// Send a request and return its JSON body, failing on non-success status.
async fn send(builder: reqwest::RequestBuilder) -> Result<(reqwest::StatusCode, Value)> {
    let response = builder.send().await.context("Failed to reach server")?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    tracing::debug!(%status, "Server responded");

    if !status.is_success() {
        anyhow::bail!("Request failed with status {}: {}", status, body);
    }

    let json = serde_json::from_str(&body).context("Server returned invalid JSON")?;
    Ok((status, json))
}

pub async fn save(target: &Target, recipe_id: i64) -> Result<()> {
    let (status, bookmark) = send(
        target
            .request(reqwest::Method::POST, "/api/bookmarks/by-id")
            .json(&json!({ "recipeId": recipe_id })),
    )
    .await?;

    let title = bookmark["title"].as_str().unwrap_or_default();
    if status == reqwest::StatusCode::CREATED {
        println!("Saved {} ({})", title, recipe_id);
    } else {
        println!("Already saved: {} ({})", title, recipe_id);
    }

    Ok(())
}

pub async fn list(target: &Target) -> Result<()> {
    let (_, mut body) = send(target.request(reqwest::Method::GET, "/api/bookmarks")).await?;

    let bookmarks = parse_bookmarks(body["bookmarks"].take())?;
    if bookmarks.is_empty() {
        println!("No saved recipes");
        return Ok(());
    }

    for bookmark in &bookmarks {
        println!("{}", summary_line(&bookmark.to_recipe()));
    }

    Ok(())
}

fn parse_bookmarks(value: Value) -> Result<Vec<Bookmark>> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value).context("Server returned malformed bookmarks")
}

pub async fn unsave(target: &Target, recipe_id: i64) -> Result<()> {
    let (_, body) = send(target.request(
        reqwest::Method::DELETE,
        &format!("/api/bookmarks/{}", recipe_id),
    ))
    .await?;

    println!("{}", body["message"].as_str().unwrap_or("Done"));

    Ok(())
}
