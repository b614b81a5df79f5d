//! Where posts come from.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::{collection, Post};

/// What a post source delivered.
///
/// Sources aren't trusted to hand over a list. Anything that isn't one is
/// `Invalid`, and consumers must decide what that means for them.
#[derive(Clone, Debug, PartialEq)]
pub enum Fetched {
    Posts(Vec<Post>),
    Invalid,
}

impl Fetched {
    /// Interpret a parsed JSON document.
    pub fn from_json(value: Value) -> Fetched {
        let items = match value {
            Value::Array(items) => items,
            other => {
                log::warn!(
                    "post source did not return a list, got {}",
                    json_kind(&other)
                );
                return Fetched::Invalid;
            }
        };

        let mut posts = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            match Post::from_json(item) {
                Some(post) => posts.push(post),
                None => log::warn!(
                    "skipping non-object post #{i}, got {}",
                    json_kind(item)
                ),
            }
        }
        Fetched::Posts(posts)
    }
}

/// Name of a JSON value's type for log messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Anything that can be asked for the site's posts.
pub trait PostSource {
    fn fetch(&self) -> Result<Fetched>;
}

/// Posts in a JSON document.
pub struct JsonPosts(pub String);

impl PostSource for JsonPosts {
    fn fetch(&self) -> Result<Fetched> {
        let value: Value = serde_json::from_str(&self.0)
            .context("post source is not valid JSON")?;
        Ok(Fetched::from_json(value))
    }
}

/// Posts in an IDM collection, either a directory of post files or a single
/// file with one post per toplevel section.
pub struct CollectionPosts(pub PathBuf);

impl CollectionPosts {
    pub fn new(path: impl AsRef<Path>) -> Self {
        CollectionPosts(path.as_ref().to_owned())
    }
}

impl PostSource for CollectionPosts {
    fn fetch(&self) -> Result<Fetched> {
        let outline = if self.0.is_dir() {
            collection::read_directory(&self.0)?
        } else {
            collection::read_file(&self.0)?
        };

        let posts: Vec<Post> = outline
            .iter()
            // Blank toplevel lines aren't posts.
            .filter(|s| !s.head.trim().is_empty())
            .map(Post::from_section)
            .collect();
        log::info!("read {} post(s) from {:?}", posts.len(), self.0);
        Ok(Fetched::Posts(posts))
    }
}

/// Keep the published posts, in source order.
///
/// An invalid fetch result counts as having no posts at all.
pub fn published(fetched: Fetched) -> Vec<Post> {
    match fetched {
        Fetched::Posts(posts) => posts
            .into_iter()
            .filter(|p| p.status.is_published())
            .collect(),
        Fetched::Invalid => Vec::new(),
    }
}
