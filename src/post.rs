use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::Section;

/// Publication state of a post.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Status {
    Draft,
    Published,
    /// Some other status label the site doesn't know about.
    Other(String),
    /// Status field was missing or not a string.
    #[default]
    Unknown,
}

impl Status {
    pub fn is_published(&self) -> bool {
        matches!(self, Status::Published)
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            "published" => Status::Published,
            "draft" => Status::Draft,
            other => Status::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Draft => write!(f, "draft"),
            Status::Published => write!(f, "published"),
            Status::Other(s) => write!(f, "{s}"),
            Status::Unknown => Ok(()),
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Status::Unknown => s.serialize_none(),
            _ => s.collect_str(self),
        }
    }
}

/// A blog post as delivered by the post source.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub status: Status,
    pub published_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
}

impl Post {
    /// Read a post from a JSON value.
    ///
    /// Returns `None` if the value isn't an object. Fields with the wrong
    /// shape are replaced with their empty values.
    pub fn from_json(value: &Value) -> Option<Post> {
        let Value::Object(obj) = value else {
            return None;
        };

        let id = match obj.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        let status = match obj.get("status") {
            Some(Value::String(s)) => Status::from(s.as_str()),
            None | Some(Value::Null) => Status::Unknown,
            Some(other) => {
                log::warn!("post {id:?}: ignoring non-string status {other}");
                Status::Unknown
            }
        };

        Some(Post {
            slug: optional_text(&id, obj, "slug"),
            title: text(&id, obj, "title"),
            excerpt: text(&id, obj, "excerpt"),
            content: text(&id, obj, "content"),
            category: optional_text(&id, obj, "category"),
            tags: json_tags(&id, obj),
            status,
            published_at: optional_text(&id, obj, "publishedAt"),
            featured_image: optional_text(&id, obj, "featuredImage"),
            id,
        })
    }

    /// Read a post from a collection section.
    ///
    /// The section head is the post id and default slug, attributes hold
    /// the metadata and the indented body is the post content.
    pub fn from_section(section: &Section) -> Post {
        let id = section.head.trim().to_owned();
        let body = &section.body;
        let attr = |name: &str| body.attr(name).map(|s| s.to_owned());

        let tags = match body.get::<Vec<String>>("tags") {
            Ok(tags) => tags.unwrap_or_default(),
            Err(e) => {
                log::warn!("post {id:?}: unreadable tags, {e}");
                Vec::new()
            }
        };

        Post {
            slug: Some(attr("slug").unwrap_or_else(|| id.clone())),
            title: attr("title").unwrap_or_else(|| id.clone()),
            excerpt: attr("excerpt").unwrap_or_default(),
            content: body.body_text(),
            category: attr("category").filter(|c| !c.is_empty()),
            tags,
            status: body
                .attr("status")
                .map(Status::from)
                .unwrap_or_default(),
            published_at: attr("published-at"),
            featured_image: attr("featured-image"),
            id,
        }
    }

    /// Path segment used for the post's own page.
    pub fn slug(&self) -> &str {
        self.slug.as_deref().unwrap_or(&self.id)
    }
}

fn text(id: &str, obj: &Map<String, Value>, key: &str) -> String {
    optional_text(id, obj, key).unwrap_or_default()
}

/// A string field, where empty strings count as missing.
fn optional_text(
    id: &str,
    obj: &Map<String, Value>,
    key: &str,
) -> Option<String> {
    match obj.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        None | Some(Value::Null) | Some(Value::String(_)) => None,
        Some(other) => {
            log::warn!("post {id:?}: ignoring non-string {key} {other}");
            None
        }
    }
}

fn json_tags(id: &str, obj: &Map<String, Value>) -> Vec<String> {
    match obj.get("tags") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|t| match t {
                Value::String(s) => Some(s.clone()),
                other => {
                    log::warn!("post {id:?}: dropping non-string tag {other}");
                    None
                }
            })
            .collect(),
        Some(other) => {
            log::warn!("post {id:?}: tags is not a list, {other}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Outline;

    #[test]
    fn json_post_fields() {
        let post = Post::from_json(&json!({
            "id": 7,
            "title": "Why compost?",
            "category": "Sustainability",
            "tags": ["compost", "bags"],
            "status": "published",
            "publishedAt": "2024-03-05",
            "slug": "why-compost"
        }))
        .unwrap();

        assert_eq!(post.id, "7");
        assert_eq!(post.slug(), "why-compost");
        assert_eq!(post.category.as_deref(), Some("Sustainability"));
        assert_eq!(post.tags, vec!["compost", "bags"]);
        assert!(post.status.is_published());
        assert_eq!(post.excerpt, "");
    }

    #[test]
    fn malformed_json_fields_are_tolerated() {
        let post = Post::from_json(&json!({
            "id": "x",
            "category": 12,
            "tags": "compost",
            "status": true
        }))
        .unwrap();
        assert_eq!(post.category, None);
        assert!(post.tags.is_empty());
        assert_eq!(post.status, Status::Unknown);

        let post = Post::from_json(&json!({ "tags": ["a", 1, null, "b"] }))
            .unwrap();
        assert_eq!(post.tags, vec!["a", "b"]);
    }

    #[test]
    fn empty_category_is_no_category() {
        let post = Post::from_json(&json!({ "category": "" })).unwrap();
        assert_eq!(post.category, None);
    }

    #[test]
    fn non_objects_are_not_posts() {
        assert_eq!(Post::from_json(&json!("post")), None);
        assert_eq!(Post::from_json(&json!(null)), None);
        assert_eq!(Post::from_json(&json!([1, 2])), None);
    }

    #[test]
    fn status_labels() {
        assert_eq!(Status::from("published"), Status::Published);
        assert_eq!(Status::from("draft"), Status::Draft);
        assert_eq!(
            Status::from("Published"),
            Status::Other("Published".into())
        );
        assert_eq!(Status::Other("archived".into()).to_string(), "archived");
    }

    #[test]
    fn section_post_defaults() {
        let mut body = Outline::default()
            .with_attr("category", "News")
            .with_attr("status", "published")
            .with_attr("published-at", "2024-03-05")
            .with_attr("featured-image", "/images/plant.jpg");
        body.push_line("Body text.");
        let post = Post::from_section(&Section::new("new-plant", body));

        assert_eq!(post.id, "new-plant");
        assert_eq!(post.slug(), "new-plant");
        assert_eq!(post.title, "new-plant");
        assert_eq!(post.category.as_deref(), Some("News"));
        assert!(post.tags.is_empty());
        assert_eq!(post.content, "Body text.\n");
        assert!(post.status.is_published());
        assert_eq!(post.published_at.as_deref(), Some("2024-03-05"));
        assert_eq!(post.featured_image.as_deref(), Some("/images/plant.jpg"));
        assert_eq!(post.excerpt, "");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let post = Post {
            id: "1".into(),
            status: Status::Published,
            published_at: Some("2024-01-01".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["publishedAt"], "2024-01-01");
        assert_eq!(value["status"], "published");
        assert!(value.get("slug").is_none());
    }
}
