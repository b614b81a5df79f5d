//! Sidebar summaries computed from a list of posts.

use derive_more::Deref;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::Post;

/// How many posts share a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Count posts per category, in the order the categories first show up.
///
/// Posts without a category don't count anywhere. Categories are compared
/// as exact strings.
pub fn categories(posts: &[Post]) -> Vec<CategoryCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for category in posts.iter().filter_map(|p| p.category.as_deref()) {
        *counts.entry(category).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(name, count)| CategoryCount {
            name: name.to_owned(),
            count,
        })
        .collect()
}

/// Unique tags in order of first occurrence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deref, Serialize)]
pub struct TagSet(IndexSet<String>);

impl TagSet {
    pub fn into_vec(self) -> Vec<String> {
        self.0.into_iter().collect()
    }
}

impl<'a> FromIterator<&'a str> for TagSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut set = IndexSet::new();
        for tag in iter {
            // Don't allocate for repeats.
            if !set.contains(tag) {
                set.insert(tag.to_owned());
            }
        }
        TagSet(set)
    }
}

/// Every tag used by the posts, each listed once.
pub fn tags(posts: &[Post]) -> TagSet {
    posts
        .iter()
        .flat_map(|p| p.tags.iter().map(|t| t.as_str()))
        .collect()
}

/// Everything the blog listing needs from a post collection.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Aggregates {
    pub posts: Vec<Post>,
    pub categories: Vec<CategoryCount>,
    pub tags: TagSet,
}

impl Aggregates {
    /// Summarize an already filtered list of posts.
    pub fn new(posts: Vec<Post>) -> Self {
        let categories = categories(&posts);
        let tags = tags(&posts);
        Aggregates {
            posts,
            categories,
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(category: Option<&str>, tags: &[&str]) -> Post {
        Post {
            category: category.map(|c| c.to_owned()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn counts(posts: &[Post]) -> Vec<(String, usize)> {
        categories(posts)
            .into_iter()
            .map(|c| (c.name, c.count))
            .collect()
    }

    #[test]
    fn categories_and_tags_keep_first_seen_order() {
        let posts = vec![
            post(Some("A"), &["x", "y"]),
            post(Some("B"), &["y", "z"]),
            post(Some("A"), &["x"]),
        ];

        assert_eq!(counts(&posts), vec![("A".into(), 2), ("B".into(), 1)]);
        assert_eq!(tags(&posts).into_vec(), vec!["x", "y", "z"]);
    }

    #[test]
    fn empty_input() {
        assert!(categories(&[]).is_empty());
        assert!(tags(&[]).is_empty());
    }

    #[test]
    fn post_without_category_or_tags() {
        let posts = vec![post(None, &[])];
        assert!(categories(&posts).is_empty());
        assert!(tags(&posts).is_empty());
    }

    #[test]
    fn categories_are_case_sensitive_and_untrimmed() {
        let posts = vec![
            post(Some("News"), &[]),
            post(Some("news"), &[]),
            post(Some("News "), &[]),
            post(Some("News"), &[]),
        ];
        assert_eq!(
            counts(&posts),
            vec![
                ("News".into(), 2),
                ("news".into(), 1),
                ("News ".into(), 1)
            ]
        );
    }

    #[test]
    fn order_is_not_by_count() {
        let posts = vec![
            post(Some("Rare"), &["late"]),
            post(Some("Common"), &["early", "late"]),
            post(Some("Common"), &["early"]),
            post(Some("Common"), &[]),
        ];
        assert_eq!(counts(&posts)[0], ("Rare".into(), 1));
        assert_eq!(tags(&posts).into_vec(), vec!["late", "early"]);
    }

    #[test]
    fn count_sum_matches_categorized_posts() {
        let posts = vec![
            post(Some("A"), &[]),
            post(None, &[]),
            post(Some("B"), &[]),
            post(Some("A"), &[]),
            post(None, &[]),
        ];
        let cats = categories(&posts);
        let distinct: IndexSet<_> =
            posts.iter().filter_map(|p| p.category.as_ref()).collect();

        assert!(cats.len() <= distinct.len());
        assert_eq!(cats.iter().map(|c| c.count).sum::<usize>(), 3);
    }

    #[test]
    fn tags_have_no_duplicates() {
        let posts = vec![
            post(None, &["a", "b", "a"]),
            post(Some("C"), &["b", "c", "a", "c"]),
        ];
        let tags = tags(&posts);
        assert_eq!(tags.len(), 3);
        assert_eq!(tags.into_vec(), vec!["a", "b", "c"]);
    }

    #[test]
    fn aggregates_bundle() {
        let agg = Aggregates::new(vec![post(Some("A"), &["x"])]);
        assert_eq!(agg.posts.len(), 1);
        assert_eq!(agg.categories[0].name, "A");
        assert!(agg.tags.contains("x"));
    }
}
