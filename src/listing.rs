//! The blog listing page.

use std::fmt;

use itertools::Itertools;

use crate::{
    i18n::Catalog, parse, Aggregates, Outline, PageConfig, Post, Section,
};

const FEATURED_PLACEHOLDER: &str =
    "/placeholder.svg?height=500&width=900&query=blog post";
const CARD_PLACEHOLDER: &str =
    "/placeholder.svg?height=300&width=500&query=blog post";

/// Badges shown on the featured post.
const FEATURED_TAG_LIMIT: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostCard {
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub author: String,
    pub read_minutes: usize,
    pub image: String,
    pub href: String,
    pub tags: Vec<Link>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryLink {
    pub name: String,
    pub count: usize,
    pub href: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub current: usize,
    pub total_pages: usize,
}

impl Pagination {
    pub fn new(
        current: usize,
        total_posts: usize,
        page_size: Option<usize>,
    ) -> Self {
        let total_pages = match page_size {
            Some(size) => total_posts.div_ceil(size.max(1)).max(1),
            None => 1,
        };
        Pagination {
            current: current.max(1),
            total_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }
}

/// Everything shown on one page of the blog listing.
pub struct BlogPage<'a> {
    config: &'a PageConfig,
    catalog: &'a Catalog,
    pub featured: Option<PostCard>,
    pub posts: Vec<PostCard>,
    pub categories: Vec<CategoryLink>,
    pub tags: Vec<Link>,
    pub pagination: Pagination,
    /// Published posts across all pages.
    pub total_posts: usize,
}

impl<'a> BlogPage<'a> {
    pub fn new(
        aggregates: &Aggregates,
        config: &'a PageConfig,
        catalog: &'a Catalog,
    ) -> Self {
        let locale = &config.locale;
        let all = &aggregates.posts;
        let pagination =
            Pagination::new(config.page, all.len(), config.page_size);

        let page_posts: &[Post] = match config.page_size {
            Some(size) => {
                let size = size.max(1);
                let start = (pagination.current - 1).saturating_mul(size);
                if start >= all.len() {
                    &[]
                } else {
                    &all[start..(start + size).min(all.len())]
                }
            }
            None => all,
        };

        let mut featured = None;
        let mut rest = page_posts;
        if pagination.current == 1 {
            if let Some((first, tail)) = page_posts.split_first() {
                let mut card = card(first, config, FEATURED_PLACEHOLDER);
                card.tags = first
                    .tags
                    .iter()
                    .take(FEATURED_TAG_LIMIT)
                    .map(|t| Link {
                        label: format!("#{t}"),
                        href: tag_href(locale, t),
                    })
                    .collect();
                featured = Some(card);
                rest = tail;
            }
        }

        let posts = rest
            .iter()
            .map(|p| card(p, config, CARD_PLACEHOLDER))
            .collect();

        let categories = aggregates
            .categories
            .iter()
            .map(|c| CategoryLink {
                name: c.name.clone(),
                count: c.count,
                href: format!(
                    "/{locale}/blog/category/{}",
                    parse::slug(&c.name)
                ),
            })
            .collect();

        let tags = aggregates
            .tags
            .iter()
            .map(|t| Link {
                label: t.clone(),
                href: tag_href(locale, t),
            })
            .collect();

        BlogPage {
            config,
            catalog,
            featured,
            posts,
            categories,
            tags,
            pagination,
            total_posts: all.len(),
        }
    }

    /// Whether this page shows no post cards.
    pub fn is_empty(&self) -> bool {
        self.featured.is_none() && self.posts.is_empty()
    }

    pub fn to_outline(&self) -> Outline {
        let t = |id: &str, fallback: &'static str| {
            self.catalog.text(id, fallback).to_owned()
        };
        let locale = &self.config.locale;

        let mut page = Outline::default();
        page.push(Section::line(format!(
            "< {} (/{locale})",
            t("common.backToHome", "Back to Home")
        )));

        let mut heading = Outline::default();
        heading.push_line(t(
            "blog.subtitle",
            "Insights, updates, and resources on compostable plastics and sustainability",
        ));
        page.push(Section::new(t("blog.title", "Blog & News"), heading));

        if self.total_posts == 0 {
            page.push_line(
                "No blog posts found. Please add posts through the admin dashboard.",
            );
        } else {
            if self.is_empty() {
                page.push_line("No posts on this page.");
            }

            if let Some(card) = &self.featured {
                let mut featured = Outline::default();
                featured.push(card.to_section(None));
                page.push(Section::new("Featured", featured));
            }

            if !self.posts.is_empty() {
                let read_more = t("blog.readMore", "Read More");
                page.push(Section::new(
                    "Posts",
                    self.posts
                        .iter()
                        .map(|c| c.to_section(Some(read_more.as_str())))
                        .collect(),
                ));
            }

            page.push(self.pagination_section(&t));
        }

        // Sidebar
        let search_placeholder = if self.config.is_english() {
            "Search articles..."
        } else {
            "खोज लेख..."
        };
        page.push(Section::new(
            t("blog.search", "Search"),
            Outline::default().with_attr("placeholder", search_placeholder),
        ));

        if !self.categories.is_empty() {
            page.push(Section::new(
                t("blog.categories", "Categories"),
                self.categories
                    .iter()
                    .map(|c| {
                        Section::new(
                            format!("{} ({})", c.name, c.count),
                            Outline::default().with_attr("link", &c.href),
                        )
                    })
                    .collect(),
            ));
        }

        if !self.tags.is_empty() {
            page.push(Section::new(
                t("blog.popularTags", "Popular Tags"),
                self.tags
                    .iter()
                    .map(|l| {
                        Section::new(
                            &l.label,
                            Outline::default().with_attr("link", &l.href),
                        )
                    })
                    .collect(),
            ));
        }

        let email_placeholder = if self.config.is_english() {
            "Your email address"
        } else {
            "आपका ईमेल पता"
        };
        let mut newsletter =
            Outline::default().with_attr("placeholder", email_placeholder);
        newsletter.push_line(t(
            "blog.newsletterDescription",
            "Stay updated with the latest news and insights on sustainable plastics",
        ));
        newsletter.push_line(format!("[{}]", t("blog.subscribe", "Subscribe")));
        page.push(Section::new(
            t("blog.subscribeNewsletter", "Subscribe to Our Newsletter"),
            newsletter,
        ));

        page
    }

    fn pagination_section(
        &self,
        t: &impl Fn(&str, &'static str) -> String,
    ) -> Section {
        let p = self.pagination;
        let button = |label: String, enabled: bool| {
            if enabled {
                label
            } else {
                format!("{label} (disabled)")
            }
        };

        let numbers = (1..=p.total_pages)
            .map(|n| {
                if n == p.current {
                    format!("[{n}]")
                } else {
                    n.to_string()
                }
            })
            .join(" ");

        let mut body = Outline::default()
            .with_attr("page", p.current.to_string())
            .with_attr("of", p.total_pages.to_string());
        body.push_line(button(t("blog.previous", "Previous"), p.has_previous()));
        body.push_line(numbers);
        body.push_line(button(t("blog.next", "Next"), p.has_next()));
        Section::new("Pages", body)
    }
}

impl fmt::Display for BlogPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_outline())
    }
}

impl PostCard {
    fn to_section(&self, read_more: Option<&str>) -> Section {
        let mut body = Outline::default()
            .with_attr("date", &self.date)
            .with_attr("author", &self.author)
            .with_attr("read-time", format!("{} min read", self.read_minutes))
            .with_attr("image", &self.image);
        if !self.tags.is_empty() {
            body.set_attr(
                "tags",
                self.tags.iter().map(|l| l.label.as_str()).join(" "),
            );
        }
        body.set_attr("link", &self.href);

        if !self.excerpt.is_empty() {
            body.push_line(&self.excerpt);
        }
        if let Some(label) = read_more {
            body.push_line(format!("[{label}]"));
        }
        Section::new(&self.title, body)
    }
}

fn card(post: &Post, config: &PageConfig, placeholder: &str) -> PostCard {
    PostCard {
        title: post.title.clone(),
        excerpt: post.excerpt.clone(),
        date: display_date(post.published_at.as_deref()),
        author: config.author.clone(),
        read_minutes: read_minutes(
            &post.content,
            config.read_chars_per_minute,
        ),
        image: post
            .featured_image
            .clone()
            .unwrap_or_else(|| placeholder.to_owned()),
        href: format!("/{}/blog/{}", config.locale, post.slug()),
        tags: Vec::new(),
    }
}

fn tag_href(locale: &str, tag: &str) -> String {
    format!("/{locale}/blog/tag/{}", parse::slug(tag))
}

/// Minutes to read `content`, rounded up.
pub fn read_minutes(content: &str, chars_per_minute: usize) -> usize {
    content.chars().count().div_ceil(chars_per_minute.max(1))
}

/// Publication date as shown on cards, eg. "March 5, 2024".
pub fn display_date(published_at: Option<&str>) -> String {
    match published_at {
        None => "No date".into(),
        Some(s) => match parse::date(s) {
            Some(d) => d.format("%B %-d, %Y").to_string(),
            None => "Invalid Date".into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    fn post(id: &str, category: &str, tags: &[&str]) -> Post {
        Post {
            id: id.into(),
            title: format!("Post {id}"),
            category: Some(category.into()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            status: Status::Published,
            ..Default::default()
        }
    }

    fn sample() -> Aggregates {
        Aggregates::new(vec![
            post("1", "Zero Waste", &["Compost Bags", "epr", "soil", "cpcb"]),
            post("2", "News", &["epr"]),
            post("3", "Zero Waste", &[]),
        ])
    }

    #[test]
    fn featured_post_gets_three_tag_badges() {
        let agg = sample();
        let config = PageConfig::default();
        let catalog = Catalog::default();
        let page = BlogPage::new(&agg, &config, &catalog);

        let featured = page.featured.as_ref().unwrap();
        assert_eq!(featured.title, "Post 1");
        assert_eq!(featured.image, FEATURED_PLACEHOLDER);
        assert_eq!(
            featured.tags.iter().map(|l| l.label.as_str()).collect::<Vec<_>>(),
            vec!["#Compost Bags", "#epr", "#soil"]
        );
        assert_eq!(featured.tags[0].href, "/en/blog/tag/compost-bags");
        assert_eq!(page.posts.len(), 2);
        assert_eq!(page.posts[0].href, "/en/blog/2");
        assert!(page.posts[0].tags.is_empty());
    }

    #[test]
    fn sidebar_links() {
        let agg = sample();
        let config = PageConfig {
            locale: "hi".into(),
            ..Default::default()
        };
        let catalog = Catalog::default();
        let page = BlogPage::new(&agg, &config, &catalog);

        assert_eq!(
            page.categories[0],
            CategoryLink {
                name: "Zero Waste".into(),
                count: 2,
                href: "/hi/blog/category/zero-waste".into(),
            }
        );
        assert_eq!(page.tags.len(), 4);
        assert_eq!(page.tags[1].href, "/hi/blog/tag/epr");

        let text = page.to_string();
        assert!(text.contains("खोज लेख..."));
        assert!(text.contains("Zero Waste (2)\n    :link /hi/blog/category/zero-waste"));
    }

    #[test]
    fn paging() {
        let agg = sample();
        let catalog = Catalog::default();

        let config = PageConfig {
            page_size: Some(2),
            ..Default::default()
        };
        let first = BlogPage::new(&agg, &config, &catalog);
        assert!(first.featured.is_some());
        assert_eq!(first.posts.len(), 1);
        assert_eq!(first.pagination.total_pages, 2);
        assert!(!first.pagination.has_previous());
        assert!(first.pagination.has_next());

        let config = PageConfig {
            page: 2,
            page_size: Some(2),
            ..Default::default()
        };
        let second = BlogPage::new(&agg, &config, &catalog);
        assert!(second.featured.is_none());
        assert_eq!(second.posts[0].title, "Post 3");
        assert!(second.pagination.has_previous());
        assert!(!second.pagination.has_next());

        let config = PageConfig {
            page: 9,
            page_size: Some(2),
            ..Default::default()
        };
        let past_end = BlogPage::new(&agg, &config, &catalog);
        assert!(past_end.is_empty());
        assert_eq!(past_end.total_posts, 3);

        let text = past_end.to_string();
        assert!(text.contains("No posts on this page."));
        assert!(!text.contains("No blog posts found."));
        assert!(text.contains("Pages\n  :page 9\n  :of 2\n"));
        assert!(text.contains("  Previous\n  1 2\n  Next (disabled)\n"));
    }

    #[test]
    fn pagination_counts() {
        assert_eq!(Pagination::new(1, 0, Some(10)).total_pages, 1);
        assert_eq!(Pagination::new(1, 10, Some(10)).total_pages, 1);
        assert_eq!(Pagination::new(1, 11, Some(10)).total_pages, 2);
        assert_eq!(Pagination::new(0, 5, None).current, 1);
    }

    #[test]
    fn empty_listing_keeps_static_sidebar() {
        let agg = Aggregates::default();
        let config = PageConfig::default();
        let catalog = Catalog::default();
        let text = BlogPage::new(&agg, &config, &catalog).to_string();

        assert!(text.contains("No blog posts found."));
        assert!(!text.contains("Categories"));
        assert!(!text.contains("Popular Tags"));
        assert!(!text.contains("Pages"));
        assert!(text.contains("Search articles..."));
        assert!(text.contains("Subscribe to Our Newsletter"));
    }

    #[test]
    fn translated_texts() {
        let agg = sample();
        let config = PageConfig::default();
        let catalog: Catalog =
            [("blog.title", "Neuigkeiten"), ("blog.readMore", "Weiterlesen")]
                .into_iter()
                .collect();
        let text = BlogPage::new(&agg, &config, &catalog).to_string();
        assert!(text.contains("Neuigkeiten\n"));
        assert!(text.contains("[Weiterlesen]"));
        assert!(text.contains("Popular Tags"));
    }

    #[test]
    fn read_time() {
        assert_eq!(read_minutes("", 1500), 0);
        assert_eq!(read_minutes(&"a".repeat(1500), 1500), 1);
        assert_eq!(read_minutes(&"a".repeat(1501), 1500), 2);
        assert_eq!(read_minutes("é", 1500), 1);
    }

    #[test]
    fn dates() {
        assert_eq!(display_date(None), "No date");
        assert_eq!(display_date(Some("2024-03-05")), "March 5, 2024");
        assert_eq!(
            display_date(Some("2023-11-20T08:00:00Z")),
            "November 20, 2023"
        );
        assert_eq!(display_date(Some("soon")), "Invalid Date");
    }
}
