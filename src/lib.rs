//! Blog and certification page content for a compostable plastics company
//! website.
//!
//! Posts come in from a [`PostSource`], get filtered down to the published
//! ones, and are summarized into category counts and a tag list for the blog
//! sidebar.

mod aggregate;
pub use aggregate::{categories, tags, Aggregates, CategoryCount, TagSet};

pub mod certification;

pub mod collection;

mod config;
pub use config::{PageConfig, READ_CHARS_PER_MINUTE};

mod fetch;
pub use fetch::{published, CollectionPosts, Fetched, JsonPosts, PostSource};

pub mod i18n;

pub mod listing;
pub use listing::BlogPage;

mod outline;
pub use outline::{Outline, Section};

pub mod parse;

mod post;
pub use post::{Post, Status};

pub mod table;
