/// Characters of post content per minute of reading time.
pub const READ_CHARS_PER_MINUTE: usize = 1500;

/// Knobs for rendering the blog listing.
#[derive(Clone, Debug)]
pub struct PageConfig {
    /// Locale path segment, eg. "en". Only used for links and text choice.
    pub locale: String,
    /// 1-based page number.
    pub page: usize,
    /// Posts per page, `None` puts everything on one page.
    pub page_size: Option<usize>,
    pub read_chars_per_minute: usize,
    /// Byline shown on every post.
    pub author: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            locale: "en".into(),
            page: 1,
            page_size: None,
            read_chars_per_minute: READ_CHARS_PER_MINUTE,
            author: "Admin".into(),
        }
    }
}

impl PageConfig {
    pub fn is_english(&self) -> bool {
        self.locale == "en"
    }
}
