//! UI text lookup.

use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;

/// A set of translated UI texts keyed by message id, eg. `blog.title`.
///
/// Missing messages fall back to the text given at the lookup site.
#[derive(Clone, Debug, Default)]
pub struct Catalog(IndexMap<String, String>);

impl Catalog {
    /// Load a catalog from an IDM file of `message.id Text` lines.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read message catalog {path:?}"))?;
        Self::parse(&text)
            .with_context(|| format!("bad message catalog {path:?}"))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(Catalog(idm::from_str(text)?))
    }

    /// Translated text for `id`, or `fallback` when there is none.
    pub fn text<'a>(&'a self, id: &str, fallback: &'a str) -> &'a str {
        self.0.get(id).map(|s| s.as_str()).unwrap_or(fallback)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Catalog(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
