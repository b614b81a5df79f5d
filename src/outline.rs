use std::fmt;

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An element of an outline with a single headline and nested contents.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
// Serialize using a special form that triggers IDM's raw mode.
#[serde(from = "((String,), Outline)", into = "((String,), Outline)")]
pub struct Section {
    /// First line of the section.
    pub head: String,
    /// Indented outline block under the section head.
    pub body: Outline,
}

impl Section {
    pub fn new(head: impl Into<String>, body: Outline) -> Self {
        Section {
            head: head.into(),
            body,
        }
    }

    /// A section with just a headline and nothing under it.
    pub fn line(head: impl Into<String>) -> Self {
        Section::new(head, Outline::default())
    }
}

impl From<((String,), Outline)> for Section {
    fn from(((head,), body): ((String,), Outline)) -> Self {
        Section { head, body }
    }
}

impl From<Section> for ((String,), Outline) {
    fn from(val: Section) -> Self {
        ((val.head,), val.body)
    }
}

/// An outline block with named attributes and child elements.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
// Serialize using a special form that triggers IDM's raw mode.
#[serde(
    from = "((IndexMap<String, String>,), Vec<Section>)",
    into = "((IndexMap<String, String>,), Vec<Section>)"
)]
pub struct Outline {
    /// Named attributes of the outline.
    pub attrs: IndexMap<String, String>,
    /// Contents of the outline.
    pub children: Vec<Section>,
}

impl Outline {
    pub fn push(&mut self, section: Section) {
        self.children.push(section);
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.children.push(Section::line(line));
    }

    /// Raw string value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(|s| s.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.insert(name.to_owned(), value.into());
    }

    /// Builder form of `set_attr`.
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Get an attribute value deserialized to type.
    pub fn get<'a, T: Deserialize<'a>>(
        &'a self,
        name: &str,
    ) -> Result<Option<T>> {
        let Some(a) = self.attrs.get(name) else {
            return Ok(None);
        };
        Ok(Some(idm::from_str(a)?))
    }

    /// Iterate the toplevel sections.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.children.iter()
    }

    /// Text of the child lines, attributes excluded.
    pub fn body_text(&self) -> String {
        let body = Outline {
            attrs: Default::default(),
            children: self.children.clone(),
        };
        body.to_string()
    }
}

impl FromIterator<Section> for Outline {
    fn from_iter<T: IntoIterator<Item = Section>>(iter: T) -> Self {
        Outline {
            attrs: Default::default(),
            children: iter.into_iter().collect(),
        }
    }
}

impl From<((IndexMap<String, String>,), Vec<Section>)> for Outline {
    fn from(
        ((attrs,), children): ((IndexMap<String, String>,), Vec<Section>),
    ) -> Self {
        Outline { attrs, children }
    }
}

impl From<Outline> for ((IndexMap<String, String>,), Vec<Section>) {
    fn from(val: Outline) -> Self {
        ((val.attrs,), val.children)
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn print(
            f: &mut fmt::Formatter<'_>,
            depth: usize,
            outline: &Outline,
        ) -> fmt::Result {
            for (k, v) in &outline.attrs {
                for _ in 0..depth {
                    write!(f, "  ")?;
                }
                write!(f, ":{k}")?;

                if v.chars().any(|c| c == '\n') {
                    // If value is multi-line, write it indented under the key.
                    writeln!(f)?;
                    for line in v.lines() {
                        for _ in 0..(depth + 1) {
                            write!(f, "  ")?;
                        }
                        writeln!(f, "{line}")?;
                    }
                } else {
                    // Otherwise write the value inline.
                    writeln!(f, " {v}")?;
                }
            }

            for section in &outline.children {
                if section.head.is_empty() {
                    writeln!(f)?;
                } else {
                    for _ in 0..depth {
                        write!(f, "  ")?;
                    }
                    writeln!(f, "{}", section.head)?;
                }
                print(f, depth + 1, &section.body)?;
            }
            Ok(())
        }

        print(f, 0, self)
    }
}
