//! Post collections stored as a directory of IDM files.

use std::{fmt::Write, fs, path::Path};

use anyhow::{bail, Context, Result};
use lazy_regex::regex;

use crate::Outline;

/// Read a directory of `.idm` post files into a single outline.
///
/// Every file becomes a toplevel section headed by the file stem, with the
/// file contents indented under it. Sections are ordered by file name.
pub fn read_directory(path: impl AsRef<Path>) -> Result<Outline> {
    let path = path.as_ref();
    let mut elts: Vec<(String, String)> = Vec::new();

    for e in fs::read_dir(path)
        .with_context(|| format!("read_directory: cannot read {path:?}"))?
    {
        let e = e?;
        let path = e.path();
        let Some(file_name) = path.file_name() else {
            continue;
        };
        let file_name = file_name.to_string_lossy();

        if file_name.starts_with('.') {
            log::debug!("read_directory: skipping dotfile {path:?}");
            continue;
        }

        if path.is_dir() {
            bail!("read_directory: unexpected subdirectory {path:?}");
        }

        if !path.is_file() {
            // Bail on symlinks.
            bail!("read_directory: unhandled file type {path:?}");
        }

        let Some(stem) = file_name.strip_suffix(".idm") else {
            log::debug!("read_directory: skipping non-post file {path:?}");
            continue;
        };

        if !is_valid_stem(stem) {
            bail!("read_directory: invalid filename {file_name:?}");
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("read_directory: cannot read {path:?}"))?;
        elts.push((stem.to_owned(), text));
    }

    elts.sort_by(|a, b| a.0.cmp(&b.0));

    let mut buf = String::new();
    for (head, text) in elts {
        writeln!(buf, "{head}")?;
        for line in text.lines() {
            if line.trim().is_empty() {
                writeln!(buf)?;
                continue;
            }
            write!(buf, "  ")?;

            let mut ln = line;
            // Turn tab indentation into spaces.
            while let Some(rest) = ln.strip_prefix('\t') {
                write!(buf, "  ")?;
                ln = rest;
            }
            writeln!(buf, "{ln}")?;
        }
    }

    Ok(idm::from_str(&buf)?)
}

/// Read a single IDM file where every toplevel section is a post.
pub fn read_file(path: impl AsRef<Path>) -> Result<Outline> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("read_file: cannot read {path:?}"))?;
    Ok(idm::from_str(&text)?)
}

fn is_valid_stem(s: &str) -> bool {
    regex!(r"^[A-Za-z0-9_-]+$").is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_whitelist() {
        assert!(is_valid_stem("why-compost_2024"));
        assert!(!is_valid_stem("has space"));
        assert!(!is_valid_stem(""));
        assert!(!is_valid_stem("dots.inside"));
    }

    #[test]
    fn directory_posts_ordered_by_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b-second.idm"), ":title Second\n").unwrap();
        fs::write(dir.path().join("a-first.idm"), ":title First\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::write(dir.path().join(".hidden.idm"), ":title Hidden\n").unwrap();

        let outline = read_directory(dir.path()).unwrap();
        let heads: Vec<&str> =
            outline.iter().map(|s| s.head.as_str()).collect();
        assert_eq!(heads, vec!["a-first", "b-second"]);
        assert_eq!(outline.children[0].body.attr("title"), Some("First"));
    }

    #[test]
    fn subdirectory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("drafts")).unwrap();
        assert!(read_directory(dir.path()).is_err());
    }
}
