use std::{
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use compost_site::{CollectionPosts, Fetched, JsonPosts, PostSource};

use crate::IoArgs;

/// Structure that abstracts the input and output of subcommands.
///
/// Input is JSON from stdin or a file, or an IDM post collection that's
/// either a directory or a single `.idm` file.
pub struct IoPipe {
    source: Source,
    dest: PathBuf,
}

impl IoPipe {
    pub fn write_text(&self, output: impl AsRef<str>) -> Result<()> {
        write_text(&self.dest, output)
    }
}

impl PostSource for IoPipe {
    fn fetch(&self) -> Result<Fetched> {
        match &self.source {
            Source::Json(content) => JsonPosts(content.clone()).fetch(),
            Source::Collection(path) => CollectionPosts::new(path).fetch(),
        }
    }
}

/// Write text to a file, or to stdout if `dest` is `-`.
pub fn write_text(dest: &Path, output: impl AsRef<str>) -> Result<()> {
    if dest.to_str() == Some("-") {
        print!("{}", output.as_ref());
    } else if dest.is_dir() {
        bail!("Cannot write text to a directory");
    } else {
        std::fs::write(dest, output.as_ref())
            .with_context(|| format!("cannot write {dest:?}"))?;
    }
    Ok(())
}

impl TryFrom<IoArgs> for IoPipe {
    type Error = anyhow::Error;

    fn try_from(value: IoArgs) -> Result<Self> {
        let source = if value.input.to_str() == Some("-") {
            // Read stdin to string.
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Source::Json(input)
        } else if value.input.is_dir()
            || value.input.extension().is_some_and(|e| e == "idm")
        {
            Source::Collection(value.input.clone())
        } else if value.input.is_file() {
            let content = std::fs::read_to_string(&value.input)
                .with_context(|| format!("cannot read {:?}", value.input))?;
            Source::Json(content)
        } else {
            bail!("Input is not a file or a directory");
        };

        let dest = value.output.unwrap_or_else(|| PathBuf::from("-"));

        Ok(IoPipe { source, dest })
    }
}

enum Source {
    Json(String),
    Collection(PathBuf),
}
