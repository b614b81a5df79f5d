use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use compost_site::{
    certification::{self, Tab},
    i18n::Catalog,
    published, Aggregates, BlogPage, PageConfig, PostSource,
    READ_CHARS_PER_MINUTE,
};

mod io_pipe;
use io_pipe::IoPipe;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the published posts as JSON.
    Published(IoArgs),

    /// Count published posts per category.
    Categories {
        /// Write CSV instead of aligned text.
        #[arg(long)]
        csv: bool,

        #[command(flatten)]
        io: IoArgs,
    },

    /// List tags used by published posts, each once.
    Tags {
        /// Write CSV instead of one tag per line.
        #[arg(long)]
        csv: bool,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Render the blog listing page.
    Blog {
        /// Locale path segment used in links.
        #[arg(short, long, default_value = "en")]
        locale: String,

        /// Page to show, starting from 1.
        #[arg(short, long, default_value = "1",
              value_parser = clap::value_parser!(u64).range(1..))]
        page: u64,

        /// Posts per page, show every post on one page if not given.
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        page_size: Option<u64>,

        /// Characters of content per minute of reading time.
        #[arg(long, default_value_t = READ_CHARS_PER_MINUTE as u64,
              value_parser = clap::value_parser!(u64).range(1..))]
        read_speed: u64,

        /// IDM file of translated UI texts, `message.id Text` per line.
        #[arg(short, long)]
        messages: Option<PathBuf>,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Render the certifications and testing page.
    Certification {
        /// Tab to open: certifications, testing or standards.
        #[arg(short, long, default_value_t)]
        tab: Tab,

        /// Output file path, defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Published(args) => {
            let io = IoPipe::try_from(args)?;
            let posts = published(io.fetch()?);
            log::info!("{} published post(s)", posts.len());
            let mut out = serde_json::to_string_pretty(&posts)?;
            out.push('\n');
            io.write_text(out)
        }

        Categories { csv, io } => {
            use std::fmt::Write;

            let io = IoPipe::try_from(io)?;
            let categories =
                compost_site::categories(&published(io.fetch()?));

            if csv {
                let mut buf = Vec::new();
                {
                    let mut wtr = csv::Writer::from_writer(&mut buf);
                    wtr.write_record(["category", "count"])?;
                    for c in &categories {
                        wtr.write_record([
                            c.name.as_str(),
                            c.count.to_string().as_str(),
                        ])?;
                    }
                    wtr.flush()?;
                }
                return io.write_text(std::str::from_utf8(&buf)?);
            }

            let mut out = String::new();
            for c in &categories {
                writeln!(out, "{:32} {}", c.name, c.count)?;
            }
            io.write_text(&out)
        }

        Tags { csv, io } => {
            use std::fmt::Write;

            let io = IoPipe::try_from(io)?;
            let tags = compost_site::tags(&published(io.fetch()?));

            if csv {
                let mut buf = Vec::new();
                {
                    let mut wtr = csv::Writer::from_writer(&mut buf);
                    wtr.write_record(["tag"])?;
                    for tag in tags.iter() {
                        wtr.write_record([tag])?;
                    }
                    wtr.flush()?;
                }
                return io.write_text(std::str::from_utf8(&buf)?);
            }

            let mut out = String::new();
            for tag in tags.iter() {
                writeln!(out, "{}", tag)?;
            }
            io.write_text(&out)
        }

        Blog {
            locale,
            page,
            page_size,
            read_speed,
            messages,
            io,
        } => {
            let io = IoPipe::try_from(io)?;
            let catalog = match messages {
                Some(path) => Catalog::load(path)?,
                None => Catalog::default(),
            };
            let config = PageConfig {
                locale,
                page: page as usize,
                page_size: page_size.map(|n| n as usize),
                read_chars_per_minute: read_speed as usize,
                ..Default::default()
            };

            let aggregates = Aggregates::new(published(io.fetch()?));
            log::info!(
                "{} post(s), {} categories, {} tags",
                aggregates.posts.len(),
                aggregates.categories.len(),
                aggregates.tags.len()
            );
            let page = BlogPage::new(&aggregates, &config, &catalog);
            io.write_text(page.to_string())
        }

        Certification { tab, output } => {
            let dest = output.unwrap_or_else(|| PathBuf::from("-"));
            io_pipe::write_text(&dest, certification::page(tab).to_string())
        }
    }
}

/// Standard input/output specification for subcommands.
///
/// By default the subcommand reads JSON from stdin and writes to stdout,
/// this allows pointing to files or post collections instead.
#[derive(Debug, Args, Clone)]
pub struct IoArgs {
    /// Input path: JSON file, collection directory or `.idm` file. Defaults
    /// to JSON from stdin.
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output file path, defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}
