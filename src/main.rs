//! trailmap - extract outline trails and section trees from HTML pages

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use trailmap::outline::{
    DEFAULT_INDEX_SELECTOR, DETAILS_INDEX_SELECTOR, flatten_trails, trail_path,
};
use trailmap::{Outline, OutlineLayout};

#[derive(Parser)]
#[command(name = "trailmap")]
#[command(version, about = "Extract outline trails and section trees from HTML pages", long_about = None)]
#[command(after_help = "EXAMPLES:
    trailmap trails page.html                  Print the table of contents as JSON
    trailmap section page.html how_to          Print one section's tree and counts
    trailmap demo page.html --label 詳しく知りたい  Breadcrumb, counts and tree of the first #details entry")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Emit single-line JSON
    #[arg(long, global = true)]
    compact: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(flatten)]
    layout: LayoutArgs,
}

#[derive(Args)]
struct LayoutArgs {
    /// Tag of nested list containers
    #[arg(long, global = true, default_value = "ul")]
    list_tag: String,

    /// Tag of section subtitle headings
    #[arg(long, global = true, default_value = "h4")]
    subtitle_tag: String,
}

#[derive(Subcommand)]
enum Command {
    /// Print the trails of the page's index list
    Trails {
        /// HTML file
        input: String,

        /// CSS selector of the index list
        #[arg(short, long, default_value = DEFAULT_INDEX_SELECTOR)]
        index: String,

        /// Print one href per line instead of JSON
        #[arg(long)]
        hrefs: bool,
    },
    /// Print the title, content tree and entity count of one section
    Section {
        /// HTML file
        input: String,

        /// Anchor name of the section (a leading '#' is ignored)
        href: String,
    },
    /// Print a breadcrumb, entity count and content tree for a section
    Demo {
        /// HTML file
        input: String,

        /// CSS selector of the index list
        #[arg(short, long, default_value = DETAILS_INDEX_SELECTOR)]
        index: String,

        /// Section to show (default: first trail entry)
        #[arg(long)]
        href: Option<String>,

        /// Leading breadcrumb label
        #[arg(long)]
        label: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(quiet: bool) {
    let default = if quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> trailmap::Result<()> {
    let layout = OutlineLayout::new()
        .with_list(&cli.layout.list_tag)
        .with_subtitle(&cli.layout.subtitle_tag);

    match &cli.command {
        Command::Trails {
            input,
            index,
            hrefs,
        } => {
            let outline = Outline::open(input)?.with_layout(layout);
            let trails = outline.trails_at(index)?;
            tracing::info!(entries = flatten_trails(&trails).len(), "extracted trails");

            if *hrefs {
                for node in flatten_trails(&trails) {
                    println!("{}", node.href);
                }
                Ok(())
            } else {
                print_json(&trails, cli.compact)
            }
        }
        Command::Section { input, href } => {
            let outline = Outline::open(input)?.with_layout(layout);
            let section = outline.resolve(href)?;
            print_json(&section, cli.compact)
        }
        Command::Demo {
            input,
            index,
            href,
            label,
        } => {
            let outline = Outline::open(input)?.with_layout(layout);
            let trails = outline.trails_at(index)?;

            let target = match href {
                Some(href) => href.clone(),
                None => trails
                    .first()
                    .map(|t| t.href.clone())
                    .ok_or_else(|| trailmap::Error::MissingElement(format!("{index} > li")))?,
            };
            let section = outline.resolve(&target)?;

            let mut crumbs: Vec<&str> = label.iter().map(String::as_str).collect();
            if let Some(path) = trail_path(&trails, &target) {
                crumbs.extend(path.iter().map(|n| n.title.as_str()));
            }
            crumbs.push(&section.tree_title);

            println!("{}", crumbs.join(" > "));
            println!("count: {}", to_json(&section.count, cli.compact)?);
            println!("tree: {}", to_json(&section.tree, cli.compact)?);
            Ok(())
        }
    }
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> trailmap::Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> trailmap::Result<()> {
    println!("{}", to_json(value, compact)?);
    Ok(())
}
