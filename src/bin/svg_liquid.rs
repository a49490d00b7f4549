//! Command-line host for the icon picker.
//!
//! Usage:
//!   svg-liquid list [--json]
//!   svg-liquid page --out picker.html
//!   svg-liquid render icon-home
//!   echo '{"command":"alert","text":"..."}' | svg-liquid message
//!
//! The workspace defaults to the current directory; pass `--workspace` to
//! point at a theme checkout elsewhere.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::env;
use std::fs;
use std::io::{IsTerminal, Read, stdin};
use std::path::{Path, PathBuf};
use svg_liquid::{
    CatalogOptions, CatalogResult, PickerMessage, ReadPolicy, Selection, build_catalog_with,
    picker_document,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "svg-liquid")]
#[command(about = "Browse SVG icon snippets and print Liquid render tags")]
struct Cli {
    /// Theme workspace containing a snippets/ folder (defaults to the current directory).
    #[arg(long, global = true)]
    workspace: Option<PathBuf>,
    /// Leave out icon files that cannot be read instead of failing.
    #[arg(long, global = true)]
    skip_unreadable: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List discovered icon identifiers.
    List {
        /// Print the full catalog result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Write the picker HTML document.
    Page {
        /// Output file; stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the render tag for an icon.
    Render {
        identifier: String,
        /// Print the clipboard payload and notification as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Read a picker message from stdin and print the host notice.
    Message,
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let options = CatalogOptions {
        read_policy: if cli.skip_unreadable {
            ReadPolicy::Skip
        } else {
            ReadPolicy::Abort
        },
    };
    let workspace = resolve_workspace(cli.workspace);

    match cli.command {
        Command::List { json } => list(workspace.as_deref(), &options, json),
        Command::Page { out } => page(workspace.as_deref(), &options, out),
        Command::Render { identifier, json } => {
            render(workspace.as_deref(), &options, &identifier, json)
        }
        Command::Message => message(),
    }
}

/// Explicit `--workspace` wins; otherwise the current directory, if any.
fn resolve_workspace(flag: Option<PathBuf>) -> Option<PathBuf> {
    match flag {
        Some(path) if path.is_dir() => Some(path),
        Some(path) => {
            warn!(path = %path.display(), "workspace is not a directory");
            None
        }
        None => env::current_dir().ok(),
    }
}

fn require_workspace(workspace: Option<&Path>) -> Result<&Path> {
    match workspace {
        Some(path) => Ok(path),
        None => bail!("No workspace is open."),
    }
}

fn list(workspace: Option<&Path>, options: &CatalogOptions, json: bool) -> Result<()> {
    let workspace = require_workspace(workspace)?;
    let result = build_catalog_with(workspace, options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        if result.is_unavailable() {
            std::process::exit(1);
        }
        return Ok(());
    }

    match &result {
        CatalogResult::Unavailable { message, .. } => bail!("{message}"),
        CatalogResult::Entries { entries } if entries.is_empty() => {
            eprintln!("no icons found");
        }
        CatalogResult::Entries { entries } => {
            for entry in entries {
                println!("{}", entry.identifier);
            }
        }
    }
    Ok(())
}

fn page(workspace: Option<&Path>, options: &CatalogOptions, out: Option<PathBuf>) -> Result<()> {
    let document = picker_document(workspace, options)?;

    match out {
        Some(path) => fs::write(&path, document)
            .with_context(|| format!("writing picker document {}", path.display()))?,
        None => print!("{document}"),
    }
    Ok(())
}

fn render(
    workspace: Option<&Path>,
    options: &CatalogOptions,
    identifier: &str,
    json: bool,
) -> Result<()> {
    let workspace = require_workspace(workspace)?;
    let result = build_catalog_with(workspace, options)?;
    if let CatalogResult::Unavailable { message, .. } = &result {
        bail!("{message}");
    }
    if result.find(identifier).is_none() {
        bail!("unknown icon '{identifier}'");
    }

    let selection = Selection::new(identifier);
    if json {
        println!("{}", serde_json::to_string(&selection)?);
    } else {
        println!("{}", selection.clipboard);
    }
    Ok(())
}

fn message() -> Result<()> {
    let mut buf = String::new();
    stdin()
        .read_to_string(&mut buf)
        .context("reading stdin for picker message")?;
    let notice = PickerMessage::parse(&buf)?.into_notice();
    println!("{}", notice.text());
    Ok(())
}
