//! Icon catalog discovery.
//!
//! Icons live under `<workspace>/snippets/` and are recognized purely by name:
//! any entry whose file name contains `icon-` is read, and only content that
//! starts with `<svg` survives into the catalog. Every call rescans the folder;
//! nothing is cached between invocations.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Folder, relative to the workspace root, that holds icon snippets.
pub const SNIPPETS_DIR: &str = "snippets";
/// Substring a file name must contain to be considered an icon.
pub const ICON_NAME_PATTERN: &str = "icon-";
/// Prefix that icon content must start with.
pub const SVG_MARKER: &str = "<svg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One discovered icon.
pub struct IconEntry {
    /// File name up to the first `.`; also the snippet name used in render tags.
    pub identifier: String,
    pub file_name: String,
    pub raw_content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
/// Outcome of one catalog build.
///
/// An inaccessible snippets folder is a value, not an error, so hosts can show
/// the message in place of the listing.
pub enum CatalogResult {
    Entries { entries: Vec<IconEntry> },
    Unavailable {
        path: PathBuf,
        #[serde(serialize_with = "serialize_error_kind")]
        kind: io::ErrorKind,
        message: String,
    },
}

impl CatalogResult {
    /// Entries in enumeration order, or `None` when the folder was unavailable.
    pub fn entries(&self) -> Option<&[IconEntry]> {
        match self {
            CatalogResult::Entries { entries } => Some(entries),
            CatalogResult::Unavailable { .. } => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, CatalogResult::Unavailable { .. })
    }

    /// First entry with the given identifier.
    pub fn find(&self, identifier: &str) -> Option<&IconEntry> {
        self.entries()?
            .iter()
            .find(|entry| entry.identifier == identifier)
    }
}

fn serialize_error_kind<S>(kind: &io::ErrorKind, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&format_args!("{kind:?}"))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// What to do when a matching file cannot be read after enumeration.
pub enum ReadPolicy {
    /// Fail the whole build.
    #[default]
    Abort,
    /// Log the failure and leave the file out.
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogOptions {
    pub read_policy: ReadPolicy,
}

/// Whether a directory entry name follows the icon naming convention.
pub fn is_icon_file_name(name: &str) -> bool {
    name.contains(ICON_NAME_PATTERN)
}

/// Identifier for an icon file: everything before the first `.`.
pub fn identifier_for(file_name: &str) -> &str {
    file_name
        .split_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name)
}

pub fn is_svg_markup(content: &str) -> bool {
    content.starts_with(SVG_MARKER)
}

/// Resolve the snippets folder for a workspace root.
pub fn snippets_dir(base_path: &Path) -> PathBuf {
    base_path.join(SNIPPETS_DIR)
}

/// Build the catalog with default options (abort on unreadable files).
pub fn build_catalog(base_path: &Path) -> Result<CatalogResult> {
    build_catalog_with(base_path, &CatalogOptions::default())
}

/// Scan `<base_path>/snippets` and collect every SVG icon it holds.
///
/// Returns `CatalogResult::Unavailable` when the folder cannot be opened.
/// Errors are reserved for files that fail to read after enumeration under
/// `ReadPolicy::Abort`.
pub fn build_catalog_with(base_path: &Path, options: &CatalogOptions) -> Result<CatalogResult> {
    let folder = snippets_dir(base_path);
    let listing = match fs::read_dir(&folder) {
        Ok(listing) => listing,
        Err(err) => {
            warn!(path = %folder.display(), error = %err, "snippets folder unavailable");
            return Ok(CatalogResult::Unavailable {
                path: folder,
                kind: err.kind(),
                message: err.to_string(),
            });
        }
    };

    let mut entries = Vec::new();
    for dir_entry in listing {
        let dir_entry = match dir_entry {
            Ok(dir_entry) => dir_entry,
            Err(err) => {
                let err = anyhow::Error::new(err)
                    .context(format!("listing {}", folder.display()));
                skip_or_abort(options.read_policy, err)?;
                continue;
            }
        };

        let file_name = dir_entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            debug!(name = ?file_name, "skipping non UTF-8 file name");
            continue;
        };
        if !is_icon_file_name(file_name) {
            continue;
        }

        let path = dir_entry.path();
        let content = match fs::read_to_string(&path)
            .with_context(|| format!("reading icon {}", path.display()))
        {
            Ok(content) => content,
            Err(err) => {
                skip_or_abort(options.read_policy, err)?;
                continue;
            }
        };

        if !is_svg_markup(&content) {
            debug!(file = file_name, "dropping file without svg markup");
            continue;
        }

        entries.push(IconEntry {
            identifier: identifier_for(file_name).to_string(),
            file_name: file_name.to_string(),
            raw_content: content,
        });
    }

    debug!(path = %folder.display(), count = entries.len(), "catalog built");
    Ok(CatalogResult::Entries { entries })
}

fn skip_or_abort(policy: ReadPolicy, err: anyhow::Error) -> Result<()> {
    match policy {
        ReadPolicy::Abort => Err(err),
        ReadPolicy::Skip => {
            warn!("skipping unreadable icon: {err:#}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn identifier_stops_at_first_dot() {
        assert_eq!(identifier_for("icon-home.svg"), "icon-home");
        assert_eq!(identifier_for("icon-home.min.svg"), "icon-home");
        assert_eq!(identifier_for("icon-plain"), "icon-plain");
    }

    #[test]
    fn name_pattern_is_plain_substring() {
        assert!(is_icon_file_name("icon-a.svg"));
        assert!(is_icon_file_name("social-icon-x.liquid"));
        assert!(!is_icon_file_name("Icon-a.svg"));
        assert!(!is_icon_file_name("icon.svg"));
    }

    #[test]
    fn svg_marker_is_case_sensitive() {
        assert!(is_svg_markup("<svg viewBox=\"0 0 1 1\"/>"));
        assert!(!is_svg_markup("<SVG/>"));
        assert!(!is_svg_markup(" <svg/>"));
        assert!(!is_svg_markup("<?xml version=\"1.0\"?><svg/>"));
    }

    #[test]
    fn find_returns_none_when_unavailable() {
        let result = CatalogResult::Unavailable {
            path: PathBuf::from("/nowhere/snippets"),
            kind: io::ErrorKind::NotFound,
            message: "No such file or directory (os error 2)".to_string(),
        };
        assert!(result.find("icon-a").is_none());
        assert!(result.entries().is_none());
    }

    #[test]
    fn snippets_file_instead_of_folder_is_unavailable() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SNIPPETS_DIR), "not a folder").unwrap();
        let result = build_catalog(temp.path()).unwrap();
        match result {
            CatalogResult::Unavailable { message, path, .. } => {
                assert!(!message.is_empty());
                assert_eq!(path, temp.path().join(SNIPPETS_DIR));
            }
            other => panic!("expected unavailable, got {other:?}"),
        }
    }

    #[test]
    fn serializes_status_tag() {
        let result = CatalogResult::Entries {
            entries: vec![IconEntry {
                identifier: "icon-a".to_string(),
                file_name: "icon-a.svg".to_string(),
                raw_content: "<svg/>".to_string(),
            }],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], "entries");
        assert_eq!(value["entries"][0]["identifier"], "icon-a");

        let unavailable = CatalogResult::Unavailable {
            path: PathBuf::from("snippets"),
            kind: io::ErrorKind::NotFound,
            message: "gone".to_string(),
        };
        let value = serde_json::to_value(&unavailable).unwrap();
        assert_eq!(value["status"], "unavailable");
        assert_eq!(value["kind"], "NotFound");
    }
}
