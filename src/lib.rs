//! Svg Liquid: discover SVG icon snippets in a theme workspace and turn a
//! picked icon into a Liquid `{% render %}` tag.
//!
//! The library stays host-agnostic: callers pass the workspace path in and get
//! plain values back. The `svg-liquid` binary is one such host.

pub mod catalog;
pub mod picker;
pub mod selection;

pub use catalog::{
    CatalogOptions, CatalogResult, ICON_NAME_PATTERN, IconEntry, ReadPolicy, SNIPPETS_DIR,
    SVG_MARKER, build_catalog, build_catalog_with, identifier_for, is_icon_file_name,
    is_svg_markup, snippets_dir,
};
pub use picker::{escape_html, no_workspace_document, render_document, svg_data_uri};
pub use selection::{HostNotice, PickerMessage, Selection, render_tag};

use anyhow::Result;
use std::path::Path;
use tracing::warn;

/// Picker page for an optional workspace.
///
/// `None` means the host has nothing open; the builder is not invoked.
/// An unavailable snippets folder still yields a page carrying the error text.
pub fn picker_document(workspace: Option<&Path>, options: &CatalogOptions) -> Result<String> {
    let Some(workspace) = workspace else {
        return Ok(no_workspace_document());
    };
    let result = build_catalog_with(workspace, options)?;
    if result.is_unavailable() {
        warn!("Snippet directory not found.");
    }
    Ok(render_document(&result))
}
