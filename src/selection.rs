//! Icon selection and the picker-to-host message bridge.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Liquid expression that renders the snippet named `identifier`.
///
/// The identifier is inserted verbatim; quotes are not escaped.
pub fn render_tag(identifier: &str) -> String {
    format!("{{% render '{identifier}' %}}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Everything the host needs once an icon is picked.
pub struct Selection {
    pub identifier: String,
    /// Text placed on the clipboard.
    pub clipboard: String,
    /// Confirmation shown to the user.
    pub notification: String,
}

impl Selection {
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            clipboard: render_tag(identifier),
            notification: copied_notice(identifier),
        }
    }
}

fn copied_notice(identifier: &str) -> String {
    format!("{identifier} copied to clipboard.")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
/// Messages posted by the picker script.
pub enum PickerMessage {
    Alert { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostNotice {
    Information(String),
}

impl HostNotice {
    pub fn text(&self) -> &str {
        match self {
            HostNotice::Information(text) => text,
        }
    }
}

impl PickerMessage {
    pub fn parse(raw: &str) -> Result<Self> {
        serde_json::from_str(raw.trim()).context("parsing picker message")
    }

    pub fn into_notice(self) -> HostNotice {
        match self {
            PickerMessage::Alert { text } => HostNotice::Information(text),
        }
    }
}
