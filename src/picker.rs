//! Picker document rendering.
//!
//! The picker is a single self-contained HTML page: a search box, one list
//! item per icon, and a small script that filters the list and copies the
//! render tag of the clicked icon. Icon markup comes from the workspace and is
//! treated as untrusted, so it is only ever embedded as an image data URI.

use crate::catalog::{CatalogResult, IconEntry, SNIPPETS_DIR};
use crate::selection::render_tag;

const TITLE: &str = "Svg Liquid";
const NO_WORKSPACE_MESSAGE: &str = "No workspace is open.";

/// Document shown when the host has no workspace to scan.
pub fn no_workspace_document() -> String {
    notice_block(NO_WORKSPACE_MESSAGE)
}

/// Render the picker page for one catalog build.
pub fn render_document(result: &CatalogResult) -> String {
    let body = match result {
        CatalogResult::Unavailable { message, .. } => return notice_block(message),
        CatalogResult::Entries { entries } if entries.is_empty() => format!(
            "<li class=\"empty\">No icons found in {}/.</li>",
            escape_html(SNIPPETS_DIR)
        ),
        CatalogResult::Entries { entries } => {
            let mut items = String::new();
            for entry in entries {
                items.push_str(&list_item(entry));
            }
            items
        }
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
	<head>
		<meta charset="UTF-8">
		<meta name="viewport" content="width=device-width, initial-scale=1.0">
		<title>{TITLE}</title>
		<style>{STYLE}</style>
	</head>
	<body>
		<h2>{TITLE}</h2>
		<input type="text" id="search" placeholder="Search icon">
		<ul class="result">{body}</ul>
		<script>{SCRIPT}</script>
	</body>
</html>
"#
    )
}

fn notice_block(message: &str) -> String {
    format!(
        "<div style=\"padding:10px;\">{}</div>",
        escape_html(message)
    )
}

fn list_item(entry: &IconEntry) -> String {
    format!(
        "<li data-icon=\"{icon}\" data-render=\"{render}\"><img src=\"{src}\" alt=\"{icon}\"> {label}</li>",
        icon = escape_html(&entry.identifier),
        render = escape_html(&render_tag(&entry.identifier)),
        src = svg_data_uri(&entry.raw_content),
        label = escape_html(&entry.file_name),
    )
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Percent-encode SVG markup into a `data:` URI.
///
/// Images loaded this way cannot run scripts or reach the embedding page.
pub fn svg_data_uri(markup: &str) -> String {
    format!(
        "data:image/svg+xml;charset=utf-8,{}",
        urlencoding::encode(markup)
    )
}

const SCRIPT: &str = r#"
const host = typeof acquireVsCodeApi === 'function' ? acquireVsCodeApi() : null;

document.addEventListener('DOMContentLoaded', function () {
	const search = document.getElementById('search');
	search.addEventListener('input', function () {
		const query = search.value.toLowerCase();
		document.querySelectorAll('.result li').forEach(function (item) {
			const text = item.innerText.toLowerCase();
			item.style.display = text.includes(query) ? 'flex' : 'none';
		});
	});

	document.querySelectorAll('.result li[data-icon]').forEach(function (item) {
		item.addEventListener('click', function () {
			const icon = item.dataset.icon;
			navigator.clipboard.writeText(item.dataset.render);
			if (host) {
				host.postMessage({ command: 'alert', text: icon + ' copied to clipboard.' });
			}
		});
	});
});
"#;

const STYLE: &str = r#"
ul {
	list-style-type: none;
	padding: 0;
}
li {
	display: flex;
	align-items: center;
	margin: 10px;
	cursor: pointer;
}
li img {
	width: 24px;
	height: 24px;
	margin-right: 10px;
}
#search {
	padding: 10px;
	min-width: 320px;
	border-radius: 4px;
	border: 1px solid #9d9d9d;
}
"#;
