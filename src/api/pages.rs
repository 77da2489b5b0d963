//! Named pages and static assets.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use super::helpers::{file_response, not_found};
use crate::core::config::AppConfig;

/// Request path to file name, resolved against the pages directory.
const PAGES: &[(&str, &str)] = &[
    ("/", "index.html"),
    ("/nn.html", "nn.html"),
    ("/about", "hom.html"),
    ("/answers.html", "answers.html"),
    ("/contact.html", "contact.html"),
    ("/another_page.html", "another_page.html"),
];

const DIRECTORY_INDEX: &str = "index.html";

#[must_use]
pub fn page_file(path: &str) -> Option<&'static str> {
    PAGES
        .iter()
        .find(|(route, _)| *route == path)
        .map(|(_, file)| *file)
}

/// Answers a GET for anything that is not an API route.
///
/// Files in the public directory shadow the named pages; a named page is
/// only read when no public file matches.
pub async fn serve_get(config: &AppConfig, request_path: &str) -> Value {
    match resolve_static_path(&config.public_dir, request_path) {
        Some(file) => {
            if let Some(response) = read_file(&file, request_path).await {
                return response;
            }
        }
        None => warn!(path = %request_path, "Rejected static asset path"),
    }

    if let Some(file_name) = page_file(request_path) {
        if let Some(response) = read_file(&config.pages_dir.join(file_name), request_path).await {
            return response;
        }
    }

    not_found("GET", request_path)
}

/// Maps a request path onto a file under `root`, refusing anything that
/// could leave it. Directory paths resolve to their `index.html`.
#[must_use]
pub fn resolve_static_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = request_path.trim_start_matches('/');
    let trimmed = relative.strip_suffix('/').unwrap_or(relative);

    let mut resolved = root.to_path_buf();
    if !trimmed.is_empty() {
        for segment in trimmed.split('/') {
            if segment.is_empty()
                || segment == "."
                || segment == ".."
                || segment.contains('\\')
                || segment.contains('\0')
            {
                return None;
            }
            resolved.push(segment);
        }
    }

    if relative.is_empty() || relative.ends_with('/') {
        resolved.push(DIRECTORY_INDEX);
    }
    Some(resolved)
}

async fn read_file(file: &Path, request_path: &str) -> Option<Value> {
    match tokio::fs::read(file).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(file).first_or_octet_stream();
            debug!(path = %request_path, file = %file.display(), "Serving file");
            Some(file_response(mime.essence_str(), bytes))
        }
        Err(e) => {
            debug!(path = %request_path, file = %file.display(), error = %e, "File not found");
            None
        }
    }
}
