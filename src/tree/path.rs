//! Raw path string to segment list

use std::path::{Component, Path};

use path_clean::PathClean;

/// Split a raw path into its normalized segments.
///
/// The path is cleaned lexically (`a//b/../c` becomes `a/c`), joined with `/`,
/// trimmed, then split. Root markers, drive prefixes and `.` never become
/// segments, so `/`, `.` and the empty string all yield nothing.
pub fn segments(raw: &str) -> Vec<String> {
    let cleaned = Path::new(raw).clean();
    to_slash(&cleaned)
        .trim()
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .map(str::to_string)
        .collect()
}

fn to_slash(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::RootDir | Component::Prefix(_) | Component::CurDir => None,
        })
        .collect();
    parts.join("/")
}
